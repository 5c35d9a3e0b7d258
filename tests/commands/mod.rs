//! Command-level tests.

mod test_create;
mod test_init_session;
