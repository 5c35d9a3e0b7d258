//! Command implementations
//!
//! Each module corresponds to a subcommand in the CLI.

pub mod create;
pub mod init_session;

pub use create::run as create_run;
pub use init_session::run as init_session_run;
