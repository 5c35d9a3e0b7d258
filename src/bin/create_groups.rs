//! Group creation binary (same flow as `group_creator create`).

use group_creator::commands::create;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    create::run().await?;
    Ok(())
}
