use clap::Parser;
use notchclip_lib::{bootstrap, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    bootstrap::run(cli).await
}
