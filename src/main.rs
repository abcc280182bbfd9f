use clap::Parser;
use crftd_scripts::{cli::Cli, errors::ScriptError, tx::client::create_rpc_provider};
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    // Load .env file
    dotenv().ok();

    let Cli { command } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    // Build our RPC client with signer
    let client = create_rpc_provider().await?;

    command.run(client).await
}
