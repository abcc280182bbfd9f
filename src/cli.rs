//! Definitions of CLI arguments and commands for deploy scripts

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::{
    commands::deploy_contracts,
    constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_OUTPUT_FILE},
    errors::ScriptError,
    tx::client::RpcProvider,
};

/// Scripts for deploying & verifying the CRFTD marketplace contracts
#[derive(Parser)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The possible CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy all the contracts
    DeployContracts(DeployContractsArgs),
}

impl Command {
    /// Run the command
    pub async fn run(self, client: RpcProvider) -> Result<(), ScriptError> {
        match self {
            Command::DeployContracts(args) => {
                info!("Deploying contracts...");
                deploy_contracts(args, client).await?;

                Ok(())
            }
        }
    }
}

/// Deploy the full contract suite
#[derive(Args)]
pub struct DeployContractsArgs {
    /// Name of the target network, used in the verification commands
    #[arg(short, long, default_value = "localhost")]
    pub network: String,

    /// Directory holding the compiled contract artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,

    /// File the deployed addresses are recorded in
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,
}
