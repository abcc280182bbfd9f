//! Bodies of the CLI commands

use tracing::info;

use crate::{
    cli::DeployContractsArgs,
    deploy::{chain::ChainProvisioningService, orchestrator, spec::market_suite},
    errors::ScriptError,
    output_writer::write_deployment_addresses,
    summary::format_summary,
    tx::client::RpcProvider,
};

/// Deploy the CRFTD market contract suite
pub async fn deploy_contracts(
    args: DeployContractsArgs,
    client: RpcProvider,
) -> Result<(), ScriptError> {
    let specs = market_suite();
    let service = ChainProvisioningService::new(client, args.artifacts);

    // Deploy them, in order
    info!("Deploying {} contracts...", specs.len());
    let run = orchestrator::run(specs, &service).await?;
    info!("Deployed with success");

    // The summary lines are the machine-readable output, they go to stdout
    for line in format_summary(&run, &args.network) {
        println!("{line}");
    }

    // Record the addresses for the follow-up scripts
    write_deployment_addresses(&args.output, &run)?;

    Ok(())
}
