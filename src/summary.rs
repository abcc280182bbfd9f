//! Human-readable reporting of a deployment run.
//!
//! Formatting is pure so it can be exercised without a network or console;
//! the caller decides where the lines go.

use alloy::primitives::Address;

use crate::{
    constants::VERIFY_COMMAND,
    deploy::spec::{ArgValue, DeploymentRun},
};

/// The full post-deployment report: one address line per resource, then one
/// verification command per resource, both groups in deployment order
pub fn format_summary(run: &DeploymentRun, network: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(run.len() * 2);

    for resource in run.iter() {
        lines.push(format!("{}: \"{}\",", resource.spec.name, resource.address));
    }

    for resource in run.iter() {
        lines.push(format_verify_command(
            resource.address,
            &resource.spec.constructor_arguments,
            network,
        ));
    }

    lines
}

/// One command a third party can run to check the deployed bytecode against
/// the published source, given the original constructor arguments
pub fn format_verify_command(address: Address, args: &[ArgValue], network: &str) -> String {
    let mut command = format!("{VERIFY_COMMAND} {address}");

    for arg in args {
        command.push(' ');
        command.push_str(&arg.to_string());
    }

    command.push_str(" --network ");
    command.push_str(network);

    command
}
