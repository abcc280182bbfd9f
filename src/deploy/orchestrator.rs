//! Sequential deployment of an ordered list of resource specs

use alloy::primitives::Address;
use tracing::info;

use super::spec::{ArgValue, DeployedResource, DeploymentRun, ResourceSpec};
use crate::errors::ScriptError;

/// A handle able to provision new instances of one named contract
#[allow(async_fn_in_trait)]
pub trait ResourceFactory {
    /// Deploy one instance, suspending until the network confirms it
    async fn deploy(&self, args: &[ArgValue]) -> Result<Address, ScriptError>;
}

/// External service turning resource specs into deployed resources
#[allow(async_fn_in_trait)]
pub trait ProvisioningService {
    /// The factory handle this service hands out
    type Factory: ResourceFactory;

    /// Create a factory for the given contract name
    async fn create_factory(&self, contract: &str) -> Result<Self::Factory, ScriptError>;
}

/// Deploy every spec in order, failing fast on the first error.
///
/// Later contracts may reference earlier ones once live, so no two
/// deployments are ever in flight at once. A single attempt per resource: the
/// first failure aborts the remaining sequence, with no rollback of what
/// already landed.
pub async fn run<P: ProvisioningService>(
    specs: Vec<ResourceSpec>,
    service: &P,
) -> Result<DeploymentRun, ScriptError> {
    let mut deployment = DeploymentRun::with_capacity(specs.len());

    for spec in specs {
        let factory = service.create_factory(&spec.contract).await?;
        let address = factory.deploy(&spec.constructor_arguments).await?;
        info!("Deployed {} at {}", spec.name, address);

        deployment.push(DeployedResource { spec, address });
    }

    Ok(deployment)
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::VecDeque};

    use alloy::primitives::address;

    use super::*;
    use crate::deploy::spec::market_suite;

    /// A provisioning service replaying one scripted outcome per deployment,
    /// `None` meaning the deployment fails
    struct ScriptedService {
        /// Outcomes handed out in order
        outcomes: RefCell<VecDeque<Option<Address>>>,
        /// Contract names factories were requested for
        factories_created: RefCell<Vec<String>>,
    }

    impl ScriptedService {
        /// Service scripted with the given outcomes
        fn new(outcomes: Vec<Option<Address>>) -> Self {
            Self {
                outcomes: RefCell::new(outcomes.into()),
                factories_created: RefCell::new(Vec::new()),
            }
        }
    }

    impl ProvisioningService for ScriptedService {
        type Factory = ScriptedFactory;

        async fn create_factory(&self, contract: &str) -> Result<ScriptedFactory, ScriptError> {
            self.factories_created
                .borrow_mut()
                .push(contract.to_string());

            let outcome = self
                .outcomes
                .borrow_mut()
                .pop_front()
                .expect("more factories requested than scripted");
            Ok(ScriptedFactory { outcome })
        }
    }

    /// Factory resolving to its scripted outcome
    struct ScriptedFactory {
        /// The address to hand out, or `None` to fail
        outcome: Option<Address>,
    }

    impl ResourceFactory for ScriptedFactory {
        async fn deploy(&self, _args: &[ArgValue]) -> Result<Address, ScriptError> {
            self.outcome
                .ok_or_else(|| ScriptError::ContractDeployment(String::from("scripted failure")))
        }
    }

    const TOKEN: Address = address!("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    const MARKET: Address = address!("fB6916095ca1df60bB79Ce92cE3Ea74c37c5d359");
    const REGISTRY: Address = address!("dbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB");

    #[tokio::test]
    async fn deploys_every_spec_in_order() {
        let service = ScriptedService::new(vec![Some(TOKEN), Some(MARKET), Some(REGISTRY)]);

        let run = run(market_suite(), &service).await.unwrap();

        assert_eq!(run.len(), 3);
        let reported: Vec<(&str, Address)> = run
            .iter()
            .map(|resource| (resource.spec.name.as_str(), resource.address))
            .collect();
        assert_eq!(
            reported,
            [
                ("token", TOKEN),
                ("marketplace", MARKET),
                ("marketRegistry", REGISTRY),
            ]
        );

        // One factory per spec, requested by contract name, in spec order
        assert_eq!(
            *service.factories_created.borrow(),
            ["MockERC20", "Marketplace", "CRFTDRegistry"]
        );
    }

    #[tokio::test]
    async fn aborts_on_first_failure() {
        let service = ScriptedService::new(vec![Some(TOKEN), None, Some(REGISTRY)]);

        let result = run(market_suite(), &service).await;

        assert!(matches!(result, Err(ScriptError::ContractDeployment(_))));
        // The registry was never attempted once the marketplace failed
        assert_eq!(
            *service.factories_created.borrow(),
            ["MockERC20", "Marketplace"]
        );
    }

    #[tokio::test]
    async fn empty_spec_list_is_an_empty_run() {
        let service = ScriptedService::new(vec![]);

        let run = run(Vec::new(), &service).await.unwrap();

        assert!(run.is_empty());
    }

    #[tokio::test]
    async fn rerun_keeps_the_shape() {
        let first_service = ScriptedService::new(vec![Some(TOKEN), Some(MARKET), Some(REGISTRY)]);
        let second_service = ScriptedService::new(vec![Some(REGISTRY), Some(TOKEN), Some(MARKET)]);

        let first = run(market_suite(), &first_service).await.unwrap();
        let second = run(market_suite(), &second_service).await.unwrap();

        // Addresses differ run to run, the shape must not
        assert_eq!(first.len(), second.len());
        let names = |deployment: &DeploymentRun| -> Vec<String> {
            deployment
                .iter()
                .map(|resource| resource.spec.name.clone())
                .collect()
        };
        assert_eq!(names(&first), names(&second));
    }
}
