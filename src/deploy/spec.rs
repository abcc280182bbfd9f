//! Resource specifications and the record of a deployment run

use std::fmt::{self, Display, Formatter};

use alloy::{
    dyn_abi::DynSolValue,
    primitives::{ruint::UintTryFrom, Address, U256},
};

/// A primitive constructor-argument value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// A UTF-8 string argument
    Str(String),
    /// An unsigned integer argument
    Uint(U256),
    /// A boolean argument
    Bool(bool),
    /// An address argument
    Addr(Address),
}

impl ArgValue {
    /// String argument shorthand
    pub fn string(value: &str) -> Self {
        ArgValue::Str(value.to_string())
    }

    /// Unsigned integer argument shorthand
    pub fn uint<T>(value: T) -> Self
    where
        U256: UintTryFrom<T>,
    {
        ArgValue::Uint(U256::from(value))
    }

    /// The ABI value this argument encodes to
    pub(crate) fn to_sol_value(&self) -> DynSolValue {
        match self {
            ArgValue::Str(value) => DynSolValue::String(value.clone()),
            ArgValue::Uint(value) => DynSolValue::Uint(*value, 256),
            ArgValue::Bool(value) => DynSolValue::Bool(*value),
            ArgValue::Addr(value) => DynSolValue::Address(*value),
        }
    }
}

impl Display for ArgValue {
    // The bare token the argument contributes to a verification command
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Str(value) => write!(f, "{}", value),
            ArgValue::Uint(value) => write!(f, "{}", value),
            ArgValue::Bool(value) => write!(f, "{}", value),
            ArgValue::Addr(value) => write!(f, "{}", value),
        }
    }
}

/// What to deploy: a named resource and its constructor arguments
#[derive(Debug, Clone)]
pub struct ResourceSpec {
    /// Identifier the resource is reported under
    pub name: String,
    /// Name of the contract a factory is created for
    pub contract: String,
    /// Ordered constructor arguments, passed through unchanged
    pub constructor_arguments: Vec<ArgValue>,
}

impl ResourceSpec {
    /// Build a spec
    pub fn new(name: &str, contract: &str, constructor_arguments: Vec<ArgValue>) -> Self {
        Self {
            name: name.to_string(),
            contract: contract.to_string(),
            constructor_arguments,
        }
    }
}

/// A resource the network confirmed, bound to its chain-assigned address
#[derive(Debug, Clone)]
pub struct DeployedResource {
    /// The spec the resource was provisioned from
    pub spec: ResourceSpec,
    /// The chain-assigned address
    pub address: Address,
}

/// The ordered outcome of one full deployment run, one entry per spec
#[derive(Debug, Default)]
pub struct DeploymentRun {
    /// Deployed resources, in spec order
    resources: Vec<DeployedResource>,
}

impl DeploymentRun {
    /// An empty run with room for the given number of resources
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            resources: Vec::with_capacity(capacity),
        }
    }

    /// Append the next deployed resource
    pub(crate) fn push(&mut self, resource: DeployedResource) {
        self.resources.push(resource);
    }

    /// Number of deployed resources
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the run deployed anything
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Iterate the resources in deployment order
    pub fn iter(&self) -> impl Iterator<Item = &DeployedResource> {
        self.resources.iter()
    }
}

/// The CRFTD market suite, in deployment order: the mock token first, then
/// the marketplace, then the registry taking the market fee.
pub fn market_suite() -> Vec<ResourceSpec> {
    vec![
        ResourceSpec::new(
            "token",
            "MockERC20",
            vec![
                ArgValue::string("Token"),
                ArgValue::string("TKN"),
                ArgValue::uint(18u64),
            ],
        ),
        ResourceSpec::new("marketplace", "Marketplace", vec![]),
        ResourceSpec::new("marketRegistry", "CRFTDRegistry", vec![ArgValue::uint(100u64)]),
    ]
}
