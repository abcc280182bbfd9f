//! Chain-backed provisioning: artifact loading, constructor-argument encoding
//! and the deployment transaction itself

use std::{fs, path::PathBuf};

use alloy::{
    dyn_abi::DynSolValue,
    hex,
    network::TransactionBuilder,
    primitives::{keccak256, Address, Bytes},
    providers::{Provider, WalletProvider},
    rpc::types::eth::TransactionRequest,
};
use ethers::{prelude::U256, utils::rlp};
use tracing::info;

use super::{
    orchestrator::{ProvisioningService, ResourceFactory},
    spec::ArgValue,
};
use crate::{errors::ScriptError, tx::client::RpcProvider};

/// Provisioning service deploying hardhat-built artifacts through an RPC client
pub struct ChainProvisioningService {
    /// The RPC client, with signer attached
    client: RpcProvider,
    /// Directory the compiled contract artifacts live in
    artifacts_dir: PathBuf,
}

impl ChainProvisioningService {
    /// Build a service reading artifacts from the given directory
    pub fn new(client: RpcProvider, artifacts_dir: PathBuf) -> Self {
        Self {
            client,
            artifacts_dir,
        }
    }

    /// Read the creation bytecode out of the artifact for the given contract
    fn read_bytecode(&self, contract: &str) -> Result<Vec<u8>, ScriptError> {
        let artifact_path = self.artifacts_dir.join(format!("{contract}.json"));
        let raw = fs::read_to_string(&artifact_path).map_err(|e| {
            ScriptError::ContractArtifact(format!("{}: {}", artifact_path.display(), e))
        })?;

        let parsed = json::parse(&raw).map_err(|e| ScriptError::ContractArtifact(e.to_string()))?;
        let bytecode = parsed["bytecode"].as_str().ok_or_else(|| {
            ScriptError::ContractArtifact(format!("no bytecode in artifact for {contract}"))
        })?;

        hex::decode(bytecode).map_err(|e| ScriptError::ContractArtifact(e.to_string()))
    }
}

impl ProvisioningService for ChainProvisioningService {
    type Factory = ContractFactory;

    async fn create_factory(&self, contract: &str) -> Result<ContractFactory, ScriptError> {
        let bytecode = self.read_bytecode(contract)?;

        Ok(ContractFactory {
            bytecode,
            client: self.client.clone(),
        })
    }
}

/// A factory deploying instances of one compiled contract
pub struct ContractFactory {
    /// Creation bytecode from the contract artifact
    bytecode: Vec<u8>,
    /// The RPC client, with signer attached
    client: RpcProvider,
}

impl ResourceFactory for ContractFactory {
    async fn deploy(&self, args: &[ArgValue]) -> Result<Address, ScriptError> {
        // Constructor arguments go ABI-encoded behind the creation bytecode
        let mut init_code = self.bytecode.clone();
        init_code.extend(encode_constructor_args(args));

        // Predict the address up front, some nodes omit it from the receipt
        let predicted_address = predict_contract_address(&self.client).await?;

        // Build the deploy tx
        let tx_request = TransactionRequest::default().with_deploy_code(Bytes::from(init_code));

        // Send it
        let pending_tx = self
            .client
            .send_transaction(tx_request)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
        info!("Pending deploy transaction... {}", pending_tx.tx_hash());

        // Wait for the transaction to be included.
        let receipt = pending_tx
            .get_receipt()
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

        Ok(receipt.contract_address.unwrap_or(predicted_address))
    }
}

/// ABI-encode the constructor arguments; an empty list encodes to nothing
fn encode_constructor_args(args: &[ArgValue]) -> Vec<u8> {
    if args.is_empty() {
        return Vec::new();
    }

    let values: Vec<DynSolValue> = args.iter().map(ArgValue::to_sol_value).collect();
    DynSolValue::Tuple(values).abi_encode_params()
}

/// Predict the address of the next contract deployed by the client's signer
async fn predict_contract_address(client: &RpcProvider) -> Result<Address, ScriptError> {
    // Get signer
    let signer = client.default_signer_address();

    // Get the signer nonce
    let signer_nonce = client
        .get_transaction_count(signer)
        .await
        .map_err(|e| ScriptError::NonceFetching(e.to_string()))?;

    // Ethers RLP
    let mut stream = rlp::RlpStream::new();
    stream.begin_list(2);
    stream.append(&signer.to_vec());
    stream.append(&U256::from(signer_nonce));
    let hash = keccak256(stream.out());

    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&hash[12..]);
    Ok(Address::from(bytes))
}
