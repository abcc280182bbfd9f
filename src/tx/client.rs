//! RPC client construction for the deploy scripts

use std::env;

use alloy::{
    hex,
    network::{Ethereum, EthereumWallet},
    primitives::B256,
    providers::{
        fillers::{ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, WalletFiller},
        Identity, Provider, ProviderBuilder, ReqwestProvider,
    },
    signers::local::PrivateKeySigner,
};
use reqwest::{Client, Url};
use tracing::info;

use crate::{constants::DEFAULT_RPC, errors::ScriptError};

/// Re-export from alloy recommend filler
type RecommendFiller =
    JoinFill<JoinFill<JoinFill<Identity, GasFiller>, NonceFiller>, ChainIdFiller>;

/// An alloy provider that signs with a local private key
/// & interfaces with the RPC endpoint over HTTP
pub type RpcProvider = FillProvider<
    JoinFill<RecommendFiller, WalletFiller<EthereumWallet>>,
    ReqwestProvider,
    alloy::transports::http::Http<Client>,
    Ethereum,
>;

/// Sets up the client every deployment goes through, reading the private key
/// and the RPC url from the environment.
pub async fn create_rpc_provider() -> Result<RpcProvider, ScriptError> {
    // Find our private key and map it to a B256
    let raw_key = env::var("PRIVATE_KEY")
        .map_err(|_| ScriptError::ClientInitialization(String::from("PRIVATE_KEY is not set")))?;
    let key_bytes =
        hex::decode(raw_key).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    if key_bytes.len() != B256::len_bytes() {
        return Err(ScriptError::ClientInitialization(String::from(
            "PRIVATE_KEY must be a 32 byte hex string",
        )));
    }
    let private_key = B256::from_slice(&key_bytes);

    // Create our signer
    let signer = PrivateKeySigner::from_bytes(&private_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let wallet = EthereumWallet::from(signer);

    let rpc_url = env::var("RPC_URL")
        .unwrap_or_else(|_| String::from(DEFAULT_RPC))
        .parse::<Url>()
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    // Create our provider with the rpc client + signer
    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_http(rpc_url);

    // Fetch chain id, checking the endpoint is reachable on the way
    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    info!("Built client on chain ID: {}", chain_id);

    Ok(provider)
}
