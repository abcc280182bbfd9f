//! Constants used in the deploy scripts

/// Default RPC endpoint
pub const DEFAULT_RPC: &str = "http://127.0.0.1:8545";

/// Prefix of the emitted contract verification commands
pub const VERIFY_COMMAND: &str = "npx hardhat verify";

/// Default directory holding the compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Default file the deployed addresses are recorded in
pub const DEFAULT_OUTPUT_FILE: &str = "deployed.json";
