//! RPC plumbing shared by every command

pub mod client;
