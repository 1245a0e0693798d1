use anyhow::Context;
use candid::Principal;
use clap::Parser;
use ic_agent::Agent;
use ic_http_gateway::{HttpGatewayClient, DEFAULT_API_GATEWAY};
use std::net::SocketAddr;

/// Serves a single canister over plain HTTP, verifying every response it serves.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct GatewayConfig {
    /// The canister to serve.
    #[arg(long, env = "IC_GATEWAY_CANISTER_ID", value_parser = parse_canister_id)]
    pub canister_id: Principal,

    /// The Internet Computer API boundary node or replica to send calls to.
    #[arg(long, env = "IC_GATEWAY_API_URL", default_value = DEFAULT_API_GATEWAY)]
    pub api_url: String,

    /// The address to listen on.
    #[arg(long, env = "IC_GATEWAY_LISTEN_ADDR", default_value = "127.0.0.1:3000")]
    pub listen_addr: SocketAddr,

    /// Hex encoded DER root key to verify certificates against, instead of the mainnet key.
    #[arg(long, env = "IC_GATEWAY_ROOT_KEY", value_parser = parse_root_key)]
    pub root_key: Option<RootKey>,

    /// Fetch the root key from the replica. Only for local replicas.
    #[arg(long, env = "IC_GATEWAY_FETCH_ROOT_KEY", default_value = "false")]
    pub fetch_root_key: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootKey(pub Vec<u8>);

fn parse_canister_id(canister_id: &str) -> anyhow::Result<Principal> {
    Principal::from_text(canister_id).with_context(|| format!("invalid canister id {canister_id}"))
}

fn parse_root_key(root_key: &str) -> anyhow::Result<RootKey> {
    let root_key = hex::decode(root_key.trim()).context("root key is not valid hex")?;
    anyhow::ensure!(!root_key.is_empty(), "root key is empty");

    Ok(RootKey(root_key))
}

impl GatewayConfig {
    pub fn build_client(&self) -> anyhow::Result<HttpGatewayClient> {
        let agent = Agent::builder()
            .with_url(self.api_url.as_str())
            .build()
            .context("failed to create agent")?;

        let mut builder = HttpGatewayClient::builder()
            .with_agent(agent)
            .with_fetch_root_key(self.fetch_root_key);
        if let Some(RootKey(root_key)) = &self.root_key {
            builder = builder.with_root_key(root_key.clone());
        }

        builder.build().context("failed to create gateway client")
    }
}
