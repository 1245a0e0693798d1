use crate::{
    AgentHttpCanister, CertificateVerifier, HttpCanisterClient, HttpGatewayClient,
    HttpGatewayResult, ResponseVerifier, RootKeyProvider, VerificationContext,
    DEFAULT_API_GATEWAY,
};
use ic_agent::Agent;
use std::sync::Arc;

/// Configures and builds an [HttpGatewayClient].
#[derive(Default)]
pub struct HttpGatewayClientBuilder {
    agent: Option<Agent>,
    canister_client: Option<Arc<dyn HttpCanisterClient>>,
    root_key: Option<Vec<u8>>,
    fetch_root_key: bool,
    verifier: Option<Arc<dyn ResponseVerifier>>,
}

impl HttpGatewayClientBuilder {
    /// Creates a builder that talks to [DEFAULT_API_GATEWAY] and verifies responses with
    /// [CertificateVerifier] against the agent's root key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Talk to canisters through `agent`. Without an agent or canister client, an agent for
    /// [DEFAULT_API_GATEWAY] is used.
    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.agent = Some(agent);

        self
    }

    /// Talk to canisters through a custom client instead of an agent. A root key must then be
    /// supplied with [with_root_key](Self::with_root_key).
    pub fn with_canister_client(mut self, canister_client: Arc<dyn HttpCanisterClient>) -> Self {
        self.canister_client = Some(canister_client);

        self
    }

    /// Verify certificates against this DER encoded root key instead of the agent's.
    pub fn with_root_key(mut self, root_key: Vec<u8>) -> Self {
        self.root_key = Some(root_key);

        self
    }

    /// Fetch the root key from the replica on first use. Only for local replicas, never enable
    /// this against mainnet.
    pub fn with_fetch_root_key(mut self, fetch_root_key: bool) -> Self {
        self.fetch_root_key = fetch_root_key;

        self
    }

    /// Verify query responses with a custom verifier.
    pub fn with_verifier(mut self, verifier: Arc<dyn ResponseVerifier>) -> Self {
        self.verifier = Some(verifier);

        self
    }

    /// Builds the client.
    ///
    /// An explicit root key takes precedence over the agent's. A custom canister client without
    /// a root key yields a client whose every verification fails with
    /// [RootKeyUnavailable](crate::HttpGatewayError::RootKeyUnavailable).
    ///
    /// Fails if no agent was given and the default agent cannot be created.
    pub fn build(self) -> HttpGatewayResult<HttpGatewayClient> {
        let verifier = self
            .verifier
            .unwrap_or_else(|| Arc::new(CertificateVerifier));

        let (canister, root_key_provider): (
            Arc<dyn HttpCanisterClient>,
            Option<Arc<dyn RootKeyProvider>>,
        ) = match self.canister_client {
            Some(canister_client) => (canister_client, None),
            None => {
                let agent = match self.agent {
                    Some(agent) => agent,
                    None => Agent::builder().with_url(DEFAULT_API_GATEWAY).build()?,
                };
                let agent_canister = Arc::new(AgentHttpCanister::new(agent, self.fetch_root_key));
                let canister: Arc<dyn HttpCanisterClient> = agent_canister.clone();
                let root_key_provider: Arc<dyn RootKeyProvider> = agent_canister;

                (canister, Some(root_key_provider))
            }
        };

        let context = match (self.root_key, root_key_provider) {
            (Some(root_key), _) => VerificationContext::with_root_key(root_key, verifier),
            (None, Some(root_key_provider)) => {
                VerificationContext::with_root_key_provider(root_key_provider, verifier)
            }
            (None, None) => VerificationContext::without_root_key(verifier),
        };

        Ok(HttpGatewayClient::new(canister, Arc::new(context)))
    }
}
