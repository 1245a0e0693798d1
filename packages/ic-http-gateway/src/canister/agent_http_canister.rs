use crate::{
    CanisterHttpRequest, CanisterHttpResponse, HttpCanisterClient, HttpGatewayResult,
    RootKeyProvider, StreamingCallback, StreamingStrategy,
};
use async_trait::async_trait;
use candid::Principal;
use ic_agent::Agent;
use ic_utils::{
    call::{AsyncCall, SyncCall},
    interfaces::{
        http_request::{
            CallbackStrategy, HeaderField, HttpResponse as AgentHttpResponse,
            StreamingStrategy as AgentStreamingStrategy,
        },
        HttpRequestCanister,
    },
};
use log::trace;
use std::borrow::Cow;

/// An [HttpCanisterClient] that talks to the Internet Computer through an [Agent].
#[derive(Clone)]
pub struct AgentHttpCanister {
    agent: Agent,
    fetch_root_key: bool,
}

impl AgentHttpCanister {
    /// Creates a client backed by the given agent. If `fetch_root_key` is set, the root key is
    /// fetched from the replica the first time it is needed. This must only be used against
    /// local replicas, on mainnet the agent's built-in root key is the trust anchor.
    pub fn new(agent: Agent, fetch_root_key: bool) -> Self {
        Self {
            agent,
            fetch_root_key,
        }
    }

    /// The agent backing this client.
    pub fn agent(&self) -> &Agent {
        &self.agent
    }
}

fn to_header_fields<'a>(request: &CanisterHttpRequest) -> Vec<HeaderField<'a>> {
    request
        .headers
        .iter()
        .map(|(name, value)| HeaderField(Cow::Owned(name.clone()), Cow::Owned(value.clone())))
        .collect()
}

fn from_agent_response(response: AgentHttpResponse) -> CanisterHttpResponse {
    let streaming_strategy = match response.streaming_strategy {
        Some(AgentStreamingStrategy::Callback(CallbackStrategy { callback, token })) => {
            Some(StreamingStrategy {
                callback: StreamingCallback {
                    canister_id: callback.0.principal,
                    method: callback.0.method,
                },
                token: token.0,
            })
        }
        _ => None,
    };

    CanisterHttpResponse {
        status_code: response.status_code,
        headers: response
            .headers
            .into_iter()
            .map(|HeaderField(name, value)| (name.into_owned(), value.into_owned()))
            .collect(),
        body: response.body,
        upgrade: response.upgrade,
        streaming_strategy,
    }
}

#[async_trait]
impl HttpCanisterClient for AgentHttpCanister {
    async fn query_call(
        &self,
        canister_id: &Principal,
        request: &CanisterHttpRequest,
    ) -> HttpGatewayResult<CanisterHttpResponse> {
        trace!(
            "http_request query to {}: {} {}",
            canister_id,
            request.method,
            request.url
        );

        let canister = HttpRequestCanister::create(&self.agent, *canister_id);
        let (response,) = canister
            .http_request(
                &request.method,
                &request.url,
                to_header_fields(request).into_iter(),
                &request.body,
                request.certificate_version.as_ref(),
            )
            .call()
            .await?;

        Ok(from_agent_response(response))
    }

    async fn update_call(
        &self,
        canister_id: &Principal,
        request: &CanisterHttpRequest,
    ) -> HttpGatewayResult<CanisterHttpResponse> {
        trace!(
            "http_request_update call to {}: {} {}",
            canister_id,
            request.method,
            request.url
        );

        let canister = HttpRequestCanister::create(&self.agent, *canister_id);
        let (response,) = canister
            .http_request_update(
                &request.method,
                &request.url,
                to_header_fields(request).into_iter(),
                &request.body,
            )
            .call_and_wait()
            .await?;

        Ok(from_agent_response(response))
    }
}

#[async_trait]
impl RootKeyProvider for AgentHttpCanister {
    async fn root_key(&self) -> HttpGatewayResult<Vec<u8>> {
        if self.fetch_root_key {
            self.agent.fetch_root_key().await?;
        }

        Ok(self.agent.read_root_key())
    }
}
