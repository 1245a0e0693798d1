mod certification;

pub use certification::*;

use async_trait::async_trait;
use bytes::Bytes;
use candid::Principal;
use http::Request;
use http_body_util::BodyExt;
use ic_agent::AgentError;
use ic_http_gateway::{
    CanisterHttpRequest, CanisterHttpResponse, CanisterResponse, HttpCanisterClient,
    HttpGatewayClient, HttpGatewayError, HttpGatewayRequest, HttpGatewayResult, ResponseVerifier,
    TrustWindow,
};
use ic_response_verification::{
    types::{VerificationInfo, VerifiedResponse},
    ResponseVerificationError,
};
use parking_lot::Mutex;
use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

pub const ROOT_KEY: &[u8] = b"test root key";

pub fn canister_id() -> Principal {
    Principal::from_text("qoctq-giaaa-aaaaa-aaaea-cai").unwrap()
}

pub fn now_ns() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}

pub fn get_request(uri: &str) -> HttpGatewayRequest {
    Request::builder().uri(uri).body(Bytes::new()).unwrap()
}

pub fn canister_response(
    status_code: u16,
    body: &str,
    upgrade: Option<bool>,
) -> CanisterHttpResponse {
    CanisterHttpResponse {
        status_code,
        headers: vec![("Content-Type".to_string(), "text/plain".to_string())],
        body: body.as_bytes().to_vec(),
        upgrade,
        streaming_strategy: None,
    }
}

pub async fn body_bytes(response: CanisterResponse) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

#[derive(Debug, Clone, PartialEq)]
pub enum CanisterCall {
    Query(CanisterHttpRequest),
    Update(CanisterHttpRequest),
}

/// How the mock canister answers a call.
pub enum MockReply {
    Respond(CanisterHttpResponse),
    Fail(fn() -> AgentError),
    /// Answers with the request it received, encoded into the response body and headers.
    Echo,
}

fn reply(
    reply: &MockReply,
    request: &CanisterHttpRequest,
) -> HttpGatewayResult<CanisterHttpResponse> {
    match reply {
        MockReply::Respond(response) => Ok(response.clone()),
        MockReply::Fail(error) => Err(HttpGatewayError::AgentError(error())),
        MockReply::Echo => Ok(CanisterHttpResponse {
            status_code: 200,
            headers: request.headers.clone(),
            body: format!("{} {}\n", request.method, request.url)
                .into_bytes()
                .into_iter()
                .chain(request.body.iter().copied())
                .collect(),
            upgrade: None,
            streaming_strategy: None,
        }),
    }
}

/// A canister double that records every call it receives.
pub struct MockHttpCanister {
    query_reply: MockReply,
    update_reply: MockReply,
    calls: Mutex<Vec<CanisterCall>>,
}

impl MockHttpCanister {
    pub fn new(query_reply: MockReply, update_reply: MockReply) -> Self {
        Self {
            query_reply,
            update_reply,
            calls: Mutex::new(vec![]),
        }
    }

    pub fn calls(&self) -> Vec<CanisterCall> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl HttpCanisterClient for MockHttpCanister {
    async fn query_call(
        &self,
        _canister_id: &Principal,
        request: &CanisterHttpRequest,
    ) -> HttpGatewayResult<CanisterHttpResponse> {
        self.calls.lock().push(CanisterCall::Query(request.clone()));

        reply(&self.query_reply, request)
    }

    async fn update_call(
        &self,
        _canister_id: &Principal,
        request: &CanisterHttpRequest,
    ) -> HttpGatewayResult<CanisterHttpResponse> {
        self.calls.lock().push(CanisterCall::Update(request.clone()));

        reply(&self.update_reply, request)
    }
}

enum Verdict {
    Accept,
    Reject,
    /// Accepts, vouching only for the listed headers.
    CertifyHeaders(Vec<(String, String)>),
}

/// A verifier double with a fixed verdict that records the time it was asked to verify at.
pub struct MockVerifier {
    verdict: Verdict,
    verified_at_ns: Mutex<Vec<u128>>,
}

impl MockVerifier {
    fn with_verdict(verdict: Verdict) -> Self {
        Self {
            verdict,
            verified_at_ns: Mutex::new(vec![]),
        }
    }

    pub fn accepting() -> Self {
        Self::with_verdict(Verdict::Accept)
    }

    pub fn rejecting() -> Self {
        Self::with_verdict(Verdict::Reject)
    }

    pub fn certifying_headers(headers: &[(&str, &str)]) -> Self {
        Self::with_verdict(Verdict::CertifyHeaders(
            headers
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        ))
    }

    pub fn calls(&self) -> usize {
        self.verified_at_ns.lock().len()
    }

    pub fn verified_at_ns(&self) -> Vec<u128> {
        self.verified_at_ns.lock().clone()
    }
}

impl ResponseVerifier for MockVerifier {
    fn verify(
        &self,
        _request: &CanisterHttpRequest,
        response: &CanisterHttpResponse,
        trust_window: &TrustWindow<'_>,
        current_time_ns: u128,
    ) -> HttpGatewayResult<VerificationInfo> {
        assert_eq!(trust_window.root_key, ROOT_KEY);
        self.verified_at_ns.lock().push(current_time_ns);

        let response = match &self.verdict {
            Verdict::Accept => None,
            Verdict::Reject => return Err(ResponseVerificationError::MissingCertificate.into()),
            Verdict::CertifyHeaders(headers) => Some(VerifiedResponse {
                status_code: Some(response.status_code),
                headers: headers.clone(),
                body: response.body.clone(),
            }),
        };

        Ok(VerificationInfo {
            response,
            verification_version: 2,
        })
    }
}

pub fn gateway_client(
    canister: Arc<MockHttpCanister>,
    verifier: Arc<MockVerifier>,
) -> HttpGatewayClient {
    HttpGatewayClient::builder()
        .with_canister_client(canister)
        .with_root_key(ROOT_KEY.to_vec())
        .with_verifier(verifier)
        .build()
        .unwrap()
}
