use crate::{CanisterHttpRequest, CanisterHttpResponse, HttpGatewayResult, TrustWindow};
use ic_http_certification::{HttpRequest, HttpResponse};
use ic_response_verification::{types::VerificationInfo, verify_request_response_pair};

/// Decides whether a query response was certified by the canister.
pub trait ResponseVerifier: Send + Sync {
    /// Verifies `response` as the answer to `request` at `current_time_ns`, within the bounds of
    /// `trust_window`. Returns an error if the response must not be served.
    ///
    /// A returned [VerificationInfo::response] holds the certified parts of the response and is
    /// what gets served. `None` means the whole response is certified.
    fn verify(
        &self,
        request: &CanisterHttpRequest,
        response: &CanisterHttpResponse,
        trust_window: &TrustWindow<'_>,
        current_time_ns: u128,
    ) -> HttpGatewayResult<VerificationInfo>;
}

/// The [ResponseVerifier] implementing the Internet Computer's response verification
/// algorithm, backed by [ic_response_verification].
#[derive(Debug, Clone, Copy, Default)]
pub struct CertificateVerifier;

impl ResponseVerifier for CertificateVerifier {
    fn verify(
        &self,
        request: &CanisterHttpRequest,
        response: &CanisterHttpResponse,
        trust_window: &TrustWindow<'_>,
        current_time_ns: u128,
    ) -> HttpGatewayResult<VerificationInfo> {
        let request = HttpRequest {
            method: request.method.clone(),
            url: request.url.clone(),
            headers: request.headers.clone(),
            body: request.body.clone(),
        };
        let response = HttpResponse {
            status_code: response.status_code,
            headers: response.headers.clone(),
            body: response.body.clone(),
            upgrade: None,
        };

        let verification_info = verify_request_response_pair(
            request,
            response,
            trust_window.canister_id,
            current_time_ns,
            trust_window.max_cert_time_offset_ns,
            trust_window.root_key,
            trust_window.min_verification_version,
        )?;

        Ok(verification_info)
    }
}
