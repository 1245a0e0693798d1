use crate::{
    CanisterHttpRequest, CanisterHttpResponse, HttpGatewayResult, TrustWindow, VerificationContext,
};
use candid::Principal;
use ic_response_verification::types::VerificationInfo;
use log::trace;
use std::time::{SystemTime, UNIX_EPOCH};

/// Verifies a query response from `canister_id` against the request that produced it.
///
/// The current time is sampled here, after the response has arrived, so the time spent waiting
/// on the canister counts against the certificate's freshness.
pub async fn validate(
    context: &VerificationContext,
    canister_id: &Principal,
    request: &CanisterHttpRequest,
    response: &CanisterHttpResponse,
) -> HttpGatewayResult<VerificationInfo> {
    let root_key = context.root_key().await?;
    let trust_window = TrustWindow::new(canister_id.as_slice(), root_key);
    let current_time_ns = get_current_time_in_ns();

    trace!(
        "Verifying response from canister {} at {}ns",
        canister_id,
        current_time_ns
    );
    context
        .verifier()
        .verify(request, response, &trust_window, current_time_ns)
}

fn get_current_time_in_ns() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_nanos())
        .unwrap_or_default()
}
