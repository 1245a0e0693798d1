use crate::{
    handle_error, map_request, map_response, validate, CanisterHttpResponse, HttpCanisterClient,
    HttpGatewayRequest, HttpGatewayResponse, HttpGatewayResponseMetadata, HttpGatewayResult,
    VerificationContext,
};
use candid::Principal;
use ic_response_verification::types::VerificationInfo;
use log::{debug, warn};

/// Runs the HTTP gateway protocol for a single request.
///
/// The request is sent to the canister as a query. If the canister asks for an upgrade the
/// request is replayed as an update call and the update's response is served without
/// verification. Otherwise the query response is verified, unless `skip_verification` is set,
/// and served only if verification succeeds.
///
/// Failures never surface as errors: they are turned into an error response, with the cause
/// recorded in the response metadata.
pub async fn process_request(
    canister: &dyn HttpCanisterClient,
    context: &VerificationContext,
    request: HttpGatewayRequest,
    canister_id: Principal,
    skip_verification: bool,
) -> HttpGatewayResponse {
    let mut metadata = HttpGatewayResponseMetadata {
        upgraded_to_update_call: false,
        response_verification_version: None,
        internal_error: None,
    };

    let result = fetch_response(
        canister,
        context,
        &request,
        canister_id,
        skip_verification,
        &mut metadata,
    )
    .await
    .and_then(map_response);

    match result {
        Ok((canister_response, streaming_strategy)) => HttpGatewayResponse {
            canister_response,
            streaming_strategy,
            metadata,
        },
        Err(error) => {
            warn!("Request to canister {} failed: {}", canister_id, error);

            metadata.response_verification_version = None;
            HttpGatewayResponse {
                canister_response: handle_error(&error),
                streaming_strategy: None,
                metadata: HttpGatewayResponseMetadata {
                    internal_error: Some(error),
                    ..metadata
                },
            }
        }
    }
}

/// Returns the canister response that may be served, either the certified parts of a verified
/// query response or the response of the update call the query was upgraded to.
async fn fetch_response(
    canister: &dyn HttpCanisterClient,
    context: &VerificationContext,
    request: &HttpGatewayRequest,
    canister_id: Principal,
    skip_verification: bool,
    metadata: &mut HttpGatewayResponseMetadata,
) -> HttpGatewayResult<CanisterHttpResponse> {
    let canister_request = map_request(request, context.certificate_version());

    debug!(
        "Sending query call to canister {}: {} {}",
        canister_id, canister_request.method, canister_request.url
    );
    let query_response = canister.query_call(&canister_id, &canister_request).await?;

    if query_response.is_upgrade() {
        debug!(
            "Canister {} requested an upgrade to an update call",
            canister_id
        );
        metadata.upgraded_to_update_call = true;

        let update_response = canister
            .update_call(&canister_id, &canister_request.for_update_call())
            .await?;

        // the update call went through consensus, there is nothing left to upgrade to
        if update_response.is_upgrade() {
            warn!(
                "Canister {} requested another upgrade from an update call, ignoring",
                canister_id
            );
        }

        return Ok(update_response);
    }

    if skip_verification {
        debug!(
            "Skipping verification of the response from canister {}",
            canister_id
        );
        return Ok(query_response);
    }

    let verification_info =
        validate(context, &canister_id, &canister_request, &query_response).await?;
    debug!(
        "Verified the response from canister {} with version {}",
        canister_id, verification_info.verification_version
    );
    metadata.response_verification_version = Some(verification_info.verification_version);

    Ok(certified_response(query_response, verification_info))
}

/// Narrows a verified query response down to what the verifier vouched for. Headers the
/// certificate does not cover are dropped. A verifier that reports no response certified the
/// whole of it.
fn certified_response(
    mut response: CanisterHttpResponse,
    verification_info: VerificationInfo,
) -> CanisterHttpResponse {
    let Some(verified_response) = verification_info.response else {
        return response;
    };

    response.headers = verified_response.headers;
    response.body = verified_response.body;
    if let Some(status_code) = verified_response.status_code {
        response.status_code = status_code;
    }

    response
}
