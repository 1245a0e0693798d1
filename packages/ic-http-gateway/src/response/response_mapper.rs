use crate::{
    CanisterHttpResponse, CanisterResponse, HttpGatewayError, HttpGatewayResponseBody,
    HttpGatewayResult, StreamingStrategy,
};
use http::{Response, StatusCode};
use ic_agent::{
    agent::{RejectCode, RejectResponse},
    AgentError,
};

/// Maps an accepted canister response to the response served to the caller.
///
/// Status and headers are copied as-is. The `upgrade` flag has already been acted upon and is
/// dropped, the streaming strategy is split off and returned next to the response.
pub fn map_response(
    response: CanisterHttpResponse,
) -> HttpGatewayResult<(CanisterResponse, Option<StreamingStrategy>)> {
    let status_code = StatusCode::from_u16(response.status_code)?;

    let mut response_builder = Response::builder().status(status_code);
    for (name, value) in &response.headers {
        response_builder = response_builder.header(name, value);
    }
    let canister_response = response_builder.body(HttpGatewayResponseBody::from(response.body))?;

    Ok((canister_response, response.streaming_strategy))
}

pub(crate) fn create_err_response(status_code: StatusCode, msg: &str) -> CanisterResponse {
    let mut response = Response::new(HttpGatewayResponseBody::from(msg.as_bytes().to_vec()));
    *response.status_mut() = status_code;

    response
}

/// Builds the error response served in place of the canister's response.
pub(crate) fn handle_error(error: &HttpGatewayError) -> CanisterResponse {
    match error {
        HttpGatewayError::AgentError(e) => handle_agent_error(e),

        HttpGatewayError::InvalidStatusCodeError(e) => create_err_response(
            StatusCode::BAD_GATEWAY,
            &format!("Failed to parse response status code: {}", e),
        ),

        HttpGatewayError::ResponseVerificationError(e) => create_err_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &format!("Response verification failed: {}", e),
        ),

        HttpGatewayError::RootKeyUnavailable => create_err_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Response verification failed: the root key is not available",
        ),

        HttpGatewayError::RequestBodyError(e) => create_err_response(
            StatusCode::BAD_REQUEST,
            &format!("Failed to parse request: {}", e),
        ),

        HttpGatewayError::HttpError(e) => create_err_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &format!("Failed to build response: {}", e),
        ),
    }
}

fn handle_agent_error(error: &AgentError) -> CanisterResponse {
    match error {
        // Turn all `DestinationInvalid`s into 404
        AgentError::CertifiedReject(RejectResponse {
            reject_code: RejectCode::DestinationInvalid,
            reject_message,
            ..
        })
        | AgentError::UncertifiedReject(RejectResponse {
            reject_code: RejectCode::DestinationInvalid,
            reject_message,
            ..
        }) => create_err_response(StatusCode::NOT_FOUND, reject_message),

        // No information is leaked here, the same reply is available to anyone calling the canister directly.
        AgentError::CertifiedReject(response) | AgentError::UncertifiedReject(response) => {
            create_err_response(
                StatusCode::BAD_GATEWAY,
                &format!(
                    "Replica Error: reject code {:?}, message {}, error code {:?}",
                    response.reject_code, response.reject_message, response.error_code,
                ),
            )
        }

        AgentError::ResponseSizeExceededLimit() => create_err_response(
            StatusCode::INSUFFICIENT_STORAGE,
            "Response size exceeds limit",
        ),

        _ => create_err_response(
            StatusCode::BAD_GATEWAY,
            &format!("Failed to reach the canister: {}", error),
        ),
    }
}
