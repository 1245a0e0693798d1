use crate::{HttpGatewayError, StreamingStrategy};
use bytes::Bytes;
use http::Response;
use http_body_util::Full;

/// The body of an HTTP gateway response.
pub type HttpGatewayResponseBody = Full<Bytes>;

/// The HTTP response handed back to the gateway's caller.
pub type CanisterResponse = Response<HttpGatewayResponseBody>;

/// A response from the HTTP gateway.
#[derive(Debug)]
pub struct HttpGatewayResponse {
    /// The response to serve. On failure this is an error response generated by the gateway,
    /// it never contains a canister body that failed verification.
    pub canister_response: CanisterResponse,

    /// The streaming continuation returned by the canister alongside the served response,
    /// untouched. The gateway does not fetch the remaining chunks.
    pub streaming_strategy: Option<StreamingStrategy>,

    /// Additional metadata regarding the response.
    pub metadata: HttpGatewayResponseMetadata,
}

/// Additional metadata regarding the response.
#[derive(Debug)]
pub struct HttpGatewayResponseMetadata {
    /// Whether the original query call was upgraded to an update call.
    pub upgraded_to_update_call: bool,

    /// The version of response verification that was used to verify the response.
    /// If the protocol fails before getting to the verification step, or the
    /// original query call is upgraded to an update call, this field will be `None`.
    pub response_verification_version: Option<u16>,

    /// The internal error that resulted in the HTTP response being an error response.
    pub internal_error: Option<HttpGatewayError>,
}
