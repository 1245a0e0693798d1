use candid::{types::value::IDLValue, Principal};
use ic_http_certification::HeaderField;

/// An HTTP request in the shape expected by a canister's `http_request` and
/// `http_request_update` methods.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanisterHttpRequest {
    /// Request URL, without scheme or authority, i.e. "/index.html?lang=en".
    pub url: String,

    /// HTTP request method, i.e. "GET".
    pub method: String,

    /// Request body as an array of bytes.
    pub body: Vec<u8>,

    /// HTTP request headers, in the order they were received.
    pub headers: Vec<HeaderField>,

    /// The highest response verification version the gateway supports. Only present on query
    /// calls, where it tells the canister which certification scheme to use.
    pub certificate_version: Option<u16>,
}

impl CanisterHttpRequest {
    /// Returns the request to replay as an update call. Update calls never negotiate a
    /// certificate version.
    pub fn for_update_call(&self) -> CanisterHttpRequest {
        CanisterHttpRequest {
            certificate_version: None,
            ..self.clone()
        }
    }
}

/// An HTTP response as returned by a canister's `http_request` and `http_request_update` methods.
#[derive(Clone, Debug, PartialEq)]
pub struct CanisterHttpResponse {
    /// HTTP response status code.
    pub status_code: u16,

    /// HTTP response headers.
    pub headers: Vec<HeaderField>,

    /// HTTP response body as an array of bytes. If a streaming strategy is present, this is
    /// only the first chunk of the body.
    pub body: Vec<u8>,

    /// Whether the request should be replayed as an update call. When `Some(true)`, the rest of
    /// this response is provisional and must not be served.
    pub upgrade: Option<bool>,

    /// The continuation for the remaining chunks of the body, if any.
    pub streaming_strategy: Option<StreamingStrategy>,
}

impl CanisterHttpResponse {
    /// Whether the canister asked for the request to be upgraded to an update call.
    pub fn is_upgrade(&self) -> bool {
        self.upgrade == Some(true)
    }
}

/// The opaque token a canister hands out to continue a streamed response.
pub type StreamingToken = IDLValue;

/// The canister method to call with a [StreamingToken] to fetch the next chunk of a response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamingCallback {
    /// The canister that serves the next chunks.
    pub canister_id: Principal,

    /// The name of the query method that serves the next chunks.
    pub method: String,
}

/// A streaming continuation attached to a canister response. The gateway does not resolve it,
/// it is handed to the caller untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamingStrategy {
    /// Where to send the token.
    pub callback: StreamingCallback,

    /// The token identifying the next chunk.
    pub token: StreamingToken,
}
