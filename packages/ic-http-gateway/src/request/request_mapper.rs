use crate::{CanisterHttpRequest, HttpGatewayError, HttpGatewayResult};
use bytes::Bytes;
use http::Request;
use http_body_util::BodyExt;

/// An inbound HTTP request whose body has been fully read.
pub type HttpGatewayRequest = Request<Bytes>;

/// Reads the whole body of an inbound request. Partially streamed request bodies are not
/// supported by the HTTP interface of canisters, so this must happen before mapping.
pub async fn collect_request<B>(request: Request<B>) -> HttpGatewayResult<HttpGatewayRequest>
where
    B: http_body::Body,
    B::Error: std::fmt::Display,
{
    let (parts, body) = request.into_parts();
    let body = body
        .collect()
        .await
        .map_err(|e| HttpGatewayError::RequestBodyError(e.to_string()))?
        .to_bytes();

    Ok(Request::from_parts(parts, body))
}

/// Maps an inbound request to the record sent to the canister.
///
/// Only the path and query of the URL are kept, canisters have no notion of host routing.
/// Headers keep their order and duplicates. Header values that are not valid UTF-8 are passed
/// on lossily, validating them is left to the canister.
pub fn map_request(request: &HttpGatewayRequest, certificate_version: u16) -> CanisterHttpRequest {
    let uri = request.uri();
    let mut url = uri.path().to_string();
    if let Some(query) = uri.query() {
        url.push('?');
        url.push_str(query);
    }

    CanisterHttpRequest {
        url,
        method: request.method().to_string(),
        body: request.body().to_vec(),
        headers: request
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect(),
        certificate_version: Some(certificate_version),
    }
}
