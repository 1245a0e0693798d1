use crate::{CanisterHttpRequest, CanisterHttpResponse, HttpGatewayResult};
use async_trait::async_trait;
use candid::Principal;

/// The calls the gateway makes against a canister implementing the HTTP interface.
#[async_trait]
pub trait HttpCanisterClient: Send + Sync {
    /// Calls the canister's `http_request` method as a query. The result is not backed by
    /// consensus and must be verified before it is served.
    async fn query_call(
        &self,
        canister_id: &Principal,
        request: &CanisterHttpRequest,
    ) -> HttpGatewayResult<CanisterHttpResponse>;

    /// Calls the canister's `http_request_update` method as an update and waits for the
    /// result. The result went through consensus and is trusted as-is.
    async fn update_call(
        &self,
        canister_id: &Principal,
        request: &CanisterHttpRequest,
    ) -> HttpGatewayResult<CanisterHttpResponse>;
}

/// Supplies the root key that certificates are verified against.
#[async_trait]
pub trait RootKeyProvider: Send + Sync {
    /// Returns the DER encoded root key.
    async fn root_key(&self) -> HttpGatewayResult<Vec<u8>>;
}
