use crate::{
    HttpCanisterClient, HttpGatewayClientBuilder, HttpGatewayRequestArgs,
    HttpGatewayRequestBuilder, VerificationContext,
};
use std::sync::Arc;

/// A client for the HTTP gateway protocol. Cloning is cheap, clones share the canister client
/// and the verification context.
#[derive(Clone)]
pub struct HttpGatewayClient {
    pub(crate) canister: Arc<dyn HttpCanisterClient>,
    pub(crate) context: Arc<VerificationContext>,
}

impl HttpGatewayClient {
    pub(crate) fn new(
        canister: Arc<dyn HttpCanisterClient>,
        context: Arc<VerificationContext>,
    ) -> Self {
        Self { canister, context }
    }

    /// Returns a builder for configuring a new client.
    pub fn builder() -> HttpGatewayClientBuilder {
        HttpGatewayClientBuilder::new()
    }

    /// Starts a request to a canister.
    pub fn request(&self, args: HttpGatewayRequestArgs) -> HttpGatewayRequestBuilder<'_> {
        HttpGatewayRequestBuilder::new(args, self.canister.as_ref(), self.context.as_ref())
    }
}
