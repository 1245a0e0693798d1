use crate::{
    protocol::process_request, HttpCanisterClient, HttpGatewayRequest, HttpGatewayResponse,
    VerificationContext,
};
use candid::Principal;

/// The arguments of a single request through the gateway.
#[derive(Debug)]
pub struct HttpGatewayRequestArgs {
    /// The request to make to the canister.
    pub canister_request: HttpGatewayRequest,

    /// The id of the canister to make a request to.
    pub canister_id: Principal,
}

/// Builds and sends a single request through the gateway.
pub struct HttpGatewayRequestBuilder<'a> {
    request_args: HttpGatewayRequestArgs,
    canister: &'a dyn HttpCanisterClient,
    context: &'a VerificationContext,
    skip_verification: bool,
}

impl<'a> HttpGatewayRequestBuilder<'a> {
    pub(crate) fn new(
        request_args: HttpGatewayRequestArgs,
        canister: &'a dyn HttpCanisterClient,
        context: &'a VerificationContext,
    ) -> Self {
        Self {
            request_args,
            canister,
            context,
            skip_verification: false,
        }
    }

    /// Serve query responses without verifying them. Only meant for canisters that are
    /// deliberately served without certification, such as on raw domains.
    pub fn unsafe_set_skip_verification(mut self, skip_verification: bool) -> Self {
        self.skip_verification = skip_verification;

        self
    }

    /// Runs the protocol for this request.
    pub async fn send(self) -> HttpGatewayResponse {
        process_request(
            self.canister,
            self.context,
            self.request_args.canister_request,
            self.request_args.canister_id,
            self.skip_verification,
        )
        .await
    }
}
