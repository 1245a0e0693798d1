use crate::{HttpGatewayError, HttpGatewayResult, ResponseVerifier, RootKeyProvider};
use ic_response_verification::MAX_VERIFICATION_VERSION;
use log::debug;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// The process-wide state shared read-only by every request: the root key, the certificate
/// version negotiated with canisters and the response verifier.
///
/// The root key is resolved at most once. Requests racing on the first use wait for the same
/// initialization, and a failed initialization is retried by the next request.
pub struct VerificationContext {
    root_key: OnceCell<Vec<u8>>,
    root_key_provider: Option<Arc<dyn RootKeyProvider>>,
    certificate_version: u16,
    verifier: Arc<dyn ResponseVerifier>,
}

impl VerificationContext {
    /// Creates a context with a known root key.
    pub fn with_root_key(root_key: Vec<u8>, verifier: Arc<dyn ResponseVerifier>) -> Self {
        Self {
            root_key: OnceCell::new_with(Some(root_key)),
            root_key_provider: None,
            certificate_version: u16::from(MAX_VERIFICATION_VERSION),
            verifier,
        }
    }

    /// Creates a context that obtains the root key from `root_key_provider` on first use.
    pub fn with_root_key_provider(
        root_key_provider: Arc<dyn RootKeyProvider>,
        verifier: Arc<dyn ResponseVerifier>,
    ) -> Self {
        Self {
            root_key: OnceCell::new(),
            root_key_provider: Some(root_key_provider),
            certificate_version: u16::from(MAX_VERIFICATION_VERSION),
            verifier,
        }
    }

    /// Creates a context without a root key. Every verification fails with
    /// [HttpGatewayError::RootKeyUnavailable], only responses of upgraded calls or requests
    /// skipping verification can be served.
    pub fn without_root_key(verifier: Arc<dyn ResponseVerifier>) -> Self {
        Self {
            root_key: OnceCell::new(),
            root_key_provider: None,
            certificate_version: u16::from(MAX_VERIFICATION_VERSION),
            verifier,
        }
    }

    /// The certificate version sent with query calls, the highest version the verifier supports.
    pub fn certificate_version(&self) -> u16 {
        self.certificate_version
    }

    /// The verifier that query responses are checked with.
    pub fn verifier(&self) -> &dyn ResponseVerifier {
        self.verifier.as_ref()
    }

    /// Returns the root key, resolving it first if this is the first use.
    pub async fn root_key(&self) -> HttpGatewayResult<&[u8]> {
        let root_key = self
            .root_key
            .get_or_try_init(|| async {
                let Some(root_key_provider) = &self.root_key_provider else {
                    return Err(HttpGatewayError::RootKeyUnavailable);
                };

                debug!("Resolving the root key");
                root_key_provider.root_key().await
            })
            .await?;

        Ok(root_key.as_slice())
    }
}
