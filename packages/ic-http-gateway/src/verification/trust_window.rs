use crate::{MAX_CERT_TIME_OFFSET_NS, MIN_VERIFICATION_VERSION};

/// The bounds within which a certified response is trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustWindow<'a> {
    /// The id of the canister that must have certified the response.
    pub canister_id: &'a [u8],

    /// The DER encoded root key of the Internet Computer.
    pub root_key: &'a [u8],

    /// How far the certificate's timestamp may be from the time of verification.
    pub max_cert_time_offset_ns: u128,

    /// The lowest response verification version that is accepted.
    pub min_verification_version: u8,
}

impl<'a> TrustWindow<'a> {
    /// Creates a trust window for the given canister with the gateway's fixed bounds.
    pub fn new(canister_id: &'a [u8], root_key: &'a [u8]) -> Self {
        Self {
            canister_id,
            root_key,
            max_cert_time_offset_ns: MAX_CERT_TIME_OFFSET_NS,
            min_verification_version: MIN_VERIFICATION_VERSION,
        }
    }
}
