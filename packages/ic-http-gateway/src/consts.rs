/// The API boundary node used when no agent is provided.
pub const DEFAULT_API_GATEWAY: &str = "https://icp-api.io";

/// The maximum age of a certificate, relative to the time of verification, before it is
/// considered stale. Five minutes, expressed in nanoseconds.
pub const MAX_CERT_TIME_OFFSET_NS: u128 = 300_000_000_000;

/// The minimum response verification version that the gateway accepts.
/// Version 1 does not certify status codes or headers and is therefore rejected.
pub const MIN_VERIFICATION_VERSION: u8 = 2;
