mod canister_http_types;
pub use canister_http_types::*;

mod http_canister_client;
pub use http_canister_client::*;

mod agent_http_canister;
pub use agent_http_canister::*;
