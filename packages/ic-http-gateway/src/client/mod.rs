mod http_gateway_client;
pub use http_gateway_client::*;

mod http_gateway_client_builder;
pub use http_gateway_client_builder::*;
