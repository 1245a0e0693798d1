mod request_mapper;
pub use request_mapper::*;

mod http_gateway_request_builder;
pub use http_gateway_request_builder::*;
