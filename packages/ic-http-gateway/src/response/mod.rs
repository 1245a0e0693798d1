mod http_gateway_response;
pub use http_gateway_response::*;

mod response_mapper;
pub use response_mapper::*;
