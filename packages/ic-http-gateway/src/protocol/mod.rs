mod handler;
pub use handler::*;
