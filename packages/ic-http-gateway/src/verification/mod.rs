mod trust_window;
pub use trust_window::*;

mod response_verifier;
pub use response_verifier::*;

mod verification_context;
pub use verification_context::*;

mod validate;
pub use validate::*;
