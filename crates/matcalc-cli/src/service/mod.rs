//! JSON request/response boundary over `matcalc-core`.
//!
//! Requests use the field names `matrix`, `matrix_a`/`matrix_b` and
//! `coefficients`/`constants`. Core errors are passed through as their
//! `Display` message.
pub mod handler;
pub mod request;
pub mod response;

pub use handler::handle;
pub use request::{MatrixRequest, Operation, SystemRequest, TwoMatricesRequest};
pub use response::Response;
