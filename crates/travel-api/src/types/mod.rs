//! Request and response types exchanged with the travelling backend.
//!
//! Field names follow the backend's camelCase JSON contract.

mod requests;
mod responses;

pub use requests::*;
pub use responses::*;
