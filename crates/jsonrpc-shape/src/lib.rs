//! jsonrpc-shape — classify JSON-RPC 2.0 messages as request, notification,
//! or response, or report exactly why they are none of these.

pub mod classify;
pub mod error;
pub mod response;
pub mod types;

pub use classify::{classify, classify_bytes, classify_value};
pub use error::{ShapeError, ShapeResult};
pub use response::{error_response_for, recover_id, ErrorResponse};
pub use types::*;
