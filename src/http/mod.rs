//! HTTP plumbing shared by both servers: header constants, middleware and
//! the JSON error format

pub mod error_response;
pub mod headers;
pub mod middleware;
pub mod middleware_stack;

pub use error_response::{ErrorResponse, ErrorResponseExt};
pub use middleware_stack::MiddlewareStack;
