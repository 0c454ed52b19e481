pub mod headers;
pub mod json;

pub use headers::review_response;
pub use json::*;
