pub mod errors;
pub mod html;

pub use crate::errors::ResultResp;
pub use errors::error_to_response;

// Normal HTML / text responses
pub use html::{html_response, text_response};
