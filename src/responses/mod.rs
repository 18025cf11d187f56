pub mod assets;
pub mod errors;
pub mod html;
pub mod json;

pub use errors::{error_to_response, ResultResp};

// Normal HTML response
pub use assets::stylesheet_response;
pub use html::{html_response, see_other};
pub use json::json_response;
