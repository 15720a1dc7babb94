pub mod errors;
pub mod html;
pub mod redirect;

pub use errors::{error_to_response, ResultResp};

// Normal HTML response
pub use html::{html_response, html_response_with_status};
pub use redirect::redirect_response;
