use crate::errors::ServerError;
use crate::templates;
use astra::{Body, Response, ResponseBuilder};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML error page
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();
    if status >= 500 {
        tracing::error!(error = %err, "request failed");
    } else {
        tracing::debug!(error = %err, status, "request rejected");
    }

    let message = match &err {
        ServerError::NotFound => "We couldn't find the page you were looking for.".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        // Don't leak internals to the browser.
        _ => "Something went wrong on our end.".to_string(),
    };

    let page = templates::pages::error_page(status, &message).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
