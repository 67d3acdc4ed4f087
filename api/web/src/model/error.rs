use actix_web::http::StatusCode;
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResHtml {
    status: u16,
    reason: String,
    message: String,
}

impl ErrorResHtml {
    pub fn new(status_code: &StatusCode, message: &str) -> Self {
        Self {
            status: status_code.as_u16(),
            reason: status_code
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_owned(),
            message: message.to_owned(),
        }
    }
}
