use actix_web::{
    http::{
        header::{self, ContentType},
        StatusCode,
    },
    HttpResponse, HttpResponseBuilder,
};
use ep_error::Error;
use serde::Serialize;

use crate::context::ApiWebCtx;

pub mod error;
pub mod project;

pub struct Response;

impl Response {
    pub fn render<T: Serialize>(
        ctx: &ApiWebCtx,
        status_code: &StatusCode,
        template: &str,
        data: &T,
    ) -> HttpResponse {
        match ctx.template().render(template, data) {
            Ok(body) => Self::html(status_code, body),
            Err(err) => Self::error(&Error::Internal(err)),
        }
    }

    pub fn html(status_code: &StatusCode, body: String) -> HttpResponse {
        HttpResponseBuilder::new(*status_code)
            .content_type(ContentType::html())
            .body(body)
    }

    pub fn redirect(location: &str) -> HttpResponse {
        HttpResponse::Found()
            .insert_header((header::LOCATION, location))
            .finish()
    }

    /// Plain-text error response; the error handler middleware turns it into a page.
    pub fn error(err: &Error) -> HttpResponse {
        let (status_code, message) = match err {
            Error::Validation(msg) => (StatusCode::BAD_REQUEST, msg.to_owned()),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
            Error::Internal(err) => {
                ep_log::error(None, format!("{err:#}"));
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong while handling this request".to_owned(),
                )
            }
        };

        HttpResponseBuilder::new(status_code)
            .content_type(ContentType::plaintext())
            .body(message)
    }
}
