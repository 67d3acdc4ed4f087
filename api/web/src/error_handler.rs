use actix_web::{
    body::{to_bytes, MessageBody},
    dev::ServiceResponse,
    http::{header, StatusCode},
    middleware::ErrorHandlerResponse,
    web, HttpResponseBuilder, Result,
};
use futures::executor;

use crate::{
    context::ApiWebCtx,
    model::{error::ErrorResHtml, Response},
};

/// Wraps 4xx/5xx responses in the HTML error page.
///
/// The Basic auth challenge and responses that already carry HTML are passed
/// through untouched.
pub fn default_error_handler<B: MessageBody>(
    svc_res: ServiceResponse<B>,
) -> Result<ErrorHandlerResponse<B>> {
    if svc_res.status() == StatusCode::UNAUTHORIZED || is_html(&svc_res) {
        return Ok(ErrorHandlerResponse::Response(svc_res.map_into_left_body()));
    }

    let (req, res) = svc_res.into_parts();

    let status_code = res.status();
    let message = executor::block_on(async {
        match to_bytes(res.into_body()).await {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(err) => {
                let err: Box<dyn std::error::Error> = err.into();
                err.to_string()
            }
        }
    });

    let page = match req.app_data::<web::Data<ApiWebCtx>>() {
        Some(ctx) => ctx
            .template()
            .render("error.html", &ErrorResHtml::new(&status_code, &message)),
        None => Err(anyhow::anyhow!("Context is missing from app data")),
    };

    let res = match page {
        Ok(page) => Response::html(&status_code, page),
        Err(err) => {
            ep_log::error(None, format!("[ErrorHandler] Failed to render error page: {err}"));
            HttpResponseBuilder::new(status_code).body(message)
        }
    };

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, res).map_into_right_body(),
    ))
}

fn is_html<B>(svc_res: &ServiceResponse<B>) -> bool {
    svc_res
        .response()
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|content_type| content_type.to_str().ok())
        .is_some_and(|content_type| content_type.to_lowercase().starts_with("text/html"))
}
