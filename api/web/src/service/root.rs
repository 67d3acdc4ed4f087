use actix_web::{http::StatusCode, web, HttpResponse};
use ep_dao::project::ProjectDao;

use crate::{
    context::ApiWebCtx,
    model::{project::ProjectListResHtml, Response},
};

const FAVICON: &[u8] = include_bytes!("../../static/favicon.ico");

pub fn root_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(find_many))
        .route("/favicon.ico", web::get().to(favicon));
}

async fn find_many(ctx: web::Data<ApiWebCtx>) -> HttpResponse {
    let projects_data = match ProjectDao::db_select_many(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => return Response::error(&err),
    };

    Response::render(
        &ctx,
        &StatusCode::OK,
        "index.html",
        &ProjectListResHtml::new(&projects_data),
    )
}

async fn favicon() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("image/vnd.microsoft.icon")
        .body(FAVICON)
}
