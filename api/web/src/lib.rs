use actix_web::{
    middleware::{ErrorHandlers, Logger},
    web, App, HttpServer,
};
use anyhow::Result;
use configure::configure;
use context::ApiWebCtx;
use error_handler::default_error_handler;
use logger::logger_format;

pub mod auth;
mod configure;
pub mod context;
mod error_handler;
mod logger;
mod model;
mod service;
pub mod template;
mod util;


pub struct ApiWebServer {
    address: String,
    context: web::Data<ApiWebCtx>,
}

impl ApiWebServer {
    pub fn new(host: &str, port: &u16, ctx: ApiWebCtx) -> Self {
        ep_log::info(Some("⚡"), "[ApiWebServer] Initializing component");

        let address = format!("{host}:{port}");
        let context = web::Data::new(ctx);

        Self { address, context }
    }

    pub async fn run(self) -> Result<()> {
        ep_log::info(
            Some("💫"),
            format!("[ApiWebServer] Running component on {}", self.address),
        );

        let Self { address, context } = self;

        Ok(HttpServer::new(move || {
            App::new()
                .wrap(ErrorHandlers::new().default_handler(default_error_handler))
                .wrap(Logger::new(logger_format()))
                .app_data(context.clone())
                .configure(configure)
        })
        .bind(address)?
        .run()
        .await?)
    }
}
