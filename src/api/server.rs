use super::api::API;
use super::request::AdviseRequest;
use super::request::EquityRequest;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;

/// Default bind address, overridable via RAILBIRD_BIND.
const BIND: &str = "127.0.0.1:8080";

pub struct Server;

impl Server {
    pub async fn run() -> Result<(), std::io::Error> {
        let api = web::Data::new(API::new());
        let bind = std::env::var("RAILBIRD_BIND").unwrap_or_else(|_| BIND.to_string());
        log::info!("starting HTTP server on {}", bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(api.clone())
                .route("/health", web::get().to(health))
                .route("/equity", web::post().to(equity))
                .route("/advise", web::post().to(advise))
        })
        .bind(bind)?
        .run()
        .await
    }
}

// Route handlers

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

async fn equity(api: web::Data<API>, req: web::Json<EquityRequest>) -> impl Responder {
    match api.equity(&req) {
        Err(e) => HttpResponse::BadRequest().body(e.to_string()),
        Ok(report) => HttpResponse::Ok().json(report),
    }
}

async fn advise(api: web::Data<API>, req: web::Json<AdviseRequest>) -> impl Responder {
    match api.advise(&req) {
        Err(e) => HttpResponse::BadRequest().body(e.to_string()),
        Ok(advice) => HttpResponse::Ok().json(advice),
    }
}
