mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod state;
mod utils;
mod views;

use actix_web::{web, App, HttpServer};
use clap::Parser;
use dotenv::dotenv;
use log::info;

use crate::config::{resolve_color, Cli, Config, PORT};
use crate::state::AppContext;
use crate::utils::s3::BackgroundFetcher;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::from_env();

    // A bad --color stops the process before anything binds.
    let color = match resolve_color(&config.app_color, cli.color.as_deref()) {
        Ok(color) => color,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let store = db::connect(&config.database).await;
    let background = BackgroundFetcher::from_settings(&config.s3);
    let ctx = web::Data::new(AppContext::new(&config, color, store, background));

    info!("Starting server at 0.0.0.0:{}", PORT);

    HttpServer::new(move || {
        App::new()
            .app_data(ctx.clone())
            .configure(handlers::configure)
    })
    .bind(("0.0.0.0", PORT))?
    .run()
    .await
}
