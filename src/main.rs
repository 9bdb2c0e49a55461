use std::io;

use actix_web::{App, HttpServer, web};
use actix_web::middleware::Logger;
use env_logger::Env;
use log::{error, info};

use crate::api::AppState;
use crate::config::Config;
use crate::controller::PageController;
use crate::geocode::NominatimGeocoder;

mod api;
mod config;
mod controller;
mod data;
mod geocode;
mod router;
mod utils;
mod views;

#[actix_rt::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|err| {
        error!("{}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
    })?;

    let geocoder = NominatimGeocoder::new(
        &config.geocoder_url,
        config.geocoder_timeout,
        &config.geocoder_user_agent
    )
    .map_err(|err| {
        error!("Could not create geocoder: {}", err);
        io::Error::new(io::ErrorKind::Other, err.to_string())
    })?;

    let state = web::Data::new(AppState::new(
        PageController::default(),
        Box::new(geocoder),
        &config.tile_url
    ));

    info!("Geocoding with {} (timeout {:?})", config.geocoder_url, config.geocoder_timeout);
    info!("Listening on {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(api::configure)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
