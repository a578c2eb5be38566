use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};
use movie_catalog::{
    auth::Guard,
    catalog::Catalog,
    config::Config,
    database::{JsonFile, MovieDb},
    routes::{self, AppState},
};
use std::io;
use std::sync::Arc;

#[actix_rt::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("movie_catalog=info,actix_web=info"),
    )
    .init();

    let config = Config::from_env();
    let movies = Arc::new(JsonFile::new(&config.movies_file));
    match movies.load() {
        Ok(all) => info!("{} movies in {}", all.len(), config.movies_file),
        Err(err) => {
            error!("cannot load {}: {}", config.movies_file, err);
            return Err(io::Error::new(io::ErrorKind::Other, err));
        }
    }

    let state = web::Data::new(AppState {
        guard: Guard::new(Arc::new(JsonFile::new(&config.users_file))),
        catalog: Catalog::new(movies),
    });

    info!("listening on http://{}", config.bind_address());
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind(config.bind_address())?
    .run()
    .await
}
