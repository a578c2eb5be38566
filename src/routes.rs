use crate::auth::Guard;
use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::filter::FilterKey;
use crate::model::{Movie, MoviePatch, Profile, Role, User};
use actix_web::{web, HttpResponse};
use actix_web_httpauth::extractors::basic::BasicAuth;
use serde::{de::DeserializeOwned, Serialize};

pub struct AppState {
    pub guard: Guard,
    pub catalog: Catalog,
}

type State = web::Data<AppState>;

#[derive(Serialize)]
struct Message {
    message: &'static str,
}

fn message(text: &'static str) -> Message {
    Message { message: text }
}

impl AppState {
    fn user(&self, auth: Option<BasicAuth>) -> Result<User> {
        let auth = auth.ok_or(Error::Unauthorized)?;
        self.guard
            .authenticate(auth.user_id(), auth.password().unwrap_or_default())
    }

    fn admin(&self, auth: Option<BasicAuth>) -> Result<User> {
        let user = self.user(auth)?;
        Guard::authorize(&user, Role::Admin)?;
        Ok(user)
    }
}

// Bodies arrive as raw bytes and are decoded only after the caller is let in.
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|err| Error::Validation(format!("Invalid movie: {}", err)))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(message("Catalog server running"))
}

async fn login(auth: Option<BasicAuth>, state: State) -> Result<HttpResponse> {
    let user = state.user(auth)?;
    Ok(HttpResponse::Ok().json(Profile::from(user)))
}

async fn list_movies(state: State) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.catalog.all()?))
}

async fn by_title(
    auth: Option<BasicAuth>,
    state: State,
    title: web::Path<String>,
) -> Result<HttpResponse> {
    state.user(auth)?;
    Ok(HttpResponse::Ok().json(state.catalog.find(FilterKey::Title, &title)?))
}

async fn search(
    auth: Option<BasicAuth>,
    state: State,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    state.user(auth)?;
    let (key, value) = path.into_inner();
    let key: FilterKey = key.parse()?;
    Ok(HttpResponse::Ok().json(state.catalog.find(key, &value)?))
}

async fn add_movie(
    auth: Option<BasicAuth>,
    state: State,
    body: web::Bytes,
) -> Result<HttpResponse> {
    state.admin(auth)?;
    let movie: Movie = decode(&body)?;
    state.catalog.add(movie)?;
    Ok(HttpResponse::Created().json(message("Movie added")))
}

async fn update_movie(
    auth: Option<BasicAuth>,
    state: State,
    title: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    state.admin(auth)?;
    let patch: MoviePatch = decode(&body)?;
    state.catalog.update(&title, patch)?;
    Ok(HttpResponse::Ok().json(message("Movie updated")))
}

async fn delete_movie(
    auth: Option<BasicAuth>,
    state: State,
    title: web::Path<String>,
) -> Result<HttpResponse> {
    state.admin(auth)?;
    state.catalog.remove(&title)?;
    Ok(HttpResponse::Ok().json(message("Movie deleted")))
}

/// Registers every endpoint. The caller supplies `AppState` as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/login", web::post().to(login))
        .service(
            web::resource("/movies")
                .route(web::get().to(list_movies))
                .route(web::post().to(add_movie)),
        )
        .service(
            web::resource("/movies/title/{title}")
                .route(web::get().to(by_title))
                .route(web::put().to(update_movie))
                .route(web::delete().to(delete_movie)),
        )
        .route("/movies/{key}/{value}", web::get().to(search));
}
