use crate::config::Config;
use crate::constants::{CONTACTS_PATH, MSG_INTERNAL_SERVER_ERROR};
use crate::data::{FailureResponse, RouteNotFoundResponse};
use crate::handlers;
use contacts_api::service::ServiceContext;
use log::{error, info};
use rocket::figment::Figment;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Build, Request, Rocket, catch, catchers, routes};

pub fn rocket_main(conf: Config, context: ServiceContext) -> Rocket<Build> {
    let config = Figment::from(rocket::Config::default())
        .merge(("port", conf.http_port))
        .merge(("address", conf.http_address.to_owned()));

    info!("HTTP Server Listening on {}", conf.http_listen_url());

    rocket::custom(config)
        .manage(context)
        .manage(conf)
        .mount("/", routes![handlers::index, handlers::openapi])
        .mount(
            CONTACTS_PATH,
            routes![
                handlers::contacts::list_contacts,
                handlers::contacts::create_contact,
                handlers::contacts::get_contact,
                handlers::contacts::update_contact,
                handlers::contacts::delete_contact,
            ],
        )
        .register("/", catchers![not_found, internal_error, default_catcher])
}

#[catch(404)]
fn not_found(req: &Request) -> Json<RouteNotFoundResponse> {
    let base_url = req
        .rocket()
        .state::<Config>()
        .map(|conf| conf.public_url())
        .unwrap_or_default();
    Json(RouteNotFoundResponse::new(format!(
        "{base_url}{CONTACTS_PATH}"
    )))
}

#[catch(500)]
fn internal_error(req: &Request) -> Json<FailureResponse> {
    error!(
        "Uncaught failure while handling {} {}",
        req.method(),
        req.uri()
    );
    Json(FailureResponse::new(MSG_INTERNAL_SERVER_ERROR))
}

#[catch(default)]
fn default_catcher(status: Status, _req: &Request) -> Json<FailureResponse> {
    Json(FailureResponse::new(status.reason().unwrap_or("Unknown error")))
}
