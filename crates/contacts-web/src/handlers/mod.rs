use crate::api_docs::ApiDocs;
use crate::constants::{MSG_CONTACT_NOT_FOUND, MSG_INVALID_CONTACT_ID, MSG_SERVER_ERROR};
use crate::data::{IntoWeb, MessageResponse, WelcomeResponse};
use contacts_api::service::Error;
use log::error;
use rocket::http::{ContentType, Status};
use rocket::response::{self, Responder};
use rocket::{Request, Response, get, serde::json::Json};
use serde::Serialize;
use std::io::Cursor;
use utoipa::OpenApi;

pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod contacts;
pub mod middleware;

#[utoipa::path(
    get,
    tag = "General",
    path = "/",
    description = "Describes the available endpoints",
    responses(
        (status = 200, description = "API description", body = WelcomeResponse)
    )
)]
#[get("/")]
pub async fn index() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::new())
}

#[get("/api-docs/openapi.json")]
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDocs::openapi())
}

impl<'r, 'o: 'r> Responder<'r, 'o> for crate::error::Error {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'o> {
        match self {
            crate::error::Error::Service(e) => ServiceError(e).respond_to(req),
            crate::error::Error::MalformedBody(msg) => {
                build_json_response(Status::BadRequest, &MessageResponse { message: msg })
            }
        }
    }
}

pub struct ServiceError(Error);

impl<'r, 'o: 'r> Responder<'r, 'o> for ServiceError {
    fn respond_to(self, _req: &'r Request<'_>) -> response::Result<'o> {
        match self.0 {
            Error::Validation(errors) => {
                build_json_response(Status::BadRequest, &errors.into_web())
            }
            Error::InvalidId(_) => build_json_response(
                Status::BadRequest,
                &MessageResponse::new(MSG_INVALID_CONTACT_ID),
            ),
            Error::NotFound => build_json_response(
                Status::NotFound,
                &MessageResponse::new(MSG_CONTACT_NOT_FOUND),
            ),
            Error::Constraint(msg) => {
                build_json_response(Status::BadRequest, &MessageResponse { message: msg })
            }
            // we can only tell the caller that something went wrong on our end
            Error::Persistence(e) => {
                error!("{e}");
                build_json_response(
                    Status::InternalServerError,
                    &MessageResponse::new(MSG_SERVER_ERROR),
                )
            }
        }
    }
}

pub fn build_json_response<'o>(status: Status, body: &impl Serialize) -> response::Result<'o> {
    let body = serde_json::to_string(body).map_err(|e| {
        error!("Could not serialize response body: {e}");
        Status::InternalServerError
    })?;
    Response::build()
        .status(status)
        .header(ContentType::JSON)
        .sized_body(body.len(), Cursor::new(body))
        .ok()
}
