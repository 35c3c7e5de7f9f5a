use crate::handlers;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Contact Management API"),
    tags(
        (name = "General", description = "General information about the API"),
        (name = "Contacts", description = "Create, read, update and delete contacts")
    ),
    paths(
        handlers::index,
        handlers::contacts::list_contacts,
        handlers::contacts::create_contact,
        handlers::contacts::get_contact,
        handlers::contacts::update_contact,
        handlers::contacts::delete_contact,
    )
)]
pub struct ApiDocs;
