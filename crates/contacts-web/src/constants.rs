// Response messages
pub const MSG_WELCOME: &str = "Welcome to Contact Management API";
pub const MSG_CONTACT_NOT_FOUND: &str = "Contact not found";
pub const MSG_INVALID_CONTACT_ID: &str = "Invalid contact ID";
pub const MSG_CONTACT_DELETED: &str = "Contact deleted successfully";
pub const MSG_VALIDATION_FAILED: &str = "Validation failed";
pub const MSG_SERVER_ERROR: &str = "Server error";
pub const MSG_INTERNAL_SERVER_ERROR: &str = "Internal server error";
pub const MSG_ROUTE_NOT_FOUND: &str = "Route not found";

// Routes
pub const CONTACTS_PATH: &str = "/contacts";
