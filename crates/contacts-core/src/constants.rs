// Field names as exposed on the wire
pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE_NUMBER: &str = "phoneNumber";

// Validation messages
pub const MSG_NAME_REQUIRED: &str = "Name is required";
pub const MSG_INVALID_EMAIL: &str = "Invalid email address";
pub const MSG_PHONE_NUMBER_REQUIRED: &str = "Phone number is required";

// Schema
pub const SCHEMA_NAME: &str = "Contact";
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_EMAIL_LOCAL_PART_LENGTH: usize = 64;
