use crate::{
    constants::{
        FIELD_EMAIL, FIELD_NAME, FIELD_PHONE_NUMBER, MAX_EMAIL_LENGTH,
        MAX_EMAIL_LOCAL_PART_LENGTH, MSG_INVALID_EMAIL, MSG_NAME_REQUIRED,
        MSG_PHONE_NUMBER_REQUIRED,
    },
    contact::ContactPayload,
};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(
        r"^[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+(?:\.[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+)*@(?:[\p{L}\p{N}](?:[\p{L}\p{N}-]{0,61}[\p{L}\p{N}])?\.)+(?:\p{L}{2,63}|xn--[a-z0-9-]{2,59})$"
    )
    .expect("valid email regex");
}

/// Which kind of write request is validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// every rule applies, absent fields count as empty
    Create,
    /// only the supplied fields are checked, the stored document is revalidated on write
    Update,
}

/// A single failed rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// All failed rules of a request, in the order the rules ran
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", errors.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

struct FieldRule {
    field: &'static str,
    value: fn(&ContactPayload) -> Option<&str>,
    check: fn(&str) -> bool,
    message: &'static str,
}

impl FieldRule {
    fn run(&self, payload: &ContactPayload, mode: ValidationMode) -> Option<FieldError> {
        let passed = match ((self.value)(payload), mode) {
            (Some(value), _) => (self.check)(value.trim()),
            (None, ValidationMode::Create) => (self.check)(""),
            (None, ValidationMode::Update) => true,
        };
        if passed {
            None
        } else {
            Some(FieldError {
                field: self.field,
                message: self.message,
            })
        }
    }
}

fn name_of(payload: &ContactPayload) -> Option<&str> {
    payload.name.as_deref()
}

fn email_of(payload: &ContactPayload) -> Option<&str> {
    payload.email.as_deref()
}

fn phone_number_of(payload: &ContactPayload) -> Option<&str> {
    payload.phone_number.as_deref()
}

fn not_empty(value: &str) -> bool {
    !value.is_empty()
}

const CONTACT_RULES: [FieldRule; 3] = [
    FieldRule {
        field: FIELD_NAME,
        value: name_of,
        check: not_empty,
        message: MSG_NAME_REQUIRED,
    },
    FieldRule {
        field: FIELD_EMAIL,
        value: email_of,
        check: is_email,
        message: MSG_INVALID_EMAIL,
    },
    FieldRule {
        field: FIELD_PHONE_NUMBER,
        value: phone_number_of,
        check: not_empty,
        message: MSG_PHONE_NUMBER_REQUIRED,
    },
];

/// Checks whether the given, already trimmed, value is a syntactically valid email address
pub fn is_email(value: &str) -> bool {
    if value.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    match value.split_once('@') {
        Some((local, _)) if local.len() > MAX_EMAIL_LOCAL_PART_LENGTH => false,
        Some(_) => EMAIL_RE.is_match(value),
        None => false,
    }
}

/// Runs all contact rules against the payload. Every rule runs, regardless of earlier failures.
pub fn validate_contact(
    payload: &ContactPayload,
    mode: ValidationMode,
) -> Result<(), ValidationErrors> {
    let errors: Vec<FieldError> = CONTACT_RULES
        .iter()
        .filter_map(|rule| rule.run(payload, mode))
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}
