use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

pub const NAME_MAX_LENGTH: usize = 100;
pub const PASSWORD_MAX_LENGTH: usize = 200;
pub const EMAIL_MAX_LENGTH: usize = 245;

/// HTML forms submit empty inputs as empty strings; those count as missing.
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    Ok(value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty()))
}

/// Whole numbers, including a zero fraction such as `"7.0"`.
pub fn parse_account_id(id: &str) -> Result<i64, ValidationError> {
    let digits = match id.rsplit_once('.') {
        Some((whole, fraction)) if fraction.chars().all(|c| c == '0') => whole,
        _ => id,
    };

    digits
        .parse::<i64>()
        .map_err(|_| ValidationError::new("invalid").with_message(Cow::from("Enter a whole number.")))
}

pub fn is_account_id(id: &str) -> Result<(), ValidationError> {
    parse_account_id(id).map(|_| ())
}

pub fn is_name(name: &str) -> Result<(), ValidationError> {
    max_length(name, NAME_MAX_LENGTH)
}

pub fn is_password(password: &str) -> Result<(), ValidationError> {
    max_length(password, PASSWORD_MAX_LENGTH)
}

/// Length only; the address syntax is checked by the `email` rule.
pub fn is_email_length(email: &str) -> Result<(), ValidationError> {
    max_length(email, EMAIL_MAX_LENGTH)
}

// `length(max = ..)` cannot report the actual length in its message.
fn max_length(value: &str, max: usize) -> Result<(), ValidationError> {
    let length = value.chars().count();

    if length > max {
        return Err(ValidationError::new("max_length").with_message(Cow::from(format!(
            "Ensure this value has at most {max} characters (it has {length})."
        ))));
    }

    Ok(())
}

/// Field path to messages, e.g. `{"email": ["Enter a valid email address."]}`.
pub fn field_errors(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for (field, error) in flatten_errors(errors, None) {
        let message = error
            .message
            .as_ref()
            .map(|message| message.to_string())
            .unwrap_or_else(|| error.code.to_string());

        map.entry(field).or_default().push(message);
    }

    map
}

fn flatten_errors(
    errors: &ValidationErrors,
    path: Option<String>,
) -> Vec<(String, &ValidationError)> {
    errors
        .errors()
        .iter()
        .flat_map(|(field, err)| {
            let actual_path = path
                .as_ref()
                .map(|path| [path.as_str(), field].join("."))
                .unwrap_or_else(|| field.to_string());
            match err {
                ValidationErrorsKind::Field(field_errors) => field_errors
                    .iter()
                    .map(|error| (actual_path.clone(), error))
                    .collect::<Vec<_>>(),
                ValidationErrorsKind::List(list_error) => list_error
                    .iter()
                    .flat_map(|(index, errors)| {
                        let actual_path = format!("{}[{}]", actual_path.as_str(), index);
                        flatten_errors(errors, Some(actual_path))
                    })
                    .collect::<Vec<_>>(),
                ValidationErrorsKind::Struct(struct_errors) => {
                    flatten_errors(struct_errors, Some(actual_path))
                }
            }
        })
        .collect::<Vec<_>>()
}
