use std::collections::BTreeMap;

use crate::api::dto::validation::{
    blank_as_none, is_account_id, is_email_length, is_name, is_password, parse_account_id,
};
use crate::domain::models::account::{Account, UpdateAccount};
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    id: i64,
    name: String,
    email: String,
    image: Option<String>,
}

/// Raw create submission. Every field is optional so that a missing or
/// malformed value becomes a field error instead of a rejected request.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateAccountForm {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(
        required(message = "This field is required."),
        custom(function = "is_account_id")
    )]
    #[schema(examples("1"))]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(
        required(message = "This field is required."),
        custom(function = "is_name")
    )]
    #[schema(examples("your_name"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(
        required(message = "This field is required."),
        custom(function = "is_password")
    )]
    #[schema(examples("p4ssw0rd"))]
    pub password: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(
        required(message = "This field is required."),
        email(message = "Enter a valid email address."),
        custom(function = "is_email_length")
    )]
    #[schema(examples("your@email.com"))]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(examples("media/avatar.png"))]
    pub image: Option<String>,
}

/// Update submission, applied as sent. Absent fields become empty strings.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateAccountForm {
    #[schema(examples("your_name"))]
    pub name: String,

    #[schema(examples("your@email.com"))]
    pub email: String,

    #[schema(examples("p4ssw0rd"))]
    pub password: String,
}

/// Form state handed to the create view. The password is never echoed back.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct FormDTO {
    id: Option<String>,
    name: Option<String>,
    email: Option<String>,
    image: Option<String>,
    errors: BTreeMap<String, Vec<String>>,
}

impl CreateAccountForm {
    pub fn account(&self) -> Result<Account, ValidationErrors> {
        self.validate()?;

        let id = parse_account_id(self.id.as_deref().unwrap_or_default()).map_err(|err| {
            let mut errors = ValidationErrors::new();
            errors.add("id", err);
            errors
        })?;

        Ok(Account {
            id,
            name: self.name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            password: self.password.clone().unwrap_or_default(),
            image: self.image.clone(),
        })
    }
}

impl FormDTO {
    pub fn bound(form: &CreateAccountForm, errors: BTreeMap<String, Vec<String>>) -> Self {
        FormDTO {
            id: form.id.clone(),
            name: form.name.clone(),
            email: form.email.clone(),
            image: form.image.clone(),
            errors,
        }
    }
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            id: val.id,
            name: val.name,
            email: val.email,
            image: val.image,
        }
    }
}

impl From<UpdateAccountForm> for UpdateAccount {
    fn from(form: UpdateAccountForm) -> Self {
        UpdateAccount {
            name: form.name,
            email: form.email,
            password: form.password,
        }
    }
}
