use serde::{Deserialize, Serialize};
use surrealdb::sql::{Id, Thing};

use crate::domain::models::account::{Account, UpdateAccount};
use crate::domain::repositories::repository::RepositoryError;

#[derive(Debug, Deserialize)]
pub struct SurrealAccount {
    id: Thing,
    name: String,
    email: String,
    password: String,
    image: Option<String>,
}

/// Record body; the account id lives in the record id (`account:<id>`).
#[derive(Serialize)]
pub struct SurrealAccountContent {
    name: String,
    email: String,
    password: String,
    image: Option<String>,
}

#[derive(Serialize)]
pub struct SurrealAccountUpdate {
    name: String,
    email: String,
    password: String,
}

impl From<Account> for SurrealAccountContent {
    fn from(acc: Account) -> Self {
        SurrealAccountContent {
            name: acc.name,
            email: acc.email,
            password: acc.password,
            image: acc.image,
        }
    }
}

impl From<UpdateAccount> for SurrealAccountUpdate {
    fn from(update: UpdateAccount) -> Self {
        SurrealAccountUpdate {
            name: update.name,
            email: update.email,
            password: update.password,
        }
    }
}

impl TryFrom<SurrealAccount> for Account {
    type Error = RepositoryError;

    fn try_from(acc: SurrealAccount) -> Result<Self, Self::Error> {
        let id = match acc.id.id {
            Id::Number(id) => id,
            _ => return Err(RepositoryError::Decode(acc.id.to_string())),
        };

        Ok(Account {
            id,
            name: acc.name,
            email: acc.email,
            password: acc.password,
            image: acc.image,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SurrealCount {
    pub count: i64,
}
