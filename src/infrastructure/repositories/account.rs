use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::account::{Account, UpdateAccount};
use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::account::{
    SurrealAccount, SurrealAccountContent, SurrealAccountUpdate, SurrealCount,
};

pub struct AccountRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl AccountRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }

    async fn exists(&self, id: i64) -> RepositoryResult<bool> {
        let account: Option<SurrealAccount> = self.db.select((ACCOUNT, id)).await?;
        Ok(account.is_some())
    }

    /// A concurrent insert of the same id loses on the engine's record constraint.
    async fn create_error(&self, id: i64, err: surrealdb::Error) -> RepositoryError {
        match err {
            surrealdb::Error::Db(surrealdb::error::Db::RecordExists { .. }) => {
                RepositoryError::DuplicateKey(id)
            }
            // remote engines report the constraint as a failed query
            err => match self.exists(id).await {
                Ok(true) => RepositoryError::DuplicateKey(id),
                _ => RepositoryError::Database(err),
            },
        }
    }
}

const ACCOUNT: &str = "account";

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn create(&self, account: Account) -> RepositoryResult<Account> {
        let id = account.id;

        if self.exists(id).await? {
            return Err(RepositoryError::DuplicateKey(id));
        }

        let created: Option<SurrealAccount> = match self
            .db
            .create((ACCOUNT, id))
            .content(SurrealAccountContent::from(account))
            .await
        {
            Ok(created) => created,
            Err(err) => return Err(self.create_error(id, err).await),
        };

        created
            .ok_or(RepositoryError::NotFound(id))
            .and_then(Account::try_from)
    }

    async fn get(&self, id: i64) -> RepositoryResult<Account> {
        let account: Option<SurrealAccount> = self.db.select((ACCOUNT, id)).await?;

        account
            .ok_or(RepositoryError::NotFound(id))
            .and_then(Account::try_from)
    }

    async fn list(&self) -> RepositoryResult<Vec<Account>> {
        let accounts: Vec<SurrealAccount> = self.db.select(ACCOUNT).await?;

        accounts.into_iter().map(Account::try_from).collect()
    }

    async fn update(&self, id: i64, update: UpdateAccount) -> RepositoryResult<Account> {
        let updated: Option<SurrealAccount> = self
            .db
            .update((ACCOUNT, id))
            .merge(SurrealAccountUpdate::from(update))
            .await?;

        updated
            .ok_or(RepositoryError::NotFound(id))
            .and_then(Account::try_from)
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let deleted: Option<SurrealAccount> = self.db.delete((ACCOUNT, id)).await?;

        deleted.map(|_| ()).ok_or(RepositoryError::NotFound(id))
    }

    async fn count(&self) -> RepositoryResult<usize> {
        let mut res = self
            .db
            .query("(SELECT count() FROM type::table($table) GROUP ALL)[0] or { count: 0 }")
            .bind(("table", ACCOUNT))
            .await?;

        let counter = res
            .take::<Option<SurrealCount>>(0)?
            .unwrap_or(SurrealCount { count: 0 });

        Ok(counter.count as usize)
    }
}
