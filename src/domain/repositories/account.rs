use async_trait::async_trait;

use crate::domain::models::account::{Account, UpdateAccount};

use super::repository::RepositoryResult;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create(&self, account: Account) -> RepositoryResult<Account>;
    async fn get(&self, id: i64) -> RepositoryResult<Account>;
    async fn list(&self) -> RepositoryResult<Vec<Account>>;
    async fn update(&self, id: i64, update: UpdateAccount) -> RepositoryResult<Account>;
    async fn delete(&self, id: i64) -> RepositoryResult<()>;
    async fn count(&self) -> RepositoryResult<usize>;
}
