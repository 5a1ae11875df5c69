use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{Account, UpdateAccount};

#[async_trait]
pub trait AccountService: 'static + Sync + Send {
    async fn create(&self, account: Account) -> AppResult<Account>;
    async fn get(&self, id: i64) -> AppResult<Account>;
    async fn list(&self) -> AppResult<Vec<Account>>;
    async fn update(&self, id: i64, update: UpdateAccount) -> AppResult<Account>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}
