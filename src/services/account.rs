use std::sync::Arc;

use crate::domain::{
    error::AppResult,
    models::account::{Account, UpdateAccount},
    repositories::account::AccountRepository,
    services::account::AccountService,
};

use async_trait::async_trait;

pub struct AccountServiceImpl {
    repository: Arc<dyn AccountRepository>,
}

impl AccountServiceImpl {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn create(&self, account: Account) -> AppResult<Account> {
        let created = self.repository.create(account).await?;

        tracing::info!(account_id = created.id, "account created");

        Ok(created)
    }

    async fn get(&self, id: i64) -> AppResult<Account> {
        Ok(self.repository.get(id).await?)
    }

    async fn list(&self) -> AppResult<Vec<Account>> {
        Ok(self.repository.list().await?)
    }

    async fn update(&self, id: i64, update: UpdateAccount) -> AppResult<Account> {
        let updated = self.repository.update(id, update).await?;

        tracing::info!(account_id = id, "account updated");

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.delete(id).await?;

        match self.repository.count().await {
            Ok(remaining) => tracing::info!(account_id = id, remaining, "account deleted"),
            Err(err) => {
                tracing::warn!(account_id = id, error = %err, "account deleted, count unavailable")
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;
    use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
    use crate::infrastructure::repositories::memory::InMemoryAccountRepository;
    use rstest::*;

    /// Delegates to memory but cannot count.
    struct UncountableRepository(InMemoryAccountRepository);

    #[async_trait]
    impl AccountRepository for UncountableRepository {
        async fn create(&self, account: Account) -> RepositoryResult<Account> {
            self.0.create(account).await
        }

        async fn get(&self, id: i64) -> RepositoryResult<Account> {
            self.0.get(id).await
        }

        async fn list(&self) -> RepositoryResult<Vec<Account>> {
            self.0.list().await
        }

        async fn update(&self, id: i64, update: UpdateAccount) -> RepositoryResult<Account> {
            self.0.update(id, update).await
        }

        async fn delete(&self, id: i64) -> RepositoryResult<()> {
            self.0.delete(id).await
        }

        async fn count(&self) -> RepositoryResult<usize> {
            Err(RepositoryError::Decode("count".to_string()))
        }
    }

    fn alice() -> Account {
        Account {
            id: 1,
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            password: "p1".to_string(),
            image: None,
        }
    }

    #[fixture]
    fn service() -> AccountServiceImpl {
        let repo = Arc::new(InMemoryAccountRepository::with_accounts(vec![alice()]));
        AccountServiceImpl::new(repo)
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_success(service: AccountServiceImpl) {
        let account = Account {
            id: 2,
            name: "Bob".to_string(),
            email: "bob@spacecraft.com".to_string(),
            password: "p4ssw0rd".to_string(),
            image: Some("media/bob.png".to_string()),
        };

        let created = service.create(account.clone()).await.unwrap();

        assert_eq!(created, account);
        assert_eq!(service.get(2).await.unwrap(), account);
        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_conflict(service: AccountServiceImpl) {
        let result = service.create(alice()).await;

        assert_eq!(
            result.unwrap_err(),
            AppError::Conflict("Account 1 already exists")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_rename_scenario(service: AccountServiceImpl) {
        service
            .update(
                1,
                UpdateAccount {
                    name: "Alicia".to_string(),
                    email: "a@x.com".to_string(),
                    password: "p1".to_string(),
                },
            )
            .await
            .unwrap();

        let account = service.get(1).await.unwrap();

        assert_eq!(account.id, 1);
        assert_eq!(account.name, "Alicia");
        assert_eq!(account.email, "a@x.com");
        assert_eq!(account.password, "p1");
    }

    #[rstest]
    #[tokio::test]
    async fn test_not_found(service: AccountServiceImpl) {
        let expected = AppError::NotFound("Account 9 does not exist");

        assert_eq!(service.get(9).await.unwrap_err(), expected);
        assert_eq!(
            service
                .update(9, UpdateAccount::default())
                .await
                .unwrap_err(),
            expected
        );
        assert_eq!(service.delete(9).await.unwrap_err(), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn test_delete_twice(service: AccountServiceImpl) {
        service.delete(1).await.unwrap();

        assert!(service.list().await.unwrap().is_empty());
        assert_eq!(
            service.delete(1).await.unwrap_err(),
            AppError::NotFound("Account 1 does not exist")
        );
    }

    #[tokio::test]
    async fn test_delete_succeeds_when_count_fails() {
        let repo = UncountableRepository(InMemoryAccountRepository::with_accounts(vec![alice()]));
        let service = AccountServiceImpl::new(Arc::new(repo));

        service.delete(1).await.unwrap();

        assert!(service.list().await.unwrap().is_empty());
    }
}
