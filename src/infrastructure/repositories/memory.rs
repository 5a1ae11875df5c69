use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::models::account::{Account, UpdateAccount};
use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};

/// Process-local account store. Keeps insertion order.
pub struct InMemoryAccountRepository {
    accounts: RwLock<Vec<Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::with_accounts(Vec::new())
    }

    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts: RwLock::new(accounts),
        }
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: Account) -> RepositoryResult<Account> {
        let mut accounts = self.accounts.write().await;

        if accounts.iter().any(|a| a.id == account.id) {
            return Err(RepositoryError::DuplicateKey(account.id));
        }

        accounts.push(account.clone());

        Ok(account)
    }

    async fn get(&self, id: i64) -> RepositoryResult<Account> {
        let accounts = self.accounts.read().await;

        accounts
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn list(&self) -> RepositoryResult<Vec<Account>> {
        Ok(self.accounts.read().await.clone())
    }

    async fn update(&self, id: i64, update: UpdateAccount) -> RepositoryResult<Account> {
        let mut accounts = self.accounts.write().await;

        let account = accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(RepositoryError::NotFound(id))?;

        account.apply(update);

        Ok(account.clone())
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let mut accounts = self.accounts.write().await;

        let position = accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or(RepositoryError::NotFound(id))?;

        accounts.remove(position);

        Ok(())
    }

    async fn count(&self) -> RepositoryResult<usize> {
        Ok(self.accounts.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn account(id: i64, name: &str, email: &str, password: &str) -> Account {
        Account {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            image: None,
        }
    }

    #[fixture]
    fn repository() -> InMemoryAccountRepository {
        InMemoryAccountRepository::with_accounts(vec![
            account(1, "Ann", "ann@spacecraft.com", "p1"),
            account(2, "Ben", "ben@spacecraft.com", "p2"),
            account(3, "Cid", "cid@spacecraft.com", "p3"),
        ])
    }

    #[tokio::test]
    async fn test_default_is_empty() {
        let repository = InMemoryAccountRepository::default();

        assert_eq!(repository.count().await.unwrap(), 0);
        assert!(repository.list().await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_then_get(repository: InMemoryAccountRepository) {
        let mut new_account = account(4, "Dee", "dee@spacecraft.com", "p4");
        new_account.image = Some("media/dee.png".to_string());

        repository.create(new_account.clone()).await.unwrap();

        assert_eq!(repository.get(4).await.unwrap(), new_account);
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_duplicate_id(repository: InMemoryAccountRepository) {
        let err = repository
            .create(account(2, "Other", "other@spacecraft.com", "p"))
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::DuplicateKey(2)));
        assert_eq!(repository.count().await.unwrap(), 3);
        assert_eq!(repository.get(2).await.unwrap().name, "Ben");
    }

    #[rstest]
    #[tokio::test]
    async fn test_list_keeps_insertion_order(repository: InMemoryAccountRepository) {
        let accounts = repository.list().await.unwrap();

        let ids: Vec<i64> = accounts.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        for listed in accounts {
            assert_eq!(repository.get(listed.id).await.unwrap(), listed);
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_touches_three_fields(repository: InMemoryAccountRepository) {
        let mut original = repository.get(1).await.unwrap();
        original.image = Some("media/ann.png".to_string());
        repository.delete(1).await.unwrap();
        repository.create(original).await.unwrap();

        let updated = repository
            .update(
                1,
                UpdateAccount {
                    name: "Annie".to_string(),
                    email: "annie@spacecraft.com".to_string(),
                    password: "new".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(
            updated,
            Account {
                id: 1,
                name: "Annie".to_string(),
                email: "annie@spacecraft.com".to_string(),
                password: "new".to_string(),
                image: Some("media/ann.png".to_string()),
            }
        );
        assert_eq!(repository.get(1).await.unwrap(), updated);
    }

    #[rstest]
    #[case::get(404)]
    #[case::negative(-1)]
    #[tokio::test]
    async fn test_unknown_id(repository: InMemoryAccountRepository, #[case] id: i64) {
        assert!(matches!(
            repository.get(id).await.unwrap_err(),
            RepositoryError::NotFound(missing) if missing == id
        ));
        assert!(matches!(
            repository.update(id, UpdateAccount::default()).await.unwrap_err(),
            RepositoryError::NotFound(missing) if missing == id
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn test_delete_twice(repository: InMemoryAccountRepository) {
        repository.delete(3).await.unwrap();

        assert_eq!(repository.count().await.unwrap(), 2);
        assert!(matches!(
            repository.delete(3).await.unwrap_err(),
            RepositoryError::NotFound(3)
        ));
        assert_eq!(repository.count().await.unwrap(), 2);
    }
}
