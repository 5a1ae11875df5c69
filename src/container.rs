use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::repositories::account::AccountRepository;
use crate::domain::services::account::AccountService;

use crate::services::account::AccountServiceImpl;

use crate::infrastructure::repositories::account::AccountRepositoryImpl;
use crate::infrastructure::repositories::memory::InMemoryAccountRepository;

pub struct Container {
    pub account_service: Arc<dyn AccountService>,
}

impl Container {
    pub fn new(account_repository: Arc<dyn AccountRepository>) -> Self {
        Container {
            account_service: account_service(account_repository),
        }
    }

    pub fn surrealdb(conn: Surreal<Client>) -> Self {
        let db = Arc::new(conn);

        Self::new(Arc::new(AccountRepositoryImpl::new(db)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryAccountRepository::new()))
    }
}

fn account_service(account_repository: Arc<dyn AccountRepository>) -> Arc<dyn AccountService> {
    Arc::new(AccountServiceImpl::new(account_repository))
}
