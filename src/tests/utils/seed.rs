use crate::domain::models::account::Account;
use crate::domain::services::account::AccountService;

pub fn account(id: i64, name: &str) -> Account {
    Account {
        id,
        name: name.to_string(),
        email: format!("{}@email.com", name.to_lowercase()),
        password: format!("{}-p4ssw0rd", name.to_lowercase()),
        image: None,
    }
}

pub async fn seed_accounts(account_service: &dyn AccountService, names: &[(i64, &str)]) -> Vec<Account> {
    let mut accounts = Vec::with_capacity(names.len());

    for (id, name) in names {
        accounts.push(account_service.create(account(*id, name)).await.unwrap());
    }

    accounts
}
