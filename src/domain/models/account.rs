#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub image: Option<String>,
}

/// Fields an update is allowed to touch. `id` and `image` are kept as stored.
#[derive(Debug, Clone, Default)]
pub struct UpdateAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Account {
    pub fn apply(&mut self, update: UpdateAccount) {
        self.name = update.name;
        self.email = update.email;
        self.password = update.password;
    }
}
