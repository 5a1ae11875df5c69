use actix_web::HttpResponse;
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::error::{AppError, AppResult};

/// Handlers answer with a rendered [`View`], a redirect, or an [`AppError`].
pub type ApiResult = AppResult<HttpResponse>;

#[rustfmt::skip]
pub mod template {
    pub static LOGIN: &str = "account/account_login.html";
    pub static LIST: &str = "account/list_account.html";
    pub static CREATE: &str = "account/create_account.html";
    pub static UPDATE: &str = "account/update_account.html";
    pub static DELETE: &str = "account/delete_account.html";
    pub static DETAIL: &str = "account/account_detail.html";
}

/// A named template and the context it is rendered with. Rendering the
/// template itself is left to the client.
#[derive(Debug, Serialize, ToSchema)]
pub struct View {
    #[schema(value_type = String, examples("account/list_account.html"))]
    template: &'static str,
    #[schema(value_type = Object)]
    context: Map<String, Value>,
}

impl View {
    pub fn new(template: &'static str) -> Self {
        View {
            template,
            context: Map::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Serialize) -> AppResult<Self> {
        let value = serde_json::to_value(value)
            .map_err(|err| AppError::InternalError().trace(&err.to_string()))?;

        self.context.insert(key.to_owned(), value);

        Ok(self)
    }

    pub fn render(self) -> HttpResponse {
        HttpResponse::Ok().json(self)
    }
}
