use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::dto::account::{AccountDTO, CreateAccountForm, FormDTO, UpdateAccountForm};
use crate::api::dto::validation::field_errors;
use crate::api::middlewares::form::Form;
use crate::api::view::{ApiResult, View, template};
use crate::domain::error::AppError;
use crate::domain::services::account::AccountService;

use actix_web::{
    HttpResponse, get,
    http::header,
    post,
    web::{Data as State, Path},
};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(login)
        .service(list_account)
        .service(create_account_form)
        .service(create_account)
        .service(delete_account)
        .service(delete_account_link)
        .service(update_account_form)
        .service(update_account)
        .service(account_detail);
}

#[utoipa::path(
    responses((status = 200, body = View, description = "Login page")),
    tag = "Account",
)]
#[get("/login/")]
pub async fn login() -> HttpResponse {
    View::new(template::LOGIN).render()
}

#[utoipa::path(
    responses(
        (status = 200, body = View, description = "Context `accounts`: every stored account"),
        (status = 500, body = AppError, example = json!(AppError::example_500())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    tag = "Account",
)]
#[get("/list_account/")]
pub async fn list_account(account_service: State<Arc<dyn AccountService>>) -> ApiResult {
    let accounts: Vec<AccountDTO> = account_service
        .list()
        .await?
        .into_iter()
        .map(AccountDTO::from)
        .collect();

    Ok(View::new(template::LIST).with("accounts", accounts)?.render())
}

#[utoipa::path(
    responses((status = 200, body = View, description = "Context `form`: an empty form")),
    tag = "Account",
)]
#[get("/create_account/")]
pub async fn create_account_form() -> ApiResult {
    Ok(View::new(template::CREATE)
        .with("form", FormDTO::default())?
        .render())
}

#[utoipa::path(
    responses(
        (status = 200, body = View, description = "Context `form` with field errors, plus `account` once created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body(content = CreateAccountForm, content_type = "application/x-www-form-urlencoded"),
    tag = "Account",
)]
#[post("/create_account/")]
pub async fn create_account(
    payload: Form<CreateAccountForm>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let form = payload.into_inner();
    let mut view = View::new(template::CREATE);

    let errors = match form.account() {
        Ok(account) => {
            match account_service.create(account).await {
                Ok(created) => view = view.with("account", AccountDTO::from(created))?,
                Err(err) => tracing::warn!(error = %err, "account creation discarded"),
            }
            BTreeMap::new()
        }
        Err(errors) => field_errors(&errors),
    };

    Ok(view.with("form", FormDTO::bound(&form, errors))?.render())
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account id")),
    responses((status = 200, body = View, description = "Context `id` and `msg`, or `error` when nothing was deleted")),
    tag = "Account",
)]
#[post("/delete_account/{id}/")]
pub async fn delete_account(
    id: Path<i64>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    delete(id.into_inner(), account_service.get_ref().as_ref()).await
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account id")),
    responses((status = 200, body = View, description = "Context `id` and `msg`, or `error` when nothing was deleted")),
    tag = "Account",
)]
#[get("/delete_account/{id}/")]
pub async fn delete_account_link(
    id: Path<i64>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    delete(id.into_inner(), account_service.get_ref().as_ref()).await
}

async fn delete(id: i64, account_service: &dyn AccountService) -> ApiResult {
    let view = View::new(template::DELETE);

    let view = match account_service.delete(id).await {
        Ok(()) => view.with("id", id)?.with("msg", "account is deleted")?,
        Err(err) => {
            tracing::warn!(account_id = id, error = %err, "account deletion failed");
            view.with("error", err.message)?
        }
    };

    Ok(view.render())
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, body = View, description = "Context `id` and `account` with the current values"),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
)]
#[get("/update_account/{id}/")]
pub async fn update_account_form(
    id: Path<i64>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let id = id.into_inner();
    let account = account_service.get(id).await?;

    Ok(View::new(template::UPDATE)
        .with("id", id)?
        .with("account", AccountDTO::from(account))?
        .render())
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 303, description = "Account updated, redirects to the update page"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body(content = UpdateAccountForm, content_type = "application/x-www-form-urlencoded"),
    tag = "Account",
)]
#[post("/update_account/{id}/")]
pub async fn update_account(
    id: Path<i64>,
    payload: Form<UpdateAccountForm>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let id = id.into_inner();

    account_service.get(id).await?;
    account_service.update(id, payload.into_inner().into()).await?;

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, format!("/update_account/{id}/")))
        .finish())
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, body = View, description = "Context `account`"),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
)]
#[get("/account_detail/{id}/")]
pub async fn account_detail(
    id: Path<i64>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let account = account_service.get(id.into_inner()).await?;

    Ok(View::new(template::DETAIL)
        .with("account", AccountDTO::from(account))?
        .render())
}
