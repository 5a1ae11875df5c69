
pub mod utils;

use crate::container::Container;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use actix_http::Request;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    test::{self, TestRequest},
};

use rstest::*;

pub struct TestContext {
    pub container: Arc<Container>,
}

#[fixture]
fn context() -> TestContext {
    TestContext {
        container: Arc::new(Container::in_memory()),
    }
}

async fn submit_account<S, B>(app: &S, form: &[(&str, &str)]) -> View
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = TestRequest::post()
        .uri("/create_account/")
        .set_form(form)
        .send_request(app)
        .await;

    test::read_body_json(res).await
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct View {
    template: String,
    context: Value,
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct Error {
    code: u16,
    message: String,
}
