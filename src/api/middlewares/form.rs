use std::ops::Deref;

use crate::domain::error::AppError;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::{Payload, UrlEncoded};
use futures::future::{FutureExt, LocalBoxFuture};
use serde::de::DeserializeOwned;

const FORM_LIMIT: usize = 32768;

/// `application/x-www-form-urlencoded` body whose decoding failures are
/// reported as [`AppError`].
#[derive(Debug)]
pub struct Form<T>(pub T);

impl<T> Form<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> AsRef<T> for Form<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> Deref for Form<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for Form<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    #[inline]
    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        UrlEncoded::new(req, payload)
            .limit(FORM_LIMIT)
            .map(|res: Result<T, _>| res.map(Form).map_err(AppError::from))
            .boxed_local()
    }
}
