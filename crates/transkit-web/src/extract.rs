//! Extractor for the request's translations

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use std::ops::Deref;
use std::sync::Arc;
use tracing::error;
use transkit_i18n::RequestTranslations;

/// The current request's translations, as resolved by the middleware.
///
/// Unlike the task-local [`crate::t`], a `Translator` can be moved into
/// spawned tasks.
#[derive(Debug, Clone)]
pub struct Translator(pub Arc<RequestTranslations>);

impl Deref for Translator {
    type Target = RequestTranslations;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Translator
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<Arc<RequestTranslations>>() {
            Some(translations) => Ok(Self(Arc::clone(translations))),
            None => {
                error!("Translator extracted on a router without Translations::init_app");
                Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Translations are not initialised for this router",
                ))
            }
        }
    }
}
