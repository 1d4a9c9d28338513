//! Request-scoped access to translations
//!
//! The middleware runs each handler inside a task-local scope holding the
//! request's [`RequestTranslations`]. Work spawned onto other tasks does not
//! inherit the scope; pass a [`crate::Translator`] along instead.

use std::future::Future;
use std::sync::Arc;
use tracing::debug;
use transkit_i18n::{Parameters, RequestTranslations};

tokio::task_local! {
    static CURRENT: Arc<RequestTranslations>;
}

/// Run `future` with `translations` as the current request scope
pub async fn scope<F>(translations: Arc<RequestTranslations>, future: F) -> F::Output
where
    F: Future,
{
    CURRENT.scope(translations, future).await
}

/// Translations of the request being handled, if any
pub fn current() -> Option<Arc<RequestTranslations>> {
    CURRENT.try_with(Arc::clone).ok()
}

/// Locale selected by the current request
pub fn get_request_locale() -> Option<String> {
    current().map(|scope| scope.requested_locale().to_string())
}

/// Translate `key` in `domain` for the current request.
///
/// Outside a request there are no catalogs; the key is returned with
/// `parameters` applied.
pub fn t(key: &str, domain: &str, parameters: Option<&Parameters>) -> String {
    match current() {
        Some(scope) => scope.t(key, domain, parameters),
        None => {
            debug!("t('{}') called outside a request scope", key);
            match parameters {
                Some(params) => params.apply(key),
                None => key.to_string(),
            }
        }
    }
}
