//! Locale resolution middleware

use crate::context;
use crate::extension::Translations;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::{debug, warn};
use transkit_common::TransKitError;

/// Resolve the request's translations before the handler runs.
///
/// The locale comes from the configured header; a missing or unreadable
/// header selects the fallback locale. The resolved translations are stored
/// in the request extensions and scoped to the handler future for [`context::t`].
pub async fn resolve_locale(
    State(translations): State<Translations>,
    mut request: Request,
    next: Next,
) -> Result<Response, TransKitError> {
    let header = translations.config().header.as_str();

    let requested = match request.headers().get(header) {
        Some(value) => match value.to_str() {
            Ok(locale) => Some(locale.to_string()),
            Err(_) => {
                warn!("Ignoring non-ASCII '{}' header value", header);
                None
            }
        },
        None => None,
    };

    let resolved = Arc::new(translations.resolve(requested.as_deref()).await?);
    debug!(
        requested = resolved.requested_locale(),
        effective = resolved.effective_locale(),
        "Resolved request locale"
    );

    request.extensions_mut().insert(Arc::clone(&resolved));

    Ok(context::scope(resolved, next.run(request)).await)
}
