//! axum integration for transkit
//!
//! [`Translations`] is the extension object. Build it, then hand it the
//! application router:
//!
//! ```rust,no_run
//! use axum::{routing::get, Router};
//! use transkit_web::{t, Translations};
//!
//! async fn index() -> String {
//!     t("hello", "messages", None)
//! }
//!
//! # async fn example() -> transkit_common::Result<()> {
//! let translations = Translations::new();
//! let app = translations.init_app(Router::new().route("/", get(index))).await?;
//! # let _: Router = app;
//! # Ok(())
//! # }
//! ```
//!
//! Every request passing through the router gets its locale from the
//! configured header, and handlers can translate through [`t`], the
//! [`Translator`] extractor, or the askama [`filters`].

pub mod context;
pub mod extension;
pub mod extract;
pub mod filters;
pub mod middleware;

pub use context::{current, get_request_locale, t};
pub use extension::Translations;
pub use extract::Translator;

pub use transkit_i18n::{params, Parameters, RequestTranslations, DEFAULT_DOMAIN};
