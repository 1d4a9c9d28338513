//! Integration tests for attaching translations to an axum router

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::get,
    Extension, Router,
};
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;
use tower_http::trace::TraceLayer;
use transkit_config::TranslationsConfig;
use transkit_web::{params, t, Translations, Translator};

/// Create a temporary directory with test catalogs
fn create_test_catalogs() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    fs::write(
        temp_dir.path().join("messages_en.json"),
        r#"{"hello": "Hello, %name%!", "bye": "Goodbye", "only.en": "English only"}"#,
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("messages_uk.json"),
        r#"{"hello": "Привіт, %name%!", "bye": "Бувай"}"#,
    )
    .unwrap();

    temp_dir
}

fn config_for(dir: &TempDir) -> TranslationsConfig {
    TranslationsConfig {
        dir: dir.path().to_path_buf(),
        supported_locales: vec!["en".to_string(), "uk".to_string()],
        ..TranslationsConfig::default()
    }
}

async fn hello() -> String {
    t("hello", "messages", Some(&params!["%name%" => "Igor"]))
}

async fn bye(translator: Translator) -> String {
    format!(
        "{}|{}",
        translator.t("bye", "messages", None),
        translator.t("only.en", "messages", None)
    )
}

async fn locale(Extension(translations): Extension<Translations>) -> String {
    translations.get_request_locale()
}

fn routes() -> Router {
    Router::new()
        .route("/hello", get(hello))
        .route("/bye", get(bye))
        .route("/locale", get(locale))
}

async fn call(app: &Router, uri: &str, locale: Option<&str>) -> (StatusCode, String) {
    let mut builder = Request::builder().uri(uri);
    if let Some(locale) = locale {
        builder = builder.header("SELECTED-LOCALE", locale);
    }

    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_translations_construct_and_attach() {
    let dir = create_test_catalogs();
    let translations = Translations::with_config(config_for(&dir));

    let app = translations.init_app(routes()).await.unwrap();

    let (status, body) = call(&app, "/hello", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello, Igor!");
}

#[tokio::test]
async fn test_header_selects_locale() {
    let dir = create_test_catalogs();
    let app = Translations::with_config(config_for(&dir))
        .init_app(routes())
        .await
        .unwrap();

    assert_eq!(call(&app, "/hello", Some("uk")).await.1, "Привіт, Igor!");
    assert_eq!(call(&app, "/bye", Some("uk")).await.1, "Бувай|English only");
    assert_eq!(call(&app, "/locale", Some("uk")).await.1, "uk");
}

#[tokio::test]
async fn test_unsupported_locale_served_from_fallback() {
    let dir = create_test_catalogs();
    let app = Translations::with_config(config_for(&dir))
        .init_app(routes())
        .await
        .unwrap();

    assert_eq!(call(&app, "/bye", Some("fr")).await.1, "Goodbye|English only");
    // The requested locale is still reported as sent
    assert_eq!(call(&app, "/locale", Some("fr")).await.1, "fr");
    assert_eq!(call(&app, "/locale", None).await.1, "en");
}

#[tokio::test]
async fn test_custom_header_and_trace_layer() {
    let dir = create_test_catalogs();
    let config = TranslationsConfig {
        header: "X-Locale".to_string(),
        ..config_for(&dir)
    };

    let app = Translations::with_config(config)
        .init_app(routes())
        .await
        .unwrap()
        .layer(TraceLayer::new_for_http());

    let request = Request::builder()
        .uri("/hello")
        .header("x-locale", "uk")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    assert_eq!(body.as_ref(), "Привіт, Igor!".as_bytes());
}

#[tokio::test]
async fn test_catalogs_pulled_after_start_are_picked_up() {
    let dir = TempDir::new().unwrap();
    let app = Translations::with_config(config_for(&dir))
        .init_app(routes())
        .await
        .unwrap();

    // No catalogs at all: keys come back untouched
    assert_eq!(call(&app, "/hello", Some("uk")).await.1, "hello");

    fs::write(dir.path().join("messages_en.json"), r#"{"hello": "Hi %name%"}"#).unwrap();
    assert_eq!(call(&app, "/hello", None).await.1, "Hi Igor");
}

#[tokio::test]
async fn test_malformed_catalog_fails_request() {
    let dir = create_test_catalogs();
    fs::write(dir.path().join("messages_uk.json"), "{broken").unwrap();

    let config = TranslationsConfig {
        preload: false,
        ..config_for(&dir)
    };
    let app = Translations::with_config(config)
        .init_app(routes())
        .await
        .unwrap();

    let (status, body) = call(&app, "/hello", Some("uk")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("Catalog error"));

    let (status, _) = call(&app, "/hello", Some("en")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_catalog_fails_preload() {
    let dir = create_test_catalogs();
    fs::write(dir.path().join("messages_uk.json"), "[]").unwrap();

    let result = Translations::with_config(config_for(&dir))
        .init_app(routes())
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_translator_requires_init_app() {
    let (status, _) = call(&routes(), "/bye", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
