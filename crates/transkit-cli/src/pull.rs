//! `translations pull`: fetch catalogs from the provider and write them to disk

use crate::error::{PullError, PullResult};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use transkit_config::validation::validate_catalog_segment;
use transkit_config::TranslationsConfig;
use transkit_i18n::catalog::json_type_name;
use transkit_i18n::{Catalog, CatalogKey, CatalogStore};

/// Environment variable consulted when no token is configured
pub const TOKEN_ENV_VAR: &str = "TRANSLATIONS_PROVIDER_TOKEN";

/// Counts reported at the end of a pull
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PullSummary {
    pub written: usize,
    pub skipped: usize,
}

/// Pulls catalogs from the translations provider
#[derive(Debug, Clone)]
pub struct Puller {
    config: TranslationsConfig,
    store: Option<CatalogStore>,
}

impl Puller {
    pub fn new(config: TranslationsConfig) -> Self {
        Self {
            config,
            store: None,
        }
    }

    /// Refresh `store` with every catalog written
    pub fn with_store(mut self, store: CatalogStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Fetch `branch` and write its catalogs, reporting progress to `out`
    pub async fn pull<W: Write>(&self, branch: &str, force: bool, out: &mut W) -> PullResult<PullSummary> {
        let payload = self.fetch(branch).await?;
        self.write_payload(payload, force, out).await
    }

    /// Download the export of `branch`
    pub async fn fetch(&self, branch: &str) -> PullResult<Value> {
        let provider = &self.config.provider;

        let token = provider
            .token
            .clone()
            .or_else(|| env::var(TOKEN_ENV_VAR).ok())
            .filter(|token| !token.is_empty())
            .ok_or(PullError::MissingToken)?;

        let template = provider
            .url_template
            .as_deref()
            .ok_or(PullError::MissingUrlTemplate)?;
        let url = template.replace("{branch}", branch);

        info!("Pulling translations for branch '{}' from {}", branch, url);

        let client = reqwest::Client::builder()
            .timeout(provider.timeout())
            .build()?;

        let body = client
            .get(&url)
            .header(provider.auth_header(), token)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        serde_json::from_str(&body).map_err(PullError::InvalidJson)
    }

    /// Write every `{locale: {domain: {key: value}}}` catalog of `payload`
    pub async fn write_payload<W: Write>(
        &self,
        payload: Value,
        force: bool,
        out: &mut W,
    ) -> PullResult<PullSummary> {
        let locales = match payload {
            Value::Object(locales) => locales,
            other => return Err(PullError::UnexpectedPayload(json_type_name(&other))),
        };

        let dir = self.config.dir.as_path();
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| PullError::Write {
                path: dir.to_path_buf(),
                source,
            })?;

        let mut summary = PullSummary::default();

        for (locale, domains) in locales {
            let Value::Object(domains) = domains else {
                debug!("Skipping non-object entry for locale '{}'", locale);
                continue;
            };

            if validate_catalog_segment(&locale).is_err() {
                warn!("Skipping locale {:?}: not usable in a catalog file name", locale);
                continue;
            }

            for (domain, messages) in domains {
                let Value::Object(messages) = messages else {
                    debug!("Skipping non-object entry for {}/{}", domain, locale);
                    continue;
                };

                if validate_catalog_segment(&domain).is_err() {
                    warn!(
                        "Skipping domain {:?} for locale '{}': not usable in a catalog file name",
                        domain, locale
                    );
                    continue;
                }

                let key = CatalogKey::new(domain, locale.as_str());
                let out_path = key.path_in(dir);

                if tokio::fs::try_exists(&out_path).await.unwrap_or(false) && !force {
                    summary.skipped += 1;
                    report(out, format_args!("skip  {} (exists, use --force): {}", key, out_path.display()));
                    continue;
                }

                write_catalog(&out_path, &messages).await?;

                if let Some(store) = &self.store {
                    let catalog = Catalog::from_object(messages, &out_path);
                    store.set(&key.domain, &key.locale, catalog).await;
                }

                summary.written += 1;
                report(out, format_args!("pull  {} -> {}", key, out_path.display()));
            }
        }

        report(
            out,
            format_args!("Done. Written: {}, skipped: {}", summary.written, summary.skipped),
        );

        Ok(summary)
    }
}

/// Write `messages` as sorted, pretty JSON via a temporary file and rename
async fn write_catalog(path: &Path, messages: &Map<String, Value>) -> PullResult<()> {
    let sorted: BTreeMap<&String, &Value> = messages.iter().collect();
    let mut encoded = serde_json::to_string_pretty(&sorted).map_err(PullError::Encode)?;
    encoded.push('\n');

    let tmp_path = tmp_path_for(path);
    let write_err = |source| PullError::Write {
        path: path.to_path_buf(),
        source,
    };

    tokio::fs::write(&tmp_path, encoded).await.map_err(write_err)?;
    tokio::fs::rename(&tmp_path, path).await.map_err(write_err)?;

    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

// Progress lines are best effort; a closed stdout must not abort the pull
fn report<W: Write>(out: &mut W, line: std::fmt::Arguments<'_>) {
    let _ = writeln!(out, "{}", line);
}
