//! Loading the content document.
//!
//! A load is a single attempt: no retry, no cache. [`load`] turns every failure
//! into `None` after logging it, which callers treat as "render nothing".

use crate::content::ContentDocument;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Something the content document can be fetched from
pub trait ContentSource {
    /// Fetch the raw body at `path`
    fn fetch(&self, path: &str) -> Result<Vec<u8>>;

    /// Human readable location of `path`, used in diagnostics
    fn describe(&self, path: &str) -> String {
        path.to_string()
    }
}

/// Reads site-relative paths from a directory on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let rel = path.trim_start_matches("./").trim_start_matches('/');
        self.root.join(rel)
    }
}

impl ContentSource for FileSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let full = self.resolve(path);
        std::fs::read(&full).map_err(|e| Error::LoadError(format!("{}: {}", full.display(), e)))
    }

    fn describe(&self, path: &str) -> String {
        self.resolve(path).display().to_string()
    }
}

#[cfg(feature = "http")]
pub use http::HttpSource;

#[cfg(feature = "http")]
mod http {
    use super::ContentSource;
    use crate::{Error, RenderConfig, Result};
    use reqwest::blocking::Client;
    use reqwest::header::{CACHE_CONTROL, PRAGMA, USER_AGENT};
    use std::collections::HashMap;
    use std::time::Duration;
    use url::Url;

    /// Fetches site-relative paths from a base URL with cache bypass headers
    pub struct HttpSource {
        client: Client,
        base: Url,
        user_agent: String,
        headers: HashMap<String, String>,
    }

    impl HttpSource {
        pub fn new(base_url: &str, config: &RenderConfig) -> Result<Self> {
            let base = Url::parse(base_url)?;
            if !matches!(base.scheme(), "http" | "https") {
                return Err(Error::ConfigError(format!("unsupported scheme in {}", base_url)));
            }
            // Unlike reqwest's default, no timeout unless configured
            let client = Client::builder()
                .timeout(config.timeout_ms.map(Duration::from_millis))
                .build()
                .map_err(|e| Error::ConfigError(format!("Failed to build HTTP client: {}", e)))?;
            Ok(Self {
                client,
                base,
                user_agent: config.user_agent.clone(),
                headers: config.headers.clone(),
            })
        }

        pub fn url_for(&self, path: &str) -> Result<Url> {
            Ok(self.base.join(path)?)
        }
    }

    impl ContentSource for HttpSource {
        fn fetch(&self, path: &str) -> Result<Vec<u8>> {
            let url = self.url_for(path)?;
            let mut req = self
                .client
                .get(url.clone())
                .header(USER_AGENT, self.user_agent.as_str())
                .header(CACHE_CONTROL, "no-cache")
                .header(PRAGMA, "no-cache");
            for (k, v) in &self.headers {
                req = req.header(k.as_str(), v.as_str());
            }
            let resp = req
                .send()
                .map_err(|e| Error::NetworkError(format!("Failed to fetch {}: {}", url, e)))?;
            let status = resp.status();
            if !status.is_success() {
                return Err(Error::HttpStatus { status: status.as_u16(), url: url.to_string() });
            }
            let body = resp
                .bytes()
                .map_err(|e| Error::LoadError(format!("Failed to read response body: {}", e)))?;
            Ok(body.to_vec())
        }

        fn describe(&self, path: &str) -> String {
            self.url_for(path).map(|u| u.to_string()).unwrap_or_else(|_| path.to_string())
        }
    }
}

/// Fetch and normalize the content document, keeping the error
pub fn try_load(source: &dyn ContentSource, path: &str) -> Result<ContentDocument> {
    let body = source.fetch(path)?;
    ContentDocument::from_slice(&body)
}

/// Fetch and normalize the content document. Failures are logged and
/// reported as `None`.
pub fn load(source: &dyn ContentSource, path: &str) -> Option<ContentDocument> {
    match try_load(source, path) {
        Ok(doc) => {
            log::debug!("loaded content from {}", source.describe(path));
            Some(doc)
        }
        Err(err) => {
            log::error!("{} [{}]", err, source.describe(path));
            None
        }
    }
}
