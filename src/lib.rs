//! Vitrine portfolio renderer
//!
//! Populates a static single-page portfolio skeleton from a JSON content
//! document. The skeleton is parsed into a small in-memory DOM, a fixed set of
//! section renderers clear and refill their containers, and the resulting page
//! can be serialized back to HTML.
//!
//! # Features
//!
//! - **http** (default): load the content document over HTTP with `reqwest`
//! - Filesystem loading is always available through [`loader::FileSource`]
//!
//! # Example
//!
//! ```no_run
//! use vitrine::{loader::FileSource, RenderConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RenderConfig::default();
//! let skeleton = std::fs::read_to_string("site/index.html")?;
//! let mut page = vitrine::new_page(&skeleton, &config)?;
//! let source = FileSource::new("site");
//! if let Some(report) = page.init(&source, &config.content_path) {
//!     println!("rendered {} sections", report.rendered.len());
//! }
//! println!("{}", page.to_html());
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

pub mod error;
pub use error::{Error, Result};

pub mod builder;
pub mod content;
pub mod dom;
pub mod links;
pub mod loader;
pub mod page;
pub mod sections;

pub use content::ContentDocument;
pub use dom::{ClickOutcome, Document, NodeId};
pub use links::{is_external, is_pdf, LinkPolicy};
pub use loader::{load, try_load, ContentSource};
pub use page::{Page, RenderReport, Section};

/// Configuration for loading and rendering a page
///
/// The defaults reproduce the page as shipped: content at
/// `./data/content.json`, the bundled CV at `/public/cv.pdf`, no request
/// timeout and no site origin (every absolute HTTP(S) link is external).
///
/// # Examples
///
/// ```
/// let cfg = vitrine::RenderConfig::default();
/// assert_eq!(cfg.content_path, "./data/content.json");
/// assert!(cfg.timeout_ms.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Relative path of the content document
    pub content_path: String,
    /// CV link used when the content does not provide `header.cv`
    pub default_cv: String,
    /// User agent sent by the HTTP loader
    pub user_agent: String,
    /// Request timeout in milliseconds. `None` waits indefinitely.
    pub timeout_ms: Option<u64>,
    /// Origin of the deployed site, e.g. `https://me.example`. Absolute links
    /// to this origin are not treated as external.
    pub site_origin: Option<String>,
    /// Extra HTTP headers for the content request
    pub headers: HashMap<String, String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            content_path: "./data/content.json".to_string(),
            default_cv: "/public/cv.pdf".to_string(),
            user_agent: format!("vitrine/{}", env!("CARGO_PKG_VERSION")),
            timeout_ms: None,
            site_origin: None,
            headers: HashMap::new(),
        }
    }
}

impl RenderConfig {
    /// Build the link policy described by this configuration
    pub fn link_policy(&self) -> Result<LinkPolicy> {
        match &self.site_origin {
            Some(origin) => LinkPolicy::with_site_origin(origin),
            None => Ok(LinkPolicy::new()),
        }
    }
}

/// Parse a page skeleton and prepare it for rendering
pub fn new_page(skeleton_html: &str, config: &RenderConfig) -> Result<Page> {
    Page::from_skeleton(skeleton_html, config)
}
