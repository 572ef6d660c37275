//! Link classification and the attributes it implies.
//!
//! Every link rendered on the page goes through [`LinkPolicy::apply`]:
//! external links open in a new tab without access to the opener or the
//! referrer, PDFs are downloaded, and in-page anchors smooth-scroll.

use crate::dom::{Document, Listener, NodeId};
use crate::{Error, Result};
use url::{Origin, Url};

/// `rel` value set on links opened in a new tab
pub const EXTERNAL_REL: &str = "noopener noreferrer";

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .map(|head| head.eq_ignore_ascii_case(prefix))
        .unwrap_or(false)
}

/// True when `href` is an absolute HTTP(S) URL
pub fn is_external(href: &str) -> bool {
    starts_with_ignore_case(href, "http://") || starts_with_ignore_case(href, "https://")
}

/// True when the path of `href` ends in `.pdf`, ignoring case, query and fragment
pub fn is_pdf(href: &str) -> bool {
    let path = href.split(['?', '#']).next().unwrap_or("");
    path.to_ascii_lowercase().ends_with(".pdf")
}

/// True for same-page anchors such as `#profil`
pub fn is_anchor(href: &str) -> bool {
    href.starts_with('#')
}

/// Element id targeted by an in-page anchor
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Debug, Clone, Default)]
pub struct LinkPolicy {
    site_origin: Option<Origin>,
}

impl LinkPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat absolute links to `origin` as internal
    pub fn with_site_origin(origin: &str) -> Result<Self> {
        let url = Url::parse(origin)?;
        let origin = url.origin();
        if !origin.is_tuple() {
            return Err(Error::ConfigError(format!("site origin has no host: {}", origin.ascii_serialization())));
        }
        Ok(Self { site_origin: Some(origin) })
    }

    pub fn is_external(&self, href: &str) -> bool {
        if !is_external(href) {
            return false;
        }
        match (&self.site_origin, Url::parse(href)) {
            (Some(site), Ok(url)) => url.origin() != *site,
            _ => true,
        }
    }

    /// Set the safety, download and scroll behavior implied by `href` on an
    /// anchor element. `force_download` is the explicit PDF flag from content.
    pub fn apply(&self, doc: &mut Document, anchor: NodeId, href: &str, force_download: bool) {
        if self.is_external(href) {
            doc.set_attribute(anchor, "target", "_blank");
            doc.set_attribute(anchor, "rel", EXTERNAL_REL);
        }
        if force_download || is_pdf(href) {
            doc.set_attribute(anchor, "download", "");
        }
        if let Some(id) = anchor_target(href) {
            doc.add_event_listener(anchor, Listener::SmoothScroll { target_id: id.to_string() });
        }
    }
}
