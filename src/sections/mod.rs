//! Section renderers.
//!
//! Each renderer owns one container: it clears every existing child, then
//! appends freshly built nodes, so running it twice yields the same result.
//! Renderers never fail; missing content renders as empty. The returned
//! count is the number of items appended.

pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod niveau;
pub mod parcours;
pub mod preuves;
pub mod profil;
pub mod toc;

pub use contact::render_contact;
pub use footer::render_footer;
pub use header::{render_header_actions, render_nav};
pub use hero::{render_hero_actions, render_hero_subtitle, render_hero_title};
pub use niveau::render_skill_list;
pub use parcours::render_parcours;
pub use preuves::render_preuves;
pub use profil::render_profil;
pub use toc::render_toc;

use crate::builder::{el, Attrs};
use crate::dom::{Document, NodeId};
use crate::links::LinkPolicy;
use crate::RenderConfig;

/// Settings shared by all renderers
#[derive(Debug, Clone)]
pub struct SectionContext {
    pub policy: LinkPolicy,
    /// CV link used when the content has none
    pub default_cv: String,
}

impl Default for SectionContext {
    fn default() -> Self {
        Self { policy: LinkPolicy::new(), default_cv: RenderConfig::default().default_cv }
    }
}

impl SectionContext {
    pub fn from_config(config: &RenderConfig) -> crate::Result<Self> {
        Ok(Self { policy: config.link_policy()?, default_cv: config.default_cv.clone() })
    }

    /// Build an anchor with the link policy applied. An empty `href` becomes `#`.
    pub fn link(
        &self,
        doc: &mut Document,
        href: &str,
        label: &str,
        class: Option<&str>,
        force_download: bool,
    ) -> NodeId {
        let href = if href.is_empty() { "#" } else { href };
        let mut attrs = Attrs::new().href(href);
        if let Some(class) = class {
            attrs = attrs.class(class);
        }
        let a = el(doc, "a", attrs.text(label));
        self.policy.apply(doc, a, href, force_download);
        a
    }
}
