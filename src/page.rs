//! Page orchestration: load once, then run every renderer whose container
//! exists in the skeleton.

use crate::content::ContentDocument;
use crate::dom::{Document, NodeId};
use crate::loader::{load, ContentSource};
use crate::sections::{self, SectionContext};
use crate::{RenderConfig, Result};
use serde::Serialize;

/// A region of the page and the selector of its container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Nav,
    HeaderActions,
    HeroTitle,
    HeroSubtitle,
    HeroActions,
    Profil,
    Parcours,
    NiveauMath,
    NiveauAlgo,
    Preuves,
    Contact,
    Footer,
    Toc,
}

impl Section {
    /// Render order
    pub const ALL: [Section; 13] = [
        Section::Nav,
        Section::HeaderActions,
        Section::HeroTitle,
        Section::HeroSubtitle,
        Section::HeroActions,
        Section::Profil,
        Section::Parcours,
        Section::NiveauMath,
        Section::NiveauAlgo,
        Section::Preuves,
        Section::Contact,
        Section::Footer,
        Section::Toc,
    ];

    pub fn selector(self) -> &'static str {
        match self {
            Section::Nav => ".nav-list",
            Section::HeaderActions => "#header-actions",
            Section::HeroTitle => "#hero-title",
            Section::HeroSubtitle => "#hero-subtitle",
            Section::HeroActions => "#hero-actions",
            Section::Profil => "#profil-content",
            Section::Parcours => "#parcours-list",
            Section::NiveauMath => "#niveau-math-list",
            Section::NiveauAlgo => "#niveau-algo-list",
            Section::Preuves => "#preuves-grid",
            Section::Contact => "#contact-content",
            Section::Footer => "#footer-inner",
            Section::Toc => "#toc-list",
        }
    }
}

/// Outcome of a render pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderReport {
    /// Sections rendered, with the number of items each produced
    pub rendered: Vec<(Section, usize)>,
    /// Sections whose container was not found
    pub skipped: Vec<Section>,
}

impl RenderReport {
    pub fn count(&self, section: Section) -> Option<usize> {
        self.rendered.iter().find(|(s, _)| *s == section).map(|(_, n)| *n)
    }

    pub fn is_rendered(&self, section: Section) -> bool {
        self.count(section).is_some()
    }
}

/// A page skeleton plus the settings its renderers run with
#[derive(Debug, Clone)]
pub struct Page {
    doc: Document,
    ctx: SectionContext,
}

impl Page {
    pub fn new(doc: Document, config: &RenderConfig) -> Result<Self> {
        Ok(Self { doc, ctx: SectionContext::from_config(config)? })
    }

    pub fn from_skeleton(html: &str, config: &RenderConfig) -> Result<Self> {
        Self::new(Document::parse(html), config)
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    pub fn to_html(&self) -> String {
        self.doc.to_html()
    }

    /// Load the content document and render every section. Returns `None`
    /// when loading failed, in which case the skeleton is left untouched.
    pub fn init(&mut self, source: &dyn ContentSource, path: &str) -> Option<RenderReport> {
        let Some(data) = load(source, path) else {
            log::error!("Impossible de charger content.json");
            return None;
        };
        Some(self.render(&data))
    }

    /// Render every section whose container exists
    pub fn render(&mut self, data: &ContentDocument) -> RenderReport {
        let mut report = RenderReport::default();
        for section in Section::ALL {
            match self.doc.query_selector(section.selector()) {
                Some(node) => {
                    let n = self.render_section(section, node, data);
                    report.rendered.push((section, n));
                }
                None => {
                    log::debug!("no element matches {}, skipping {:?}", section.selector(), section);
                    report.skipped.push(section);
                }
            }
        }
        log::info!(
            "rendered {} sections ({} skipped)",
            report.rendered.len(),
            report.skipped.len()
        );
        report
    }

    fn render_section(&mut self, section: Section, node: NodeId, data: &ContentDocument) -> usize {
        let doc = &mut self.doc;
        let ctx = &self.ctx;
        match section {
            Section::Nav => sections::render_nav(doc, node, data, ctx),
            Section::HeaderActions => sections::render_header_actions(doc, node, data, ctx),
            Section::HeroTitle => sections::render_hero_title(doc, node, data),
            Section::HeroSubtitle => sections::render_hero_subtitle(doc, node, data),
            Section::HeroActions => sections::render_hero_actions(doc, node, data, ctx),
            Section::Profil => sections::render_profil(doc, node, data),
            Section::Parcours => sections::render_parcours(doc, node, data),
            Section::NiveauMath => sections::render_skill_list(doc, node, &data.niveau.math),
            Section::NiveauAlgo => sections::render_skill_list(doc, node, &data.niveau.algo),
            Section::Preuves => sections::render_preuves(doc, node, data, ctx),
            Section::Contact => sections::render_contact(doc, node, data, ctx),
            Section::Footer => sections::render_footer(doc, node, data, ctx),
            Section::Toc => sections::render_toc(doc, node),
        }
    }
}
