//! Credential cards

use super::SectionContext;
use crate::builder::{build, el, Attrs};
use crate::content::ContentDocument;
use crate::dom::{Document, NodeId};

pub const DEFAULT_BUTTON_LABEL: &str = "Ouvrir";

/// `<article class="proof" role="listitem">` with heading, description and
/// one action link per credential
pub fn render_preuves(doc: &mut Document, grid: NodeId, data: &ContentDocument, ctx: &SectionContext) -> usize {
    doc.clear_children(grid);
    for p in &data.preuves {
        let title = el(doc, "h4", Attrs::new().text(&p.title));
        let desc = el(doc, "p", Attrs::new().text(&p.desc));
        let href = p.href.as_deref().unwrap_or("#");
        let label = p.button.as_deref().unwrap_or(DEFAULT_BUTTON_LABEL);
        let a = ctx.link(doc, href, label, Some("btn"), p.pdf);
        let actions = build(doc, "div", Attrs::new().class("actions"), [a.into()]);
        let card = build(
            doc,
            "article",
            Attrs::new().class("proof").attr("role", "listitem"),
            [title.into(), desc.into(), actions.into()],
        );
        doc.append_child(grid, card);
    }
    data.preuves.len()
}
