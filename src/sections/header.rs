//! Header navigation and the CV button

use super::SectionContext;
use crate::builder::{build, Attrs};
use crate::content::ContentDocument;
use crate::dom::{Document, NodeId};

pub const CV_LABEL: &str = "Télécharger le CV (PDF)";
pub const CV_ARIA_LABEL: &str = "Télécharger le CV en PDF";

/// One `<li><a>` per header link
pub fn render_nav(doc: &mut Document, nav_list: NodeId, data: &ContentDocument, ctx: &SectionContext) -> usize {
    doc.clear_children(nav_list);
    for item in &data.header.links {
        let a = ctx.link(doc, &item.href, &item.label, None, false);
        let li = build(doc, "li", Attrs::new(), [a.into()]);
        doc.append_child(nav_list, li);
    }
    data.header.links.len()
}

/// The CV button, downloaded only when it points at a PDF
pub fn render_header_actions(
    doc: &mut Document,
    actions: NodeId,
    data: &ContentDocument,
    ctx: &SectionContext,
) -> usize {
    doc.clear_children(actions);
    let cv = data.header.cv.as_deref().unwrap_or(&ctx.default_cv);
    let btn = ctx.link(doc, cv, CV_LABEL, Some("button"), false);
    doc.set_attribute(btn, "aria-label", CV_ARIA_LABEL);
    doc.append_child(actions, btn);
    1
}
