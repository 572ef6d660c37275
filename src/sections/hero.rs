//! Hero title, subtitle and call-to-action buttons

use super::SectionContext;
use crate::content::ContentDocument;
use crate::dom::{Document, NodeId};

pub fn render_hero_title(doc: &mut Document, title: NodeId, data: &ContentDocument) -> usize {
    doc.set_text_content(title, &data.hero.title);
    1
}

pub fn render_hero_subtitle(doc: &mut Document, subtitle: NodeId, data: &ContentDocument) -> usize {
    doc.set_text_content(subtitle, &data.hero.subtitle);
    1
}

/// One `<a class="btn">` per button; primary buttons also get `btn-primary`
pub fn render_hero_actions(
    doc: &mut Document,
    actions: NodeId,
    data: &ContentDocument,
    ctx: &SectionContext,
) -> usize {
    doc.clear_children(actions);
    for b in &data.hero.buttons {
        let class = if b.primary { "btn btn-primary" } else { "btn" };
        let a = ctx.link(doc, &b.href, &b.label, Some(class), false);
        doc.append_child(actions, a);
    }
    data.hero.buttons.len()
}
