use super::SectionContext;
use crate::builder::{build, el, Attrs, Child};
use crate::content::ContentDocument;
use crate::dom::{Document, NodeId};

/// `{name} — {year}` followed by the footer links, space separated
pub fn render_footer(doc: &mut Document, node: NodeId, data: &ContentDocument, ctx: &SectionContext) -> usize {
    doc.clear_children(node);
    let f = &data.footer;
    let left = el(doc, "div", Attrs::new().class("small-muted").text(&format!("{} — {}", f.name, f.year)));
    let mut children = Vec::with_capacity(f.links.len() * 2);
    for l in &f.links {
        let a = ctx.link(doc, &l.href, &l.label, Some("small-muted"), false);
        children.push(Child::Node(a));
        children.push(Child::from(" "));
    }
    let links = build(doc, "div", Attrs::new(), children);
    doc.append_child(node, left);
    doc.append_child(node, links);
    f.links.len()
}
