use crate::builder::{el, Attrs};
use crate::content::ContentDocument;
use crate::dom::{Document, NodeId};

/// One paragraph per profile line
pub fn render_profil(doc: &mut Document, container: NodeId, data: &ContentDocument) -> usize {
    doc.clear_children(container);
    for line in &data.profil.lines {
        let p = el(doc, "p", Attrs::new().text(line));
        doc.append_child(container, p);
    }
    data.profil.lines.len()
}
