use crate::builder::{el, Attrs};
use crate::dom::{Document, NodeId};

/// Flat `<li>` list, used for both the math and the algorithmics skills
pub fn render_skill_list(doc: &mut Document, list: NodeId, skills: &[String]) -> usize {
    doc.clear_children(list);
    for skill in skills {
        let li = el(doc, "li", Attrs::new().text(skill));
        doc.append_child(list, li);
    }
    skills.len()
}
