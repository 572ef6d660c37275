//! Table of contents built from the fixed section ids

use crate::builder::{build, el, Attrs};
use crate::dom::{Document, Listener, NodeId};

pub const TOC_SECTIONS: [&str; 5] = ["profil", "parcours", "niveau", "preuves", "contact"];

fn capitalize(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Five `<li><a href="#id">` entries that smooth-scroll to their section
pub fn render_toc(doc: &mut Document, list: NodeId) -> usize {
    doc.clear_children(list);
    for id in TOC_SECTIONS {
        let a = el(doc, "a", Attrs::new().href(&format!("#{}", id)).text(&capitalize(id)));
        doc.add_event_listener(a, Listener::SmoothScroll { target_id: id.to_string() });
        let li = build(doc, "li", Attrs::new(), [a.into()]);
        doc.append_child(list, li);
    }
    TOC_SECTIONS.len()
}
