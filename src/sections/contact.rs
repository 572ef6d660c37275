//! Contact block. Every value is inserted as text, never as markup.

use super::SectionContext;
use crate::builder::{build, el, Attrs, Child};
use crate::content::ContentDocument;
use crate::dom::{Document, NodeId};

pub const EMAIL_PLACEHOLDER: &str = "[REPLACE_EMAIL]";
pub const CLOSING_NOTE: &str = "Disponible pour échanger sur mon dossier et mon projet d’études.";

fn line(doc: &mut Document, label: &str, link: NodeId) -> NodeId {
    let strong = el(doc, "strong", Attrs::new().text(label));
    build(doc, "p", Attrs::new(), [strong.into(), " ".into(), link.into()])
}

/// Email line, optional LinkedIn and GitHub lines, then the closing note.
/// Returns the number of contact lines.
pub fn render_contact(doc: &mut Document, node: NodeId, data: &ContentDocument, ctx: &SectionContext) -> usize {
    doc.clear_children(node);
    let c = &data.contact;
    let mail = c.email.as_deref().unwrap_or(EMAIL_PLACEHOLDER);
    let mail_link = el(doc, "a", Attrs::new().href(&format!("mailto:{}", mail)).text(mail));
    let mut lines = vec![line(doc, "Email:", mail_link)];

    for (label, value) in [("LinkedIn:", &c.linkedin), ("GitHub:", &c.github)] {
        if let Some(url) = value {
            let a = ctx.link(doc, url, url, None, false);
            lines.push(line(doc, label, a));
        }
    }

    let count = lines.len();
    let wrapper = build(doc, "div", Attrs::new(), lines.into_iter().map(Child::Node));
    let note = el(doc, "p", Attrs::new().text(CLOSING_NOTE));
    doc.append_child(node, wrapper);
    doc.append_child(node, note);
    count
}
