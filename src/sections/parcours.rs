//! Timeline list

use crate::builder::{build, el, Attrs, Child};
use crate::content::{ContentDocument, ParcoursEntry};
use crate::dom::{Document, NodeId};

fn entry_text(entry: &ParcoursEntry) -> String {
    match &entry.title {
        Some(title) => format!("{} : {}", title, entry.desc),
        None => entry.desc.clone(),
    }
}

/// `<li><strong>{range} — </strong>{title} : {desc}</li>` per entry
pub fn render_parcours(doc: &mut Document, list: NodeId, data: &ContentDocument) -> usize {
    doc.clear_children(list);
    for entry in &data.parcours {
        let range = entry
            .range
            .as_ref()
            .map(|r| el(doc, "strong", Attrs::new().text(&format!("{} — ", r))));
        let li = build(doc, "li", Attrs::new(), [Child::from(range), entry_text(entry).into()]);
        doc.append_child(list, li);
    }
    data.parcours.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::{container, page};

    fn entry(range: Option<&str>, title: Option<&str>, desc: &str) -> ParcoursEntry {
        ParcoursEntry { range: range.map(Into::into), title: title.map(Into::into), desc: desc.into() }
    }

    #[test]
    fn range_emphasized_without_title() {
        let mut doc = page();
        let list = container(&doc, "#parcours-list");
        let data = ContentDocument { parcours: vec![entry(Some("2020-2021"), None, "Stage")], ..Default::default() };
        render_parcours(&mut doc, list, &data);
        let li = doc.element_children(list)[0];
        assert_eq!(doc.text_content(li), "2020-2021 — Stage");
        let strong = doc.element_children(li)[0];
        assert_eq!(doc.tag_name(strong), Some("strong"));
        assert_eq!(doc.text_content(strong), "2020-2021 — ");
    }

    #[test]
    fn title_colon_description() {
        let mut doc = page();
        let list = container(&doc, "#parcours-list");
        let data = ContentDocument {
            parcours: vec![
                entry(Some("2022"), Some("Lycée"), "Bac"),
                entry(None, Some("Projets"), "Sudoku"),
                ParcoursEntry::default(),
            ],
            ..Default::default()
        };
        assert_eq!(render_parcours(&mut doc, list, &data), 3);
        let items = doc.element_children(list);
        assert_eq!(doc.text_content(items[0]), "2022 — Lycée : Bac");
        assert_eq!(doc.outer_html(items[1]), "<li>Projets : Sudoku</li>");
        assert_eq!(doc.outer_html(items[2]), "<li></li>");
    }
}
