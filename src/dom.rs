//! The page being rendered.
//!
//! A [`Document`] owns a parsed `scraper::Html` and mutates its tree in place
//! so that section renderers can clear and repopulate containers, attach
//! click listeners and finally serialize the page back to HTML. Lookups go
//! through `scraper::Selector`; serialization goes through html5ever.

use std::collections::{HashMap, HashSet};
use std::io;

use ego_tree::iter::Edge;
use ego_tree::NodeRef;
use html5ever::serialize::{serialize, Serialize, SerializeOpts, Serializer, TraversalScope};
use html5ever::{LocalName, Namespace, QualName};
use scraper::node::{Element, Text};
use scraper::{ElementRef, Html, Node, Selector};

pub use ego_tree::NodeId;

const HTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Attribute carrying the target of a smooth-scroll listener in the output
pub const SCROLL_TARGET_ATTR: &str = "data-scroll-target";

/// Event listeners understood by [`Document::click`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listener {
    /// Prevents default navigation and scrolls the element with `target_id`
    /// into view (smooth, aligned to the start of the viewport).
    SmoothScroll { target_id: String },
}

/// What a simulated click resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A listener prevented navigation and scrolled to `target`
    ScrollIntoView { target: NodeId, id: String },
    /// A listener prevented navigation but its target does not exist
    Prevented,
    /// Default anchor behavior
    Navigate { href: String, new_tab: bool, download: bool },
    /// Nothing happens
    None,
}

/// Mutable document tree. Detached nodes stay in the tree's arena but are
/// unreachable from the root, so lookups and serialization ignore them.
#[derive(Debug, Clone)]
pub struct Document {
    html: Html,
    listeners: HashMap<NodeId, Vec<Listener>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn attr_name(name: &str) -> QualName {
    QualName::new(None, Namespace::from(""), LocalName::from(name.to_ascii_lowercase()))
}

/// `Element` caches its id and classes; keep them in step with `attrs`
fn refresh_cached(el: &mut Element) {
    let id = el.attr("id").map(LocalName::from);
    let classes: HashSet<LocalName> = el
        .attr("class")
        .map(|c| c.split_whitespace().map(LocalName::from).collect())
        .unwrap_or_default();
    el.id = id;
    el.classes = classes;
}

impl Document {
    /// Create an empty document containing only the root node
    pub fn new() -> Self {
        Self { html: Html::new_document(), listeners: HashMap::new() }
    }

    /// Parse a complete HTML page
    pub fn parse(html: &str) -> Self {
        let html = Html::parse_document(html);
        for err in &html.errors {
            log::trace!("skeleton parse error: {}", err);
        }
        Self { html, listeners: HashMap::new() }
    }

    pub fn root(&self) -> NodeId {
        self.html.tree.root().id()
    }

    fn get(&self, id: NodeId) -> Option<NodeRef<'_, Node>> {
        self.html.tree.get(id)
    }

    /// Copy `node` and its subtree from another tree under `parent`
    fn import(&mut self, node: NodeRef<'_, Node>, parent: NodeId) {
        let id = self.html.tree.orphan(node.value().clone()).id();
        self.append_child(parent, id);
        for child in node.children() {
            self.import(child, id);
        }
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let name = QualName::new(None, Namespace::from(HTML_NS), LocalName::from(tag.to_ascii_lowercase()));
        let el = Element { name, id: None, classes: Default::default(), attrs: Default::default() };
        self.html.tree.orphan(Node::Element(el)).id()
    }

    pub fn create_text_node(&mut self, text: &str) -> NodeId {
        self.html.tree.orphan(Node::Text(Text { text: text.into() })).id()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.get(id).map(|n| n.value())
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.get(id)?.value().as_element()
    }

    fn with_element<R>(&mut self, id: NodeId, f: impl FnOnce(&mut Element) -> R) -> Option<R> {
        let mut node = self.html.tree.get_mut(id)?;
        match node.value() {
            Node::Element(el) => Some(f(el)),
            _ => None,
        }
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|el| el.name())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent().map(|p| p.id())
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.get(id).map(|n| n.children().map(|c| c.id()).collect()).unwrap_or_default()
    }

    /// Child nodes that are elements, in order
    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.get(id)
            .map(|n| n.children().filter(|c| c.value().is_element()).map(|c| c.id()).collect())
            .unwrap_or_default()
    }

    /// Append `child` to `parent`, detaching it from any previous parent first
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.get(child).is_none() {
            return;
        }
        if let Some(mut p) = self.html.tree.get_mut(parent) {
            p.append_id(child);
        }
    }

    /// Detach every child of `node`
    pub fn clear_children(&mut self, node: NodeId) {
        for child in self.children(node) {
            if let Some(mut c) = self.html.tree.get_mut(child) {
                c.detach();
            }
        }
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        self.with_element(id, |el| {
            el.attrs.insert(attr_name(name), value.into());
            refresh_cached(el);
        });
    }

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.attr(&name.to_ascii_lowercase())
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.get_attribute(id, name).is_some()
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        self.with_element(id, |el| {
            el.attrs.retain(|k, _| !(&*k.local).eq_ignore_ascii_case(name));
            refresh_cached(el);
        });
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).map(|el| el.classes().any(|c| c == class)).unwrap_or(false)
    }

    /// Replace all children with a single text node. Markup is never interpreted.
    pub fn set_text_content(&mut self, id: NodeId, text: &str) {
        self.clear_children(id);
        if !text.is_empty() {
            let t = self.create_text_node(text);
            self.append_child(id, t);
        }
    }

    /// Replace all children with the nodes parsed from `markup`
    pub fn set_inner_html(&mut self, id: NodeId, markup: &str) {
        self.clear_children(id);
        let fragment = Html::parse_fragment(markup);
        for top in fragment.tree.root().children() {
            match top.value() {
                // html5ever wraps fragments in a synthetic <html> element
                Node::Element(el) if el.name() == "html" => {
                    for child in top.children() {
                        self.import(child, id);
                    }
                }
                _ => self.import(top, id),
            }
        }
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        let Some(node) = self.get(id) else {
            return String::new();
        };
        node.descendants()
            .filter_map(|n| n.value().as_text())
            .map(|t| &*t.text)
            .collect()
    }

    /// Register `listener` on an element. Smooth-scroll targets are also
    /// written out as a `data-scroll-target` attribute.
    pub fn add_event_listener(&mut self, id: NodeId, listener: Listener) {
        if self.element(id).is_none() {
            return;
        }
        match &listener {
            Listener::SmoothScroll { target_id } => self.set_attribute(id, SCROLL_TARGET_ATTR, target_id),
        }
        self.listeners.entry(id).or_default().push(listener);
    }

    pub fn listeners(&self, id: NodeId) -> &[Listener] {
        self.listeners.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Simulate a user click on `id`
    pub fn click(&self, id: NodeId) -> ClickOutcome {
        let Some(el) = self.element(id) else {
            return ClickOutcome::None;
        };
        if let Some(Listener::SmoothScroll { target_id }) = self.listeners(id).first() {
            return match self.get_element_by_id(target_id) {
                Some(target) => ClickOutcome::ScrollIntoView { target, id: target_id.clone() },
                None => ClickOutcome::Prevented,
            };
        }
        if el.name() == "a" {
            if let Some(href) = el.attr("href") {
                return ClickOutcome::Navigate {
                    href: href.to_string(),
                    new_tab: el.attr("target") == Some("_blank"),
                    download: el.attr("download").is_some(),
                };
            }
        }
        ClickOutcome::None
    }

    /// Descendants of `id` in document order, excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        self.get(id)
            .map(|n| n.descendants().skip(1).map(|d| d.id()).collect())
            .unwrap_or_default()
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.html
            .tree
            .root()
            .descendants()
            .find(|n| n.value().as_element().and_then(Element::id) == Some(id))
            .map(|n| n.id())
    }

    /// Attached elements matching `selector`, in document order
    fn select<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = NodeId> + 'a {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(move |el| selector.matches(el))
            .map(|el| el.id())
    }

    fn parse_selector(selector: &str) -> Option<Selector> {
        match Selector::parse(selector) {
            Ok(sel) => Some(sel),
            Err(e) => {
                log::debug!("invalid selector {:?}: {:?}", selector, e);
                None
            }
        }
    }

    /// First element in document order matching a CSS selector. An invalid
    /// selector matches nothing.
    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        let sel = Self::parse_selector(selector)?;
        let found = self.select(&sel).next();
        found
    }

    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        match Self::parse_selector(selector) {
            Some(sel) => self.select(&sel).collect(),
            None => Vec::new(),
        }
    }

    fn serialize(&self, id: NodeId, traversal_scope: TraversalScope) -> String {
        let Some(node) = self.get(id) else {
            return String::new();
        };
        let opts = SerializeOpts {
            // skeletons are parsed with scripting on, so <noscript> holds raw text
            scripting_enabled: true,
            traversal_scope,
            create_missing_parent: false,
        };
        let mut buf = Vec::new();
        if let Err(e) = serialize(&mut buf, &Subtree(node), opts) {
            log::warn!("failed to serialize node: {}", e);
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Serialize the whole document
    pub fn to_html(&self) -> String {
        self.serialize(self.root(), TraversalScope::ChildrenOnly(None))
    }

    /// Serialize a node including its own tag
    pub fn outer_html(&self, id: NodeId) -> String {
        self.serialize(id, TraversalScope::IncludeNode)
    }

    /// Serialize the children of a node
    pub fn inner_html(&self, id: NodeId) -> String {
        let parent = self.element(id).map(|el| el.name.clone());
        self.serialize(id, TraversalScope::ChildrenOnly(parent))
    }
}

/// Any node of the tree, doctype and comments included
struct Subtree<'a>(NodeRef<'a, Node>);

impl Serialize for Subtree<'_> {
    fn serialize<S: Serializer>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()> {
        let skip_self = matches!(traversal_scope, TraversalScope::ChildrenOnly(_));
        for edge in self.0.traverse() {
            match edge {
                Edge::Open(node) => {
                    if skip_self && node == self.0 {
                        continue;
                    }
                    match node.value() {
                        Node::Doctype(d) => serializer.write_doctype(d.name())?,
                        Node::Comment(c) => serializer.write_comment(&c.comment)?,
                        Node::Text(t) => serializer.write_text(&t.text)?,
                        Node::Element(el) => {
                            serializer.start_elem(el.name.clone(), el.attrs.iter().map(|(k, v)| (k, &v[..])))?
                        }
                        _ => {}
                    }
                }
                Edge::Close(node) => {
                    if skip_self && node == self.0 {
                        continue;
                    }
                    if let Some(el) = node.value().as_element() {
                        serializer.end_elem(el.name.clone())?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>T</title><style>a > b { color: red }</style></head>
<body><ul class="nav-list main"><li>x</li></ul><section id="profil"><div id="profil-content"><p>old</p></div></section></body></html>"#;

    #[test]
    fn parse_and_lookup() {
        let doc = Document::parse(PAGE);
        let nav = doc.query_selector(".nav-list").expect("nav");
        assert_eq!(doc.tag_name(nav), Some("ul"));
        assert_eq!(doc.query_selector("ul.main"), Some(nav));
        assert!(doc.query_selector("ol.nav-list").is_none());
        let content = doc.get_element_by_id("profil-content").unwrap();
        assert_eq!(doc.query_selector("#profil-content"), Some(content));
        assert_eq!(doc.query_selector("div#profil-content"), Some(content));
        assert_eq!(doc.text_content(content), "old");
    }

    #[test]
    fn combinators_and_attribute_selectors() {
        let doc = Document::parse(PAGE);
        let nav = doc.query_selector(".nav-list").unwrap();
        let item = doc.query_selector("ul.nav-list > li").expect("li");
        assert_eq!(doc.parent(item), Some(nav));
        let content = doc.get_element_by_id("profil-content").unwrap();
        assert_eq!(doc.query_selector("section [id=profil-content]"), Some(content));
        assert_eq!(doc.query_selector_all("[id]").len(), 2);
    }

    #[test]
    fn invalid_selectors_match_nothing() {
        let doc = Document::parse(PAGE);
        assert!(doc.query_selector("").is_none());
        assert!(doc.query_selector("#").is_none());
        assert!(doc.query_selector_all("..x").is_empty());
    }

    #[test]
    fn detached_nodes_are_not_found() {
        let mut doc = Document::parse(PAGE);
        let content = doc.get_element_by_id("profil-content").unwrap();
        doc.set_inner_html(content, "<p><em class=\"gone\">a</em></p>");
        doc.clear_children(content);
        assert!(doc.query_selector(".gone").is_none());
        assert!(!doc.to_html().contains("gone"));
    }

    #[test]
    fn clear_children_empties_node() {
        let mut doc = Document::parse(PAGE);
        let content = doc.get_element_by_id("profil-content").unwrap();
        let old = doc.children(content)[0];
        doc.clear_children(content);
        assert!(doc.children(content).is_empty());
        assert_eq!(doc.parent(old), None);
        assert_eq!(doc.inner_html(content), "");
    }

    #[test]
    fn text_content_is_escaped_on_output() {
        let mut doc = Document::new();
        let p = doc.create_element("p");
        doc.set_text_content(p, "<b>x</b> & y");
        assert_eq!(doc.outer_html(p), "<p>&lt;b&gt;x&lt;/b&gt; &amp; y</p>");
        assert_eq!(doc.text_content(p), "<b>x</b> & y");
    }

    #[test]
    fn inner_html_parses_markup() {
        let mut doc = Document::new();
        let p = doc.create_element("p");
        doc.set_inner_html(p, "<strong>Email:</strong> <a href=\"mailto:a@b.c\">a@b.c</a>");
        let kids = doc.element_children(p);
        assert_eq!(kids.len(), 2);
        assert_eq!(doc.tag_name(kids[0]), Some("strong"));
        assert_eq!(doc.get_attribute(kids[1], "href"), Some("mailto:a@b.c"));
        assert_eq!(doc.text_content(p), "Email: a@b.c");
    }

    #[test]
    fn append_child_moves_node() {
        let mut doc = Document::new();
        let a = doc.create_element("div");
        let b = doc.create_element("div");
        let c = doc.create_element("span");
        doc.append_child(a, c);
        doc.append_child(b, c);
        assert!(doc.children(a).is_empty());
        assert_eq!(doc.children(b), vec![c]);
    }

    #[test]
    fn serializes_void_and_raw_text_elements() {
        let doc = Document::parse("<html><head><meta charset=\"utf-8\"><style>a > b {}</style></head><body><br></body></html>");
        let html = doc.to_html();
        assert!(html.contains("<meta charset=\"utf-8\">"));
        assert!(!html.contains("</meta>"));
        assert!(html.contains("<style>a > b {}</style>"));
        assert!(html.contains("<br>"));
    }

    #[test]
    fn noscript_round_trips() {
        let doc = Document::parse(
            "<!DOCTYPE html><html><head></head><body><noscript><p>Activez JavaScript</p></noscript></body></html>",
        );
        let html = doc.to_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<noscript><p>Activez JavaScript</p></noscript>"));
        let noscript = doc.query_selector("noscript").unwrap();
        assert_eq!(doc.inner_html(noscript), "<p>Activez JavaScript</p>");
    }

    #[test]
    fn attribute_values_are_quoted() {
        let mut doc = Document::new();
        let a = doc.create_element("a");
        doc.set_attribute(a, "title", "say \"hi\" & go");
        assert_eq!(doc.outer_html(a), "<a title=\"say &quot;hi&quot; &amp; go\"></a>");
        doc.set_attribute(a, "title", "x");
        assert_eq!(doc.element(a).unwrap().attrs.len(), 1);
        doc.remove_attribute(a, "TITLE");
        assert!(!doc.has_attribute(a, "title"));
    }

    #[test]
    fn id_and_class_changes_are_visible_to_selectors() {
        let mut doc = Document::parse(PAGE);
        let body = doc.query_selector("body").unwrap();
        let div = doc.create_element("div");
        doc.set_attribute(div, "class", "card proof");
        doc.set_attribute(div, "id", "late");
        doc.append_child(body, div);
        assert_eq!(doc.query_selector("div.card.proof"), Some(div));
        assert_eq!(doc.get_element_by_id("late"), Some(div));
        assert!(doc.has_class(div, "proof"));
        doc.remove_attribute(div, "class");
        assert!(doc.query_selector(".card").is_none());
    }

    #[test]
    fn click_follows_listener_then_default() {
        let mut doc = Document::parse(PAGE);
        let body = doc.query_selector("body").unwrap();

        let anchor = doc.create_element("a");
        doc.set_attribute(anchor, "href", "#profil");
        doc.add_event_listener(anchor, Listener::SmoothScroll { target_id: "profil".into() });
        doc.append_child(body, anchor);
        let target = doc.get_element_by_id("profil").unwrap();
        assert_eq!(
            doc.click(anchor),
            ClickOutcome::ScrollIntoView { target, id: "profil".into() }
        );
        assert_eq!(
            doc.outer_html(anchor),
            "<a href=\"#profil\" data-scroll-target=\"profil\"></a>"
        );

        let dangling = doc.create_element("a");
        doc.add_event_listener(dangling, Listener::SmoothScroll { target_id: "nowhere".into() });
        assert_eq!(doc.click(dangling), ClickOutcome::Prevented);

        let ext = doc.create_element("a");
        doc.set_attribute(ext, "href", "https://x.com");
        doc.set_attribute(ext, "target", "_blank");
        assert_eq!(
            doc.click(ext),
            ClickOutcome::Navigate { href: "https://x.com".into(), new_tab: true, download: false }
        );

        let span = doc.create_element("span");
        assert_eq!(doc.click(span), ClickOutcome::None);
        let text = doc.create_text_node("t");
        doc.add_event_listener(text, Listener::SmoothScroll { target_id: "profil".into() });
        assert!(doc.listeners(text).is_empty());
    }
}
