//! Declarative element construction.
//!
//! [`build`] turns a tag, an [`Attrs`] description and an ordered list of
//! children into a detached element. Content is either escaped text or raw
//! markup, never both; raw markup has to be wrapped in [`TrustedHtml`].

use crate::dom::{Document, NodeId};

/// Markup the caller vouches for. Only construct this from constants or
/// content that has already been sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn from_trusted(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Content of an element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    /// Text content, markup is escaped
    Text(String),
    /// Raw inner markup
    Html(TrustedHtml),
}

/// Attributes and content of an element under construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    attrs: Vec<(String, String)>,
    content: Content,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Literal attribute such as `href`, `role` or `aria-label`
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn href(self, href: &str) -> Self {
        self.attr("href", href)
    }

    pub fn text(mut self, text: &str) -> Self {
        self.content = Content::Text(text.to_string());
        self
    }

    pub fn html(mut self, markup: TrustedHtml) -> Self {
        self.content = Content::Html(markup);
        self
    }

    pub fn content(&self) -> &Content {
        &self.content
    }
}

/// A child appended after the element's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Text(String),
    Node(NodeId),
    /// Skipped, like a falsy entry
    Skip,
}

impl From<&str> for Child {
    fn from(s: &str) -> Self {
        Child::Text(s.to_string())
    }
}

impl From<String> for Child {
    fn from(s: String) -> Self {
        Child::Text(s)
    }
}

impl From<NodeId> for Child {
    fn from(id: NodeId) -> Self {
        Child::Node(id)
    }
}

impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Child::Skip)
    }
}

/// Create a detached element
pub fn build<I>(doc: &mut Document, tag: &str, attrs: Attrs, children: I) -> NodeId
where
    I: IntoIterator<Item = Child>,
{
    let node = doc.create_element(tag);
    for (name, value) in &attrs.attrs {
        doc.set_attribute(node, name, value);
    }
    match &attrs.content {
        Content::None => {}
        Content::Text(text) => doc.set_text_content(node, text),
        Content::Html(markup) => doc.set_inner_html(node, markup.as_str()),
    }
    for child in children {
        match child {
            Child::Text(text) if !text.is_empty() => {
                let t = doc.create_text_node(&text);
                doc.append_child(node, t);
            }
            Child::Node(id) => doc.append_child(node, id),
            _ => {}
        }
    }
    node
}

/// Create a detached element without children
pub fn el(doc: &mut Document, tag: &str, attrs: Attrs) -> NodeId {
    build(doc, tag, attrs, std::iter::empty())
}
