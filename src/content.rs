//! The content document and its normalization.
//!
//! The JSON file is untrusted and may be partial. [`ContentDocument::from_value`]
//! is the only place that inspects raw JSON: every missing or mistyped field
//! becomes an empty value here, so renderers never deal with shape errors.

use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Header {
    pub links: Vec<Link>,
    pub cv: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeroButton {
    pub href: String,
    pub label: String,
    pub primary: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub buttons: Vec<HeroButton>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Profil {
    pub lines: Vec<String>,
}

/// One timeline entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParcoursEntry {
    pub range: Option<String>,
    pub title: Option<String>,
    pub desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Niveau {
    pub math: Vec<String>,
    pub algo: Vec<String>,
}

/// A credential card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preuve {
    pub title: String,
    pub desc: String,
    pub href: Option<String>,
    pub button: Option<String>,
    pub pdf: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub name: String,
    pub year: String,
    pub links: Vec<Link>,
}

/// Normalized content driving every section renderer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentDocument {
    pub header: Header,
    pub hero: Hero,
    pub profil: Profil,
    pub parcours: Vec<ParcoursEntry>,
    pub niveau: Niveau,
    pub preuves: Vec<Preuve>,
    pub contact: Contact,
    pub footer: Footer,
}

static NULL: Value = Value::Null;

fn field<'a>(v: &'a Value, key: &str) -> &'a Value {
    v.get(key).unwrap_or(&NULL)
}

/// Whole floats print without a fraction (`2025.0` is `2025`)
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        // `+ 0.0` folds -0 into 0
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f + 0.0),
        _ => n.to_string(),
    }
}

/// Scalars render as text; containers and null are empty
fn text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn opt_text(v: &Value) -> Option<String> {
    Some(text(v)).filter(|s| !s.is_empty())
}

fn items(v: &Value) -> &[Value] {
    v.as_array().map(Vec::as_slice).unwrap_or(&[])
}

fn texts(v: &Value) -> Vec<String> {
    items(v).iter().map(text).collect()
}

/// JavaScript truthiness
pub(crate) fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn links(v: &Value) -> Vec<Link> {
    items(v)
        .iter()
        .map(|l| Link { href: text(field(l, "href")), label: text(field(l, "label")) })
        .collect()
}

impl ContentDocument {
    /// Normalize an arbitrary JSON value
    pub fn from_value(v: &Value) -> Self {
        let header = field(v, "header");
        let hero = field(v, "hero");
        let niveau = field(v, "niveau");
        let contact = field(v, "contact");
        let footer = field(v, "footer");

        ContentDocument {
            header: Header { links: links(field(header, "links")), cv: opt_text(field(header, "cv")) },
            hero: Hero {
                title: text(field(hero, "title")),
                subtitle: text(field(hero, "subtitle")),
                buttons: items(field(hero, "buttons"))
                    .iter()
                    .map(|b| HeroButton {
                        href: text(field(b, "href")),
                        label: text(field(b, "label")),
                        primary: truthy(field(b, "primary")),
                    })
                    .collect(),
            },
            profil: Profil { lines: texts(field(field(v, "profil"), "lines")) },
            parcours: items(field(v, "parcours"))
                .iter()
                .map(|p| ParcoursEntry {
                    range: opt_text(field(p, "range")),
                    title: opt_text(field(p, "title")),
                    desc: text(field(p, "desc")),
                })
                .collect(),
            niveau: Niveau { math: texts(field(niveau, "math")), algo: texts(field(niveau, "algo")) },
            preuves: items(field(v, "preuves"))
                .iter()
                .map(|p| Preuve {
                    title: text(field(p, "title")),
                    desc: text(field(p, "desc")),
                    href: opt_text(field(p, "href")),
                    button: opt_text(field(p, "button")),
                    pdf: truthy(field(p, "pdf")),
                })
                .collect(),
            contact: Contact {
                email: opt_text(field(contact, "email")),
                linkedin: opt_text(field(contact, "linkedin")),
                github: opt_text(field(contact, "github")),
            },
            footer: Footer {
                name: text(field(footer, "name")),
                year: text(field(footer, "year")),
                links: links(field(footer, "links")),
            },
        }
    }

    /// Parse and normalize a JSON body. A falsy top-level value (`null`,
    /// `false`, `0`, `""`) is rejected: there is nothing to render from it.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        if !truthy(&value) {
            return Err(Error::ParseError(format!("content document is {}", value)));
        }
        Ok(Self::from_value(&value))
    }
}
