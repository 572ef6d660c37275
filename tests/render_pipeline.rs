//! End-to-end rendering of the fixture skeleton from the fixture content

use std::fs;
use vitrine::loader::FileSource;
use vitrine::sections::contact::CLOSING_NOTE;
use vitrine::{ClickOutcome, ContentDocument, Page, RenderConfig, Section};

fn skeleton() -> String {
    fs::read_to_string("tests/fixtures/index.html").expect("fixture skeleton")
}

fn rendered_page() -> (Page, vitrine::RenderReport) {
    let mut page = vitrine::new_page(&skeleton(), &RenderConfig::default()).expect("page");
    let report = page
        .init(&FileSource::new("tests/fixtures"), "./content.json")
        .expect("content loads");
    (page, report)
}

fn item_texts(page: &Page, selector: &str) -> Vec<String> {
    let doc = page.document();
    let list = doc.query_selector(selector).expect(selector);
    doc.element_children(list).iter().map(|n| doc.text_content(*n)).collect()
}

#[test]
fn counts_match_content_in_order() {
    let (page, report) = rendered_page();
    assert!(report.skipped.is_empty());
    assert_eq!(report.count(Section::Nav), Some(3));
    assert_eq!(report.count(Section::HeroActions), Some(2));
    assert_eq!(report.count(Section::Profil), Some(2));
    assert_eq!(report.count(Section::Parcours), Some(3));
    assert_eq!(report.count(Section::NiveauMath), Some(3));
    assert_eq!(report.count(Section::NiveauAlgo), Some(2));
    assert_eq!(report.count(Section::Preuves), Some(3));
    assert_eq!(report.count(Section::Contact), Some(3));
    assert_eq!(report.count(Section::Footer), Some(2));
    assert_eq!(report.count(Section::Toc), Some(5));

    assert_eq!(item_texts(&page, ".nav-list"), vec!["Profil", "Preuves", "GitHub"]);
    assert_eq!(
        item_texts(&page, "#parcours-list"),
        vec![
            "2022-2025 — Lycée : Bac général, spécialités maths et NSI",
            "2024 — Stage d'observation",
            "Projets : Solveur de sudoku en Rust",
        ]
    );
    assert_eq!(item_texts(&page, "#niveau-algo-list"), vec!["Graphes", "Programmation dynamique"]);
    assert_eq!(item_texts(&page, "#toc-list"), vec!["Profil", "Parcours", "Niveau", "Preuves", "Contact"]);
}

#[test]
fn hero_and_footer_text() {
    let (page, _) = rendered_page();
    let doc = page.document();
    let title = doc.get_element_by_id("hero-title").unwrap();
    assert_eq!(doc.text_content(title), "Jeanne Dupont");
    let footer = doc.get_element_by_id("footer-inner").unwrap();
    assert!(doc.text_content(footer).starts_with("Jeanne Dupont — 2025"));
    let contact = doc.get_element_by_id("contact-content").unwrap();
    assert!(doc.text_content(contact).ends_with(CLOSING_NOTE));
}

#[test]
fn rendering_twice_is_identical() {
    let data = vitrine::try_load(&FileSource::new("tests/fixtures"), "content.json").unwrap();
    let mut page = vitrine::new_page(&skeleton(), &RenderConfig::default()).unwrap();
    page.render(&data);
    let once = page.to_html();
    page.render(&data);
    assert_eq!(page.to_html(), once);
}

#[test]
fn empty_content_still_renders_fixed_parts() {
    let mut page = vitrine::new_page(&skeleton(), &RenderConfig::default()).unwrap();
    let report = page.render(&ContentDocument::default());
    assert_eq!(report.count(Section::Nav), Some(0));
    assert_eq!(report.count(Section::Toc), Some(5));
    let html = page.to_html();
    assert!(html.contains("[REPLACE_EMAIL]"));
    assert!(html.contains("href=\"/public/cv.pdf\""));
}

#[test]
fn serialized_page_keeps_link_policy() {
    let (page, _) = rendered_page();
    let html = page.to_html();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(
        "<a href=\"https://github.com/jdupont\" target=\"_blank\" rel=\"noopener noreferrer\">GitHub</a>"
    ));
    assert!(html.contains("<a href=\"#profil\" data-scroll-target=\"profil\">Profil</a>"));
    assert!(html.contains("download=\"\""));

    let reparsed = vitrine::Document::parse(&html);
    assert_eq!(reparsed.query_selector_all("article.proof").len(), 3);
}

#[test]
fn clicks_resolve_like_a_browser() {
    let (page, _) = rendered_page();
    let doc = page.document();
    let actions = doc.get_element_by_id("hero-actions").unwrap();
    let buttons = doc.element_children(actions);
    let contact = doc.get_element_by_id("contact").unwrap();
    assert_eq!(doc.click(buttons[0]), ClickOutcome::ScrollIntoView { target: contact, id: "contact".into() });
    assert!(matches!(doc.click(buttons[1]), ClickOutcome::Navigate { download: true, .. }));
}

#[test]
fn site_origin_keeps_own_links_in_tab() {
    let config = RenderConfig { site_origin: Some("https://github.com".into()), ..Default::default() };
    let mut page = vitrine::new_page(&skeleton(), &config).unwrap();
    page.init(&FileSource::new("tests/fixtures"), "content.json").unwrap();
    let html = page.to_html();
    assert!(html.contains("<a href=\"https://github.com/jdupont\">GitHub</a>"));
    assert!(html.contains("rel=\"noopener noreferrer\""));
}

#[test]
fn missing_file_renders_nothing() {
    let mut page = vitrine::new_page(&skeleton(), &RenderConfig::default()).unwrap();
    let before = page.to_html();
    assert!(page.init(&FileSource::new("tests/fixtures"), "nope.json").is_none());
    assert_eq!(page.to_html(), before);
}
