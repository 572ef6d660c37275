//! Render the bundled fixture page and print a short summary
//!
//! cargo run --example render_fixture

use std::path::Path;

use vitrine::loader::FileSource;
use vitrine::RenderConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let skeleton = std::fs::read_to_string(fixtures.join("index.html"))?;

    // content.json sits next to the skeleton, so the site root is the fixture dir
    let config = RenderConfig {
        content_path: "./content.json".into(),
        ..Default::default()
    };
    let source = FileSource::new(&fixtures);

    let mut page = vitrine::new_page(&skeleton, &config)?;
    let Some(report) = page.init(&source, &config.content_path) else {
        eprintln!("could not load {}", fixtures.join("content.json").display());
        return Ok(());
    };

    for (section, count) in &report.rendered {
        println!("{:<14} {} item(s)", format!("{:?}", section), count);
    }
    if !report.skipped.is_empty() {
        println!("skipped: {:?}", report.skipped);
    }

    let html = page.to_html();
    println!("\n{} bytes of HTML", html.len());
    Ok(())
}
