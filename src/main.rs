use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use vitrine::loader::{ContentSource, FileSource};
use vitrine::{RenderConfig, RenderReport};

#[derive(Parser)]
#[command(name = "vitrine", version, about = "Render a portfolio page from its JSON content")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Populate a page skeleton and print or write the resulting HTML
    Render(RenderArgs),
    /// Print the normalized content document as JSON
    Inspect(SourceArgs),
}

#[derive(Args)]
struct SourceArgs {
    /// Site-relative path of the content document
    #[arg(long, default_value = "./data/content.json")]
    content: String,
    /// Directory the content path is resolved against
    #[arg(long)]
    root: Option<PathBuf>,
    /// Fetch the content over HTTP relative to this URL instead of from disk
    #[arg(long)]
    base_url: Option<String>,
    /// HTTP timeout in milliseconds (none by default)
    #[arg(long)]
    timeout_ms: Option<u64>,
}

#[derive(Args)]
struct RenderArgs {
    /// HTML page skeleton
    #[arg(long)]
    skeleton: PathBuf,
    #[command(flatten)]
    source: SourceArgs,
    /// Origin of the deployed site; links to it are not opened in a new tab
    #[arg(long)]
    origin: Option<String>,
    /// CV link used when the content has none
    #[arg(long)]
    cv: Option<String>,
    /// Output file (stdout when omitted)
    #[arg(long, short)]
    out: Option<PathBuf>,
}

fn make_source(args: &SourceArgs, default_root: &Path, config: &RenderConfig) -> anyhow::Result<Box<dyn ContentSource>> {
    match &args.base_url {
        #[cfg(feature = "http")]
        Some(base) => Ok(Box::new(vitrine::loader::HttpSource::new(base, config)?)),
        #[cfg(not(feature = "http"))]
        Some(_) => {
            let _ = config;
            anyhow::bail!("--base-url requires the `http` feature")
        }
        None => {
            let root = args.root.clone().unwrap_or_else(|| default_root.to_path_buf());
            Ok(Box::new(FileSource::new(root)))
        }
    }
}

fn config_for(args: &SourceArgs) -> RenderConfig {
    RenderConfig {
        content_path: args.content.clone(),
        timeout_ms: args.timeout_ms,
        ..Default::default()
    }
}

fn render(args: RenderArgs) -> anyhow::Result<ExitCode> {
    let mut config = config_for(&args.source);
    config.site_origin = args.origin.clone();
    if let Some(cv) = &args.cv {
        config.default_cv = cv.clone();
    }

    let skeleton = fs::read_to_string(&args.skeleton)
        .with_context(|| format!("reading skeleton {}", args.skeleton.display()))?;
    let site_root = args.skeleton.parent().unwrap_or_else(|| Path::new("."));
    let source = make_source(&args.source, site_root, &config)?;

    let mut page = vitrine::new_page(&skeleton, &config)?;
    let report = page.init(source.as_ref(), &config.content_path);
    if let Some(report) = &report {
        log_report(report);
    }

    let html = page.to_html();
    match &args.out {
        Some(path) => fs::write(path, html).with_context(|| format!("writing {}", path.display()))?,
        None => println!("{}", html),
    }

    Ok(if report.is_some() { ExitCode::SUCCESS } else { ExitCode::from(1) })
}

fn log_report(report: &RenderReport) {
    for (section, count) in &report.rendered {
        log::info!("{:?}: {} item(s)", section, count);
    }
    for section in &report.skipped {
        log::info!("{:?}: container {} not found", section, section.selector());
    }
}

fn inspect(args: SourceArgs) -> anyhow::Result<ExitCode> {
    let config = config_for(&args);
    let source = make_source(&args, Path::new("."), &config)?;
    let doc = vitrine::try_load(source.as_ref(), &config.content_path)
        .with_context(|| format!("loading {}", source.describe(&config.content_path)))?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Render(args) => render(args),
        Command::Inspect(args) => inspect(args),
    };
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("vitrine: {:#}", e);
            ExitCode::from(2)
        }
    }
}
