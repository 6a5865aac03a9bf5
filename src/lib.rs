pub mod cli;
pub mod error;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use anyhow::{Context, bail};
use clap::Parser;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    if !args.input.is_file() {
        bail!(
            "Could not find the file {}\n\n{}",
            args.input.display(),
            cli::usage()
        );
    }

    // 1. ── Parse ──────────────────────────────────────────────────────
    let raw = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Reading {}", args.input.display()))?;
    args.note(format!("File loaded, size: {} bytes", raw.len()));
    let doc = parser::parse(&raw)
        .with_context(|| format!("Parsing {}", args.input.display()))?;
    args.note(format!("Parsed {} views", doc.views.len()));

    if args.json {
        let text = writer::json::render(&doc).with_context(|| "Encoding parsed document")?;
        return writer::emit(&text, args.output.as_deref());
    }

    // 2. ── Process ────────────────────────────────────────────────────
    let processed = processor::run(&doc);
    args.note(format!("{} slides", processed.slide_count));
    if args.check || args.verbose {
        for warning in &processed.warnings {
            eprintln!("warning: {warning}");
        }
    }
    if args.check {
        return Ok(());
    }

    // 3. ── Write output ───────────────────────────────────────────────
    let opts = writer::html::RenderOptions {
        script_src: args.script_src.clone(),
    };
    let html = writer::html::render(&processed, &opts);
    match &args.output {
        Some(path) => args.note(format!("Writing {}", path.display())),
        None => args.note("Writing to stdout"),
    }
    writer::emit(&html, args.output.as_deref())
}
