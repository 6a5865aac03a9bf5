use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input file in raw TraceyText format
    pub input: PathBuf,
    /// Output file; stdout when omitted (`-oFILE` works too)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Path of the display library used in the generated <script> include
    #[arg(long, default_value = "TraceyText.js")]
    pub script_src: String,
    /// Emit the parsed document as JSON instead of HTML
    #[arg(long, conflicts_with = "check")]
    pub json: bool,
    /// Parse and lint only, write nothing
    #[arg(long)]
    pub check: bool,
    /// Print progress and warnings to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Progress note on stderr; stdout may be carrying the output.
    pub fn note(&self, msg: impl std::fmt::Display) {
        if self.verbose {
            eprintln!("{msg}");
        }
    }
}

pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}
