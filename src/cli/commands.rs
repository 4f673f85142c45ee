use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[cfg(feature = "unstable-dynamic")]
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate};

#[derive(Parser, Debug)]
#[command(name = "mdtoc")]
#[command(version)]
#[command(about = "Insert a generated table of contents into a markdown document")]
#[command(
    long_about = "mdtoc - Build a table of contents from a markdown document's headings.\n\n\
    The contents block is inserted directly after the document's first line. Level-1\n\
    headings and the contents heading itself are not listed.\n\n\
    Examples:\n  \
    mdtoc                              # README.md.notoc -> README.md\n  \
    mdtoc doc.md.notoc -o doc.md       # Explicit input and output\n  \
    cat doc.md | mdtoc - --stdout      # Filter stdin to stdout\n  \
    mdtoc --check                      # Fail if README.md is out of date\n  \
    mdtoc --list --format json doc.md  # Print entries only"
)]
pub struct Cli {
    /// Source markdown document, or '-' for stdin
    #[arg(default_value = "README.md.notoc", add = markdown_file_completer())]
    pub input: PathBuf,

    /// Destination for the generated document, or '-' for stdout
    #[arg(short = 'o', long = "output", default_value = "README.md", value_name = "FILE")]
    pub output: PathBuf,

    /// Print the generated document instead of writing it
    #[arg(long = "stdout", conflicts_with_all = ["check", "list"])]
    pub stdout: bool,

    /// Exit with status 1 if the output file is not up to date
    ///
    /// Nothing is written. Useful in CI to catch a stale table of contents.
    #[arg(long = "check", conflicts_with = "list")]
    pub check: bool,

    /// Print only the table of contents entries
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Output format for --list
    #[arg(short = 'f', long = "format", default_value = "plain")]
    pub format: OutputFormat,

    /// Title of the generated section (overrides config)
    #[arg(long = "title", value_name = "TEXT")]
    pub title: Option<String>,

    /// Deepest heading level to list (overrides config)
    #[arg(short = 'L', long = "max-level", value_name = "LEVEL")]
    pub max_level: Option<usize>,

    /// Read configuration from this file instead of the default location
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write a default configuration file and exit
    ///
    /// Refuses to replace an existing file unless --force is given.
    #[arg(long = "init-config")]
    pub init_config: bool,

    /// Replace an existing configuration file with --init-config
    #[arg(long = "force", requires = "init_config")]
    pub force: bool,

    /// Show debug diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Markdown bullet lines
    Plain,
    /// JSON array of entries
    Json,
}

/// Extensions offered for the input argument.
#[cfg(feature = "unstable-dynamic")]
const DOCUMENT_EXTENSIONS: [&str; 3] = ["md", "markdown", "notoc"];

#[cfg(feature = "unstable-dynamic")]
fn markdown_file_completer() -> ArgValueCompleter {
    ArgValueCompleter::new(complete_document)
}

/// Directories and markdown sources next to the partially typed path.
#[cfg(feature = "unstable-dynamic")]
fn complete_document(current: &std::ffi::OsStr) -> Vec<CompletionCandidate> {
    use std::path::Path;

    let typed = current.to_string_lossy();
    let (dir, prefix) = match typed.rfind(['/', '\\']) {
        Some(idx) => (&typed[..=idx], &typed[idx + 1..]),
        None => ("", &typed[..]),
    };
    let search_dir = if dir.is_empty() { Path::new(".") } else { Path::new(dir) };

    let Ok(entries) = std::fs::read_dir(search_dir) else {
        return vec![];
    };

    entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().to_string();
            if !name.starts_with(prefix) {
                return None;
            }

            let path = entry.path();
            if path.is_dir() {
                return Some(CompletionCandidate::new(format!("{dir}{name}/")));
            }
            let ext = path.extension()?.to_string_lossy().to_lowercase();
            DOCUMENT_EXTENSIONS
                .contains(&ext.as_str())
                .then(|| CompletionCandidate::new(format!("{dir}{name}")))
        })
        .collect()
}

#[cfg(not(feature = "unstable-dynamic"))]
fn markdown_file_completer() -> clap::builder::ValueHint {
    clap::ValueHint::FilePath
}
