//! # mdtoc
//!
//! Insert a generated table of contents into a markdown document.
//!
//! ## Usage
//!
//! Regenerate `README.md` from `README.md.notoc`:
//! ```sh
//! mdtoc
//! ```
//!
//! Filter stdin to stdout:
//! ```sh
//! cat doc.md | mdtoc - --stdout
//! ```
//!
//! Verify in CI that the committed file is current:
//! ```sh
//! mdtoc --check
//! ```

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, OutputFormat};
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, bail, eyre};
use mdtoc::input::{self, InputSource, OutputTarget};
use mdtoc::toc::{self, TocEntry, TocOptions};
use mdtoc::{Config, DocumentError};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Handle dynamic shell completions
    #[cfg(feature = "unstable-dynamic")]
    clap_complete::CompleteEnv::with_factory(|| {
        use clap::CommandFactory;
        Cli::command()
    })
    .complete();

    let args = Cli::parse();
    init_tracing(args.verbose)?;

    if args.init_config {
        return init_config(&args);
    }

    validate_args(&args)?;

    let options = resolve_options(&args, &load_config(&args));
    let source = InputSource::from_arg(&args.input);
    let document = input::read_document(&source)
        .wrap_err_with(|| format!("Error reading input {}", source))?;

    if args.list {
        let entries = toc::entries(&document, &options);
        print_entries(&entries, &args.format)?;
        return Ok(());
    }

    let generated = toc::generate_with(&document, &options);

    if args.check {
        let output = InputSource::File(args.output.clone());
        match check_output(&output, &generated)? {
            CheckOutcome::UpToDate => {
                tracing::info!(output = %output, "table of contents is up to date");
                return Ok(());
            }
            CheckOutcome::Missing => {
                eprintln!("{} does not exist; run mdtoc to create it", output);
            }
            CheckOutcome::Stale => {
                eprintln!("{} is out of date; run mdtoc to regenerate it", output);
            }
        }
        process::exit(1);
    }

    let target = if args.stdout {
        OutputTarget::Stdout
    } else {
        OutputTarget::from_arg(&args.output)
    };
    input::write_document(&target, &generated)
        .wrap_err_with(|| format!("Error writing output {}", target))?;

    tracing::info!(input = %source, output = %target, "table of contents written");
    Ok(())
}

fn init_tracing(verbose: bool) -> Result<()> {
    let directive = if verbose { "mdtoc=debug" } else { "mdtoc=warn" };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(directive))?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .without_time()
        .init();
    Ok(())
}

/// Combinations clap cannot express on its own.
fn validate_args(args: &Cli) -> Result<()> {
    if args.check && args.output.as_os_str() == "-" {
        bail!("--check needs an output file to compare against, not '-'");
    }
    Ok(())
}

fn load_config(args: &Cli) -> Config {
    match args.config.as_deref() {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Config file values, overridden by CLI flags.
fn resolve_options(args: &Cli, config: &Config) -> TocOptions {
    let mut options = config.toc.to_options();
    if let Some(ref title) = args.title {
        options.title = title.clone();
    }
    if let Some(level) = args.max_level {
        options.max_level = Some(level);
    }
    options
}

fn init_config(args: &Cli) -> Result<()> {
    let config = Config::default();
    let path = match args.config {
        Some(ref path) => config.save_to(path, args.force).map(|_| path.clone()),
        None => config.save(args.force),
    }
    .map_err(|e| eyre!("Error saving config: {} (pass --force to replace it)", e))?;

    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn print_entries(entries: &[TocEntry], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            for entry in entries {
                println!("{}", entry.render());
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(entries)?;
            println!("{}", json);
        }
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum CheckOutcome {
    UpToDate,
    Stale,
    Missing,
}

/// Compare the document currently at `output` with the generated one.
fn check_output(output: &InputSource, generated: &str) -> Result<CheckOutcome> {
    let current = match input::read_document(output) {
        Ok(content) => content,
        Err(DocumentError::Unavailable { ref source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            return Ok(CheckOutcome::Missing);
        }
        Err(e) => return Err(e).wrap_err("Error reading output for check"),
    };

    Ok(if current == generated {
        CheckOutcome::UpToDate
    } else {
        CheckOutcome::Stale
    })
}
