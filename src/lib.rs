//! # mdtoc
//!
//! Generate a table of contents for a markdown document from its heading
//! markers and insert it directly after the document's first line.
//!
//! ## Example
//!
//! ```rust
//! let readme = "# My Project\n\n## Install\n\n### From source\n\n## Usage\n";
//! let with_toc = mdtoc::generate(readme);
//!
//! assert_eq!(
//!     with_toc,
//!     concat!(
//!         "# My Project\n",
//!         "## Table of Contents\n",
//!         "  - [Install](#install)\n",
//!         "    - [From source](#from-source)\n",
//!         "  - [Usage](#usage)\n",
//!         "\n## Install\n\n### From source\n\n## Usage",
//!     )
//! );
//! ```

/// Configuration file support.
///
/// Provides the optional TOML file that overrides the generator's defaults.
pub mod config;

/// Document input and output.
///
/// Loads source documents from files or stdin and writes results atomically.
pub mod input;

/// Heading extraction and slug derivation.
pub mod parser;

/// Table of contents generation.
pub mod toc;

pub use config::Config;
pub use input::DocumentError;
pub use parser::{Heading, heading_level, parse_headings, slugify};
pub use toc::{TocEntry, TocOptions, generate, generate_with};
