//! docrecord: render package documentation as record text.
//!
//! - `docrecord render docs.json --number 1.0.0` prints one version record
//! - `docrecord build -c libraries.toml -d cache -o full-db.json` renders every
//!   configured package into a `{"docs": [...]}` JSON document
//!
//! Logs go to stderr; set `RUST_LOG=debug` for per-file detail.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docrecord::{
    modules_from_json, to_string_with_options, Catalog, DelimiterPolicy, DocsCollection,
    LibrarySpec, Module, RecordOptions, Version,
};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "docrecord",
    version,
    about = "Convert package documentation into record-literal text"
)]
struct Cli {
    /// How to embed strings containing quote delimiters: verbatim, escape or reject
    #[arg(long, global = true, default_value = "verbatim")]
    delimiters: DelimiterPolicy,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one documentation.json file (or stdin) as a version record
    Render {
        /// Documentation file. Reads stdin when omitted.
        file: Option<PathBuf>,

        /// Version number written into the record
        #[arg(short = 'n', long)]
        number: String,
    },

    /// Render every library in a catalog into a JSON collection
    Build {
        /// Catalog of libraries and versions (TOML)
        #[arg(short = 'c', long)]
        config: PathBuf,

        /// Directory holding <user>_<namespace>/<version>.json files
        #[arg(short = 'd', long)]
        docs_dir: PathBuf,

        /// Output file for the {"docs": [...]} collection
        #[arg(short = 'o', long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let options = RecordOptions::new().with_delimiters(cli.delimiters);

    match cli.command {
        Command::Render { file, number } => render(file.as_deref(), &number, &options),
        Command::Build {
            config,
            docs_dir,
            output,
        } => build(&config, &docs_dir, &output, &options),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn render(file: Option<&Path>, number: &str, options: &RecordOptions) -> Result<()> {
    let json = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            input
        }
    };

    let modules = modules_from_json(&json).context("failed to decode documentation")?;
    debug!(modules = modules.len(), number, "rendering version");

    let text = to_string_with_options(&Version::new(number, modules), options)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}

fn build(config: &Path, docs_dir: &Path, output: &Path, options: &RecordOptions) -> Result<()> {
    let catalog = Catalog::from_path(config)
        .with_context(|| format!("failed to load catalog {}", config.display()))?;
    info!(
        libraries = catalog.libraries.len(),
        delimiters = %options.delimiters,
        "building collection"
    );

    let mut collection = DocsCollection::default();
    for library in &catalog.libraries {
        info!(library = %library.name(), versions = library.versions.len(), "rendering library");
        let package = library
            .render(options, |lib, version| load_docs(lib, docs_dir, version))
            .with_context(|| format!("failed to render {}", library.name()))?;
        collection.docs.push(package);
    }

    let json = collection.to_json()?;
    fs::write(output, json).with_context(|| format!("failed to write {}", output.display()))?;
    info!(output = %output.display(), "wrote collection");
    Ok(())
}

fn load_docs(lib: &LibrarySpec, docs_dir: &Path, version: &str) -> docrecord::Result<Vec<Module>> {
    let path = lib.docs_path(docs_dir, version);
    debug!(path = %path.display(), "reading documentation");

    let json = fs::read_to_string(&path)
        .map_err(|e| docrecord::Error::io(&format!("{}: {}", path.display(), e)))?;
    modules_from_json(&json)
}
