//! # CLI
//!
//! The terminal client. Two modes:
//!
//! - **Interactive** (`contactz`): read a line, dispatch it, print the result, repeat
//!   until `exit` / `close` / `good_bye` / `.` or end of input. Leaving always saves.
//! - **One-shot** (`contactz add Alice 1234567890`): the trailing words are run as a
//!   single command line, then the book is saved if it changed.
//!
//! The store lives in the data dir (`$CONTACTZ_HOME`, or the platform data dir),
//! next to an optional `config.json`. `--file` and `--page-size` override the config.
//!
//! ## Module Structure
//!
//! - `setup`: clap arguments and version string
//! - `dispatch`: the command table and line resolution
//! - `repl`: the interactive loop
//! - `print`: output formatting

mod dispatch;
mod print;
mod repl;
mod setup;

use clap::Parser;
use contactz::api::ContactzApi;
use contactz::config::ContactzConfig;
use contactz::error::{ContactzError, Result};
use contactz::store::fs::FileStore;
use directories::ProjectDirs;
use setup::Cli;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "CONTACTZ_HOME";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut api = init_api(&cli)?;

    if cli.command.is_empty() {
        let stdin = io::stdin();
        let stdout = io::stdout();
        repl::run(&mut api, stdin.lock(), stdout.lock())?;
        return Ok(());
    }

    let line = cli.command.join(" ");
    let mut out = io::stdout().lock();
    match dispatch::execute(&mut api, &line) {
        Ok(outcome) => print::render(&mut out, outcome.result())?,
        Err(e) => print::render_error(&mut out, &e)?,
    }
    if api.is_dirty() {
        let saved = api.save()?;
        debug!(messages = saved.messages.len(), "one-shot save");
    }
    out.flush()?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn init_api(cli: &Cli) -> Result<ContactzApi<FileStore>> {
    let data_dir = data_dir()?;
    let config = ContactzConfig::load(&data_dir)?;

    let store_path = match &cli.file {
        Some(path) => path.clone(),
        None => config.store_path(&data_dir),
    };
    let page_size = cli.page_size.unwrap_or(config.page_size);

    info!(store = %store_path.display(), page_size, "opening address book");
    ContactzApi::open(FileStore::new(store_path), page_size)
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "contactz", "contactz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            ContactzError::FileAccess(io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine a data directory; set CONTACTZ_HOME",
            ))
        })
}
