//! Catalog browser: filters the product catalog and prints it as a table.
//!
//! This binary delegates to `product_catalog::browse_cli` for argument
//! handling and rendering, keeping the behaviour testable without spawning a
//! process.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use ortho_config::OrthoConfig;
use product_catalog::CatalogSettings;
use product_catalog::browse_cli::{BrowseArgs, BrowseError, browse};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), BrowseError> {
    let args = BrowseArgs::parse();
    // Flags belong to clap; settings only read the environment and files.
    let loaded = CatalogSettings::load_from_iter([OsString::from("catalog-browse")]);
    init_tracing(loaded.as_ref().is_ok_and(|s| s.log_json));
    let settings = loaded.map_err(|err| BrowseError::Settings {
        message: err.to_string(),
    })?;

    let view = browse(&args, &settings, io::stdout().lock())?;
    info!(rows = view.rows.len(), "catalog rendered");
    Ok(())
}

fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}
