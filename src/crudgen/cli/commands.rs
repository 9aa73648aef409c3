//! # CLI Layer
//!
//! The only place in crudgen that:
//! - Parses command-line flags
//! - Writes to stdout/stderr
//! - Calls `std::process::exit`
//!
//! ## Exit codes
//!
//! - `0`: the run reached a terminal print, including service-reported failures
//!   (non-200 replies, `success: false`, failed validation)
//! - `1`: usage errors, unreadable UML file, serialization or network errors
//!
//! Usage errors exit from here directly after printing the help text; every other
//! fatal error is returned to `main`.

use super::args::Cli;
use super::print::{print_banner, print_messages};
use clap::{CommandFactory, Parser};
use crudgen::api::CrudgenApi;
use crudgen::commands::GenerateOptions;
use crudgen::config::ClientConfig;
use crudgen::error::Result;
use crudgen::model::Command;
use crudgen::transport::http::HttpTransport;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Project-local config directory, relative to the working directory.
const PROJECT_CONFIG_DIR: &str = ".crudgen";
/// Overrides the global config directory.
const HOME_ENV: &str = "CRUDGEN_HOME";

pub fn run() -> Result<()> {
    let cli = parse_args();
    init_logging(cli.verbose);

    let Some((uml, output)) = cli.required_paths() else {
        usage_exit("--uml and --output are required");
    };

    print_banner();
    let command: Command = match cli.cmd.parse() {
        Ok(command) => command,
        Err(e) => usage_exit(&e.to_string()),
    };

    let config = ClientConfig::discover(&config_dirs())?;
    match &config.source {
        Some(path) => log::debug!("using config {}", path.display()),
        None => log::debug!("no config file found, using built-in defaults"),
    }

    let base_url = config.api_url(cli.api_url.clone());
    log::debug!("service at {}", base_url);

    let mut api = CrudgenApi::new(HttpTransport::new()?, base_url);

    match command {
        Command::Generate => {
            let options = GenerateOptions {
                uml_path: PathBuf::from(uml),
                output_path: output.to_string(),
                framework: config.framework(cli.framework.clone()),
                package_name: config.package_name(cli.package.clone()),
            };
            handle_generate(&mut api, &options)
        }
        Command::Validate => handle_validate(&mut api, Path::new(uml)),
    }
}

fn handle_generate(api: &mut CrudgenApi<HttpTransport>, options: &GenerateOptions) -> Result<()> {
    println!(
        "📁 Generating {} project from {}",
        options.framework,
        options.uml_path.display()
    );
    let result = api.generate(options)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_validate(api: &mut CrudgenApi<HttpTransport>, uml_path: &Path) -> Result<()> {
    println!("🔍 Validating {}", uml_path.display());
    let result = api.validate(uml_path)?;
    print_messages(&result.messages);
    Ok(())
}

/// Parse flags, exiting with status 1 on malformed input.
///
/// `--help` and `--version` still exit 0.
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    }
}

fn usage_exit(message: &str) -> ! {
    println!("❌ {}", message);
    eprintln!("{}", Cli::command().render_help());
    std::process::exit(1);
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "crudgen=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Directories searched for `config.json`, most specific first.
fn config_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.join(PROJECT_CONFIG_DIR));
    }
    if let Some(home) = std::env::var_os(HOME_ENV) {
        dirs.push(PathBuf::from(home));
    } else if let Some(proj_dirs) = ProjectDirs::from("com", "crudgen", "crudgen") {
        dirs.push(proj_dirs.config_dir().to_path_buf());
    }
    dirs
}
