//! OpenAPI Enhancer CLI
//!
//! Downloads or reads an OpenAPI v2 document and writes the enhanced version.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use openapi_enhancer::{process, Credentials, EnhanceOptions, DEFAULT_OUTPUT};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "openapi-enhancer")]
#[command(about = "Downloads an OpenAPI v2 spec from a CMS backend and optimizes it")]
#[command(version)]
struct Cli {
    /// Input spec: file path or URL (http:// or https://)
    #[arg(short, long, visible_alias = "inputSpec")]
    input_spec: Option<String>,

    /// Output file
    #[arg(short, long, visible_alias = "outputSpec", default_value = DEFAULT_OUTPUT)]
    output_spec: PathBuf,

    /// User name for HTTP basic authentication
    #[arg(short, long, env = "OPENAPI_ENHANCER_USER")]
    user: Option<String>,

    /// Password for HTTP basic authentication
    #[arg(short, long, env = "OPENAPI_ENHANCER_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else if cli.quiet {
        LevelFilter::WARN
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let options = EnhanceOptions {
        input: cli.input_spec,
        output: cli.output_spec,
        credentials: Credentials::from_parts(cli.user.as_deref(), cli.password.as_deref()),
    };

    match process(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
