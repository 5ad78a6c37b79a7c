use clap::{Parser, Subcommand};
use jsscope_cli::{CliResult, api_client::ApiClient, input::read_source};
use jsscope_core::{
    analysis::Analyzer,
    config::{self, AnalyzerConfig, ValidatorKind},
    optimizer::optimize,
    tokenizer::{TokenizerMode, tokenize},
};
use jsscope_http::{
    models::{AnalysisResponse, TokenView},
    telemetry::{self, CountingAllocator},
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Analyzer configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Validator override (oxc, structural)
    #[arg(long, global = true)]
    validator: Option<ValidatorKind>,

    /// API server URL
    #[arg(
        long,
        short = 'u',
        default_value = "http://localhost:8080",
        env = "JSSCOPE_API_URL",
        global = true
    )]
    api_url: String,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate, tokenize and optimize a file locally
    Analyze {
        /// Source file, `-` for stdin
        file: PathBuf,
    },

    /// Print the token stream of a file
    Tokenize {
        /// Source file, `-` for stdin
        file: PathBuf,

        /// Tokenizer to use (lexer, coarse)
        #[arg(short, long)]
        mode: Option<TokenizerMode>,
    },

    /// Print the optimized code of a file
    Optimize {
        /// Source file, `-` for stdin
        file: PathBuf,
    },

    /// Send a file to a running server
    Remote {
        /// Source file, `-` for stdin
        file: PathBuf,
    },

    /// Show information about a running server
    Info,
}

fn output_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

fn analyzer_config(cli: &Cli) -> CliResult<AnalyzerConfig> {
    let mut analyzer = match &cli.config {
        Some(path) => config::from_file(path)?,
        None => AnalyzerConfig::default(),
    };
    if let Some(validator) = cli.validator {
        analyzer.validator = validator;
    }
    debug!("analyzer config: {:?}", analyzer);
    Ok(analyzer)
}

/// Runs the selected command and returns the process exit code.
async fn run(cli: &Cli) -> CliResult<i32> {
    match &cli.command {
        Commands::Analyze { file } => {
            let code = read_source(file)?;
            let analyzer = Analyzer::from_config(&analyzer_config(cli)?);
            let result = analyzer.analyze(&code);
            let is_valid = result.is_valid();
            output_json(
                &AnalysisResponse::from_result(result, telemetry::memory_usage()),
                cli.pretty,
            )?;
            Ok(if is_valid { 0 } else { 1 })
        }
        Commands::Tokenize { file, mode } => {
            let code = read_source(file)?;
            let mode = match mode {
                Some(mode) => *mode,
                None => analyzer_config(cli)?.tokenizer,
            };
            let tokens: Vec<TokenView> = tokenize(&code, mode)
                .into_iter()
                .map(TokenView::from)
                .collect();
            output_json(&tokens, cli.pretty)?;
            Ok(0)
        }
        Commands::Optimize { file } => {
            let code = read_source(file)?;
            println!("{}", optimize(&code));
            Ok(0)
        }
        Commands::Remote { file } => {
            let code = read_source(file)?;
            let client = ApiClient::new(&cli.api_url);
            let response = client.analyze(&code).await?;
            output_json(&response, cli.pretty)?;
            Ok(if response.is_valid { 0 } else { 1 })
        }
        Commands::Info => {
            let client = ApiClient::new(&cli.api_url);
            output_json(&client.system_info().await?, cli.pretty)?;
            Ok(0)
        }
    }
}

#[tokio::main]
async fn main() {
    let _ = dotenv::dotenv();

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_level.as_str().into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
