use clap::Parser;
use jsscope_core::{config::ValidatorKind, tokenizer::TokenizerMode};
use jsscope_http::{self, server::ServerConfig, telemetry::CountingAllocator};
use std::path::PathBuf;

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

/// jsscope HTTP API Server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file; flags below override its values
    #[arg(short, long, env = "JSSCOPE_CONFIG")]
    config: Option<PathBuf>,

    /// Host address to bind to [default: 127.0.0.1]
    #[arg(short = 'H', long, env = "JSSCOPE_HOST")]
    host: Option<String>,

    /// Port to listen on [default: 8080]
    #[arg(short, long, env = "JSSCOPE_PORT")]
    port: Option<u16>,

    /// Tokenizer used for valid code (lexer, coarse)
    #[arg(long)]
    tokenizer: Option<TokenizerMode>,

    /// Validator deciding validity (oxc, structural)
    #[arg(long)]
    validator: Option<ValidatorKind>,

    /// Largest accepted snippet, in bytes
    #[arg(long)]
    max_source_bytes: Option<usize>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn server_config(&self) -> Result<ServerConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(tokenizer) = self.tokenizer {
            config.analyzer.tokenizer = tokenizer;
        }
        if let Some(validator) = self.validator {
            config.analyzer.validator = validator;
        }
        if let Some(max_source_bytes) = self.max_source_bytes {
            config.analyzer.max_source_bytes = max_source_bytes;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    jsscope_http::init_tracing(&cli.log_level);

    let config = cli.server_config()?;
    if let Some(path) = &cli.config {
        tracing::info!("Loaded configuration from {}", path.display());
    }

    jsscope_http::start_with_config(config).await?;

    Ok(())
}
