use anyhow::Context;
use clap::Parser;
use kirikae::config::RewriteConfig;
use kirikae::error::RewriteError;
use kirikae::rewrite::{FilterDecision, RequestFilter};
use std::io::{Read, Write};
use std::path::PathBuf;

/// Kirikae - rewrites image sizing requests into canonical image-service paths
#[derive(Parser, Debug)]
#[command(name = "kirikae")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (reference configuration when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON request record to rewrite (stdin when omitted)
    #[arg(short, long, conflicts_with = "uri")]
    input: Option<PathBuf>,

    /// Rewrite a bare uri instead of a request record
    #[arg(long)]
    uri: Option<String>,

    /// Query string for --uri, without the leading '?'
    #[arg(long, default_value = "", requires = "uri")]
    query: String,

    /// Accept header value for --uri
    #[arg(long, requires = "uri")]
    accept: Option<String>,

    /// Test configuration and exit
    #[arg(long)]
    test: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<RewriteConfig, RewriteError> {
    let config = match path {
        Some(path) => RewriteConfig::from_file(path).map_err(RewriteError::Config)?,
        None => RewriteConfig::default(),
    };
    config.validate().map_err(RewriteError::Config)?;
    Ok(config)
}

fn read_input(path: Option<&PathBuf>) -> Result<String, RewriteError> {
    if let Some(path) = path {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    Ok(raw)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    kirikae::logging::init_subscriber(args.json_logs)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging subsystem: {}", e))?;

    let config = load_config(args.config.as_ref()).context("Failed to load configuration")?;

    tracing::info!(
        config_file = ?args.config,
        allowed_dimensions = ?config.allowed_dimensions,
        default_dimension = config.default_dimension,
        variance = config.variance,
        "Configuration loaded successfully"
    );

    if args.test {
        return Ok(());
    }

    let filter = RequestFilter::new(config);
    let mut stdout = std::io::stdout().lock();

    if let Some(uri) = args.uri.as_deref() {
        let rewritten = match filter.decide(uri, &args.query, args.accept.as_deref()) {
            FilterDecision::Rewrite(path) => path.to_string(),
            FilterDecision::PassThrough => uri.to_string(),
            FilterDecision::Malformed(err) => {
                tracing::warn!(
                    uri = %uri,
                    error = %err,
                    "Cannot rewrite malformed path, passing through"
                );
                uri.to_string()
            }
        };
        writeln!(stdout, "{}", rewritten)?;
        return Ok(());
    }

    let raw = read_input(args.input.as_ref()).context("Failed to read request record")?;
    let output = filter
        .apply_record(&raw)
        .context("Failed to process request record")?;
    stdout.write_all(output.as_bytes())?;
    if output != raw {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;

    Ok(())
}
