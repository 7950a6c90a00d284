use buildintel_cli::cli::{AnalyzeArgs, CliArgs, Commands, HealthArgs, NormalizeArgs, OutputFormatter};
use buildintel_cli::{NAME, VERSION};
use buildintel_client::{AnalysisBackend, HttpAnalysisClient};
use buildintel_core::{BuildIntelConfig, ProjectAnalysis, SystemClock};
use buildintel_pipeline::normalize_response;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tracing::{debug, error, info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("{} v{} starting", NAME, VERSION);

    let exit_code = match &args.command {
        Commands::Analyze(analyze_args) => handle_analyze(analyze_args).await,
        Commands::Normalize(normalize_args) => handle_normalize(normalize_args),
        Commands::Health(health_args) => handle_health(health_args).await,
    };

    process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let level = if let Some(level_str) = &args.log_level {
            parse_level(level_str)
        } else if args.verbose {
            Level::DEBUG
        } else if args.quiet {
            Level::ERROR
        } else {
            let level_str = env::var("BUILDINTEL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
            parse_level(&level_str)
        };

        let mut filter = EnvFilter::from_default_env();

        if env::var("RUST_LOG").is_err() {
            filter = filter
                .add_directive(format!("buildintel={}", level).parse().unwrap())
                .add_directive("hyper=warn".parse().unwrap())
                .add_directive("reqwest=warn".parse().unwrap());
        }

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    });
}

fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

fn build_config(api_url: Option<&str>, timeout: Option<u64>) -> BuildIntelConfig {
    let default_config = BuildIntelConfig::default();
    BuildIntelConfig {
        api_base_url: api_url
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or(default_config.api_base_url),
        request_timeout_secs: timeout.unwrap_or(default_config.request_timeout_secs),
        log_level: default_config.log_level,
    }
}

async fn handle_analyze(args: &AnalyzeArgs) -> i32 {
    let config = build_config(args.api_url.as_deref(), args.timeout);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        eprintln!("\nPlease check your environment variables and command-line arguments.");
        return 1;
    }

    let client = match HttpAnalysisClient::new(&config) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to initialize backend client: {}", e);
            return 1;
        }
    };

    info!("Analyzing project: {}", args.project);

    let spinner = if atty::is(atty::Stream::Stderr) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}").unwrap_or(ProgressStyle::default_spinner()),
        );
        bar.set_message(format!("Analyzing {}...", args.project));
        bar.enable_steady_tick(Duration::from_millis(100));
        Some(bar)
    } else {
        None
    };

    let raw = client.analyze(&args.project).await;

    if let Some(bar) = &spinner {
        bar.finish_and_clear();
    }

    let raw = match raw {
        Ok(payload) => payload,
        Err(e) => {
            error!("Analysis request failed: {}", e);
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let analysis = match normalize_response(&raw, &SystemClock) {
        Ok(a) => a,
        Err(e) => {
            error!("Failed to normalize backend response: {}", e);
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    emit(&analysis, args.format, args.output.as_ref())
}

fn handle_normalize(args: &NormalizeArgs) -> i32 {
    let content = match fs::read_to_string(&args.file) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to read payload file {}: {}", args.file.display(), e);
            return 1;
        }
    };

    let raw: serde_json::Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            error!("Failed to parse payload file: {}", e);
            return 1;
        }
    };

    let analysis = match normalize_response(&raw, &SystemClock) {
        Ok(a) => a,
        Err(e) => {
            error!("Failed to normalize payload: {}", e);
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    emit(&analysis, args.format, args.output.as_ref())
}

async fn handle_health(args: &HealthArgs) -> i32 {
    let config = build_config(args.api_url.as_deref(), None);

    if config.api_base_url.is_empty() {
        error!("No backend configured");
        eprintln!("Backend: not configured. Set BUILDINTEL_API_URL or pass --api-url.");
        return 1;
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new());

    match client.get(&config.api_base_url).send().await {
        Ok(_) => {
            info!("Backend is reachable at {}", config.api_base_url);
            println!("Backend: reachable at {}", config.api_base_url);
            0
        }
        Err(e) => {
            error!("Backend is not reachable: {}", e);
            println!("Backend: unreachable at {} ({})", config.api_base_url, e);
            1
        }
    }
}

fn emit(
    analysis: &ProjectAnalysis,
    format: buildintel_cli::cli::OutputFormat,
    output: Option<&PathBuf>,
) -> i32 {
    let formatter = OutputFormatter::new(format);

    let rendered = match formatter.format(analysis) {
        Ok(out) => out,
        Err(e) => {
            error!("Failed to format output: {}", e);
            return 1;
        }
    };

    if let Some(output_file) = output {
        match fs::write(output_file, &rendered) {
            Ok(_) => {
                info!("Card written to: {}", output_file.display());
                println!("Card written to: {}", output_file.display());
            }
            Err(e) => {
                error!("Failed to write output to file: {}", e);
                return 1;
            }
        }
    } else {
        println!("{}", rendered);
    }

    0
}
