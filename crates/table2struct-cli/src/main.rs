//! table2struct CLI - generate Go structs from MySQL tables.

use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use table2struct::{Config, Dsn, GenError, Generator, InspectorImpl};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "table2struct")]
#[command(about = "Generate Go structs from MySQL table definitions")]
#[command(version)]
struct Cli {
    /// Package name for generated files
    #[arg(short, long)]
    package: Option<String>,

    /// DB connect DSN, e.g. root:root@localhost/flarum?parseTime=true
    #[arg(long)]
    dsn: Option<String>,

    /// Tables to export, separated by commas [default: all tables]
    #[arg(short, long)]
    tables: Option<String>,

    /// Output directory [default: current directory]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Read table definitions from a YAML schema file instead of a database
    #[arg(long, conflicts_with = "dsn")]
    schema_file: Option<PathBuf>,

    /// Path to a YAML configuration file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output JSON result to stdout
    #[arg(long)]
    output_json: bool,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info")]
    verbosity: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> Result<(), GenError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format);

    let config = match build_config(&cli)? {
        Some(config) => config,
        None => {
            // Missing required settings: show usage, not an error
            Cli::command().print_help()?;
            println!();
            return Ok(());
        }
    };
    config.validate()?;

    let inspector = InspectorImpl::from_config(&config).await?;
    let generator = Generator::new(inspector, &config);
    let result = generator.run().await;
    generator.close().await;
    let result = result?;

    if cli.output_json {
        println!("{}", result.to_json()?);
    } else {
        info!(
            "Wrote {} files to {:?}",
            result.files_written(),
            result.output_dir
        );
        if result.has_warnings() {
            eprintln!("Some columns were skipped or left unmapped; see warnings above.");
        }
    }

    Ok(())
}

/// Merge the optional config file with command-line flags.
///
/// Returns `None` when the package name or a schema source is missing.
fn build_config(cli: &Cli) -> Result<Option<Config>, GenError> {
    let mut config = match &cli.config {
        Some(path) => {
            let config = Config::load(path)?;
            info!("Loaded configuration from {:?}", path);
            config
        }
        None => Config::default(),
    };

    if let Some(package) = &cli.package {
        config.package = package.clone();
    }
    if let Some(dsn) = &cli.dsn {
        config.dsn = Some(dsn.parse::<Dsn>()?);
        config.schema_file = None;
    }
    if let Some(path) = &cli.schema_file {
        config.schema_file = Some(path.clone());
        config.dsn = None;
    }
    if let Some(tables) = &cli.tables {
        config = config.with_table_list(tables);
    }
    if let Some(output) = &cli.output {
        config.output_dir = output.clone();
    }

    if config.package.is_empty() || (config.dsn.is_none() && config.schema_file.is_none()) {
        return Ok(None);
    }

    Ok(Some(config))
}

fn setup_logging(verbosity: &str, format: &str) {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
