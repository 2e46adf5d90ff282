use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use resource_client::client::RESOURCE_TYPES;
use resource_client::generator::{Generator, NewResource};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Maintain resources.json and the generated shared resource clients
#[derive(Parser, Debug)]
#[command(name = "generate-clients", version, about, long_about = None)]
struct Args {
    /// Project root holding resources.json and src/clients
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a resource and regenerate clients
    Add {
        resource_id: String,
        name: String,
        /// One of: postgres, custom-api, hubspot, s3
        #[arg(value_name = "TYPE")]
        resource_type: String,
        description: String,
        application_id: String,
    },
    /// Remove a resource by name and regenerate clients
    Remove { name: String },
    /// List registered resources
    List,
    /// Rewrite all clients from resources.json
    Regenerate,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(
    level: LogLevel,
    log_file: Option<&PathBuf>,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let Some(log_path) = log_file else {
        tracing_subscriber::fmt()
            .with_max_level(tracing_level)
            .with_writer(std::io::stderr.with_max_level(tracing_level))
            .with_target(false)
            .init();
        return Ok(None);
    };

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn run(args: Args) -> Result<()> {
    let generator = Generator::new(&args.root);

    match args.command {
        Command::Add {
            resource_id,
            name,
            resource_type,
            description,
            application_id,
        } => {
            let added = generator.add(NewResource {
                id: resource_id,
                name,
                resource_type,
                description,
                application_id,
            })?;
            println!("Added resource: {}", added.name);
            println!("   Type: {}", added.resource_type);
            println!("   ID: {}", added.id);
            println!("Generated clients");
        }
        Command::Remove { name } => {
            let removed = generator.remove(&name)?;
            println!("Removed resource: {}", removed.name);
            println!("   ID: {}", removed.id);
            println!("Generated clients");
        }
        Command::List => {
            let resources = generator.list()?;
            if resources.is_empty() {
                println!("No resources configured");
                println!("Types: {}", RESOURCE_TYPES.join(" | "));
                return Ok(());
            }
            println!("Resources ({}):\n", resources.len());
            for resource in resources {
                println!("{}\n", resource);
            }
        }
        Command::Regenerate => {
            let count = generator.regenerate()?;
            println!("Generated {} client(s)", count);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_guard = setup_logging(args.log_level, args.log_file.as_ref())?;

    let result = run(args);
    drop(log_guard);

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    Ok(())
}
