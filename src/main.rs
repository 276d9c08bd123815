use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tuk_core::constants::{CODESYSTEM_FILE_ENV, ID_ROOT_ENV};
use tuk_core::{text, time, xds, CoreConfig, TukContext};
use tuk_id::{Oid, UuidService};

#[derive(Parser)]
#[command(name = "tuk")]
#[command(about = "TUK XDS/XDW helper utilities")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate dotted-decimal unique identifiers
    NewId {
        /// Number of identifiers to generate
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Break an identifier into root, timestamp and seed
    ParseId {
        /// Identifier to parse
        id: String,
    },
    /// Generate a random UUID
    Uuid,
    /// Look up a code in the configured code system
    Lookup {
        /// Code to map
        key: String,
    },
    /// Print the current UK time
    Time {
        /// Drop fractional seconds and offset
        #[arg(long)]
        pretty: bool,
    },
    /// Split an XDW key into pathway and NHS number
    SplitXdwKey {
        /// Pathway name followed by a 10-digit NHS number
        key: String,
    },
    /// Extract the first element with the given name from an XML file
    Xml {
        /// Element name, including any namespace prefix
        node: String,
        /// File containing the XML message
        file: std::path::PathBuf,
    },
    /// Format an XCN author value as "family given"
    AuthorPerson {
        /// XCN value, e.g. "C1234^Smith^John"
        value: String,
    },
    /// Format an XON institution value
    AuthorInstitution {
        /// XON value, e.g. "Leeds Teaching Hospitals^^^^^^^^^RR8"
        value: String,
    },
    /// Invoke a template helper by name
    Call {
        /// Helper name, e.g. "mappedid" or "newid"
        name: String,
        /// Helper arguments
        args: Vec<String>,
    },
}

/// Entry point for the `tuk` command.
///
/// # Environment Variables
/// - `TUK_CODESYSTEM_FILE`: JSON code system to load at startup (default: none)
/// - `TUK_ID_ROOT`: dotted-decimal identifier root (default: "1.2.40.0.13.1.1.3542466645")
/// - `RUST_LOG`: log filter; logs go to stderr
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("tuk=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(command) => run(command, load_context),
        None => {
            println!("Use 'tuk --help' for commands");
            Ok(())
        }
    }
}

/// Resolves configuration from the environment and builds the shared context.
///
/// Only commands that issue identifiers or read the code system call this, so a broken
/// `TUK_CODESYSTEM_FILE` does not affect the other commands.
fn load_context() -> anyhow::Result<TukContext> {
    let config = CoreConfig::from_env_values(
        std::env::var(CODESYSTEM_FILE_ENV).ok(),
        std::env::var(ID_ROOT_ENV).ok(),
    )?;

    tracing::info!("++ Identifier root {}", config.id_root());
    if let Some(path) = config.codesystem_file() {
        tracing::info!("++ Loading code system from {}", path.display());
    }

    let ctx = TukContext::from_config(&config).inspect_err(|e| {
        tracing::error!("failed to initialise context: {}", e);
    })?;
    Ok(ctx)
}

/// Executes one subcommand. `context` is invoked lazily by the commands that need it.
fn run(
    command: Commands,
    context: impl Fn() -> anyhow::Result<TukContext>,
) -> anyhow::Result<()> {
    match command {
        Commands::NewId { count } => {
            let ctx = context()?;
            for _ in 0..count {
                println!("{}", ctx.new_id());
            }
        }
        Commands::ParseId { id } => {
            let oid: Oid = id.parse()?;
            println!("root: {}", oid.root());
            println!("timestamp: {}", oid.timestamp());
            println!("seed: {}", oid.seed());
        }
        Commands::Uuid => {
            println!("{}", UuidService::new());
        }
        Commands::Lookup { key } => {
            println!("{}", context()?.lookup(&key));
        }
        Commands::Time { pretty } => {
            if pretty {
                println!("{}", time::tuk_pretty_time());
            } else {
                println!("{}", time::tuk_time());
            }
        }
        Commands::SplitXdwKey { key } => {
            let parts = xds::split_xdw_key(&key);
            println!("{}", serde_json::to_string_pretty(&parts)?);
        }
        Commands::Xml { node, file } => {
            let message = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            match text::xml_node_list(&message, &node) {
                Some(element) => println!("{}", element),
                None => anyhow::bail!("element {} not found in {}", node, file.display()),
            }
        }
        Commands::AuthorPerson { value } => {
            println!("{}", xds::pretty_author_person(&value));
        }
        Commands::AuthorInstitution { value } => {
            println!("{}", xds::pretty_author_institution(&value));
        }
        Commands::Call { name, args } => {
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            println!("{}", context()?.call(&name, &args)?);
        }
    }

    Ok(())
}
