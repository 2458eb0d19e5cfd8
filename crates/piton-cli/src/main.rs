use clap::{ArgAction, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use piton_flags::{CompilationDatabase, Provider, ProviderConfig, QueryOptions};
use piton_uart::regs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "piton")]
#[command(author, version, about = "Tooling for the piton bare-metal firmware tree")]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the semantic-completion flags for a source file
    Flags {
        /// Source file being completed
        file: PathBuf,

        /// compile_commands.json to consult before the static flags
        #[arg(long)]
        database: Option<PathBuf>,

        /// Project configuration (piton.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Emit the JSON record instead of one flag per line
        #[arg(long)]
        json: bool,
    },

    /// Print the BCM2837 register map
    Regs {
        /// Emit JSON instead of the text table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Flags {
            file,
            database,
            config,
            json,
        } => handle_flags(&file, database, config, json),
        Commands::Regs { json } => handle_regs(json),
    }
}

fn handle_flags(
    file: &PathBuf,
    database: Option<PathBuf>,
    config: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let mut provider = match config {
        Some(path) => {
            let config = ProviderConfig::from_file(&path).into_diagnostic()?;
            Provider::from_config(&config).into_diagnostic()?
        }
        None => Provider::new(),
    };

    if let Some(path) = database {
        let db = CompilationDatabase::from_file(&path).into_diagnostic()?;
        provider = provider.with_database(db);
    }

    let record = provider.query(file, &QueryOptions::new());

    if json {
        println!("{}", record.to_json().into_diagnostic()?);
    } else {
        for flag in &record.flags {
            println!("{flag}");
        }
    }

    Ok(())
}

fn handle_regs(json: bool) -> Result<()> {
    let map = regs::register_map();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&map).into_diagnostic()?
        );
        return Ok(());
    }

    for reg in &map {
        println!("{:<16} {:#010X}  {}", reg.name, reg.addr, reg.doc);
        for field in &reg.fields {
            println!(
                "    {:<14} {:>8}  {:<2}  {}",
                field.name,
                field.bit_range(),
                field.access,
                field.doc
            );
        }
    }

    Ok(())
}

/// Install the tracing subscriber; `RUST_LOG` overrides the verbosity flags.
fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "piton_flags=warn",
        1 => "piton_flags=info",
        _ => "piton_flags=debug",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init();
}
