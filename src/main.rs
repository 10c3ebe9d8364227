use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Storybook scaffolding and arg-table stories",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add Storybook to a project
    Init {
        #[command(flatten)]
        args: commands::init::InitArgs,
    },

    /// Browse the built-in arg-table stories
    Stories {
        #[command(subcommand)]
        command: StoriesCommands,
    },
}

#[derive(Subcommand)]
enum StoriesCommands {
    /// List registered stories grouped by namespace
    List {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Render one story
    Show {
        /// Story id, e.g. typescript/scalars
        id: String,

        /// Update an arg before rendering (key=<json>), repeatable
        #[arg(long = "set", value_name = "KEY=JSON")]
        set: Vec<String>,

        /// Output rows and args as JSON
        #[arg(short, long)]
        json: bool,

        /// Read key=<json> updates from stdin, re-rendering after each one
        #[arg(short, long, conflicts_with = "json")]
        interactive: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("STORYKIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { args } => {
            commands::init::execute(args)?;
        }
        Commands::Stories { command } => match command {
            StoriesCommands::List { json } => {
                commands::stories::list(json)?;
            }
            StoriesCommands::Show {
                id,
                set,
                json,
                interactive,
            } => {
                commands::stories::show(&id, &set, json, interactive)?;
            }
        },
    }

    Ok(())
}
