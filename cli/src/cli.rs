//! CLI definition and command routing.

use {
    crate::Result,
    clap::{Parser, Subcommand},
    std::path::PathBuf,
};

/// Chainconf CLI entry point.
#[derive(Parser)]
#[command(name = "chainconf")]
#[command(about = "Project configuration for smart-contract tooling")]
#[command(version)]
pub struct Cli {
    /// Project file to use instead of ./Chainconf.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Create Chainconf.toml and .env.example in the current directory
    Init,
    /// Load the configuration and report the first problem found
    Check,
    /// Print the resolved configuration with credentials masked
    Show {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print one network profile with credentials masked
    Network {
        /// Name of the declared network
        name: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the environment variables the project file reads
    Env,
}

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    // .env may set RUST_LOG, so it is read before the subscriber starts.
    crate::config::ProcessEnv::with_dotenv();
    crate::logging::init(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Init => crate::commands::init::run(),
        Commands::Check => crate::commands::check::run(config),
        Commands::Show { json } => crate::commands::show::run(config, json),
        Commands::Network { name, json } => crate::commands::network::run(config, &name, json),
        Commands::Env => crate::commands::env::run(config),
    }
}
