use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use matchboard::catalog::TokenCatalog;
use matchboard::config::BoardConfig;
use matchboard::engine::BoardEngine;
use matchboard::layout::GridLayout;
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    config: BoardConfig,

    /// JSON config file; explicit flags win over its values.
    #[arg(global = true, long)]
    config_file: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print an empty board at the configured dimensions.
    Board,
    /// List the token catalog.
    Catalog,
    /// Execute a board script.
    Run(cmd::run::RunArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let mut config = match &cli.config_file {
        Some(path) => {
            info!("Loading config from {}", path);
            BoardConfig::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            })
        }
        None => BoardConfig::default(),
    };
    config.merge_from_cli(&cli.config, &matches);

    let catalog = match &config.catalog {
        Some(path) => {
            info!("Loading catalog from {}", path);
            TokenCatalog::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            })
        }
        None => TokenCatalog::builtin(),
    };

    let layout = GridLayout::clamped(config.rows as u32, config.cols as u32);
    let engine = BoardEngine::new(catalog, layout);

    match cli.command {
        Commands::Board => reports::print_board(&engine),
        Commands::Catalog => reports::print_catalog(engine.catalog()),
        Commands::Run(args) => cmd::run::run(args, engine),
    }
}
