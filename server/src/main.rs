use clap::Parser;
use config::{Config, ConfigError};
use showcase_core::{Catalog, CatalogError, CriteriaError};
use thiserror::Error;

mod cli;
mod config;
mod error;
mod handlers;
mod http;
mod store;
mod table;
mod tracing;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    ServerError(#[from] http::ServerError),
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    #[error(transparent)]
    CriteriaError(#[from] CriteriaError),
}

pub const LOGO: &str = r#"
  _____          _              _
 |__  /___ _ __ | |_ _ __ ___ | | __
   / // _ \ '_ \| __| '__/ _ \| |/ /
  / /|  __/ | | | |_| | | (_) |   <
 /____\___|_| |_|\__|_|  \___/|_|\_\
"#;

#[actix_web::main]
async fn main() -> Result<(), CliError> {
    dotenv::dotenv().ok();

    let cli = cli::Cli::parse();
    tracing::init_tracing();

    match cli.command {
        Some(cli::Commands::List(args)) => {
            let catalog = load_catalog(cli.config.as_deref(), args.catalog.clone())?;
            cli::commands::list::handle_list(&catalog, args)
        }
        Some(cli::Commands::Years { catalog }) => {
            let catalog = load_catalog(cli.config.as_deref(), catalog)?;
            cli::commands::years::handle_years(&catalog)
        }
        Some(cli::Commands::Serve(subcommand_args)) => {
            println!("{LOGO}");
            cli::commands::serve::handle_serve(subcommand_args, cli.config).await
        }
        None => {
            // No command specified, use flattened serve args
            println!("{LOGO}");
            cli::commands::serve::handle_serve(cli.serve_args, cli.config).await
        }
    }
}

fn load_catalog(config_path: Option<&str>, catalog_path: Option<String>) -> Result<Catalog, CliError> {
    let mut config = Config::load(config_path)?;
    if catalog_path.is_some() {
        config.catalog.path = catalog_path;
    }
    Ok(config.load_catalog()?)
}
