use crate::cli::ServeArgs;
use crate::config::Config;
use crate::http::ApiServer;
use crate::CliError;

pub async fn handle_serve(
    serve_args: ServeArgs,
    config_path: Option<String>,
) -> Result<(), CliError> {
    let config = Config::load(config_path.as_deref())?.apply_cli_overrides(&serve_args);
    let catalog = config.load_catalog()?;

    ::tracing::info!(
        "Catalog ready: {} projects, years {:?}",
        catalog.len(),
        catalog.years()
    );

    let api_server = ApiServer::new(config, catalog);
    api_server.start()?.await?;
    Ok(())
}
