use std::sync::Arc;

use clap::Parser;
use poem::{Server, listener::TcpListener};

use lostfound_backend::api::build_routes;
use lostfound_backend::app_data::AppData;
use lostfound_backend::cli::{self, Cli, Commands};
use lostfound_backend::config::{LoggingConfig, ServerSettings, SystemEnvironment, init_logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging(&LoggingConfig::from_env_provider(&SystemEnvironment))?;

    let cli = Cli::parse();
    let settings = ServerSettings::from_env()?;
    tracing::debug!("Loaded settings: {:?}", settings);

    let app_data = Arc::new(AppData::init(&settings)?);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(&settings, app_data).await?,
        command => match cli::execute_command(command, app_data).await {
            Ok(output) => println!("{}", output.trim_end()),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

async fn serve(settings: &ServerSettings, app_data: Arc<AppData>) -> Result<(), std::io::Error> {
    let address = settings.server_address();
    let app = build_routes(app_data);

    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at http://{}/swagger", address);

    Server::new(TcpListener::bind(address)).run(app).await
}
