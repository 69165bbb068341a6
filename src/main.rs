use std::process::ExitCode;

use foodwaste_tilbud::cli;
use foodwaste_tilbud::client::FoodWasteClient;
use foodwaste_tilbud::models::config::{API_TOKEN_VAR, Settings, api_token_from_env};
use foodwaste_tilbud::pdf::CommandPdfEngine;
use foodwaste_tilbud::services::report::Renderer;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Failed to load settings: {e}");
            eprintln!("Error: invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let Some(token) = api_token_from_env() else {
        eprintln!("Error: Please set your API token in the .env file");
        eprintln!("Create a .env file and add: {API_TOKEN_VAR}=your_token_here");
        return ExitCode::FAILURE;
    };

    let client = match FoodWasteClient::new(&settings.api, token) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to build HTTP client: {e}");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let engine = CommandPdfEngine::from_config(&settings.pdf);
    let renderer = Renderer::new(settings.report, engine);

    if let Err(e) = cli::run(&client, &renderer) {
        log::error!("Terminal interaction failed: {e}");
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
