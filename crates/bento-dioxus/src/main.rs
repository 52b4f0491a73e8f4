use bento_config::Config;
use bento_engine::io;
use dioxus::prelude::*;
use std::env;
use std::path::PathBuf;
use std::process;

mod ui;

use ui::components::ErrorScreen;
use ui::{App, Settings};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("bento starting up!");

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    let settings = match resolve_settings() {
        Ok(settings) => settings,
        Err(message) => {
            let program_name = env::args()
                .next()
                .unwrap_or_else(|| "bento-dioxus".to_string());
            eprintln!("Error: {message}");
            eprintln!("Usage: {program_name} [page.json]");
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_page_path(&settings.page_path) {
        eprintln!(
            "Error: Page path '{}' is invalid: {e}",
            settings.page_path.display()
        );
        process::exit(1);
    }

    log::info!("About to launch Dioxus app for desktop");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

/// Page path from the command line or the config file; feature flags and
/// relay always come from the config file when there is one
fn resolve_settings() -> Result<Settings, String> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        return Err("Too many arguments".to_string());
    }

    let config = Config::load().map_err(|e| format!("Failed to load config file: {e}"))?;
    let cli_path = args.get(1).map(PathBuf::from);

    match (cli_path, config) {
        (Some(page_path), config) => {
            log::info!("Using page path from CLI argument: {}", page_path.display());
            let config = config.unwrap_or_else(|| Config::new(&page_path));
            Ok(Settings::from_config(Config { page_path, ..config }))
        }
        (None, Some(config)) => {
            log::info!("Loaded page path from config: {}", config.page_path.display());
            Ok(Settings::from_config(config))
        }
        (None, None) => Err("No page path provided and no config file found".to_string()),
    }
}

fn app_root() -> Element {
    match resolve_settings() {
        Ok(settings) => rsx! {
            App { settings }
        },
        Err(message) => rsx! {
            ErrorScreen {
                title: "Configuration Error".to_string(),
                message,
                details: Some(format!("Config path: {}", Config::config_path().display())),
            }
        },
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("bento")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
