#[path = "configuration/reader.rs"]
mod configuration;

// Declare the components module with all the submodules
mod components {
    // Editor module and submodules
    pub mod editor;
}

mod autosave;
mod document;
mod export;
mod printer;


use std::env;

use components::editor::Editor;

fn main() -> iced::Result {
    let config_path_env_var = "VELLUM_CONFIG_PATH";
    let default_config_path = "./config.json";

    // Attempt to get the config path from the environment variable,
    // falling back to the default path if not set.
    let config_path = env::var(config_path_env_var).unwrap_or_else(|_| {
        println!(
            "Environment variable {} not set. Using default path: {}",
            config_path_env_var, default_config_path
        );
        default_config_path.to_string()
    });

    // read_configuration falls back to compiled-in defaults on any error,
    // so startup never aborts over a bad config file.
    let config = configuration::read_configuration(&config_path);
    println!("Theme: {}", config.theme);
    println!("Autosave file: {}", config.autosave_path);
    println!("App Version: {}", config.version);

    iced::application(move || Editor::create(config.clone()), Editor::update, Editor::view)
        .title(Editor::title)
        .subscription(Editor::subscription)
        .theme(Editor::theme)
        .window_size(iced::Size::new(1000.0, 800.0))
        .run()
}
