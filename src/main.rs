use tracing::info;

use chatter::Config;

fn main() {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = chatter::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        chatter::logging::init_console_only(&config.logging.level);
    }

    info!("chatter - single-session chat prototype");
    info!("Message archive directory: {}", config.storage.message_dir);
}
