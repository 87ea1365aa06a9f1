mod app;
mod clock;
mod config;
mod input;
mod render;

use app::SnakeApp;
use config::Config;

fn main() {
    let matches = match config::init_cli(std::env::args_os()) {
        Ok(matches) => matches,
        Err(e) => e.exit(),
    };
    logger::init_logger(matches.value_of("log_level"));

    let app = match Config::from_matches(&matches).and_then(|config| SnakeApp::new(&config)) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Can't start the game: {}", e);
            std::process::exit(1);
        }
    };

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(app.window_size()),
        resizable: false,
        ..Default::default()
    };

    eframe::run_native(Box::new(app), native_options);
}
