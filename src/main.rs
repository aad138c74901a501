use clap::Parser;
use log::info;

use notebook::{App, Cli};

pub fn initialize_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    info!("Logger initialized");
}

fn main() {
    initialize_logger();

    info!("Application starting up");

    let cli = Cli::parse();
    let mut app = App::from_cli(cli);

    if let Err(e) = app.run_session() {
        eprintln!("Fatal: {}", e);
        std::process::exit(1);
    }

    info!("Application shutting down");
}
