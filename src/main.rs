//! gldemo - prints the per-frame uniform matrices of a demo scene

use std::io::{self, Write};
use std::process::ExitCode;

use gldemo::config::AppConfig;
use gldemo::dump::dump_frames;

fn main() -> ExitCode {
    // Load before the logger exists so the configured level can be applied
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match dump_frames(&config, &mut out).and_then(|_| out.flush().map_err(Into::into)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
