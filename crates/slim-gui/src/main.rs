//! slimulation entry point
//!
//! Run with:
//! ```bash
//! cargo run -p slim-gui
//! ```

use slim_settings::ShellSettings;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting slimulation");

    let code = match slim_gui::run(ShellSettings::default()) {
        Ok(()) => 0,
        Err(e) => {
            log::error!("{}", e);
            e.exit_code()
        }
    };

    std::process::exit(code);
}
