//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
    __  ___                     __
   /  |/  /__  ___________ _/ /_____ _
  / /|_/ / _ \/ ___/ ___/ __ `/ __/ __ `/
 / /  / /  __/ /  / /__/ /_/ / /_/ /_/ /
/_/  /_/\___/_/   \___/\__,_/\__/\__,_/

          Storefront API
    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(port: u16) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://0.0.0.0:{}", port);
    info!("Health:    http://0.0.0.0:{}/health", port);
    info!("{}", separator);
}
