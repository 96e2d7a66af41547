use crate::config::initialize_config_file;
use tracing::error;

pub fn handle_init_command() {
    if let Err(e) = initialize_config_file(None) {
        error!("Error during initialization: {}", e);
        std::process::exit(1);
    }
}
