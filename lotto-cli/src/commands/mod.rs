pub mod config;
pub mod display;
pub mod play;
pub mod simulate;

pub use config::handle_config_command;
pub use play::run_session;
pub use simulate::run_simulation;
