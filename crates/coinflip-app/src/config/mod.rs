//! Configuration loading
//!
//! Settings come from `~/.config/coinflip/config.toml` (overridable on the
//! command line) and default cleanly when the file is absent or malformed.

mod settings;

pub use settings::{
    default_config_path, load_settings, CommandSettings, DisplaySettings, Settings,
    StorageSettings, TailsStyle,
};
