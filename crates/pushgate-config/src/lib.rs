mod config;
mod discovery;
mod error;
mod file;
mod settings;

pub const CONFIG_FILE_NAME: &str = "pushgate.toml";

pub use config::{ExemptionGroups, HookConfig, TrackerCatalog};
pub use discovery::{discover_config, load_config, load_hook_config, resolve_hook_config};
pub use error::ConfigError;
pub use settings::PolicySettings;

pub type Result<T> = std::result::Result<T, ConfigError>;
