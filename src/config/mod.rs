mod errors;
mod loader_config;

pub use errors::ConfigError;
pub use loader_config::LoaderConfig;
