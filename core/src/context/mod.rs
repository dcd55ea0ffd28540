mod app_config;
mod parsing_session;

pub use app_config::{APP_NAME, AppConfig, ConfigError, default_journal_directory};
pub use parsing_session::{ParsingSession, resolve_journal_path};
