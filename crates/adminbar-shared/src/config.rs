//! Configuration management

use std::time::Duration;

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::constants::*;
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    #[validate(nested)]
    pub admin: AdminSettings,
    #[validate(nested)]
    pub cache: CacheSettings,
    #[validate(nested)]
    pub menu: MenuSettings,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AdminSettings {
    /// Absolute URL of the admin area, every menu path is resolved against it
    #[validate(url)]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, Validate)]
#[validate(schema(function = "validate_windows"))]
pub struct CacheSettings {
    #[validate(length(min = 1))]
    pub settings_menu_key: String,
    #[validate(range(min = 1))]
    pub soft_window_secs: u64,
    pub hard_window_secs: u64,
    #[validate(range(min = 1))]
    pub post_query_ttl_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct MenuSettings {
    #[validate(length(min = 1))]
    pub privileged_capability: String,
    pub deny_list: Vec<String>,
    pub handled_post_types: Vec<String>,
}

fn validate_windows(cache: &CacheSettings) -> Result<(), ValidationError> {
    if cache.hard_window_secs <= cache.soft_window_secs {
        return Err(ValidationError::new("hard_window_not_after_soft_window"));
    }
    Ok(())
}

impl CacheSettings {
    pub fn soft_window(&self) -> Duration {
        Duration::from_secs(self.soft_window_secs)
    }

    pub fn hard_window(&self) -> Duration {
        Duration::from_secs(self.hard_window_secs)
    }

    pub fn post_query_ttl(&self) -> Duration {
        Duration::from_secs(self.post_query_ttl_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            admin: AdminSettings {
                base_url: DEFAULT_ADMIN_BASE_URL.to_string(),
            },
            cache: CacheSettings {
                settings_menu_key: SETTINGS_MENU_CACHE_KEY.to_string(),
                soft_window_secs: DEFAULT_SOFT_WINDOW_SECS,
                hard_window_secs: DEFAULT_HARD_WINDOW_SECS,
                post_query_ttl_secs: DEFAULT_POST_QUERY_TTL_SECS,
            },
            menu: MenuSettings {
                privileged_capability: DEFAULT_PRIVILEGED_CAPABILITY.to_string(),
                deny_list: DEFAULT_DENY_LIST.iter().map(|s| s.to_string()).collect(),
                handled_post_types: Vec::new(),
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("ADMINBAR")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("menu.deny_list")
                    .with_list_parse_key("menu.handled_post_types"),
            )
            .build()?;
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let cfg: AppConfig = config.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Builder pre-loaded with every default so partial sources deserialize cleanly
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("admin.base_url", DEFAULT_ADMIN_BASE_URL)?
            .set_default("cache.settings_menu_key", SETTINGS_MENU_CACHE_KEY)?
            .set_default("cache.soft_window_secs", DEFAULT_SOFT_WINDOW_SECS)?
            .set_default("cache.hard_window_secs", DEFAULT_HARD_WINDOW_SECS)?
            .set_default("cache.post_query_ttl_secs", DEFAULT_POST_QUERY_TTL_SECS)?
            .set_default("menu.privileged_capability", DEFAULT_PRIVILEGED_CAPABILITY)?
            .set_default("menu.deny_list", DEFAULT_DENY_LIST.to_vec())?
            .set_default("menu.handled_post_types", Vec::<String>::new())
    }
}
