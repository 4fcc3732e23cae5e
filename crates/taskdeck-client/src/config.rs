//! Client Configuration
//!
//! Values are baked in at build time (a browser bundle has no process
//! environment), the same way the web build reads its `BASE_URL`.

use std::fmt::Display;
use std::str::FromStr;

use log::{info, warn, LevelFilter};

pub const BASE_URL_VAR: &str = "TASKDECK_BASE_URL";
pub const PAGE_LIMIT_VAR: &str = "TASKDECK_PAGE_LIMIT";
pub const LOG_LEVEL_VAR: &str = "TASKDECK_LOG_LEVEL";

const DEFAULT_PAGE_LIMIT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without trailing slash. Empty means same origin.
    pub base_url: String,
    /// Tasks per page
    pub page_limit: u32,
    pub log_level: LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            page_limit: DEFAULT_PAGE_LIMIT,
            log_level: LevelFilter::Info,
        }
    }
}

impl ClientConfig {
    /// Configuration captured from the environment of the build
    pub fn from_build_env() -> Self {
        Self::resolve(|key| {
            let value = match key {
                BASE_URL_VAR => option_env!("TASKDECK_BASE_URL"),
                PAGE_LIMIT_VAR => option_env!("TASKDECK_PAGE_LIMIT"),
                LOG_LEVEL_VAR => option_env!("TASKDECK_LOG_LEVEL"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Build from any key lookup. Missing or invalid values fall back to
    /// defaults.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let base_url = lookup(BASE_URL_VAR)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);
        let page_limit = match try_load(&lookup, PAGE_LIMIT_VAR, defaults.page_limit) {
            0 => {
                warn!("{} must be at least 1, using {}", PAGE_LIMIT_VAR, DEFAULT_PAGE_LIMIT);
                DEFAULT_PAGE_LIMIT
            }
            limit => limit,
        };
        let log_level = try_load(&lookup, LOG_LEVEL_VAR, defaults.log_level);

        Self {
            base_url,
            page_limit,
            log_level,
        }
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        None => {
            info!("{} not set, using default: {}", key, default);
            default
        }
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {} value {:?}: {}, using {}", key, raw, e, default);
            default
        }),
    }
}
