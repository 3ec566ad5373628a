use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://stageapi.monkcommerce.app/task";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
            Ok(v) => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected a non-negative finite number, got {v}"),
            }),
            Err(e) => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        }
    };

    let catalog_api_key = require("SHELF_CATALOG_API_KEY")?;
    let catalog_base_url = or_default("SHELF_CATALOG_BASE_URL", DEFAULT_CATALOG_BASE_URL);

    let catalog_page_size = parse_u32("SHELF_CATALOG_PAGE_SIZE", "10")?;
    if catalog_page_size == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHELF_CATALOG_PAGE_SIZE".to_string(),
            reason: "page size must be greater than zero".to_string(),
        });
    }

    let catalog_request_timeout_secs = parse_u64("SHELF_CATALOG_TIMEOUT_SECS", "30")?;
    let catalog_user_agent = or_default("SHELF_CATALOG_USER_AGENT", "shelf/0.1 (product-picker)");
    let picker_overscan = parse_usize("SHELF_PICKER_OVERSCAN", "5")?;
    let picker_near_end_px = parse_f64("SHELF_PICKER_NEAR_END_PX", "100")?;

    Ok(AppConfig {
        catalog_api_key,
        catalog_base_url,
        catalog_page_size,
        catalog_request_timeout_secs,
        catalog_user_agent,
        picker_overscan,
        picker_near_end_px,
    })
}
