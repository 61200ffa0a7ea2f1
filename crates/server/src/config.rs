use shared_types::{AppConfig, FeatureFlags};
use std::sync::OnceLock;

static FLAGS: OnceLock<FeatureFlags> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml`, parse feature flags, and store them in the global
/// `OnceLock`. Only the first call has effect.
///
/// Runs before logging is initialised, so problems go to stderr. If the
/// file is missing or unparseable, all flags default to `false`.
pub fn load_feature_flags() {
    FLAGS.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_feature_flags(&contents),
        Err(e) => {
            eprintln!("[config] {CONFIG_PATH} not found ({e}), defaulting all flags off");
            FeatureFlags::default()
        }
    });
}

fn parse_feature_flags(contents: &str) -> FeatureFlags {
    let config: AppConfig = toml::from_str(contents).unwrap_or_else(|e| {
        eprintln!("[config] Failed to parse {CONFIG_PATH}: {e}, defaulting all flags off");
        AppConfig::default()
    });
    eprintln!("[config] Feature flags: {:?}", config.features);
    config.features
}

/// Get the loaded feature flags. Returns all-false defaults if
/// `load_feature_flags()` hasn't been called yet.
pub fn feature_flags() -> &'static FeatureFlags {
    static DEFAULT: FeatureFlags = FeatureFlags {
        mailgun: false,
        json_logs: false,
    };
    FLAGS.get().unwrap_or(&DEFAULT)
}

/// Connection settings for the case-data platform.
#[derive(Debug, Clone)]
pub struct CcdSettings {
    pub base_url: String,
    pub user_token: String,
    pub service_token: String,
}

impl CcdSettings {
    /// Read settings from the environment (and `.env` when present).
    pub fn from_env() -> Result<Self, String> {
        let _ = dotenvy::dotenv();

        let base_url = std::env::var("CCD_DATA_STORE_URL")
            .map_err(|_| "CCD_DATA_STORE_URL is not configured".to_string())?;
        let user_token = std::env::var("CCD_SYSTEM_USER_TOKEN")
            .map_err(|_| "CCD_SYSTEM_USER_TOKEN is not configured".to_string())?;
        let service_token = std::env::var("CCD_SERVICE_AUTH_TOKEN")
            .map_err(|_| "CCD_SERVICE_AUTH_TOKEN is not configured".to_string())?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_token,
            service_token,
        })
    }
}

/// Port the HTTP server listens on.
pub fn listen_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(4550)
}
