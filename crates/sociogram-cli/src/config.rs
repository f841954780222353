//! CLI configuration loaded from environment variables.
//!
//! All settings have sensible defaults. Override any variable at process
//! startup; no config file required.
//!
//! | Variable                  | Default | Description                                   |
//! |---------------------------|---------|-----------------------------------------------|
//! | `SOCIOGRAM_LOG_LEVEL`     | `info`  | tracing filter (trace/debug/info/warn/error)  |
//! | `SOCIOGRAM_SUGGEST_LIMIT` | `5`     | Max friend suggestions shown per query        |
//! | `SOCIOGRAM_SEED`          | `true`  | Load the demo cast on startup (`0` to skip)   |

/// Runtime configuration for the sociogram CLI.
#[derive(Debug)]
pub struct Config {
    /// Tracing filter string, e.g. `"sociogram_graph=debug,info"`.
    pub log_level: String,

    /// Maximum number of suggestions rendered per `suggest` query.
    pub suggest_limit: usize,

    /// Whether to seed the demo cast at startup.
    pub seed: bool,
}

impl Config {
    /// Load configuration from environment variables, applying defaults
    /// where a variable is absent or unparseable.
    pub fn from_env() -> Self {
        Self {
            log_level:     env_str("SOCIOGRAM_LOG_LEVEL", "info"),
            suggest_limit: env_parse("SOCIOGRAM_SUGGEST_LIMIT", 5),
            seed:          env_bool("SOCIOGRAM_SEED", true),
        }
    }
}

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}
