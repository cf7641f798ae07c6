use crate::cli::Cli;
use crate::error::CheckError;
use crate::extract::ExtractionMode;
use crate::masking;
use crate::threshold::ThresholdExpression;
use directories::ProjectDirs;
use secrecy::SecretString;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Check configuration, resolved once at startup and passed into the core.
#[derive(Debug)]
pub struct CheckConfig {
    pub connection: ConnectionConfig,
    pub query: String,
    pub mode: ExtractionMode,
    pub warning: Option<ThresholdExpression>,
    pub critical: Option<ThresholdExpression>,
    pub timeout_secs: u64,
    pub verbose: bool,
    pub show_secrets: bool,
}

/// Connection target for one check run.
#[derive(Debug)]
pub struct ConnectionConfig {
    pub hostname: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: Option<SecretString>,
}

impl ConnectionConfig {
    /// Human-readable connection target for diagnostics.
    pub fn describe(&self, show_secrets: bool) -> String {
        format!(
            "{}@{}:{}/{} (password {})",
            self.user,
            self.hostname,
            self.port,
            self.database,
            masking::format_optional_secret(self.password.as_ref(), show_secrets),
        )
    }
}

// --- TOML config file structs ---

#[derive(Debug, Deserialize, Default)]
struct TomlConfig {
    #[serde(default)]
    defaults: TomlDefaults,
    #[serde(default)]
    profiles: HashMap<String, TomlProfile>,
}

#[derive(Debug, Deserialize, Default)]
struct TomlDefaults {
    timeout: Option<u64>,
    verbose: Option<bool>,
}

#[derive(Debug, Deserialize, Default, Clone)]
struct TomlProfile {
    hostname: Option<String>,
    port: Option<u16>,
    database: Option<String>,
    user: Option<String>,
    password: Option<String>,
    password_env: Option<String>,
}

/// Config path resolution result, distinguishing explicit vs auto-resolved
/// paths.
struct ResolvedConfigPath {
    path: PathBuf,
    /// true if the user explicitly specified via --config or PGCHECK_CONFIG
    explicit: bool,
}

/// Resolve the config file path: --config flag > env var > platform default.
fn resolve_config_path(cli_config: Option<&PathBuf>) -> Option<ResolvedConfigPath> {
    if let Some(path) = cli_config {
        return Some(ResolvedConfigPath {
            path: path.clone(),
            explicit: true,
        });
    }
    ProjectDirs::from("", "", "check-postgres-query").map(|dirs| ResolvedConfigPath {
        path: dirs.config_dir().join("config.toml"),
        explicit: false,
    })
}

/// Load and parse the TOML config file (if it exists).
fn load_toml_config(resolved: Option<&ResolvedConfigPath>) -> Result<TomlConfig, CheckError> {
    let resolved = match resolved {
        Some(r) => r,
        None => return Ok(TomlConfig::default()),
    };

    if !resolved.path.exists() {
        if resolved.explicit {
            return Err(CheckError::Config {
                message: format!("config file not found: {}", resolved.path.display()),
            });
        }
        // Auto-resolved path doesn't exist, nothing to load
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(&resolved.path).map_err(|e| CheckError::Config {
        message: format!("cannot read config file {}: {}", resolved.path.display(), e),
    })?;

    toml::from_str(&content).map_err(|e| CheckError::Config {
        message: format!("invalid config file {}: {}", resolved.path.display(), e),
    })
}

/// Resolve the password from the direct value or the profile's env
/// indirection / literal.
fn resolve_password(direct: Option<&str>, profile: &TomlProfile) -> Option<SecretString> {
    if let Some(val) = direct
        && !val.is_empty()
    {
        return Some(SecretString::from(val.to_string()));
    }
    if let Some(key) = profile.password_env.as_deref()
        && let Ok(val) = std::env::var(key)
        && !val.is_empty()
    {
        return Some(SecretString::from(val));
    }
    profile
        .password
        .as_ref()
        .map(|p| SecretString::from(p.clone()))
}

/// Resolve the query text from the CLI: inline text or a file.
fn resolve_query(cli: &Cli) -> Result<String, CheckError> {
    if let Some(ref query) = cli.query {
        return Ok(query.clone());
    }
    if let Some(ref path) = cli.query_file {
        let content = std::fs::read_to_string(path).map_err(|e| CheckError::Config {
            message: format!("cannot read query file {}: {}", path.display(), e),
        })?;
        return Ok(content.trim().to_string());
    }
    Err(CheckError::Config {
        message: "no query provided — use --query or --file".to_string(),
    })
}

/// Build CheckConfig from parsed CLI args. Resolution per field:
/// CLI flag > env var (via clap) > TOML profile > default.
pub fn load(cli: &Cli) -> Result<CheckConfig, CheckError> {
    let resolved_path = resolve_config_path(cli.config.as_ref());
    let toml_config = load_toml_config(resolved_path.as_ref())?;

    let profile = cli
        .profile
        .as_ref()
        .map(|name| {
            toml_config
                .profiles
                .get(name)
                .cloned()
                .ok_or_else(|| CheckError::Config {
                    message: format!("profile '{}' not found in config file", name),
                })
        })
        .transpose()?;
    let profile = profile.unwrap_or_default();

    let query = resolve_query(cli)?;

    let hostname = cli
        .hostname
        .as_deref()
        .or(profile.hostname.as_deref())
        .unwrap_or("localhost")
        .to_string();

    let port = cli.port.or(profile.port).unwrap_or(5432);

    let database = cli
        .database
        .as_deref()
        .or(profile.database.as_deref())
        .unwrap_or("postgres")
        .to_string();

    let user = cli
        .user
        .as_deref()
        .or(profile.user.as_deref())
        .ok_or_else(|| CheckError::Config {
            message: "no user specified — use --user or configure a profile".to_string(),
        })?
        .to_string();

    let password = resolve_password(cli.password.as_deref(), &profile);

    // Threshold expressions are parsed here, once; malformed text surfaces
    // as UNKNOWN, never as a passing check.
    let warning = cli
        .warning
        .as_deref()
        .map(ThresholdExpression::parse)
        .transpose()?;
    let critical = cli
        .critical
        .as_deref()
        .map(ThresholdExpression::parse)
        .transpose()?;

    let mode = if cli.check_tuples {
        ExtractionMode::RowCount
    } else {
        ExtractionMode::ScalarFirstCell
    };

    // timeout: CLI/ENV > TOML > 10
    let timeout_secs = cli
        .timeout
        .unwrap_or_else(|| toml_config.defaults.timeout.unwrap_or(10));

    // verbose: CLI/ENV OR TOML default
    let verbose = cli.verbose || toml_config.defaults.verbose.unwrap_or(false);

    Ok(CheckConfig {
        connection: ConnectionConfig {
            hostname,
            port,
            database,
            user,
            password,
        },
        query,
        mode,
        warning,
        critical,
        timeout_secs,
        verbose,
        show_secrets: cli.show_secrets,
    })
}
