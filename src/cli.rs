use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "check-postgres-query",
    about = "PostgreSQL query check: alerts when the numeric result hits a threshold",
    version
)]
pub struct Cli {
    /// Query to execute
    #[arg(short = 'q', long, env = "PGCHECK_QUERY")]
    pub query: Option<String>,

    /// Read the query from a file
    #[arg(short = 'f', long = "file", conflicts_with = "query")]
    pub query_file: Option<PathBuf>,

    /// Database user
    #[arg(short = 'u', long, env = "PGCHECK_USER")]
    pub user: Option<String>,

    /// Database password
    #[arg(short = 'p', long, env = "PGCHECK_PASSWORD")]
    pub password: Option<String>,

    /// Hostname to connect to (default: localhost)
    #[arg(short = 'H', long, env = "PGCHECK_HOST")]
    pub hostname: Option<String>,

    /// Database port (default: 5432)
    #[arg(short = 'P', long, env = "PGCHECK_PORT")]
    pub port: Option<u16>,

    /// Database name (default: postgres)
    #[arg(short = 'd', long = "db", env = "PGCHECK_DATABASE")]
    pub database: Option<String>,

    /// Check against the number of rows returned instead of the first cell
    #[arg(short = 't', long = "tuples")]
    pub check_tuples: bool,

    /// Warning threshold expression, e.g. 'value > 5'
    #[arg(short = 'w', long)]
    pub warning: Option<String>,

    /// Critical threshold expression, e.g. 'value > 10'
    #[arg(short = 'c', long)]
    pub critical: Option<String>,

    /// Connect and query deadline in seconds (default: 10)
    #[arg(long, env = "PGCHECK_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Path to config file
    #[arg(long, env = "PGCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Config file profile name
    #[arg(long, env = "PGCHECK_PROFILE")]
    pub profile: Option<String>,

    /// Emit diagnostics to stderr
    #[arg(short = 'v', long, env = "PGCHECK_VERBOSE")]
    pub verbose: bool,

    /// Disable credential masking in diagnostics
    #[arg(long, env = "PGCHECK_SHOW_SECRETS")]
    pub show_secrets: bool,
}
