//! Application configuration management.
//!
//! Each service reads the same set of environment variables with the `envy` crate,
//! but falls back to its own defaults so that the three services point at three
//! separately owned databases when nothing is set.

use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;

const DEFAULT_DATABASE_HOST: &str = "172.31.82.228";
const DEFAULT_DATABASE_USER: &str = "postgres";
const DEFAULT_DATABASE_PASSWORD: &str = "postgres";

/// The three independently deployable services built from this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Users,
    Transactions,
    Campaigns,
}

impl Service {
    /// Name used in logs and in the health check response.
    pub fn name(self) -> &'static str {
        match self {
            Service::Users => "users",
            Service::Transactions => "transactions",
            Service::Campaigns => "campaigns",
        }
    }

    fn default_database_name(self) -> &'static str {
        match self {
            Service::Users => "core_users",
            Service::Transactions => "core_transactions",
            Service::Campaigns => "ml_metas",
        }
    }

    fn default_database_port(self) -> u16 {
        match self {
            Service::Users => 5432,
            Service::Transactions => 5433,
            Service::Campaigns => 5434,
        }
    }

    fn default_server_port(self) -> u16 {
        match self {
            Service::Users => 8000,
            Service::Transactions => 8001,
            Service::Campaigns => 8002,
        }
    }
}

/// Raw environment variables, every one optional.
///
/// Field names are converted by envy: `database_host` -> `DATABASE_HOST`.
#[derive(Debug, Default, Deserialize)]
struct EnvVars {
    database_host: Option<String>,
    database_port: Option<u16>,
    database_name: Option<String>,
    database_user: Option<String>,
    database_password: Option<String>,
    server_port: Option<u16>,
    #[serde(default)]
    wallet_enabled: bool,
}

/// Connection settings for the service's database.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

impl DatabaseConfig {
    /// Build sqlx connect options from these settings.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.user)
            .password(&self.password)
    }
}

// Hand-written so the password never ends up in a log line.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

/// Application configuration for one service.
///
/// # Environment Variables
///
/// - `DATABASE_HOST`, `DATABASE_PORT`, `DATABASE_NAME`, `DATABASE_USER`,
///   `DATABASE_PASSWORD`: PostgreSQL connection settings
/// - `SERVER_PORT`: HTTP port
/// - `WALLET_ENABLED`: mounts the in-memory wallet routes (users service only)
#[derive(Debug, Clone)]
pub struct Config {
    pub service: Service,
    pub database: DatabaseConfig,
    pub server_port: u16,
    pub wallet_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Loads an optional `.env` file first. Missing variables take the service's
    /// defaults; malformed ones (a non-numeric port, for instance) are an error.
    pub fn from_env(service: Service) -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        let vars = envy::from_env::<EnvVars>()?;
        Ok(Self::resolve(service, vars))
    }

    /// Same as [`Config::from_env`] but reads from the given key/value pairs.
    pub fn from_vars<I>(service: Service, vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars = envy::from_iter::<_, EnvVars>(vars)?;
        Ok(Self::resolve(service, vars))
    }

    fn resolve(service: Service, vars: EnvVars) -> Self {
        Self {
            service,
            database: DatabaseConfig {
                host: non_empty(vars.database_host)
                    .unwrap_or_else(|| DEFAULT_DATABASE_HOST.to_string()),
                port: vars
                    .database_port
                    .unwrap_or_else(|| service.default_database_port()),
                name: non_empty(vars.database_name)
                    .unwrap_or_else(|| service.default_database_name().to_string()),
                user: non_empty(vars.database_user)
                    .unwrap_or_else(|| DEFAULT_DATABASE_USER.to_string()),
                password: vars
                    .database_password
                    .unwrap_or_else(|| DEFAULT_DATABASE_PASSWORD.to_string()),
            },
            server_port: vars
                .server_port
                .unwrap_or_else(|| service.default_server_port()),
            wallet_enabled: vars.wallet_enabled,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
