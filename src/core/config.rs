use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub upstream: UpstreamConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    /// Mount point of the country routes ("" mounts them at the root)
    pub base_path: String,
}

/// Upstream countries API used by every country endpoint
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL, e.g. `http://localhost:9090/restcountries-2.0.5/rest/v2`
    pub base_url: String,
    /// Upper bound on a single upstream request
    pub timeout: Duration,
    /// How long an idle keep-alive connection stays in the pool
    pub pool_idle_timeout: Duration,
    pub pool_max_idle_per_host: usize,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            upstream: UpstreamConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_PORT: u16 = 3001;
    const DEFAULT_BASE_PATH: &'static str = "/countries";

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| Self::DEFAULT_PORT.to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let base_path = normalize_base_path(
            &env::var("COUNTRIES_BASE_PATH").unwrap_or_else(|_| Self::DEFAULT_BASE_PATH.into()),
        );

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            base_path,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Turns `countries/`, `/countries/` and `/countries` into `/countries`; `/` and `` into ``.
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

impl UpstreamConfig {
    const DEFAULT_BASE_URL: &'static str = "http://localhost:9090/restcountries-2.0.5/rest/v2";
    // The upstream can take minutes to dump the full country list
    const DEFAULT_TIMEOUT_SECS: u64 = 1000;
    const DEFAULT_POOL_IDLE_TIMEOUT_SECS: u64 = 90;
    const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 32;

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("UPSTREAM_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "UPSTREAM_TIMEOUT_SECS must be a valid number".to_string())?;

        let pool_idle_timeout_secs = env::var("UPSTREAM_POOL_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_POOL_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "UPSTREAM_POOL_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let pool_max_idle_per_host = env::var("UPSTREAM_POOL_MAX_IDLE_PER_HOST")
            .unwrap_or_else(|_| Self::DEFAULT_POOL_MAX_IDLE_PER_HOST.to_string())
            .parse::<usize>()
            .map_err(|_| "UPSTREAM_POOL_MAX_IDLE_PER_HOST must be a valid number".to_string())?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            pool_idle_timeout: Duration::from_secs(pool_idle_timeout_secs),
            pool_max_idle_per_host,
        })
    }

    /// Endpoint returning every country in the flat list shape
    pub fn all_countries_url(&self) -> String {
        format!("{}/all", self.base_url)
    }

    /// Endpoint returning one country (nested name shape) by alpha-2 code
    pub fn country_by_code_url(&self, code: &str) -> String {
        format!("{}/alpha/{}", self.base_url, urlencoding::encode(code))
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Country Data API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Countries listing, detail, region filter and search".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}
