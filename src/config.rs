//! Application configuration loaded from environment variables.
//!
//! Configuration is read once at startup, validated, and never mutated
//! afterwards. Components receive it (or the values they need) through their
//! constructors.
//!
//! ## Required Variables
//!
//! ```bash
//! export API_BASE_URL="https://project.supabase.co/rest/v1"
//! export API_KEY="anon-key"
//! export API_AUTH_TOKEN="jwt"
//! ```
//!
//! ## Optional Variables
//!
//! - `API_TIMEOUT_MS` - Per-request deadline in milliseconds (default: 10000)
//! - `APP_DEBUG` - `true`/`1` raises the default log level to `debug` (default: false)
//! - `REFRESH_INTERVAL_MS` - Dashboard refresh interval for `watch`, 0 disables (default: 30000)
//! - `TOP_COURSES` - Number of popular courses shown on the dashboard (default: 5)
//! - `TEACHERS_PATH`, `STUDENTS_PATH`, `COURSES_PATH`, `ENROLLMENTS_PATH` - Resource paths
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

use crate::domain::entities::{Course, Enrollment, Entity, Student, Teacher};

/// Upper bound for `API_TIMEOUT_MS`.
const MAX_TIMEOUT_MS: u64 = 300_000;

/// Resource path per entity, relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePaths {
    pub teachers: String,
    pub students: String,
    pub courses: String,
    pub enrollments: String,
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            teachers: Teacher::SPEC.path.to_string(),
            students: Student::SPEC.path.to_string(),
            courses: Course::SPEC.path.to_string(),
            enrollments: Enrollment::SPEC.path.to_string(),
        }
    }
}

impl ResourcePaths {
    fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            teachers: env::var("TEACHERS_PATH").unwrap_or(defaults.teachers),
            students: env::var("STUDENTS_PATH").unwrap_or(defaults.students),
            courses: env::var("COURSES_PATH").unwrap_or(defaults.courses),
            enrollments: env::var("ENROLLMENTS_PATH").unwrap_or(defaults.enrollments),
        }
    }

    fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("TEACHERS_PATH", self.teachers.as_str()),
            ("STUDENTS_PATH", self.students.as_str()),
            ("COURSES_PATH", self.courses.as_str()),
            ("ENROLLMENTS_PATH", self.enrollments.as_str()),
        ]
        .into_iter()
    }
}

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
    pub auth_token: String,
    pub timeout_ms: u64,
    pub debug: bool,
    /// Dashboard refresh interval used by the `watch` command. Zero disables refresh.
    pub refresh_interval_ms: u64,
    pub top_courses: usize,
    pub paths: ResourcePaths,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("API_BASE_URL").context("API_BASE_URL must be set")?;
        let api_key = env::var("API_KEY").context("API_KEY must be set")?;
        let auth_token = env::var("API_AUTH_TOKEN").context("API_AUTH_TOKEN must be set")?;

        let timeout_ms = env::var("API_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        let debug = env::var("APP_DEBUG")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let refresh_interval_ms = env::var("REFRESH_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30_000);

        let top_courses = env::var("TOP_COURSES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            base_url,
            api_key,
            auth_token,
            timeout_ms,
            debug,
            refresh_interval_ms,
            top_courses,
            paths: ResourcePaths::from_env(),
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_url` is not an absolute http(s) URL
    /// - a credential is empty
    /// - `timeout_ms` is 0 or above 300000
    /// - `top_courses` is 0
    /// - a resource path does not start with `/`
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        let parsed = Url::parse(&self.base_url)
            .with_context(|| format!("API_BASE_URL is not a valid URL: '{}'", self.base_url))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            anyhow::bail!(
                "API_BASE_URL must use http or https, got '{}'",
                parsed.scheme()
            );
        }

        if self.api_key.is_empty() {
            anyhow::bail!("API_KEY must not be empty");
        }
        if self.auth_token.is_empty() {
            anyhow::bail!("API_AUTH_TOKEN must not be empty");
        }

        if self.timeout_ms == 0 || self.timeout_ms > MAX_TIMEOUT_MS {
            anyhow::bail!(
                "API_TIMEOUT_MS must be between 1 and {}, got {}",
                MAX_TIMEOUT_MS,
                self.timeout_ms
            );
        }

        if self.top_courses == 0 {
            anyhow::bail!("TOP_COURSES must be at least 1");
        }

        for (name, path) in self.paths.iter() {
            if !path.starts_with('/') {
                anyhow::bail!("{name} must start with '/', got '{path}'");
            }
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Returns the refresh interval, or `None` when refresh is disabled.
    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.refresh_interval_ms > 0).then(|| Duration::from_millis(self.refresh_interval_ms))
    }

    /// Log filter to install when `RUST_LOG` does not override it.
    ///
    /// `APP_DEBUG` raises an `info` default to `debug`.
    pub fn effective_log_level(&self) -> &str {
        if self.debug && self.log_level == "info" {
            "debug"
        } else {
            &self.log_level
        }
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  API key: {}", mask_secret(&self.api_key));
        tracing::info!("  Auth token: {}", mask_secret(&self.auth_token));
        tracing::info!("  Timeout: {}ms", self.timeout_ms);
        tracing::info!("  Debug: {}", self.debug);
        match self.refresh_interval() {
            Some(interval) => tracing::info!("  Refresh interval: {}ms", interval.as_millis()),
            None => tracing::info!("  Refresh interval: disabled"),
        }
        for (name, path) in self.paths.iter() {
            tracing::info!("  {}: {}", name, path);
        }
        tracing::info!("  Log level: {}", self.effective_log_level());
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a credential for logging, keeping only the first four characters.
///
/// - `eyJhbGciOiJIUzI1NiJ9` → `eyJh***`
/// - `abc` → `***`
pub fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 8 {
        return "***".to_string();
    }
    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
