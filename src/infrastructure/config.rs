//! Application configuration
//!
//! Read once at startup and injected into the relay. A deployment picks one
//! delivery backend with `RELAY_BACKEND`; missing credentials for it do not
//! stop the server, they are kept as a [`ConfigError`] and every submission
//! is answered with a generic configuration error.

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_RESEND_FROM: &str = "Guild Recruitment <onboarding@resend.dev>";
const DEFAULT_RESEND_API_BASE: &str = "https://api.resend.com";

/// Which delivery backend a deployment uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryBackendKind {
    Discord,
    Formspree,
    Resend,
    ResendWithSheets,
}

impl FromStr for DeliveryBackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "discord" => Ok(Self::Discord),
            "formspree" => Ok(Self::Formspree),
            "resend" => Ok(Self::Resend),
            "resend_with_sheets" => Ok(Self::ResendWithSheets),
            other => anyhow::bail!(
                "Unknown RELAY_BACKEND '{}', expected discord, formspree, resend or resend_with_sheets",
                other
            ),
        }
    }
}

/// Transactional email settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub from: String,
    /// Officer mailbox receiving applications
    pub to: String,
}

/// Fully resolved settings for the selected backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryBackendConfig {
    ChatWebhook { webhook_url: String },
    FormRelay { endpoint: String },
    Email(EmailConfig),
    EmailWithSheetLog {
        email: EmailConfig,
        /// Logging is skipped when unset
        sheet_url: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing {0} environment variable")]
    MissingVar(&'static str),
    #[error("Missing {0} or {1} environment variable")]
    MissingEitherVar(&'static str, &'static str),
}

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server port
    pub server_port: u16,
    pub backend_kind: DeliveryBackendKind,
    /// Settings for `backend_kind`, or what is missing from them
    pub delivery: Result<DeliveryBackendConfig, ConfigError>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let server_port = get("SERVER_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("SERVER_PORT must be a valid port number")?;

        let backend_kind: DeliveryBackendKind = get("RELAY_BACKEND")
            .unwrap_or_else(|| "discord".to_string())
            .parse()?;

        let delivery = resolve_delivery(backend_kind, &get);

        Ok(Self {
            server_port,
            backend_kind,
            delivery,
        })
    }
}

fn resolve_delivery<F>(kind: DeliveryBackendKind, get: &F) -> Result<DeliveryBackendConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let require = |key: &'static str| get(key).ok_or(ConfigError::MissingVar(key));

    match kind {
        DeliveryBackendKind::Discord => Ok(DeliveryBackendConfig::ChatWebhook {
            webhook_url: require("DISCORD_WEBHOOK_URL")?,
        }),
        DeliveryBackendKind::Formspree => Ok(DeliveryBackendConfig::FormRelay {
            endpoint: require("FORMSPREE_ENDPOINT")?,
        }),
        DeliveryBackendKind::Resend => Ok(DeliveryBackendConfig::Email(resolve_email(get)?)),
        DeliveryBackendKind::ResendWithSheets => Ok(DeliveryBackendConfig::EmailWithSheetLog {
            email: resolve_email(get)?,
            sheet_url: get("GOOGLE_SHEETS_URL"),
        }),
    }
}

fn resolve_email<F>(get: &F) -> Result<EmailConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let api_key = get("RESEND_API_KEY").ok_or(ConfigError::MissingVar("RESEND_API_KEY"))?;
    // ADMIN_EMAIL overrides the regular destination
    let to = get("ADMIN_EMAIL")
        .or_else(|| get("RESEND_TO"))
        .ok_or(ConfigError::MissingEitherVar("ADMIN_EMAIL", "RESEND_TO"))?;

    Ok(EmailConfig {
        api_key,
        api_base_url: get("RESEND_API_BASE")
            .unwrap_or_else(|| DEFAULT_RESEND_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string(),
        from: get("RESEND_FROM").unwrap_or_else(|| DEFAULT_RESEND_FROM.to_string()),
        to,
    })
}
