use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{builder::DefaultState, ConfigBuilder, File, FileFormat};
use letterbox_models::email_address::EmailAddress;
use serde::Deserialize;

pub const DEFAULT_CONFIG: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml"));

/// Colon separated list of additional config files
pub const CONFIG_PATH_ENV: &str = "LETTERBOX_CONFIG_PATH";

/// Environment variables that override single config keys
pub const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("RECIPIENT_EMAIL", "contact.recipient"),
    ("SENDER_EMAIL", "email.from"),
    ("ALLOWED_ORIGIN", "cors.allowed_origin"),
    ("SMTP_URL", "email.smtp_url"),
];

/// Load the config from the embedded defaults, the files listed in
/// [`CONFIG_PATH_ENV`] and the [`ENV_OVERRIDES`].
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var_os(CONFIG_PATH_ENV)
        .map(|paths| std::env::split_paths(&paths).collect::<Vec<_>>())
        .unwrap_or_default();

    load_from(&paths, |var| std::env::var(var).ok())
}

pub fn load_from(
    paths: &[impl AsRef<Path>],
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Config> {
    let builder =
        config::Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    let builder = paths.iter().try_fold(builder, |builder, path| {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let source = File::from_str(&content, FileFormat::Toml);
        anyhow::Ok(builder.add_source(source))
    })?;

    apply_env_overrides(builder, env)?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

fn apply_env_overrides(
    builder: ConfigBuilder<DefaultState>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ConfigBuilder<DefaultState>> {
    ENV_OVERRIDES
        .iter()
        .try_fold(builder, |builder, &(var, key)| {
            let value = env(var).filter(|value| !value.is_empty());
            builder.set_override_option(key, value)
        })
        .context("Failed to apply environment overrides")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub smtp_url: String,
    pub from: EmailAddress,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub recipient: EmailAddress,
    pub site: String,
}

#[derive(Debug, Deserialize)]
pub struct CorsConfig {
    pub allowed_origin: String,
}
