//! Process configuration read from the environment (after `.env` is loaded).

use std::time::Duration;

use anyhow::{Context as _, bail};

use pokecord_utils::pagination::{DEFAULT_PAGE_SIZE, PaginationConfig};

/// Message-command prefix used when `COMMAND_PREFIX` is unset.
pub const DEFAULT_COMMAND_PREFIX: &str = "p!";

/// Bot settings resolved at startup.
#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub command_prefix: String,
    pub pagination: PaginationConfig,
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let token = lookup("DISCORD_TOKEN")
            .filter(|value| !value.trim().is_empty())
            .context("DISCORD_TOKEN must be set")?;

        let command_prefix = lookup("COMMAND_PREFIX")
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_owned());

        let page_size = match non_empty(lookup("PAGINATION_PAGE_SIZE")) {
            Some(raw) => {
                let size = raw
                    .parse::<usize>()
                    .with_context(|| format!("PAGINATION_PAGE_SIZE is not a number: {raw}"))?;
                if size == 0 {
                    bail!("PAGINATION_PAGE_SIZE must be > 0");
                }
                size
            }
            None => DEFAULT_PAGE_SIZE,
        };

        let idle_timeout = match non_empty(lookup("PAGINATION_TIMEOUT_SECS")) {
            Some(raw) => {
                let secs = raw.parse::<u64>().with_context(|| {
                    format!("PAGINATION_TIMEOUT_SECS is not a number: {raw}")
                })?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            token,
            command_prefix,
            pagination: PaginationConfig {
                page_size,
                idle_timeout,
            },
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|raw| !raw.is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_token_is_set() {
        let config = config_from(&[("DISCORD_TOKEN", "abc")]).unwrap();

        assert_eq!(config.token, "abc");
        assert_eq!(config.command_prefix, DEFAULT_COMMAND_PREFIX);
        assert_eq!(config.pagination, PaginationConfig::default());
    }

    #[test]
    fn missing_token_is_an_error() {
        assert!(config_from(&[]).is_err());
        assert!(config_from(&[("DISCORD_TOKEN", "  ")]).is_err());
    }

    #[test]
    fn reads_pagination_overrides() {
        let config = config_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("COMMAND_PREFIX", "!"),
            ("PAGINATION_PAGE_SIZE", "5"),
            ("PAGINATION_TIMEOUT_SECS", "30"),
        ])
        .unwrap();

        assert_eq!(config.command_prefix, "!");
        assert_eq!(config.pagination.page_size, 5);
        assert_eq!(
            config.pagination.idle_timeout,
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn zero_timeout_means_unbounded() {
        let config =
            config_from(&[("DISCORD_TOKEN", "abc"), ("PAGINATION_TIMEOUT_SECS", "0")]).unwrap();
        assert_eq!(config.pagination.idle_timeout, None);
    }

    #[test]
    fn rejects_bad_page_size() {
        assert!(config_from(&[("DISCORD_TOKEN", "abc"), ("PAGINATION_PAGE_SIZE", "0")]).is_err());
        assert!(
            config_from(&[("DISCORD_TOKEN", "abc"), ("PAGINATION_PAGE_SIZE", "three")]).is_err()
        );
    }
}
