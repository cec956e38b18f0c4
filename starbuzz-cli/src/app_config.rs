use serde::Deserialize;
use starbuzz_catalog::Size;
use std::env;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub menu: MenuConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MenuConfig {
    /// Cup size used when an order does not name one
    pub default_size: Size,
    pub currency: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// Used only when `RUST_LOG` is unset
    pub filter: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("STARBUZZ_RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from(Path::new("config"), &run_mode)
    }

    pub fn load_from(dir: &Path, run_mode: &str) -> Result<Self, config::ConfigError> {
        let file = |name: &str| {
            config::File::with_name(&dir.join(name).to_string_lossy()).required(false)
        };

        let s = config::Config::builder()
            .set_default("menu.default_size", "TALL")?
            .set_default("menu.currency", "$")?
            .set_default("log.filter", "starbuzz=warn")?
            // Every file is optional; the defaults above are a complete config
            .add_source(file("default"))
            .add_source(file(run_mode))
            // Local overrides, not checked in
            .add_source(file("local"))
            // Eg.. `STARBUZZ__MENU__CURRENCY=€` sets `menu.currency`
            .add_source(config::Environment::with_prefix("STARBUZZ").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path(), "test").unwrap();

        assert_eq!(config.menu.default_size, Size::Tall);
        assert_eq!(config.menu.currency, "$");
        assert_eq!(config.log.filter, "starbuzz=warn");
    }

    #[test]
    fn test_run_mode_file_overrides_default_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[menu]\ndefault_size = \"GRANDE\"\ncurrency = \"₩\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("staging.toml"), "[menu]\ndefault_size = \"VENTI\"\n").unwrap();

        let config = Config::load_from(dir.path(), "staging").unwrap();
        assert_eq!(config.menu.default_size, Size::Venti);
        assert_eq!(config.menu.currency, "₩");
    }

    #[test]
    fn test_invalid_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[menu]\ndefault_size = \"TRENTA\"\n").unwrap();

        let err = Config::load_from(dir.path(), "test").unwrap_err();
        assert!(err.to_string().contains("Invalid size: TRENTA"), "{err}");
    }

    #[test]
    fn test_size_ignores_case() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[menu]\ndefault_size = \"venti\"\n").unwrap();

        let config = Config::load_from(dir.path(), "test").unwrap();
        assert_eq!(config.menu.default_size, Size::Venti);
    }
}
