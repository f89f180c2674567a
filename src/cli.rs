use clap::Parser;
use std::io;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

/// Terminal front end for the Sakila movie-rental catalog.
#[derive(Debug, Parser)]
#[command(name = "sakila-tui", version, about)]
pub struct Cli {
    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the catalog API base URL
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Route to open at startup (e.g. /films, /actors/7)
    #[arg(long, value_name = "PATH")]
    pub route: Option<String>,
}

impl Cli {
    /// Loads the config file, then applies flag overrides on top.
    ///
    /// An explicitly given `--config` must exist; the default location may not.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) if !path.exists() => {
                return Err(ConfigError::ReadError {
                    path: path.clone(),
                    source: io::Error::new(io::ErrorKind::NotFound, "file does not exist"),
                });
            }
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        if let Some(route) = &self.route {
            config.ui.start_route = route.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::router::Route;
    use std::fs;

    #[test]
    fn flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[api]\nbase_url = \"http://files.example/api\"\n[ui]\nstart_route = \"/customers\"\n",
        )
        .unwrap();

        let cli = Cli::parse_from([
            "sakila-tui",
            "--config",
            path.to_str().unwrap(),
            "--route",
            "/films/3",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.api.base_url, "http://files.example/api");
        assert_eq!(config.start_route().unwrap(), Route::FilmDetail { film_id: 3 });
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let cli = Cli::parse_from(["sakila-tui", "--config", "/definitely/not/here.toml"]);
        assert!(matches!(
            cli.resolve_config(),
            Err(ConfigError::ReadError { .. })
        ));
    }

    #[test]
    fn bad_api_url_flag_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let cli = Cli::parse_from([
            "sakila-tui",
            "--config",
            path.to_str().unwrap(),
            "--api-url",
            "ftp://catalog.example/api",
        ]);
        assert!(matches!(
            cli.resolve_config(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
