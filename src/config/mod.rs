use clap::Parser;
use log::{info, warn};
use std::env;

use crate::errors::AppError;

/// Fixed listening port; not configurable through the environment.
pub const PORT: u16 = 81;

pub const DEFAULT_COLOR: &str = "#C1FF9C";

/// Supported color names in display order.
pub const COLOR_CODES: [(&str, &str); 7] = [
    ("red", "#e74c3c"),
    ("green", "#16a085"),
    ("blue", "#89CFF0"),
    ("blue2", "#30336b"),
    ("pink", "#f4c2c2"),
    ("darkblue", "#130f40"),
    ("lime", "#C1FF9C"),
];

#[derive(Parser, Debug)]
#[command(about = "Employee directory web application")]
pub struct Cli {
    /// Page color, overriding APP_COLOR
    #[arg(long)]
    pub color: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct S3Settings {
    pub bucket: String,
    pub key: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseSettings,
    pub s3: S3Settings,
    pub group_name: String,
    pub group_slogan: String,
    pub app_color: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = match lookup("DBPORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!("DBPORT '{}' is not a valid port, using 3306", raw);
                3306
            }),
            None => 3306,
        };

        Config {
            database: DatabaseSettings {
                host: var("DBHOST", "localhost"),
                port,
                user: var("DBUSER", "root"),
                password: var("DBPWD", "password"),
                name: var("DATABASE", "employees"),
            },
            s3: S3Settings {
                bucket: var("S3_BUCKET", ""),
                key: var("BG_IMAGE", ""),
                region: var("AWS_REGION", "us-east-1"),
                access_key_id: var("AWS_ACCESS_KEY_ID", ""),
                secret_access_key: var("AWS_SECRET_ACCESS_KEY", ""),
                session_token: var("AWS_SESSION_TOKEN", ""),
            },
            group_name: var("GROUP_NAME", "Team Shrey"),
            group_slogan: var("GROUP_SLOGAN", "We ship demos!"),
            app_color: var("APP_COLOR", "lime"),
        }
    }
}

pub fn color_code(name: &str) -> Option<&'static str> {
    COLOR_CODES
        .iter()
        .find(|(color, _)| *color == name)
        .map(|(_, code)| *code)
}

pub fn supported_colors() -> String {
    COLOR_CODES
        .iter()
        .map(|(color, _)| *color)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolves the page color. An unknown command-line color is an error,
/// an unknown environment color falls back to lime.
pub fn resolve_color(env_color: &str, cli_color: Option<&str>) -> Result<&'static str, AppError> {
    match cli_color {
        Some(name) => match color_code(name) {
            Some(code) => {
                info!("Using color from argument: {}", name);
                Ok(code)
            }
            None => Err(AppError::InvalidColor(format!(
                "'{}'. Supported: {}",
                name,
                supported_colors()
            ))),
        },
        None => {
            info!("Using color from environment or default: {}", env_color);
            Ok(color_code(env_color).unwrap_or(DEFAULT_COLOR))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.user, "root");
        assert_eq!(config.database.password, "password");
        assert_eq!(config.database.name, "employees");
        assert_eq!(config.s3.bucket, "");
        assert_eq!(config.s3.key, "");
        assert_eq!(config.s3.region, "us-east-1");
        assert_eq!(config.s3.session_token, "");
        assert_eq!(config.group_name, "Team Shrey");
        assert_eq!(config.group_slogan, "We ship demos!");
        assert_eq!(config.app_color, "lime");
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = config_from(&[
            ("DBHOST", "db.internal"),
            ("DBPORT", "3307"),
            ("S3_BUCKET", "assets"),
            ("BG_IMAGE", "bg1.jpg"),
            ("GROUP_NAME", "Blue Team"),
            ("APP_COLOR", "pink"),
        ]);
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 3307);
        assert_eq!(config.s3.bucket, "assets");
        assert_eq!(config.s3.key, "bg1.jpg");
        assert_eq!(config.group_name, "Blue Team");
        assert_eq!(config.app_color, "pink");
    }

    #[test]
    fn empty_value_still_overrides() {
        let config = config_from(&[("GROUP_SLOGAN", "")]);
        assert_eq!(config.group_slogan, "");
    }

    #[test]
    fn bad_port_falls_back() {
        let config = config_from(&[("DBPORT", "mysql")]);
        assert_eq!(config.database.port, 3306);
    }

    #[test]
    fn cli_color_overrides_environment() {
        assert_eq!(resolve_color("red", Some("blue2")).unwrap(), "#30336b");
    }

    #[test]
    fn invalid_cli_color_lists_supported_colors() {
        let err = resolve_color("red", Some("purple")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid color 'purple'. Supported: red, green, blue, blue2, pink, darkblue, lime"
        );
    }

    #[test]
    fn unknown_environment_color_falls_back() {
        assert_eq!(resolve_color("purple", None).unwrap(), DEFAULT_COLOR);
        assert_eq!(resolve_color("darkblue", None).unwrap(), "#130f40");
    }

    #[test]
    fn cli_parses_optional_color() {
        let cli = Cli::try_parse_from(["employee_directory", "--color", "green"]).unwrap();
        assert_eq!(cli.color.as_deref(), Some("green"));
        let cli = Cli::try_parse_from(["employee_directory"]).unwrap();
        assert!(cli.color.is_none());
    }
}
