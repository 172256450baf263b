use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::env;
use std::fs;

#[derive(Parser, Debug)]
#[command(name = "itemsvc")]
#[command(about = "Runs the in-memory items service", long_about = None)]
pub struct Cli {
    #[arg(short = 'c', long = "config")]
    pub config_path: Option<String>,

    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct App {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_seed() -> bool {
    true
}

impl Default for App {
    fn default() -> Self {
        App {
            host: default_host(),
            port: default_port(),
            seed: default_seed(),
        }
    }
}

impl App {
    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub fn get_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for Log {
    fn default() -> Self {
        Log {
            format: LogFormat::default(),
            filter: default_filter(),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub app: App,
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Loads the config at `path`, or the defaults when no path is given.
    /// A `--port` flag wins over the file.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut cfg = match &cli.config_path {
            Some(path) => Config::new(path)?,
            None => Config::default(),
        };
        if let Some(port) = cli.port {
            cfg.app.port = port;
        }
        Ok(cfg)
    }

    pub fn new(path: &str) -> Result<Self> {
        let yaml_str =
            fs::read_to_string(path).with_context(|| format!("reading config file {}", path))?;
        Config::parse(&yaml_str)
    }

    fn parse(yaml_str: &str) -> Result<Config> {
        let yaml_with_env = Config::substitute_env_vars(yaml_str);
        let config: Config = serde_yaml::from_str(&yaml_with_env)?;
        Ok(config)
    }

    // ${VAR} and ${VAR:-default}; unset variables without a default become empty
    fn substitute_env_vars(yaml_str: &str) -> String {
        let mut result = yaml_str.to_string();
        let mut offset = 0;

        while let Some(start) = result[offset..].find("${") {
            let actual_start = offset + start;
            let Some(end) = result[actual_start..].find('}') else {
                break;
            };
            let expr = &result[actual_start + 2..actual_start + end];

            let env_value = match expr.split_once(":-") {
                Some((var, default_val)) => {
                    env::var(var).unwrap_or_else(|_| default_val.to_string())
                }
                None => env::var(expr).unwrap_or_else(|_| {
                    eprintln!("warning: environment variable '{}' not found", expr);
                    String::new()
                }),
            };

            result.replace_range(actual_start..actual_start + end + 1, &env_value);
            offset = actual_start + env_value.len();
        }

        result
    }
}
