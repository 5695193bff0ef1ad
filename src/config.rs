use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub commands: CommandsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8081
}

/// External programs the daemon shells out to.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandsConfig {
    /// Program and arguments that suspend the machine.
    #[serde(default = "default_suspend")]
    pub suspend: Vec<String>,
    /// Power-information tool queried when the battery API has nothing (upower CLI).
    #[serde(default = "default_power_tool")]
    pub power_tool: String,
    /// Desktop notifier; skipped when not on PATH.
    #[serde(default = "default_notifier")]
    pub notifier: String,
    #[serde(default = "default_notifier_app_name")]
    pub notifier_app_name: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            suspend: default_suspend(),
            power_tool: default_power_tool(),
            notifier: default_notifier(),
            notifier_app_name: default_notifier_app_name(),
        }
    }
}

fn default_suspend() -> Vec<String> {
    vec!["systemctl".into(), "suspend".into()]
}

fn default_power_tool() -> String {
    "upower".into()
}

fn default_notifier() -> String {
    "notify-send".into()
}

fn default_notifier_app_name() -> String {
    "Phone Sync".into()
}

impl AppConfig {
    /// Load from `CONFIG_FILE`, else `config.toml` if present, else built-in defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(std::env::var("CONFIG_FILE").ok().as_deref())
    }

    /// An explicit path must be readable; without one a missing `config.toml` means defaults.
    pub fn load_from(path: Option<&str>) -> anyhow::Result<Self> {
        let path = match path {
            Some(p) => p,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => DEFAULT_CONFIG_PATH,
            None => {
                let config = Self::default();
                config.validate()?;
                return Ok(config);
            }
        };
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading config {}: {}", path, e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            self.commands
                .suspend
                .first()
                .is_some_and(|program| !program.is_empty()),
            "commands.suspend must name a program"
        );
        anyhow::ensure!(
            !self.commands.power_tool.is_empty(),
            "commands.power_tool must be non-empty"
        );
        anyhow::ensure!(
            !self.commands.notifier.is_empty(),
            "commands.notifier must be non-empty"
        );
        Ok(())
    }
}
