use std::{
    collections::HashMap,
    env, fs,
    io::{BufRead, BufReader},
    net::{IpAddr, SocketAddr},
    path::PathBuf,
};

use anyhow::{Context, Result};
use directories::BaseDirs;

pub const DEFAULT_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 12345;

#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
    pub config_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let mut map = default_map();
        let config_path = default_config_path();

        // Read .jsendrc if exists
        if config_path.exists() {
            if let Ok(file) = fs::File::open(&config_path) {
                let reader = BufReader::new(file);
                for line in reader.lines().map_while(Result::ok) {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    if let Some((k, v)) = line.split_once('=') {
                        map.insert(k.trim().to_string(), v.trim().to_string());
                    }
                }
            }
        }

        // Overlay environment variables (take precedence)
        for (k, v) in env::vars() {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self { inner: map, config_path }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        // ENV first
        if let Ok(v) = env::var(key) {
            return Some(v);
        }
        self.inner.get(key).cloned()
    }

    pub fn get_u16(&self, key: &str) -> Option<u16> {
        self.get(key).and_then(|v| v.parse::<u16>().ok())
    }

    pub fn default_status(&self) -> String {
        self.get("DEFAULT_STATUS").unwrap_or_else(|| "Pass".to_string())
    }
}

/// Combine CLI overrides with config into the destination address.
/// Precedence: CLI, then environment/rc file, then the loopback default.
pub fn resolve_target(address: Option<&str>, port: Option<u16>, cfg: &Config) -> Result<SocketAddr> {
    let address = match address {
        Some(a) => a.to_string(),
        None => cfg
            .get("TARGET_ADDRESS")
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string()),
    };
    let port = port
        .or_else(|| cfg.get_u16("TARGET_PORT"))
        .unwrap_or(DEFAULT_PORT);

    let ip: IpAddr = address
        .parse()
        .with_context(|| format!("invalid destination address: {address}"))?;
    Ok(SocketAddr::new(ip, port))
}

fn is_config_key(k: &str) -> bool {
    const KEYS: &[&str] = &["TARGET_ADDRESS", "TARGET_PORT", "DEFAULT_STATUS"];

    KEYS.contains(&k) || k.starts_with("JSEND_")
}

fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("jsend").join(".jsendrc")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();

    m.insert("TARGET_ADDRESS".into(), DEFAULT_ADDRESS.into());
    m.insert("TARGET_PORT".into(), DEFAULT_PORT.to_string());
    m.insert("DEFAULT_STATUS".into(), "Pass".into());

    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_win() {
        let cfg = Config::load();
        let target = resolve_target(Some("10.1.2.3"), Some(9000), &cfg).unwrap();
        assert_eq!(target.to_string(), "10.1.2.3:9000");
    }

    #[test]
    fn invalid_address_is_rejected() {
        let cfg = Config::load();
        assert!(resolve_target(Some("not-an-ip"), Some(9000), &cfg).is_err());
    }
}
