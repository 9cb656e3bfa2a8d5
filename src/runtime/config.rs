//! Configuration Management
//!
//! Values are read once, on first access, from (in increasing priority)
//! `<config dir>/filterscope/config.toml`, `./config.toml`, and `FILTERSCOPE_*`
//! environment variables. They can be overridden at runtime with [set].
use config::File;
use config::Source;
use config::Value;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Mutex;
use std::sync::MutexGuard;
use tracing::level_filters::LevelFilter;

/// Get global configuration
pub fn config() -> Config {
    get_config().clone()
}

// helper to deal with poisoned Mutex
fn get_config() -> MutexGuard<'static, Config> {
    CONFIG.lock().unwrap_or_else(|poison| {
        warn!("config poisoned, restoring initial config");
        let mut c = poison.into_inner();
        *c = init_config();
        CONFIG.clear_poison();
        c
    })
}

/// Set config value
pub fn set<V: Into<config::Value>>(name: impl Into<String>, value: V) {
    get_config().set_value(name, value);
}

/// Get value from config
pub fn get_value(name: &str) -> Option<Value> {
    get_config().misc.get(name).cloned()
}

/// Try to parse value from config string
pub fn get<T: FromStr>(name: &str) -> Option<T> {
    get_config()
        .misc
        .get(name)
        .and_then(|v| v.clone().into_string().ok())
        .and_then(|v| v.parse::<T>().ok())
}

fn init_config() -> Config {
    let mut settings = ::config::Config::builder();

    // user config
    if let Some(mut path) = dirs::config_dir() {
        path.push("filterscope");
        path.push("config.toml");

        settings = settings.add_source(File::from(path).required(false));
    }

    // project config
    settings =
        settings.add_source(File::new("config.toml", config::FileFormat::Toml).required(false));

    // env config
    settings = settings.add_source(config::Environment::with_prefix("filterscope"));

    // start from default config
    let mut c = Config::default();

    match settings.build() {
        Ok(settings) => match settings.collect() {
            Ok(config) => {
                for (k, v) in config {
                    c.set_value(k, v);
                }
            }
            Err(e) => warn!("error parsing config {e:?}"),
        },
        Err(e) => warn!("error reading config {e:?}"),
    }
    c
}

static CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| Mutex::new(init_config()));

/// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LevelFilter,
    /// Frequency points of computed responses
    pub num_points: usize,
    /// Plot width in terminal columns
    pub plot_width: u32,
    /// Plot height in terminal rows
    pub plot_height: u32,
    misc: HashMap<String, Value>,
}

impl Config {
    fn set_value<V: Into<config::Value>>(&mut self, name: impl Into<String>, value: V) {
        let name = name.into();
        let value = value.into();

        match name.as_str() {
            "log_level" => parse_into(&mut self.log_level, &name, &value),
            "num_points" => parse_into(&mut self.num_points, &name, &value),
            "plot_width" => parse_into(&mut self.plot_width, &name, &value),
            "plot_height" => parse_into(&mut self.plot_height, &name, &value),
            _ => {
                self.misc.insert(name, value);
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: if cfg!(debug_assertions) {
                LevelFilter::DEBUG
            } else {
                LevelFilter::INFO
            },
            num_points: 1024,
            plot_width: 120,
            plot_height: 40,
            misc: HashMap::new(),
        }
    }
}

// Invalid values keep the current setting.
fn parse_into<T: FromStr>(field: &mut T, name: &str, v: &Value) {
    match config_parse::<T>(v) {
        Some(parsed) => *field = parsed,
        None => warn!("invalid config value for {name}: {v:?}"),
    }
}

fn config_parse<T: FromStr>(v: &Value) -> Option<T> {
    v.clone().into_string().ok()?.parse::<T>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_are_parsed() {
        let mut c = Config::default();
        c.set_value("num_points", 512);
        c.set_value("log_level", "warn");
        c.set_value("plot_width", "80");
        assert_eq!(c.num_points, 512);
        assert_eq!(c.log_level, LevelFilter::WARN);
        assert_eq!(c.plot_width, 80);
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let mut c = Config::default();
        c.set_value("num_points", "many");
        c.set_value("plot_height", -3);
        assert_eq!(c.num_points, 1024);
        assert_eq!(c.plot_height, 40);
    }

    #[test]
    fn unknown_keys_go_to_misc() {
        let mut c = Config::default();
        c.set_value("answer", 42);
        assert_eq!(
            c.misc.get("answer").and_then(|v| v.clone().into_int().ok()),
            Some(42)
        );
    }
}
