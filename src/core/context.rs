use crate::core::config::Config;
use std::env;
use std::path;
use std::str::FromStr;

/// Runtime state shared by every subcommand: the tool's home directory and
/// the loaded configuration.
///
/// Replaces ad hoc global constants with one structure assembled at startup
/// and passed into each stage.
pub struct Context {
    home_path: path::PathBuf,
    config: Config,
}

impl Context {
    pub fn new() -> Context {
        Context {
            home_path: std::env::temp_dir(),
            config: Config::new(),
        }
    }

    /// Sets the home directory. By default this is `$HOME/.ugt`. If set by
    /// `key`, it must be an existing directory.
    pub fn home(mut self, key: &str) -> Result<Context, ContextError> {
        self.home_path = if let Ok(s) = env::var(key) {
            path::PathBuf::from(s)
        } else {
            let hp = match home::home_dir() {
                Some(p) => p.join(".ugt"),
                None => {
                    return Err(ContextError(format!(
                        "failed to detect user's home directory; please set the {} environment variable",
                        key
                    )))
                }
            };
            // create the directory if it does not exist
            if path::Path::exists(&hp) == false {
                if let Err(e) = std::fs::create_dir(&hp) {
                    return Err(ContextError(format!(
                        "failed to create directory {}: {}",
                        hp.display(),
                        e
                    )));
                }
            }
            hp
        };
        // do not allow a nonexistent directory to be set for the home
        if path::Path::exists(&self.home_path) == false {
            return Err(ContextError(format!(
                "directory {} does not exist for {}",
                self.home_path.display(),
                key
            )));
        }
        Ok(self)
    }

    /// Loads the optional settings file `s` living directly under the home
    /// directory; absence keeps the built-in defaults.
    pub fn settings(mut self, s: &str) -> Result<Context, ContextError> {
        let cfg_path = self.home_path.join(s);
        if path::Path::exists(&cfg_path) == true {
            let text = match std::fs::read_to_string(&cfg_path) {
                Ok(t) => t,
                Err(e) => {
                    return Err(ContextError(format!(
                        "failed to read settings file {}: {}",
                        cfg_path.display(),
                        e
                    )))
                }
            };
            self.config = match Config::from_str(&text) {
                Ok(c) => c,
                Err(e) => {
                    return Err(ContextError(format!(
                        "failed to parse settings file {}: {}",
                        cfg_path.display(),
                        e
                    )))
                }
            };
        }
        Ok(self)
    }

    /// Access the configuration data.
    pub fn get_config(&self) -> &Config {
        &self.config
    }

    pub fn get_home_path(&self) -> &path::PathBuf {
        &self.home_path
    }
}

#[derive(Debug)]
pub struct ContextError(String);

impl std::error::Error for ContextError {}

impl std::fmt::Display for ContextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
