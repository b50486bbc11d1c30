use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

pub static CONFIG: Lazy<Arc<RwLock<Config>>> =
    Lazy::new(|| Arc::new(RwLock::new(Config::default())));

pub use crate::cli::DEFAULT_HISTORY_PATH;

pub struct Config {
    entries: HashMap<String, ValKind>,
}

pub enum ValKind {
    Bool(bool),
    Str(String),
}

type NameResult = Result<(), ConfigErr>;

impl Default for Config {
    fn default() -> Self {
        use ValKind::*;
        let mut entries = HashMap::new();
        entries.insert("debug".to_owned(), Bool(false));
        entries.insert("show_postfix".to_owned(), Bool(false));
        entries.insert("show_tree".to_owned(), Bool(false));
        entries.insert("history_path".to_owned(), Str(DEFAULT_HISTORY_PATH.to_owned()));
        entries.insert("no_history".to_owned(), Bool(false));
        Self { entries }
    }
}

impl Config {
    fn check_name(&self, name: &str) -> NameResult {
        if self.entries.contains_key(name) {
            Ok(())
        } else {
            Err(ConfigErr::new(ConfigErrKind::NameNotKnown(name.to_owned())))
        }
    }

    fn get(&self, name: &str) -> Result<&ValKind, ConfigErr> {
        self.check_name(name)?;
        if let Some(val) = self.entries.get(name) {
            Ok(val)
        } else {
            Err(ConfigErr::new(ConfigErrKind::ValueNotSet(name.to_owned())))
        }
    }

    pub fn get_bool(&self, name: &str) -> Result<bool, ConfigErr> {
        let val = self.get(name)?;
        if let ValKind::Bool(val) = val {
            Ok(*val)
        } else {
            Err(ConfigErr::invalid(name, "expected bool"))
        }
    }

    pub fn get_str(&self, name: &str) -> Result<&String, ConfigErr> {
        let val = self.get(name)?;
        if let ValKind::Str(val) = val {
            Ok(val)
        } else {
            Err(ConfigErr::invalid(name, "expected string"))
        }
    }

    fn set(&mut self, name: &str, val: ValKind) -> NameResult {
        self.check_name(name)?;
        self.entries.insert(name.to_owned(), val);
        Ok(())
    }

    pub fn set_bool(&mut self, name: &str, val: bool) -> NameResult {
        self.set(name, ValKind::Bool(val))
    }

    pub fn set_str(&mut self, name: &str, val: &str) -> NameResult {
        self.set(name, ValKind::Str(val.to_owned()))
    }
}

/// Read a bool setting from the global config, falling back to `false`
/// if the config lock is poisoned or the entry is missing.
pub fn flag(name: &str) -> bool {
    match CONFIG.read() {
        Ok(config) => config.get_bool(name).unwrap_or(false),
        Err(_) => false,
    }
}

// Errors --------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct ConfigErr {
    pub kind: ConfigErrKind,
}

impl ConfigErr {
    pub fn new(kind: ConfigErrKind) -> Self {
        Self { kind }
    }

    fn invalid(name: &str, msg: &str) -> Self {
        Self::new(ConfigErrKind::ValueIsNotValid(name.to_owned(), msg.to_owned()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigErrKind {
    NameNotKnown(String),
    ValueNotSet(String),
    ValueIsNotValid(String, String), // name, reason
}

impl fmt::Display for ConfigErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ConfigErrKind::*;
        match &self.kind {
            NameNotKnown(name) => write!(f, "Unknown config setting: {name}"),
            ValueNotSet(name) => write!(f, "Config setting not set: {name}"),
            ValueIsNotValid(name, msg) => {
                write!(f, "Config setting {name} is not valid: {msg}")
            }
        }
    }
}
