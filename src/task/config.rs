use std::{collections::HashMap, fs};

use serde::Deserialize;

use super::{Task, registry::TaskRegistry};
use crate::error::Result;

/// Interpreter used for `entry` tasks unless the config overrides it.
pub const DEFAULT_INTERPRETER: &str = "node";

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(rename = "task")]
    tasks: HashMap<String, Task>,
    config: Option<ConfigSection>,
}

#[derive(Debug, Deserialize, Default)]
struct ConfigSection {
    interpreter: Option<String>,
    strict: Option<bool>,
}

/// The loaded task set plus the run options the config file carries.
#[derive(Debug)]
pub struct Configuration {
    pub registry: TaskRegistry,
    pub interpreter: String,
    pub strict: bool,
}

pub fn load_config(config_path: &str) -> Result<Configuration> {
    let contents = fs::read_to_string(config_path)?;
    parse_config(&contents)
}

fn parse_config(contents: &str) -> Result<Configuration> {
    let file: ConfigFile = toml::from_str(contents)?;
    let section = file.config.unwrap_or_default();

    let mut registry = TaskRegistry::new();
    for (name, mut task) in file.tasks {
        if task.alias.is_empty() {
            task.alias = name;
        }
        registry.register(task)?;
    }

    Ok(Configuration {
        registry,
        interpreter: section
            .interpreter
            .unwrap_or_else(|| DEFAULT_INTERPRETER.to_string()),
        strict: section.strict.unwrap_or(false),
    })
}
