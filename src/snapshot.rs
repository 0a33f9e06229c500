//! One-shot capture of the process environment.
//! Used by: report, bin/db-check.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};

/// An ephemeral view of the environment variables the tools care about,
/// read once per invocation. Every query afterwards hits the snapshot, not
/// the live environment, so one run reports one consistent state.
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Captures the named variables from the process environment. Absent
    /// and non-unicode variables are simply not in the snapshot.
    pub fn capture(names: &[&str]) -> Self {
        let vars = names
            .iter()
            .filter_map(|name| {
                std::env::var(name)
                    .ok()
                    .map(|value| (name.to_string(), value))
            })
            .collect();
        Self { vars }
    }

    /// Builds a snapshot from explicit pairs. Tests use this so they never
    /// touch the process environment.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Folds NAME=VALUE pairs from an env file into the snapshot. Names
    /// already captured from the process environment keep their value,
    /// matching dotenv precedence.
    pub fn merge_env_file(&mut self, path: &Path) -> Result<()> {
        let file_vars = env_file_reader::read_file(path).map_err(|source| Error::EnvFile {
            path: path.to_path_buf(),
            source,
        })?;
        for (name, value) in file_vars {
            self.vars.entry(name).or_insert(value);
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }
}
