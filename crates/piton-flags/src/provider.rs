//! The completion-flags query.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ProviderConfig;
use crate::database::CompilationDatabase;
use crate::record::FlagsRecord;

/// Named options accompanying a flags query.
///
/// Hosts pass whatever they like here; the provider accepts and ignores
/// arbitrary keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryOptions(pub BTreeMap<String, serde_json::Value>);

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.0.insert(key.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The flags for a translation unit of the firmware tree.
///
/// The path and every option are ignored; the answer is always the static
/// freestanding record. Cannot fail and has no side effects.
pub fn flags_for_file(path: impl AsRef<Path>, options: &QueryOptions) -> FlagsRecord {
    let path = path.as_ref();
    if !options.is_empty() {
        debug!(path = %path.display(), "ignoring {} extra query option(s)", options.0.len());
    }
    debug!(path = %path.display(), "serving static freestanding flags");
    FlagsRecord::freestanding()
}

/// Flags provider with an optional compilation database in front of the
/// static fallback.
#[derive(Debug, Default)]
pub struct Provider {
    database: Option<CompilationDatabase>,
    extra_flags: Vec<String>,
}

impl Provider {
    /// A provider that always answers with the static record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer from this database when the queried file is listed in it.
    pub fn with_database(mut self, database: CompilationDatabase) -> Self {
        self.database = Some(database);
        self
    }

    /// Append these flags to every answer.
    pub fn with_extra_flags(mut self, extra: Vec<String>) -> Self {
        self.extra_flags = extra;
        self
    }

    /// Build a provider from a project configuration.
    pub fn from_config(config: &ProviderConfig) -> crate::Result<Self> {
        let mut provider = Provider::new().with_extra_flags(config.provider.extra_flags.clone());
        if let Some(path) = &config.provider.database {
            provider.database = Some(CompilationDatabase::from_file(path)?);
        }
        Ok(provider)
    }

    /// The flags for `path`: the database entry's sanitized flags when one
    /// matches, otherwise the static freestanding record.
    pub fn query(&self, path: impl AsRef<Path>, options: &QueryOptions) -> FlagsRecord {
        let path = path.as_ref();

        let mut record = match self.database.as_ref().and_then(|db| db.find(path)) {
            Some(cmd) => {
                debug!(path = %path.display(), "flags from compilation database");
                FlagsRecord::new(cmd.completion_flags())
            }
            None => flags_for_file(path, options),
        };

        record.extend(self.extra_flags.iter().cloned());
        record
    }
}
