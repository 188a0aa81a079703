use std::collections::BTreeMap;

/// A single `KEY=value` entry in an environment file.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvEntry {
    pub key: String,
    pub value: String,
}

/// A parsed environment file (e.g. `.env.staging`).
///
/// Entries keep file order, duplicates included; comments and blank
/// lines are dropped by the parser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvFile {
    pub entries: Vec<EnvEntry>,
}

impl EnvFile {
    /// Flatten into a variable map. Later duplicate keys win.
    pub fn into_vars(self) -> BTreeMap<String, String> {
        self.entries
            .into_iter()
            .map(|entry| (entry.key, entry.value))
            .collect()
    }
}
