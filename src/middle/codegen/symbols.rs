//! 符号表
//!
//! Maps identifier text to generated host names in first-seen order. One
//! table belongs to one translation run.

use indexmap::IndexMap;

/// Default prefix of generated variable names
pub const DEFAULT_VAR_PREFIX: &str = "_db_var";

/// Translation-scoped symbol table
#[derive(Debug, Clone)]
pub struct SymbolTable {
    prefix: String,
    names: IndexMap<String, String>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_VAR_PREFIX)
    }

    /// Create a table whose generated names start with `prefix`
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            names: IndexMap::new(),
        }
    }

    /// Resolve identifier text to its generated name, allocating on first use
    pub fn resolve(
        &mut self,
        text: &str,
    ) -> &str {
        let next = self.names.len();
        let prefix = &self.prefix;
        let entry = self.names.entry(text.to_string()).or_insert_with(|| {
            let name = format!("{}{}", prefix, next);
            tracing::trace!("symbol {} -> {}", text, name);
            name
        });
        entry.as_str()
    }

    /// Generated name of an already resolved identifier
    pub fn get(
        &self,
        text: &str,
    ) -> Option<&str> {
        self.names.get(text).map(String::as_str)
    }

    /// Number of distinct identifiers seen
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
