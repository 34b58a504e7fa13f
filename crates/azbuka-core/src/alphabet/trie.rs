use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::debug;

use super::config::{parse_table_toml, TableConfigError};
use super::table::Table;

/// Custom TOML per table, and whether the table has started building.
///
/// Both live under one lock so a table is either built from the custom TOML
/// or `init_custom` reports it as already initialized.
struct Registry {
    custom: [Option<String>; 4],
    sealed: [bool; 4],
}

static REGISTRY: Mutex<Registry> = Mutex::new(Registry {
    custom: [None, None, None, None],
    sealed: [false; 4],
});

static INSTANCES: [OnceLock<MappingTrie>; 4] = [
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
];

#[cfg(test)]
#[derive(Debug, PartialEq)]
pub(crate) enum TrieLookupResult<'a> {
    None,
    Prefix,
    Exact(&'a str),
    ExactAndPrefix(&'a str),
}

#[derive(Debug, Default)]
struct Node {
    children: HashMap<char, Node>,
    target: Option<String>,
}

/// Char-keyed trie over the source patterns of one mapping table.
#[derive(Debug)]
pub struct MappingTrie {
    root: Node,
    len: usize,
}

impl MappingTrie {
    /// Set custom TOML for `table` before its first `global()` call.
    pub fn init_custom(table: Table, toml_content: String) -> Result<(), TableConfigError> {
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        let mut registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
        let i = table.index();
        if registry.sealed[i] || registry.custom[i].is_some() {
            return Err(TableConfigError::AlreadyInitialized(table.name()));
        }
        registry.custom[i] = Some(toml_content);
        Ok(())
    }

    /// Mark `table` as building and hand out its custom TOML, if any.
    fn seal(table: Table) -> Option<String> {
        let mut registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
        registry.sealed[table.index()] = true;
        registry.custom[table.index()].take()
    }

    /// Get or initialize the global trie for `table`.
    pub fn global(table: Table) -> &'static MappingTrie {
        INSTANCES[table.index()].get_or_init(|| {
            let custom = MappingTrie::seal(table);
            let toml_str = custom.as_deref().unwrap_or(table.default_toml());
            let map = parse_table_toml(toml_str).expect("mapping table TOML must be valid");
            let trie = MappingTrie::from_mappings(&map);
            debug!(
                table = table.name(),
                entries = trie.len(),
                custom = custom.is_some(),
                "mapping trie built"
            );
            trie
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<MappingTrie, TableConfigError> {
        parse_table_toml(toml_str).map(|map| MappingTrie::from_mappings(&map))
    }

    pub fn from_mappings(map: &BTreeMap<String, String>) -> MappingTrie {
        let mut trie = MappingTrie {
            root: Node::default(),
            len: 0,
        };
        for (source, target) in map {
            trie.insert(source, target);
        }
        trie
    }

    /// Number of source patterns.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[cfg(test)]
    pub(crate) fn lookup(&self, pattern: &str) -> TrieLookupResult<'_> {
        let mut node = &self.root;
        for ch in pattern.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return TrieLookupResult::None,
            }
        }
        let has_children = !node.children.is_empty();
        match (&node.target, has_children) {
            (None, false) => TrieLookupResult::None,
            (None, true) => TrieLookupResult::Prefix,
            (Some(target), false) => TrieLookupResult::Exact(target),
            (Some(target), true) => TrieLookupResult::ExactAndPrefix(target),
        }
    }

    /// Longest source pattern that is a prefix of `text`.
    ///
    /// Returns the matched length in bytes and the replacement.
    pub fn longest_match(&self, text: &str) -> Option<(usize, &str)> {
        let mut node = &self.root;
        let mut best = None;
        for (offset, ch) in text.char_indices() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(target) = &node.target {
                best = Some((offset + ch.len_utf8(), target.as_str()));
            }
        }
        best
    }

    fn insert(&mut self, source: &str, target: &str) {
        let mut node = &mut self.root;
        for ch in source.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.target.replace(target.to_string()).is_none() {
            self.len += 1;
        }
    }
}
