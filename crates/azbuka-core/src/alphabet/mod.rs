//! Mapping tables between the Serbian Cyrillic and Latin alphabets.
//!
//! Each table is a TOML `[mappings]` section embedded in the binary and
//! compiled into a char-keyed trie on first use. A table may be replaced
//! with custom TOML through [`MappingTrie::init_custom`] before that.

mod config;
mod table;
mod trie;

pub use config::{parse_table_toml, TableConfigError};
pub use table::Table;
pub use trie::MappingTrie;
