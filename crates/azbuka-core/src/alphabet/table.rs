use std::fmt;

pub const TO_LATIN_TOML: &str = include_str!("tables/to_latin.toml");
pub const TO_CYRILLIC_TOML: &str = include_str!("tables/to_cyrillic.toml");
pub const REPAIR_DIGRAPH_TOML: &str = include_str!("tables/repair_digraph.toml");
pub const TO_ASCII_TOML: &str = include_str!("tables/to_ascii.toml");

/// One of the mapping tables the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// Serbian Cyrillic to Latin.
    ToLatin,
    /// Serbian Latin to Cyrillic, digraphs included.
    ToCyrillic,
    /// "Dj"/"DJ"/"dj" to "Đ"/"đ".
    RepairDigraph,
    /// Latin diacritics to plain ASCII.
    ToAscii,
}

impl Table {
    pub const ALL: [Table; 4] = [
        Table::ToLatin,
        Table::ToCyrillic,
        Table::RepairDigraph,
        Table::ToAscii,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            Table::ToLatin => 0,
            Table::ToCyrillic => 1,
            Table::RepairDigraph => 2,
            Table::ToAscii => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Table::ToLatin => "to_latin",
            Table::ToCyrillic => "to_cyrillic",
            Table::RepairDigraph => "repair_digraph",
            Table::ToAscii => "to_ascii",
        }
    }

    /// The embedded TOML the table is built from unless overridden.
    pub fn default_toml(self) -> &'static str {
        match self {
            Table::ToLatin => TO_LATIN_TOML,
            Table::ToCyrillic => TO_CYRILLIC_TOML,
            Table::RepairDigraph => REPAIR_DIGRAPH_TOML,
            Table::ToAscii => TO_ASCII_TOML,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
