//! Transliteration between the Cyrillic and Latin orthographies of Serbian.
//!
//! Every conversion is a single longest-match pass over a mapping table,
//! see [`convert::transliterate`]. Tables are built once and shared.

pub mod alphabet;
pub mod convert;
pub mod html;
pub mod unicode;


pub use alphabet::{MappingTrie, Table, TableConfigError};
pub use convert::{convert, repair_digraph, to_ascii, to_cyrillic, to_latin, transliterate};
pub use html::{convert_html_preserving_tags, html_to_cyrillic, html_to_latin, Segment};
pub use unicode::has_cyrillic_char;
