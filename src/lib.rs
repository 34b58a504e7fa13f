//! Serbian Cyrillic/Latin transliteration for host applications.
//!
//! Re-exports the conversion functions of `azbuka-core` and adds [`Script`]
//! for picking a target orthography at runtime.
//!
//! ```
//! use azbuka::{to_cyrillic, to_latin, Script};
//!
//! assert_eq!(to_cyrillic("Ljubav"), "Љубав");
//! assert_eq!(to_latin("Ђорђе"), "Đorđe");
//! assert_eq!(Script::Cyrillic.convert_html("<b>Ana</b>"), "<b>Ана</b>");
//! ```

mod script;
mod trace_init;


pub use azbuka_core::alphabet::{parse_table_toml, MappingTrie, Table, TableConfigError};
pub use azbuka_core::html::{segments, Segment};
pub use azbuka_core::unicode::is_serbian_cyrillic;
pub use azbuka_core::{
    convert, convert_html_preserving_tags, has_cyrillic_char, html_to_cyrillic, html_to_latin,
    repair_digraph, to_ascii, to_cyrillic, to_latin, transliterate,
};
pub use script::{ParseScriptError, Script};
pub use trace_init::init_tracing;
