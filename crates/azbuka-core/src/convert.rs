use tracing::debug_span;

use crate::alphabet::{MappingTrie, Table};

/// Rewrite `text` through `trie` in a single left-to-right pass.
///
/// At every position the longest matching source pattern is replaced and
/// skipped over; characters with no pattern are copied as they are.
pub fn transliterate(text: &str, trie: &MappingTrie) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
        match trie.longest_match(rest) {
            Some((len, target)) => {
                out.push_str(target);
                rest = &rest[len..];
            }
            None => {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }
    out
}

/// Run `text` through the global trie of `table`.
pub fn convert(table: Table, text: &str) -> String {
    let _span = debug_span!("convert", table = table.name(), len = text.len()).entered();
    if text.is_empty() {
        return String::new();
    }
    transliterate(text, MappingTrie::global(table))
}

/// Cyrillic to Latin. Љ, Њ and Џ become "Lj", "Nj" and "Dž".
pub fn to_latin(text: &str) -> String {
    convert(Table::ToLatin, text)
}

/// Latin to Cyrillic.
///
/// "Lj", "LJ", "lj" (likewise for "Nj" and "Dž") each become one letter.
/// Mixed-case spellings such as "lJ" are not digraphs here and are converted
/// letter by letter.
pub fn to_cyrillic(text: &str) -> String {
    convert(Table::ToCyrillic, text)
}

/// Replace "Dj", "DJ" and "dj" with "Đ"/"đ".
pub fn repair_digraph(text: &str) -> String {
    convert(Table::RepairDigraph, text)
}

/// Replace šđčćž and ŠĐČĆŽ with their ASCII spelling (đ becomes "dj").
pub fn to_ascii(text: &str) -> String {
    convert(Table::ToAscii, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_latin_basic() {
        assert_eq!(to_latin("Београд"), "Beograd");
        assert_eq!(to_latin("ћевапчићи"), "ćevapčići");
        assert_eq!(to_latin("Ђорђе"), "Đorđe");
    }

    #[test]
    fn test_to_latin_digraph_letters() {
        assert_eq!(to_latin("Љубав"), "Ljubav");
        assert_eq!(to_latin("Његош"), "Njegoš");
        assert_eq!(to_latin("џем"), "džem");
        // Upper-case words keep the title-case digraph.
        assert_eq!(to_latin("ЉУБАВ"), "LjUBAV");
    }

    #[test]
    fn test_to_cyrillic_basic() {
        assert_eq!(to_cyrillic("Beograd"), "Београд");
        assert_eq!(to_cyrillic("Šabac, Čačak i Užice"), "Шабац, Чачак и Ужице");
    }

    #[test]
    fn test_to_cyrillic_digraph_precedence() {
        assert_eq!(to_cyrillic("Ljubav"), "Љубав");
        assert_eq!(to_cyrillic("LJUBAV"), "ЉУБАВ");
        assert_eq!(to_cyrillic("ljubav"), "љубав");
        assert_eq!(to_cyrillic("Džep"), "Џеп");
        assert_eq!(to_cyrillic("DŽEP"), "ЏЕП");
    }

    #[test]
    fn test_to_cyrillic_nj_case_boundary() {
        assert_eq!(to_cyrillic("NJ"), "Њ");
        assert_eq!(to_cyrillic("Nj"), "Њ");
        assert_eq!(to_cyrillic("nj"), "њ");
        assert_eq!(to_cyrillic("nJ"), "нЈ");
        assert_eq!(to_cyrillic("lJ"), "лЈ");
        assert_eq!(to_cyrillic("dŽ"), "дЖ");
    }

    #[test]
    fn test_to_cyrillic_passthrough() {
        assert_eq!(to_cyrillic("Wi-Fi 2024!"), "Wи-Фи 2024!");
        assert_eq!(to_cyrillic("xyq"), "xyq");
        assert_eq!(to_cyrillic("xyz"), "xyз");
    }

    #[test]
    fn test_repair_digraph() {
        assert_eq!(repair_digraph("Djordje"), "Đorđe");
        assert_eq!(repair_digraph("DJORDJE"), "ĐORĐE");
        assert_eq!(repair_digraph("djak"), "đak");
        assert_eq!(repair_digraph("dJ"), "dJ");
    }

    #[test]
    fn test_to_ascii() {
        assert_eq!(to_ascii("Đorđe"), "Djordje");
        assert_eq!(to_ascii("Šćepan Čolić Žarko"), "Scepan Colic Zarko");
        assert_eq!(to_ascii("ĐURĐEV"), "DjURDjEV");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_latin(""), "");
        assert_eq!(to_cyrillic(""), "");
        assert_eq!(repair_digraph(""), "");
        assert_eq!(to_ascii(""), "");
    }

    #[test]
    fn test_no_match_unchanged() {
        let text = "123 <> ... 🦀";
        assert_eq!(to_latin(text), text);
        assert_eq!(to_cyrillic(text), text);
        assert_eq!(repair_digraph(text), text);
        assert_eq!(to_ascii(text), text);
    }

    #[test]
    fn test_transliterate_custom_trie() {
        let trie = MappingTrie::from_toml(
            r#"
[mappings]
"a" = "1"
"ab" = "2"
"b" = "3"
"#,
        )
        .unwrap();
        assert_eq!(transliterate("abba", &trie), "231");
        assert_eq!(transliterate("ccc", &trie), "ccc");
    }

    #[test]
    fn test_transliterate_no_double_replacement() {
        // Output of one rule is never fed back into another.
        let trie = MappingTrie::from_toml(
            r#"
[mappings]
"a" = "b"
"b" = "c"
"#,
        )
        .unwrap();
        assert_eq!(transliterate("ab", &trie), "bc");
    }
}
