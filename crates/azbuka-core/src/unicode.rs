//! Character classification for Serbian text.

/// All 30 letters of the Serbian Cyrillic alphabet, upper and lower case.
pub const SERBIAN_CYRILLIC: &str =
    "АБВГДЂЕЖЗИЈКЛЉМНЊОПРСТЋУФХЦЧЏШабвгдђежзијклљмнњопрстћуфхцчџш";

pub fn is_serbian_cyrillic(c: char) -> bool {
    SERBIAN_CYRILLIC.contains(c)
}

/// True if at least one char of `text` is a Serbian Cyrillic letter.
///
/// This is a cheap script hint, not a check that the text is valid Serbian.
pub fn has_cyrillic_char(text: &str) -> bool {
    text.chars().any(is_serbian_cyrillic)
}
