//! Script conversion for HTML that leaves tag markup alone.
//!
//! Text is whatever follows the start of input or a `>` up to the next `<`
//! or the end of input. Everything else, delimiters included, is treated as
//! tag markup. This is a regex approximation and not an HTML parser: `<` or
//! `>` inside attribute values, comments, CDATA and entities such as `&nbsp;`
//! are not recognized and may be converted as text.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::convert::{to_cyrillic, to_latin};

const TEXT_SPAN_PATTERN: &str = r"(^|>)([^<]*)(<|$)";

fn text_span_regex() -> &'static Regex {
    static INSTANCE: OnceLock<Regex> = OnceLock::new();
    INSTANCE.get_or_init(|| Regex::new(TEXT_SPAN_PATTERN).expect("text span pattern must compile"))
}

/// A slice of the input classified as markup or text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Tag(&'a str),
    Text(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Segment::Tag(s) | Segment::Text(s) => s,
        }
    }
}

/// Split `html` into alternating tag and text segments.
///
/// Empty text spans are dropped and neighbouring markup is merged, so
/// concatenating the segments gives back `html`.
pub fn segments(html: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;
    for caps in text_span_regex().captures_iter(html) {
        let Some(text) = caps.get(2) else {
            continue;
        };
        if text.is_empty() {
            continue;
        }
        if text.start() > last {
            out.push(Segment::Tag(&html[last..text.start()]));
        }
        out.push(Segment::Text(text.as_str()));
        last = text.end();
    }
    if last < html.len() {
        out.push(Segment::Tag(&html[last..]));
    }
    out
}

/// Apply `convert` to every text segment of `html`, copying tags verbatim.
pub fn convert_html_preserving_tags<F>(html: &str, convert: F) -> String
where
    F: Fn(&str) -> String,
{
    let segments = segments(html);
    debug!(len = html.len(), segments = segments.len());
    let mut out = String::with_capacity(html.len());
    for segment in segments {
        match segment {
            Segment::Tag(tag) => out.push_str(tag),
            Segment::Text(text) => out.push_str(&convert(text)),
        }
    }
    out
}

/// Latin HTML to Cyrillic, tags kept in Latin.
pub fn html_to_cyrillic(html: &str) -> String {
    convert_html_preserving_tags(html, to_cyrillic)
}

/// Cyrillic HTML to Latin, tags left untouched.
pub fn html_to_latin(html: &str) -> String {
    convert_html_preserving_tags(html, to_latin)
}
