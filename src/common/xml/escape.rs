use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Whether `c` may appear in an XML 1.0 document (the `Char` production).
#[inline]
pub(crate) fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Escape XML special characters.
///
/// Characters XML 1.0 cannot carry at all (most C0 controls, U+FFFE and
/// U+FFFF) are written as `_xHHHH_`, the OOXML escaped-character form.
///
/// # Examples
///
/// ```
/// use deckhand::common::xml::escape_xml;
/// assert_eq!(escape_xml("Finance & Reporting"), "Finance &amp; Reporting");
/// assert_eq!(escape_xml("<5% \"dupes\""), "&lt;5% &quot;dupes&quot;");
/// assert_eq!(escape_xml("bell\u{7}"), "bell_x0007_");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    let escaped = XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"]);
    if escaped.chars().all(is_xml_char) {
        return escaped;
    }

    let mut out = String::with_capacity(escaped.len() + 16);
    for c in escaped.chars() {
        if is_xml_char(c) {
            out.push(c);
        } else {
            out.push_str(&format!("_x{:04X}_", c as u32));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_entities() {
        assert_eq!(escape_xml("a&b<c>d\"e'f"), "a&amp;b&lt;c&gt;d&quot;e&apos;f");
    }

    #[test]
    fn test_escape_passthrough() {
        assert_eq!(escape_xml("✓ Strong ROI: 10-16 months"), "✓ Strong ROI: 10-16 months");
        assert_eq!(escape_xml("tab\tand\r\nnewline"), "tab\tand\r\nnewline");
        assert_eq!(escape_xml(""), "");
    }

    #[test]
    fn test_escape_illegal_chars() {
        assert_eq!(escape_xml("Tab\u{1}x"), "Tab_x0001_x");
        assert_eq!(escape_xml("note\u{c}feed & <more>"), "note_x000C_feed &amp; &lt;more&gt;");
        assert_eq!(escape_xml("\u{0}\u{b}\u{1f}\u{fffe}"), "_x0000__x000B__x001F__xFFFE_");
        assert!(escape_xml("a\u{8}b\u{ffff}").chars().all(is_xml_char));
    }
}
