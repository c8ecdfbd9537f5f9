//! Compile-time XML minification.
//!
//! The package writer embeds its static parts (slide master, layouts, theme,
//! property parts) as XML files next to the source that uses them. These
//! macros read and minify that XML while the crate is compiled so the binary
//! only carries the compact form.

use proc_macro::{TokenStream, TokenTree};
use quick_xml::events::Event;
use quick_xml::{Reader, Writer};
use quote::quote;
use std::path::Path;

/// Minifies an XML file and embeds it as a `&'static str`.
///
/// The path is resolved relative to the source file that invokes the macro.
///
/// ```ignore
/// // src/ooxml/pptx/template.rs
/// const THEME: &str = minified_xml!("resources/theme/theme1.xml");
/// ```
#[proc_macro]
pub fn minified_xml(input: TokenStream) -> TokenStream {
    let relative = single_string_argument(input);

    let call_site = proc_macro::Span::call_site();
    let source_file = call_site
        .local_file()
        .unwrap_or_else(|| panic!("minified_xml!: cannot locate the invoking source file"));
    let target = source_file
        .parent()
        .unwrap_or_else(|| panic!("minified_xml!: invoking file has no parent directory"))
        .join(Path::new(&relative));

    let content = std::fs::read_to_string(&target)
        .unwrap_or_else(|e| panic!("minified_xml!: cannot read '{}': {}", target.display(), e));
    let minified = minify_xml(&content)
        .unwrap_or_else(|e| panic!("minified_xml!: '{}' is not well-formed: {}", relative, e));

    TokenStream::from(quote! { #minified })
}

/// Minifies an XML string literal.
///
/// ```ignore
/// const PART: &str = minified_xml_str!(r#"
///     <root>
///         <!-- dropped -->
///         <empty></empty>
///     </root>
/// "#);
/// // "<root><empty/></root>"
/// ```
#[proc_macro]
pub fn minified_xml_str(input: TokenStream) -> TokenStream {
    let content = single_string_argument(input);
    let minified = minify_xml(&content)
        .unwrap_or_else(|e| panic!("minified_xml_str!: literal is not well-formed: {}", e));

    TokenStream::from(quote! { #minified })
}

/// Extract the single string literal a macro was invoked with.
fn single_string_argument(input: TokenStream) -> String {
    let mut tokens = input.into_iter();
    let literal = match tokens.next() {
        Some(TokenTree::Literal(lit)) => lit.to_string(),
        Some(TokenTree::Group(group)) => return single_string_argument(group.stream()),
        other => panic!("expected a string literal, found {:?}", other),
    };
    if tokens.next().is_some() {
        panic!("expected exactly one string literal");
    }
    unquote(&literal)
}

/// Turn the source form of a string literal back into its value.
fn unquote(literal: &str) -> String {
    if let Some(raw) = literal.strip_prefix('r') {
        let hashes = raw.chars().take_while(|&c| c == '#').count();
        let body = &raw[hashes..raw.len() - hashes];
        return body[1..body.len() - 1].to_string();
    }

    let body = &literal[1..literal.len() - 1];
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\n') => {
                // Line continuation: skip leading whitespace on the next line.
                while let Some(next) = chars.clone().next() {
                    if !next.is_whitespace() {
                        break;
                    }
                    chars.next();
                }
            },
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Minify an XML document.
///
/// Comments and processing instructions are removed, whitespace-only text
/// between tags is dropped, remaining text is trimmed, and `<a></a>` pairs
/// collapse into `<a/>`.
fn minify_xml(xml: &str) -> Result<String, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut writer = Writer::new(Vec::with_capacity(xml.len()));
    let mut pending_start: Option<Event<'static>> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| format!("at byte {}: {}", reader.error_position(), e))?;

        match event {
            Event::Eof => break,
            Event::Comment(_) | Event::PI(_) | Event::DocType(_) => continue,
            Event::End(end) => {
                if let Some(Event::Start(start)) = pending_start.take() {
                    if start.name() == end.name() {
                        write(&mut writer, Event::Empty(start))?;
                        continue;
                    }
                    write(&mut writer, Event::Start(start))?;
                }
                write(&mut writer, Event::End(end))?;
            },
            Event::Start(start) => {
                if let Some(previous) = pending_start.take() {
                    write(&mut writer, previous)?;
                }
                pending_start = Some(Event::Start(start.into_owned()));
            },
            other => {
                if let Some(previous) = pending_start.take() {
                    write(&mut writer, previous)?;
                }
                write(&mut writer, other)?;
            },
        }
    }

    if let Some(previous) = pending_start.take() {
        write(&mut writer, previous)?;
    }

    String::from_utf8(writer.into_inner()).map_err(|e| e.to_string())
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), String> {
    writer.write_event(event).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_comments_and_whitespace() {
        let xml = "<root>\n  <!-- note -->\n  <child a=\"1\">  text  </child>\n</root>";
        assert_eq!(
            minify_xml(xml).unwrap(),
            r#"<root><child a="1">text</child></root>"#
        );
    }

    #[test]
    fn collapses_empty_pairs() {
        let xml = "<a:avLst></a:avLst>";
        assert_eq!(minify_xml(xml).unwrap(), "<a:avLst/>");
    }

    #[test]
    fn keeps_declaration() {
        let xml = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n<p:sld/>";
        assert_eq!(
            minify_xml(xml).unwrap(),
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sld/>"#
        );
    }

    #[test]
    fn unquotes_raw_and_escaped_literals() {
        assert_eq!(unquote(r####"r#"<a b="c"/>"#"####), r#"<a b="c"/>"#);
        assert_eq!(unquote(r#""<a>\"q\"</a>""#), "<a>\"q\"</a>");
    }
}
