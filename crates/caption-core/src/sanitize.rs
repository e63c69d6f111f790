/*
 * sanitize.rs
 * Copyright (c) 2026 Featured Image Caption contributors
 *
 * Allow-list sanitizer for caption markup.
 */

//! Allow-list sanitizer for caption markup.
//!
//! Caption text comes from the media library and may contain whatever
//! an author (or an import) put there. Before a caption is spliced into
//! block output it is reduced to the same inline formatting set the
//! block editor permits in caption context, so what an author can enter
//! in the UI is exactly what survives rendering.
//!
//! Disallowed constructs are stripped, never escaped into text:
//!
//! - disallowed element tags are dropped, their children kept
//! - `script` and `style` lose their raw text content along with the
//!   tags
//! - disallowed attributes on allowed elements are dropped
//! - comments and `<!`/`<?` constructs are dropped
//! - a `<` that does not open a tag stays literal text
//!
//! The output is a fixed point: sanitizing twice yields the same
//! string.

/// Attributes permitted on a caption element, or `None` when the
/// element itself is not permitted.
///
/// This is the block editor's caption allow-list: hyperlinks restricted
/// to `href`/`rel`/`target`, `bdo` to its `code`/`lang`/`dir` set,
/// `mark` to `style`/`class`, and the remaining inline elements with no
/// attributes at all.
fn allowed_attrs(tag: &str) -> Option<&'static [&'static str]> {
    Some(match tag {
        "a" => &["href", "rel", "target"],
        "bdo" => &["code", "lang", "dir"],
        "mark" => &["style", "class"],
        "br" | "em" | "kbd" | "s" | "strong" | "sub" | "sup" => &[],
        _ => return None,
    })
}

/// Strip caption markup down to the allow-list.
///
/// Never panics; for any input the result is a best-effort string.
/// Idempotent: `sanitize_caption(&sanitize_caption(s)) ==
/// sanitize_caption(s)`.
pub fn sanitize_caption(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'<' {
            let next = input[i..].find('<').map_or(bytes.len(), |p| i + p);
            out.push_str(&input[i..next]);
            i = next;
            continue;
        }

        let tail = &input[i..];

        if tail.starts_with("<!--") {
            i = match tail.find("-->") {
                Some(p) => i + p + 3,
                None => bytes.len(),
            };
            continue;
        }

        if tail.starts_with("<!") || tail.starts_with("<?") {
            i = match tail.find('>') {
                Some(p) => i + p + 1,
                None => bytes.len(),
            };
            continue;
        }

        if tail.starts_with("</") {
            let name_start = i + 2;
            let name_end = scan_name(bytes, name_start);
            if name_end == name_start {
                out.push('<');
                i += 1;
                continue;
            }
            let name = input[name_start..name_end].to_ascii_lowercase();
            if allowed_attrs(&name).is_some() {
                out.push_str("</");
                out.push_str(&name);
                out.push('>');
            }
            i = match input[name_end..].find('>') {
                Some(p) => name_end + p + 1,
                None => bytes.len(),
            };
            continue;
        }

        let name_start = i + 1;
        let name_end = scan_name(bytes, name_start);
        if name_end == name_start {
            out.push('<');
            i += 1;
            continue;
        }
        let name = input[name_start..name_end].to_ascii_lowercase();
        let Some(body_end) = find_tag_end(bytes, name_end) else {
            // Unterminated tag at end of input: keep the '<' literal
            // and let the rest flow through as text.
            out.push('<');
            i += 1;
            continue;
        };

        let body = &input[name_end..body_end];
        match allowed_attrs(&name) {
            Some(allowed) => {
                emit_start_tag(&mut out, &name, body, allowed);
                i = body_end + 1;
            }
            None if name == "script" || name == "style" => {
                // Raw text elements: drop the content too.
                i = skip_raw_content(input, body_end + 1, &name);
            }
            None => {
                i = body_end + 1;
            }
        }
    }

    out
}

/// Scan a tag name starting at `start`. Returns `start` when no name
/// begins there (names start with an ASCII letter).
fn scan_name(bytes: &[u8], start: usize) -> usize {
    if start >= bytes.len() || !bytes[start].is_ascii_alphabetic() {
        return start;
    }
    let mut i = start + 1;
    while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-') {
        i += 1;
    }
    i
}

/// Find the `>` closing the tag whose body starts at `from`, honoring
/// quoted attribute values.
fn find_tag_end(bytes: &[u8], from: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    let mut i = from;
    while i < bytes.len() {
        match quote {
            Some(q) => {
                if bytes[i] == q {
                    quote = None;
                }
            }
            None => match bytes[i] {
                b'"' | b'\'' => quote = Some(bytes[i]),
                b'>' => return Some(i),
                _ => {}
            },
        }
        i += 1;
    }
    None
}

/// Re-serialize an allowed start tag, keeping only allowed attributes.
///
/// Output is normalized: lowercase name, double-quoted values, single
/// spaces between attributes. Normalization is what makes sanitization
/// idempotent.
fn emit_start_tag(out: &mut String, name: &str, body: &str, allowed: &[&str]) {
    out.push('<');
    out.push_str(name);
    for (attr, value) in parse_attributes(body) {
        if !allowed.contains(&attr.as_str()) {
            continue;
        }
        out.push(' ');
        out.push_str(&attr);
        if let Some(value) = value {
            out.push_str("=\"");
            out.push_str(&value.replace('"', "&quot;"));
            out.push('"');
        }
    }
    if body.trim_end().ends_with('/') {
        out.push_str("/>");
    } else {
        out.push('>');
    }
}

/// Parse the attribute list of a start tag body (the text between the
/// tag name and the closing `>`).
fn parse_attributes(body: &str) -> Vec<(String, Option<String>)> {
    let bytes = body.as_bytes();
    let mut attrs = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        while i < bytes.len() && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') {
            i += 1;
        }
        if i >= bytes.len() {
            break;
        }

        let start = i;
        while i < bytes.len()
            && !bytes[i].is_ascii_whitespace()
            && bytes[i] != b'='
            && bytes[i] != b'/'
        {
            i += 1;
        }
        if i == start {
            i += 1;
            continue;
        }
        let name = body[start..i].to_ascii_lowercase();

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let value = if i < bytes.len() && bytes[i] == b'=' {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i < bytes.len() && (bytes[i] == b'"' || bytes[i] == b'\'') {
                let quote = bytes[i];
                i += 1;
                let value_start = i;
                while i < bytes.len() && bytes[i] != quote {
                    i += 1;
                }
                let value = body[value_start..i].to_string();
                if i < bytes.len() {
                    i += 1;
                }
                Some(value)
            } else {
                let value_start = i;
                while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                Some(body[value_start..i].to_string())
            }
        } else {
            None
        };

        attrs.push((name, value));
    }

    attrs
}

/// Skip the raw text content of a `script`/`style` element, through the
/// matching end tag. Without an end tag the rest of the input is
/// consumed.
fn skip_raw_content(input: &str, from: usize, name: &str) -> usize {
    let needle = format!("</{name}");
    let bytes = input.as_bytes();
    let needle_bytes = needle.as_bytes();
    let mut i = from;
    while i + needle_bytes.len() <= bytes.len() {
        if bytes[i..i + needle_bytes.len()].eq_ignore_ascii_case(needle_bytes) {
            return match input[i..].find('>') {
                Some(p) => i + p + 1,
                None => input.len(),
            };
        }
        i += 1;
    }
    input.len()
}
