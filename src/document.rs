// Document projections shared by the importer, the exporter and the
// autosave store. The live document is the markup string held by the
// editable surface; everything here derives from or produces that string.

/// Returns true when the file name carries a case-insensitive `.htm` or
/// `.html` suffix, i.e. its contents should be taken as markup verbatim.
pub fn is_html_file(file_name: &str) -> bool {
    let lowered = file_name.to_lowercase();
    lowered.ends_with(".html") || lowered.ends_with(".htm")
}

/// Escapes text so it renders as literal characters inside markup.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}

/// Interprets an opened file as replacement document markup.
///
/// HTML files replace the markup directly; anything else is escaped so
/// angle brackets stay literal visible characters, with line breaks kept
/// as `<br>` elements.
pub fn imported_markup(file_name: &str, contents: &str) -> String {
    if is_html_file(file_name) {
        contents.to_string()
    } else {
        escape_text(contents).replace('\n', "<br>")
    }
}

// Closing one of these, or a lone <br>, ends a line in the projection.
const BLOCK_BREAK_TAGS: [&str; 13] = [
    "br", "/p", "/div", "/li", "/ul", "/ol", "/blockquote", "/h1", "/h2", "/h3", "/h4", "/h5",
    "/h6",
];

/// Plain-text projection of the document markup: tags stripped, basic
/// entities decoded, block boundaries rendered as newlines.
pub fn plain_text(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(ch) = rest.chars().next() {
        match ch {
            '<' => {
                let Some(end) = rest.find('>') else {
                    // Unterminated tag; nothing visible follows.
                    break;
                };
                let tag = tag_name(&rest[1..end]);
                if BLOCK_BREAK_TAGS.contains(&tag.as_str()) {
                    text.push('\n');
                }
                rest = &rest[end + 1..];
            }
            '&' => {
                let (decoded, consumed) = decode_entity(rest);
                text.push(decoded);
                rest = &rest[consumed..];
            }
            other => {
                text.push(other);
                rest = &rest[other.len_utf8()..];
            }
        }
    }

    text
}

// Lowercased element name of a tag body, attributes and self-closing
// slash dropped ("BR /" -> "br", "/DIV" -> "/div").
fn tag_name(body: &str) -> String {
    let trimmed = body.trim();
    let name_end = trimmed
        .find(|c: char| c.is_whitespace())
        .unwrap_or(trimmed.len());
    trimmed[..name_end].trim_end_matches('/').to_lowercase()
}

// Decodes the entity at the start of `rest` (which begins with '&'),
// returning the character and how many bytes were consumed. Unknown
// entities pass the ampersand through as-is.
fn decode_entity(rest: &str) -> (char, usize) {
    const ENTITIES: [(&str, char); 6] = [
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&#39;", '\''),
        ("&nbsp;", ' '),
    ];

    for (entity, decoded) in ENTITIES {
        if rest.starts_with(entity) {
            return (decoded, entity.len());
        }
    }
    ('&', 1)
}

/// Word count of the plain-text projection, for the status bar.
pub fn word_count(markup: &str) -> usize {
    plain_text(markup).split_whitespace().count()
}
