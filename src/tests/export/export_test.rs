#[cfg(test)]
mod tests {
    use crate::document;
    use crate::export::{ExportKind, payload, standalone_html};

    #[test]
    fn test_shell_always_starts_with_doctype() {
        assert!(standalone_html("").starts_with("<!doctype html>"));
        assert!(standalone_html("<p>x</p>").starts_with("<!doctype html>"));
    }

    #[test]
    fn test_shell_embeds_markup_verbatim_in_body() {
        let markup = "<h1>Title</h1><script>alert(1)</script>";
        let html = standalone_html(markup);

        // No escaping: whatever the surface holds is what ships.
        assert!(html.contains(&format!("<body>\n{}\n</body>", markup)));
    }

    #[test]
    fn test_shell_for_empty_document() {
        let html = standalone_html("");
        assert!(html.contains("<body>\n\n</body>"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_shell_declares_charset_viewport_and_title() {
        let html = standalone_html("x");
        assert!(html.contains("<meta charset=\"utf-8\">"));
        assert!(html.contains("width=device-width,initial-scale=1"));
        assert!(html.contains("<title>Export</title>"));
    }

    #[test]
    fn test_html_and_word_payloads_are_byte_identical() {
        let markup = "<p>shared</p>";
        assert_eq!(
            payload(ExportKind::Html, markup),
            payload(ExportKind::Word, markup)
        );
    }

    #[test]
    fn test_plain_text_payload_is_the_projection() {
        let markup = "<b>bold</b> and plain";
        assert_eq!(
            payload(ExportKind::PlainText, markup),
            document::plain_text(markup)
        );
    }

    #[test]
    fn test_channels_differ_only_in_filename_and_mime() {
        let html = ExportKind::Html.channel();
        let word = ExportKind::Word.channel();
        let text = ExportKind::PlainText.channel();

        assert_eq!(html.filename, "document.html");
        assert_eq!(html.mime, "text/html");
        assert_eq!(word.filename, "document.doc");
        assert_eq!(word.mime, "application/msword");
        assert_eq!(text.filename, "document.txt");
        assert_eq!(text.mime, "text/plain");

        assert_ne!(html, word);
        assert_ne!(word, text);
    }
}
