#[cfg(test)]
mod tests {
    use crate::components::editor::actions::format_actions::{FormatCommand, expand};
    use crate::components::editor::text_management::content_handler::{insertion, rewrite};

    #[test]
    fn test_every_command_expands_to_one_invocation() {
        let commands = [
            FormatCommand::Bold,
            FormatCommand::Italic,
            FormatCommand::Underline,
            FormatCommand::Strikethrough,
            FormatCommand::JustifyLeft,
            FormatCommand::JustifyCenter,
            FormatCommand::JustifyRight,
            FormatCommand::UnorderedList,
            FormatCommand::OrderedList,
            FormatCommand::Indent,
            FormatCommand::Outdent,
            FormatCommand::FontName("Georgia".to_string()),
            FormatCommand::FontSize("18".to_string()),
            FormatCommand::ForeColor("#ff0000".to_string()),
            FormatCommand::CreateLink("https://example.org".to_string()),
            FormatCommand::InsertImage("https://example.org/a.png".to_string()),
        ];

        for command in &commands {
            assert_eq!(expand(command).len(), 1, "{:?}", command);
        }
    }

    #[test]
    fn test_highlight_expands_to_exactly_two_invocations() {
        let invocations = expand(&FormatCommand::HiliteColor("#ffff00".to_string()));

        assert_eq!(invocations.len(), 2);
        assert_eq!(invocations[0].name, "hiliteColor");
        assert_eq!(invocations[1].name, "backColor");
        // Same value under both names; the pair is one workaround.
        assert_eq!(invocations[0].value, invocations[1].value);
    }

    #[test]
    fn test_undo_and_redo_bypass_the_invocation_layer() {
        assert!(expand(&FormatCommand::Undo).is_empty());
        assert!(expand(&FormatCommand::Redo).is_empty());
    }

    #[test]
    fn test_inline_styles_wrap_the_selection() {
        let bold = &expand(&FormatCommand::Bold)[0];
        assert_eq!(rewrite(bold, "word").as_deref(), Some("<b>word</b>"));

        let strike = &expand(&FormatCommand::Strikethrough)[0];
        assert_eq!(rewrite(strike, "gone").as_deref(), Some("<s>gone</s>"));
    }

    #[test]
    fn test_alignment_wraps_in_a_styled_block() {
        let center = &expand(&FormatCommand::JustifyCenter)[0];
        assert_eq!(
            rewrite(center, "middle").as_deref(),
            Some("<div style=\"text-align:center\">middle</div>")
        );
    }

    #[test]
    fn test_lists_wrap_each_selected_line() {
        let unordered = &expand(&FormatCommand::UnorderedList)[0];
        assert_eq!(
            rewrite(unordered, "a\nb").as_deref(),
            Some("<ul><li>a</li><li>b</li></ul>")
        );

        let ordered = &expand(&FormatCommand::OrderedList)[0];
        assert_eq!(
            rewrite(ordered, "only").as_deref(),
            Some("<ol><li>only</li></ol>")
        );
    }

    #[test]
    fn test_outdent_removes_one_indent_wrapper_or_nothing() {
        let outdent = &expand(&FormatCommand::Outdent)[0];

        assert_eq!(
            rewrite(outdent, "<blockquote>inner</blockquote>").as_deref(),
            Some("inner")
        );
        assert_eq!(rewrite(outdent, "plain text"), None);
    }

    #[test]
    fn test_font_size_values_are_pixels() {
        let size = &expand(&FormatCommand::FontSize("18".to_string()))[0];
        assert_eq!(
            rewrite(size, "small").as_deref(),
            Some("<span style=\"font-size:18px\">small</span>")
        );
    }

    #[test]
    fn test_values_are_embedded_without_validation() {
        // Arbitrary strings are accepted as colors and URLs.
        let color = &expand(&FormatCommand::ForeColor("not-a-color".to_string()))[0];
        assert_eq!(
            rewrite(color, "x").as_deref(),
            Some("<span style=\"color:not-a-color\">x</span>")
        );

        let link = &expand(&FormatCommand::CreateLink("not a url".to_string()))[0];
        assert_eq!(
            rewrite(link, "here").as_deref(),
            Some("<a href=\"not a url\">here</a>")
        );
    }

    #[test]
    fn test_insertion_applies_only_to_link_and_image() {
        let link = &expand(&FormatCommand::CreateLink("https://x".to_string()))[0];
        assert_eq!(
            insertion(link).as_deref(),
            Some("<a href=\"https://x\">https://x</a>")
        );

        let image = &expand(&FormatCommand::InsertImage("https://x/a.png".to_string()))[0];
        assert_eq!(insertion(image).as_deref(), Some("<img src=\"https://x/a.png\">"));

        let bold = &expand(&FormatCommand::Bold)[0];
        assert_eq!(insertion(bold), None);
    }

    #[test]
    fn test_image_replaces_the_selection() {
        let image = &expand(&FormatCommand::InsertImage("https://x/a.png".to_string()))[0];
        assert_eq!(
            rewrite(image, "selected words").as_deref(),
            Some("<img src=\"https://x/a.png\">")
        );
    }
}
