use iced::widget::{Row, Text, button, pick_list, text_input};
use iced::Length;

use crate::components::editor::Message;
use crate::components::editor::actions::format_actions::FormatCommand;
use crate::components::editor::state::editor_state::EditorState;
use crate::export::ExportKind;

pub const FONT_NAMES: [&str; 5] = [
    "Arial",
    "Courier New",
    "Georgia",
    "Times New Roman",
    "Verdana",
];

// Pixel sizes offered by the size pick-list.
pub const FONT_SIZES: [&str; 7] = ["10", "12", "14", "16", "18", "24", "32"];

// File handling controls: open, the three download channels, print
pub fn file_controls<'a>() -> Row<'a, Message> {
    Row::new()
        .spacing(10)
        .padding(5)
        .width(Length::Fill)
        .push(button("Open").padding(5).on_press(Message::OpenFile))
        .push(
            button("Save HTML")
                .padding(5)
                .on_press(Message::Export(ExportKind::Html)),
        )
        .push(
            button("Save Word")
                .padding(5)
                .on_press(Message::Export(ExportKind::Word)),
        )
        .push(
            button("Save Text")
                .padding(5)
                .on_press(Message::Export(ExportKind::PlainText)),
        )
        .push(button("Print").padding(5).on_press(Message::Print))
}

// Formatting controls: one message per control
pub fn format_controls<'a>(state: &EditorState) -> Row<'a, Message> {
    let font_names: Vec<String> = FONT_NAMES.iter().map(|name| name.to_string()).collect();
    let font_sizes: Vec<String> = FONT_SIZES.iter().map(|size| size.to_string()).collect();

    Row::new()
        .spacing(5)
        .padding(5)
        .width(Length::Fill)
        .push(format_button("B", FormatCommand::Bold))
        .push(format_button("I", FormatCommand::Italic))
        .push(format_button("U", FormatCommand::Underline))
        .push(format_button("S", FormatCommand::Strikethrough))
        .push(format_button("Left", FormatCommand::JustifyLeft))
        .push(format_button("Center", FormatCommand::JustifyCenter))
        .push(format_button("Right", FormatCommand::JustifyRight))
        .push(format_button("• List", FormatCommand::UnorderedList))
        .push(format_button("1. List", FormatCommand::OrderedList))
        .push(format_button("Indent", FormatCommand::Indent))
        .push(format_button("Outdent", FormatCommand::Outdent))
        .push(format_button("Undo", FormatCommand::Undo))
        .push(format_button("Redo", FormatCommand::Redo))
        .push(
            pick_list(font_names, state.font_name().cloned(), |name| {
                Message::Format(FormatCommand::FontName(name))
            })
            .placeholder("Font"),
        )
        .push(
            pick_list(font_sizes, state.font_size().cloned(), |size| {
                Message::Format(FormatCommand::FontSize(size))
            })
            .placeholder("Size"),
        )
        .push(
            text_input("Text color", state.fore_color_input())
                .on_input(Message::ForeColorInputChanged)
                .on_submit(Message::ApplyForeColor)
                .width(Length::Fixed(110.0)),
        )
        .push(
            text_input("Highlight", state.hilite_color_input())
                .on_input(Message::HiliteColorInputChanged)
                .on_submit(Message::ApplyHiliteColor)
                .width(Length::Fixed(110.0)),
        )
        .push(button(Text::new("Link")).padding(5).on_press(Message::InsertLink))
        .push(
            button(Text::new("Image"))
                .padding(5)
                .on_press(Message::InsertImage),
        )
}

fn format_button<'a>(label: &'a str, command: FormatCommand) -> iced::widget::Button<'a, Message> {
    button(label).padding(5).on_press(Message::Format(command))
}
