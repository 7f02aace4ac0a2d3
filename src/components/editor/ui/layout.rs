use iced::widget::{Column, Container, Row, Text, text_editor};
use iced::{Element, Length};

use crate::components::editor::Message;
use crate::components::editor::state::editor_state::EditorState;
use crate::components::editor::ui::dialogs;
use crate::components::editor::ui::toolbar;
use crate::document;

pub fn generate_layout<'a>(
    state: &'a EditorState,
    content: &'a text_editor::Content,
) -> Element<'a, Message> {
    let top_bar = Column::new()
        .push(toolbar::file_controls())
        .push(toolbar::format_controls(state))
        .spacing(2)
        .width(Length::Fill);

    // A URL dialog takes over the center area while it is open.
    let main_content: Element<'_, Message> = if state.show_link_input() {
        dialogs::link_dialog(state.link_url_input())
    } else if state.show_image_input() {
        dialogs::image_dialog(state.image_url_input())
    } else {
        // No height constraint on the widget itself; the scrollable
        // wrapper owns the viewport.
        let editor_widget = text_editor(content).on_action(Message::EditorAction);

        let editor_scrollable = iced::widget::scrollable(
            Row::new()
                .push(editor_widget)
                .push(Container::new(Text::new("").width(Length::Fixed(20.0))))
                .width(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

        Container::new(editor_scrollable)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(10)
            .into()
    };

    let bottom_bar = status_bar(state, content);

    Container::new(
        Column::new()
            .push(top_bar)
            .push(main_content)
            .push(bottom_bar),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

// Character/word counts of the projection plus the last autosave label
fn status_bar<'a>(state: &'a EditorState, content: &'a text_editor::Content) -> Element<'a, Message> {
    let markup = content.text();
    let projection = document::plain_text(&markup);
    let characters = projection.chars().count();
    let words = document::word_count(&markup);

    let mut row = Row::new()
        .spacing(10)
        .padding(5)
        .width(Length::Fill)
        .push(Text::new(format!("Vellum {}", state.app_version())))
        .push(Text::new(format!("{} characters, {} words", characters, words)))
        .push(Container::new(Text::new("")).width(Length::Fill));

    row = match state.last_autosave() {
        Some(label) => row.push(Text::new(format!("Autosaved {}", label))),
        None => row.push(Text::new("Not autosaved yet")),
    };

    Container::new(row).width(Length::Fill).into()
}
