use iced::widget::{Column, Row, Text, TextInput as IcedTextInput, button};
use iced::{Element, Length};

use crate::components::editor::Message;

// Link URL dialog
pub fn link_dialog<'a>(link_url_input: &str) -> Element<'a, Message> {
    Column::new()
        .push(Text::new("Enter a URL for the selected text:"))
        .push(
            IcedTextInput::new("https://", link_url_input)
                .on_input(Message::LinkUrlChanged)
                .on_submit(Message::ConfirmLink)
                .width(Length::Fixed(400.0)),
        )
        .push(
            Row::new()
                .push(button("Insert").padding(5).on_press(Message::ConfirmLink))
                .push(button("Cancel").padding(5).on_press(Message::CancelLink))
                .spacing(10),
        )
        .spacing(10)
        .padding(20)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::Alignment::Center)
        .into()
}

// Image URL dialog
pub fn image_dialog<'a>(image_url_input: &str) -> Element<'a, Message> {
    Column::new()
        .push(Text::new("Enter an image URL:"))
        .push(
            IcedTextInput::new("https://", image_url_input)
                .on_input(Message::ImageUrlChanged)
                .on_submit(Message::ConfirmImage)
                .width(Length::Fixed(400.0)),
        )
        .push(
            Row::new()
                .push(button("Insert").padding(5).on_press(Message::ConfirmImage))
                .push(button("Cancel").padding(5).on_press(Message::CancelImage))
                .spacing(10),
        )
        .spacing(10)
        .padding(20)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::Alignment::Center)
        .into()
}
