use iced::Task;
use iced::widget::text_editor::Content;
use native_dialog::{FileDialog, MessageDialog};
use std::fs;

use crate::components::editor::Message;
use crate::components::editor::state::editor_state::EditorState;
use crate::components::editor::text_management::history::History;
use crate::document;
use crate::export::{self, ExportKind};
use crate::printer;

// Handle the open-file control
pub fn handle_open_file(state: &EditorState) -> Task<Message> {
    if state.is_any_dialog_open() {
        return Task::none();
    }

    Task::perform(
        async move {
            let picked = match FileDialog::new().show_open_single_file() {
                Ok(picked) => picked,
                Err(_err) => {
                    #[cfg(debug_assertions)]
                    eprintln!("Failed to open the file dialog: {}", _err);
                    None
                }
            };

            // No file chosen is a silent no-op.
            let path = picked?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            match fs::read_to_string(&path) {
                Ok(contents) => Some((file_name, contents)),
                Err(err) => {
                    let _ = MessageDialog::new()
                        .set_type(native_dialog::MessageType::Error)
                        .set_title("Error Opening File")
                        .set_text(&format!("Failed to read {}: {}", path.display(), err))
                        .show_alert();
                    None
                }
            }
        },
        Message::FileLoaded,
    )
}

// Handle a completed file read
pub fn handle_file_loaded(
    content: &mut Content,
    history: &mut History,
    loaded: Option<(String, String)>,
) -> Task<Message> {
    let Some((file_name, contents)) = loaded else {
        return Task::none();
    };

    #[cfg(debug_assertions)]
    eprintln!("Replacing document with contents of '{}'.", file_name);

    let markup = document::imported_markup(&file_name, &contents);
    history.record(content.text());
    *content = Content::with_text(&markup);

    Task::none()
}

// Handle an export control or Ctrl+S
pub fn handle_export(kind: ExportKind, content: &Content) -> Task<Message> {
    let markup = content.text();
    Task::perform(export::deliver(kind, markup), Message::ExportFinished)
}

// Handle a finished export
pub fn handle_export_finished(result: Result<Option<String>, String>) -> Task<Message> {
    match result {
        Ok(Some(_path)) => {
            #[cfg(debug_assertions)]
            eprintln!("Export finished: {}", _path);
            Task::none()
        }
        // Cancelled save dialog.
        Ok(None) => Task::none(),
        Err(error_message) => Task::perform(
            async move {
                let _ = MessageDialog::new()
                    .set_type(native_dialog::MessageType::Error)
                    .set_title("Error Exporting Document")
                    .set_text(&error_message)
                    .show_alert();
            },
            |()| Message::AlertClosed,
        ),
    }
}

// Handle the print control
pub fn handle_print(content: &Content) -> Task<Message> {
    let html = export::standalone_html(&content.text());
    Task::perform(printer::print_document(html), Message::PrintFinished)
}

// Handle a finished print job
pub fn handle_print_finished(result: Result<(), String>) -> Task<Message> {
    match result {
        Ok(()) => {
            #[cfg(debug_assertions)]
            eprintln!("Print job submitted.");
            Task::none()
        }
        Err(error_message) => Task::perform(
            async move {
                let _ = MessageDialog::new()
                    .set_type(native_dialog::MessageType::Error)
                    .set_title("Error Printing Document")
                    .set_text(&error_message)
                    .show_alert();
            },
            |()| Message::AlertClosed,
        ),
    }
}
