use iced::Task;
use iced::event::Event;
use iced::keyboard::Key;
use iced::widget::text_editor;
use iced::{Element, Subscription, Theme};
use native_dialog::MessageDialog;

// Import required types and modules
use crate::autosave::{self, AutosaveStore};
use crate::components::editor::actions::{file_actions, format_actions};
use crate::components::editor::actions::format_actions::FormatCommand;
use crate::components::editor::state::editor_state::EditorState;
use crate::components::editor::text_management::content_handler;
use crate::components::editor::text_management::history::History;
use crate::components::editor::ui::layout;
use crate::configuration::Configuration;
use crate::export::ExportKind;

#[path = "../../configuration/theme.rs"]
mod local_theme;

// Define the Message enum in this module
#[derive(Debug, Clone)]
pub enum Message {
    // Text editing operations
    EditorAction(text_editor::Action),
    SelectAll,
    Format(FormatCommand),

    // Link dialog
    InsertLink,
    LinkUrlChanged(String),
    ConfirmLink,
    CancelLink,

    // Image dialog
    InsertImage,
    ImageUrlChanged(String),
    ConfirmImage,
    CancelImage,

    // Color inputs
    ForeColorInputChanged(String),
    ApplyForeColor,
    HiliteColorInputChanged(String),
    ApplyHiliteColor,

    // File handling
    OpenFile,
    FileLoaded(Option<(String, String)>),
    Export(ExportKind),
    ExportFinished(Result<Option<String>, String>),
    Print,
    PrintFinished(Result<(), String>),

    // Autosave
    AutosaveTick,
    AutosaveFinished(Result<(), String>),

    // Error alerts need no follow-up work
    AlertClosed,
}

// Define the Editor struct
pub struct Editor {
    // Core state management
    state: EditorState,

    // The live document: the surface content is the markup string
    content: text_editor::Content,

    // Undo/redo management
    history: History,

    theme: Theme,
}

impl Editor {
    pub fn create(flags: Configuration) -> (Self, Task<Message>) {
        let store = AutosaveStore::new(&flags.autosave_path);
        #[cfg(debug_assertions)]
        eprintln!("Autosave slot: {}", store.path().display());

        // A snapshot from a prior session is offered exactly once, before
        // the first frame. Declining leaves the snapshot file untouched.
        let mut content = text_editor::Content::with_text("");
        if let Some(snapshot) = store.load() {
            let restore = MessageDialog::new()
                .set_type(native_dialog::MessageType::Info)
                .set_title("Restore Document")
                .set_text("Load autosaved content?")
                .show_confirm()
                .unwrap_or(false);

            if restore {
                content = text_editor::Content::with_text(&snapshot);
            }
        }

        let mut state = EditorState::new();
        state.set_app_version(flags.version);
        state.set_autosave_path(flags.autosave_path);

        let editor_instance = Editor {
            state,
            content,
            history: History::new(),
            theme: local_theme::convert_str_to_theme(flags.theme),
        };

        (editor_instance, Task::none())
    }

    pub fn title(_state: &Self) -> String {
        String::from("Vellum")
    }

    pub fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            // Handle text editing operations
            Message::EditorAction(action) => {
                content_handler::handle_editor_action(
                    &mut state.content,
                    &mut state.history,
                    &state.state,
                    action,
                );
                Task::none()
            }
            Message::SelectAll => {
                content_handler::handle_select_all(&mut state.content, &state.state);
                Task::none()
            }
            Message::Format(command) => format_actions::handle_format_command(
                &mut state.content,
                &mut state.history,
                &mut state.state,
                command,
            ),

            // Handle the link dialog
            Message::InsertLink => {
                state.state.show_link_dialog();
                Task::none()
            }
            Message::LinkUrlChanged(url) => {
                state.state.update_link_url(url);
                Task::none()
            }
            Message::ConfirmLink => format_actions::handle_confirm_link(
                &mut state.content,
                &mut state.history,
                &mut state.state,
            ),
            Message::CancelLink => {
                state.state.hide_link_dialog();
                Task::none()
            }

            // Handle the image dialog
            Message::InsertImage => {
                state.state.show_image_dialog();
                Task::none()
            }
            Message::ImageUrlChanged(url) => {
                state.state.update_image_url(url);
                Task::none()
            }
            Message::ConfirmImage => format_actions::handle_confirm_image(
                &mut state.content,
                &mut state.history,
                &mut state.state,
            ),
            Message::CancelImage => {
                state.state.hide_image_dialog();
                Task::none()
            }

            // Handle the color inputs
            Message::ForeColorInputChanged(color) => {
                state.state.set_fore_color_input(color);
                Task::none()
            }
            Message::ApplyForeColor => {
                let color = state.state.fore_color_input().to_string();
                format_actions::handle_format_command(
                    &mut state.content,
                    &mut state.history,
                    &mut state.state,
                    FormatCommand::ForeColor(color),
                )
            }
            Message::HiliteColorInputChanged(color) => {
                state.state.set_hilite_color_input(color);
                Task::none()
            }
            Message::ApplyHiliteColor => {
                let color = state.state.hilite_color_input().to_string();
                format_actions::handle_format_command(
                    &mut state.content,
                    &mut state.history,
                    &mut state.state,
                    FormatCommand::HiliteColor(color),
                )
            }

            // Handle file operations
            Message::OpenFile => file_actions::handle_open_file(&state.state),
            Message::FileLoaded(loaded) => {
                file_actions::handle_file_loaded(&mut state.content, &mut state.history, loaded)
            }
            Message::Export(kind) => file_actions::handle_export(kind, &state.content),
            Message::ExportFinished(result) => file_actions::handle_export_finished(result),
            Message::Print => file_actions::handle_print(&state.content),
            Message::PrintFinished(result) => file_actions::handle_print_finished(result),

            // Handle autosave. Failures are swallowed; the next tick is
            // the retry.
            Message::AutosaveTick => {
                let markup = state.content.text();
                let path = state.state.autosave_path().to_string();
                Task::perform(autosave::persist(path, markup), Message::AutosaveFinished)
            }
            Message::AutosaveFinished(result) => {
                match result {
                    Ok(()) => state.state.set_last_autosave(autosave::wall_clock_label()),
                    Err(_err) => {
                        #[cfg(debug_assertions)]
                        eprintln!("Autosave failed: {}", _err);
                    }
                }
                Task::none()
            }

            Message::AlertClosed => Task::none(),
        }
    }

    pub fn view(state: &Self) -> Element<'_, Message> {
        layout::generate_layout(&state.state, &state.content)
    }

    pub fn subscription(_state: &Self) -> Subscription<Message> {
        let keyboard = iced::event::listen_with(|event, _status, _window| {
            match event {
                Event::Keyboard(iced::keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                    // Ctrl on Linux/Windows, Cmd on macOS
                    if modifiers.command() {
                        if let Key::Character(c) = &key {
                            if c == "s" || c == "S" {
                                return Some(Message::Export(ExportKind::Html));
                            }
                            if c == "a" || c == "A" {
                                return Some(Message::SelectAll);
                            }
                            if c == "z" || c == "Z" {
                                return Some(Message::Format(FormatCommand::Undo));
                            }
                            if c == "y" || c == "Y" {
                                return Some(Message::Format(FormatCommand::Redo));
                            }
                        }
                    }

                    None
                }
                _ => None,
            }
        });

        let autosave_tick =
            iced::time::every(autosave::AUTOSAVE_INTERVAL).map(|_| Message::AutosaveTick);

        Subscription::batch(vec![keyboard, autosave_tick])
    }

    pub fn theme(state: &Self) -> Theme {
        state.theme.clone()
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            state: EditorState::new(),
            content: text_editor::Content::with_text(""),
            history: History::new(),
            theme: Theme::Dark,
        }
    }
}
