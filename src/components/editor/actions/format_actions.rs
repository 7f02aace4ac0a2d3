use iced::Task;
use iced::widget::text_editor::Content;

use crate::components::editor::Message;
use crate::components::editor::state::editor_state::EditorState;
use crate::components::editor::text_management::content_handler;
use crate::components::editor::text_management::history::History;

/// Everything the toolbar can ask of the surface. Value-bearing variants
/// carry whatever string the control supplied; nothing is validated.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatCommand {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    JustifyLeft,
    JustifyCenter,
    JustifyRight,
    UnorderedList,
    OrderedList,
    Indent,
    Outdent,
    Undo,
    Redo,
    FontName(String),
    FontSize(String),
    ForeColor(String),
    HiliteColor(String),
    CreateLink(String),
    InsertImage(String),
}

/// One formatting invocation against the surface, named after the
/// editing command it performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: &'static str,
    pub value: Option<String>,
}

impl Invocation {
    fn plain(name: &'static str) -> Self {
        Self { name, value: None }
    }

    fn valued(name: &'static str, value: &str) -> Self {
        Self {
            name,
            value: Some(value.to_string()),
        }
    }
}

/// Expands a command into its invocation list: always exactly one, except
/// highlight color. Engines disagree on which highlight command they
/// honor, so it is issued under both names with the same value; the pair
/// is a workaround, not two meaningful operations. Undo and redo never
/// reach the invocation layer.
pub fn expand(command: &FormatCommand) -> Vec<Invocation> {
    match command {
        FormatCommand::Bold => vec![Invocation::plain("bold")],
        FormatCommand::Italic => vec![Invocation::plain("italic")],
        FormatCommand::Underline => vec![Invocation::plain("underline")],
        FormatCommand::Strikethrough => vec![Invocation::plain("strikeThrough")],
        FormatCommand::JustifyLeft => vec![Invocation::plain("justifyLeft")],
        FormatCommand::JustifyCenter => vec![Invocation::plain("justifyCenter")],
        FormatCommand::JustifyRight => vec![Invocation::plain("justifyRight")],
        FormatCommand::UnorderedList => vec![Invocation::plain("insertUnorderedList")],
        FormatCommand::OrderedList => vec![Invocation::plain("insertOrderedList")],
        FormatCommand::Indent => vec![Invocation::plain("indent")],
        FormatCommand::Outdent => vec![Invocation::plain("outdent")],
        FormatCommand::FontName(name) => vec![Invocation::valued("fontName", name)],
        FormatCommand::FontSize(size) => vec![Invocation::valued("fontSize", size)],
        FormatCommand::ForeColor(color) => vec![Invocation::valued("foreColor", color)],
        FormatCommand::HiliteColor(color) => vec![
            Invocation::valued("hiliteColor", color),
            Invocation::valued("backColor", color),
        ],
        FormatCommand::CreateLink(url) => vec![Invocation::valued("createLink", url)],
        FormatCommand::InsertImage(url) => vec![Invocation::valued("insertImage", url)],
        FormatCommand::Undo | FormatCommand::Redo => Vec::new(),
    }
}

// Handler for toolbar format commands
pub fn handle_format_command(
    content: &mut Content,
    history: &mut History,
    state: &mut EditorState,
    command: FormatCommand,
) -> Task<Message> {
    if state.is_any_dialog_open() {
        return Task::none();
    }

    match &command {
        FormatCommand::Undo => {
            if let Some(previous) = history.undo(&content.text()) {
                *content = Content::with_text(&previous);
            } else {
                #[cfg(debug_assertions)]
                eprintln!("Nothing to undo.");
            }
            return Task::none();
        }
        FormatCommand::Redo => {
            if let Some(next) = history.redo(&content.text()) {
                *content = Content::with_text(&next);
            } else {
                #[cfg(debug_assertions)]
                eprintln!("Nothing to redo.");
            }
            return Task::none();
        }
        // The pick-lists display whatever was applied last.
        FormatCommand::FontName(name) => state.set_font_name(Some(name.clone())),
        FormatCommand::FontSize(size) => state.set_font_size(Some(size.clone())),
        _ => {}
    }

    let invocations = expand(&command);
    content_handler::apply_invocations(content, history, &invocations);
    Task::none()
}

// Handler for confirming the link dialog
pub fn handle_confirm_link(
    content: &mut Content,
    history: &mut History,
    state: &mut EditorState,
) -> Task<Message> {
    let url = state.link_url_input().trim().to_string();
    state.hide_link_dialog();

    // A dismissed or emptied prompt issues no command at all.
    if url.is_empty() {
        return Task::none();
    }

    handle_format_command(content, history, state, FormatCommand::CreateLink(url))
}

// Handler for confirming the image dialog
pub fn handle_confirm_image(
    content: &mut Content,
    history: &mut History,
    state: &mut EditorState,
) -> Task<Message> {
    let url = state.image_url_input().trim().to_string();
    state.hide_image_dialog();

    if url.is_empty() {
        return Task::none();
    }

    handle_format_command(content, history, state, FormatCommand::InsertImage(url))
}
