use iced::widget::text_editor::{Action, Content, Edit, Motion};
use std::sync::Arc;

use crate::components::editor::actions::format_actions::Invocation;
use crate::components::editor::state::editor_state::EditorState;
use crate::components::editor::text_management::history::History;

// Handler for actions coming from the text_editor widget
pub fn handle_editor_action(
    content: &mut Content,
    history: &mut History,
    state: &EditorState,
    action: Action,
) {
    // The surface ignores edits while a URL dialog owns the center area.
    if state.is_any_dialog_open() {
        return;
    }

    // Snapshot the markup before any modifying action so it is undoable.
    if matches!(action, Action::Edit(_)) {
        history.record(content.text());
    }

    content.perform(action);
}

// Handler for select all
pub fn handle_select_all(content: &mut Content, state: &EditorState) {
    if state.is_any_dialog_open() {
        return;
    }

    // Move the caret to the start, then select through to the end.
    content.perform(Action::Move(Motion::DocumentStart));
    content.perform(Action::Select(Motion::DocumentEnd));
}

/// Applies a command's invocations against the surface. The prior markup
/// is recorded once, before the first invocation that actually lands; a
/// command that finds nothing to act on records nothing.
pub fn apply_invocations(
    content: &mut Content,
    history: &mut History,
    invocations: &[Invocation],
) -> bool {
    let before = content.text();
    let mut applied = false;

    for invocation in invocations {
        let selection = content.selection();
        let replacement = match selection.as_deref() {
            Some(selected) if !selected.is_empty() => rewrite(invocation, selected),
            _ => insertion(invocation),
        };

        if let Some(markup) = replacement {
            if !applied {
                history.record(before.clone());
                applied = true;
            }
            content.perform(Action::Edit(Edit::Paste(Arc::new(markup))));
        } else {
            #[cfg(debug_assertions)]
            eprintln!("Invocation '{}' had nothing to act on.", invocation.name);
        }
    }

    applied
}

/// Replacement markup for an invocation applied to the selected markup.
/// `None` means the invocation does not apply to a selection.
pub fn rewrite(invocation: &Invocation, selection: &str) -> Option<String> {
    let value = invocation.value.as_deref().unwrap_or_default();

    match invocation.name {
        "bold" => Some(format!("<b>{}</b>", selection)),
        "italic" => Some(format!("<i>{}</i>", selection)),
        "underline" => Some(format!("<u>{}</u>", selection)),
        "strikeThrough" => Some(format!("<s>{}</s>", selection)),
        "justifyLeft" => Some(aligned_block("left", selection)),
        "justifyCenter" => Some(aligned_block("center", selection)),
        "justifyRight" => Some(aligned_block("right", selection)),
        "insertUnorderedList" => Some(list("ul", selection)),
        "insertOrderedList" => Some(list("ol", selection)),
        "indent" => Some(format!("<blockquote>{}</blockquote>", selection)),
        // Outdent only applies when the selection carries an indent wrapper.
        "outdent" => selection
            .trim()
            .strip_prefix("<blockquote>")
            .and_then(|rest| rest.strip_suffix("</blockquote>"))
            .map(|inner| inner.to_string()),
        "fontName" => Some(styled_span("font-family", value, selection)),
        "fontSize" => Some(styled_span("font-size", &format!("{}px", value), selection)),
        "foreColor" => Some(styled_span("color", value, selection)),
        "hiliteColor" | "backColor" => Some(styled_span("background-color", value, selection)),
        "createLink" => Some(format!("<a href=\"{}\">{}</a>", value, selection)),
        "insertImage" => Some(format!("<img src=\"{}\">", value)),
        _ => None,
    }
}

/// Markup inserted at the caret when nothing is selected. Only the
/// insertion commands produce content out of thin air.
pub fn insertion(invocation: &Invocation) -> Option<String> {
    let value = invocation.value.as_deref().unwrap_or_default();

    match invocation.name {
        "createLink" => Some(format!("<a href=\"{0}\">{0}</a>", value)),
        "insertImage" => Some(format!("<img src=\"{}\">", value)),
        _ => None,
    }
}

fn aligned_block(alignment: &str, selection: &str) -> String {
    format!("<div style=\"text-align:{}\">{}</div>", alignment, selection)
}

fn list(tag: &str, selection: &str) -> String {
    let items: String = selection
        .lines()
        .map(|line| format!("<li>{}</li>", line))
        .collect();
    format!("<{0}>{1}</{0}>", tag, items)
}

fn styled_span(property: &str, value: &str, selection: &str) -> String {
    format!(
        "<span style=\"{}:{}\">{}</span>",
        property, value, selection
    )
}
