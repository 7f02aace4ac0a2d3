use native_dialog::FileDialog;
use std::fs;
use thiserror::Error;

use crate::document;

/// The three download channels. They differ only in fixed filename, MIME
/// label and payload kind; the word channel reuses the HTML payload
/// byte-for-byte (word processors open HTML offered under .doc).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Html,
    Word,
    PlainText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    pub filename: &'static str,
    pub mime: &'static str,
}

impl ExportKind {
    pub fn channel(&self) -> Channel {
        match self {
            ExportKind::Html => Channel {
                filename: "document.html",
                mime: "text/html",
            },
            ExportKind::Word => Channel {
                filename: "document.doc",
                mime: "application/msword",
            },
            ExportKind::PlainText => Channel {
                filename: "document.txt",
                mime: "text/plain",
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not open the save dialog: {0}")]
    Dialog(String),
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Wraps the document markup in a standalone HTML document. The markup is
/// embedded verbatim; whatever the surface holds is what ships.
pub fn standalone_html(markup: &str) -> String {
    format!(
        "<!doctype html>\n<html><head><meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width,initial-scale=1\"><title>Export</title></head><body>\n{}\n</body></html>",
        markup
    )
}

pub fn payload(kind: ExportKind, markup: &str) -> String {
    match kind {
        ExportKind::Html | ExportKind::Word => standalone_html(markup),
        ExportKind::PlainText => document::plain_text(markup),
    }
}

/// Offers the payload through a save dialog pre-filled with the channel's
/// filename and writes it out. `Ok(None)` means the user cancelled.
pub async fn deliver(kind: ExportKind, markup: String) -> Result<Option<String>, String> {
    let channel = kind.channel();
    let contents = payload(kind, &markup);

    let picked = FileDialog::new()
        .set_filename(channel.filename)
        .show_save_single_file()
        .map_err(|err| ExportError::Dialog(err.to_string()).to_string())?;

    let Some(path) = picked else {
        return Ok(None);
    };

    fs::write(&path, contents).map_err(|source| {
        ExportError::Write {
            path: path.display().to_string(),
            source,
        }
        .to_string()
    })?;

    #[cfg(debug_assertions)]
    eprintln!(
        "Exported {} ({}) to {}",
        channel.filename,
        channel.mime,
        path.display()
    );

    Ok(Some(path.display().to_string()))
}
