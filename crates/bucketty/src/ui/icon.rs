use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::file;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A collection of icons used throughout the terminal UI.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    /// An archive file symbol (🗜).
    Archive,
    /// A source code file symbol (💻).
    Code,
    /// A generic document symbol (📄).
    Document,
    /// A collapsed folder symbol (📁).
    FolderClosed,
    /// An expanded folder symbol (📂).
    FolderOpen,
    /// An image file symbol (🖼).
    Image,
    /// A presentation file symbol (📈).
    Presentation,
    /// A spinner symbol frame.
    Spinner(usize),
    /// A spreadsheet file symbol (📊).
    Spreadsheet,
    /// A plain text file symbol (📑).
    Text,
    /// A word-processor document symbol (📃).
    WordDocument,
}

impl Icon {
    /// Returns a `Spinner` icon with the frame index calculated based on
    /// current time.
    pub fn current_spinner() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        Icon::Spinner((now / 100) as usize)
    }

    /// Returns the icon for a file key based on its extension.
    pub fn for_file(key: &str) -> Self {
        let Some(extension) = file::extension(key) else {
            return Icon::Document;
        };

        match extension.to_ascii_lowercase().as_str() {
            "bmp" | "gif" | "jpeg" | "jpg" | "png" | "webp" => Icon::Image,
            "css" | "html" | "js" | "json" | "py" => Icon::Code,
            "csv" | "log" | "md" | "txt" => Icon::Text,
            "doc" | "docx" => Icon::WordDocument,
            "gz" | "rar" | "tar" | "zip" => Icon::Archive,
            "ppt" | "pptx" => Icon::Presentation,
            "xls" | "xlsx" => Icon::Spreadsheet,
            _ => Icon::Document,
        }
    }

    /// Returns the string representation of the icon.
    pub fn as_str(self) -> &'static str {
        match self {
            Icon::Archive => "🗜",
            Icon::Code => "💻",
            Icon::Document => "📄",
            Icon::FolderClosed => "📁",
            Icon::FolderOpen => "📂",
            Icon::Image => "🖼",
            Icon::Presentation => "📈",
            Icon::Spinner(frame) => SPINNER_FRAMES[frame % SPINNER_FRAMES.len()],
            Icon::Spreadsheet => "📊",
            Icon::Text => "📑",
            Icon::WordDocument => "📃",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
