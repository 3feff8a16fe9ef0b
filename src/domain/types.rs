use serde::{Deserialize, Serialize};

/// One entry of the extracted table of contents.
///
/// `url` is always `"#"` followed by the sequential identifier assigned to
/// the heading element; entries appear in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleItem {
    pub url: String,
    pub title: String,
    /// Heading depth derived from the marked element's tag name. Values are
    /// passed through as emitted by the renderer and are not clamped to 1–6.
    pub level: u8,
}

/// Reading statistics associated with one render call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingStats {
    /// Exact Unicode scalar count of the source Markdown.
    pub chars: usize,
    /// Visible word count reported by the rendering engine.
    pub words: u32,
    /// Estimated reading time in whole minutes, rounded up.
    pub minutes: u32,
}

/// Caption source for rendered images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Legend {
    /// Caption images with their `alt` text.
    #[default]
    Alt,
    /// Caption images with their `title` text.
    Title,
    /// Emit no captions.
    None,
}

/// Snapshot of a converter's derived state.
///
/// Returned by value: mutating the snapshot never touches the converter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertResult {
    pub html: String,
    pub reading_time: ReadingStats,
    pub title_list: Vec<TitleItem>,
}
