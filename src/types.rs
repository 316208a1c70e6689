//! Collection data model.
//!
//! These records are plain descriptions of artworks, supplied wholesale by the
//! collection file and treated as read-only by every renderer. Rendering is a
//! pure function of `(items, base_path)`.
//!
//! String fields default to empty when absent: a record with a missing field
//! renders with empty text instead of failing the whole collection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A looping animation, served from `{base_path}gif/{id}-{file}.gif`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GifItem {
    /// Position in the series, shown on the card badge as `id / total`.
    pub id: u32,
    /// Filename fragment after the numeric prefix.
    pub file: String,
    pub name: String,
    pub desc: String,
    /// Free-form palette description (e.g. "gold on indigo").
    pub palette: String,
}

impl GifItem {
    /// Asset path relative to the collection root.
    pub fn asset_path(&self) -> String {
        format!("gif/{}-{}.gif", self.id, self.file)
    }
}

/// A poster, served from `{base_path}{n}-{file}.pdf`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfItem {
    pub n: u32,
    pub file: String,
    pub name: String,
    pub concept: String,
    /// Grouping tag used by the filter bar. Matched exactly, case-sensitive.
    pub series: String,
    /// CSS colors rendered as swatches.
    pub palette: Vec<String>,
}

impl PdfItem {
    pub fn asset_path(&self) -> String {
        format!("{}-{}.pdf", self.n, self.file)
    }
}

/// File format of a standalone piece.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Png,
    Gif,
    Svg,
    Html,
    #[default]
    Pdf,
}

impl Format {
    /// Formats that can be previewed with a plain `<img>`.
    pub fn is_image(self) -> bool {
        matches!(self, Format::Png | Format::Gif | Format::Svg)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Gif => "gif",
            Format::Svg => "svg",
            Format::Html => "html",
            Format::Pdf => "pdf",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An artwork outside the GIF/PDF series, served from `{base_path}{file}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandaloneItem {
    pub file: String,
    pub name: String,
    pub desc: String,
    pub format: Format,
}

/// A generator script, served from `{base_path}{file}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceItem {
    pub file: String,
    pub name: String,
    pub desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionMeta {
    pub name: String,
    pub tagline: String,
}

/// Which item lists may be filled in from the filesystem when left empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Discover {
    /// Fill `gifs` from `gif/NN-name.gif`.
    pub gifs: bool,
    /// Fill `sources` from `*.py` files.
    pub sources: bool,
}

/// Everything the page assembler needs, as read from `collection.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collection {
    pub meta: CollectionMeta,
    pub gifs: Vec<GifItem>,
    pub pdfs: Vec<PdfItem>,
    pub standalone: Vec<StandaloneItem>,
    pub sources: Vec<SourceItem>,
    /// Prefix for every asset href/src. Concatenated as-is, so it normally
    /// ends with a slash.
    pub base_path: String,
    #[serde(skip_serializing_if = "is_default")]
    pub discover: Discover,
}

fn is_default(d: &Discover) -> bool {
    *d == Discover::default()
}

pub const DEFAULT_BASE_PATH: &str = "./";

impl Default for Collection {
    fn default() -> Self {
        Self {
            meta: CollectionMeta::default(),
            gifs: Vec::new(),
            pdfs: Vec::new(),
            standalone: Vec::new(),
            sources: Vec::new(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            discover: Discover::default(),
        }
    }
}

impl Collection {
    pub fn is_empty(&self) -> bool {
        self.gifs.is_empty()
            && self.pdfs.is_empty()
            && self.standalone.is_empty()
            && self.sources.is_empty()
    }
}
