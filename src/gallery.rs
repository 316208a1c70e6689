//! Gallery card renderers.
//!
//! Each renderer maps an item list to a grid of linked cards and replaces the
//! target container's content with it. A missing container or an empty list
//! leaves the container untouched and is reported as a [`Skip`].
//!
//! Every asset reference is `base_path` concatenated with the item's
//! collection-relative path, so the same markup works from any page depth.
//!
//! ## Card Shapes
//!
//! ```text
//! a.gif-card         img + "id / total" badge + overlay (name, desc · palette)
//! a.pdf-card         icon, number, name, concept, palette swatches
//! a.standalone-card  image preview or text placeholder, format tag, info
//! a.source-card      file, name, description
//! ```
//!
//! All cards carry the `fade-in` class.

use crate::dom::{Container, RenderOutcome, Skip};
use crate::filter::{PdfFilter, filter_pdfs};
use crate::types::{GifItem, PdfItem, SourceItem, StandaloneItem};
use maud::{Markup, PreEscaped, html};

const PDF_ICON_SVG: &str = concat!(
    r#"<svg class="pdf-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">"#,
    r#"<path d="M7 21h10a2 2 0 002-2V9l-6-6H7a2 2 0 00-2 2v14a2 2 0 002 2z"/>"#,
    r#"<path d="M13 3v6h6"/>"#,
    "</svg>"
);

/// Shared guard: resolve the container or report why nothing was rendered.
fn writable<'a, T>(target: Option<&'a mut Container>, items: &[T]) -> Result<&'a mut Container, Skip> {
    let container = target.ok_or(Skip::MissingContainer)?;
    if items.is_empty() {
        return Err(Skip::Empty);
    }
    Ok(container)
}

/// Render one card per GIF, each badged with its position in the series.
pub fn render_gifs(
    target: Option<&mut Container>,
    gifs: &[GifItem],
    base_path: &str,
) -> RenderOutcome {
    let grid = match writable(target, gifs) {
        Ok(grid) => grid,
        Err(skip) => return RenderOutcome::Skipped(skip),
    };
    let markup = html! {
        @for gif in gifs {
            (gif_card(gif, gifs.len(), base_path))
        }
    };
    grid.set_content(markup.into_string());
    RenderOutcome::Rendered { cards: gifs.len() }
}

/// Render the PDFs matching `filter`, replacing the grid content.
///
/// A filter that matches nothing still replaces the content (with an empty
/// grid); only an empty input list is skipped.
pub fn render_pdfs(
    target: Option<&mut Container>,
    pdfs: &[PdfItem],
    base_path: &str,
    filter: &PdfFilter,
) -> RenderOutcome {
    let grid = match writable(target, pdfs) {
        Ok(grid) => grid,
        Err(skip) => return RenderOutcome::Skipped(skip),
    };
    let shown = filter_pdfs(pdfs, filter);
    let markup = html! {
        @for pdf in &shown {
            (pdf_card(pdf, base_path))
        }
    };
    grid.set_content(markup.into_string());
    RenderOutcome::Rendered { cards: shown.len() }
}

pub fn render_standalone(
    target: Option<&mut Container>,
    pieces: &[StandaloneItem],
    base_path: &str,
) -> RenderOutcome {
    let grid = match writable(target, pieces) {
        Ok(grid) => grid,
        Err(skip) => return RenderOutcome::Skipped(skip),
    };
    let markup = html! {
        @for piece in pieces {
            (standalone_card(piece, base_path))
        }
    };
    grid.set_content(markup.into_string());
    RenderOutcome::Rendered {
        cards: pieces.len(),
    }
}

pub fn render_sources(
    target: Option<&mut Container>,
    sources: &[SourceItem],
    base_path: &str,
) -> RenderOutcome {
    let grid = match writable(target, sources) {
        Ok(grid) => grid,
        Err(skip) => return RenderOutcome::Skipped(skip),
    };
    let markup = html! {
        @for source in sources {
            (source_card(source, base_path))
        }
    };
    grid.set_content(markup.into_string());
    RenderOutcome::Rendered {
        cards: sources.len(),
    }
}

// ============================================================================
// Cards
// ============================================================================

fn gif_card(gif: &GifItem, total: usize, base_path: &str) -> Markup {
    let src = format!("{base_path}{}", gif.asset_path());
    html! {
        a.gif-card.fade-in href=(src) target="_blank" {
            img src=(src) alt=(gif.name) loading="lazy";
            span.gif-badge { (gif.id) " / " (total) }
            div.overlay {
                h3 { (gif.name) }
                p { (gif.desc) " · " (gif.palette) }
            }
        }
    }
}

fn pdf_card(pdf: &PdfItem, base_path: &str) -> Markup {
    html! {
        a.pdf-card.fade-in href={ (base_path) (pdf.asset_path()) } target="_blank" {
            (PreEscaped(PDF_ICON_SVG))
            div.pdf-number { (pdf.n) }
            div.pdf-name { (pdf.name) }
            div.pdf-concept { (pdf.concept) }
            div.pdf-palette {
                @for color in &pdf.palette {
                    span.dot style={ "background:" (color) } {}
                }
            }
        }
    }
}

/// Placeholder text for formats without an image preview.
fn placeholder_label(piece: &StandaloneItem) -> &'static str {
    match piece.format {
        crate::types::Format::Html => "Interactive",
        _ => "PDF Document",
    }
}

fn standalone_card(piece: &StandaloneItem, base_path: &str) -> Markup {
    let href = format!("{base_path}{}", piece.file);
    html! {
        a.standalone-card.fade-in href=(href) target="_blank" {
            div.standalone-preview {
                @if piece.format.is_image() {
                    img src=(href) alt=(piece.name) loading="lazy";
                } @else {
                    div.standalone-placeholder { (placeholder_label(piece)) }
                }
                span class={ "format-tag " (piece.format.as_str()) } { "." (piece.format.as_str()) }
            }
            div.standalone-info {
                h3 { (piece.name) }
                p { (piece.desc) }
            }
        }
    }
}

fn source_card(source: &SourceItem, base_path: &str) -> Markup {
    html! {
        a.source-card.fade-in href={ (base_path) (source.file) } target="_blank" {
            h3 { (source.file) }
            p { strong { (source.name) } }
            p.source-desc { (source.desc) }
        }
    }
}
