//! Shared test utilities for the folio test suite.
//!
//! Provides sample collections and a card counter for asserting on rendered
//! markup.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut grid = Container::new("pdf-grid");
//! render_pdfs(Some(&mut grid), &sample_pdfs(), "./", &PdfFilter::All);
//! assert_eq!(count_cards(grid.content(), "pdf-card"), 3);
//! ```

use crate::types::{
    Collection, CollectionMeta, Format, GifItem, PdfItem, SourceItem, StandaloneItem,
};

// =========================================================================
// Sample items
// =========================================================================

/// Three GIFs, ids 1..=3.
pub fn sample_gifs() -> Vec<GifItem> {
    vec![
        GifItem {
            id: 1,
            file: "flower-of-life".into(),
            name: "Flower of Life".into(),
            desc: "Nineteen circles unfolding from the centre".into(),
            palette: "gold on indigo".into(),
        },
        GifItem {
            id: 2,
            file: "metatron-cube".into(),
            name: "Metatron's Cube".into(),
            desc: "Thirteen circles joined by every line".into(),
            palette: "cyan on black".into(),
        },
        GifItem {
            id: 3,
            file: "sri-yantra".into(),
            name: "Sri Yantra".into(),
            desc: "Nine interlocking triangles".into(),
            palette: "rose and gold".into(),
        },
    ]
}

/// Three posters in two series: one "Sacred", then two "Fractals".
pub fn sample_pdfs() -> Vec<PdfItem> {
    vec![
        PdfItem {
            n: 1,
            file: "seed-of-life".into(),
            name: "Seed of Life".into(),
            concept: "Seven overlapping circles".into(),
            series: "Sacred".into(),
            palette: vec!["#ffd700".into(), "#1a1040".into()],
        },
        PdfItem {
            n: 2,
            file: "koch-snowflake".into(),
            name: "Koch Snowflake".into(),
            concept: "Infinite perimeter, finite area".into(),
            series: "Fractals".into(),
            palette: vec!["#22d3ee".into()],
        },
        PdfItem {
            n: 3,
            file: "sierpinski-carpet".into(),
            name: "Sierpinski Carpet".into(),
            concept: "A square with holes at every scale".into(),
            series: "Fractals".into(),
            palette: vec!["#fb7185".into(), "#08061a".into()],
        },
    ]
}

pub fn sample_sources() -> Vec<SourceItem> {
    vec![
        SourceItem {
            file: "gen_gifs.py".into(),
            name: "GIF loops".into(),
            desc: "Renders every animation frame by frame".into(),
        },
        SourceItem {
            file: "gen_001_015.py".into(),
            name: "Posters 1-15".into(),
            desc: "Vector posters for the first series".into(),
        },
    ]
}

/// A standalone piece named after its file.
pub fn standalone(file: &str, format: Format) -> StandaloneItem {
    StandaloneItem {
        file: file.into(),
        name: file.split('.').next().unwrap_or(file).into(),
        desc: format!("A {format} piece"),
        format,
    }
}

/// A collection with every category populated.
pub fn sample_collection() -> Collection {
    Collection {
        meta: CollectionMeta {
            name: "Geometria".into(),
            tagline: "Sacred patterns, generated".into(),
        },
        gifs: sample_gifs(),
        pdfs: sample_pdfs(),
        standalone: vec![
            standalone("golden-spiral.png", Format::Png),
            standalone("torus-knot.html", Format::Html),
        ],
        sources: sample_sources(),
        ..Collection::default()
    }
}

// =========================================================================
// Markup assertions
// =========================================================================

/// Number of elements whose class list starts with `card_class`.
pub fn count_cards(html: &str, card_class: &str) -> usize {
    html.matches(&format!(r#"class="{card_class} "#)).count()
        + html.matches(&format!(r#"class="{card_class}""#)).count()
}
