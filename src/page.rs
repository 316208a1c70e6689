//! Collection page assembly.
//!
//! Composes the hero (title, tagline, stats, nav pills) and one section per
//! non-empty category, then delegates each section's grid to the
//! [`gallery`](crate::gallery) renderers.
//!
//! ## Page Layout
//!
//! ```text
//! section.hero
//! ├── #hero-canvas                  # particle backdrop
//! └── #collection-hero              # h1, tagline, stats, nav pills
//! main#collection-content
//! ├── section#gifs       → #gif-grid
//! ├── section#posters    → #pdf-filters + #pdf-grid
//! ├── section#standalone → #standalone-grid
//! └── section#source     → #source-grid
//! ```
//!
//! Categories with no items get no stat, no nav pill and no section.

use crate::dom::{Document, RenderOutcome};
use crate::fade::FadeInObserver;
use crate::filter::{PdfFilter, PdfFilterController, init_pdf_filters};
use crate::gallery::{render_gifs, render_pdfs, render_sources, render_standalone};
use crate::types::{Collection, CollectionMeta};
use maud::{DOCTYPE, Markup, PreEscaped, html};

pub const HERO_ID: &str = "collection-hero";
pub const CONTENT_ID: &str = "collection-content";
pub const CANVAS_ID: &str = "hero-canvas";
pub const PDF_FILTERS_ID: &str = "pdf-filters";

/// Link back to the collections index, always first in the nav.
const ALL_COLLECTIONS_HREF: &str = "../../";

/// A hero statistic: item count for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub value: usize,
    pub label: &'static str,
    /// Accent color name, used as a CSS class.
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavPill {
    pub href: &'static str,
    pub label: &'static str,
}

/// A category section on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Gifs,
    Posters,
    Standalone,
    Source,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Gifs,
        Section::Posters,
        Section::Standalone,
        Section::Source,
    ];

    /// Element id of the section, also the nav anchor.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Gifs => "gifs",
            Section::Posters => "posters",
            Section::Standalone => "standalone",
            Section::Source => "source",
        }
    }

    /// Id (and class) of the section's card grid.
    pub fn grid_id(self) -> &'static str {
        match self {
            Section::Gifs => "gif-grid",
            Section::Posters => "pdf-grid",
            Section::Standalone => "standalone-grid",
            Section::Source => "source-grid",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Gifs => "Animated GIFs",
            Section::Posters => "PDF Posters",
            Section::Standalone => "Standalone Pieces",
            Section::Source => "Source Code",
        }
    }

    fn nav_label(self) -> &'static str {
        match self {
            Section::Gifs => "Animated GIFs",
            Section::Posters => "PDF Posters",
            Section::Standalone => "Standalone",
            Section::Source => "Source Code",
        }
    }

    fn nav_href(self) -> &'static str {
        match self {
            Section::Gifs => "#gifs",
            Section::Posters => "#posters",
            Section::Standalone => "#standalone",
            Section::Source => "#source",
        }
    }

    fn subtitle(self, count: usize) -> String {
        match self {
            Section::Gifs => format!("{count} perfectly looping animations."),
            Section::Posters => format!("{count} unique A3 vector PDF posters."),
            Section::Standalone => {
                "Individual artworks in various formats: PNG, GIF, PDF, SVG, and interactive HTML."
                    .to_string()
            }
            Section::Source => {
                "Every piece is generated from a script. Explore, fork, and create your own."
                    .to_string()
            }
        }
    }

    fn count(self, collection: &Collection) -> usize {
        match self {
            Section::Gifs => collection.gifs.len(),
            Section::Posters => collection.pdfs.len(),
            Section::Standalone => collection.standalone.len(),
            Section::Source => collection.sources.len(),
        }
    }
}

/// Stats for non-empty categories, in the order PDFs, GIFs, standalone, sources.
pub fn stats(collection: &Collection) -> Vec<Stat> {
    [
        (collection.pdfs.len(), "PDF Posters", "purple"),
        (collection.gifs.len(), "Animated GIFs", "cyan"),
        (collection.standalone.len(), "Standalone Pieces", "rose"),
        (collection.sources.len(), "Generator Scripts", "gold"),
    ]
    .into_iter()
    .filter(|(value, _, _)| *value > 0)
    .map(|(value, label, color)| Stat {
        value,
        label,
        color,
    })
    .collect()
}

/// Sections for non-empty categories, in page order.
pub fn sections(collection: &Collection) -> Vec<Section> {
    Section::ALL
        .into_iter()
        .filter(|s| s.count(collection) > 0)
        .collect()
}

/// "All Collections" followed by an anchor per non-empty category.
pub fn nav_pills(collection: &Collection) -> Vec<NavPill> {
    std::iter::once(NavPill {
        href: ALL_COLLECTIONS_HREF,
        label: "All Collections",
    })
    .chain(sections(collection).into_iter().map(|s| NavPill {
        href: s.nav_href(),
        label: s.nav_label(),
    }))
    .collect()
}

/// What a successful page render produced.
#[derive(Debug)]
pub struct PageSummary {
    pub stats: Vec<Stat>,
    pub sections: Vec<(Section, RenderOutcome)>,
    /// Present when the page has a poster section.
    pub filters: Option<PdfFilterController>,
    /// Elements newly registered for fade-in.
    pub faded_in: usize,
}

#[derive(Debug)]
pub enum PageOutcome {
    Rendered(PageSummary),
    /// The hero or content container is not mounted; nothing was touched.
    Skipped,
}

/// Render the whole collection page into `doc`.
pub fn render_collection_page(
    doc: &mut Document,
    collection: &Collection,
    fade: &mut FadeInObserver,
) -> PageOutcome {
    if !doc.contains(HERO_ID) || !doc.contains(CONTENT_ID) {
        return PageOutcome::Skipped;
    }

    let stats = stats(collection);
    let hero = hero_markup(&collection.meta, &stats, &nav_pills(collection));
    if let Some(container) = doc.get_mut(HERO_ID) {
        container.set_content(hero.into_string());
    }

    let present = sections(collection);
    let scaffolding = html! {
        @for section in &present {
            (section_markup(*section, collection))
        }
    };
    if let Some(container) = doc.get_mut(CONTENT_ID) {
        container.set_content(scaffolding.into_string());
    }

    // The scaffolding just created fresh grids; drop grids of sections that
    // no longer exist.
    for section in Section::ALL {
        if present.contains(&section) {
            doc.mount(section.grid_id());
        } else {
            doc.unmount(section.grid_id());
        }
    }
    if present.contains(&Section::Posters) {
        doc.mount(PDF_FILTERS_ID);
    } else {
        doc.unmount(PDF_FILTERS_ID);
    }

    let base = collection.base_path.as_str();
    let outcomes = present
        .iter()
        .map(|&section| {
            let grid = doc.get_mut(section.grid_id());
            let outcome = match section {
                Section::Gifs => render_gifs(grid, &collection.gifs, base),
                Section::Posters => render_pdfs(grid, &collection.pdfs, base, &PdfFilter::All),
                Section::Standalone => render_standalone(grid, &collection.standalone, base),
                Section::Source => render_sources(grid, &collection.sources, base),
            };
            (section, outcome)
        })
        .collect();

    let filters = if present.contains(&Section::Posters) {
        init_pdf_filters(
            doc,
            PDF_FILTERS_ID,
            Section::Posters.grid_id(),
            &collection.pdfs,
            base,
        )
    } else {
        None
    };

    let faded_in = fade.observe(doc);

    PageOutcome::Rendered(PageSummary {
        stats,
        sections: outcomes,
        filters,
        faded_in,
    })
}

fn hero_markup(meta: &CollectionMeta, stats: &[Stat], pills: &[NavPill]) -> Markup {
    html! {
        div.hero-content {
            h1 { (meta.name) }
            p.subtitle { (meta.tagline) }
            div.stats {
                @for stat in stats {
                    div.stat {
                        div class={ "stat-number " (stat.color) } { (stat.value) }
                        div.stat-label { (stat.label) }
                    }
                }
            }
            nav.nav-pills {
                @for pill in pills {
                    a.nav-pill href=(pill.href) { (pill.label) }
                }
            }
        }
    }
}

fn section_markup(section: Section, collection: &Collection) -> Markup {
    html! {
        section id=(section.anchor()) {
            div.section-header.fade-in {
                h2 { (section.title()) }
                div.divider {}
                p { (section.subtitle(section.count(collection))) }
            }
            @if section == Section::Posters {
                div.filter-bar id=(PDF_FILTERS_ID) {}
            }
            div class=(section.grid_id()) id=(section.grid_id()) {}
        }
    }
}

/// A document with the page's mount points, ready for [`render_collection_page`].
pub fn page_mounts() -> Document {
    Document::new().with(HERO_ID).with(CONTENT_ID)
}

/// Wrap a rendered page into a complete HTML document.
///
/// `backdrop` is the hero particle snapshot, referenced from the canvas slot.
/// Returns `None` if `doc` lacks the page mount points.
pub fn page_document(
    title: &str,
    css: &str,
    backdrop: Option<&str>,
    doc: &Document,
) -> Option<Markup> {
    let hero = doc.serialize(HERO_ID)?;
    let content = doc.serialize(CONTENT_ID)?;
    Some(html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                section.hero {
                    @if let Some(src) = backdrop {
                        img.hero-backdrop id=(CANVAS_ID) src=(src) alt="" aria-hidden="true";
                    } @else {
                        canvas.hero-backdrop id=(CANVAS_ID) {}
                    }
                    div id=(HERO_ID) { (PreEscaped(hero)) }
                }
                main id=(CONTENT_ID) { (PreEscaped(content)) }
            }
        }
    })
}
