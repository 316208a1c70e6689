//! Series filtering for the poster grid.
//!
//! The filter bar is a small state machine with a single state variable, the
//! active [`PdfFilter`]. [`transition`] is the pure step function; the
//! [`PdfFilterController`] applies it to a [`Document`] by re-rendering the
//! bar and the poster grid.
//!
//! ```text
//! [All (12)] [Fractals] [Physics] [Sacred]      ← buttons, one `.active`
//!      │
//!      └── click "Fractals" → active = Series("Fractals") → grid re-rendered
//! ```

use crate::dom::{Document, RenderOutcome};
use crate::fade::FadeInObserver;
use crate::gallery::render_pdfs;
use crate::types::PdfItem;
use maud::{Markup, html};
use std::collections::BTreeSet;

/// Data value of the button that shows every poster.
pub const ALL_FILTER: &str = "all";

/// Which posters the grid shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PdfFilter {
    #[default]
    All,
    /// Only posters whose `series` equals this value exactly.
    Series(String),
}

impl PdfFilter {
    /// Parse a `data-filter` value. `"all"` is the show-everything sentinel.
    pub fn from_data_value(value: &str) -> Self {
        if value == ALL_FILTER {
            PdfFilter::All
        } else {
            PdfFilter::Series(value.to_string())
        }
    }

    pub fn data_value(&self) -> &str {
        match self {
            PdfFilter::All => ALL_FILTER,
            PdfFilter::Series(series) => series,
        }
    }

    pub fn matches(&self, pdf: &PdfItem) -> bool {
        match self {
            PdfFilter::All => true,
            PdfFilter::Series(series) => pdf.series == *series,
        }
    }
}

/// Posters matching `filter`, in their input order.
pub fn filter_pdfs<'a>(pdfs: &'a [PdfItem], filter: &PdfFilter) -> Vec<&'a PdfItem> {
    pdfs.iter().filter(|p| filter.matches(p)).collect()
}

/// Distinct series values, sorted alphabetically.
pub fn series_set(pdfs: &[PdfItem]) -> Vec<String> {
    pdfs.iter()
        .map(|p| p.series.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub filter: PdfFilter,
    pub label: String,
}

/// What a click on the filter bar landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// An element tagged as a filter button, carrying its `data-filter` value.
    FilterButton(String),
    /// Gaps between buttons, the bar background, anything else.
    Elsewhere,
}

/// Next active filter after a click. Clicks that do not land on a button of
/// this bar keep the current state.
pub fn transition(active: &PdfFilter, target: &ClickTarget, buttons: &[FilterButton]) -> PdfFilter {
    match target {
        ClickTarget::FilterButton(value) => buttons
            .iter()
            .find(|b| b.filter.data_value() == value)
            .map(|b| b.filter.clone())
            .unwrap_or_else(|| active.clone()),
        ClickTarget::Elsewhere => active.clone(),
    }
}

/// Filter bar state: the buttons and which one is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBar {
    buttons: Vec<FilterButton>,
    active: PdfFilter,
}

impl FilterBar {
    /// "All (n)" followed by one button per distinct series, "All" active.
    pub fn for_pdfs(pdfs: &[PdfItem]) -> Self {
        let mut buttons = vec![FilterButton {
            filter: PdfFilter::All,
            label: format!("All ({})", pdfs.len()),
        }];
        buttons.extend(series_set(pdfs).into_iter().map(|series| FilterButton {
            label: series.clone(),
            filter: PdfFilter::Series(series),
        }));
        Self {
            buttons,
            active: PdfFilter::All,
        }
    }

    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    pub fn active(&self) -> &PdfFilter {
        &self.active
    }

    /// Apply a click. Returns the new active filter if the click hit a button.
    pub fn click(&mut self, target: &ClickTarget) -> Option<&PdfFilter> {
        let ClickTarget::FilterButton(value) = target else {
            return None;
        };
        if !self.buttons.iter().any(|b| b.filter.data_value() == value) {
            return None;
        }
        self.active = transition(&self.active, target, &self.buttons);
        Some(&self.active)
    }

    pub fn render(&self) -> Markup {
        html! {
            @for button in &self.buttons {
                button.filter-btn.active[button.filter == self.active]
                    data-filter=(button.filter.data_value()) {
                    (button.label)
                }
            }
        }
    }
}

/// Delegated click handling for a filter bar bound to a poster grid.
#[derive(Debug, Clone)]
pub struct PdfFilterController {
    bar_id: String,
    grid_id: String,
    pdfs: Vec<PdfItem>,
    base_path: String,
    bar: FilterBar,
}

/// Bind a filter bar to a poster grid. `None` when the bar is not mounted.
///
/// The bar starts with "All" active; its content is rendered immediately.
pub fn init_pdf_filters(
    doc: &mut Document,
    bar_id: &str,
    grid_id: &str,
    pdfs: &[PdfItem],
    base_path: &str,
) -> Option<PdfFilterController> {
    let container = doc.get_mut(bar_id)?;
    let bar = FilterBar::for_pdfs(pdfs);
    container.set_content(bar.render().into_string());
    Some(PdfFilterController {
        bar_id: bar_id.to_string(),
        grid_id: grid_id.to_string(),
        pdfs: pdfs.to_vec(),
        base_path: base_path.to_string(),
        bar,
    })
}

impl PdfFilterController {
    pub fn active(&self) -> &PdfFilter {
        self.bar.active()
    }

    pub fn bar(&self) -> &FilterBar {
        &self.bar
    }

    /// Handle a click on the bar. Non-button clicks return `None` and touch
    /// nothing; button clicks move the active state, re-render the bar and
    /// the grid, and register the new cards for fade-in.
    pub fn click(
        &mut self,
        doc: &mut Document,
        target: &ClickTarget,
        fade: &mut FadeInObserver,
    ) -> Option<RenderOutcome> {
        let filter = self.bar.click(target)?.clone();
        if let Some(bar) = doc.get_mut(&self.bar_id) {
            bar.set_content(self.bar.render().into_string());
        }
        let outcome = render_pdfs(
            doc.get_mut(&self.grid_id),
            &self.pdfs,
            &self.base_path,
            &filter,
        );
        fade.observe(doc);
        Some(outcome)
    }
}
