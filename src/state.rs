use std::path::PathBuf;

use crate::color::ColorMap;
use crate::data::aggregate::{summarize, Summary};
use crate::data::filter::{filtered_indices, Facet, Selection};
use crate::data::model::CareerDataset;
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<CareerDataset>,

    /// Where `dataset` came from.
    pub source: Option<PathBuf>,

    /// Selected values per facet.
    pub selection: Selection,

    /// Indices of records passing the current selection (cached).
    pub visible_indices: Vec<usize>,

    /// Derived views over `visible_indices`; `Err` stops rendering.
    pub summary: Option<Result<Summary, DashboardError>>,

    /// Colours per field of study (scatter).
    pub field_colors: Option<ColorMap<String>>,

    /// Colours per job level (salary-by-level bars).
    pub level_colors: Option<ColorMap<String>>,

    /// Colours per internship count (salary-by-internships bars).
    pub internship_colors: Option<ColorMap<u32>>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Files fetched or picked in the browser, waiting to be parsed.
    #[cfg(target_arch = "wasm32")]
    pub inbox: crate::web::Inbox,
}

impl AppState {
    /// Ingest a newly loaded dataset, select every option and derive views.
    pub fn set_dataset(&mut self, dataset: CareerDataset, source: Option<PathBuf>) {
        self.selection = Selection::all(&dataset);

        self.field_colors = Some(ColorMap::new(&dataset.fields_of_study));
        self.level_colors = Some(ColorMap::new(&dataset.job_levels));
        let mut counts: Vec<u32> = dataset
            .records
            .iter()
            .map(|r| r.internships_completed)
            .collect();
        counts.sort_unstable();
        counts.dedup();
        self.internship_colors = Some(ColorMap::new(&counts));

        self.dataset = Some(dataset);
        self.source = source;
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `visible_indices` and `summary` after a selection change.
    pub fn refilter(&mut self) {
        let Some(ds) = &self.dataset else {
            self.visible_indices.clear();
            self.summary = None;
            return;
        };
        self.visible_indices = filtered_indices(&ds.records, &self.selection);
        self.summary = Some(summarize(
            self.visible_indices.iter().map(|&i| &ds.records[i]),
        ));
        log::debug!(
            "refilter: {} of {} records visible",
            self.visible_indices.len(),
            ds.len()
        );
    }

    /// Set a single facet value and refilter if it changed.
    pub fn set_value(&mut self, facet: Facet, value: &str, selected: bool) {
        if self.selection.is_selected(facet, value) != selected {
            self.selection.set(facet, value, selected);
            self.refilter();
        }
    }

    /// Select all values of a facet.
    pub fn select_all(&mut self, facet: Facet) {
        if let Some(ds) = &self.dataset {
            self.selection.select_all(facet, ds);
            self.refilter();
        }
    }

    /// Deselect all values of a facet.
    pub fn select_none(&mut self, facet: Facet) {
        self.selection.select_none(facet);
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;
    use eframe::egui::Color32;

    fn loaded() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(
            CareerDataset::from_records(vec![
                record("Engineering", "Entry", 60_000.0, 3.0),
                record("Engineering", "Senior", 140_000.0, 3.8),
                record("Arts", "Entry", 40_000.0, 3.2),
            ])
            .unwrap(),
            None,
        );
        state
    }

    #[test]
    fn empty_state_has_no_summary() {
        let mut state = AppState::default();
        state.refilter();
        assert!(state.summary.is_none());
        assert!(state.visible_indices.is_empty());
    }

    #[test]
    fn loading_selects_everything() {
        let state = loaded();
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        let summary = state.summary.clone().unwrap().unwrap();
        assert_eq!(summary.record_count, 3);
        assert_eq!(summary.mean_salary, 80_000.0);
        assert_eq!(summary.salary_by_level[0].0, "Senior");
    }

    #[test]
    fn deselecting_everything_stops_then_recovers() {
        let mut state = loaded();
        state.select_none(Facet::FieldOfStudy);
        assert_eq!(state.summary, Some(Err(DashboardError::EmptySelection)));

        state.set_value(Facet::FieldOfStudy, "Arts", true);
        let summary = state.summary.clone().unwrap().unwrap();
        assert_eq!(summary.record_count, 1);
        assert_eq!(summary.mean_salary, 40_000.0);
    }

    #[test]
    fn unchecking_a_level_narrows_the_subset() {
        let mut state = loaded();
        state.set_value(Facet::JobLevel, "Entry", false);
        assert_eq!(state.visible_indices, vec![1]);
        state.select_all(Facet::JobLevel);
        assert_eq!(state.visible_indices.len(), 3);
    }

    #[test]
    fn colour_maps_cover_dataset() {
        let state = loaded();
        let fields = state.field_colors.as_ref().unwrap();
        assert_ne!(fields.color_for_str("Engineering"), Color32::GRAY);
        assert_ne!(fields.color_for_str("Engineering"), fields.color_for_str("Arts"));
        assert_eq!(fields.color_for_str("Medicine"), Color32::GRAY);
        let counts = state.internship_colors.as_ref().unwrap();
        assert_ne!(counts.color_for(&1), Color32::GRAY);
        assert_eq!(counts.color_for(&0), Color32::GRAY);
    }
}
