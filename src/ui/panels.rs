use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use std::path::PathBuf;

use crate::data::filter::Facet;
use crate::data::loader;
use crate::data::model::CareerDataset;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: one multi-select per facet.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone the options so we can mutate state inside the loop.
    let options: Vec<(Facet, Vec<String>)> = Facet::ALL
        .iter()
        .map(|&f| (f, f.options(dataset).to_vec()))
        .collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (facet, values) in &options {
                let facet = *facet;
                let n_selected = state.selection.values(facet).len();
                let header_text = format!("{}  ({n_selected}/{})", facet.title(), values.len());

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(facet.title())
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        ui.horizontal(|ui: &mut Ui| {
                            if ui.small_button("All").clicked() {
                                state.select_all(facet);
                            }
                            if ui.small_button("None").clicked() {
                                state.select_none(facet);
                            }
                        });

                        let colors = match facet {
                            Facet::FieldOfStudy => state.field_colors.as_ref(),
                            Facet::JobLevel => state.level_colors.as_ref(),
                        };

                        let mut changes = Vec::new();
                        for val in values {
                            let mut checked = state.selection.is_selected(facet, val);
                            let mut text = RichText::new(val);
                            if let Some(cm) = colors {
                                text = text.color(cm.color_for_str(val));
                            }
                            if ui.checkbox(&mut checked, text).changed() {
                                changes.push((val.clone(), checked));
                            }
                        }
                        for (val, checked) in changes {
                            state.set_value(facet, &val, checked);
                        }
                    });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state, ui.ctx());
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let source = state
                .source
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            ui.label(format!(
                "{source}  {} records loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

#[cfg(not(target_arch = "wasm32"))]
pub fn open_file_dialog(state: &mut AppState, _ctx: &egui::Context) {
    let file = rfd::FileDialog::new()
        .set_title("Open career records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        load_into(state, path);
    }
}

/// The picked file is read asynchronously and lands in `state.inbox`.
#[cfg(target_arch = "wasm32")]
pub fn open_file_dialog(state: &mut AppState, ctx: &egui::Context) {
    crate::web::pick_file(state.inbox.sender(), ctx.clone());
}

/// Load `path` into `state`, keeping the previous dataset on failure.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_into(state: &mut AppState, path: PathBuf) {
    let result = loader::load_file(&path);
    apply_load(state, path, result);
}

/// Load downloaded or uploaded file contents into `state`.
pub fn load_bytes_into(state: &mut AppState, name: &str, bytes: &[u8]) {
    let result = loader::load_bytes(name, bytes);
    apply_load(state, PathBuf::from(name), result);
}

fn apply_load(state: &mut AppState, source: PathBuf, result: anyhow::Result<CareerDataset>) {
    match result {
        Ok(dataset) => {
            if dataset.is_empty() {
                log::warn!("{} contains no records", source.display());
            }
            log::info!(
                "Loaded {} records from {} ({} fields of study, {} job levels)",
                dataset.len(),
                source.display(),
                dataset.fields_of_study.len(),
                dataset.job_levels.len()
            );
            state.set_dataset(dataset, Some(source));
        }
        Err(e) => {
            log::error!("Failed to load {}: {e:#}", source.display());
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Age,High_School_GPA,SAT_Score,University_GPA,Field_of_Study,Internships_Completed,Job_Offers,Starting_Salary,Current_Job_Level
23,3.4,1300,3.6,Medicine,2,4,88000,Mid
21,2.9,1150,3.0,Arts,0,1,41000,Entry
";

    #[test]
    fn bytes_load_into_state() {
        let mut state = AppState::default();
        load_bytes_into(&mut state, "records.csv", CSV.as_bytes());
        assert_eq!(state.visible_indices, vec![0, 1]);
        assert_eq!(state.source, Some(PathBuf::from("records.csv")));
        let summary = state.summary.clone().unwrap().unwrap();
        assert_eq!(summary.mean_salary, 64_500.0);
    }

    #[test]
    fn failed_load_keeps_previous_dataset() {
        let mut state = AppState::default();
        load_bytes_into(&mut state, "records.csv", CSV.as_bytes());

        load_bytes_into(&mut state, "records.json", b"{ not json");
        assert!(state.status_message.as_deref().unwrap().contains("JSON"));
        assert_eq!(state.dataset.as_ref().unwrap().len(), 2);
        assert_eq!(state.source, Some(PathBuf::from("records.csv")));

        load_into(&mut state, PathBuf::from("/nonexistent/records.csv"));
        assert_eq!(state.dataset.as_ref().unwrap().len(), 2);

        load_bytes_into(&mut state, "records.csv", CSV.as_bytes());
        assert_eq!(state.status_message, None);
    }
}
