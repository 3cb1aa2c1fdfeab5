use eframe::egui::{self, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{charts, panels, report, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct CareerDashApp {
    pub state: AppState,
}

impl CareerDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for CareerDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        #[cfg(target_arch = "wasm32")]
        while let Some(file) = self.state.inbox.try_recv() {
            panels::load_bytes_into(&mut self.state, &file.name, &file.bytes);
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: dashboard ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| dashboard(ui, &self.state));
        });
    }
}

/// The dashboard body, top to bottom. Rendering stops at the warning when the
/// filters match nothing.
fn dashboard(ui: &mut Ui, state: &AppState) {
    report::header(ui);

    let (Some(dataset), Some(summary)) = (&state.dataset, &state.summary) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to explore the records  (File → Open…)");
        });
        return;
    };

    let summary = match summary {
        Ok(s) => s,
        Err(err) => {
            report::warning(ui, err);
            return;
        }
    };

    report::kpi_metrics(ui, summary);
    ui.separator();

    ui.heading("📈 Visualizations");

    report::chart_heading(ui, &report::GPA_SALARY);
    charts::gpa_salary_scatter(
        ui,
        dataset,
        &state.visible_indices,
        state.field_colors.as_ref(),
    );

    report::chart_heading(ui, &report::SALARY_BY_LEVEL);
    charts::salary_by_level_chart(ui, &summary.salary_by_level, state.level_colors.as_ref());

    report::chart_heading(ui, &report::SALARY_BY_INTERNSHIPS);
    charts::salary_by_internships_chart(
        ui,
        &summary.salary_by_internships,
        state.internship_colors.as_ref(),
    );

    ui.separator();
    report::conclusions(ui);

    ui.separator();
    egui::CollapsingHeader::new(format!("Filtered records ({})", summary.record_count))
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            table::records_table(ui, dataset, &state.visible_indices);
        });
}
