use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::aggregate::Summary;
use crate::error::DashboardError;
use crate::format::{format_currency, format_decimal};

// ---------------------------------------------------------------------------
// Static copy
// ---------------------------------------------------------------------------

pub const WINDOW_TITLE: &str = "Academic & Career Success Analysis";
pub const TITLE: &str = "📊 Dashboard: Academic & Career Success";
pub const DESCRIPTION: &str =
    "An executive visual summary of the factors that influence professional success.";

pub struct ChartCopy {
    pub subtitle: &'static str,
    pub caption: &'static str,
}

pub const GPA_SALARY: ChartCopy = ChartCopy {
    subtitle: "University GPA vs. Starting Salary by Field of Study",
    caption: "GPA and starting salary show a positive correlation, with clear differences between fields of study.",
};

pub const SALARY_BY_LEVEL: ChartCopy = ChartCopy {
    subtitle: "Salary Distribution by Current Job Level",
    caption: "Job level (Senior, Mid, Entry) has a clear influence on the average salary.",
};

pub const SALARY_BY_INTERNSHIPS: ChartCopy = ChartCopy {
    subtitle: "Impact of Internships on Starting Salaries",
    caption: "The more internships completed, the higher the starting salary tends to be.",
};

/// (lead, body) pairs of the closing analysis.
pub const CONCLUSIONS: [(&str, &str); 3] = [
    (
        "Impact of academic preparation:",
        "the data suggest a strong positive correlation between university GPA and \
         starting salary. Higher academic performance is associated with greater \
         earning potential.",
    ),
    (
        "Relevance of practical experience:",
        "completing more internships correlates directly with higher starting \
         salaries, underlining the value of practical experience alongside formal \
         education.",
    ),
    (
        "Job level and salary:",
        "as expected there is a clear salary hierarchy by job level, with Senior and \
         Mid roles well above entry level. Career progression is a critical factor in \
         income growth.",
    ),
];

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Title and description.
pub fn header(ui: &mut Ui) {
    ui.heading(RichText::new(TITLE).size(28.0).strong());
    ui.label(RichText::new(DESCRIPTION).italics().strong());
    ui.add_space(8.0);
}

/// The two KPI metrics side by side.
pub fn kpi_metrics(ui: &mut Ui, summary: &Summary) {
    ui.columns(2, |cols| {
        metric(
            &mut cols[0],
            "💰 Average Starting Salary",
            &format_currency(summary.mean_salary),
        );
        metric(
            &mut cols[1],
            "🎓 Average University GPA",
            &format_decimal(summary.mean_gpa, 2),
        );
    });
}

fn metric(ui: &mut Ui, label: &str, value: &str) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).weak());
        ui.label(RichText::new(value).size(32.0).strong());
    });
}

/// Chart subtitle + caption.
pub fn chart_heading(ui: &mut Ui, copy: &ChartCopy) {
    ui.add_space(6.0);
    ui.label(RichText::new(copy.subtitle).size(18.0).strong());
    ui.label(RichText::new(copy.caption).italics());
}

/// Warning shown instead of the dashboard body, e.g. when the filters match
/// nothing.
pub fn warning(ui: &mut Ui, err: &DashboardError) {
    egui::Frame::group(ui.style())
        .fill(Color32::from_rgb(255, 244, 206))
        .show(ui, |ui| {
            ui.label(
                RichText::new(format!("⚠ {err}"))
                    .color(Color32::from_rgb(122, 85, 0)),
            );
        });
}

/// Closing analysis.
pub fn conclusions(ui: &mut Ui) {
    ui.heading("✍ Executive Analysis: Comments and Conclusions");
    for (lead, body) in CONCLUSIONS {
        ui.horizontal_wrapped(|ui| {
            ui.label("•");
            ui.label(RichText::new(lead).strong());
            ui.label(body);
        });
        ui.add_space(4.0);
    }
}
