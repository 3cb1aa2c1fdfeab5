use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::bucket::UNBINNED_LABEL;
use crate::data::model::CareerDataset;
use crate::format::{format_currency, format_decimal};

const HEADERS: [&str; 11] = [
    "Student",
    "Age",
    "Age Group",
    "Field of Study",
    "Univ. GPA",
    "HS GPA",
    "SAT",
    "Internships",
    "Job Offers",
    "Starting Salary",
    "Salary Range",
];

// ---------------------------------------------------------------------------
// Filtered records table
// ---------------------------------------------------------------------------

/// Scrollable table of the records passing the current filters, including the
/// derived Age_Group and Salary_Range columns.
pub fn records_table(ui: &mut Ui, dataset: &CareerDataset, visible: &[usize]) {
    let row_height = ui.text_style_height(&eframe::egui::TextStyle::Body) + 4.0;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .vscroll(true)
        .max_scroll_height(320.0)
        .columns(Column::auto().at_least(60.0), HEADERS.len())
        .header(22.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(row_height, visible.len(), |mut row| {
                let idx = visible[row.index()];
                let rec = &dataset.records[idx];
                let derived = &dataset.derived[idx];

                let cells = [
                    rec.student_id.clone().unwrap_or_else(|| format!("#{idx}")),
                    format_decimal(rec.age, 0),
                    derived
                        .age_group
                        .clone()
                        .unwrap_or_else(|| UNBINNED_LABEL.to_string()),
                    rec.field_of_study.clone(),
                    format_decimal(rec.university_gpa, 2),
                    format_decimal(rec.high_school_gpa, 2),
                    format_decimal(rec.sat_score, 0),
                    rec.internships_completed.to_string(),
                    rec.job_offers.to_string(),
                    format_currency(rec.starting_salary),
                    derived
                        .salary_range
                        .clone()
                        .unwrap_or_else(|| UNBINNED_LABEL.to_string()),
                ];
                for text in cells {
                    row.col(|ui| {
                        ui.label(text);
                    });
                }
            });
        });
}
