use std::collections::HashMap;
use std::ops::RangeInclusive;

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points};

use crate::color::ColorMap;
use crate::data::model::{CareerDataset, CareerRecord};
use crate::format::{format_currency, format_decimal, format_salary_tick};

const CHART_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// GPA vs. salary scatter
// ---------------------------------------------------------------------------

/// Scatter of University_GPA (x) against Starting_Salary (y), one series per
/// field of study. Hovering a point shows the auxiliary record fields.
pub fn gpa_salary_scatter(
    ui: &mut Ui,
    dataset: &CareerDataset,
    visible: &[usize],
    colors: Option<&ColorMap<String>>,
) {
    // Series in facet order so the legend matches the sidebar.
    let mut series: Vec<(&str, Vec<&CareerRecord>)> = dataset
        .fields_of_study
        .iter()
        .map(|f| (f.as_str(), Vec::new()))
        .collect();
    let slot: HashMap<&str, usize> = series
        .iter()
        .enumerate()
        .map(|(i, (name, _))| (*name, i))
        .collect();
    for &idx in visible {
        let rec = &dataset.records[idx];
        if let Some(&i) = slot.get(rec.field_of_study.as_str()) {
            series[i].1.push(rec);
        }
    }
    series.retain(|(_, recs)| !recs.is_empty());

    let hover_lookup: HashMap<&str, &[&CareerRecord]> = series
        .iter()
        .map(|(name, recs)| (*name, recs.as_slice()))
        .collect();

    Plot::new("gpa_salary_scatter")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("University GPA")
        .y_axis_label("Starting Salary")
        .y_axis_formatter(salary_axis)
        .allow_scroll(false)
        .label_formatter(|name, value| scatter_hover(&hover_lookup, name, value))
        .show(ui, |plot_ui| {
            for (name, recs) in &series {
                let color = colors
                    .map(|cm| cm.color_for_str(name))
                    .unwrap_or(Color32::LIGHT_BLUE);
                let points: Vec<[f64; 2]> = recs
                    .iter()
                    .map(|r| [r.university_gpa, r.starting_salary])
                    .collect();
                plot_ui.points(
                    Points::new(PlotPoints::new(points))
                        .name(*name)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(3.0),
                );
            }
        });
}

/// Hover text for a scatter point: the nearest record in the hovered series.
fn scatter_hover(
    lookup: &HashMap<&str, &[&CareerRecord]>,
    name: &str,
    value: &PlotPoint,
) -> String {
    let nearest = lookup.get(name).and_then(|recs| {
        recs.iter().copied().min_by(|a, b| {
            hover_distance(a, value).total_cmp(&hover_distance(b, value))
        })
    });

    match nearest {
        Some(rec) => format!(
            "{name}\nUniversity GPA: {}\nStarting Salary: {}\nHigh School GPA: {}\nSAT Score: {:.0}\nJob Offers: {}",
            format_decimal(rec.university_gpa, 2),
            format_currency(rec.starting_salary),
            format_decimal(rec.high_school_gpa, 2),
            rec.sat_score,
            rec.job_offers,
        ),
        None => format!(
            "GPA {}\n{}",
            format_decimal(value.x, 2),
            format_currency(value.y)
        ),
    }
}

/// Distance with salary scaled down so both axes weigh comparably.
fn hover_distance(rec: &CareerRecord, p: &PlotPoint) -> f64 {
    let dx = rec.university_gpa - p.x;
    let dy = (rec.starting_salary - p.y) / 25_000.0;
    dx * dx + dy * dy
}

// ---------------------------------------------------------------------------
// Bar charts
// ---------------------------------------------------------------------------

/// Mean salary per job level, in the order given (highest mean first).
pub fn salary_by_level_chart(
    ui: &mut Ui,
    means: &[(String, f64)],
    colors: Option<&ColorMap<String>>,
) {
    let labels: Vec<String> = means.iter().map(|(l, _)| l.clone()).collect();
    let charts: Vec<BarChart> = means
        .iter()
        .enumerate()
        .map(|(i, (level, mean))| {
            let color = colors
                .map(|cm| cm.color_for_str(level))
                .unwrap_or(Color32::LIGHT_BLUE);
            category_bar(i, level, *mean, color)
        })
        .collect();

    bar_plot(ui, "salary_by_level", "Current Job Level", labels, charts);
}

/// Mean salary per internship count, ascending by count.
pub fn salary_by_internships_chart(
    ui: &mut Ui,
    means: &[(u32, f64)],
    colors: Option<&ColorMap<u32>>,
) {
    let labels: Vec<String> = means.iter().map(|(n, _)| n.to_string()).collect();
    let charts: Vec<BarChart> = means
        .iter()
        .enumerate()
        .map(|(i, (count, mean))| {
            let color = colors
                .map(|cm| cm.color_for(count))
                .unwrap_or(Color32::LIGHT_BLUE);
            category_bar(i, &count.to_string(), *mean, color)
        })
        .collect();

    bar_plot(ui, "salary_by_internships", "Internships Completed", labels, charts);
}

/// One single-bar chart per category so each gets its own legend entry.
fn category_bar(position: usize, label: &str, mean: f64, color: Color32) -> BarChart {
    let bar = Bar::new(position as f64, mean)
        .name(format!("{label}: {}", format_currency(mean)))
        .fill(color)
        .width(0.7);
    BarChart::new(vec![bar]).name(label).color(color)
}

fn bar_plot(ui: &mut Ui, id: &str, x_label: &str, labels: Vec<String>, charts: Vec<BarChart>) {
    Plot::new(id)
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(x_label)
        .y_axis_label("Average Starting Salary")
        .x_axis_formatter(move |mark, _range| category_axis(&labels, mark))
        .y_axis_formatter(salary_axis)
        .allow_scroll(false)
        .allow_drag(false)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

/// Label integer tick positions with the category name; hide the rest.
fn category_axis(labels: &[String], mark: GridMark) -> String {
    let rounded = mark.value.round();
    if (mark.value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

fn salary_axis(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    format_salary_tick(mark.value)
}
