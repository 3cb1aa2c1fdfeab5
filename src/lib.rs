//! Career Dash: an egui dashboard over academic and career success records.
//!
//! The [`data`] layer is UI-free (loading, bucketing, filtering, aggregation);
//! [`state`], [`app`] and [`ui`] render it with eframe / egui_plot, either in a
//! desktop window or, on wasm32, in a served web page (`web`).

pub mod app;
pub mod color;
pub mod data;
pub mod error;
pub mod format;
pub mod state;
pub mod ui;
#[cfg(target_arch = "wasm32")]
pub mod web;
