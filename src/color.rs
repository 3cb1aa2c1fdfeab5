use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.70, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category value → Color32
// ---------------------------------------------------------------------------

/// Maps the distinct values of a category (field of study, job level,
/// internship count) to distinct colours. Colours are assigned in the order
/// the values are given, so a facet keeps its colours while filters change.
#[derive(Debug, Clone)]
pub struct ColorMap<K: Ord> {
    mapping: BTreeMap<K, Color32>,
    default_color: Color32,
}

impl<K: Ord + Clone> ColorMap<K> {
    pub fn new<'a>(values: impl IntoIterator<Item = &'a K>) -> Self
    where
        K: 'a,
    {
        let values: Vec<&K> = values.into_iter().collect();
        let palette = generate_palette(values.len());
        let mapping = values
            .into_iter()
            .cloned()
            .zip(palette)
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given value.
    pub fn color_for(&self, value: &K) -> Color32 {
        self.mapping
            .get(value)
            .copied()
            .unwrap_or(self.default_color)
    }
}

impl ColorMap<String> {
    /// Colour lookup by `&str` without allocating a key.
    pub fn color_for_str(&self, value: &str) -> Color32 {
        self.mapping
            .get(value)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_distinct() {
        let colors = generate_palette(6);
        assert_eq!(colors.len(), 6);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn unknown_values_fall_back_to_gray() {
        let levels = vec!["Entry".to_string(), "Mid".to_string()];
        let cm = ColorMap::new(&levels);
        assert_ne!(cm.color_for_str("Entry"), cm.color_for_str("Mid"));
        assert_eq!(cm.color_for_str("Executive"), Color32::GRAY);
    }

    #[test]
    fn numeric_keys() {
        let counts = [0u32, 1, 2, 3, 4];
        let cm = ColorMap::new(&counts);
        assert_eq!(cm.color_for(&2), generate_palette(5)[2]);
    }
}
