use std::collections::BTreeSet;

use super::model::{CareerDataset, CareerRecord};

// ---------------------------------------------------------------------------
// Facets: the two filterable categorical columns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    FieldOfStudy,
    JobLevel,
}

impl Facet {
    pub const ALL: [Facet; 2] = [Facet::FieldOfStudy, Facet::JobLevel];

    /// Sidebar heading.
    pub fn title(self) -> &'static str {
        match self {
            Facet::FieldOfStudy => "Field of study",
            Facet::JobLevel => "Current job level",
        }
    }

    /// The record's value for this facet.
    pub fn value_of(self, record: &CareerRecord) -> &str {
        match self {
            Facet::FieldOfStudy => &record.field_of_study,
            Facet::JobLevel => &record.current_job_level,
        }
    }

    /// Every option the dataset offers for this facet.
    pub fn options(self, dataset: &CareerDataset) -> &[String] {
        match self {
            Facet::FieldOfStudy => &dataset.fields_of_study,
            Facet::JobLevel => &dataset.job_levels,
        }
    }
}

// ---------------------------------------------------------------------------
// Selection: which values are selected per facet
// ---------------------------------------------------------------------------

/// Selected values per facet. An empty set selects nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub fields_of_study: BTreeSet<String>,
    pub job_levels: BTreeSet<String>,
}

impl Selection {
    /// Every option of every facet selected (i.e., show everything).
    pub fn all(dataset: &CareerDataset) -> Self {
        let mut sel = Selection::default();
        for facet in Facet::ALL {
            sel.select_all(facet, dataset);
        }
        sel
    }

    pub fn values(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::FieldOfStudy => &self.fields_of_study,
            Facet::JobLevel => &self.job_levels,
        }
    }

    fn values_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::FieldOfStudy => &mut self.fields_of_study,
            Facet::JobLevel => &mut self.job_levels,
        }
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.values(facet).contains(value)
    }

    /// Add or remove a single value.
    pub fn set(&mut self, facet: Facet, value: &str, selected: bool) {
        let values = self.values_mut(facet);
        if selected {
            values.insert(value.to_string());
        } else {
            values.remove(value);
        }
    }

    pub fn select_all(&mut self, facet: Facet, dataset: &CareerDataset) {
        *self.values_mut(facet) = facet.options(dataset).iter().cloned().collect();
    }

    pub fn select_none(&mut self, facet: Facet) {
        self.values_mut(facet).clear();
    }

    /// A record passes when both of its facet values are selected.
    pub fn matches(&self, record: &CareerRecord) -> bool {
        Facet::ALL
            .iter()
            .all(|&facet| self.is_selected(facet, facet.value_of(record)))
    }
}

/// Return indices of records that pass the selection.
pub fn filtered_indices(records: &[CareerRecord], selection: &Selection) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| selection.matches(r))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;
    use proptest::prelude::*;

    fn sample() -> CareerDataset {
        CareerDataset::from_records(vec![
            record("Engineering", "Entry", 55_000.0, 3.2),
            record("Engineering", "Senior", 130_000.0, 3.7),
            record("Arts", "Entry", 38_000.0, 3.0),
            record("Business", "Mid", 82_000.0, 3.4),
            record("Arts", "Mid", 61_000.0, 2.8),
        ])
        .unwrap()
    }

    #[test]
    fn all_selected_keeps_everything() {
        let ds = sample();
        let sel = Selection::all(&ds);
        assert_eq!(filtered_indices(&ds.records, &sel), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn both_facets_must_match() {
        let ds = sample();
        let mut sel = Selection::all(&ds);
        sel.set(Facet::FieldOfStudy, "Engineering", false);
        sel.set(Facet::JobLevel, "Mid", false);
        assert_eq!(filtered_indices(&ds.records, &sel), vec![2]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = sample();
        let mut sel = Selection::all(&ds);
        sel.set(Facet::JobLevel, "Entry", false);

        let first: Vec<CareerRecord> = filtered_indices(&ds.records, &sel)
            .into_iter()
            .map(|i| ds.records[i].clone())
            .collect();
        let again: Vec<CareerRecord> = filtered_indices(&first, &sel)
            .into_iter()
            .map(|i| first[i].clone())
            .collect();
        assert_eq!(first.len(), 3);
        assert_eq!(first, again);
    }

    #[test]
    fn disjoint_selection_is_empty() {
        let ds = sample();
        let mut sel = Selection::default();
        sel.set(Facet::FieldOfStudy, "Astrology", true);
        sel.set(Facet::JobLevel, "Intern", true);
        assert!(filtered_indices(&ds.records, &sel).is_empty());
    }

    #[test]
    fn select_none_on_one_facet_empties_result() {
        let ds = sample();
        let mut sel = Selection::all(&ds);
        sel.select_none(Facet::JobLevel);
        assert!(filtered_indices(&ds.records, &sel).is_empty());

        sel.select_all(Facet::JobLevel, &ds);
        assert_eq!(filtered_indices(&ds.records, &sel).len(), 5);
    }

    #[test]
    fn set_removes_then_restores_a_value() {
        let ds = sample();
        let mut sel = Selection::all(&ds);
        assert!(sel.is_selected(Facet::FieldOfStudy, "Arts"));
        sel.set(Facet::FieldOfStudy, "Arts", false);
        assert!(!sel.is_selected(Facet::FieldOfStudy, "Arts"));
        sel.set(Facet::FieldOfStudy, "Arts", true);
        assert_eq!(sel, Selection::all(&ds));
    }

    proptest! {
        #[test]
        fn any_selection_is_idempotent(
            fields in proptest::collection::vec(any::<bool>(), 3),
            levels in proptest::collection::vec(any::<bool>(), 3),
        ) {
            let ds = sample();
            let mut sel = Selection::default();
            for (name, on) in ds.fields_of_study.iter().zip(&fields) {
                sel.set(Facet::FieldOfStudy, name, *on);
            }
            for (name, on) in ds.job_levels.iter().zip(&levels) {
                sel.set(Facet::JobLevel, name, *on);
            }

            let subset: Vec<CareerRecord> = filtered_indices(&ds.records, &sel)
                .into_iter()
                .map(|i| ds.records[i].clone())
                .collect();
            let kept = filtered_indices(&subset, &sel);
            prop_assert_eq!(kept, (0..subset.len()).collect::<Vec<_>>());
        }
    }
}
