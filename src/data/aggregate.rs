use std::collections::BTreeMap;

use crate::error::DashboardError;

use super::model::CareerRecord;

// ---------------------------------------------------------------------------
// Summary of the filtered subset
// ---------------------------------------------------------------------------

/// Everything the dashboard shows about the current subset.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub record_count: usize,
    pub mean_salary: f64,
    pub mean_gpa: f64,
    /// (job level, mean salary), highest mean first.
    pub salary_by_level: Vec<(String, f64)>,
    /// (internships completed, mean salary), ascending by count.
    pub salary_by_internships: Vec<(u32, f64)>,
}

/// Reduce the filtered records to a [`Summary`].
///
/// An empty input has no defined means and yields
/// [`DashboardError::EmptySelection`].
pub fn summarize<'a, I>(records: I) -> Result<Summary, DashboardError>
where
    I: IntoIterator<Item = &'a CareerRecord>,
    I::IntoIter: Clone,
{
    let records = records.into_iter();

    let record_count = records.clone().count();
    if record_count == 0 {
        return Err(DashboardError::EmptySelection);
    }

    let mean_salary = mean(records.clone().map(|r| r.starting_salary)).unwrap_or(f64::NAN);
    let mean_gpa = mean(records.clone().map(|r| r.university_gpa)).unwrap_or(f64::NAN);

    Ok(Summary {
        record_count,
        mean_salary,
        mean_gpa,
        salary_by_level: mean_salary_by_job_level(records.clone()),
        salary_by_internships: mean_salary_by_internships(records),
    })
}

/// Arithmetic mean of the finite values, `None` if there are none.
///
/// Missing cells load as NaN and are skipped, so one null salary does not
/// poison the KPI.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Mean of `value` per key; only keys with at least one finite value appear.
pub fn group_mean<K: Ord>(pairs: impl IntoIterator<Item = (K, f64)>) -> BTreeMap<K, f64> {
    let mut acc: BTreeMap<K, (f64, usize)> = BTreeMap::new();
    for (key, value) in pairs.into_iter().filter(|(_, v)| v.is_finite()) {
        let slot = acc.entry(key).or_insert((0.0, 0));
        slot.0 += value;
        slot.1 += 1;
    }
    acc.into_iter()
        .map(|(k, (sum, n))| (k, sum / n as f64))
        .collect()
}

/// Mean starting salary per job level, highest first. Equal means fall back to
/// label order.
pub fn mean_salary_by_job_level<'a>(
    records: impl IntoIterator<Item = &'a CareerRecord>,
) -> Vec<(String, f64)> {
    let grouped = group_mean(
        records
            .into_iter()
            .map(|r| (r.current_job_level.clone(), r.starting_salary)),
    );
    let mut out: Vec<(String, f64)> = grouped.into_iter().collect();
    // Stable sort over label-ordered input keeps ties alphabetical.
    out.sort_by(|a, b| b.1.total_cmp(&a.1));
    out
}

/// Mean starting salary per internship count, ascending by count.
pub fn mean_salary_by_internships<'a>(
    records: impl IntoIterator<Item = &'a CareerRecord>,
) -> Vec<(u32, f64)> {
    group_mean(
        records
            .into_iter()
            .map(|r| (r.internships_completed, r.starting_salary)),
    )
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    fn with_internships(mut r: CareerRecord, n: u32) -> CareerRecord {
        r.internships_completed = n;
        r
    }

    #[test]
    fn level_means_sorted_descending() {
        let records = vec![
            record("Arts", "Entry", 40_000.0, 3.0),
            record("Arts", "Entry", 60_000.0, 3.0),
            record("Arts", "Senior", 90_000.0, 3.0),
        ];
        assert_eq!(
            mean_salary_by_job_level(&records),
            vec![("Senior".to_string(), 90_000.0), ("Entry".to_string(), 50_000.0)]
        );
    }

    #[test]
    fn ties_are_ordered_by_label() {
        let records = vec![
            record("Arts", "Mid", 70_000.0, 3.0),
            record("Arts", "Executive", 70_000.0, 3.0),
            record("Arts", "Entry", 20_000.0, 3.0),
        ];
        let labels: Vec<String> = mean_salary_by_job_level(&records)
            .into_iter()
            .map(|(l, _)| l)
            .collect();
        assert_eq!(labels, ["Executive", "Mid", "Entry"]);
    }

    #[test]
    fn internship_means_ascending_and_sparse() {
        let records = vec![
            with_internships(record("Arts", "Entry", 80_000.0, 3.0), 4),
            with_internships(record("Arts", "Entry", 30_000.0, 3.0), 0),
            with_internships(record("Arts", "Entry", 50_000.0, 3.0), 0),
            with_internships(record("Arts", "Entry", 66_000.0, 3.0), 2),
        ];
        assert_eq!(
            mean_salary_by_internships(&records),
            vec![(0, 40_000.0), (2, 66_000.0), (4, 80_000.0)]
        );
    }

    #[test]
    fn single_member_group_is_exact() {
        let records = vec![record("Law", "Senior", 123_456.78, 3.91)];
        let summary = summarize(&records).unwrap();
        assert_eq!(summary.mean_salary, 123_456.78);
        assert_eq!(summary.mean_gpa, 3.91);
        assert_eq!(summary.salary_by_level, vec![("Senior".to_string(), 123_456.78)]);
        assert_eq!(summary.salary_by_internships, vec![(1, 123_456.78)]);
        assert_eq!(summary.record_count, 1);
    }

    #[test]
    fn empty_input_stops() {
        let records: Vec<CareerRecord> = Vec::new();
        assert_eq!(summarize(&records), Err(DashboardError::EmptySelection));
        assert_eq!(mean(std::iter::empty()), None);
    }

    #[test]
    fn summary_over_borrowed_subset() {
        let records = vec![
            record("Arts", "Entry", 40_000.0, 2.0),
            record("Law", "Mid", 80_000.0, 4.0),
            record("Arts", "Mid", 60_000.0, 3.0),
        ];
        let subset = [0usize, 2];
        let summary = summarize(subset.iter().map(|&i| &records[i])).unwrap();
        assert_eq!(summary.record_count, 2);
        assert_eq!(summary.mean_salary, 50_000.0);
        assert_eq!(summary.mean_gpa, 2.5);
    }

    #[test]
    fn missing_salaries_are_skipped() {
        let records = vec![
            record("Arts", "Entry", 40_000.0, 3.0),
            record("Arts", "Senior", 90_000.0, 3.0),
            record("Arts", "Entry", f64::NAN, 3.0),
        ];
        let summary = summarize(&records).unwrap();
        assert_eq!(summary.record_count, 3);
        assert_eq!(summary.mean_salary, 65_000.0);
        assert_eq!(
            summary.salary_by_level,
            vec![("Senior".to_string(), 90_000.0), ("Entry".to_string(), 40_000.0)]
        );
    }

    #[test]
    fn group_of_only_missing_values_is_dropped() {
        let records = vec![
            with_internships(record("Arts", "Entry", 50_000.0, 3.0), 1),
            with_internships(record("Arts", "Mid", f64::NAN, 3.0), 3),
        ];
        assert_eq!(mean_salary_by_internships(&records), vec![(1, 50_000.0)]);
        assert_eq!(
            mean_salary_by_job_level(&records),
            vec![("Entry".to_string(), 50_000.0)]
        );
        assert_eq!(mean([f64::NAN, f64::NAN]), None);
    }
}
