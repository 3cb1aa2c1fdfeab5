use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Buckets – labelled half-open intervals
// ---------------------------------------------------------------------------

/// Ordered edges with one label per half-open interval `[edges[i], edges[i+1])`.
#[derive(Debug, Clone, PartialEq)]
pub struct Buckets {
    edges: Vec<f64>,
    labels: Vec<String>,
}

impl Buckets {
    /// Build a bucket table. Needs `labels.len() + 1` strictly increasing edges.
    pub fn new<L: Into<String>>(
        edges: Vec<f64>,
        labels: impl IntoIterator<Item = L>,
    ) -> Result<Self, DashboardError> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        if labels.is_empty() {
            return Err(DashboardError::InvalidBuckets("no labels".into()));
        }
        if edges.len() != labels.len() + 1 {
            return Err(DashboardError::InvalidBuckets(format!(
                "{} edges for {} labels",
                edges.len(),
                labels.len()
            )));
        }
        if edges.iter().any(|e| !e.is_finite()) {
            return Err(DashboardError::InvalidBuckets("non-finite edge".into()));
        }
        if edges.windows(2).any(|w| w[0] >= w[1]) {
            return Err(DashboardError::InvalidBuckets(
                "edges must be strictly increasing".into(),
            ));
        }

        Ok(Buckets { edges, labels })
    }

    /// Label of the interval containing `value`.
    ///
    /// Intervals are left-inclusive, right-exclusive: `value` lands in
    /// `[low, high)` for the smallest `high > value`. Anything below the first
    /// edge, at or above the last edge, or NaN has no label.
    pub fn assign(&self, value: f64) -> Option<&str> {
        if value.is_nan() {
            return None;
        }
        let first = *self.edges.first()?;
        let last = *self.edges.last()?;
        if value < first || value >= last {
            return None;
        }
        // Number of edges <= value; the interval index is one less.
        let idx = self.edges.partition_point(|&e| e <= value);
        self.labels.get(idx - 1).map(String::as_str)
    }

    /// Labels in interval order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

// ---------------------------------------------------------------------------
// Fixed tables for the derived columns
// ---------------------------------------------------------------------------

pub const AGE_EDGES: [f64; 4] = [20.0, 22.0, 24.0, 26.0];
pub const AGE_LABELS: [&str; 3] = ["20-22", "22-24", "24-26"];

pub const SALARY_EDGES: [f64; 5] = [0.0, 50_000.0, 100_000.0, 150_000.0, 200_000.0];
pub const SALARY_LABELS: [&str; 4] = ["< $50K", "$50K - $100K", "$100K - $150K", "> $150K"];

/// Shown wherever a value fell outside every interval.
pub const UNBINNED_LABEL: &str = "n/a";

/// Age_Group buckets.
pub fn age_buckets() -> Result<Buckets, DashboardError> {
    Buckets::new(AGE_EDGES.to_vec(), AGE_LABELS)
}

/// Salary_Range buckets.
pub fn salary_buckets() -> Result<Buckets, DashboardError> {
    Buckets::new(SALARY_EDGES.to_vec(), SALARY_LABELS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn age_boundaries_are_left_inclusive() {
        let b = age_buckets().unwrap();
        assert_eq!(b.assign(20.0), Some("20-22"));
        assert_eq!(b.assign(21.999), Some("20-22"));
        assert_eq!(b.assign(22.0), Some("22-24"));
        assert_eq!(b.assign(24.0), Some("24-26"));
        assert_eq!(b.assign(25.5), Some("24-26"));
    }

    #[test]
    fn salary_boundaries_are_left_inclusive() {
        let b = salary_buckets().unwrap();
        assert_eq!(b.assign(0.0), Some("< $50K"));
        assert_eq!(b.assign(49_999.99), Some("< $50K"));
        assert_eq!(b.assign(50_000.0), Some("$50K - $100K"));
        assert_eq!(b.assign(100_000.0), Some("$100K - $150K"));
        assert_eq!(b.assign(150_000.0), Some("> $150K"));
        assert_eq!(b.assign(199_999.0), Some("> $150K"));
    }

    #[test]
    fn out_of_range_values_have_no_label() {
        let age = age_buckets().unwrap();
        assert_eq!(age.assign(19.9), None);
        assert_eq!(age.assign(26.0), None);
        assert_eq!(age.assign(f64::NAN), None);

        let salary = salary_buckets().unwrap();
        assert_eq!(salary.assign(-1.0), None);
        assert_eq!(salary.assign(200_000.0), None);
        assert_eq!(salary.assign(f64::INFINITY), None);
    }

    #[test]
    fn new_rejects_mismatched_tables() {
        assert!(Buckets::new(vec![0.0, 1.0], ["a", "b"]).is_err());
        assert!(Buckets::new(vec![0.0, 0.0, 1.0], ["a", "b"]).is_err());
        assert!(Buckets::new(vec![2.0, 1.0], ["a"]).is_err());
        assert!(Buckets::new(vec![0.0], Vec::<String>::new()).is_err());
        assert!(matches!(
            Buckets::new(vec![0.0, f64::NAN], ["a"]),
            Err(DashboardError::InvalidBuckets(_))
        ));
    }

    #[test]
    fn fixed_tables_are_valid() {
        let age = age_buckets().unwrap();
        assert_eq!(age.labels(), AGE_LABELS);
        let salary = salary_buckets().unwrap();
        assert_eq!(salary.labels(), SALARY_LABELS);
    }

    proptest! {
        #[test]
        fn age_matches_containing_interval(a in 15.0f64..30.0) {
            let expected = AGE_EDGES
                .windows(2)
                .position(|w| w[0] <= a && a < w[1])
                .map(|i| AGE_LABELS[i]);
            let buckets = age_buckets().unwrap();
            prop_assert_eq!(buckets.assign(a), expected);
        }

        #[test]
        fn salary_matches_containing_interval(s in -10_000.0f64..250_000.0) {
            let expected = SALARY_EDGES
                .windows(2)
                .position(|w| w[0] <= s && s < w[1])
                .map(|i| SALARY_LABELS[i]);
            let buckets = salary_buckets().unwrap();
            prop_assert_eq!(buckets.assign(s), expected);
        }

        #[test]
        fn integer_salaries_at_edges_go_up(k in 1usize..4) {
            let edge = SALARY_EDGES[k];
            let buckets = salary_buckets().unwrap();
            prop_assert_eq!(buckets.assign(edge), Some(SALARY_LABELS[k]));
        }
    }
}
