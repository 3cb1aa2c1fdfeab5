use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

use super::bucket::{age_buckets, salary_buckets, Buckets};

// ---------------------------------------------------------------------------
// CareerRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single student record. Field names follow the CSV headers; columns
/// outside this set are ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecord {
    #[serde(rename = "Student_ID", default)]
    pub student_id: Option<String>,
    #[serde(rename = "Age")]
    pub age: f64,
    #[serde(rename = "High_School_GPA")]
    pub high_school_gpa: f64,
    #[serde(rename = "SAT_Score")]
    pub sat_score: f64,
    #[serde(rename = "University_GPA")]
    pub university_gpa: f64,
    #[serde(rename = "Field_of_Study")]
    pub field_of_study: String,
    #[serde(rename = "Internships_Completed")]
    pub internships_completed: u32,
    #[serde(rename = "Job_Offers")]
    pub job_offers: u32,
    #[serde(rename = "Starting_Salary")]
    pub starting_salary: f64,
    #[serde(rename = "Current_Job_Level")]
    pub current_job_level: String,
}

// ---------------------------------------------------------------------------
// Derived columns
// ---------------------------------------------------------------------------

/// Per-record bucket labels. `None` when the value sits outside every bucket.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DerivedColumns {
    pub age_group: Option<String>,
    pub salary_range: Option<String>,
}

impl DerivedColumns {
    /// Derive both labels from a record's own numeric fields.
    pub fn compute(record: &CareerRecord, age: &Buckets, salary: &Buckets) -> Self {
        DerivedColumns {
            age_group: age.assign(record.age).map(str::to_string),
            salary_range: salary.assign(record.starting_salary).map(str::to_string),
        }
    }
}

// ---------------------------------------------------------------------------
// CareerDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with derived columns and facet options.
#[derive(Debug, Clone)]
pub struct CareerDataset {
    /// All records (rows).
    pub records: Vec<CareerRecord>,
    /// Derived columns, parallel to `records`.
    pub derived: Vec<DerivedColumns>,
    /// Distinct `Field_of_Study` values in order of first appearance.
    pub fields_of_study: Vec<String>,
    /// Distinct `Current_Job_Level` values in order of first appearance.
    pub job_levels: Vec<String>,
}

impl CareerDataset {
    /// Derive the bucket columns and collect facet options.
    pub fn from_records(records: Vec<CareerRecord>) -> Result<Self, DashboardError> {
        let age = age_buckets()?;
        let salary = salary_buckets()?;

        let derived = records
            .iter()
            .map(|r| DerivedColumns::compute(r, &age, &salary))
            .collect();

        let fields_of_study = unique_in_order(records.iter().map(|r| r.field_of_study.as_str()));
        let job_levels = unique_in_order(records.iter().map(|r| r.current_job_level.as_str()));

        Ok(CareerDataset {
            records,
            derived,
            fields_of_study,
            job_levels,
        })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn unique_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Compact constructor shared by the data-layer tests.
    pub(crate) fn record(field: &str, level: &str, salary: f64, gpa: f64) -> CareerRecord {
        CareerRecord {
            student_id: None,
            age: 23.0,
            high_school_gpa: 3.4,
            sat_score: 1300.0,
            university_gpa: gpa,
            field_of_study: field.to_string(),
            internships_completed: 1,
            job_offers: 2,
            starting_salary: salary,
            current_job_level: level.to_string(),
        }
    }

    #[test]
    fn facets_keep_first_appearance_order() {
        let ds = CareerDataset::from_records(vec![
            record("Medicine", "Mid", 70_000.0, 3.1),
            record("Arts", "Entry", 40_000.0, 2.9),
            record("Medicine", "Senior", 120_000.0, 3.8),
            record("Law", "Entry", 55_000.0, 3.3),
        ])
        .unwrap();
        assert_eq!(ds.fields_of_study, ["Medicine", "Arts", "Law"]);
        assert_eq!(ds.job_levels, ["Mid", "Entry", "Senior"]);
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn derived_columns_follow_each_record() {
        let mut young = record("Arts", "Entry", 50_000.0, 3.0);
        young.age = 22.0;
        let mut old = record("Arts", "Entry", 200_000.0, 3.0);
        old.age = 26.0;

        let ds = CareerDataset::from_records(vec![young, old]).unwrap();
        assert_eq!(ds.derived[0].age_group.as_deref(), Some("22-24"));
        assert_eq!(ds.derived[0].salary_range.as_deref(), Some("$50K - $100K"));
        assert_eq!(ds.derived[1], DerivedColumns::default());
    }
}
