use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use career_dash::data::bucket::{age_buckets, salary_buckets, Buckets, UNBINNED_LABEL};
use career_dash::data::model::CareerRecord;
use clap::Parser;
use parquet::arrow::ArrowWriter;

/// Write a deterministic synthetic education/career dataset.
#[derive(Parser, Debug)]
#[command(name = "generate_sample")]
struct Args {
    /// Output path; `.parquet` writes Parquet, anything else CSV
    #[arg(default_value = "sample_career_data.csv")]
    output: PathBuf,

    /// Overwrite the output file if it already exists
    #[arg(short, long)]
    force: bool,

    /// Number of records
    #[arg(short, long, default_value_t = 5000)]
    rows: usize,

    /// PRNG seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
}

/// (field of study, base salary)
const FIELDS: [(&str, f64); 7] = [
    ("Arts", 42_000.0),
    ("Business", 58_000.0),
    ("Computer Science", 72_000.0),
    ("Engineering", 68_000.0),
    ("Law", 62_000.0),
    ("Mathematics", 60_000.0),
    ("Medicine", 70_000.0),
];

/// (job level, cumulative probability, salary multiplier)
const LEVELS: [(&str, f64, f64); 4] = [
    ("Entry", 0.50, 1.00),
    ("Mid", 0.80, 1.35),
    ("Senior", 0.95, 1.80),
    ("Executive", 1.00, 2.40),
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn round_to(v: f64, step: f64) -> f64 {
    (v / step).round() * step
}

fn generate_record(id: usize, rng: &mut SimpleRng) -> CareerRecord {
    let (field, base) = FIELDS[rng.below(FIELDS.len() as u64) as usize];

    let roll = rng.next_f64();
    let (level, _, multiplier) = LEVELS
        .iter()
        .copied()
        .find(|(_, cum, _)| roll < *cum)
        .unwrap_or(LEVELS[0]);

    let high_school_gpa = round_to(rng.range(2.0, 4.0), 0.01);
    let university_gpa = round_to((high_school_gpa + rng.gauss(0.0, 0.3)).clamp(2.0, 4.0), 0.01);
    let sat_score = round_to(900.0 + (high_school_gpa - 2.0) * 200.0 + rng.gauss(0.0, 80.0), 1.0)
        .clamp(900.0, 1600.0);
    let internships_completed = rng.below(5) as u32;
    let job_offers = rng.below(10) as u32;

    // Ages run a year past the last Age_Group edge so some rows stay unbinned.
    let age = (19 + rng.below(9)) as f64;

    let salary = base * multiplier
        + (university_gpa - 3.0) * 9_000.0
        + internships_completed as f64 * 3_500.0
        + rng.gauss(0.0, 8_000.0);
    let starting_salary = round_to(salary.max(20_000.0), 100.0);

    CareerRecord {
        student_id: Some(format!("S{:05}", id + 1)),
        age,
        high_school_gpa,
        sat_score,
        university_gpa,
        field_of_study: field.to_string(),
        internships_completed,
        job_offers,
        starting_salary,
        current_job_level: level.to_string(),
    }
}

fn write_csv(path: &Path, records: &[CareerRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV output")?;
    for rec in records {
        writer.serialize(rec).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV output")?;
    Ok(())
}

fn write_parquet(path: &Path, records: &[CareerRecord]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Student_ID", DataType::Utf8, true),
        Field::new("Age", DataType::Int64, false),
        Field::new("High_School_GPA", DataType::Float64, false),
        Field::new("SAT_Score", DataType::Int64, false),
        Field::new("University_GPA", DataType::Float64, false),
        Field::new("Field_of_Study", DataType::Utf8, false),
        Field::new("Internships_Completed", DataType::Int64, false),
        Field::new("Job_Offers", DataType::Int64, false),
        Field::new("Starting_Salary", DataType::Float64, false),
        Field::new("Current_Job_Level", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(
                records.iter().map(|r| r.student_id.clone()).collect::<Vec<_>>(),
            )),
            Arc::new(Int64Array::from(
                records.iter().map(|r| r.age as i64).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(
                records.iter().map(|r| r.high_school_gpa).collect::<Vec<_>>(),
            )),
            Arc::new(Int64Array::from(
                records.iter().map(|r| r.sat_score as i64).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(
                records.iter().map(|r| r.university_gpa).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                records.iter().map(|r| r.field_of_study.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(Int64Array::from(
                records.iter().map(|r| r.internships_completed as i64).collect::<Vec<_>>(),
            )),
            Arc::new(Int64Array::from(
                records.iter().map(|r| r.job_offers as i64).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(
                records.iter().map(|r| r.starting_salary).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                records.iter().map(|r| r.current_job_level.as_str()).collect::<Vec<_>>(),
            )),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating Parquet output")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating Parquet writer")?;
    writer.write(&batch).context("writing record batch")?;
    writer.close().context("closing Parquet writer")?;
    Ok(())
}

/// Refuse to clobber an existing file (e.g. the real dataset) unless forced.
fn check_output(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        );
    }
    Ok(())
}

/// Records per bucket label in interval order, unbinned values last.
fn bucket_counts(buckets: &Buckets, values: impl Iterator<Item = f64>) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(buckets.assign(v).unwrap_or(UNBINNED_LABEL)).or_insert(0) += 1;
    }
    buckets
        .labels()
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(UNBINNED_LABEL))
        .filter_map(|label| counts.get(label).map(|&n| (label.to_string(), n)))
        .collect()
}

fn print_counts(name: &str, counts: &[(String, usize)]) {
    let line: Vec<String> = counts.iter().map(|(l, n)| format!("{l}: {n}")).collect();
    println!("  {name:<13} {}", line.join(", "));
}

fn main() -> Result<()> {
    let args = Args::parse();
    check_output(&args.output, args.force)?;

    let mut rng = SimpleRng::new(args.seed);

    let records: Vec<CareerRecord> = (0..args.rows)
        .map(|i| generate_record(i, &mut rng))
        .collect();

    let is_parquet = args
        .output
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("parquet") || e.eq_ignore_ascii_case("pq"));

    if is_parquet {
        write_parquet(&args.output, &records)?;
    } else {
        write_csv(&args.output, &records)?;
    }

    let by_age = bucket_counts(&age_buckets()?, records.iter().map(|r| r.age));
    let by_salary = bucket_counts(&salary_buckets()?, records.iter().map(|r| r.starting_salary));
    println!(
        "Wrote {} records to {} (seed {})",
        records.len(),
        args.output.display(),
        args.seed
    );
    print_counts("Age_Group:", &by_age);
    print_counts("Salary_Range:", &by_salary);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_is_not_the_dashboard_dataset() {
        let args = Args::parse_from(["generate_sample"]);
        assert_eq!(args.output, PathBuf::from("sample_career_data.csv"));
        assert!(!args.force);
    }

    #[test]
    fn existing_output_needs_force() {
        let path = std::env::temp_dir().join(format!(
            "career_dash_generate_{}.csv",
            std::process::id()
        ));
        std::fs::write(&path, "Student_ID\n").unwrap();

        let err = check_output(&path, false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert!(check_output(&path, true).is_ok());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Student_ID\n");

        std::fs::remove_file(&path).unwrap();
        assert!(check_output(&path, false).is_ok());
    }

    #[test]
    fn counts_follow_interval_order() {
        let salary = salary_buckets().unwrap();
        let counts = bucket_counts(&salary, [250_000.0, 160_000.0, 10_000.0, 12_000.0].into_iter());
        assert_eq!(
            counts,
            vec![
                ("< $50K".to_string(), 2),
                ("> $150K".to_string(), 1),
                (UNBINNED_LABEL.to_string(), 1),
            ]
        );
    }
}
