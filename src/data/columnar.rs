//! Parquet decoding. Desktop builds only; the browser build reads CSV and JSON.

use anyhow::{bail, Context, Result};
use arrow::array::{
    Array, ArrayRef, Float32Array, Float64Array, Int32Array, Int64Array, LargeStringArray,
    StringArray, UInt32Array, UInt64Array,
};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use bytes::Bytes;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::model::CareerRecord;

/// Decode an in-memory Parquet file of career records.
///
/// Numeric columns may be stored as Int32, Int64, UInt32, UInt64, Float32 or
/// Float64; categorical columns as Utf8 or LargeUtf8. `Student_ID` is optional
/// and may be either a string or an integer column.
pub fn read_parquet(data: Bytes) -> Result<Vec<CareerRecord>> {
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(data).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        records.extend(records_from_batch(&batch)?);
    }
    Ok(records)
}

fn records_from_batch(batch: &RecordBatch) -> Result<Vec<CareerRecord>> {
    let student_id = batch.column_by_name("Student_ID");
    let age = required(batch, "Age")?;
    let hs_gpa = required(batch, "High_School_GPA")?;
    let sat = required(batch, "SAT_Score")?;
    let uni_gpa = required(batch, "University_GPA")?;
    let field = required(batch, "Field_of_Study")?;
    let internships = required(batch, "Internships_Completed")?;
    let offers = required(batch, "Job_Offers")?;
    let salary = required(batch, "Starting_Salary")?;
    let level = required(batch, "Current_Job_Level")?;

    (0..batch.num_rows())
        .map(|row| {
            let rec = CareerRecord {
                student_id: match student_id {
                    Some(col) if !col.is_null(row) => Some(cell_to_string(col, row)?),
                    _ => None,
                },
                age: cell_f64(age, row)?,
                high_school_gpa: cell_f64(hs_gpa, row)?,
                sat_score: cell_f64(sat, row)?,
                university_gpa: cell_f64(uni_gpa, row)?,
                field_of_study: cell_str(field, row)?,
                internships_completed: cell_count(internships, row)?,
                job_offers: cell_count(offers, row)?,
                starting_salary: cell_f64(salary, row)?,
                current_job_level: cell_str(level, row)?,
            };
            Ok(rec)
        })
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("batch of {} rows", batch.num_rows()))
}

// -- Arrow cell helpers --

fn required<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef> {
    batch
        .column_by_name(name)
        .with_context(|| format!("Parquet file missing '{name}' column"))
}

/// Read a numeric cell as `f64`. Nulls become NaN, which the means skip.
fn cell_f64(col: &ArrayRef, row: usize) -> Result<f64> {
    if col.is_null(row) {
        return Ok(f64::NAN);
    }
    let v = match col.data_type() {
        DataType::Float64 => downcast::<Float64Array>(col)?.value(row),
        DataType::Float32 => downcast::<Float32Array>(col)?.value(row) as f64,
        DataType::Int64 => downcast::<Int64Array>(col)?.value(row) as f64,
        DataType::Int32 => downcast::<Int32Array>(col)?.value(row) as f64,
        DataType::UInt64 => downcast::<UInt64Array>(col)?.value(row) as f64,
        DataType::UInt32 => downcast::<UInt32Array>(col)?.value(row) as f64,
        other => bail!("Row {row}: expected a numeric column, got {other:?}"),
    };
    Ok(v)
}

/// Read a non-negative integer cell.
fn cell_count(col: &ArrayRef, row: usize) -> Result<u32> {
    if col.is_null(row) {
        bail!("Row {row}: null in count column");
    }
    let v: i64 = match col.data_type() {
        DataType::Int64 => downcast::<Int64Array>(col)?.value(row),
        DataType::Int32 => downcast::<Int32Array>(col)?.value(row) as i64,
        DataType::UInt32 => downcast::<UInt32Array>(col)?.value(row) as i64,
        DataType::UInt64 => i64::try_from(downcast::<UInt64Array>(col)?.value(row))
            .with_context(|| format!("Row {row}: count out of range"))?,
        DataType::Float64 | DataType::Float32 => {
            let f = cell_f64(col, row)?;
            if f.fract() != 0.0 {
                bail!("Row {row}: count {f} is not a whole number");
            }
            f as i64
        }
        other => bail!("Row {row}: expected an integer column, got {other:?}"),
    };
    u32::try_from(v).with_context(|| format!("Row {row}: count {v} out of range"))
}

fn cell_str(col: &ArrayRef, row: usize) -> Result<String> {
    if col.is_null(row) {
        return Ok(String::new());
    }
    match col.data_type() {
        DataType::Utf8 => Ok(downcast::<StringArray>(col)?.value(row).to_string()),
        DataType::LargeUtf8 => Ok(downcast::<LargeStringArray>(col)?.value(row).to_string()),
        other => bail!("Row {row}: expected a string column, got {other:?}"),
    }
}

fn cell_to_string(col: &ArrayRef, row: usize) -> Result<String> {
    match col.data_type() {
        DataType::Utf8 | DataType::LargeUtf8 => cell_str(col, row),
        DataType::Int64 | DataType::Int32 | DataType::UInt32 | DataType::UInt64 => {
            cell_f64(col, row).map(|v| format!("{v:.0}"))
        }
        other => bail!("Row {row}: unsupported id column type {other:?}"),
    }
}

fn downcast<T: 'static>(col: &ArrayRef) -> Result<&T> {
    col.as_any()
        .downcast_ref::<T>()
        .with_context(|| format!("unexpected array layout for {:?}", col.data_type()))
}
