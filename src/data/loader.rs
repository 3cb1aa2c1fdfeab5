use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::{CareerDataset, CareerRecord};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Supported input formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Header row with the `CareerRecord` column names (recommended)
    Csv,
    /// `[{ "Age": 23, "Starting_Salary": 61000, ... }, ...]`
    Json,
    /// Flat columns named like the CSV headers
    Parquet,
}

impl Format {
    /// Pick the format from a file name or URL path.
    pub fn from_name(name: &str) -> Result<Self> {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Ok(Format::Csv),
            "json" => Ok(Format::Json),
            "parquet" | "pq" => Ok(Format::Parquet),
            other => bail!("Unsupported file extension: .{other}"),
        }
    }
}

/// Load a career dataset from a file.  Dispatch by extension.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_file(path: &Path) -> Result<CareerDataset> {
    let format = Format::from_name(&path.to_string_lossy())?;
    let bytes =
        std::fs::read(path).with_context(|| format!("opening {}", path.display()))?;
    parse(format, &bytes)
}

/// Load a career dataset from file contents already in memory, e.g. a
/// download or a browser upload. `name` only selects the format.
pub fn load_bytes(name: &str, bytes: &[u8]) -> Result<CareerDataset> {
    parse(Format::from_name(name)?, bytes)
}

fn parse(format: Format, bytes: &[u8]) -> Result<CareerDataset> {
    let records = match format {
        Format::Csv => read_csv(bytes)?,
        Format::Json => parse_json(bytes)?,
        #[cfg(not(target_arch = "wasm32"))]
        Format::Parquet => {
            super::columnar::read_parquet(bytes::Bytes::copy_from_slice(bytes))?
        }
        #[cfg(target_arch = "wasm32")]
        Format::Parquet => bail!("Parquet files can only be opened in the desktop build"),
    };
    CareerDataset::from_records(records).context("deriving bucket columns")
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Deserialize records from CSV text with a header row. Columns that are not
/// part of `CareerRecord` are skipped.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<CareerRecord>> {
    let mut reader = csv::Reader::from_reader(reader);
    reader.headers().context("reading CSV headers")?;

    reader
        .deserialize()
        .enumerate()
        .map(|(row_no, result)| result.with_context(|| format!("CSV row {row_no}")))
        .collect()
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema, one object per record:
///
/// ```json
/// [
///   { "Age": 24, "University_GPA": 3.6, "Field_of_Study": "Medicine", ... },
///   ...
/// ]
/// ```
pub fn parse_json(bytes: &[u8]) -> Result<Vec<CareerRecord>> {
    serde_json::from_slice(bytes).context("parsing JSON records")
}
