/// Data layer: core types, loading, bucketing, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file or bytes → Vec<CareerRecord>
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ CareerDataset  │  records + Age_Group / Salary_Range (bucket)
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  facet selection → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  KPIs + grouped mean salaries → Summary
///   └───────────┘
/// ```

pub mod aggregate;
pub mod bucket;
#[cfg(not(target_arch = "wasm32"))]
pub mod columnar;
pub mod filter;
pub mod loader;
pub mod model;
