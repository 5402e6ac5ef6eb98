use super::domain::PackageRecord;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read package export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid package CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Loads package records from a CSV export with a header row.
pub struct PackageCsvImporter;

impl PackageCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<PackageRecord>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<PackageRecord>, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        let mut records = Vec::new();

        for row in csv_reader.deserialize::<PackageRow>() {
            records.push(row?.into());
        }

        Ok(records)
    }
}

#[derive(Debug, Deserialize)]
struct PackageRow {
    package_id: String,
    employee_id: String,
    #[serde(rename = "model")]
    model_code: String,
    #[serde(rename = "route")]
    route_code: String,
    start_time: String,
    end_time: String,
    #[serde(rename = "result")]
    result_label: String,
    #[serde(rename = "number")]
    count_field: String,
    #[serde(rename = "status")]
    status_flag: String,
    #[serde(default, deserialize_with = "missing_as_empty")]
    comments: String,
}

impl From<PackageRow> for PackageRecord {
    fn from(row: PackageRow) -> Self {
        PackageRecord {
            package_id: row.package_id,
            employee_id: row.employee_id,
            model_code: row.model_code,
            route_code: row.route_code,
            start_time: row.start_time,
            end_time: row.end_time,
            result_label: row.result_label,
            count_field: row.count_field,
            status_flag: row.status_flag,
            comments: row.comments,
        }
    }
}

fn missing_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
