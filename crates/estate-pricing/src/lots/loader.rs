use super::domain::Lot;
use std::io::Read;
use std::path::Path;

/// On-disk layouts accepted for the lot dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// Array of lot records.
    Json,
    /// Spreadsheet export with one column per lot field.
    Csv,
}

impl DatasetFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

pub(crate) fn parse_json<R: Read>(reader: R) -> Result<Vec<Lot>, serde_json::Error> {
    serde_json::from_reader(reader)
}

pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<Lot>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<Lot>().collect()
}
