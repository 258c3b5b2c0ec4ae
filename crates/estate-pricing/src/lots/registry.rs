use super::domain::{Lot, LotOptions};
use super::loader::{parse_csv, parse_json, DatasetFormat};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to read lot dataset {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid lot JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid lot CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("lot {building}-{number} appears more than once")]
    DuplicateLot { building: String, number: u32 },
    #[error("lot {building}-{number} has non-positive area {area}")]
    InvalidArea {
        building: String,
        number: u32,
        area: f64,
    },
}

/// Read-only index of every sellable lot, keyed by building and unit number.
///
/// Built once before the service starts accepting requests and shared behind
/// an `Arc`; nothing mutates it afterwards.
#[derive(Debug, Default)]
pub struct LotRegistry {
    buildings: BTreeMap<String, BTreeMap<u32, Lot>>,
    len: usize,
}

impl LotRegistry {
    pub fn from_lots(lots: Vec<Lot>) -> Result<Self, RegistryError> {
        let mut buildings: BTreeMap<String, BTreeMap<u32, Lot>> = BTreeMap::new();
        let mut len = 0;

        for lot in lots {
            if !lot.area.is_finite() || lot.area <= 0.0 {
                return Err(RegistryError::InvalidArea {
                    building: lot.building,
                    number: lot.number,
                    area: lot.area,
                });
            }

            let by_number = buildings.entry(lot.building.clone()).or_default();
            if by_number.contains_key(&lot.number) {
                return Err(RegistryError::DuplicateLot {
                    building: lot.building,
                    number: lot.number,
                });
            }
            by_number.insert(lot.number, lot);
            len += 1;
        }

        Ok(Self { buildings, len })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let format = DatasetFormat::from_path(path);
        let registry = Self::from_reader(BufReader::new(file), format)?;

        info!(
            path = %path.display(),
            lots = registry.len(),
            buildings = registry.buildings.len(),
            "lot registry loaded"
        );

        Ok(registry)
    }

    pub fn from_reader<R: Read>(reader: R, format: DatasetFormat) -> Result<Self, RegistryError> {
        let lots = match format {
            DatasetFormat::Json => parse_json(reader)?,
            DatasetFormat::Csv => parse_csv(reader)?,
        };
        Self::from_lots(lots)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn find(&self, building: &str, number: u32) -> Option<&Lot> {
        self.buildings.get(building)?.get(&number)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lot> {
        self.buildings.values().flat_map(|by_number| by_number.values())
    }

    /// Buildings in name order, each with its lots in ascending unit number.
    pub fn list_by_building(&self) -> LotOptions {
        let lots = self
            .buildings
            .iter()
            .map(|(building, by_number)| {
                let summaries = by_number.values().map(Lot::summary).collect();
                (building.clone(), summaries)
            })
            .collect();

        LotOptions {
            buildings: self.buildings.keys().cloned().collect(),
            lots,
        }
    }
}
