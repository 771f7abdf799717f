//! CSV-based policy constant loader
//!
//! Reads `key,value` rows from a CSV file such as
//! `data/assumptions/policy_constants.csv`. The `key,value` header row is
//! optional. Each key may appear once.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use super::AssumptionsError;

/// Default path to the policy constants file
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions/policy_constants.csv";

/// Load policy constant overrides from a CSV file
/// Returns HashMap<key, value>
pub fn load_policy_constants(path: &Path) -> Result<HashMap<String, f64>, AssumptionsError> {
    let file = File::open(path).map_err(|source| AssumptionsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_policy_constants_from_reader(file)
}

/// Load policy constant overrides from any reader
pub fn load_policy_constants_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<HashMap<String, f64>, AssumptionsError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut constants = HashMap::new();

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let key = record.get(0).unwrap_or_default();
        if index == 0 && key.eq_ignore_ascii_case("key") {
            continue;
        }

        let raw = record.get(1).unwrap_or_default();
        let value = raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| AssumptionsError::InvalidValue {
                key: key.to_string(),
                raw: raw.to_string(),
            })?;

        match constants.entry(key.to_string()) {
            Entry::Occupied(_) => return Err(AssumptionsError::DuplicateKey(key.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }

    Ok(constants)
}
