// ============================================================
// HEADER NORMALIZATION
// ============================================================
// Turn the raw header row into unique, non-empty column names

use csv::StringRecord;
use std::collections::{HashMap, HashSet};

/// Build column names from a header record.
///
/// - Empty names become `Unnamed: {position}`
/// - Repeated names get `.1`, `.2`, ... appended, skipping names already taken
pub fn normalize_headers(raw: &StringRecord) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut suffixes: HashMap<String, usize> = HashMap::new();
    let mut columns = Vec::with_capacity(raw.len());

    for (position, name) in raw.iter().enumerate() {
        let base = if name.is_empty() {
            format!("Unnamed: {}", position)
        } else {
            name.to_string()
        };

        if taken.insert(base.clone()) {
            columns.push(base);
            continue;
        }

        let counter = suffixes.entry(base.clone()).or_insert(0);
        loop {
            *counter += 1;
            let candidate = format!("{}.{}", base, counter);
            if taken.insert(candidate.clone()) {
                columns.push(candidate);
                break;
            }
        }
    }

    columns
}
