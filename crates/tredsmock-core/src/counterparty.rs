use serde::{Deserialize, Serialize};

/// One record of the externally supplied counterparty directory.
///
/// The upstream export packs multiple identifiers into each field as a
/// comma-separated string; [`CounterpartyIdentifiers::from_entry`] splits
/// them into sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub buyer_name: String,
    pub buyer_pan: String,
    pub buyer_gstin: String,
    pub supplier_pan: String,
    pub supplier_gstin: String,
}

/// Identifier sets for one buyer/supplier pairing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterpartyIdentifiers {
    pub buyer_name: String,
    pub buyer_pan: Vec<String>,
    pub buyer_gstin: Vec<String>,
    pub supplier_pan: Vec<String>,
    pub supplier_gstin: Vec<String>,
}

impl CounterpartyIdentifiers {
    /// Split a directory entry's comma-separated identifier fields into
    /// trimmed, non-empty sets.
    pub fn from_entry(entry: &DirectoryEntry) -> Self {
        Self {
            buyer_name: entry.buyer_name.trim().to_string(),
            buyer_pan: split_field(&entry.buyer_pan),
            buyer_gstin: split_field(&entry.buyer_gstin),
            supplier_pan: split_field(&entry.supplier_pan),
            supplier_gstin: split_field(&entry.supplier_gstin),
        }
    }

    /// Ad-hoc single-valued identifiers from direct entry.
    pub fn single(
        buyer_name: impl Into<String>,
        buyer_pan: impl Into<String>,
        buyer_gstin: impl Into<String>,
        supplier_pan: impl Into<String>,
        supplier_gstin: impl Into<String>,
    ) -> Self {
        Self {
            buyer_name: buyer_name.into(),
            buyer_pan: vec![buyer_pan.into()],
            buyer_gstin: vec![buyer_gstin.into()],
            supplier_pan: vec![supplier_pan.into()],
            supplier_gstin: vec![supplier_gstin.into()],
        }
    }
}

fn split_field(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_trims_and_drops_empties() {
        let entry = DirectoryEntry {
            buyer_name: " Dabur India Ltd. ".to_string(),
            buyer_pan: "AAACD0474C, AAACD0474D".to_string(),
            buyer_gstin: "07AAACD0474C1Z4,,".to_string(),
            supplier_pan: "AAJCT1234F".to_string(),
            supplier_gstin: " 27AAJCT1234F1Z5 ".to_string(),
        };
        let identifiers = CounterpartyIdentifiers::from_entry(&entry);
        assert_eq!(identifiers.buyer_name, "Dabur India Ltd.");
        assert_eq!(identifiers.buyer_pan, vec!["AAACD0474C", "AAACD0474D"]);
        assert_eq!(identifiers.buyer_gstin, vec!["07AAACD0474C1Z4"]);
        assert_eq!(identifiers.supplier_gstin, vec!["27AAJCT1234F1Z5"]);
    }
}
