use tredsmock_core::{CounterpartyIdentifiers, DirectoryEntry};

#[test]
fn directory_entry_deserializes_from_the_upstream_export() {
    let raw = r#"{
        "buyer_name": "Dabur India Ltd.",
        "buyer_pan": "AAACD0474C,AAACD0474D",
        "buyer_gstin": "07AAACD0474C1Z4",
        "supplier_pan": "AAJCT1234F",
        "supplier_gstin": "27AAJCT1234F1Z5"
    }"#;
    let entry: DirectoryEntry = serde_json::from_str(raw).expect("parse entry");
    assert_eq!(entry.buyer_name, "Dabur India Ltd.");

    let identifiers = CounterpartyIdentifiers::from_entry(&entry);
    assert_eq!(identifiers.buyer_pan.len(), 2);
    assert_eq!(identifiers.supplier_gstin, vec!["27AAJCT1234F1Z5"]);
}

#[test]
fn directory_entry_round_trips() {
    let entry = DirectoryEntry {
        buyer_name: "Dabur India Ltd.".to_string(),
        buyer_pan: "AAACD0474C".to_string(),
        buyer_gstin: "07AAACD0474C1Z4".to_string(),
        supplier_pan: "AAJCT1234F".to_string(),
        supplier_gstin: "27AAJCT1234F1Z5".to_string(),
    };
    let raw = serde_json::to_string(&entry).expect("serialize entry");
    let back: DirectoryEntry = serde_json::from_str(&raw).expect("parse entry");
    assert_eq!(back.buyer_pan, entry.buyer_pan);
    assert_eq!(back.buyer_name, entry.buyer_name);
}
