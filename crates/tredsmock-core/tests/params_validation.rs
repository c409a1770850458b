use tredsmock_core::{Error, GenerationParameters, InvoiceType, ProductType};

#[test]
fn accepts_labels_from_the_form() {
    let params = GenerationParameters::from_raw("C2FO", "Normal", 10).expect("valid params");
    assert_eq!(params.invoice_type, InvoiceType::C2fo);
    assert_eq!(params.product_type, ProductType::Normal);

    let params =
        GenerationParameters::from_raw("Buyer Self Upload", "BIFactoring", 1).expect("valid");
    assert_eq!(params.invoice_type, InvoiceType::BuyerSelfUpload);
    assert_eq!(params.product_type, ProductType::BiFactoring);
}

#[test]
fn empty_fields_are_rejected() {
    let err = GenerationParameters::from_raw("", "Normal", 1).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let err = GenerationParameters::from_raw("ERP", "", 1).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn unknown_labels_are_rejected() {
    assert!(GenerationParameters::from_raw("SAP", "Normal", 1).is_err());
    assert!(GenerationParameters::from_raw("ERP", "Reverse", 1).is_err());
}

#[test]
fn record_count_bounds_are_enforced() {
    assert!(GenerationParameters::from_raw("ERP", "Normal", 0).is_err());
    assert!(GenerationParameters::from_raw("ERP", "Normal", 101).is_err());
    assert!(GenerationParameters::from_raw("ERP", "Normal", 100).is_ok());
}

#[test]
fn normal_product_type_maps_to_empty_output() {
    assert_eq!(ProductType::Normal.output(), "");
    assert_eq!(ProductType::BiFactoring.output(), "BIFactoring");
    assert_eq!(ProductType::RfdDueDate.output(), "RFDDueDate");
}
