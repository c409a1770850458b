use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Upper bound on rows per identifier combination accepted from user input.
pub const MAX_RECORD_COUNT: u32 = 100;

/// Upstream feed the synthesized records imitate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceType {
    C2fo,
    Erp,
    BuyerSelfUpload,
}

impl InvoiceType {
    /// User-facing label, also the value written into document numbers.
    pub fn label(self) -> &'static str {
        match self {
            InvoiceType::C2fo => "C2FO",
            InvoiceType::Erp => "ERP",
            InvoiceType::BuyerSelfUpload => "Buyer Self Upload",
        }
    }
}

impl fmt::Display for InvoiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InvoiceType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim() {
            "" => Err(Error::Validation("invoice type is required".to_string())),
            "C2FO" => Ok(InvoiceType::C2fo),
            "ERP" => Ok(InvoiceType::Erp),
            "Buyer Self Upload" | "BuyerSelfUpload" => Ok(InvoiceType::BuyerSelfUpload),
            other => Err(Error::Validation(format!(
                "unknown invoice type '{other}'"
            ))),
        }
    }
}

/// Financing product flag carried through to the output rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    RfdDueDate,
    BiFactoring,
    Normal,
}

impl ProductType {
    pub fn label(self) -> &'static str {
        match self {
            ProductType::RfdDueDate => "RFDDueDate",
            ProductType::BiFactoring => "BIFactoring",
            ProductType::Normal => "Normal",
        }
    }

    /// Value written into the `product_type` column. `Normal` means "no
    /// special product flag" and is emitted as an empty string.
    pub fn output(self) -> &'static str {
        match self {
            ProductType::Normal => "",
            other => other.label(),
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProductType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim() {
            "" => Err(Error::Validation("product type is required".to_string())),
            "RFDDueDate" => Ok(ProductType::RfdDueDate),
            "BIFactoring" => Ok(ProductType::BiFactoring),
            "Normal" => Ok(ProductType::Normal),
            other => Err(Error::Validation(format!(
                "unknown product type '{other}'"
            ))),
        }
    }
}

/// Validated parameter set for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub invoice_type: InvoiceType,
    pub product_type: ProductType,
    pub record_count: u32,
}

impl GenerationParameters {
    pub fn new(
        invoice_type: InvoiceType,
        product_type: ProductType,
        record_count: u32,
    ) -> Result<Self> {
        let params = Self {
            invoice_type,
            product_type,
            record_count,
        };
        params.validate()?;
        Ok(params)
    }

    /// Build a parameter set from raw user input, as collected by a form or
    /// command line.
    pub fn from_raw(invoice_type: &str, product_type: &str, record_count: u32) -> Result<Self> {
        Self::new(invoice_type.parse()?, product_type.parse()?, record_count)
    }

    pub fn validate(&self) -> Result<()> {
        if self.record_count == 0 {
            return Err(Error::Validation(
                "record count must be at least 1".to_string(),
            ));
        }
        if self.record_count > MAX_RECORD_COUNT {
            return Err(Error::Validation(format!(
                "record count must not exceed {MAX_RECORD_COUNT}"
            )));
        }
        Ok(())
    }
}
