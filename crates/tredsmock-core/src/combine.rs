use crate::counterparty::CounterpartyIdentifiers;

/// One resolved buyer/seller identifier tuple.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierCombination {
    pub buyer_pan: String,
    pub buyer_gstin: String,
    pub seller_pan: String,
    pub seller_gstin: String,
}

/// Cartesian product of the four identifier sets, buyer PAN outermost and
/// seller GSTIN innermost, preserving each set's input order. Tuples with an
/// empty value in any position are skipped; an empty result means the buyer
/// has no usable identifier configuration.
pub fn expand(identifiers: &CounterpartyIdentifiers) -> Vec<IdentifierCombination> {
    let mut combinations = Vec::new();
    for buyer_pan in &identifiers.buyer_pan {
        for buyer_gstin in &identifiers.buyer_gstin {
            for seller_pan in &identifiers.supplier_pan {
                for seller_gstin in &identifiers.supplier_gstin {
                    if buyer_pan.is_empty()
                        || buyer_gstin.is_empty()
                        || seller_pan.is_empty()
                        || seller_gstin.is_empty()
                    {
                        continue;
                    }
                    combinations.push(IdentifierCombination {
                        buyer_pan: buyer_pan.clone(),
                        buyer_gstin: buyer_gstin.clone(),
                        seller_pan: seller_pan.clone(),
                        seller_gstin: seller_gstin.clone(),
                    });
                }
            }
        }
    }
    combinations
}
