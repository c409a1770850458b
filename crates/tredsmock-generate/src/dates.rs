//! Per-invoice-type business-date policies.
//!
//! All draws are inclusive integer day offsets from the reference day,
//! independent per field unless a field is explicitly derived from another
//! (the Buyer Self Upload acceptance date).

use chrono::{Duration, NaiveDate};
use rand::Rng;

use tredsmock_core::InvoiceType;

use crate::model::C2foDateVariant;
use crate::random::int_in;

/// Business dates synthesized for one invoice row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSet {
    /// For Buyer Self Upload this doubles as the invoice date.
    pub posting: NaiveDate,
    pub grn: NaiveDate,
    /// For Buyer Self Upload this is the acceptance date.
    pub transaction: NaiveDate,
    pub payment_due: NaiveDate,
    /// Populated by the C2FO policies only.
    pub pay: Option<NaiveDate>,
}

/// Draw one date set for `invoice_type`, anchored at `today`.
pub fn synthesize<R: Rng + ?Sized>(
    invoice_type: InvoiceType,
    variant: C2foDateVariant,
    today: NaiveDate,
    rng: &mut R,
) -> DateSet {
    match invoice_type {
        InvoiceType::C2fo => c2fo(variant, today, rng),
        InvoiceType::Erp => erp(today, rng),
        InvoiceType::BuyerSelfUpload => buyer_self_upload(today, rng),
    }
}

fn days(count: i64) -> Duration {
    Duration::days(count)
}

fn c2fo<R: Rng + ?Sized>(variant: C2foDateVariant, today: NaiveDate, rng: &mut R) -> DateSet {
    let payment_due = today + days(int_in(rng, 1, 180));
    let grn_past_max = match variant {
        C2foDateVariant::Directory => 43,
        C2foDateVariant::Legacy => 29,
    };
    let grn = if rng.random_bool(0.5) {
        today - days(int_in(rng, 0, grn_past_max))
    } else {
        today + days(int_in(rng, 1, 180))
    };
    let pay = match variant {
        C2foDateVariant::Directory => payment_due,
        C2foDateVariant::Legacy => today - days(int_in(rng, 0, 179)),
    };
    DateSet {
        posting: today - days(int_in(rng, 0, 179)),
        grn,
        transaction: today - days(int_in(rng, 0, 179)),
        payment_due,
        pay: Some(pay),
    }
}

fn erp<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> DateSet {
    let payment_due = today + days(int_in(rng, 1, 180));
    let grn = if rng.random_bool(0.5) {
        today - days(int_in(rng, 1, 44))
    } else {
        today + days(int_in(rng, 1, 180))
    };
    DateSet {
        posting: today - days(int_in(rng, 1, 180)),
        grn,
        transaction: today - days(int_in(rng, 1, 180)),
        payment_due,
        pay: None,
    }
}

/// The acceptance date lands a few days after the invoice date but is
/// clamped to never pass `today` and never fall outside the 180-day
/// lookback.
fn buyer_self_upload<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> DateSet {
    let payment_due = today + days(int_in(rng, 1, 180));
    let grn = if rng.random_bool(0.5) {
        today - days(int_in(rng, 1, 44))
    } else {
        today + days(int_in(rng, 1, 180))
    };
    let posting = today - days(int_in(rng, 1, 180));
    let acceptance = (posting + days(int_in(rng, 1, 14)))
        .min(today)
        .max(today - days(180));
    DateSet {
        posting,
        grn,
        transaction: acceptance,
        payment_due,
        pay: None,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
    }

    #[test]
    fn c2fo_windows_hold() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            let set = c2fo(C2foDateVariant::Directory, today(), &mut rng);
            assert!(set.payment_due > today());
            assert!(set.payment_due <= today() + days(180));
            assert!(set.grn >= today() - days(43));
            assert!(set.grn <= today() + days(180));
            assert!(set.posting <= today() && set.posting >= today() - days(179));
            assert_eq!(set.pay, Some(set.payment_due));
        }
    }

    #[test]
    fn c2fo_legacy_grn_window_is_narrower() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            let set = c2fo(C2foDateVariant::Legacy, today(), &mut rng);
            if set.grn <= today() {
                assert!(set.grn >= today() - days(29));
            }
            let pay = set.pay.expect("c2fo pay date");
            assert!(pay <= today() && pay >= today() - days(179));
        }
    }

    #[test]
    fn erp_posting_and_transaction_are_strictly_past() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            let set = erp(today(), &mut rng);
            assert!(set.posting < today() && set.posting >= today() - days(180));
            assert!(set.transaction < today() && set.transaction >= today() - days(180));
            assert!(set.pay.is_none());
        }
    }

    #[test]
    fn acceptance_follows_invoice_date_within_clamps() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            let set = buyer_self_upload(today(), &mut rng);
            assert!(set.transaction >= set.posting);
            assert!(set.transaction <= today());
            assert!(set.transaction >= today() - days(180));
        }
    }
}
