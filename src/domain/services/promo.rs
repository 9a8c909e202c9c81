use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::models::promo_code::{PromoCode, PROMO_KIND_FLAT, PROMO_KIND_PERCENTAGE};

/// Why a promo code did not apply. A rejection aborts the whole booking;
/// there is no silent fallback to an undiscounted total.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PromoRejection {
    #[error("Invalid promo code")]
    InvalidCode,
    #[error("This promo code is no longer active")]
    Inactive,
    #[error("This promo code has expired")]
    Expired,
    #[error("Minimum booking amount of ${0} required for this promo code")]
    BelowMinimum(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PromoQuote {
    pub discount: f64,
    pub final_amount: f64,
}

/// Half-up rounding to cents for currency display and storage.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Evaluates a promo code against a subtotal at a given instant.
///
/// Pure function of (promo row, subtotal, now) so the preview endpoint and
/// the booking transaction cannot disagree. `promo` is `None` when the code
/// did not resolve to a row.
///
/// Flat discounts are deliberately not clamped against the subtotal; the
/// seeded codes keep `min_amount` at or above the flat value.
pub fn evaluate(
    promo: Option<&PromoCode>,
    subtotal: f64,
    now: DateTime<Utc>,
) -> Result<PromoQuote, PromoRejection> {
    let promo = promo.ok_or(PromoRejection::InvalidCode)?;

    if !promo.is_active {
        return Err(PromoRejection::Inactive);
    }

    if let Some(expires_at) = promo.expires_at
        && expires_at < now {
        return Err(PromoRejection::Expired);
    }

    if subtotal < promo.min_amount {
        return Err(PromoRejection::BelowMinimum(promo.min_amount));
    }

    let discount = match promo.kind.as_str() {
        PROMO_KIND_PERCENTAGE => {
            let raw = subtotal * promo.value / 100.0;
            match promo.max_discount {
                Some(cap) if raw > cap => cap,
                _ => raw,
            }
        }
        PROMO_KIND_FLAT => promo.value,
        _ => 0.0,
    };

    // Round the discount first and derive the final amount from the rounded
    // value, so discount + final_amount always reconstructs the subtotal and
    // every caller of the quote settles on the same cents.
    let discount = round_cents(discount);
    Ok(PromoQuote {
        discount,
        final_amount: round_cents(subtotal - discount),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn percentage(value: f64, min_amount: f64, max_discount: Option<f64>) -> PromoCode {
        PromoCode::new("SAVE10", PROMO_KIND_PERCENTAGE, value, min_amount, max_discount, None)
    }

    #[test]
    fn test_percentage_discount_no_cap() {
        let promo = percentage(10.0, 100.0, None);
        let quote = evaluate(Some(&promo), 100.0, Utc::now()).unwrap();
        assert_eq!(quote.discount, 10.0);
        assert_eq!(quote.final_amount, 90.0);
    }

    #[test]
    fn test_percentage_discount_clamped_to_cap() {
        let promo = percentage(20.0, 200.0, Some(500.0));
        let quote = evaluate(Some(&promo), 5000.0, Utc::now()).unwrap();
        assert_eq!(quote.discount, 500.0, "20% of 5000 is 1000, cap is 500");
        assert_eq!(quote.final_amount, 4500.0);
    }

    #[test]
    fn test_below_minimum_rejected() {
        let promo = percentage(20.0, 200.0, Some(500.0));
        let err = evaluate(Some(&promo), 150.0, Utc::now()).unwrap_err();
        assert_eq!(err, PromoRejection::BelowMinimum(200.0));
    }

    #[test]
    fn test_subtotal_exactly_at_minimum_applies() {
        let promo = percentage(20.0, 200.0, None);
        let quote = evaluate(Some(&promo), 200.0, Utc::now()).unwrap();
        assert_eq!(quote.discount, 40.0);
    }

    #[test]
    fn test_flat_discount() {
        let promo = PromoCode::new("FLAT100", PROMO_KIND_FLAT, 100.0, 500.0, None, None);
        let quote = evaluate(Some(&promo), 500.0, Utc::now()).unwrap();
        assert_eq!(quote.discount, 100.0);
        assert_eq!(quote.final_amount, 400.0);
    }

    #[test]
    fn test_unknown_code_rejected() {
        let err = evaluate(None, 100.0, Utc::now()).unwrap_err();
        assert_eq!(err, PromoRejection::InvalidCode);
    }

    #[test]
    fn test_inactive_rejected_before_expiry_check() {
        let mut promo = percentage(10.0, 0.0, None);
        promo.is_active = false;
        promo.expires_at = Some(Utc::now() - Duration::days(1));
        let err = evaluate(Some(&promo), 100.0, Utc::now()).unwrap_err();
        assert_eq!(err, PromoRejection::Inactive);
    }

    #[test]
    fn test_expired_strictly_before_now() {
        let now = Utc::now();
        let mut promo = percentage(10.0, 0.0, None);

        promo.expires_at = Some(now - Duration::seconds(1));
        assert_eq!(evaluate(Some(&promo), 100.0, now).unwrap_err(), PromoRejection::Expired);

        // An expiry exactly at evaluation time is still valid.
        promo.expires_at = Some(now);
        assert!(evaluate(Some(&promo), 100.0, now).is_ok());
    }

    #[test]
    fn test_rounding_half_up_to_cents() {
        let promo = percentage(15.0, 0.0, None);
        // 15% of 33.33 = 4.9995 -> 5.00
        let quote = evaluate(Some(&promo), 33.33, Utc::now()).unwrap();
        assert_eq!(quote.discount, 5.0);
        assert_eq!(quote.final_amount, 28.33);
    }

    #[test]
    fn test_quote_reconstructs_subtotal_at_half_cent_tie() {
        // 12.5% of 17.00 is 2.125, a half-cent tie. The discount rounds up
        // to 2.13 and the final amount must be derived from that rounded
        // figure, not from the raw 2.125.
        let promo = percentage(12.5, 0.0, None);
        let quote = evaluate(Some(&promo), 17.0, Utc::now()).unwrap();
        assert_eq!(quote.discount, 2.13);
        assert_eq!(quote.final_amount, 14.87);
        assert_eq!(round_cents(quote.discount + quote.final_amount), 17.0);
    }

    #[test]
    fn test_deterministic_for_fixed_inputs() {
        let promo = percentage(10.0, 100.0, None);
        let now = Utc::now();
        let a = evaluate(Some(&promo), 123.45, now).unwrap();
        let b = evaluate(Some(&promo), 123.45, now).unwrap();
        assert_eq!(a, b);
    }
}
