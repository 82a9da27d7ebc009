use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Calculates the mandatory default-insurance premium (CMHC-style) for a purchase.
///
/// Insurance is required whenever the down payment is below 20% of the property
/// price. The premium is a tiered percentage of the loan amount
/// (`property_price - down_payment`):
///
/// | down payment       | rate  |
/// |--------------------|-------|
/// | 5% to under 10%    | 4.0%  |
/// | 10% to under 15%   | 3.1%  |
/// | 15% to under 20%   | 2.8%  |
/// | 20% and above      | none  |
///
/// The 20% boundary is inclusive on the no-insurance side: exactly 20% down
/// pays no premium.
///
/// # Arguments
///
/// * `property_price` - The purchase price of the property.
/// * `down_payment` - The down payment, already validated to be at least 5%
///   of the price and below the full price.
pub fn insurance_premium(property_price: Decimal, down_payment: Decimal) -> Decimal {
    let down_payment_ratio = down_payment / property_price;

    if down_payment_ratio >= dec!(0.20) {
        return dec!(0);
    }

    let loan_amount = property_price - down_payment;
    let rate = if down_payment_ratio >= dec!(0.15) {
        dec!(0.028)
    } else if down_payment_ratio >= dec!(0.10) {
        dec!(0.031)
    } else {
        dec!(0.04)
    };

    loan_amount * rate
}

/// Whether the scenario requires mandatory default insurance at all.
pub fn insurance_required(property_price: Decimal, down_payment: Decimal) -> bool {
    down_payment / property_price < dec!(0.20)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(500000), dec!(25000), dec!(0.04))]   // 5% down
    #[case(dec!(500000), dec!(45000), dec!(0.04))]   // 9% down
    #[case(dec!(500000), dec!(50000), dec!(0.031))]  // 10% down
    #[case(dec!(500000), dec!(70000), dec!(0.031))]  // 14% down
    #[case(dec!(500000), dec!(75000), dec!(0.028))]  // 15% down
    #[case(dec!(500000), dec!(95000), dec!(0.028))]  // 19% down
    fn test_premium_tiers(
        #[case] price: Decimal,
        #[case] down: Decimal,
        #[case] expected_rate: Decimal,
    ) {
        let premium = insurance_premium(price, down);
        assert_eq!(premium, (price - down) * expected_rate);
    }

    #[test]
    fn test_five_percent_down_concrete() {
        // (500000 - 25000) * 0.04 = 19000
        let premium = insurance_premium(dec!(500000), dec!(25000));
        assert_eq!(premium, dec!(19000));
    }

    #[test]
    fn test_exactly_twenty_percent_has_no_premium() {
        assert_eq!(insurance_premium(dec!(500000), dec!(100000)), dec!(0));
        assert!(!insurance_required(dec!(500000), dec!(100000)));
    }

    #[test]
    fn test_just_under_twenty_percent_is_insured() {
        let premium = insurance_premium(dec!(500000), dec!(99999));
        assert!(premium > dec!(0));
        assert!(insurance_required(dec!(500000), dec!(99999)));
    }
}
