use serde::{Serialize, Deserialize};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Canadian province or territory, used to pick the land-transfer-tax formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Province {
    /// Alberta
    AB,
    /// British Columbia
    BC,
    /// Manitoba
    MB,
    /// New Brunswick
    NB,
    /// Newfoundland and Labrador
    NL,
    /// Nova Scotia
    NS,
    /// Northwest Territories
    NT,
    /// Nunavut
    NU,
    /// Ontario
    ON,
    /// Prince Edward Island
    PE,
    /// Quebec
    QC,
    /// Saskatchewan
    SK,
    /// Yukon
    YT,
}

/// Calculates the one-time land transfer tax for a purchase.
///
/// Ontario and British Columbia use marginal bracket schedules; the remaining
/// provinces use flat rates (Alberta's 0.1% approximates its registration fee,
/// which is a fee rather than a tax). The territories take a flat 1% fallback.
///
/// First-time-buyer relief is province specific:
/// - Ontario rebates up to $4,000 of tax when the price is at most $368,333,
///   floored at zero.
/// - British Columbia waives the tax entirely when the price is at most
///   $500,000.
///
/// The returned tax is always zero or positive.
///
/// # Arguments
///
/// * `property_price` - The purchase price of the property.
/// * `province` - The province or territory where the property is located.
/// * `first_time_buyer` - Whether the buyer qualifies for first-time relief.
pub fn land_transfer_tax(
    property_price: Decimal,
    province: Province,
    first_time_buyer: bool,
) -> Decimal {
    let tax = match province {
        Province::AB => property_price * dec!(0.001),
        Province::BC => {
            let tax = bc_marginal_tax(property_price);
            if first_time_buyer && property_price <= dec!(500000) {
                dec!(0)
            } else {
                tax
            }
        }
        Province::ON => {
            let tax = on_marginal_tax(property_price);
            if first_time_buyer && property_price <= dec!(368333) {
                (tax - dec!(4000)).max(dec!(0))
            } else {
                tax
            }
        }
        Province::MB => property_price * dec!(0.005),
        Province::NB => property_price * dec!(0.005),
        Province::NL => property_price * dec!(0.004),
        Province::NS => property_price * dec!(0.015),
        Province::PE => property_price * dec!(0.01),
        Province::QC => property_price * dec!(0.005),
        Province::SK => property_price * dec!(0.003),
        // Territories have no provincial schedule, use the flat fallback.
        Province::NT | Province::NU | Province::YT => property_price * dec!(0.01),
    };

    tax.max(dec!(0))
}

/// Ontario marginal brackets: 0.5% to $55,000, 1.0% to $250,000,
/// 1.5% to $400,000, 2.0% above.
fn on_marginal_tax(price: Decimal) -> Decimal {
    if price <= dec!(55000) {
        price * dec!(0.005)
    } else if price <= dec!(250000) {
        dec!(275) + (price - dec!(55000)) * dec!(0.01)
    } else if price <= dec!(400000) {
        dec!(2225) + (price - dec!(250000)) * dec!(0.015)
    } else {
        dec!(4475) + (price - dec!(400000)) * dec!(0.02)
    }
}

/// British Columbia marginal brackets: 1% to $200,000, 2% to $2,000,000,
/// 3% above.
fn bc_marginal_tax(price: Decimal) -> Decimal {
    if price <= dec!(200000) {
        price * dec!(0.01)
    } else if price <= dec!(2000000) {
        dec!(2000) + (price - dec!(200000)) * dec!(0.02)
    } else {
        dec!(38000) + (price - dec!(2000000)) * dec!(0.03)
    }
}
