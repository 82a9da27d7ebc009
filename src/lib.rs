//! `ca_mortgage` is a Rust library for calculating mortgage affordability and
//! closing costs for Canadian real estate purchases.
//!
//! Given a purchase scenario it computes:
//! - **Default-insurance premium (CMHC-style)**: the mandatory premium charged
//!   when the down payment is below 20%, priced in tiers on the loan amount.
//! - **Land transfer tax**: marginal brackets or flat rates per province, with
//!   first-time-buyer relief where a province offers it.
//! - **Payment and interest totals**: the periodic payment for any of six
//!   payment frequencies, including the accelerated variants, plus lifetime
//!   interest from a period-by-period simulation.
//! - **Amortization schedule**: a lazy period-by-period breakdown of the
//!   loan, filtered to the rows worth displaying.
//!
//! ## Usage
//!
//! Add `ca_mortgage` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ca_mortgage = "0.3.0"
//! rust_decimal = "1.39.0"
//! rust_decimal_macros = "1.39.0"
//! ```
//!
//! Then build a [`PurchaseScenario`] and pass it to
//! [`compute_mortgage_scenario`]:
//!
//! ```rust
//! use ca_mortgage::{compute_mortgage_scenario, PaymentFrequency, Province, PurchaseScenario};
//! use rust_decimal_macros::dec;
//!
//! fn main() {
//!     let scenario = PurchaseScenario {
//!         property_price: dec!(500_000),
//!         down_payment: dec!(100_000),
//!         annual_interest_rate: dec!(0.05),
//!         amortization_years: 25,
//!         payment_frequency: PaymentFrequency::Monthly,
//!         province: Province::ON,
//!         first_time_buyer: false,
//!         property_tax_annual: dec!(4_800),
//!         condo_fee_monthly: dec!(0),
//!     };
//!
//!     match compute_mortgage_scenario(&scenario) {
//!         Ok(result) => {
//!             println!("Periodic payment:  {:.2}", result.periodic_payment);
//!             println!("Total interest:    {:.2}", result.total_interest);
//!             println!("Land transfer tax: {:.2}", result.land_transfer_tax);
//!         }
//!         Err(e) => {
//!             eprintln!("Error calculating scenario: {}", e);
//!         }
//!     }
//! }
//! ```

use serde::{Serialize, Deserialize};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub mod error;
pub mod insurance;
pub mod land_transfer;
pub mod payment;
pub mod schedule;

pub use error::ValidationError;
pub use insurance::{insurance_premium, insurance_required};
pub use land_transfer::{Province, land_transfer_tax};
pub use payment::{
    MonthlyComparison, PaymentBreakdown, PaymentFrequency, compare_against_monthly,
    payment_breakdown,
};
pub use schedule::{AmortizationRow, AmortizationSchedule, display_rows};

/// Flat legal-fee estimate added to the closing-cost summary.
pub const LEGAL_FEES: Decimal = dec!(1500);

/// Flat home-inspection estimate added to the closing-cost summary.
pub const INSPECTION_FEE: Decimal = dec!(500);

/// Input parameters for one mortgage affordability calculation.
///
/// The scenario is immutable per calculation; nothing is carried over between
/// invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseScenario {
    /// The purchase price of the property.
    pub property_price: Decimal,
    /// The down payment. Must be at least 5% of the price and below the price.
    pub down_payment: Decimal,
    /// The annual interest rate as a decimal fraction (e.g. 0.0549 for 5.49%).
    pub annual_interest_rate: Decimal,
    /// The amortization length in years, typically 5 to 30.
    pub amortization_years: u32,
    /// How often payments are made.
    pub payment_frequency: PaymentFrequency,
    /// The province or territory of the property.
    pub province: Province,
    /// Whether the buyer qualifies for first-time-buyer relief.
    pub first_time_buyer: bool,
    /// Annual property tax, used for the carrying-cost summary.
    pub property_tax_annual: Decimal,
    /// Monthly condo fee, used for the carrying-cost summary.
    pub condo_fee_monthly: Decimal,
}

/// The full output of a mortgage affordability calculation.
///
/// Monetary summary fields are returned at cent precision; the schedule rows
/// keep full precision so the caller decides how to round for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageCalculationResult {
    /// Mandatory default-insurance premium, zero at 20% down or more.
    pub insurance_premium: Decimal,
    /// Whether mandatory default insurance applies to this scenario.
    pub insurance_required: bool,
    /// Land transfer tax for the scenario's province, after any relief.
    pub land_transfer_tax: Decimal,
    /// Price minus down payment plus the insurance premium.
    pub total_mortgage_principal: Decimal,
    /// The amount of each periodic payment.
    pub periodic_payment: Decimal,
    /// Interest accumulated over the simulated life of the loan.
    pub total_interest: Decimal,
    /// Periodic payment multiplied by the periods actually paid.
    pub total_paid: Decimal,
    /// Number of payments per year for the chosen frequency.
    pub payments_per_year: u32,
    /// Down payment, premium, tax and the flat legal and inspection fees.
    pub total_closing_costs: Decimal,
    /// Monthly-equivalent payment plus monthly property tax and condo fee.
    pub monthly_carrying_cost: Decimal,
    /// Share of the total paid that goes to principal rather than interest.
    pub principal_share: Decimal,
    /// The schedule filtered to the rows worth displaying.
    pub amortization_rows: Vec<AmortizationRow>,
    /// How the chosen frequency compares to a plain monthly schedule.
    pub comparison_against_monthly: MonthlyComparison,
}

/// Checks the down-payment invariants before any monetary computation.
///
/// # Errors
///
/// Returns [`ValidationError::DownPaymentTooLow`] below 5% of the price
/// (exactly 5% is accepted) and [`ValidationError::DownPaymentExceedsPrice`]
/// at or above the full price.
pub fn validate_scenario(scenario: &PurchaseScenario) -> Result<(), ValidationError> {
    if scenario.down_payment < scenario.property_price * dec!(0.05) {
        return Err(ValidationError::DownPaymentTooLow);
    }
    if scenario.down_payment >= scenario.property_price {
        return Err(ValidationError::DownPaymentExceedsPrice);
    }
    Ok(())
}

/// Calculates the complete affordability picture for a purchase scenario.
///
/// This is the main entry point of the library. It validates the scenario,
/// then combines the insurance premium, land transfer tax, payment totals,
/// display-ready amortization rows and the comparison against a monthly
/// schedule into one result.
///
/// # Arguments
///
/// * `scenario` - A [`PurchaseScenario`] with the purchase parameters.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the down payment is below 5% of the
/// property price or not below the property price. No partial results are
/// produced on error.
pub fn compute_mortgage_scenario(
    scenario: &PurchaseScenario,
) -> Result<MortgageCalculationResult, ValidationError> {
    validate_scenario(scenario)?;

    let premium = insurance_premium(scenario.property_price, scenario.down_payment);
    let tax = land_transfer_tax(
        scenario.property_price,
        scenario.province,
        scenario.first_time_buyer,
    );

    // The premium is financed, so it joins the borrowed principal.
    let total_mortgage_principal = scenario.property_price - scenario.down_payment + premium;

    let breakdown = payment_breakdown(
        total_mortgage_principal,
        scenario.annual_interest_rate,
        scenario.amortization_years,
        scenario.payment_frequency,
    );
    let monthly_baseline = if scenario.payment_frequency == PaymentFrequency::Monthly {
        breakdown.clone()
    } else {
        payment_breakdown(
            total_mortgage_principal,
            scenario.annual_interest_rate,
            scenario.amortization_years,
            PaymentFrequency::Monthly,
        )
    };
    let comparison = compare_against_monthly(&breakdown, &monthly_baseline);

    let schedule = AmortizationSchedule::new(
        total_mortgage_principal,
        scenario.annual_interest_rate,
        scenario.amortization_years,
        scenario.payment_frequency,
        breakdown.periodic_payment,
    );
    let amortization_rows = display_rows(schedule);

    let total_closing_costs =
        scenario.down_payment + premium + tax + LEGAL_FEES + INSPECTION_FEE;
    let monthly_equivalent_payment =
        breakdown.periodic_payment * Decimal::from(breakdown.payments_per_year) / dec!(12);
    let monthly_carrying_cost = monthly_equivalent_payment
        + scenario.property_tax_annual / dec!(12)
        + scenario.condo_fee_monthly;
    let principal_share = total_mortgage_principal / breakdown.total_paid;

    Ok(MortgageCalculationResult {
        insurance_premium: premium.round_dp(2),
        insurance_required: insurance_required(scenario.property_price, scenario.down_payment),
        land_transfer_tax: tax.round_dp(2),
        total_mortgage_principal: total_mortgage_principal.round_dp(2),
        periodic_payment: breakdown.periodic_payment.round_dp(2),
        total_interest: breakdown.total_interest.round_dp(2),
        total_paid: breakdown.total_paid.round_dp(2),
        payments_per_year: breakdown.payments_per_year,
        total_closing_costs: total_closing_costs.round_dp(2),
        monthly_carrying_cost: monthly_carrying_cost.round_dp(2),
        principal_share: principal_share.round_dp(4),
        amortization_rows,
        comparison_against_monthly: MonthlyComparison {
            interest_delta: comparison.interest_delta.round_dp(2),
            months_delta: comparison.months_delta.round_dp(1),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn base_scenario() -> PurchaseScenario {
        PurchaseScenario {
            property_price: dec!(500000),
            down_payment: dec!(100000),
            annual_interest_rate: dec!(0.05),
            amortization_years: 25,
            payment_frequency: PaymentFrequency::Monthly,
            province: Province::ON,
            first_time_buyer: false,
            property_tax_annual: dec!(4800),
            condo_fee_monthly: dec!(0),
        }
    }

    #[test]
    fn test_twenty_percent_down_scenario() {
        let result = compute_mortgage_scenario(&base_scenario()).unwrap();

        assert_eq!(result.insurance_premium, dec!(0));
        assert!(!result.insurance_required);
        assert_eq!(result.land_transfer_tax, dec!(6475));
        assert_eq!(result.total_mortgage_principal, dec!(400000));
        assert_eq!(result.periodic_payment, dec!(2338.36));
        assert_eq!(result.payments_per_year, 12);
        assert_eq!(result.total_interest, dec!(301508.05));
        assert_eq!(result.total_paid, dec!(701508.05));

        // 100000 + 0 + 6475 + 1500 + 500.
        assert_eq!(result.total_closing_costs, dec!(108475));
        // Payment plus 4800 / 12 of property tax.
        assert_eq!(result.monthly_carrying_cost, dec!(2738.36));
        assert_eq!(result.principal_share, dec!(0.5702));

        // Monthly against monthly is neutral.
        assert_eq!(result.comparison_against_monthly.interest_delta, dec!(0));
        assert_eq!(result.comparison_against_monthly.months_delta, dec!(0));
    }

    #[test]
    fn test_five_percent_down_scenario() {
        let scenario = PurchaseScenario {
            down_payment: dec!(25000),
            ..base_scenario()
        };
        let result = compute_mortgage_scenario(&scenario).unwrap();

        // (500000 - 25000) * 0.04.
        assert_eq!(result.insurance_premium, dec!(19000));
        assert!(result.insurance_required);
        assert_eq!(result.total_mortgage_principal, dec!(494000));
        assert_eq!(result.periodic_payment, dec!(2887.87));
    }

    #[test]
    fn test_accelerated_frequency_saves_interest_and_time() {
        let scenario = PurchaseScenario {
            payment_frequency: PaymentFrequency::AcceleratedBiWeekly,
            ..base_scenario()
        };
        let result = compute_mortgage_scenario(&scenario).unwrap();

        assert_eq!(result.payments_per_year, 26);
        assert_eq!(result.periodic_payment, dec!(1169.18));
        assert_eq!(
            result.comparison_against_monthly.interest_delta,
            dec!(48695.30)
        );
        assert_eq!(result.comparison_against_monthly.months_delta, dec!(42.0));
        assert_eq!(
            result.amortization_rows.last().unwrap().remaining_balance,
            dec!(0)
        );
    }

    #[test]
    fn test_display_rows_cover_each_year() {
        let result = compute_mortgage_scenario(&base_scenario()).unwrap();

        // Period 1, the first period of years 2..=25, then the final period.
        assert_eq!(result.amortization_rows.len(), 26);
        assert_eq!(result.amortization_rows[0].index, 1);
        assert_eq!(result.amortization_rows.last().unwrap().index, 300);
    }

    #[test]
    fn test_down_payment_boundaries() {
        // Exactly 5% is accepted.
        let at_floor = PurchaseScenario {
            down_payment: dec!(25000),
            ..base_scenario()
        };
        assert!(compute_mortgage_scenario(&at_floor).is_ok());

        // 4.9999% is rejected.
        let below_floor = PurchaseScenario {
            down_payment: dec!(500000) * dec!(0.049999),
            ..base_scenario()
        };
        assert_eq!(
            compute_mortgage_scenario(&below_floor).unwrap_err(),
            ValidationError::DownPaymentTooLow
        );

        // The full price is rejected.
        let full_price = PurchaseScenario {
            down_payment: dec!(500000),
            ..base_scenario()
        };
        assert_eq!(
            compute_mortgage_scenario(&full_price).unwrap_err(),
            ValidationError::DownPaymentExceedsPrice
        );
    }

    #[test]
    fn test_scenario_deserializes_from_form_shaped_json() {
        let scenario: PurchaseScenario = serde_json::from_str(
            r#"{
                "property_price": "500000",
                "down_payment": "100000",
                "annual_interest_rate": "0.05",
                "amortization_years": 25,
                "payment_frequency": "accelerated-bi-weekly",
                "province": "ON",
                "first_time_buyer": false,
                "property_tax_annual": "4800",
                "condo_fee_monthly": "0"
            }"#,
        )
        .unwrap();

        assert_eq!(
            scenario.payment_frequency,
            PaymentFrequency::AcceleratedBiWeekly
        );
        assert_eq!(scenario.province, Province::ON);

        let result = compute_mortgage_scenario(&scenario).unwrap();
        assert_eq!(result.payments_per_year, 26);
    }
}
