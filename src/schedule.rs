use serde::{Serialize, Deserialize};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::payment::PaymentFrequency;

/// Represents the breakdown of a single periodic payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// The 1-based payment number.
    pub index: u32,
    /// The amount paid this period.
    pub payment_amount: Decimal,
    /// The portion of the payment that reduces the principal.
    pub principal_portion: Decimal,
    /// The portion of the payment that covers interest.
    pub interest_portion: Decimal,
    /// The remaining balance after the payment, clamped at zero.
    pub remaining_balance: Decimal,
}

/// Lazy period-by-period amortization of a mortgage.
///
/// Yields one [`AmortizationRow`] per period, from period 1 up to the nominal
/// term, reducing the balance each step. The sequence terminates early once
/// the clamped balance reaches zero, which happens before the nominal term
/// for accelerated frequencies. Cloning the schedule before iterating gives a
/// fresh restartable copy.
#[derive(Debug, Clone)]
pub struct AmortizationSchedule {
    balance: Decimal,
    periodic_rate: Decimal,
    periodic_payment: Decimal,
    payments_per_year: u32,
    total_periods: u32,
    period: u32,
    finished: bool,
}

impl AmortizationSchedule {
    /// Creates a schedule for a mortgage.
    ///
    /// # Arguments
    ///
    /// * `principal` - The total mortgage amount, including any insurance premium.
    /// * `annual_rate` - The annual interest rate as a decimal fraction.
    /// * `amortization_years` - The nominal amortization length in years.
    /// * `frequency` - The payment frequency.
    /// * `periodic_payment` - The payment amount for that frequency.
    pub fn new(
        principal: Decimal,
        annual_rate: Decimal,
        amortization_years: u32,
        frequency: PaymentFrequency,
        periodic_payment: Decimal,
    ) -> AmortizationSchedule {
        let payments_per_year = frequency.payments_per_year();

        AmortizationSchedule {
            balance: principal,
            periodic_rate: annual_rate / Decimal::from(payments_per_year),
            periodic_payment,
            payments_per_year,
            total_periods: amortization_years * payments_per_year,
            period: 0,
            finished: false,
        }
    }

    /// Number of payments per year for the underlying frequency.
    pub fn payments_per_year(&self) -> u32 {
        self.payments_per_year
    }

    /// The nominal number of periods, before any early payoff.
    pub fn total_periods(&self) -> u32 {
        self.total_periods
    }
}

impl Iterator for AmortizationSchedule {
    type Item = AmortizationRow;

    fn next(&mut self) -> Option<AmortizationRow> {
        if self.finished || self.period >= self.total_periods {
            return None;
        }

        self.period += 1;
        let interest_portion = self.balance * self.periodic_rate;
        let principal_portion = self.periodic_payment - interest_portion;
        self.balance = (self.balance - principal_portion).max(dec!(0));

        if self.balance.is_zero() {
            self.finished = true;
        }

        Some(AmortizationRow {
            index: self.period,
            payment_amount: self.periodic_payment,
            principal_portion,
            interest_portion,
            remaining_balance: self.balance,
        })
    }
}

/// Filters a schedule down to the rows worth displaying: the first period,
/// the first period of each following year, the final period of the term and
/// the period where the balance reaches zero.
pub fn display_rows(schedule: AmortizationSchedule) -> Vec<AmortizationRow> {
    let payments_per_year = schedule.payments_per_year();
    let total_periods = schedule.total_periods();

    schedule
        .filter(|row| {
            row.index == 1
                || row.index % payments_per_year == 1
                || row.index == total_periods
                || row.remaining_balance.is_zero()
        })
        .collect()
}
