use serde::{Serialize, Deserialize};
use rust_decimal::{ Decimal, MathematicalOps };
use rust_decimal_macros::dec;

/// How often mortgage payments are made.
///
/// The accelerated variants pay the equivalent monthly payment split in half
/// (bi-weekly) or in quarters (weekly), which is more per year than a plain
/// pro-rata split and therefore amortizes the loan faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentFrequency {
    Monthly,
    SemiMonthly,
    BiWeekly,
    Weekly,
    AcceleratedBiWeekly,
    AcceleratedWeekly,
}

impl PaymentFrequency {
    /// Number of payments made per year at this frequency.
    pub fn payments_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::SemiMonthly => 24,
            PaymentFrequency::BiWeekly => 26,
            PaymentFrequency::Weekly => 52,
            PaymentFrequency::AcceleratedBiWeekly => 26,
            PaymentFrequency::AcceleratedWeekly => 52,
        }
    }

    /// Whether the periodic payment is derived from the monthly payment
    /// instead of the annuity formula at this frequency's own period count.
    pub fn is_accelerated(&self) -> bool {
        matches!(
            self,
            PaymentFrequency::AcceleratedBiWeekly | PaymentFrequency::AcceleratedWeekly
        )
    }
}

/// Payment and interest totals for one financing scenario.
///
/// All amounts are kept at full precision; rounding for display happens at
/// the result boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    /// Number of payments per year for the chosen frequency.
    pub payments_per_year: u32,
    /// The amount of each periodic payment.
    pub periodic_payment: Decimal,
    /// Interest accumulated over the simulated life of the loan.
    pub total_interest: Decimal,
    /// Periodic payment multiplied by the number of periods actually paid.
    pub total_paid: Decimal,
    /// Number of periods until the balance reached zero (or the full term).
    pub periods_used: u32,
}

/// Interest and duration difference between the chosen frequency and a
/// plain monthly schedule for the same loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyComparison {
    /// Monthly total interest minus the chosen frequency's total interest.
    /// Positive means the chosen frequency saves interest over monthly.
    pub interest_delta: Decimal,
    /// Months of amortization saved against the monthly schedule, derived
    /// from the actual period counts. Negative means the chosen frequency
    /// takes longer to pay off.
    pub months_delta: Decimal,
}

/// Standard annuity payment: PMT = P * [i(1 + i)^n] / [(1 + i)^n - 1].
///
/// A zero periodic rate degrades to an even principal split.
fn annuity_payment(principal: Decimal, periodic_rate: Decimal, total_periods: u32) -> Decimal {
    if periodic_rate.is_zero() {
        return principal / Decimal::from(total_periods);
    }

    let growth = (dec!(1) + periodic_rate).powu(total_periods.into());
    principal * (periodic_rate * growth) / (growth - dec!(1))
}

/// Calculates the periodic payment and lifetime interest for a mortgage.
///
/// Non-accelerated frequencies use the annuity formula at the frequency's own
/// periodic rate and period count. Accelerated frequencies first compute the
/// equivalent monthly payment, then divide it by 2 (bi-weekly) or 4 (weekly).
///
/// The balance is then simulated period by period at `annual_rate /
/// payments_per_year`, accumulating interest and stopping as soon as the
/// balance reaches zero, so accelerated schedules report fewer periods than
/// the nominal term.
///
/// # Arguments
///
/// * `principal` - The total mortgage amount, including any insurance premium.
/// * `annual_rate` - The annual interest rate as a decimal fraction
///   (e.g. `dec!(0.0549)` for 5.49%).
/// * `amortization_years` - The nominal amortization length in years.
/// * `frequency` - The payment frequency.
pub fn payment_breakdown(
    principal: Decimal,
    annual_rate: Decimal,
    amortization_years: u32,
    frequency: PaymentFrequency,
) -> PaymentBreakdown {
    let payments_per_year = frequency.payments_per_year();
    let total_periods = amortization_years * payments_per_year;
    let periodic_rate = annual_rate / Decimal::from(payments_per_year);

    let periodic_payment = if frequency.is_accelerated() {
        let monthly_payment =
            annuity_payment(principal, annual_rate / dec!(12), amortization_years * 12);
        match frequency {
            PaymentFrequency::AcceleratedBiWeekly => monthly_payment / dec!(2),
            _ => monthly_payment / dec!(4),
        }
    } else {
        annuity_payment(principal, periodic_rate, total_periods)
    };

    let mut balance = principal;
    let mut total_interest = dec!(0);
    let mut periods_used = 0;

    for period in 1..=total_periods {
        let interest_portion = balance * periodic_rate;
        let principal_portion = periodic_payment - interest_portion;
        total_interest += interest_portion;
        balance -= principal_portion;
        periods_used = period;

        if balance <= dec!(0) {
            break;
        }
    }

    PaymentBreakdown {
        payments_per_year,
        periodic_payment,
        total_interest,
        total_paid: periodic_payment * Decimal::from(periods_used),
        periods_used,
    }
}

/// Compares a frequency's totals against the same loan paid monthly.
///
/// Both deltas can be negative when the chosen frequency costs more interest
/// or takes longer than the monthly baseline.
pub fn compare_against_monthly(
    selected: &PaymentBreakdown,
    monthly: &PaymentBreakdown,
) -> MonthlyComparison {
    let selected_months = Decimal::from(selected.periods_used) * dec!(12)
        / Decimal::from(selected.payments_per_year);
    let monthly_months = Decimal::from(monthly.periods_used) * dec!(12)
        / Decimal::from(monthly.payments_per_year);

    MonthlyComparison {
        interest_delta: monthly.total_interest - selected.total_interest,
        months_delta: monthly_months - selected_months,
    }
}
