use super::params::SuperParams;
use rust_decimal::Decimal;

/// One year of balance accumulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRecord {
    /// 1-based year of the projection
    pub year: u32,
    pub start_balance: Decimal,
    /// Contributions after contributions tax, added at the start of the year
    pub net_contribution_in: Decimal,
    pub gross_earnings: Decimal,
    pub earnings_tax: Decimal,
    pub fees: Decimal,
    pub end_balance: Decimal,
}

/// Accumulate a balance year by year with a constant net contribution.
///
/// Contributions land before growth, and fees are charged on the
/// post-contribution balance before earnings are added. At least one year is
/// always produced, so `years == 0` yields a single record.
///
/// Arithmetic saturates at the bounds of `Decimal`, so very long horizons
/// level off at `Decimal::MAX` rather than overflowing.
pub fn project(
    starting_balance: Decimal,
    net_contribution: Decimal,
    params: &SuperParams,
    years: u32,
) -> Vec<YearRecord> {
    let years = years.max(1);
    let mut records = Vec::new();
    let mut balance = starting_balance;

    for year in 1..=years {
        let start_balance = balance;
        balance = balance.saturating_add(net_contribution);

        let gross_earnings = balance.saturating_mul(params.expected_annual_return);
        let earnings_tax = gross_earnings.saturating_mul(params.earnings_tax_rate);
        let fees = balance.saturating_mul(params.fee_rate);
        let net_earnings = gross_earnings
            .saturating_sub(earnings_tax)
            .saturating_sub(fees);
        balance = balance.saturating_add(net_earnings);

        log::debug!(
            "Year {}: start {:.2}, earnings {:.2}, tax {:.2}, fees {:.2}, end {:.2}",
            year,
            start_balance,
            gross_earnings,
            earnings_tax,
            fees,
            balance
        );

        records.push(YearRecord {
            year,
            start_balance,
            net_contribution_in: net_contribution,
            gross_earnings,
            earnings_tax,
            fees,
            end_balance: balance,
        });
    }
    records
}

/// Balance at the end of the last projected year.
pub fn final_balance(records: &[YearRecord]) -> Option<Decimal> {
    records.last().map(|record| record.end_balance)
}
