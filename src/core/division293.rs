use super::params::SuperParams;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Division 293 rate, charged on top of the standard contributions tax
pub const DIVISION_293_RATE: Decimal = dec!(0.15);

/// Additional tax on concessional contributions for high combined incomes.
///
/// Only the part of the contributions that pushes combined income over the
/// threshold is taxed.
pub fn division293_tax(
    taxable_income: Decimal,
    concessional_contributions: Decimal,
    params: &SuperParams,
) -> Decimal {
    let combined = taxable_income + concessional_contributions;
    if combined <= params.division293_threshold {
        return Decimal::ZERO;
    }
    let excess = combined - params.division293_threshold;
    concessional_contributions.min(excess) * DIVISION_293_RATE
}
