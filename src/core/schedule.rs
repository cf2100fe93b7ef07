use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Errors raised when building a custom bracket table.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("bracket table is empty")]
    Empty,
    #[error("first bracket must start at 0 with a 0% rate and 0 base")]
    InvalidFirstBracket,
    #[error("bracket {index} lower bound {lower_bound} is not above the previous bracket")]
    NotAscending { index: usize, lower_bound: Decimal },
    #[error(
        "bracket {index} base {actual} does not match tax payable at its lower bound ({expected})"
    )]
    Discontinuous {
        index: usize,
        expected: Decimal,
        actual: Decimal,
    },
}

/// A single marginal rate band of the resident schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Income above which this bracket's rate applies (AUD)
    pub lower_bound: Decimal,
    /// Marginal rate as a ratio (0.19 = 19%)
    pub marginal_rate: Decimal,
    /// Tax payable at `lower_bound` under all lower brackets (AUD)
    pub cumulative_base: Decimal,
}

impl TaxBracket {
    fn tax_at(&self, taxable_income: Decimal) -> Decimal {
        self.cumulative_base + (taxable_income - self.lower_bound) * self.marginal_rate
    }
}

/// Threshold/rate pair used to describe a schedule without precomputed bases
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BracketThreshold {
    #[schemars(with = "f64")]
    pub lower_bound: Decimal,
    #[schemars(with = "f64")]
    pub rate: Decimal,
}

/// Resident income tax schedule plus the flat Medicare levy.
///
/// Immutable once built: every constructor validates the bracket table so
/// evaluation can assume ascending, continuous brackets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxSchedule {
    brackets: Vec<TaxBracket>,
    medicare_levy_rate: Decimal,
}

impl TaxSchedule {
    pub fn new(
        brackets: Vec<TaxBracket>,
        medicare_levy_rate: Decimal,
    ) -> Result<Self, ScheduleError> {
        validate(&brackets)?;
        Ok(Self {
            brackets,
            medicare_levy_rate,
        })
    }

    /// Build a schedule from thresholds alone, deriving each bracket's cumulative base.
    pub fn from_thresholds(
        thresholds: &[BracketThreshold],
        medicare_levy_rate: Decimal,
    ) -> Result<Self, ScheduleError> {
        let mut brackets: Vec<TaxBracket> = Vec::with_capacity(thresholds.len());
        for threshold in thresholds {
            let cumulative_base = brackets
                .last()
                .map_or(Decimal::ZERO, |prev| prev.tax_at(threshold.lower_bound));
            brackets.push(TaxBracket {
                lower_bound: threshold.lower_bound,
                marginal_rate: threshold.rate,
                cumulative_base,
            });
        }
        Self::new(brackets, medicare_levy_rate)
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    pub fn medicare_levy_rate(&self) -> Decimal {
        self.medicare_levy_rate
    }

    /// Income at or below which no income tax is payable.
    pub fn tax_free_threshold(&self) -> Decimal {
        self.brackets
            .get(1)
            .map_or(Decimal::MAX, |bracket| bracket.lower_bound)
    }

    /// The bracket an income has entered, i.e. the highest one whose lower bound
    /// is strictly below it. Income sitting exactly on a threshold stays in the
    /// lower bracket.
    pub fn bracket_for(&self, taxable_income: Decimal) -> Option<&TaxBracket> {
        let entered = self
            .brackets
            .partition_point(|bracket| bracket.lower_bound < taxable_income);
        entered.checked_sub(1).map(|index| &self.brackets[index])
    }

    /// Income tax payable, excluding the Medicare levy and surcharge.
    pub fn income_tax(&self, taxable_income: Decimal) -> Decimal {
        if taxable_income <= self.tax_free_threshold() {
            return Decimal::ZERO;
        }
        self.bracket_for(taxable_income)
            .map_or(Decimal::ZERO, |bracket| bracket.tax_at(taxable_income))
    }

    pub fn medicare_levy(&self, taxable_income: Decimal) -> Decimal {
        (taxable_income * self.medicare_levy_rate).max(Decimal::ZERO)
    }
}

impl Default for TaxSchedule {
    /// 2024/25 resident rates (stage 3) with a 2% Medicare levy
    fn default() -> Self {
        Self {
            brackets: vec![
                TaxBracket {
                    lower_bound: dec!(0),
                    marginal_rate: dec!(0),
                    cumulative_base: dec!(0),
                },
                TaxBracket {
                    lower_bound: dec!(18200),
                    marginal_rate: dec!(0.19),
                    cumulative_base: dec!(0),
                },
                TaxBracket {
                    lower_bound: dec!(45000),
                    marginal_rate: dec!(0.30),
                    cumulative_base: dec!(5092),
                },
                TaxBracket {
                    lower_bound: dec!(135000),
                    marginal_rate: dec!(0.37),
                    cumulative_base: dec!(32092),
                },
                TaxBracket {
                    lower_bound: dec!(190000),
                    marginal_rate: dec!(0.45),
                    cumulative_base: dec!(52442),
                },
            ],
            medicare_levy_rate: dec!(0.02),
        }
    }
}

fn validate(brackets: &[TaxBracket]) -> Result<(), ScheduleError> {
    let first = brackets.first().ok_or(ScheduleError::Empty)?;
    if !first.lower_bound.is_zero()
        || !first.marginal_rate.is_zero()
        || !first.cumulative_base.is_zero()
    {
        return Err(ScheduleError::InvalidFirstBracket);
    }
    for (index, pair) in brackets.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.lower_bound <= prev.lower_bound {
            return Err(ScheduleError::NotAscending {
                index: index + 1,
                lower_bound: next.lower_bound,
            });
        }
        let expected = prev.tax_at(next.lower_bound);
        if next.cumulative_base != expected {
            return Err(ScheduleError::Discontinuous {
                index: index + 1,
                expected,
                actual: next.cumulative_base,
            });
        }
    }
    Ok(())
}
