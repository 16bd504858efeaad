//! Personalised tip selection
//!
//! The tip is picked from a fixed, ordered table: the first rule whose
//! condition holds wins, and the last rule always holds.

use serde::{Deserialize, Serialize};

use crate::models::Money;

/// Spending above the trailing average by this ratio counts as "high"
const HIGH_SPENDING_NUMERATOR: i128 = 6;
const HIGH_SPENDING_DENOMINATOR: i128 = 5;

/// The three tips a statement can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tip {
    HighSpending,
    WithinBudget,
    AdjustSpending,
}

/// Figures the tip rules look at
#[derive(Debug, Clone)]
pub struct TipInputs<'a> {
    /// Spending in the statement month
    pub spent: Money,
    /// Budget for the statement month (zero when none was set)
    pub budget: Money,
    /// Spending per month across the history window, zero months included
    pub monthly_spent: &'a [Money],
}

impl TipInputs<'_> {
    /// spent > mean(monthly_spent) * 1.2, evaluated without rounding
    pub fn is_high_spending(&self) -> bool {
        if self.monthly_spent.is_empty() {
            return false;
        }
        let months = self.monthly_spent.len() as i128;
        let total: i128 = self.monthly_spent.iter().map(|m| m.cents() as i128).sum();
        let spent = self.spent.cents() as i128;

        spent * months * HIGH_SPENDING_DENOMINATOR > total * HIGH_SPENDING_NUMERATOR
    }

    /// Budget left before flooring at zero
    pub fn remaining_unfloored(&self) -> Money {
        self.budget - self.spent
    }
}

type TipRule = (Tip, fn(&TipInputs<'_>) -> bool);

fn spending_above_usual(inputs: &TipInputs<'_>) -> bool {
    inputs.is_high_spending()
}

fn budget_left_over(inputs: &TipInputs<'_>) -> bool {
    inputs.remaining_unfloored().is_positive()
}

fn always(_: &TipInputs<'_>) -> bool {
    true
}

/// Evaluated top to bottom
const TIP_RULES: [TipRule; 3] = [
    (Tip::HighSpending, spending_above_usual),
    (Tip::WithinBudget, budget_left_over),
    (Tip::AdjustSpending, always),
];

impl Tip {
    /// Pick the tip for a statement
    pub fn select(inputs: &TipInputs<'_>) -> Self {
        TIP_RULES
            .iter()
            .find(|(_, applies)| applies(inputs))
            .map(|(tip, _)| *tip)
            .unwrap_or(Tip::AdjustSpending)
    }

    /// The fixed text shown for this tip
    pub fn text(&self) -> &'static str {
        match self {
            Tip::HighSpending => {
                "Your spending this month is higher than usual. Consider reviewing your major expenses and see where you can cut back."
            }
            Tip::WithinBudget => {
                "Great job staying within budget! Consider saving the remaining amount for future goals."
            }
            Tip::AdjustSpending => {
                "Small adjustments can make a big difference! A quick tip: Reviewing your top spending categories can help you plan better for next month."
            }
        }
    }
}
