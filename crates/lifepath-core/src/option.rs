//! Decision options offered to the player each turn

use crate::Resource;
use serde::{Deserialize, Serialize};

/// A signed change to one resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyChange {
    pub currency: Resource,
    pub amount: i64,
}

impl CurrencyChange {
    pub fn new(currency: Resource, amount: i64) -> Self {
        Self { currency, amount }
    }
}

/// A player-facing choice: an upfront price and the changes it brings
///
/// Instances only come out of [`crate::OptionsValidator`] or test code, so a
/// `DecisionOption` in hand already honours the price/currency/results
/// contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOption {
    /// Short name
    pub name: String,
    /// Non-negative cost, paid in `currency`
    pub price: i64,
    /// Never `passive_income`
    pub currency: Resource,
    /// One to three resulting changes
    pub results: Vec<CurrencyChange>,
}

/// Validated options for one turn, with optional narrative framing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposedOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavour_text: Option<String>,
    pub options: Vec<DecisionOption>,
}

impl ProposedOptions {
    /// No options; the turn (or the game) ends without a choice
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
