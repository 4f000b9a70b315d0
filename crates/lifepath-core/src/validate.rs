//! Validation of generated decision options
//!
//! The text generator answers with JSON that is supposed to describe a list
//! of decision options. Nothing it returns reaches the player until it passes
//! [`OptionsValidator`]; the first violated field is reported and the whole
//! response is rejected. Values are never coerced.
//!
//! Accepted shapes:
//!
//! ```json
//! { "flavour_text": "...", "options": [ { "name": "...", "price": 100,
//!   "currency": "money", "results": [ { "currency": "health", "amount": 5 } ] } ] }
//! ```
//!
//! or a bare array of option objects.

use crate::{
    CurrencyChange, DecisionOption, Error, GameHistory, ProposedOptions, Resource, Result,
    ValidationError,
};
use serde_json::{Map, Value};

/// Smallest number of results an option may carry
pub const MIN_RESULTS: usize = 1;

/// Largest number of results an option may carry
pub const MAX_RESULTS: usize = 3;

/// Checks a generated option list against the decision-option contract
#[derive(Debug, Clone, Copy)]
pub struct OptionsValidator<'a> {
    expected: usize,
    allow_empty: bool,
    history: Option<&'a GameHistory>,
}

impl<'a> OptionsValidator<'a> {
    /// Expect exactly `expected` options
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            allow_empty: false,
            history: None,
        }
    }

    /// Also accept an empty list (the game has reached an end condition)
    ///
    /// For callers that still ask the generator at the end of a game and
    /// validate its answer themselves. The narrator skips that call instead
    /// and never sets this.
    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    /// Reject options whose name was already chosen in `history`
    pub fn forbid_repeats(mut self, history: &'a GameHistory) -> Self {
        self.history = Some(history);
        self
    }

    /// Parse and validate a raw JSON response
    ///
    /// Fails with [`Error::MalformedResponse`] if `raw` is not JSON and with
    /// [`Error::Validation`] if it breaks the contract.
    pub fn validate_str(&self, raw: &str) -> Result<ProposedOptions> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| Error::MalformedResponse(e.to_string()))?;
        Ok(self.validate_value(&value)?)
    }

    /// Validate an already parsed JSON response
    pub fn validate_value(
        &self,
        value: &Value,
    ) -> std::result::Result<ProposedOptions, ValidationError> {
        let (flavour_text, items) = match value {
            Value::Array(items) => (None, items),
            Value::Object(map) => {
                let flavour_text = match map.get("flavour_text") {
                    None | Some(Value::Null) => None,
                    Some(Value::String(text)) => Some(text.clone()),
                    Some(_) => {
                        return Err(ValidationError::new("flavour_text", "must be a string"))
                    }
                };
                let items = map
                    .get("options")
                    .and_then(Value::as_array)
                    .ok_or_else(|| ValidationError::new("options", "must be an array"))?;
                (flavour_text, items)
            }
            _ => {
                return Err(ValidationError::new(
                    "$",
                    "must be an object or an array of options",
                ))
            }
        };

        let empty_ok = self.allow_empty && items.is_empty();
        if !empty_ok && items.len() != self.expected {
            return Err(ValidationError::new(
                "options",
                format!("expected {} options, got {}", self.expected, items.len()),
            ));
        }

        let options = items
            .iter()
            .enumerate()
            .map(|(i, item)| self.validate_option(i, item))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ProposedOptions {
            flavour_text,
            options,
        })
    }

    fn validate_option(
        &self,
        index: usize,
        item: &Value,
    ) -> std::result::Result<DecisionOption, ValidationError> {
        let path = format!("options[{}]", index);
        let obj = item
            .as_object()
            .ok_or_else(|| ValidationError::new(&path, "must be an object"))?;

        let name = field(obj, &path, "name")?
            .as_str()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                ValidationError::new(format!("{}.name", path), "must be a non-empty string")
            })?
            .to_string();
        if let Some(history) = self.history {
            if history.contains_option(&name) {
                return Err(ValidationError::new(
                    format!("{}.name", path),
                    format!("'{}' was already chosen", name),
                ));
            }
        }

        let price = field(obj, &path, "price")?
            .as_i64()
            .ok_or_else(|| ValidationError::new(format!("{}.price", path), "must be an integer"))?;
        if price < 0 {
            return Err(ValidationError::new(
                format!("{}.price", path),
                "must not be negative",
            ));
        }

        let currency = resource(field(obj, &path, "currency")?, &format!("{}.currency", path))?;
        if !currency.is_cost_eligible() {
            return Err(ValidationError::new(
                format!("{}.currency", path),
                format!("{} cannot be used as a price", currency),
            ));
        }

        let raw_results = field(obj, &path, "results")?
            .as_array()
            .ok_or_else(|| ValidationError::new(format!("{}.results", path), "must be an array"))?;
        if !(MIN_RESULTS..=MAX_RESULTS).contains(&raw_results.len()) {
            return Err(ValidationError::new(
                format!("{}.results", path),
                format!(
                    "must have {} to {} entries, got {}",
                    MIN_RESULTS,
                    MAX_RESULTS,
                    raw_results.len()
                ),
            ));
        }

        let mut results = Vec::with_capacity(raw_results.len());
        for (j, raw) in raw_results.iter().enumerate() {
            let result_path = format!("{}.results[{}]", path, j);
            let change = raw
                .as_object()
                .ok_or_else(|| ValidationError::new(&result_path, "must be an object"))?;
            let currency_of_change = resource(
                field(change, &result_path, "currency")?,
                &format!("{}.currency", result_path),
            )?;
            let amount = field(change, &result_path, "amount")?
                .as_i64()
                .ok_or_else(|| {
                    ValidationError::new(format!("{}.amount", result_path), "must be an integer")
                })?;

            if price > 0
                && currency == Resource::Money
                && currency_of_change == Resource::Money
                && amount < 0
            {
                return Err(ValidationError::new(
                    format!("{}.amount", result_path),
                    "an option priced in money cannot also take money away",
                ));
            }
            results.push(CurrencyChange::new(currency_of_change, amount));
        }

        Ok(DecisionOption {
            name,
            price,
            currency,
            results,
        })
    }
}

/// Validate a raw response holding exactly `expected` options
pub fn validate_options(raw: &str, expected: usize) -> Result<ProposedOptions> {
    OptionsValidator::new(expected).validate_str(raw)
}

fn field<'v>(
    obj: &'v Map<String, Value>,
    path: &str,
    key: &str,
) -> std::result::Result<&'v Value, ValidationError> {
    obj.get(key)
        .ok_or_else(|| ValidationError::new(format!("{}.{}", path, key), "is missing"))
}

fn resource(value: &Value, path: &str) -> std::result::Result<Resource, ValidationError> {
    let name = value
        .as_str()
        .ok_or_else(|| ValidationError::new(path, "must be a string"))?;
    Resource::parse(name)
        .ok_or_else(|| ValidationError::new(path, format!("unknown currency '{}'", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_OPTIONS: &str = r#"{
        "flavour_text": "You turn thirty.",
        "options": [
            {"name": "Buy a flat", "price": 100, "currency": "money",
             "results": [{"currency": "satisfaction", "amount": 10},
                         {"currency": "passive_income", "amount": 5}]},
            {"name": "Run a marathon", "price": 10, "currency": "health",
             "results": [{"currency": "health", "amount": 25}]}
        ]
    }"#;

    fn field_of(err: Error) -> String {
        match err {
            Error::Validation(v) => v.field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_accepts_valid_response() {
        let proposal = validate_options(TWO_OPTIONS, 2).unwrap();
        assert_eq!(proposal.flavour_text.as_deref(), Some("You turn thirty."));
        assert_eq!(proposal.options.len(), 2);
        assert_eq!(proposal.options[0].currency, Resource::Money);
        assert_eq!(
            proposal.options[0].results[1],
            CurrencyChange::new(Resource::PassiveIncome, 5)
        );
    }

    #[test]
    fn test_accepts_bare_array() {
        let raw = r#"[{"name": "Nap", "price": 0, "currency": "satisfaction",
                      "results": [{"currency": "health", "amount": 1}]}]"#;
        let proposal = validate_options(raw, 1).unwrap();
        assert!(proposal.flavour_text.is_none());
        assert_eq!(proposal.options[0].name, "Nap");
    }

    #[test]
    fn test_rejects_wrong_count() {
        let err = validate_options(TWO_OPTIONS, 3).unwrap_err();
        assert_eq!(field_of(err), "options");
    }

    #[test]
    fn test_empty_list_needs_end_condition() {
        let raw = r#"{"options": []}"#;
        assert!(validate_options(raw, 3).is_err());
        let proposal = OptionsValidator::new(3)
            .allow_empty(true)
            .validate_str(raw)
            .unwrap();
        assert!(proposal.is_empty());
    }

    #[test]
    fn test_rejects_money_cost_with_money_penalty() {
        let raw = r#"{"options": [{"name": "Loan shark", "price": 100, "currency": "money",
            "results": [{"currency": "money", "amount": -50}]}]}"#;
        let err = validate_options(raw, 1).unwrap_err();
        assert_eq!(field_of(err), "options[0].results[0].amount");
    }

    #[test]
    fn test_free_option_may_cost_money_in_results() {
        let raw = r#"{"options": [{"name": "Gamble", "price": 0, "currency": "money",
            "results": [{"currency": "money", "amount": -50}]}]}"#;
        assert!(validate_options(raw, 1).is_ok());

        let raw = r#"{"options": [{"name": "Overtime", "price": 10, "currency": "health",
            "results": [{"currency": "money", "amount": -50}]}]}"#;
        assert!(validate_options(raw, 1).is_ok());
    }

    #[test]
    fn test_rejects_negative_price() {
        let raw = r#"[{"name": "Refund", "price": -5, "currency": "money",
            "results": [{"currency": "health", "amount": 1}]}]"#;
        assert_eq!(field_of(validate_options(raw, 1).unwrap_err()), "options[0].price");
    }

    #[test]
    fn test_rejects_fractional_price() {
        let raw = r#"[{"name": "Snack", "price": 2.5, "currency": "money",
            "results": [{"currency": "health", "amount": 1}]}]"#;
        assert_eq!(field_of(validate_options(raw, 1).unwrap_err()), "options[0].price");
    }

    #[test]
    fn test_rejects_passive_income_as_price() {
        let raw = r#"[{"name": "Sell shares", "price": 5, "currency": "passive_income",
            "results": [{"currency": "money", "amount": 100}]}]"#;
        assert_eq!(field_of(validate_options(raw, 1).unwrap_err()), "options[0].currency");
    }

    #[test]
    fn test_rejects_unknown_result_currency() {
        let raw = r#"[{"name": "Study", "price": 5, "currency": "money",
            "results": [{"currency": "wisdom", "amount": 3}]}]"#;
        assert_eq!(
            field_of(validate_options(raw, 1).unwrap_err()),
            "options[0].results[0].currency"
        );
    }

    #[test]
    fn test_results_count_bounds() {
        let none = r#"[{"name": "Wait", "price": 0, "currency": "money", "results": []}]"#;
        assert_eq!(field_of(validate_options(none, 1).unwrap_err()), "options[0].results");

        let four = r#"[{"name": "Everything", "price": 0, "currency": "money", "results": [
            {"currency": "money", "amount": 1}, {"currency": "health", "amount": 1},
            {"currency": "relations", "amount": 1}, {"currency": "satisfaction", "amount": 1}]}]"#;
        assert_eq!(field_of(validate_options(four, 1).unwrap_err()), "options[0].results");
    }

    #[test]
    fn test_rejects_missing_field() {
        let raw = r#"[{"name": "Travel", "currency": "money",
            "results": [{"currency": "satisfaction", "amount": 3}]}]"#;
        assert_eq!(field_of(validate_options(raw, 1).unwrap_err()), "options[0].price");
    }

    #[test]
    fn test_rejects_repeat_from_history() {
        let mut history = GameHistory::new();
        history.record(DecisionOption {
            name: "Buy a flat".into(),
            price: 100,
            currency: Resource::Money,
            results: vec![CurrencyChange::new(Resource::Satisfaction, 10)],
        });
        let err = OptionsValidator::new(2)
            .forbid_repeats(&history)
            .validate_str(TWO_OPTIONS)
            .unwrap_err();
        assert_eq!(field_of(err), "options[0].name");
    }

    #[test]
    fn test_non_json_is_malformed() {
        let err = validate_options("Sure! Here are your options:", 2).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }
}
