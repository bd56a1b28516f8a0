use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// The buying rate as published upstream, which sends it either quoted or bare.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RateField {
    Text(String),
    Number(f64),
    Other(Value),
}

impl Default for RateField {
    fn default() -> Self {
        RateField::Other(Value::Null)
    }
}

impl RateField {
    pub fn to_rate_value(&self) -> RateValue {
        match self {
            RateField::Text(text) => RateValue::new(text.clone()),
            RateField::Number(number) => RateValue::new(format!("{:.4}", number)),
            RateField::Other(value) => RateValue::new(value.to_string()),
        }
    }
}

/// Canonical textual rate handed from a fetcher to the notifier.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RateValue(String);

impl RateValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
