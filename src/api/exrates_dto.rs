use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Deserializer};

use crate::models::RateField;

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct ExchangeRateResponseDto {
    #[serde(default, deserialize_with = "null_as_default")]
    data: Vec<ExchangeRateDto>,
}

#[derive(Debug, Default, Deserialize, Getters, new)]
#[serde(default)]
pub struct ExchangeRateDto {
    #[serde(deserialize_with = "null_as_default")]
    date: String,
    #[serde(deserialize_with = "null_as_default")]
    currency: String,
    #[serde(deserialize_with = "null_as_default")]
    bank: String,
    buying_currency: RateField,
    selling_currency: RateField,
    #[serde(deserialize_with = "null_as_default")]
    created_time: String,
    #[serde(deserialize_with = "null_as_default")]
    effective_time: String,
}
