use chrono::NaiveDate;
use reqwest::Client;

use super::{
    exrates_dto::ExchangeRateResponseDto,
    utils::make_request,
};
use crate::{error::FetchError, models::RateValue};

pub const CURRENCY: &str = "USD";

pub async fn get_exchange_rates(
    client: &Client,
    base_url: &str,
    currency: &str,
    date: NaiveDate,
) -> Result<ExchangeRateResponseDto, FetchError> {
    let params = format!(
        "currency={}&date={}&latest=true",
        currency,
        date.format("%Y-%m-%d")
    );
    make_request::<ExchangeRateResponseDto>(client, base_url, "api/exrates", &params).await
}

/// Picks the first entry whose bank is exactly `bank` and normalizes its buying rate.
pub fn find_buying_rate(
    response: &ExchangeRateResponseDto,
    bank: &str,
) -> Result<RateValue, FetchError> {
    response
        .data()
        .iter()
        .find(|entry| entry.bank() == bank)
        .map(|entry| entry.buying_currency().to_rate_value())
        .ok_or_else(|| FetchError::BankNotFound(bank.to_string()))
}
