use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::FetchError;

pub async fn make_request<T>(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    params: &str,
) -> Result<T, FetchError>
where
    T: DeserializeOwned,
{
    let url = format!("{}/{}?{}", base_url.trim_end_matches('/'), endpoint, params);
    debug!("GET {}", url);

    let res = client.get(&url).send().await?;

    if !res.status().is_success() {
        return Err(FetchError::Status(res.status().as_u16()));
    }

    let text = res.text().await?;
    let data = serde_json::from_str::<T>(&text)?;

    Ok(data)
}
