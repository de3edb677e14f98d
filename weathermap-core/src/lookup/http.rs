use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    error::LookupError,
    model::{LookupOutcome, WeatherReport},
};

use super::WeatherLookup;

/// Client for the fixed weather endpoint.
///
/// The endpoint takes an HTTP POST whose JSON body carries the location
/// string and answers with a flat JSON record; `status: "Error"` marks a
/// location it could not resolve.
#[derive(Debug, Clone)]
pub struct HttpLookup {
    endpoint: String,
    http: Client,
}

impl HttpLookup {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            http: Client::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct LookupBody<'a> {
    location: &'a str,
}

#[derive(Debug, Deserialize)]
struct WireReport {
    status: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    long: f64,
    #[serde(default)]
    temp: f64,
    #[serde(default)]
    windspd: f64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
}

impl WireReport {
    fn into_outcome(self) -> LookupOutcome {
        // Anything other than "Error" means the record is fully populated.
        if self.status.as_deref() == Some("Error") {
            return LookupOutcome::NotFound;
        }

        LookupOutcome::Found(WeatherReport {
            name: self.name,
            lat: self.lat,
            long: self.long,
            temp_f: self.temp,
            wind_mph: self.windspd,
            description: self.description,
            icon: self.icon,
        })
    }
}

#[async_trait]
impl WeatherLookup for HttpLookup {
    async fn lookup(&self, location: &str) -> Result<LookupOutcome, LookupError> {
        tracing::debug!(%location, endpoint = %self.endpoint, "sending weather lookup");

        let res = self
            .http
            .post(&self.endpoint)
            .json(&LookupBody { location })
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(LookupError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: WireReport = serde_json::from_str(&body)?;
        Ok(parsed.into_outcome())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
