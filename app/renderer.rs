use diagnosis_core::{
	features::FEATURE_NAMES, Client, ClientError, InputRecord, Metrics, Prediction,
};
use std::collections::BTreeMap;

/// The hidden form fields that carry the displayed regions from one submission to the next.
pub const RESULT_FIELD: &str = "result";
pub const METRICS_VISIBLE_FIELD: &str = "metrics_visible";
pub const METRICS_FIELD: &str = "metrics";

/// Everything the index page displays. Each request builds its own page, so concurrent requests never share one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
	/// The raw text of each input, keyed by feature name. Missing features render as empty inputs.
	pub values: BTreeMap<String, String>,
	pub result: Option<Prediction>,
	pub metrics_visible: bool,
	pub metrics: Option<Metrics>,
}

impl Page {
	/// Build a page from submitted form fields: the feature inputs plus the hidden fields written by `state_fields`. Other fields are ignored.
	pub fn from_fields<I>(fields: I) -> Page
	where
		I: IntoIterator<Item = (String, String)>,
	{
		let mut page = Page::default();
		for (name, value) in fields {
			match name.as_str() {
				RESULT_FIELD => page.result = decode_state(&name, &value),
				METRICS_FIELD => page.metrics = decode_state(&name, &value),
				METRICS_VISIBLE_FIELD => page.metrics_visible = value == "true",
				_ => {
					if FEATURE_NAMES.contains(&name.as_str()) {
						page.values.insert(name, value);
					}
				}
			}
		}
		page
	}

	/// The hidden fields that let the next submission redisplay what this page shows. Each action replaces only its own region, so the other region has to come back with the form.
	pub fn state_fields(&self) -> Vec<(&'static str, String)> {
		let mut fields = Vec::new();
		if let Some(result) = &self.result {
			if let Ok(json) = serde_json::to_string(result) {
				fields.push((RESULT_FIELD, json));
			}
		}
		if self.metrics_visible {
			fields.push((METRICS_VISIBLE_FIELD, "true".to_owned()));
		}
		if let Some(metrics) = &self.metrics {
			if let Ok(json) = serde_json::to_string(metrics) {
				fields.push((METRICS_FIELD, json));
			}
		}
		fields
	}

	pub fn input(&self) -> InputRecord {
		InputRecord::from_fields(|name| self.values.get(name).map(String::as_str))
	}
}

fn decode_state<T>(name: &str, value: &str) -> Option<T>
where
	T: serde::de::DeserializeOwned,
{
	match serde_json::from_str(value) {
		Ok(state) => Some(state),
		Err(error) => {
			tracing::warn!(field = name, %error, "discarding malformed page state");
			None
		}
	}
}

/// Send the page's inputs to the prediction server and replace the displayed result with its answer. On failure the page is left as it was.
pub async fn predict(client: &Client, page: &mut Page) -> Result<(), ClientError> {
	let input = page.input();
	let prediction = client.predict(&input).await?;
	tracing::info!(
		prediction = %prediction.prediction,
		probability = prediction.probability,
		"predicted"
	);
	page.result = Some(prediction);
	Ok(())
}

/// Reveal the metrics panel, then fetch the metrics and replace whatever the panel showed before.
pub async fn show_metrics(client: &Client, page: &mut Page) -> Result<(), ClientError> {
	page.metrics_visible = true;
	let metrics = client.metrics().await?;
	page.metrics = Some(metrics);
	Ok(())
}
