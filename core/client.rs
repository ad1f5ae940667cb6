use crate::{InputRecord, Metrics, Prediction};
use derive_more::{Display, Error, From};
use url::Url;

/// An http client for the prediction server. Each call issues exactly one request: there is no retry and no caching.
#[derive(Clone, Debug)]
pub struct Client {
	base_url: Url,
	http: reqwest::Client,
}

#[derive(Debug, Display, Error, From)]
pub enum ClientError {
	#[display(fmt = "invalid url: {}", _0)]
	Url(url::ParseError),
	#[display(fmt = "request failed: {}", _0)]
	Request(reqwest::Error),
	#[display(fmt = "server responded with status {}", _0)]
	#[from(ignore)]
	Status(#[error(not(source))] reqwest::StatusCode),
	#[display(fmt = "malformed response: {}", _0)]
	Decode(serde_json::Error),
}

impl Client {
	/// Create a client for the server at `base_url`. Endpoints resolve relative to it, so `http://host/api` serves predictions from `http://host/api/predict`.
	pub fn new(mut base_url: Url) -> Client {
		if !base_url.path().ends_with('/') {
			let path = format!("{}/", base_url.path());
			base_url.set_path(&path);
		}
		Client {
			base_url,
			http: reqwest::Client::new(),
		}
	}

	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// `POST /predict` with the record as a json object keyed by feature name.
	pub async fn predict(&self, input: &InputRecord) -> Result<Prediction, ClientError> {
		let url = self.base_url.join("predict")?;
		tracing::debug!(%url, "requesting prediction");
		let response = self.http.post(url).json(input).send().await?;
		decode(response).await
	}

	/// `GET /metrics`.
	pub async fn metrics(&self) -> Result<Metrics, ClientError> {
		let url = self.base_url.join("metrics")?;
		tracing::debug!(%url, "requesting metrics");
		let response = self.http.get(url).send().await?;
		decode(response).await
	}
}

async fn decode<T>(response: reqwest::Response) -> Result<T, ClientError>
where
	T: serde::de::DeserializeOwned,
{
	let status = response.status();
	if !status.is_success() {
		return Err(ClientError::Status(status));
	}
	let body = response.bytes().await?;
	let value = serde_json::from_slice(&body)?;
	Ok(value)
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{features::FEATURE_NAMES, Diagnosis};
	use hyper::service::{make_service_fn, service_fn};
	use hyper::{Body, Request, Response, StatusCode};
	use std::convert::Infallible;
	use std::sync::{Arc, Mutex};

	/// A stand in for the prediction server that records the body of every request and answers each path with a canned response.
	struct Upstream {
		requests: Mutex<Vec<(String, String, serde_json::Value)>>,
		responses: Vec<(&'static str, StatusCode, &'static str)>,
	}

	async fn handle(upstream: Arc<Upstream>, request: Request<Body>) -> Result<Response<Body>, Infallible> {
		let method = request.method().to_string();
		let path = request.uri().path().to_owned();
		let body = hyper::body::to_bytes(request.into_body()).await.unwrap_or_default();
		let body = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
		upstream.requests.lock().unwrap().push((method, path.clone(), body));
		let (status, body) = upstream
			.responses
			.iter()
			.find(|(response_path, _, _)| *response_path == path)
			.map(|(_, status, body)| (*status, *body))
			.unwrap_or((StatusCode::NOT_FOUND, "not found"));
		let mut response = Response::new(Body::from(body));
		*response.status_mut() = status;
		Ok(response)
	}

	fn start(responses: Vec<(&'static str, StatusCode, &'static str)>) -> (Client, Arc<Upstream>) {
		let upstream = Arc::new(Upstream {
			requests: Mutex::new(Vec::new()),
			responses,
		});
		let service_upstream = upstream.clone();
		let make_service = make_service_fn(move |_| {
			let upstream = service_upstream.clone();
			async move {
				Ok::<_, Infallible>(service_fn(move |request| handle(upstream.clone(), request)))
			}
		});
		let server = hyper::Server::bind(&([127, 0, 0, 1], 0).into()).serve(make_service);
		let url = Url::parse(&format!("http://{}/", server.local_addr())).unwrap();
		tokio::spawn(server);
		(Client::new(url), upstream)
	}

	#[tokio::test]
	async fn test_predict() {
		let (client, upstream) = start(vec![(
			"/predict",
			StatusCode::OK,
			r#"{"prediction": 1, "probability": 0.87}"#,
		)]);
		let input = InputRecord::from_fields(|_| Some("0"));
		let prediction = client.predict(&input).await.unwrap();
		assert_eq!(prediction.prediction, Diagnosis::Malignant);
		assert_eq!(prediction.probability, 0.87);
		let requests = upstream.requests.lock().unwrap();
		assert_eq!(requests.len(), 1);
		let (method, path, body) = &requests[0];
		assert_eq!(method, "POST");
		assert_eq!(path, "/predict");
		let body = body.as_object().unwrap();
		assert_eq!(body.len(), FEATURE_NAMES.len());
		for name in FEATURE_NAMES.iter() {
			assert_eq!(body[*name], serde_json::json!(0.0));
		}
	}

	#[tokio::test]
	async fn test_metrics() {
		let (client, _) = start(vec![(
			"/metrics",
			StatusCode::OK,
			r#"{"accuracy": 0.955, "confusion_matrix": [[50, 3], [2, 40]], "classification_report": {}}"#,
		)]);
		let metrics = client.metrics().await.unwrap();
		assert_eq!(metrics.accuracy, 0.955);
		assert_eq!(metrics.confusion_matrix, [[50, 3], [2, 40]]);
	}

	#[tokio::test]
	async fn test_error_status() {
		let (client, upstream) = start(vec![(
			"/metrics",
			StatusCode::INTERNAL_SERVER_ERROR,
			"oops",
		)]);
		let error = client.metrics().await.unwrap_err();
		assert!(matches!(error, ClientError::Status(status) if status == StatusCode::INTERNAL_SERVER_ERROR));
		assert_eq!(error.to_string(), "server responded with status 500 Internal Server Error");
		// Failures are not retried.
		assert_eq!(upstream.requests.lock().unwrap().len(), 1);
	}

	#[tokio::test]
	async fn test_malformed_response() {
		let (client, _) = start(vec![("/predict", StatusCode::OK, "{\"prediction\": 1}")]);
		let input = InputRecord::from_fields(|_| None);
		let error = client.predict(&input).await.unwrap_err();
		assert!(matches!(error, ClientError::Decode(_)));
	}

	#[tokio::test]
	async fn test_base_url_with_path() {
		let (client, upstream) = start(vec![(
			"/api/metrics",
			StatusCode::OK,
			r#"{"accuracy": 1.0, "confusion_matrix": [[1, 0], [0, 1]], "classification_report": {}}"#,
		)]);
		let base_url = client.base_url().join("api").unwrap();
		let client = Client::new(base_url);
		client.metrics().await.unwrap();
		assert_eq!(client.base_url().path(), "/api/");
		assert_eq!(upstream.requests.lock().unwrap()[0].1, "/api/metrics");
	}
}
