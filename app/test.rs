use super::*;
use diagnosis_core::{features::FEATURE_NAMES, Diagnosis, Metrics, Prediction};
use hyper::service::{make_service_fn, service_fn};
use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};

const METRICS: &str = r#"{
	"accuracy": 0.955,
	"confusion_matrix": [[50, 3], [2, 40]],
	"classification_report": {
		"0": {"precision": 0.96, "recall": 0.94, "f1-score": 0.95, "support": 53},
		"1": {"precision": 0.93, "recall": 0.95, "f1-score": 0.94, "support": 42},
		"accuracy": 0.955,
		"macro avg": {"precision": 0.945, "recall": 0.945, "f1-score": 0.945, "support": 95},
		"weighted avg": {"precision": 0.95, "recall": 0.95, "f1-score": 0.95, "support": 95}
	}
}"#;

const PREDICTION: &str = r#"{"prediction": 1, "probability": 0.87}"#;

/// Start a stand in for the prediction server that answers `/predict` and `/metrics` with canned bodies and counts the requests it receives.
fn start_upstream() -> (Url, Arc<AtomicUsize>) {
	let n_requests = Arc::new(AtomicUsize::new(0));
	let counter = n_requests.clone();
	let make_service = make_service_fn(move |_| {
		let counter = counter.clone();
		async move {
			Ok::<_, Infallible>(service_fn(move |request: Request<Body>| {
				counter.fetch_add(1, Ordering::SeqCst);
				let body = match request.uri().path() {
					"/predict" => Some(PREDICTION),
					"/metrics" => Some(METRICS),
					_ => None,
				};
				async move {
					let response = match body {
						Some(body) => Response::new(Body::from(body)),
						None => {
							let mut response = Response::new(Body::empty());
							*response.status_mut() = StatusCode::NOT_FOUND;
							response
						}
					};
					Ok::<_, Infallible>(response)
				}
			}))
		}
	});
	let server = hyper::Server::bind(&([127, 0, 0, 1], 0).into()).serve(make_service);
	let url = Url::parse(&format!("http://{}/", server.local_addr())).unwrap();
	tokio::spawn(server);
	(url, n_requests)
}

fn context(url: Url) -> Arc<Context> {
	Arc::new(Context::new(Options {
		host: [127, 0, 0, 1].into(),
		port: 0,
		url,
	}))
}

/// A url nothing listens on.
fn unreachable_url() -> Url {
	let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
	let addr = listener.local_addr().unwrap();
	drop(listener);
	Url::parse(&format!("http://{}/", addr)).unwrap()
}

async fn send(context: &Arc<Context>, request: Request<Body>) -> (StatusCode, String) {
	let response = handle(context.clone(), request).await;
	let status = response.status();
	let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
	(status, String::from_utf8(body.to_vec()).unwrap())
}

fn post_form(body: String) -> Request<Body> {
	Request::builder()
		.method(Method::POST)
		.uri("/")
		.header(hyper::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
		.body(Body::from(body))
		.unwrap()
}

fn form_body(action: &str) -> String {
	let mut serializer = url::form_urlencoded::Serializer::new(String::new());
	for name in FEATURE_NAMES.iter() {
		serializer.append_pair(name, "0");
	}
	serializer.append_pair("action", action);
	serializer.finish()
}

#[tokio::test]
async fn test_form_has_one_input_per_feature() {
	let context = context(unreachable_url());
	let request = Request::get("/").body(Body::empty()).unwrap();
	let (status, html) = send(&context, request).await;
	assert_eq!(status, StatusCode::OK);
	assert!(html.starts_with("<!doctype html>"));
	assert!(html.contains(r#"id="inputForm""#));
	assert_eq!(html.matches(r#"type="number""#).count(), 30);
	for name in FEATURE_NAMES.iter() {
		let id = name.replace(' ', "_");
		assert_eq!(html.matches(&format!(r#"id="{}""#, id)).count(), 1);
	}
	assert!(html.contains(r#"id="mean_concave_points""#));
	assert!(html.contains(r#"id="metrics" style="display: none;""#));
	assert!(!html.contains("badge"));
}

#[tokio::test]
async fn test_query_prefills_inputs() {
	let context = context(unreachable_url());
	let request = Request::get("/?mean%20radius=17.99&unknown=1")
		.body(Body::empty())
		.unwrap();
	let (_, html) = send(&context, request).await;
	assert!(html.contains(r#"value="17.99""#));
	assert!(!html.contains(r#"name="unknown""#));
}

#[test]
fn test_render_malignant() {
	let html = render_prediction(&Prediction {
		prediction: Diagnosis::Malignant,
		probability: 0.87,
	});
	assert!(html.contains(r#"<span class="badge bg-danger">Malignant</span>"#));
	assert!(html.contains(r#"class="progress-bar bg-danger""#));
	assert!(html.contains(r#"style="width: 87.00%;""#));
	assert!(html.contains("Probability of Malignancy: 87.00%"));
}

#[test]
fn test_render_benign() {
	let html = render_prediction(&Prediction {
		prediction: Diagnosis::Benign,
		probability: 0.12,
	});
	assert!(html.contains(r#"<span class="badge bg-success">Benign</span>"#));
	assert!(html.contains(r#"class="progress-bar bg-success""#));
	assert!(html.contains(r#"style="width: 12.00%;""#));
	assert!(html.contains("Probability of Malignancy: 12.00%"));
}

#[test]
fn test_render_metrics() {
	let metrics: Metrics = serde_json::from_str(METRICS).unwrap();
	let html = render_metrics(&metrics);
	assert!(html.contains(r#"<div class="number-chart-value" id="accuracy">95.50%</div>"#));
	assert_eq!(html.matches("<circle").count(), 4);
	for count in &["50", "3", "2", "40"] {
		assert!(html.contains(&format!("<title>Count: {}</title>", count)));
	}
	assert_eq!(html.matches(r#"fill-opacity="1""#).count(), 1);
	let report = &html[html.find(r#"id="classificationReport""#).unwrap()..];
	assert_eq!(report.matches("<tr>").count(), 3);
	assert!(report.contains("<td>0</td><td>0.96</td><td>0.94</td><td>0.95</td><td>53</td>"));
	assert!(report.contains("<td>1</td><td>0.93</td><td>0.95</td><td>0.94</td><td>42</td>"));
	assert!(!report.contains("macro avg"));
	assert!(!report.contains("weighted avg"));
}

#[tokio::test]
async fn test_predict() {
	let (url, n_requests) = start_upstream();
	let context = context(url);
	let (status, html) = send(&context, post_form(form_body("predict"))).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(n_requests.load(Ordering::SeqCst), 1);
	assert!(html.contains("Malignant"));
	assert!(html.contains("Probability of Malignancy: 87.00%"));
	// The submitted values stay in their inputs.
	assert_eq!(html.matches(r#"value="0""#).count(), 30);
	// The metrics panel stays hidden.
	assert!(html.contains(r#"id="metrics" style="display: none;""#));
}

#[tokio::test]
async fn test_show_metrics() {
	let (url, _) = start_upstream();
	let context = context(url);
	let (status, html) = send(&context, post_form(form_body("metrics"))).await;
	assert_eq!(status, StatusCode::OK);
	assert!(html.contains(r#"<div class="metrics" id="metrics">"#));
	assert!(html.contains("95.50%"));
	assert!(html.contains(r#"id="confusionMatrix""#));
}

#[tokio::test]
async fn test_show_metrics_twice() {
	let (url, n_requests) = start_upstream();
	let client = Client::new(url);
	let mut page = renderer::Page::default();
	renderer::show_metrics(&client, &mut page).await.unwrap();
	let first = page.clone();
	renderer::show_metrics(&client, &mut page).await.unwrap();
	assert_eq!(n_requests.load(Ordering::SeqCst), 2);
	assert_eq!(page, first);
	let metrics = page.metrics.unwrap();
	assert_eq!(render_metrics(&metrics), render_metrics(&first.metrics.unwrap()));
}

/// The hidden fields of a rendered form, as a browser would submit them.
fn hidden_fields(html: &str) -> Vec<(String, String)> {
	let mut fields = Vec::new();
	let mut rest = html;
	while let Some(start) = rest.find("<input name=\"") {
		rest = &rest[start + "<input name=\"".len()..];
		let name_end = rest.find('"').unwrap();
		let name = &rest[..name_end];
		if let Some(value) = rest[name_end + 1..].strip_prefix(r#" type="hidden" value=""#) {
			let value_end = value.find('"').unwrap();
			let value = value[..value_end]
				.replace("&quot;", "\"")
				.replace("&apos;", "'")
				.replace("&lt;", "<")
				.replace("&gt;", ">")
				.replace("&amp;", "&");
			fields.push((name.to_owned(), value));
		}
	}
	fields
}

/// A form submission with every feature set to zero, the hidden fields of `html`, and `action`.
fn resubmit(html: &str, action: &str) -> Request<Body> {
	let mut serializer = url::form_urlencoded::Serializer::new(String::new());
	for name in FEATURE_NAMES.iter() {
		serializer.append_pair(name, "0");
	}
	for (name, value) in hidden_fields(html) {
		serializer.append_pair(&name, &value);
	}
	serializer.append_pair("action", action);
	post_form(serializer.finish())
}

#[tokio::test]
async fn test_each_action_keeps_the_other_region() {
	let (url, n_requests) = start_upstream();
	let context = context(url);
	let (_, html) = send(&context, post_form(form_body("predict"))).await;
	assert!(html.contains("Probability of Malignancy: 87.00%"));
	let (status, html) = send(&context, resubmit(&html, "metrics")).await;
	assert_eq!(status, StatusCode::OK);
	assert!(html.contains("Probability of Malignancy: 87.00%"));
	assert!(html.contains(r#"<div class="metrics" id="metrics">"#));
	assert!(html.contains(r#"id="accuracy">95.50%</div>"#));
	let (status, html) = send(&context, resubmit(&html, "predict")).await;
	assert_eq!(status, StatusCode::OK);
	assert!(html.contains("Probability of Malignancy: 87.00%"));
	assert!(html.contains(r#"<div class="metrics" id="metrics">"#));
	assert!(html.contains(r#"id="accuracy">95.50%</div>"#));
	assert_eq!(html.matches("<circle").count(), 4);
	// One upstream request per action.
	assert_eq!(n_requests.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_failed_predict_keeps_the_page() {
	let (url, _) = start_upstream();
	let (_, html) = send(&context(url), post_form(form_body("predict"))).await;
	let context = context(unreachable_url());
	let (status, html) = send(&context, resubmit(&html, "predict")).await;
	assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
	assert!(html.contains(r#"id="inputForm""#));
	assert_eq!(html.matches(r#"value="0""#).count(), 30);
	// The earlier result stays on screen.
	assert!(html.contains("Probability of Malignancy: 87.00%"));
	assert!(html.contains(r#"id="metrics" style="display: none;""#));
}

#[tokio::test]
async fn test_failed_metrics_reveal_the_panel() {
	let context = context(unreachable_url());
	let (status, html) = send(&context, post_form(form_body("metrics"))).await;
	assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
	assert_eq!(html.matches(r#"value="0""#).count(), 30);
	assert!(html.contains(r#"<div class="metrics" id="metrics">"#));
	assert!(!html.contains(r#"id="accuracy""#));
	assert!(!html.contains("badge"));
}

#[tokio::test]
async fn test_bad_action() {
	let context = context(unreachable_url());
	let (status, _) = send(&context, post_form(form_body("train"))).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	let (status, _) = send(&context, post_form("mean%20radius=1".to_owned())).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_routes() {
	let context = context(unreachable_url());
	let request = Request::get("/health").body(Body::empty()).unwrap();
	assert_eq!(send(&context, request).await.0, StatusCode::OK);
	let request = Request::get("/predict").body(Body::empty()).unwrap();
	assert_eq!(send(&context, request).await.0, StatusCode::NOT_FOUND);
	let href = assets::stylesheet_href(&context.stylesheet_hash);
	let request = Request::get(href.as_str()).body(Body::empty()).unwrap();
	let response = handle(context.clone(), request).await;
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(
		response.headers()[hyper::header::CACHE_CONTROL],
		"public, max-age=31536000, immutable"
	);
	let request = Request::get("/assets/0000000000000000.css")
		.body(Body::empty())
		.unwrap();
	assert_eq!(send(&context, request).await.0, StatusCode::NOT_FOUND);
}
