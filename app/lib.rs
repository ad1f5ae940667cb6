//! The diagnosis app renders a form for the 30 measurements of a breast mass, forwards submissions to the prediction server, and renders its prediction and the model's evaluation metrics.

use self::error::Error;
use diagnosis_core::Client;
use diagnosis_util::error::Result;
use hyper::{Body, Method, Request, Response, StatusCode};
use std::{collections::BTreeMap, net::SocketAddr, sync::Arc};
use url::Url;

mod assets;
mod components;
pub mod error;
mod layouts;
mod pages;
pub mod renderer;

pub use self::components::{render_metrics, render_prediction};

pub struct Options {
	pub host: std::net::IpAddr,
	pub port: u16,
	/// The base url of the prediction server.
	pub url: Url,
}

pub struct Context {
	pub options: Options,
	pub client: Client,
	pub stylesheet_hash: String,
}

impl Context {
	pub fn new(options: Options) -> Context {
		let client = Client::new(options.url.clone());
		Context {
			options,
			client,
			stylesheet_hash: diagnosis_util::serve::hash(assets::STYLESHEET),
		}
	}
}

pub async fn handle(context: Arc<Context>, request: Request<Body>) -> Response<Body> {
	let method = request.method().clone();
	let uri = request.uri().clone();
	let path = uri.path();
	let search_params: Option<BTreeMap<String, String>> = uri.query().map(|search_params| {
		url::form_urlencoded::parse(search_params.as_bytes())
			.into_owned()
			.collect()
	});
	let path_components: Vec<_> = path.split('/').skip(1).collect();
	let result = match (&method, path_components.as_slice()) {
		(&Method::GET, &[""]) => pages::index::get(&context, request, search_params).await,
		(&Method::POST, &[""]) => pages::index::post(&context, request).await,
		(&Method::GET, &["health"]) => pages::health::get(&context, request).await,
		(&Method::GET, &["assets", file_name]) => assets::get(&context, request, file_name).await,
		_ => Err(Error::NotFound.into()),
	};
	let response = match result {
		Ok(response) => response,
		Err(error) => error_response(error),
	};
	tracing::info!(%method, %path, status = %response.status(), "request");
	response
}

fn error_response(error: anyhow::Error) -> Response<Body> {
	let (status, body) = match error.downcast_ref::<Error>() {
		Some(Error::BadRequest) => (StatusCode::BAD_REQUEST, "bad request".to_owned()),
		Some(Error::NotFound) => (StatusCode::NOT_FOUND, "not found".to_owned()),
		None => {
			tracing::error!(%error, "request failed");
			let body = if cfg!(debug_assertions) {
				error.to_string()
			} else {
				"internal server error".to_owned()
			};
			(StatusCode::INTERNAL_SERVER_ERROR, body)
		}
	};
	let mut response = Response::new(Body::from(body));
	*response.status_mut() = status;
	response
}

pub fn run(options: Options) -> Result<()> {
	tokio::runtime::Builder::new_multi_thread()
		.enable_all()
		.build()?
		.block_on(run_impl(options))
}

async fn run_impl(options: Options) -> Result<()> {
	let addr = SocketAddr::new(options.host, options.port);
	let context = Context::new(options);
	tracing::info!(upstream = %context.client.base_url(), "forwarding to the prediction server");
	diagnosis_util::serve::serve(addr, context, handle).await?;
	Ok(())
}

#[cfg(test)]
mod test;
