use crate::{error::Error, Context};
use diagnosis_util::error::Result;
use hyper::{header, Body, Request, Response, StatusCode};

pub const STYLESHEET: &str = include_str!("styles.css");

/// The path the stylesheet is served at. The content hash in the file name lets browsers cache it forever.
pub fn stylesheet_href(stylesheet_hash: &str) -> String {
	format!("/assets/{}.css", stylesheet_hash)
}

pub async fn get(context: &Context, _request: Request<Body>, file_name: &str) -> Result<Response<Body>> {
	if file_name != format!("{}.css", context.stylesheet_hash) {
		return Err(Error::NotFound.into());
	}
	let response = Response::builder()
		.status(StatusCode::OK)
		.header(header::CONTENT_TYPE, "text/css; charset=utf-8")
		.header(header::CACHE_CONTROL, "public, max-age=31536000, immutable")
		.body(Body::from(STYLESHEET))?;
	Ok(response)
}
