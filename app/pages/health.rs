use crate::Context;
use diagnosis_util::error::Result;
use hyper::{Body, Request, Response, StatusCode};

pub async fn get(_context: &Context, _request: Request<Body>) -> Result<Response<Body>> {
	let response = Response::builder()
		.status(StatusCode::OK)
		.body(Body::from("ok"))?;
	Ok(response)
}
