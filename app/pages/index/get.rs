use super::page::render;
use crate::{assets::stylesheet_href, layouts::document::PageInfo, renderer::Page, Context};
use diagnosis_util::error::Result;
use hyper::{header, Body, Request, Response, StatusCode};
use std::collections::BTreeMap;

/// Render the page. Query parameters named after a feature prefill its input.
pub async fn get(
	context: &Context,
	_request: Request<Body>,
	search_params: Option<BTreeMap<String, String>>,
) -> Result<Response<Body>> {
	let page = Page::from_fields(search_params.unwrap_or_default());
	let page_info = PageInfo {
		stylesheet_href: stylesheet_href(&context.stylesheet_hash),
	};
	let html = render(page, page_info);
	let response = Response::builder()
		.status(StatusCode::OK)
		.header(header::CONTENT_TYPE, "text/html; charset=utf-8")
		.body(Body::from(html))?;
	Ok(response)
}
