use super::page::render;
use crate::{
	assets::stylesheet_href,
	error::Error,
	layouts::document::PageInfo,
	renderer::{self, Page},
	Context,
};
use diagnosis_util::error::Result;
use hyper::{header, Body, Request, Response, StatusCode};

enum Action {
	Predict,
	ShowMetrics,
}

impl std::str::FromStr for Action {
	type Err = Error;
	fn from_str(value: &str) -> Result<Action, Error> {
		match value {
			"predict" => Ok(Action::Predict),
			"metrics" => Ok(Action::ShowMetrics),
			_ => Err(Error::BadRequest),
		}
	}
}

/// Run the submitted action and render the page with the submitted values kept in their inputs. Only the action's own region changes: the other region is restored from the hidden state fields.
pub async fn post(context: &Context, mut request: Request<Body>) -> Result<Response<Body>> {
	let data = hyper::body::to_bytes(request.body_mut())
		.await
		.map_err(|_| Error::BadRequest)?;
	let fields: Vec<(String, String)> =
		serde_urlencoded::from_bytes(&data).map_err(|_| Error::BadRequest)?;
	let action: Action = fields
		.iter()
		.find(|(name, _)| name == "action")
		.ok_or(Error::BadRequest)?
		.1
		.parse()?;
	let mut page = Page::from_fields(fields);
	let result = match action {
		Action::Predict => renderer::predict(&context.client, &mut page).await,
		Action::ShowMetrics => renderer::show_metrics(&context.client, &mut page).await,
	};
	// A failed request still renders the page as the action left it, so a failed metrics request keeps the panel revealed.
	let status = match result {
		Ok(()) => StatusCode::OK,
		Err(error) => {
			tracing::warn!(%error, url = %context.client.base_url(), "prediction server request failed");
			StatusCode::SERVICE_UNAVAILABLE
		}
	};
	let page_info = PageInfo {
		stylesheet_href: stylesheet_href(&context.stylesheet_hash),
	};
	let html = render(page, page_info);
	let response = Response::builder()
		.status(status)
		.header(header::CONTENT_TYPE, "text/html; charset=utf-8")
		.body(Body::from(html))?;
	Ok(response)
}
