use derive_more::{Display, Error};

/// Errors a request handler returns to select a specific response status.
#[derive(Display, Debug, Error)]
pub enum Error {
	BadRequest,
	NotFound,
}
