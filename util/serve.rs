use backtrace::Backtrace;
use futures::FutureExt;
use sha2::{Digest, Sha256};
use std::{cell::RefCell, convert::Infallible, future::Future, panic::AssertUnwindSafe, sync::Arc};

/// Run an http server on `addr`, handing each request to `request_handler` along with a shared reference to `request_handler_context`. A panic in the request handler is caught and turned into a 500 response.
pub async fn serve<C, H, F>(
	addr: std::net::SocketAddr,
	request_handler_context: C,
	request_handler: H,
) -> hyper::Result<()>
where
	C: Send + Sync + 'static,
	H: Fn(Arc<C>, http::Request<hyper::Body>) -> F + Send + Sync + 'static,
	F: Future<Output = http::Response<hyper::Body>> + Send,
{
	// Create a task local that will store the panic message and backtrace if a panic occurs.
	tokio::task_local! {
		static PANIC_MESSAGE_AND_BACKTRACE: RefCell<Option<(String, Backtrace)>>;
	}
	async fn service<C, H, F>(
		request_handler: Arc<H>,
		request_handler_context: Arc<C>,
		request: http::Request<hyper::Body>,
	) -> Result<http::Response<hyper::Body>, Infallible>
	where
		C: Send + Sync + 'static,
		H: Fn(Arc<C>, http::Request<hyper::Body>) -> F + Send + Sync + 'static,
		F: Future<Output = http::Response<hyper::Body>> + Send,
	{
		let method = request.method().clone();
		let path = request.uri().path().to_owned();
		let result = AssertUnwindSafe(request_handler(request_handler_context, request))
			.catch_unwind()
			.await;
		let response = result.unwrap_or_else(|_| {
			let message = PANIC_MESSAGE_AND_BACKTRACE
				.try_with(|panic_message_and_backtrace| {
					panic_message_and_backtrace
						.borrow()
						.as_ref()
						.map(|(message, backtrace)| format!("{}\n{:?}", message, backtrace))
				})
				.ok()
				.flatten()
				.unwrap_or_default();
			tracing::error!(%method, %path, "{}", message);
			let body = if cfg!(debug_assertions) {
				message
			} else {
				"internal server error".to_owned()
			};
			let mut response = http::Response::new(hyper::Body::from(body));
			*response.status_mut() = http::StatusCode::INTERNAL_SERVER_ERROR;
			response
		});
		Ok(response)
	}
	// Install a panic hook that will record the panic message and backtrace if a panic occurs.
	let hook = std::panic::take_hook();
	std::panic::set_hook(Box::new(|panic_info| {
		let value = (panic_info.to_string(), Backtrace::new());
		let _ = PANIC_MESSAGE_AND_BACKTRACE.try_with(|panic_message_and_backtrace| {
			panic_message_and_backtrace.borrow_mut().replace(value);
		});
	}));
	// Wrap the request handler and context with Arc to allow sharing a reference to it with each task.
	let request_handler = Arc::new(request_handler);
	let request_handler_context = Arc::new(request_handler_context);
	let service = hyper::service::make_service_fn(|_| {
		let request_handler = request_handler.clone();
		let request_handler_context = request_handler_context.clone();
		async move {
			Ok::<_, Infallible>(hyper::service::service_fn(move |request| {
				let request_handler = request_handler.clone();
				let request_handler_context = request_handler_context.clone();
				PANIC_MESSAGE_AND_BACKTRACE.scope(RefCell::new(None), async move {
					service(request_handler, request_handler_context, request).await
				})
			}))
		}
	});
	let server = hyper::Server::try_bind(&addr)?;
	tracing::info!(%addr, "serving");
	let result = server.serve(service).await;
	std::panic::set_hook(hook);
	result
}

/// Hash some content to a short hex string, suitable for cache busting asset urls.
pub fn hash(content: &str) -> String {
	let mut hash = Sha256::new();
	hash.update(content);
	let hash = hex::encode(hash.finalize());
	hash[0..16].to_owned()
}

#[test]
fn test_hash() {
	let a = hash("body { margin: 0; }");
	assert_eq!(a.len(), 16);
	assert_eq!(a, hash("body { margin: 0; }"));
	assert_ne!(a, hash("body { margin: 1px; }"));
}
