pub use anyhow::{Error, Result};

/// Create an `anyhow::Error` from a format string.
#[macro_export]
macro_rules! err {
	($($t:tt)*) => {
		$crate::error::Error::msg(format!($($t)*))
	};
}

#[test]
fn test_err() {
	let port = 8080;
	let error: Error = err!("failed to bind port {}", port);
	assert_eq!(error.to_string(), "failed to bind port 8080");
}
