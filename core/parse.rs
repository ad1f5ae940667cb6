/// Parse the longest numeric prefix of `text` the way a browser's `parseFloat` does. Leading whitespace is skipped, trailing garbage is ignored, and text with no numeric prefix (including the empty string) parses to NaN.
pub fn parse_float(text: &str) -> f64 {
	let text = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
	let bytes = text.as_bytes();
	let mut end = 0;
	if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
		end += 1;
	}
	if text[end..].starts_with("Infinity") {
		return if bytes.first() == Some(&b'-') {
			f64::NEG_INFINITY
		} else {
			f64::INFINITY
		};
	}
	let integer_digits = count_digits(&bytes[end..]);
	end += integer_digits;
	let mut fraction_digits = 0;
	if bytes.get(end) == Some(&b'.') {
		fraction_digits = count_digits(&bytes[end + 1..]);
		if integer_digits > 0 || fraction_digits > 0 {
			end += 1 + fraction_digits;
		}
	}
	if integer_digits == 0 && fraction_digits == 0 {
		return f64::NAN;
	}
	if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
		let mut exponent_end = end + 1;
		if matches!(bytes.get(exponent_end), Some(b'+') | Some(b'-')) {
			exponent_end += 1;
		}
		let exponent_digits = count_digits(&bytes[exponent_end..]);
		if exponent_digits > 0 {
			end = exponent_end + exponent_digits;
		}
	}
	text[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
	bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

#[test]
fn test_parse_float() {
	assert_eq!(parse_float("0"), 0.0);
	assert_eq!(parse_float("17.99"), 17.99);
	assert_eq!(parse_float("  -3.5"), -3.5);
	assert_eq!(parse_float("+2"), 2.0);
	assert_eq!(parse_float(".5"), 0.5);
	assert_eq!(parse_float("5."), 5.0);
	assert_eq!(parse_float("1e3"), 1000.0);
	assert_eq!(parse_float("1.5E-2"), 0.015);
	assert_eq!(parse_float("12abc"), 12.0);
	assert_eq!(parse_float("1e"), 1.0);
	assert_eq!(parse_float("1e+"), 1.0);
	assert_eq!(parse_float("0x10"), 0.0);
	assert_eq!(parse_float("Infinity"), f64::INFINITY);
	assert_eq!(parse_float("-Infinityx"), f64::NEG_INFINITY);
}

#[test]
fn test_parse_float_nan() {
	assert!(parse_float("").is_nan());
	assert!(parse_float("   ").is_nan());
	assert!(parse_float("abc").is_nan());
	assert!(parse_float(".").is_nan());
	assert!(parse_float("-").is_nan());
	assert!(parse_float("-.e5").is_nan());
}
