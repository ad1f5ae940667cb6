/// Format `value` with exactly `digits` digits after the decimal point, rounding half away from zero on the exact binary value. This matches `Number.prototype.toFixed`, so `to_fixed(0.125, 2)` is `"0.13"` where `format!("{:.2}", 0.125)` gives `"0.12"`.
pub fn to_fixed(value: f64, digits: usize) -> String {
	if value.is_nan() {
		return "NaN".to_owned();
	}
	if value.is_infinite() {
		return if value > 0.0 {
			"Infinity".to_owned()
		} else {
			"-Infinity".to_owned()
		};
	}
	let sign = if value < 0.0 { "-" } else { "" };
	// Enough extra digits that a value just below a tie never rounds up to the tie.
	let expanded = format!("{:.*}", digits + 32, value.abs());
	let (integer, fraction) = match expanded.split_once('.') {
		Some(parts) => parts,
		None => (expanded.as_str(), ""),
	};
	let mut kept: Vec<u8> = integer
		.bytes()
		.chain(fraction.bytes().take(digits))
		.map(|byte| byte - b'0')
		.collect();
	let round_up = fraction
		.bytes()
		.nth(digits)
		.map(|byte| byte >= b'5')
		.unwrap_or(false);
	if round_up {
		let mut carry = true;
		for digit in kept.iter_mut().rev() {
			if *digit == 9 {
				*digit = 0;
			} else {
				*digit += 1;
				carry = false;
				break;
			}
		}
		if carry {
			kept.insert(0, 1);
		}
	}
	let integer_len = kept.len() - digits;
	let mut output = String::with_capacity(kept.len() + 2);
	output.push_str(sign);
	for (index, digit) in kept.iter().enumerate() {
		if index == integer_len {
			output.push('.');
		}
		output.push((b'0' + digit) as char);
	}
	output
}

/// Format a fraction as a percentage with two decimals, as in `0.955` to `"95.50%"`.
pub fn format_percent(value: f64) -> String {
	format!("{}%", to_fixed(value * 100.0, 2))
}

/// Format a number in its shortest round trip form, so integral values print without a fractional part: `53.0` becomes `"53"`.
pub fn format_number(value: f64) -> String {
	if value.is_nan() {
		"NaN".to_owned()
	} else if value.is_infinite() {
		if value > 0.0 {
			"Infinity".to_owned()
		} else {
			"-Infinity".to_owned()
		}
	} else {
		value.to_string()
	}
}

#[test]
fn test_to_fixed() {
	assert_eq!(to_fixed(0.0, 2), "0.00");
	assert_eq!(to_fixed(87.0, 2), "87.00");
	assert_eq!(to_fixed(0.96, 2), "0.96");
	assert_eq!(to_fixed(0.125, 2), "0.13");
	assert_eq!(to_fixed(2.5, 0), "3");
	assert_eq!(to_fixed(9.999, 2), "10.00");
	assert_eq!(to_fixed(99.995, 2), "100.00");
	assert_eq!(to_fixed(1.005, 2), "1.00");
	assert_eq!(to_fixed(-0.001, 2), "-0.00");
	assert_eq!(to_fixed(-1.5, 0), "-2");
	assert_eq!(to_fixed(f64::NAN, 2), "NaN");
	assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
}

#[test]
fn test_format_percent() {
	assert_eq!(format_percent(0.0), "0.00%");
	assert_eq!(format_percent(0.424292), "42.43%");
	assert_eq!(format_percent(0.955), "95.50%");
	assert_eq!(format_percent(0.87), "87.00%");
	assert_eq!(format_percent(1.0), "100.00%");
}

#[test]
fn test_format_number() {
	assert_eq!(format_number(53.0), "53");
	assert_eq!(format_number(0.5), "0.5");
	assert_eq!(format_number(-2.0), "-2");
	assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
}
