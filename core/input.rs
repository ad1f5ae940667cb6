use crate::{features::FEATURE_NAMES, parse::parse_float};
use serde::ser::SerializeMap;

/// The values of all 30 features, in feature order. A value that failed to parse is NaN and is sent to the prediction server as `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct InputRecord {
	values: [f64; 30],
}

impl InputRecord {
	/// Build a record by looking up the raw text entered for each feature. Features with no text parse to NaN.
	pub fn from_fields<'a, F>(mut field: F) -> InputRecord
	where
		F: FnMut(&str) -> Option<&'a str>,
	{
		let mut values = [f64::NAN; 30];
		for (value, name) in values.iter_mut().zip(FEATURE_NAMES.iter()) {
			*value = field(*name).map(parse_float).unwrap_or(f64::NAN);
		}
		InputRecord { values }
	}

	/// Build a record from a json object keyed by feature name. Numbers are taken as is, strings are parsed, and anything else is NaN.
	pub fn from_json(object: &serde_json::Map<String, serde_json::Value>) -> InputRecord {
		let mut values = [f64::NAN; 30];
		for (value, name) in values.iter_mut().zip(FEATURE_NAMES.iter()) {
			*value = match object.get(*name) {
				Some(serde_json::Value::Number(number)) => number.as_f64().unwrap_or(f64::NAN),
				Some(serde_json::Value::String(text)) => parse_float(text),
				_ => f64::NAN,
			};
		}
		InputRecord { values }
	}

	pub fn get(&self, feature_name: &str) -> Option<f64> {
		FEATURE_NAMES
			.iter()
			.position(|name| *name == feature_name)
			.map(|index| self.values[index])
	}

	pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
		FEATURE_NAMES.iter().copied().zip(self.values.iter().copied())
	}
}

impl serde::Serialize for InputRecord {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		let mut map = serializer.serialize_map(Some(FEATURE_NAMES.len()))?;
		for (name, value) in self.iter() {
			map.serialize_entry(name, &value)?;
		}
		map.end()
	}
}
