/// Evaluation metrics of the model on its test split, as reported by the prediction server.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq)]
pub struct Metrics {
	pub accuracy: f64,
	/// Counts indexed as `[actual][predicted]`, with class 0 benign and class 1 malignant.
	pub confusion_matrix: [[u64; 2]; 2],
	pub classification_report: ClassificationReport,
}

/// The classification report: one entry per class label followed by summary entries such as `accuracy`, `macro avg`, and `weighted avg`. Entries keep the order the server sent them in.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct ClassificationReport(pub serde_json::Map<String, serde_json::Value>);

/// The number of summary entries at the end of a classification report.
pub const SUMMARY_ENTRY_COUNT: usize = 3;

#[derive(serde::Deserialize, Clone, Debug, PartialEq)]
pub struct ClassMetrics {
	pub precision: f64,
	pub recall: f64,
	#[serde(rename = "f1-score")]
	pub f1_score: f64,
	pub support: f64,
}

impl ClassificationReport {
	/// The entries in the order a browser enumerates the keys of a json object: keys that are array indexes ("0", "1", ...) first in ascending numeric order, then the remaining keys in document order.
	pub fn entries(&self) -> Vec<(&str, &serde_json::Value)> {
		let mut indexes = Vec::new();
		let mut others = Vec::new();
		for (key, value) in self.0.iter() {
			match array_index(key) {
				Some(index) => indexes.push((index, (key.as_str(), value))),
				None => others.push((key.as_str(), value)),
			}
		}
		indexes.sort_by_key(|(index, _)| *index);
		indexes
			.into_iter()
			.map(|(_, entry)| entry)
			.chain(others)
			.collect()
	}

	/// The per class rows: every entry except the trailing summary entries. Entries that do not hold class metrics are skipped.
	pub fn class_rows(&self) -> Vec<(String, ClassMetrics)> {
		let entries = self.entries();
		let n_rows = entries.len().saturating_sub(SUMMARY_ENTRY_COUNT);
		entries
			.into_iter()
			.take(n_rows)
			.filter_map(|(key, value)| {
				let metrics = serde_json::from_value::<ClassMetrics>(value.clone());
				match metrics {
					Ok(metrics) => Some((key.to_owned(), metrics)),
					Err(error) => {
						tracing::warn!(class = key, %error, "skipping classification report entry");
						None
					}
				}
			})
			.collect()
	}
}

/// Parse a key that is a canonical array index: a decimal integer without leading zeros below 2^32 - 1.
fn array_index(key: &str) -> Option<u32> {
	if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
		return None;
	}
	if !key.bytes().all(|byte| byte.is_ascii_digit()) {
		return None;
	}
	key.parse::<u32>().ok().filter(|index| *index != u32::MAX)
}

#[cfg(test)]
mod test {
	use super::*;

	const METRICS: &str = r#"{
		"accuracy": 0.955,
		"confusion_matrix": [[50, 3], [2, 40]],
		"classification_report": {
			"0": {"precision": 0.96, "recall": 0.94, "f1-score": 0.95, "support": 53},
			"1": {"precision": 0.93, "recall": 0.95, "f1-score": 0.94, "support": 42},
			"accuracy": 0.955,
			"macro avg": {"precision": 0.945, "recall": 0.945, "f1-score": 0.945, "support": 95},
			"weighted avg": {"precision": 0.95, "recall": 0.95, "f1-score": 0.95, "support": 95}
		}
	}"#;

	#[test]
	fn test_deserialize() {
		let metrics: Metrics = serde_json::from_str(METRICS).unwrap();
		assert_eq!(metrics.accuracy, 0.955);
		assert_eq!(metrics.confusion_matrix, [[50, 3], [2, 40]]);
		let keys = metrics
			.classification_report
			.entries()
			.into_iter()
			.map(|(key, _)| key)
			.collect::<Vec<_>>();
		assert_eq!(keys, vec!["0", "1", "accuracy", "macro avg", "weighted avg"]);
	}

	#[test]
	fn test_class_rows_exclude_summary() {
		let metrics: Metrics = serde_json::from_str(METRICS).unwrap();
		let rows = metrics.classification_report.class_rows();
		insta::assert_debug_snapshot!(rows, @r###"
		[
		    (
		        "0",
		        ClassMetrics {
		            precision: 0.96,
		            recall: 0.94,
		            f1_score: 0.95,
		            support: 53.0,
		        },
		    ),
		    (
		        "1",
		        ClassMetrics {
		            precision: 0.93,
		            recall: 0.95,
		            f1_score: 0.94,
		            support: 42.0,
		        },
		    ),
		]
		"###);
	}

	#[test]
	fn test_index_keys_come_first() {
		let report: ClassificationReport = serde_json::from_str(
			r#"{"accuracy": 1.0, "10": {}, "2": {}, "macro avg": {}, "02": {}}"#,
		)
		.unwrap();
		let keys = report
			.entries()
			.into_iter()
			.map(|(key, _)| key)
			.collect::<Vec<_>>();
		assert_eq!(keys, vec!["2", "10", "accuracy", "macro avg", "02"]);
	}

	#[test]
	fn test_short_report() {
		let report: ClassificationReport =
			serde_json::from_str(r#"{"accuracy": 1.0, "macro avg": {}}"#).unwrap();
		assert!(report.class_rows().is_empty());
	}

	#[test]
	fn test_array_index() {
		assert_eq!(array_index("0"), Some(0));
		assert_eq!(array_index("42"), Some(42));
		assert_eq!(array_index("042"), None);
		assert_eq!(array_index("-1"), None);
		assert_eq!(array_index("macro avg"), None);
		assert_eq!(array_index("4294967295"), None);
	}
}
