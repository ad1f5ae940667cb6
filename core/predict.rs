/// The predicted class of a tumor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Diagnosis {
	Benign,
	Malignant,
}

impl Diagnosis {
	/// The class label used by the prediction server. Any label other than 1 reads as benign.
	pub fn from_label(label: i64) -> Diagnosis {
		if label == 1 {
			Diagnosis::Malignant
		} else {
			Diagnosis::Benign
		}
	}

	pub fn label(self) -> i64 {
		match self {
			Diagnosis::Benign => 0,
			Diagnosis::Malignant => 1,
		}
	}

	pub fn name(self) -> &'static str {
		match self {
			Diagnosis::Benign => "Benign",
			Diagnosis::Malignant => "Malignant",
		}
	}
}

impl std::fmt::Display for Diagnosis {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.name())
	}
}

/// The response of the prediction server.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq)]
pub struct Prediction {
	#[serde(with = "diagnosis_label")]
	pub prediction: Diagnosis,
	/// The probability that the tumor is malignant, regardless of the predicted class.
	pub probability: f64,
}

mod diagnosis_label {
	use super::Diagnosis;

	pub fn serialize<S>(diagnosis: &Diagnosis, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(diagnosis.label())
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<Diagnosis, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let label: i64 = serde::Deserialize::deserialize(deserializer)?;
		Ok(Diagnosis::from_label(label))
	}
}
