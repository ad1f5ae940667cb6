/// The 30 measurements of a breast mass that the model takes as input, in display order. The prediction server matches values to features by these exact names.
pub const FEATURE_NAMES: [&str; 30] = [
	"mean radius",
	"mean texture",
	"mean perimeter",
	"mean area",
	"mean smoothness",
	"mean compactness",
	"mean concavity",
	"mean concave points",
	"mean symmetry",
	"mean fractal dimension",
	"radius error",
	"texture error",
	"perimeter error",
	"area error",
	"smoothness error",
	"compactness error",
	"concavity error",
	"concave points error",
	"symmetry error",
	"fractal dimension error",
	"worst radius",
	"worst texture",
	"worst perimeter",
	"worst area",
	"worst smoothness",
	"worst compactness",
	"worst concavity",
	"worst concave points",
	"worst symmetry",
	"worst fractal dimension",
];

/// The id of the input element for a feature: its name with every space replaced by an underscore.
pub fn input_id(feature_name: &str) -> String {
	feature_name.replace(' ', "_")
}

#[test]
fn test_feature_names_are_distinct() {
	let mut names = FEATURE_NAMES.to_vec();
	names.sort_unstable();
	names.dedup();
	assert_eq!(names.len(), 30);
}

#[test]
fn test_input_id() {
	assert_eq!(input_id("mean radius"), "mean_radius");
	assert_eq!(input_id("worst concave points"), "worst_concave_points");
	assert_eq!(input_id("area error"), "area_error");
	for name in FEATURE_NAMES.iter() {
		assert!(!input_id(name).contains(' '));
	}
}
