use num_traits::ToPrimitive;

// The confusion matrix arrives indexed as [actual][predicted]. Each cell becomes one point on a 2x2 grid.
//
//                      Predicted Benign   Predicted Malignant
//                          (x = 0)             (x = 1)
//   Actual Benign     (y = 1)   [0][0]              [0][1]
//   Actual Malignant  (y = 0)   [1][0]              [1][1]

pub const X_AXIS_LABELS: [&str; 2] = ["Predicted Benign", "Predicted Malignant"];
pub const Y_AXIS_LABELS: [&str; 2] = ["Actual Benign", "Actual Malignant"];

/// Both axes span this range so the cells at 0 and 1 sit in the middle of their halves.
pub const AXIS_MIN: f64 = -0.5;
pub const AXIS_MAX: f64 = 1.5;

#[derive(Clone, Debug, PartialEq)]
pub struct ConfusionMatrixChartOptions {
	pub points: Vec<ConfusionMatrixPoint>,
	pub max_value: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfusionMatrixPoint {
	pub x: usize,
	pub y: usize,
	pub value: u64,
}

impl ConfusionMatrixChartOptions {
	/// Lay out a confusion matrix indexed as `[actual][predicted]`. Row `actual` is drawn at y = 1 - actual, so the benign row sits at the top next to the "Actual Benign" tick. Drawing `[0][0]` at y = 0 instead would put the true negatives beside the "Actual Malignant" tick, so this layout deliberately flips the rows.
	pub fn new(confusion_matrix: [[u64; 2]; 2]) -> ConfusionMatrixChartOptions {
		let mut points = Vec::with_capacity(4);
		for (actual, row) in confusion_matrix.iter().enumerate() {
			for (predicted, value) in row.iter().enumerate() {
				points.push(ConfusionMatrixPoint {
					x: predicted,
					y: 1 - actual,
					value: *value,
				});
			}
		}
		let max_value = points.iter().map(|point| point.value).max().unwrap_or(0);
		ConfusionMatrixChartOptions { points, max_value }
	}

	/// The fill opacity of a point: its count relative to the largest count. The largest cell is always fully opaque. When every count is zero this is NaN.
	pub fn opacity(&self, point: &ConfusionMatrixPoint) -> f64 {
		point.value.to_f64().unwrap() / self.max_value.to_f64().unwrap()
	}
}

/// The label of the tick at `value` on the x axis.
pub fn x_axis_label(value: usize) -> &'static str {
	X_AXIS_LABELS[value]
}

/// The label of the tick at `value` on the y axis. The y axis points up, so the first label belongs at the top.
pub fn y_axis_label(value: usize) -> &'static str {
	Y_AXIS_LABELS[1 - value]
}
