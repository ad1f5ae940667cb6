pub struct ChartConfig {
	pub width: f64,
	pub height: f64,
	pub top_padding: f64,
	pub right_padding: f64,
	pub bottom_padding: f64,
	pub left_padding: f64,
	pub font_size: f64,
	pub label_padding: f64,
	pub point_radius: f64,
	pub point_color: &'static str,
	pub label_color: &'static str,
	pub axis_color: &'static str,
}

pub const CHART_CONFIG: ChartConfig = ChartConfig {
	width: 480.0,
	height: 400.0,
	top_padding: 16.0,
	right_padding: 16.0,
	bottom_padding: 16.0,
	left_padding: 16.0,
	font_size: 12.0,
	label_padding: 8.0,
	point_radius: 30.0,
	point_color: "rgb(66, 135, 245)",
	label_color: "#fff",
	axis_color: "#ccc",
};
