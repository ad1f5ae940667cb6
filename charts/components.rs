use crate::chart::{ChartBox, LinearScale, Point};
use crate::config::CHART_CONFIG;
use crate::confusion_matrix_chart::{
	x_axis_label, y_axis_label, ConfusionMatrixChartOptions, AXIS_MAX, AXIS_MIN,
};
use html::{component, html};
use num_traits::ToPrimitive;

#[component]
pub fn ChartTitle() {
	html! {
		<div class="chart-title">{children}</div>
	}
}

/// Width reserved to the left of the chart box for the y axis labels.
const Y_AXIS_LABELS_WIDTH: f64 = 110.0;

/// A 2x2 scatter grid with one point per confusion matrix cell.
#[component]
pub fn ConfusionMatrixChart(
	id: Option<String>,
	options: ConfusionMatrixChartOptions,
	title: Option<String>,
) {
	let config = &CHART_CONFIG;
	let chart_x = config.left_padding + Y_AXIS_LABELS_WIDTH + config.label_padding;
	let chart_box = ChartBox {
		x: chart_x,
		y: config.top_padding,
		w: config.width - chart_x - config.right_padding,
		h: config.height
			- config.top_padding
			- config.bottom_padding
			- config.font_size
			- config.label_padding,
	};
	let scale = LinearScale {
		chart_box,
		min: AXIS_MIN,
		max: AXIS_MAX,
	};
	let font_size = config.font_size.to_string();
	let x_axis_labels = (0..2)
		.map(|value| {
			let position = scale.to_pixels(Point {
				x: value.to_f64().unwrap(),
				y: AXIS_MIN,
			});
			html! {
				<text
					x={position.x.to_string()}
					y={(position.y + config.label_padding + config.font_size).to_string()}
					font-size={font_size.clone()}
					text-anchor="middle"
				>
					{x_axis_label(value)}
				</text>
			}
		})
		.collect::<Vec<_>>();
	let y_axis_labels = (0..2)
		.map(|value| {
			let position = scale.to_pixels(Point {
				x: AXIS_MIN,
				y: value.to_f64().unwrap(),
			});
			html! {
				<text
					x={(position.x - config.label_padding).to_string()}
					y={position.y.to_string()}
					dominant-baseline="central"
					font-size={font_size.clone()}
					text-anchor="end"
				>
					{y_axis_label(value)}
				</text>
			}
		})
		.collect::<Vec<_>>();
	let points = options
		.points
		.iter()
		.map(|point| {
			let center = scale.to_pixels(Point {
				x: point.x.to_f64().unwrap(),
				y: point.y.to_f64().unwrap(),
			});
			// An svg renderer treats an unparseable opacity as fully opaque, so an all zero matrix is drawn empty instead.
			let opacity = options.opacity(point);
			let opacity = if opacity.is_finite() {
				opacity.to_string()
			} else {
				"0".to_owned()
			};
			html! {
				<g class="confusion-matrix-point">
					<circle
						cx={center.x.to_string()}
						cy={center.y.to_string()}
						r={config.point_radius.to_string()}
						fill={config.point_color}
						fill-opacity={opacity}
					>
						<title>{format!("Count: {}", point.value)}</title>
					</circle>
					<text
						x={center.x.to_string()}
						y={center.y.to_string()}
						dominant-baseline="central"
						fill={config.label_color}
						font-size={font_size.clone()}
						font-weight="bold"
						text-anchor="middle"
					>
						{point.value.to_string()}
					</text>
				</g>
			}
		})
		.collect::<Vec<_>>();
	let view_box = format!("0 0 {} {}", config.width, config.height);
	html! {
		<div class="chart-wrapper">
			<ChartTitle>{title}</ChartTitle>
			<svg
				class="chart"
				data-chart-type="confusion_matrix"
				id={id}
				role="img"
				viewBox={view_box}
				xmlns="http://www.w3.org/2000/svg"
			>
				<rect
					x={chart_box.x.to_string()}
					y={chart_box.y.to_string()}
					width={chart_box.w.to_string()}
					height={chart_box.h.to_string()}
					fill="none"
					stroke={config.axis_color}
				/>
				{x_axis_labels}
				{y_axis_labels}
				{points}
			</svg>
		</div>
	}
}

#[test]
fn test_confusion_matrix_chart() {
	let options = ConfusionMatrixChartOptions::new([[50, 3], [2, 40]]);
	let html = html! {
		<ConfusionMatrixChart
			id={Some("confusionMatrix".to_owned())}
			options={options}
			title={None}
		/>
	}
	.render_to_string();
	assert!(html.contains(r#"id="confusionMatrix""#));
	assert_eq!(html.matches("<circle").count(), 4);
	assert_eq!(html.matches(r#"fill-opacity="1""#).count(), 1);
	assert!(html.contains(r#"fill-opacity="0.8""#));
	for count in &["50", "3", "2", "40"] {
		assert!(html.contains(&format!("<title>Count: {}</title>", count)));
	}
	for label in &[
		"Predicted Benign",
		"Predicted Malignant",
		"Actual Benign",
		"Actual Malignant",
	] {
		assert!(html.contains(label));
	}
}

#[test]
fn test_confusion_matrix_chart_all_zero() {
	let options = ConfusionMatrixChartOptions::new([[0, 0], [0, 0]]);
	let html = html! {
		<ConfusionMatrixChart id={None} options={options} title={None} />
	}
	.render_to_string();
	assert_eq!(html.matches(r#"fill-opacity="0""#).count(), 4);
}
