#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartBox {
	pub h: f64,
	pub w: f64,
	pub x: f64,
	pub y: f64,
}

/// Maps values in `min..=max` on both axes onto a chart box. The y axis points up.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
	pub chart_box: ChartBox,
	pub min: f64,
	pub max: f64,
}

impl LinearScale {
	pub fn to_pixels(&self, point: Point) -> Point {
		let range = self.max - self.min;
		Point {
			x: self.chart_box.x + (point.x - self.min) / range * self.chart_box.w,
			y: self.chart_box.y + (self.max - point.y) / range * self.chart_box.h,
		}
	}
}

#[test]
fn test_linear_scale() {
	let scale = LinearScale {
		chart_box: ChartBox {
			h: 200.0,
			w: 200.0,
			x: 100.0,
			y: 0.0,
		},
		min: -0.5,
		max: 1.5,
	};
	assert_eq!(
		scale.to_pixels(Point { x: 0.0, y: 0.0 }),
		Point { x: 150.0, y: 150.0 }
	);
	assert_eq!(
		scale.to_pixels(Point { x: 1.0, y: 1.0 }),
		Point { x: 250.0, y: 50.0 }
	);
}
