use crate::{util::to_fixed, Level};
use html::{classes, component, html, style};

/// A horizontal bar filled to `percent`, which is expected to be in the range 0 to 100. The bar's label is the percentage with two decimals.
#[component]
pub fn ProgressBar(level: Level, percent: f64) {
	let percent = to_fixed(percent, 2);
	let style = style! {
		"width" => format!("{}%", percent),
	};
	html! {
		<div class="progress">
			<div
				class={classes!("progress-bar", level.background_class())}
				role="progressbar"
				style={style}
				aria-valuenow={percent.clone()}
				aria-valuemin="0"
				aria-valuemax="100"
			>
				{format!("{}%", percent)}
			</div>
		</div>
	}
}
