use html::{component, html};

#[component]
pub fn NumberChart(id: Option<String>, title: String, value: String) {
	html! {
		<div class="number-chart-wrapper">
			<div class="number-chart-value" id={id}>{value}</div>
			<div class="number-chart-title">{title}</div>
		</div>
	}
}
