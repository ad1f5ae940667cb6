use crate::components::{InputForm, MetricsSection, PredictionResult};
use crate::layouts::document::{Document, PageInfo};
use crate::renderer::Page;
use diagnosis_ui as ui;
use html::html;

pub fn render(page: Page, page_info: PageInfo) -> String {
	let state = page.state_fields();
	let html = html! {
		<Document page_info={page_info}>
			<div class="page">
				<ui::S1>
					<ui::H1>{"Breast Cancer Diagnosis"}</ui::H1>
					<ui::P class={None}>
						{"Enter the measurements of a breast mass to predict whether it is benign or malignant."}
					</ui::P>
					<InputForm values={page.values} state={state} />
					<div class="result" id="result">
						{page.result.map(|prediction| html! {
							<PredictionResult prediction={prediction} />
						})}
					</div>
					<MetricsSection visible={page.metrics_visible} metrics={page.metrics} />
				</ui::S1>
			</div>
		</Document>
	};
	html.render_to_string()
}
