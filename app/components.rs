use diagnosis_charts::confusion_matrix_chart::ConfusionMatrixChartOptions;
use diagnosis_charts::ConfusionMatrixChart;
use diagnosis_core::{
	features::{input_id, FEATURE_NAMES},
	ClassMetrics, Diagnosis, Metrics, Prediction,
};
use diagnosis_ui as ui;
use html::{component, html, style};
use std::collections::BTreeMap;

/// The form with one number input per feature and a submit button for each action. `state` holds the hidden fields that carry the displayed result and metrics through the next submission.
#[component]
pub fn InputForm(values: BTreeMap<String, String>, state: Vec<(&'static str, String)>) {
	let fields = FEATURE_NAMES
		.iter()
		.map(|name| {
			html! {
				<ui::NumberField
					id={input_id(name)}
					label={(*name).to_owned()}
					name={(*name).to_owned()}
					placeholder={Some((*name).to_owned())}
					value={values.get(*name).cloned()}
				/>
			}
		})
		.collect::<Vec<_>>();
	let state = state
		.into_iter()
		.map(|(name, value)| {
			html! {
				<input name={name} type="hidden" value={value} />
			}
		})
		.collect::<Vec<_>>();
	html! {
		<ui::Form action={Some("/".to_owned())} id={Some("inputForm".to_owned())} post={Some(true)}>
			<div class="form-fields">
				{fields}
			</div>
			{state}
			<div class="form-actions">
				<ui::Button
					button_type={ui::ButtonType::Submit}
					id={Some("predict".to_owned())}
					name={Some("action".to_owned())}
					value={Some("predict".to_owned())}
				>
					{"Predict"}
				</ui::Button>
				<ui::Button
					button_type={ui::ButtonType::Submit}
					id={Some("showMetrics".to_owned())}
					name={Some("action".to_owned())}
					value={Some("metrics".to_owned())}
				>
					{"Show Metrics"}
				</ui::Button>
			</div>
		</ui::Form>
	}
}

fn level(diagnosis: Diagnosis) -> ui::Level {
	match diagnosis {
		Diagnosis::Benign => ui::Level::Success,
		Diagnosis::Malignant => ui::Level::Danger,
	}
}

/// The predicted class as a badge, the probability of malignancy as a progress bar, and the probability as text.
#[component]
pub fn PredictionResult(prediction: Prediction) {
	let level = level(prediction.prediction);
	let probability = ui::util::format_percent(prediction.probability);
	html! {
		<div class="prediction-result">
			<ui::H4>
				<ui::Badge level={level}>{prediction.prediction.name()}</ui::Badge>
			</ui::H4>
			<ui::ProgressBar level={level} percent={prediction.probability * 100.0} />
			<ui::P class={None}>
				{format!("Probability of Malignancy: {}", probability)}
			</ui::P>
		</div>
	}
}

/// The accuracy, the confusion matrix chart, and the per class report.
#[component]
pub fn MetricsPanel(metrics: Metrics) {
	let options = ConfusionMatrixChartOptions::new(metrics.confusion_matrix);
	let rows = metrics.classification_report.class_rows();
	html! {
		<ui::S1>
			<ui::NumberChart
				id={Some("accuracy".to_owned())}
				title={"Accuracy".to_owned()}
				value={ui::util::format_percent(metrics.accuracy)}
			/>
			<ConfusionMatrixChart
				id={Some("confusionMatrix".to_owned())}
				options={options}
				title={Some("Confusion Matrix".to_owned())}
			/>
			<div id="classificationReport">
				<ClassificationReportTable rows={rows} />
			</div>
		</ui::S1>
	}
}

#[component]
pub fn ClassificationReportTable(rows: Vec<(String, ClassMetrics)>) {
	let rows = rows
		.into_iter()
		.map(|(class, metrics)| {
			html! {
				<ui::TableRow>
					<ui::TableCell>{class}</ui::TableCell>
					<ui::TableCell>{ui::util::to_fixed(metrics.precision, 2)}</ui::TableCell>
					<ui::TableCell>{ui::util::to_fixed(metrics.recall, 2)}</ui::TableCell>
					<ui::TableCell>{ui::util::to_fixed(metrics.f1_score, 2)}</ui::TableCell>
					<ui::TableCell>{ui::util::format_number(metrics.support)}</ui::TableCell>
				</ui::TableRow>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<ui::Table bordered={Some(true)}>
			<ui::TableHeader>
				<ui::TableRow>
					<ui::TableHeaderCell>{"Class"}</ui::TableHeaderCell>
					<ui::TableHeaderCell>{"Precision"}</ui::TableHeaderCell>
					<ui::TableHeaderCell>{"Recall"}</ui::TableHeaderCell>
					<ui::TableHeaderCell>{"F1-Score"}</ui::TableHeaderCell>
					<ui::TableHeaderCell>{"Support"}</ui::TableHeaderCell>
				</ui::TableRow>
			</ui::TableHeader>
			<ui::TableBody>
				{rows}
			</ui::TableBody>
		</ui::Table>
	}
}

/// The section that holds the metrics. It stays hidden until metrics are first requested.
#[component]
pub fn MetricsSection(visible: bool, metrics: Option<Metrics>) {
	let style = style! {
		"display" => if visible { None } else { Some("none") },
	};
	html! {
		<div class="metrics" id="metrics" style={style}>
			<ui::H2>{"Model Metrics"}</ui::H2>
			{metrics.map(|metrics| html! { <MetricsPanel metrics={metrics} /> })}
		</div>
	}
}

/// Render the result region for a prediction on its own.
pub fn render_prediction(prediction: &Prediction) -> String {
	let html = html! {
		<PredictionResult prediction={prediction.clone()} />
	};
	html.render_to_string()
}

/// Render the metrics panel on its own.
pub fn render_metrics(metrics: &Metrics) -> String {
	let html = html! {
		<MetricsPanel metrics={metrics.clone()} />
	};
	html.render_to_string()
}
