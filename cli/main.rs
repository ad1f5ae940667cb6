//! This module contains the main entrypoint to the diagnosis cli.

use clap::Parser;
use colored::Colorize;
use diagnosis_core::{Client, Diagnosis, InputRecord, Metrics, Prediction};
use diagnosis_ui::util::{format_number, format_percent, to_fixed};
use diagnosis_util::{err, error::Result, table::Table};
use std::{io::Read, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

#[derive(Parser)]
#[clap(
	about = "Predict whether a breast mass is benign or malignant.",
	disable_help_subcommand = true
)]
enum Options {
	#[clap(name = "app")]
	App(AppOptions),
	#[clap(name = "predict")]
	Predict(PredictOptions),
	#[clap(name = "metrics")]
	Metrics(MetricsOptions),
}

#[derive(Parser)]
#[clap(about = "run the app")]
#[clap(long_about = "run the web app that forwards predictions to the prediction server")]
struct AppOptions {
	#[clap(long, default_value = "0.0.0.0")]
	host: std::net::IpAddr,
	#[clap(long, env = "PORT", default_value = "8080")]
	port: u16,
	#[clap(long, env = "DIAGNOSIS_URL", default_value = "http://localhost:5000")]
	url: Url,
}

#[derive(Parser)]
#[clap(about = "make a prediction")]
#[clap(long_about = "send the features in a json file to the prediction server and print its prediction")]
struct PredictOptions {
	#[clap(long, env = "DIAGNOSIS_URL", default_value = "http://localhost:5000")]
	url: Url,
	#[clap(
		short,
		long,
		help = "the path to a json object of feature values, read from stdin if omitted"
	)]
	input: Option<PathBuf>,
	#[clap(long, help = "print the rendered html instead of text")]
	html: bool,
}

#[derive(Parser)]
#[clap(about = "print the model's metrics")]
struct MetricsOptions {
	#[clap(long, env = "DIAGNOSIS_URL", default_value = "http://localhost:5000")]
	url: Url,
	#[clap(long, help = "print the rendered html instead of text")]
	html: bool,
}

fn main() {
	setup_tracing();
	let options = Options::parse();
	let result = match options {
		Options::App(options) => cli_app(options),
		Options::Predict(options) => cli_predict(options),
		Options::Metrics(options) => cli_metrics(options),
	};
	if let Err(error) = result {
		eprintln!("{}: {}", "error".red().bold(), error);
		std::process::exit(1);
	}
}

fn setup_tracing() {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("diagnosis=info"));
	tracing_subscriber::registry()
		.with(env_filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();
}

fn cli_app(options: AppOptions) -> Result<()> {
	diagnosis_app::run(diagnosis_app::Options {
		host: options.host,
		port: options.port,
		url: options.url,
	})
}

fn cli_predict(options: PredictOptions) -> Result<()> {
	let text = match &options.input {
		Some(path) => std::fs::read_to_string(path)?,
		None => {
			let mut text = String::new();
			std::io::stdin().read_to_string(&mut text)?;
			text
		}
	};
	let value: serde_json::Value = serde_json::from_str(&text)?;
	let object = value
		.as_object()
		.ok_or_else(|| err!("the input must be a json object of feature values"))?;
	let input = InputRecord::from_json(object);
	let client = Client::new(options.url);
	let prediction = runtime()?.block_on(client.predict(&input))?;
	if options.html {
		println!("{}", diagnosis_app::render_prediction(&prediction));
	} else {
		print_prediction(&prediction);
	}
	Ok(())
}

fn cli_metrics(options: MetricsOptions) -> Result<()> {
	let client = Client::new(options.url);
	let metrics = runtime()?.block_on(client.metrics())?;
	if options.html {
		println!("{}", diagnosis_app::render_metrics(&metrics));
	} else {
		print_metrics(&metrics);
	}
	Ok(())
}

fn runtime() -> Result<tokio::runtime::Runtime> {
	let runtime = tokio::runtime::Builder::new_current_thread()
		.enable_all()
		.build()?;
	Ok(runtime)
}

fn print_prediction(prediction: &Prediction) {
	let name = match prediction.prediction {
		Diagnosis::Benign => prediction.prediction.name().green().bold(),
		Diagnosis::Malignant => prediction.prediction.name().red().bold(),
	};
	println!("{}", name);
	println!(
		"Probability of Malignancy: {}",
		format_percent(prediction.probability)
	);
}

fn print_metrics(metrics: &Metrics) {
	println!("{} {}", "Accuracy:".bold(), format_percent(metrics.accuracy));
	println!();
	println!("{}", "Confusion Matrix".bold());
	let [[true_negatives, false_positives], [false_negatives, true_positives]] =
		metrics.confusion_matrix;
	let rows = vec![
		vec![
			"Actual Benign".to_owned(),
			true_negatives.to_string(),
			false_positives.to_string(),
		],
		vec![
			"Actual Malignant".to_owned(),
			false_negatives.to_string(),
			true_positives.to_string(),
		],
	];
	let table = Table {
		padding: 1,
		header: &["", "Predicted Benign", "Predicted Malignant"],
		rows: &rows,
	};
	println!("{}", table);
	println!("{}", "Classification Report".bold());
	let rows = metrics
		.classification_report
		.class_rows()
		.into_iter()
		.map(|(class, metrics)| {
			vec![
				class,
				to_fixed(metrics.precision, 2),
				to_fixed(metrics.recall, 2),
				to_fixed(metrics.f1_score, 2),
				format_number(metrics.support),
			]
		})
		.collect::<Vec<_>>();
	let table = Table {
		padding: 1,
		header: &["Class", "Precision", "Recall", "F1-Score", "Support"],
		rows: &rows,
	};
	print!("{}", table);
}
