//! This crate holds the data model shared by the diagnosis app and cli: the fixed feature set, the input record sent to the prediction server, the prediction and metrics records it returns, and the http client that talks to it.

pub mod client;
pub mod features;
pub mod input;
pub mod metrics;
pub mod parse;
pub mod predict;

pub use self::client::{Client, ClientError};
pub use self::input::InputRecord;
pub use self::metrics::{ClassMetrics, ClassificationReport, Metrics};
pub use self::predict::{Diagnosis, Prediction};
