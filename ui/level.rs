/// The color scheme of a badge or progress bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Level {
	Success,
	Danger,
}

impl Level {
	pub fn background_class(self) -> &'static str {
		match self {
			Level::Success => "bg-success",
			Level::Danger => "bg-danger",
		}
	}
}
