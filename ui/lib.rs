mod badge;
mod button;
mod form;
mod layout;
mod level;
mod number_chart;
mod progress;
mod table;
pub mod util;

pub use self::badge::*;
pub use self::button::*;
pub use self::form::*;
pub use self::layout::*;
pub use self::level::*;
pub use self::number_chart::*;
pub use self::progress::*;
pub use self::table::*;
