pub use get::get;
pub use post::post;

mod get;
mod page;
mod post;
