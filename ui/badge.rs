use crate::Level;
use html::{classes, component, html};

#[component]
pub fn Badge(level: Level) {
	html! {
		<span class={classes!("badge", level.background_class())}>
			{children}
		</span>
	}
}
