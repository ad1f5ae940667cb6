use html::{component, html};

#[component]
pub fn S1() {
	html! {
		<div class="s1">
			{children}
		</div>
	}
}

#[component]
pub fn H1() {
	html! {
		<h1 class="h1">{children}</h1>
	}
}

#[component]
pub fn H2() {
	html! {
		<h2 class="h2">{children}</h2>
	}
}

#[component]
pub fn H4() {
	html! {
		<h4 class="h4">{children}</h4>
	}
}

#[component]
pub fn P(class: Option<String>) {
	let class = match class {
		Some(class) => format!("p {}", class),
		None => "p".to_owned(),
	};
	html! {
		<p class={class}>{children}</p>
	}
}
