use html::{component, html};

#[derive(Clone)]
pub enum ButtonType {
	Submit,
}

/// A button. When `name` and `value` are set, a submit button contributes `name=value` to the submitted form, which lets one form carry several actions.
#[component]
pub fn Button(
	button_type: ButtonType,
	id: Option<String>,
	name: Option<String>,
	value: Option<String>,
) {
	let button_type = match button_type {
		ButtonType::Submit => "submit",
	};
	html! {
		<button
			class="button"
			id={id}
			name={name}
			type={button_type}
			value={value}
		>
			{children}
		</button>
	}
}
