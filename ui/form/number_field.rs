use super::FieldLabel;
use html::{component, html};

/// A labeled `<input type="number">` that accepts any decimal value.
#[component]
pub fn NumberField(
	id: String,
	label: String,
	name: String,
	placeholder: Option<String>,
	value: Option<String>,
) {
	html! {
		<div class="form-group">
			<FieldLabel html_for={Some(id.clone())}>
				{label}
			</FieldLabel>
			<input
				class="form-control"
				id={id}
				name={name}
				placeholder={placeholder}
				step="any"
				type="number"
				value={value}
			/>
		</div>
	}
}
