use html::{component, html};

#[component]
pub fn Form(action: Option<String>, id: Option<String>, post: Option<bool>) {
	let method = post.and_then(|post| if post { Some("post".to_owned()) } else { None });
	html! {
		<form
			id={id}
			action={action}
			class="form"
			method={method}
		>
			{children}
		</form>
	}
}
