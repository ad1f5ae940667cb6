use html::{classes, component, html};

#[component]
pub fn Table(bordered: Option<bool>) {
	let bordered = bordered.and_then(|bordered| if bordered { Some("table-bordered") } else { None });
	html! {
		<table class={classes!("table", bordered)}>
			{children}
		</table>
	}
}

#[component]
pub fn TableHeader() {
	html! {
		<thead>{children}</thead>
	}
}

#[component]
pub fn TableBody() {
	html! {
		<tbody>{children}</tbody>
	}
}

#[component]
pub fn TableRow() {
	html! {
		<tr>{children}</tr>
	}
}

#[component]
pub fn TableHeaderCell() {
	html! {
		<th>{children}</th>
	}
}

#[component]
pub fn TableCell() {
	html! {
		<td>{children}</td>
	}
}
