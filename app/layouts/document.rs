use html::{component, html, raw};

#[derive(Clone)]
pub struct PageInfo {
	/// The hashed path of the stylesheet, such as `/assets/0123456789abcdef.css`.
	pub stylesheet_href: String,
}

#[component]
pub fn Document(page_info: PageInfo) {
	html! {
		<>
			{raw!("<!doctype html>")}
			<html lang="en">
				<head>
					<meta charset="utf-8" />
					<meta content="width=device-width, initial-scale=1" name="viewport" />
					<title>{"Breast Cancer Diagnosis"}</title>
					<link href={page_info.stylesheet_href} rel="stylesheet" />
					<meta
						content="Predict whether a breast mass is benign or malignant from 30 measurements."
						name="description"
					/>
				</head>
				<body>
					{children}
				</body>
			</html>
		</>
	}
}
