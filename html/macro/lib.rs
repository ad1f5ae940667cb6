use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::parse_macro_input;

enum Child {
	Text(syn::LitStr),
	Expr(syn::Block),
	Fragment(Fragment),
	Element(Element),
}

struct Fragment {
	children: Vec<Child>,
}

struct Element {
	name: syn::Path,
	attributes: Vec<Attribute>,
	children: Vec<Child>,
	self_closing: bool,
}

struct Attribute {
	key: AttributeKey,
	value: Option<AttributeValue>,
}

type AttributeKey = syn::punctuated::Punctuated<syn::Ident, syn::Token![-]>;

enum AttributeValue {
	Str(syn::LitStr),
	Bool(syn::LitBool),
	Expr(syn::Block),
}

fn peek_close(input: syn::parse::ParseStream) -> bool {
	input.peek(syn::Token![<]) && input.peek2(syn::Token![/])
}

fn parse_children(input: syn::parse::ParseStream) -> syn::parse::Result<Vec<Child>> {
	let mut children = Vec::new();
	while !peek_close(input) {
		if input.is_empty() {
			return Err(input.error("unexpected end of input, expected a closing tag"));
		}
		children.push(input.parse::<Child>()?);
	}
	Ok(children)
}

impl syn::parse::Parse for Child {
	fn parse(input: syn::parse::ParseStream) -> syn::parse::Result<Self> {
		if input.peek(syn::LitStr) {
			input.parse().map(Child::Text)
		} else if input.peek(syn::token::Brace) {
			input.parse().map(Child::Expr)
		} else if input.peek(syn::Token![<]) && input.peek2(syn::Token![>]) {
			input.parse().map(Child::Fragment)
		} else if input.peek(syn::Token![<]) {
			input.parse().map(Child::Element)
		} else {
			Err(input.error("expected a string literal, a block, or an element"))
		}
	}
}

impl syn::parse::Parse for Fragment {
	fn parse(input: syn::parse::ParseStream) -> syn::parse::Result<Self> {
		input.parse::<syn::Token![<]>()?;
		input.parse::<syn::Token![>]>()?;
		let children = parse_children(input)?;
		input.parse::<syn::Token![<]>()?;
		input.parse::<syn::Token![/]>()?;
		input.parse::<syn::Token![>]>()?;
		Ok(Fragment { children })
	}
}

impl syn::parse::Parse for Element {
	fn parse(input: syn::parse::ParseStream) -> syn::parse::Result<Self> {
		input.parse::<syn::Token![<]>()?;
		let name = input.parse::<syn::Path>()?;
		let mut attributes = Vec::new();
		while !(input.peek(syn::Token![>]) || input.peek(syn::Token![/])) {
			let key = AttributeKey::parse_separated_nonempty_with(input, syn::Ident::parse_any)?;
			let value = if input.peek(syn::Token![=]) {
				input.parse::<syn::Token![=]>()?;
				let value = if input.peek(syn::LitStr) {
					AttributeValue::Str(input.parse()?)
				} else if input.peek(syn::LitBool) {
					AttributeValue::Bool(input.parse()?)
				} else {
					AttributeValue::Expr(input.parse()?)
				};
				Some(value)
			} else {
				None
			};
			attributes.push(Attribute { key, value });
		}
		let self_closing = input.peek(syn::Token![/]);
		if self_closing {
			input.parse::<syn::Token![/]>()?;
			input.parse::<syn::Token![>]>()?;
			return Ok(Element {
				name,
				attributes,
				children: Vec::new(),
				self_closing,
			});
		}
		input.parse::<syn::Token![>]>()?;
		let children = parse_children(input)?;
		input.parse::<syn::Token![<]>()?;
		input.parse::<syn::Token![/]>()?;
		let close_name = input.parse::<syn::Path>()?;
		if close_name != name {
			return Err(syn::Error::new_spanned(
				close_name,
				"closing tag does not match opening tag",
			));
		}
		input.parse::<syn::Token![>]>()?;
		Ok(Element {
			name,
			attributes,
			children,
			self_closing,
		})
	}
}

impl Element {
	/// Lowercase single identifiers are host elements, everything else names a component.
	fn host_name(&self) -> Option<String> {
		let ident = self.name.get_ident()?.to_string();
		if ident.starts_with(|c: char| c.is_ascii_lowercase()) {
			Some(ident)
		} else {
			None
		}
	}
}

impl AttributeValue {
	fn tokens(&self) -> proc_macro2::TokenStream {
		match self {
			AttributeValue::Str(value) => quote! { #value },
			AttributeValue::Bool(value) => quote! { #value },
			AttributeValue::Expr(value) => quote! { #value },
		}
	}
}

impl quote::ToTokens for Child {
	fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
		let code = match self {
			Child::Text(text) => quote! {
				::html::Node::EscapedText(::html::EscapedTextNode(::std::borrow::Cow::Borrowed(#text)))
			},
			Child::Expr(block) => quote! { ::html::Node::from(#block) },
			Child::Fragment(fragment) => quote! { #fragment },
			Child::Element(element) => quote! { #element },
		};
		code.to_tokens(tokens);
	}
}

impl quote::ToTokens for Fragment {
	fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
		let children = &self.children;
		let code = quote! {
			::html::Node::Fragment(::html::FragmentNode {
				children: vec![#(#children),*],
			})
		};
		code.to_tokens(tokens);
	}
}

impl quote::ToTokens for Element {
	fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
		let children = &self.children;
		let code = if let Some(name) = self.host_name() {
			let attributes = self.attributes.iter().map(|attribute| {
				let key = attribute
					.key
					.iter()
					.map(|ident| ident.unraw().to_string())
					.collect::<Vec<_>>()
					.join("-");
				let value = match &attribute.value {
					Some(value) => value.tokens(),
					None => quote! { true },
				};
				quote! { (#key, ::html::AttributeValue::from(#value)) }
			});
			let self_closing = self.self_closing;
			quote! {
				::html::Node::Host(::html::HostNode {
					name: #name,
					attributes: vec![#(#attributes),*],
					children: vec![#(#children),*],
					self_closing: #self_closing,
				})
			}
		} else {
			let name = &self.name;
			let fields = self.attributes.iter().map(|attribute| {
				let key = &attribute.key;
				match &attribute.value {
					Some(value) => {
						let value = value.tokens();
						quote! { #key: #value }
					}
					None => quote! { #key },
				}
			});
			quote! {
				::html::Node::Component(::html::ComponentNode::Unrendered {
					component: Some(Box::new(#name { #(#fields),* })),
					children: Some(vec![#(#children),*]),
				})
			}
		};
		code.to_tokens(tokens);
	}
}

fn component_transform(item: syn::ItemFn) -> TokenStream {
	let visibility = item.vis;
	let name = item.sig.ident;
	let (impl_generics, ty_generics, where_clause) = item.sig.generics.split_for_impl();
	let fields = item.sig.inputs.iter().collect::<Vec<_>>();
	let patterns = item
		.sig
		.inputs
		.iter()
		.filter_map(|argument| match argument {
			syn::FnArg::Typed(typed) => Some(&typed.pat),
			syn::FnArg::Receiver(_) => None,
		})
		.collect::<Vec<_>>();
	let block = item.block;
	let code = quote! {
		#[derive(Clone)]
		#visibility struct #name #impl_generics { #(#visibility #fields),* }
		impl #impl_generics ::html::Component for #name #ty_generics #where_clause {
			#[allow(unused_variables)]
			fn render(self: Box<Self>, children: Vec<::html::Node>) -> ::html::Node {
				let #name { #(#patterns),* } = *self;
				#block
			}
		}
	};
	code.into()
}

#[proc_macro]
pub fn html(input: TokenStream) -> TokenStream {
	let child = parse_macro_input!(input as Child);
	quote!(#child).into()
}

#[proc_macro_attribute]
pub fn component(_attr: TokenStream, input: TokenStream) -> TokenStream {
	component_transform(parse_macro_input!(input as syn::ItemFn))
}
