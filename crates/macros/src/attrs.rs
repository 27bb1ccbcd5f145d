use proc_macro2::TokenStream as TokenStream2;
use syn::{Attribute, Expr, Ident, LitStr};

/// Options collected from `#[reflect(...)]` on the enum itself.
#[derive(Default)]
pub(crate) struct EnumAttrs {
	pub min: Option<Expr>,
	pub max: Option<Expr>,
	pub flags: bool,
	pub unscoped: bool,
	pub no_display: bool,
}

impl EnumAttrs {
	pub(crate) fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
		let mut out = Self::default();
		for attr in attrs.iter().filter(|a| a.path().is_ident("reflect")) {
			attr.parse_nested_meta(|meta| {
				if meta.path.is_ident("flags") {
					out.flags = true;
					Ok(())
				} else if meta.path.is_ident("unscoped") {
					out.unscoped = true;
					Ok(())
				} else if meta.path.is_ident("no_display") {
					out.no_display = true;
					Ok(())
				} else if meta.path.is_ident("range") {
					meta.parse_nested_meta(|bound| {
						if bound.path.is_ident("min") {
							out.min = Some(bound.value()?.parse()?);
							Ok(())
						} else if bound.path.is_ident("max") {
							out.max = Some(bound.value()?.parse()?);
							Ok(())
						} else {
							Err(bound.error("expected `min` or `max`"))
						}
					})
				} else {
					Err(meta.error("unknown reflect attribute"))
				}
			})?;
		}
		Ok(out)
	}
}

/// Options collected from `#[reflect(...)]` on a variant.
#[derive(Default)]
pub(crate) struct VariantAttrs {
	pub aliases: Vec<LitStr>,
	pub skip: bool,
}

impl VariantAttrs {
	pub(crate) fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
		let mut out = Self::default();
		for attr in attrs.iter().filter(|a| a.path().is_ident("reflect")) {
			attr.parse_nested_meta(|meta| {
				if meta.path.is_ident("alias") {
					let alias: LitStr = meta.value()?.parse()?;
					if syn::parse_str::<Ident>(&alias.value()).is_err() {
						return Err(syn::Error::new_spanned(
							&alias,
							"alias must be a valid identifier",
						));
					}
					out.aliases.push(alias);
					Ok(())
				} else if meta.path.is_ident("skip") {
					out.skip = true;
					Ok(())
				} else {
					Err(meta.error("unknown reflect variant attribute"))
				}
			})?;
		}
		Ok(out)
	}
}

const INTEGER_REPRS: &[&str] = &[
	"i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize",
];

/// Resolves the underlying integer type from `#[repr(...)]`.
///
/// Falls back to `isize` (the default discriminant type) and maps `repr(C)`
/// to `i32`.
pub(crate) fn repr_type(attrs: &[Attribute]) -> syn::Result<Ident> {
	let mut integer: Option<Ident> = None;
	let mut c_like: Option<Ident> = None;

	for attr in attrs.iter().filter(|a| a.path().is_ident("repr")) {
		attr.parse_nested_meta(|meta| {
			if let Some(ident) = meta.path.get_ident() {
				let name = ident.to_string();
				if INTEGER_REPRS.contains(&name.as_str()) {
					integer = Some(ident.clone());
				} else if name == "i128" || name == "u128" {
					return Err(meta.error("128-bit enum representations are not supported"));
				} else if name == "C" {
					c_like = Some(Ident::new("i32", ident.span()));
				}
			}
			if meta.input.peek(syn::token::Paren) {
				let content;
				syn::parenthesized!(content in meta.input);
				let _: TokenStream2 = content.parse()?;
			}
			Ok(())
		})?;
	}

	Ok(integer
		.or(c_like)
		.unwrap_or_else(|| Ident::new("isize", proc_macro2::Span::call_site())))
}

#[cfg(test)]
mod tests {
	use syn::{DeriveInput, parse_quote};

	use super::*;

	#[test]
	fn test_enum_attrs_range_and_flags() {
		let input: DeriveInput = parse_quote! {
			#[reflect(flags, range(min = -16, max = 300))]
			#[reflect(unscoped)]
			enum E { A }
		};
		let attrs = EnumAttrs::parse(&input.attrs).unwrap();
		assert!(attrs.flags);
		assert!(attrs.unscoped);
		assert!(!attrs.no_display);
		assert!(attrs.min.is_some());
		assert!(attrs.max.is_some());
	}

	#[test]
	fn test_enum_attrs_reject_unknown() {
		let input: DeriveInput = parse_quote! {
			#[reflect(bogus)]
			enum E { A }
		};
		assert!(EnumAttrs::parse(&input.attrs).is_err());
	}

	#[test]
	fn test_variant_alias_must_be_identifier() {
		let ok: syn::Variant = parse_quote! {
			#[reflect(alias = "Azure", alias = "Navy")]
			Blue
		};
		assert_eq!(VariantAttrs::parse(&ok.attrs).unwrap().aliases.len(), 2);

		let bad: syn::Variant = parse_quote! {
			#[reflect(alias = "not an ident")]
			Blue
		};
		assert!(VariantAttrs::parse(&bad.attrs).is_err());
	}

	#[test]
	fn test_repr_type_resolution() {
		let plain: DeriveInput = parse_quote! { enum E { A } };
		assert_eq!(repr_type(&plain.attrs).unwrap(), "isize");

		let sized: DeriveInput = parse_quote! {
			#[repr(u8)]
			enum E { A }
		};
		assert_eq!(repr_type(&sized.attrs).unwrap(), "u8");

		let c: DeriveInput = parse_quote! {
			#[repr(C)]
			enum E { A }
		};
		assert_eq!(repr_type(&c.attrs).unwrap(), "i32");

		let both: DeriveInput = parse_quote! {
			#[repr(C, u16)]
			enum E { A }
		};
		assert_eq!(repr_type(&both.attrs).unwrap(), "u16");

		let wide: DeriveInput = parse_quote! {
			#[repr(u128)]
			enum E { A }
		};
		assert!(repr_type(&wide.attrs).is_err());
	}
}
