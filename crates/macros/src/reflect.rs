//! `#[derive(Reflect)]` implementation.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Ident, parse_macro_input};

use crate::attrs::{EnumAttrs, VariantAttrs, repr_type};

pub fn derive_reflect(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	match expand(&input) {
		Ok(tokens) => tokens.into(),
		Err(e) => e.to_compile_error().into(),
	}
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
	let enum_name = &input.ident;

	let Data::Enum(data) = &input.data else {
		return Err(syn::Error::new_spanned(
			input,
			"Reflect can only be derived for enums",
		));
	};

	if !input.generics.params.is_empty() {
		return Err(syn::Error::new_spanned(
			&input.generics,
			"Reflect cannot be derived for generic enums",
		));
	}

	let attrs = EnumAttrs::parse(&input.attrs)?;
	let repr = repr_type(&input.attrs)?;

	let mut declared = Vec::new();
	let mut probes = Vec::new();

	for variant in &data.variants {
		if !matches!(variant.fields, Fields::Unit) {
			return Err(syn::Error::new_spanned(
				variant,
				"Reflect requires fieldless variants",
			));
		}

		let variant_name = &variant.ident;
		let variant_attrs = VariantAttrs::parse(&variant.attrs)?;
		declared.push(variant_name);

		if variant_attrs.skip {
			continue;
		}

		let label = variant_name.unraw().to_string();
		let aliases = variant_attrs.aliases.iter().map(|lit| lit.value());
		probes.push(quote! {
			if value == (Self::#variant_name as #repr) {
				return ::core::option::Option::Some((
					Self::#variant_name,
					&[#label #(, #aliases)*] as &'static [&'static str],
				));
			}
		});
	}

	let default_range = quote! { ::enumeral::ScanRange::DEFAULT };
	let min = attrs
		.min
		.as_ref()
		.map(|e| quote! { #e })
		.unwrap_or_else(|| quote! { #default_range.min() });
	let max = attrs
		.max
		.as_ref()
		.map(|e| quote! { #e })
		.unwrap_or_else(|| quote! { #default_range.max() });

	let scope = if attrs.unscoped {
		quote! { ::enumeral::Scope::Unscoped }
	} else {
		quote! { ::enumeral::Scope::Scoped }
	};
	let is_flags = attrs.flags;

	let reflect_impl = quote! {
		impl ::enumeral::Reflect for #enum_name {
			type Repr = #repr;

			const TYPE_NAME: &'static str = ::core::stringify!(#enum_name);
			const MODULE_PATH: &'static str = ::core::module_path!();
			const RANGE: ::enumeral::ScanRange = ::enumeral::ScanRange::new(#min, #max);
			const SCOPE: ::enumeral::Scope = #scope;
			const IS_FLAGS: bool = #is_flags;
			const DECLARED: &'static [Self] = &[#(Self::#declared),*];

			#[inline]
			fn to_repr(self) -> #repr {
				match self {
					#(Self::#declared => Self::#declared as #repr,)*
				}
			}

			#[allow(unused_variables)]
			fn probe(
				value: #repr,
			) -> ::core::option::Option<(Self, &'static [&'static str])> {
				#(#probes)*
				::core::option::Option::None
			}

			fn table() -> &'static ::enumeral::Table<Self> {
				static TABLE: ::std::sync::OnceLock<::enumeral::Table<#enum_name>> =
					::std::sync::OnceLock::new();
				TABLE.get_or_init(::enumeral::Table::build)
			}
		}
	};

	let display_impl = if attrs.no_display {
		quote! {}
	} else {
		quote! {
			impl ::core::fmt::Display for #enum_name {
				fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
					::enumeral::fmt::write_name(*self, f)
				}
			}
		}
	};

	let conversions = quote! {
		impl ::core::str::FromStr for #enum_name {
			type Err = ::enumeral::ParseError;

			fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
				::enumeral::parse_name::<Self>(s)
			}
		}

		impl ::core::convert::TryFrom<#repr> for #enum_name {
			type Error = ::enumeral::ValueError;

			fn try_from(value: #repr) -> ::core::result::Result<Self, Self::Error> {
				::enumeral::parse_value::<Self>(value)
			}
		}
	};

	let flag_impls = if attrs.flags {
		flag_operators(enum_name)
	} else {
		quote! {}
	};

	Ok(quote! {
		#reflect_impl
		#display_impl
		#conversions
		#flag_impls

		::enumeral::inventory::submit! {
			::enumeral::catalog::EnumInfo::of::<#enum_name>()
		}
	})
}

/// Emits `|`, `&`, `^` and `!` for a flag enum; each yields `Mask<Self>`.
fn flag_operators(enum_name: &Ident) -> TokenStream2 {
	let binary = [
		("BitOr", "bitor", quote! { | }),
		("BitAnd", "bitand", quote! { & }),
		("BitXor", "bitxor", quote! { ^ }),
	]
	.into_iter()
	.map(|(trait_name, method, op)| {
		let trait_ident = format_ident!("{}", trait_name);
		let method_ident = format_ident!("{}", method);
		quote! {
			impl ::core::ops::#trait_ident for #enum_name {
				type Output = ::enumeral::Mask<#enum_name>;

				#[inline]
				fn #method_ident(self, rhs: Self) -> Self::Output {
					::enumeral::Mask::from(self) #op rhs
				}
			}

			impl ::core::ops::#trait_ident<::enumeral::Mask<#enum_name>> for #enum_name {
				type Output = ::enumeral::Mask<#enum_name>;

				#[inline]
				fn #method_ident(self, rhs: ::enumeral::Mask<#enum_name>) -> Self::Output {
					::enumeral::Mask::from(self) #op rhs
				}
			}
		}
	});

	quote! {
		impl ::enumeral::Flag for #enum_name {}

		#(#binary)*

		impl ::core::ops::Not for #enum_name {
			type Output = ::enumeral::Mask<#enum_name>;

			#[inline]
			fn not(self) -> Self::Output {
				!::enumeral::Mask::from(self)
			}
		}
	}
}
