//! Procedural macros for enumeral.
//!
//! Provides a single derive:
//! * `#[derive(Reflect)]` - implements `enumeral::Reflect` for a fieldless enum

use proc_macro::TokenStream;

/// Attribute parsing for `#[reflect(...)]` and `#[repr(...)]`.
mod attrs;
mod reflect;

/// Derives static reflection for a fieldless enum.
///
/// ```ignore
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
/// #[repr(i32)]
/// #[reflect(range(min = -16, max = 16))]
/// pub enum Color {
///     Red = -10,
///     #[reflect(alias = "Azure")]
///     Blue = 0,
///     Green = 10,
/// }
/// ```
///
/// Generates:
/// * `impl enumeral::Reflect` with a lazily built, process-wide table
/// * `Display`, `FromStr` and `TryFrom<repr>` backed by that table
/// * A catalog registration via `inventory`
///
/// # Type attributes
///
/// - `range(min = EXPR, max = EXPR)` - scan bounds (default `-128..=127`)
/// - `flags` - bitwise operators producing `enumeral::Mask<Self>`
/// - `unscoped` - classify the enum as unscoped
/// - `no_display` - skip the `Display` impl
///
/// # Variant attributes
///
/// - `alias = "Name"` - extra lookup name for the variant's value (repeatable)
/// - `skip` - hide the variant from reflection
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
	reflect::derive_reflect(input)
}
