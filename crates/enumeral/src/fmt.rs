//! Text formatting for reflected values.
//!
//! A value prints as its declared name when the table has one, otherwise as
//! its bare underlying integer. Formatting never fails on a missing name.

use std::fmt;

use crate::reflect::Reflect;

/// Writes `value`'s name, or its integer when it has none.
///
/// Honors width, fill and alignment for both forms.
pub fn write_name<E: Reflect>(value: E, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	let repr = value.to_repr();
	match E::table().by_value(repr) {
		Some(entry) => f.pad(entry.name),
		None => fmt::Display::fmt(&repr, f),
	}
}

/// `Display` adapter for any reflected value.
///
/// Useful for types declared with `#[reflect(no_display)]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Named<E>(pub E);

impl<E: Reflect> fmt::Display for Named<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write_name(self.0, f)
	}
}
