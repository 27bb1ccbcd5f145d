//! Static enum reflection.
//!
//! `#[derive(Reflect)]` on a fieldless enum gives bidirectional lookup between
//! variant names, ordinals and underlying integers, with no hand-written
//! table:
//!
//! ```
//! use enumeral::Reflect;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
//! #[repr(i32)]
//! enum Color {
//!     RED = -10,
//!     BLUE = 0,
//!     GREEN = 10,
//! }
//!
//! assert_eq!(enumeral::name_of(Color::RED), Some("RED"));
//! assert_eq!(enumeral::cast_from_name::<Color>("BLUE"), Some(Color::BLUE));
//! assert_eq!(enumeral::cast_from_value::<Color>(10), Some(Color::GREEN));
//! assert_eq!(enumeral::value_at::<Color>(0), Color::RED);
//! assert_eq!(Color::GREEN.to_string(), "GREEN");
//! ```
//!
//! # How values are discovered
//!
//! The first lookup for a type scans its [`ScanRange`] (default `-128..=127`),
//! asks the type for the textual form of each candidate, and keeps those that
//! are bare identifiers. The resulting [`Table`] is cached for the life of the
//! process and shared read-only between threads.
//!
//! Enumerators declared outside the range are never discovered. Widen the
//! range with `#[reflect(range(min = .., max = ..))]` for sparse enums.
//!
//! # Flags
//!
//! `#[reflect(flags)]` enables `|`, `&`, `^` and `!`, producing a [`Mask`];
//! see [`flags`].

extern crate self as enumeral;

pub mod catalog;
pub mod descriptor;
mod error;
pub mod flags;
pub mod fmt;
mod reflect;
pub mod repr;
pub mod scan;
pub mod table;

pub use descriptor::{Descriptor, ScanRange, Scope};
pub use enumeral_macros::Reflect;
pub use error::{OrdinalError, ParseError, ValueError};
pub use flags::{Mask, flags_cast, flags_name};
pub use reflect::{Flag, Reflect};
pub use repr::Repr;
pub use table::{Entry, Table};

#[doc(hidden)]
pub use inventory;

/// Returns the declared name of `value`, or `None` if it was not discovered
/// (hidden with `#[reflect(skip)]` or outside the scan range).
#[inline]
pub fn name_of<E: Reflect>(value: E) -> Option<&'static str> {
	E::table().by_value(value.to_repr()).map(|entry| entry.name)
}

/// Returns all names, ordered by value.
#[inline]
pub fn names_of<E: Reflect>() -> &'static [&'static str] {
	E::table().names()
}

/// Returns the value whose name or alias is exactly `name`.
#[inline]
pub fn cast_from_name<E: Reflect>(name: &str) -> Option<E> {
	E::table().by_name(name).map(|entry| entry.value)
}

/// Returns the value whose name or alias matches `name` ignoring ASCII case.
#[inline]
pub fn cast_from_name_ignore_case<E: Reflect>(name: &str) -> Option<E> {
	E::table().by_name_ignore_case(name).map(|entry| entry.value)
}

/// Returns the value whose underlying integer is `value`.
#[inline]
pub fn cast_from_value<E: Reflect>(value: E::Repr) -> Option<E> {
	E::table().by_value(value).map(|entry| entry.value)
}

/// Returns the underlying integer of `value`.
#[inline]
pub fn integer_of<E: Reflect>(value: E) -> E::Repr {
	value.to_repr()
}

/// Returns the number of discovered values.
#[inline]
pub fn count<E: Reflect>() -> usize {
	E::table().len()
}

/// Returns the value at `ordinal`.
///
/// # Panics
///
/// Panics if `ordinal >= count::<E>()`. Use [`try_value_at`] for untrusted
/// input.
#[track_caller]
pub fn value_at<E: Reflect>(ordinal: usize) -> E {
	match try_value_at(ordinal) {
		Ok(value) => value,
		Err(e) => panic!("{e}"),
	}
}

/// Returns the value at `ordinal`, or an error if it is out of range.
pub fn try_value_at<E: Reflect>(ordinal: usize) -> Result<E, OrdinalError> {
	let table = E::table();
	table
		.get(ordinal)
		.map(|entry| entry.value)
		.ok_or(OrdinalError::OutOfRange {
			type_name: E::TYPE_NAME,
			ordinal,
			count: table.len(),
		})
}

/// Returns the ordinal of `value`.
#[inline]
pub fn index_of<E: Reflect>(value: E) -> Option<usize> {
	E::table().index_of(value)
}

/// Returns all values in ascending order.
#[inline]
pub fn values<E: Reflect>() -> &'static [E] {
	E::table().values()
}

/// Returns all entries in ascending-value order.
#[inline]
pub fn entries<E: Reflect>() -> &'static [Entry<E>] {
	E::table().entries()
}

/// Returns true if `name` is a name or alias of `E`.
#[inline]
pub fn contains_name<E: Reflect>(name: &str) -> bool {
	E::table().by_name(name).is_some()
}

/// Returns true if `value` is the underlying integer of a discovered value.
#[inline]
pub fn contains_value<E: Reflect>(value: E::Repr) -> bool {
	E::table().by_value(value).is_some()
}

/// Returns true if `E`'s variants need qualification through the type name.
#[inline]
pub fn is_scoped<E: Reflect>() -> bool {
	E::SCOPE == Scope::Scoped
}

/// Returns true if `E` is declared unscoped.
#[inline]
pub fn is_unscoped<E: Reflect>() -> bool {
	E::SCOPE == Scope::Unscoped
}

/// Returns `E`'s type name.
#[inline]
pub fn type_name<E: Reflect>() -> &'static str {
	E::TYPE_NAME
}

/// Returns `E`'s descriptor.
#[inline]
pub fn descriptor<E: Reflect>() -> Descriptor {
	E::descriptor()
}

/// Parses a name, for `FromStr` impls.
#[doc(hidden)]
pub fn parse_name<E: Reflect>(name: &str) -> Result<E, ParseError> {
	cast_from_name(name).ok_or_else(|| ParseError {
		type_name: E::TYPE_NAME,
		name: name.to_owned(),
	})
}

/// Converts an integer, for `TryFrom` impls.
#[doc(hidden)]
pub fn parse_value<E: Reflect>(value: E::Repr) -> Result<E, ValueError> {
	cast_from_value(value).ok_or(ValueError {
		type_name: E::TYPE_NAME,
		value: value.to_i128(),
	})
}
