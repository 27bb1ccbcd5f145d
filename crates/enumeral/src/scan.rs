//! Range scanner.
//!
//! Walks the configured [`ScanRange`](crate::ScanRange) of a type, views each
//! candidate integer as the enum through [`Reflect::probe`], and keeps the
//! candidates whose textual form is a bare identifier. Holes and malformed
//! forms are skipped; scanning never fails.
//!
//! # Limitation
//!
//! Candidates outside the bounds are never visited, so enumerators declared
//! there are invisible to every lookup. [`unreachable`] lists them for
//! diagnostics.

use crate::reflect::Reflect;
use crate::repr::Repr;

/// One enumerator found by a scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Discovered<E: Reflect> {
	/// The enum value.
	pub value: E,
	/// Its underlying integer.
	pub repr: E::Repr,
	/// One textual form of the value.
	pub name: &'static str,
}

/// Scans `E`'s bounds in ascending order.
///
/// A value with aliases yields one [`Discovered`] per textual form, declared
/// name first.
pub fn scan<E: Reflect>() -> Vec<Discovered<E>> {
	let Some((lo, hi)) = E::RANGE.clamp_to(<E::Repr as Repr>::INFO) else {
		return Vec::new();
	};

	let mut found = Vec::new();
	for candidate in lo..=hi {
		let Some(repr) = E::Repr::from_i128(candidate) else {
			continue;
		};
		let Some((value, labels)) = E::probe(repr) else {
			continue;
		};
		for &name in labels {
			if is_identifier(name) {
				found.push(Discovered { value, repr, name });
			} else {
				tracing::trace!(
					enum_name = E::TYPE_NAME,
					value = %repr,
					label = name,
					"skipping non-identifier textual form"
				);
			}
		}
	}
	found
}

/// Declared variants whose discriminant lies outside the scanned bounds.
pub fn unreachable<E: Reflect>() -> Vec<E> {
	let info = <E::Repr as Repr>::INFO;
	E::DECLARED
		.iter()
		.copied()
		.filter(|v| !E::RANGE.contains(info, v.to_repr().to_i128()))
		.collect()
}

/// Whether `text` is a bare identifier.
///
/// Starts with a letter or `_`, continues with letters, digits or `_`, and is
/// not `_` alone. Qualified paths, raw identifiers, numbers and anything with
/// punctuation or whitespace are rejected.
pub fn is_identifier(text: &str) -> bool {
	let mut chars = text.chars();
	let Some(first) = chars.next() else {
		return false;
	};
	if !(first == '_' || first.is_alphabetic()) || text == "_" {
		return false;
	}
	chars.all(|c| c == '_' || c.is_alphanumeric())
}
