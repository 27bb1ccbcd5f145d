//! Bitmask combinations of flag enums.
//!
//! A Rust enum cannot hold a discriminant it does not declare, so combining
//! flags yields a [`Mask`] over the underlying integer instead of the enum
//! itself. The result is never validated against the table: `A | C` is a
//! perfectly good mask even though no enumerator has that value.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::reflect::{Flag, Reflect};
use crate::repr::Repr;

/// Underlying bits of a flag enum `E`, possibly a combination of several
/// enumerators or none at all.
#[repr(transparent)]
pub struct Mask<E: Flag> {
	bits: E::Repr,
	marker: PhantomData<E>,
}

impl<E: Flag> Mask<E> {
	/// The mask with no bits set.
	pub const EMPTY: Self = Self::from_bits(<E::Repr as Repr>::ZERO);

	/// Wraps raw bits.
	#[inline]
	pub const fn from_bits(bits: E::Repr) -> Self {
		Self {
			bits,
			marker: PhantomData,
		}
	}

	/// Returns the raw bits.
	#[inline]
	pub fn bits(self) -> E::Repr {
		self.bits
	}

	/// Returns true if no bit is set.
	#[inline]
	pub fn is_empty(self) -> bool {
		self.bits == <E::Repr as Repr>::ZERO
	}

	/// Returns true if every bit of `flag` is set.
	#[inline]
	pub fn contains(self, flag: E) -> bool {
		let flag = flag.to_repr();
		self.bits & flag == flag
	}

	/// Returns the enumerator with exactly these bits, if one is reflected.
	pub fn as_enum(self) -> Option<E> {
		E::table().by_value(self.bits).map(|entry| entry.value)
	}

	/// Returns the non-zero reflected enumerators fully contained in the mask,
	/// in ascending-value order.
	pub fn iter(self) -> impl Iterator<Item = E> {
		E::table()
			.entries()
			.iter()
			.filter(move |entry| {
				entry.repr != <E::Repr as Repr>::ZERO && self.bits & entry.repr == entry.repr
			})
			.map(|entry| entry.value)
	}
}

impl<E: Flag> From<E> for Mask<E> {
	#[inline]
	fn from(flag: E) -> Self {
		Self::from_bits(flag.to_repr())
	}
}

impl<E: Flag> Clone for Mask<E> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<E: Flag> Copy for Mask<E> {}

impl<E: Flag> PartialEq for Mask<E> {
	fn eq(&self, other: &Self) -> bool {
		self.bits == other.bits
	}
}

impl<E: Flag> Eq for Mask<E> {}

impl<E: Flag> PartialEq<E> for Mask<E> {
	fn eq(&self, other: &E) -> bool {
		self.bits == other.to_repr()
	}
}

impl<E: Flag> Hash for Mask<E> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.bits.hash(state);
	}
}

impl<E: Flag> Default for Mask<E> {
	fn default() -> Self {
		Self::EMPTY
	}
}

impl<E: Flag> fmt::Debug for Mask<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Mask<{}>({})", E::TYPE_NAME, self.bits)
	}
}

/// Prints the enumerator's name when the bits match one exactly, otherwise
/// the bare integer.
impl<E: Flag> fmt::Display for Mask<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match E::table().by_value(self.bits) {
			Some(entry) => f.pad(entry.name),
			None => fmt::Display::fmt(&self.bits, f),
		}
	}
}

macro_rules! mask_binary_ops {
	($($op:ident, $method:ident, $assign:ident, $assign_method:ident, $sym:tt;)*) => {
		$(
			impl<E: Flag> $op for Mask<E> {
				type Output = Self;

				#[inline]
				fn $method(self, rhs: Self) -> Self {
					Self::from_bits(self.bits $sym rhs.bits)
				}
			}

			impl<E: Flag> $op<E> for Mask<E> {
				type Output = Self;

				#[inline]
				fn $method(self, rhs: E) -> Self {
					Self::from_bits(self.bits $sym rhs.to_repr())
				}
			}

			impl<E: Flag> $assign for Mask<E> {
				#[inline]
				fn $assign_method(&mut self, rhs: Self) {
					self.bits = self.bits $sym rhs.bits;
				}
			}

			impl<E: Flag> $assign<E> for Mask<E> {
				#[inline]
				fn $assign_method(&mut self, rhs: E) {
					self.bits = self.bits $sym rhs.to_repr();
				}
			}
		)*
	};
}

mask_binary_ops! {
	BitOr, bitor, BitOrAssign, bitor_assign, |;
	BitAnd, bitand, BitAndAssign, bitand_assign, &;
	BitXor, bitxor, BitXorAssign, bitxor_assign, ^;
}

impl<E: Flag> Not for Mask<E> {
	type Output = Self;

	#[inline]
	fn not(self) -> Self {
		Self::from_bits(!self.bits)
	}
}

/// Names the enumerators making up `mask`, joined with `|`.
///
/// An exact match returns that single name. Otherwise every set bit must be
/// covered by non-zero enumerators, or the result is `None`. The empty mask
/// yields its zero-valued name if one is reflected, else `""`.
pub fn flags_name<E: Flag>(mask: Mask<E>) -> Option<String> {
	let table = E::table();
	if let Some(entry) = table.by_value(mask.bits) {
		return Some(entry.name.to_owned());
	}

	let mut rest = mask.bits;
	let mut names = Vec::new();
	for entry in table.entries() {
		if entry.repr == <E::Repr as Repr>::ZERO || mask.bits & entry.repr != entry.repr {
			continue;
		}
		names.push(entry.name);
		rest = rest & !entry.repr;
	}

	(rest == <E::Repr as Repr>::ZERO).then(|| names.join("|"))
}

/// Parses `"A|C"` style text into a mask.
///
/// Each `|`-separated part, trimmed of whitespace, must be a reflected name
/// or alias (case-sensitive).
pub fn flags_cast<E: Flag>(text: &str) -> Option<Mask<E>> {
	text.split('|')
		.map(|part| E::table().by_name(part.trim()).map(|entry| entry.repr))
		.try_fold(<E::Repr as Repr>::ZERO, |bits, part| Some(bits | part?))
		.map(Mask::from_bits)
}
