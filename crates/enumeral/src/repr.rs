//! Underlying integer representations.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// Static facts about an underlying integer type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReprInfo {
	/// Rust spelling of the type, e.g. `"i32"`.
	pub name: &'static str,
	/// Whether the type is signed.
	pub signed: bool,
	/// Width in bits.
	pub bits: u32,
	/// Smallest representable value.
	pub min: i128,
	/// Largest representable value.
	pub max: i128,
}

/// An integer type that can back a reflected enum.
///
/// Implemented for every primitive integer up to 64 bits. Conversions go
/// through `i128`, which holds all of them losslessly.
pub trait Repr:
	Copy
	+ Eq
	+ Ord
	+ Hash
	+ Debug
	+ Display
	+ Send
	+ Sync
	+ 'static
	+ BitOr<Output = Self>
	+ BitAnd<Output = Self>
	+ BitXor<Output = Self>
	+ Not<Output = Self>
{
	/// Static facts about this type.
	const INFO: ReprInfo;
	/// The all-zero bit pattern.
	const ZERO: Self;

	/// Widens to `i128`.
	fn to_i128(self) -> i128;

	/// Narrows from `i128`, returning `None` if the value does not fit.
	fn from_i128(value: i128) -> Option<Self>;
}

macro_rules! impl_repr {
	($($ty:ty => $signed:literal),* $(,)?) => {
		$(
			impl Repr for $ty {
				const INFO: ReprInfo = ReprInfo {
					name: stringify!($ty),
					signed: $signed,
					bits: <$ty>::BITS,
					min: <$ty>::MIN as i128,
					max: <$ty>::MAX as i128,
				};
				const ZERO: Self = 0;

				#[inline]
				fn to_i128(self) -> i128 {
					self as i128
				}

				#[inline]
				fn from_i128(value: i128) -> Option<Self> {
					<$ty>::try_from(value).ok()
				}
			}
		)*
	};
}

impl_repr! {
	i8 => true,
	i16 => true,
	i32 => true,
	i64 => true,
	isize => true,
	u8 => false,
	u16 => false,
	u32 => false,
	u64 => false,
	usize => false,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_info_matches_primitive() {
		assert_eq!(i8::INFO.min, -128);
		assert_eq!(i8::INFO.max, 127);
		assert!(i8::INFO.signed);
		assert_eq!(u16::INFO.bits, 16);
		assert!(!u16::INFO.signed);
		assert_eq!(u64::INFO.max, u64::MAX as i128);
	}

	#[test]
	fn test_from_i128_rejects_out_of_range() {
		assert_eq!(u8::from_i128(255), Some(255));
		assert_eq!(u8::from_i128(256), None);
		assert_eq!(u8::from_i128(-1), None);
		assert_eq!(i32::from_i128(-10), Some(-10));
	}
}
