//! Per-type reflection descriptors: scan bounds and classification.

use crate::repr::ReprInfo;

/// Inclusive bounds of the integer range scanned for enumerators.
///
/// Enumerators whose value lies outside the bounds are never discovered and
/// are invisible to every lookup. Override the bounds per type with
/// `#[reflect(range(min = .., max = ..))]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScanRange {
	min: i64,
	max: i64,
}

impl ScanRange {
	/// `[-128, 127]`.
	pub const DEFAULT: Self = Self { min: -128, max: 127 };

	/// Largest number of candidates a single scan may visit.
	pub const MAX_SPAN: u64 = u16::MAX as u64;

	/// Creates a range, panicking (at compile time when used in a constant)
	/// if `min > max` or the range spans more than [`Self::MAX_SPAN`] values.
	pub const fn new(min: i64, max: i64) -> Self {
		assert!(min <= max, "scan range min must not exceed max");
		assert!(
			(max as i128 - min as i128) < Self::MAX_SPAN as i128,
			"scan range is too wide"
		);
		Self { min, max }
	}

	/// Lowest candidate value.
	#[inline]
	pub const fn min(&self) -> i64 {
		self.min
	}

	/// Highest candidate value.
	#[inline]
	pub const fn max(&self) -> i64 {
		self.max
	}

	/// Number of candidate values in the range before clamping.
	pub const fn span(&self) -> u64 {
		(self.max as i128 - self.min as i128 + 1) as u64
	}

	/// Intersects the range with what `repr` can hold.
	///
	/// Returns `None` when nothing is left, e.g. a range entirely below zero
	/// for an unsigned type.
	pub fn clamp_to(&self, repr: ReprInfo) -> Option<(i128, i128)> {
		let lo = (self.min as i128).max(repr.min);
		let hi = (self.max as i128).min(repr.max);
		(lo <= hi).then_some((lo, hi))
	}

	/// Whether `value` lies inside the range after clamping to `repr`.
	pub fn contains(&self, repr: ReprInfo, value: i128) -> bool {
		self.clamp_to(repr)
			.is_some_and(|(lo, hi)| (lo..=hi).contains(&value))
	}
}

impl Default for ScanRange {
	fn default() -> Self {
		Self::DEFAULT
	}
}

/// Whether an enum's variants need qualification through the type name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scope {
	/// Variants are referenced as `Type::Variant`.
	#[default]
	Scoped,
	/// Variants are brought into scope unqualified (declared with
	/// `#[reflect(unscoped)]`, typically alongside a glob import).
	Unscoped,
}

/// Everything known about a reflected enum type without building its table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Descriptor {
	/// Type name as written at the declaration.
	pub type_name: &'static str,
	/// Module the type was declared in.
	pub module_path: &'static str,
	/// Underlying integer representation.
	pub repr: ReprInfo,
	/// Configured scan bounds.
	pub range: ScanRange,
	/// Scoped or unscoped classification.
	pub scope: Scope,
	/// Whether the type opted into bitwise operators.
	pub flags: bool,
}

impl Descriptor {
	/// The candidate bounds actually scanned for this type.
	pub fn effective_range(&self) -> Option<(i128, i128)> {
		self.range.clamp_to(self.repr)
	}
}
