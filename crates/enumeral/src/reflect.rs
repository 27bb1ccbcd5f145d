use std::fmt::Debug;

use crate::descriptor::{Descriptor, ScanRange, Scope};
use crate::repr::Repr;
use crate::table::Table;

/// Static reflection for a fieldless enum.
///
/// Normally implemented by `#[derive(Reflect)]`. A manual implementation must
/// uphold the same contract: [`probe`](Reflect::probe) answers for exactly the
/// declared discriminants, and [`table`](Reflect::table) returns the same
/// instance on every call.
pub trait Reflect: Copy + Eq + Debug + Send + Sync + 'static {
	/// Underlying integer type.
	type Repr: Repr;

	/// Type name as written at the declaration.
	const TYPE_NAME: &'static str;
	/// Module the type was declared in.
	const MODULE_PATH: &'static str;
	/// Bounds scanned when building the table.
	const RANGE: ScanRange = ScanRange::DEFAULT;
	/// Scoped or unscoped classification.
	const SCOPE: Scope = Scope::Scoped;
	/// Whether the type opted into bitwise operators.
	const IS_FLAGS: bool = false;
	/// Every declared variant, in declaration order, including hidden ones.
	const DECLARED: &'static [Self];

	/// Returns the underlying integer.
	fn to_repr(self) -> Self::Repr;

	/// Views `value` as this enum.
	///
	/// Returns the variant together with its textual forms (declared name
	/// first, then aliases) when `value` is a reflected discriminant, or
	/// `None` for holes.
	fn probe(value: Self::Repr) -> Option<(Self, &'static [&'static str])>;

	/// Returns the process-wide table, building it on first use.
	fn table() -> &'static Table<Self>;

	/// Returns the type's descriptor.
	fn descriptor() -> Descriptor {
		Descriptor {
			type_name: Self::TYPE_NAME,
			module_path: Self::MODULE_PATH,
			repr: <Self::Repr as Repr>::INFO,
			range: Self::RANGE,
			scope: Self::SCOPE,
			flags: Self::IS_FLAGS,
		}
	}
}

/// Marker for enums whose variants are combined as a bitmask.
///
/// Opting in (`#[reflect(flags)]`) enables `|`, `&`, `^` and `!` on the enum,
/// all producing a [`Mask`](crate::Mask).
pub trait Flag: Reflect {}
