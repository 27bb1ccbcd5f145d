//! Collision vocabulary for table builds.
//!
//! A collision is recorded whenever the builder drops a textual form. Names
//! that survive as aliases are not collisions. The build itself never fails
//! on collisions; they are kept for diagnostics.

use std::fmt;

/// Why a textual form was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionKind {
	/// The same name repeated for the same value.
	DuplicateValue,
	/// A name already bound to another value. The later form is dropped, and
	/// with it the whole value when the name was its only form.
	DuplicateName,
	/// An alias equal to some entry's declared name. The declared name wins.
	ShadowedAlias,
}

impl fmt::Display for CollisionKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::DuplicateValue => write!(f, "duplicate_value"),
			Self::DuplicateName => write!(f, "duplicate_name"),
			Self::ShadowedAlias => write!(f, "shadowed_alias"),
		}
	}
}

/// One textual form dropped while building a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collision {
	pub kind: CollisionKind,
	/// Underlying value of the textual form that was dropped.
	pub value: i128,
	/// Name bound to the table entry that won.
	pub kept: &'static str,
	/// Name that lost.
	pub dropped: &'static str,
}

impl fmt::Display for Collision {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}: value={} kept={} dropped={}",
			self.kind, self.value, self.kept, self.dropped
		)
	}
}
