//! Reflection tables.
//!
//! # Role
//!
//! A [`Table`] is the immutable, ascending-by-value list of a type's
//! enumerators plus its lookup indices. One table exists per type for the
//! life of the process; see [`Reflect::table`].
//!
//! # Invariants
//!
//! - Underlying values are strictly ascending; `entries[i].ordinal == i`.
//! - Declared names are unique. Aliases never shadow a declared name.
//! - An empty table is valid.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::reflect::Reflect;
use crate::scan;

mod build;
mod collision;

pub use build::TableBuilder;
pub use collision::{Collision, CollisionKind};

pub(crate) type Map<K, V> = FxHashMap<K, V>;

/// One reflected enumerator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry<E: Reflect> {
	/// Position in ascending-value order.
	pub ordinal: usize,
	/// The enum value.
	pub value: E,
	/// Its underlying integer.
	pub repr: E::Repr,
	/// Its declared name.
	pub name: &'static str,
}

impl<E: Reflect> Entry<E> {
	/// Returns `(value, name)`.
	#[inline]
	pub fn pair(&self) -> (E, &'static str) {
		(self.value, self.name)
	}
}

/// Immutable name/value table for one enum type.
pub struct Table<E: Reflect> {
	pub(crate) label: &'static str,
	pub(crate) entries: Box<[Entry<E>]>,
	pub(crate) values: Box<[E]>,
	pub(crate) names: Box<[&'static str]>,
	pub(crate) by_value: Map<E::Repr, usize>,
	pub(crate) by_name: Map<&'static str, usize>,
	pub(crate) by_alias: Map<&'static str, usize>,
	pub(crate) collisions: Box<[Collision]>,
}

impl<E: Reflect> Table<E> {
	/// Scans `E` and builds its table.
	///
	/// Prefer [`Reflect::table`], which builds once and caches. Enumerators
	/// outside `E::RANGE` are not part of the result.
	pub fn build() -> Self {
		let unreachable = scan::unreachable::<E>();
		if !unreachable.is_empty() {
			tracing::debug!(
				enum_name = E::TYPE_NAME,
				min = E::RANGE.min(),
				max = E::RANGE.max(),
				?unreachable,
				"declared variants lie outside the scan range"
			);
		}

		let mut builder = TableBuilder::new(E::TYPE_NAME);
		builder.extend(scan::scan::<E>());
		builder.build()
	}

	/// Label used in diagnostics (the type name for scanned tables).
	#[inline]
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Returns the number of entries.
	#[inline]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if no enumerator was discovered.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns all entries in ascending-value order.
	#[inline]
	pub fn entries(&self) -> &[Entry<E>] {
		&self.entries
	}

	/// Returns all values in ascending order.
	#[inline]
	pub fn values(&self) -> &[E] {
		&self.values
	}

	/// Returns all declared names, ordered by value.
	#[inline]
	pub fn names(&self) -> &[&'static str] {
		&self.names
	}

	/// Returns the entry at `ordinal`.
	#[inline]
	pub fn get(&self, ordinal: usize) -> Option<&Entry<E>> {
		self.entries.get(ordinal)
	}

	/// Looks up an entry by underlying integer.
	#[inline]
	pub fn by_value(&self, repr: E::Repr) -> Option<&Entry<E>> {
		let ordinal = self.by_value.get(&repr)?;
		Some(&self.entries[*ordinal])
	}

	/// Looks up an entry by declared name or alias. Case-sensitive.
	pub fn by_name(&self, name: &str) -> Option<&Entry<E>> {
		let ordinal = self
			.by_name
			.get(name)
			.or_else(|| self.by_alias.get(name))?;
		Some(&self.entries[*ordinal])
	}

	/// Looks up an entry by name, ignoring ASCII case.
	///
	/// Declared names are tried before aliases; among several matches the
	/// lowest ordinal wins.
	pub fn by_name_ignore_case(&self, name: &str) -> Option<&Entry<E>> {
		if let Some(entry) = self
			.entries
			.iter()
			.find(|e| e.name.eq_ignore_ascii_case(name))
		{
			return Some(entry);
		}
		self.by_alias
			.iter()
			.filter(|(alias, _)| alias.eq_ignore_ascii_case(name))
			.map(|(_, &ordinal)| ordinal)
			.min()
			.map(|ordinal| &self.entries[ordinal])
	}

	/// Returns the ordinal of `value`, if it was discovered.
	#[inline]
	pub fn index_of(&self, value: E) -> Option<usize> {
		self.by_value.get(&value.to_repr()).copied()
	}

	/// Returns `(alias, entry)` pairs, sorted by alias.
	pub fn aliases(&self) -> Vec<(&'static str, &Entry<E>)> {
		let mut out: Vec<_> = self
			.by_alias
			.iter()
			.map(|(&alias, &ordinal)| (alias, &self.entries[ordinal]))
			.collect();
		out.sort_by_key(|(alias, _)| *alias);
		out
	}

	/// Returns textual forms dropped while building, for diagnostics.
	#[inline]
	pub fn collisions(&self) -> &[Collision] {
		&self.collisions
	}
}

impl<E: Reflect> fmt::Debug for Table<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Table")
			.field("label", &self.label)
			.field("entries", &self.entries)
			.field("aliases", &self.by_alias.len())
			.field("collisions", &self.collisions)
			.finish()
	}
}

#[cfg(test)]
mod tests;
