use std::collections::hash_map::Entry as Slot;

use super::collision::{Collision, CollisionKind};
use super::{Entry, Map, Table};
use crate::reflect::Reflect;
use crate::repr::Repr;
use crate::scan::Discovered;

/// Builder for constructing a [`Table`].
///
/// Accepts textual forms in any order. [`build`](Self::build) sorts them by
/// value (stable, so insertion order breaks ties) and keeps the first name
/// seen for each value. Later names for a value become aliases; only forms
/// that end up discarded are recorded as collisions.
pub struct TableBuilder<E: Reflect> {
	label: &'static str,
	pending: Vec<Discovered<E>>,
}

impl<E: Reflect> TableBuilder<E> {
	/// Creates an empty builder; `label` appears in diagnostics.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			pending: Vec::new(),
		}
	}

	/// Returns the number of textual forms added so far.
	pub fn len(&self) -> usize {
		self.pending.len()
	}

	/// Returns true if nothing has been added.
	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}

	/// Adds one `(value, name)` pair.
	pub fn push(&mut self, value: E, name: &'static str) {
		self.pending.push(Discovered {
			value,
			repr: value.to_repr(),
			name,
		});
	}

	/// Adds scanner output.
	pub fn extend<I: IntoIterator<Item = Discovered<E>>>(&mut self, found: I) {
		self.pending.extend(found);
	}

	/// Sorts, resolves collisions and indexes.
	pub fn build(self) -> Table<E> {
		let label = self.label;
		let mut pending = self.pending;
		pending.sort_by_key(|d| d.repr);

		let mut entries: Vec<Entry<E>> = Vec::with_capacity(pending.len());
		let mut by_value: Map<E::Repr, usize> = Map::default();
		let mut by_name: Map<&'static str, usize> = Map::default();
		let mut by_alias: Map<&'static str, usize> = Map::default();
		let mut collisions = Vec::new();

		for found in pending {
			if let Some(&ordinal) = by_value.get(&found.repr) {
				let kept = entries[ordinal].name;
				let owner = if found.name == kept {
					Some(ordinal)
				} else {
					match by_alias.entry(found.name) {
						Slot::Vacant(slot) => {
							slot.insert(ordinal);
							None
						}
						Slot::Occupied(slot) => Some(*slot.get()),
					}
				};
				// Same name for the same value is a repeat; a name bound to
				// another value is a clash.
				if let Some(owner) = owner {
					collisions.push(Collision {
						kind: if owner == ordinal {
							CollisionKind::DuplicateValue
						} else {
							CollisionKind::DuplicateName
						},
						value: found.repr.to_i128(),
						kept: entries[owner].name,
						dropped: found.name,
					});
				}
				continue;
			}

			if let Some(&ordinal) = by_name.get(found.name) {
				collisions.push(Collision {
					kind: CollisionKind::DuplicateName,
					value: found.repr.to_i128(),
					kept: entries[ordinal].name,
					dropped: found.name,
				});
				continue;
			}

			let ordinal = entries.len();
			by_value.insert(found.repr, ordinal);
			by_name.insert(found.name, ordinal);
			entries.push(Entry {
				ordinal,
				value: found.value,
				repr: found.repr,
				name: found.name,
			});
		}

		// An alias may have been bound before a later entry declared the same name.
		by_alias.retain(|&alias, &mut ordinal| {
			let Some(&owner) = by_name.get(alias) else {
				return true;
			};
			if owner != ordinal {
				collisions.push(Collision {
					kind: CollisionKind::ShadowedAlias,
					value: entries[ordinal].repr.to_i128(),
					kept: entries[owner].name,
					dropped: alias,
				});
			}
			false
		});

		for collision in &collisions {
			tracing::debug!(table = label, %collision, "dropped textual form");
		}
		tracing::debug!(
			enum_name = label,
			entries = entries.len(),
			aliases = by_alias.len(),
			collisions = collisions.len(),
			"built reflection table"
		);

		Table {
			label,
			values: entries.iter().map(|e| e.value).collect(),
			names: entries.iter().map(|e| e.name).collect(),
			entries: entries.into_boxed_slice(),
			by_value,
			by_name,
			by_alias,
			collisions: collisions.into_boxed_slice(),
		}
	}
}
