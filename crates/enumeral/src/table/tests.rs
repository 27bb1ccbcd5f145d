use pretty_assertions::assert_eq;

use super::*;
use crate::Reflect;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
#[repr(i32)]
enum Color {
	Green = 10,
	Red = -10,
	#[reflect(alias = "Azure", alias = "Navy")]
	Blue = 0,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
enum Void {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
enum Partial {
	Shown = 1,
	#[reflect(skip)]
	Hidden = 2,
}

fn pairs<E: Reflect>(table: &Table<E>) -> Vec<(E::Repr, &'static str)> {
	table.entries().iter().map(|e| (e.repr, e.name)).collect()
}

/// Entries come out sorted by value with ordinals matching positions,
/// regardless of declaration order.
#[test]
fn test_build_orders_by_value() {
	let table = Color::table();
	assert_eq!(pairs(table), vec![(-10, "Red"), (0, "Blue"), (10, "Green")]);
	for (idx, entry) in table.entries().iter().enumerate() {
		assert_eq!(entry.ordinal, idx);
	}
	assert_eq!(table.names(), &["Red", "Blue", "Green"]);
	assert_eq!(table.values(), &[Color::Red, Color::Blue, Color::Green]);
}

#[test]
fn test_table_is_cached() {
	assert!(std::ptr::eq(Color::table(), Color::table()));
}

#[test]
fn test_aliases_resolve_but_are_not_entries() {
	let table = Color::table();
	assert_eq!(table.len(), 3);
	assert_eq!(table.by_name("Azure").map(|e| e.value), Some(Color::Blue));
	assert_eq!(table.by_name("Navy").map(|e| e.value), Some(Color::Blue));
	let aliases: Vec<_> = table
		.aliases()
		.into_iter()
		.map(|(alias, e)| (alias, e.name))
		.collect();
	assert_eq!(aliases, vec![("Azure", "Blue"), ("Navy", "Blue")]);
	assert!(table.collisions().is_empty());
}

#[test]
fn test_lookup_by_value_and_name() {
	let table = Color::table();
	assert_eq!(table.by_value(10).map(|e| e.name), Some("Green"));
	assert!(table.by_value(5).is_none());
	assert_eq!(table.by_name("Red").map(|e| e.ordinal), Some(0));
	assert!(table.by_name("red").is_none());
	assert_eq!(
		table.by_name_ignore_case("red").map(|e| e.value),
		Some(Color::Red)
	);
	assert_eq!(
		table.by_name_ignore_case("NAVY").map(|e| e.value),
		Some(Color::Blue)
	);
	assert_eq!(table.index_of(Color::Green), Some(2));
}

#[test]
fn test_empty_table_is_valid() {
	let table = Void::table();
	assert!(table.is_empty());
	assert_eq!(table.len(), 0);
	assert!(table.names().is_empty());
	assert!(table.by_name("anything").is_none());
	assert!(table.get(0).is_none());
}

#[test]
fn test_skipped_variant_is_absent() {
	let table = Partial::table();
	assert_eq!(pairs(table), vec![(1, "Shown")]);
	assert!(table.by_value(2).is_none());
	assert!(table.index_of(Partial::Hidden).is_none());
}

/// First name seen for a value wins; the later one becomes an alias.
#[test]
fn test_builder_first_name_wins() {
	let mut builder = TableBuilder::new("manual");
	builder.push(Color::Blue, "Blue");
	builder.push(Color::Red, "Red");
	builder.push(Color::Blue, "Cyan");
	assert_eq!(builder.len(), 3);

	let table = builder.build();
	assert_eq!(pairs(&table), vec![(-10, "Red"), (0, "Blue")]);
	assert_eq!(table.by_name("Cyan").map(|e| e.name), Some("Blue"));
	assert_eq!(table.aliases().len(), 1);
	assert!(table.collisions().is_empty());
}

/// Only forms that are actually discarded show up as collisions.
#[test]
fn test_builder_records_dropped_aliases() {
	let mut builder = TableBuilder::new("manual");
	builder.push(Color::Red, "Red");
	builder.push(Color::Red, "Crimson");
	builder.push(Color::Red, "Red");
	builder.push(Color::Green, "Green");
	builder.push(Color::Green, "Crimson");
	let table = builder.build();

	assert_eq!(pairs(&table), vec![(-10, "Red"), (10, "Green")]);
	assert_eq!(table.by_name("Crimson").map(|e| e.value), Some(Color::Red));
	assert_eq!(
		table.collisions(),
		&[
			Collision {
				kind: CollisionKind::DuplicateValue,
				value: -10,
				kept: "Red",
				dropped: "Red",
			},
			Collision {
				kind: CollisionKind::DuplicateName,
				value: 10,
				kept: "Red",
				dropped: "Crimson",
			},
		]
	);
}

#[test]
fn test_builder_tie_break_follows_insertion_order() {
	let mut first = TableBuilder::new("manual");
	first.push(Color::Green, "Lime");
	first.push(Color::Green, "Green");
	assert_eq!(first.build().names(), &["Lime"]);

	let mut second = TableBuilder::new("manual");
	second.push(Color::Green, "Green");
	second.push(Color::Green, "Lime");
	assert_eq!(second.build().names(), &["Green"]);
}

#[test]
fn test_builder_duplicate_name_keeps_lower_value() {
	let mut builder = TableBuilder::new("manual");
	builder.push(Color::Green, "Shade");
	builder.push(Color::Red, "Shade");
	let table = builder.build();

	assert_eq!(pairs(&table), vec![(-10, "Shade")]);
	assert_eq!(table.collisions()[0].kind, CollisionKind::DuplicateName);
	assert_eq!(table.collisions()[0].dropped, "Shade");
}

#[test]
fn test_builder_alias_cannot_shadow_declared_name() {
	let mut builder = TableBuilder::new("manual");
	builder.push(Color::Red, "Red");
	builder.push(Color::Red, "Green");
	builder.push(Color::Green, "Green");
	let table = builder.build();

	assert_eq!(table.by_name("Green").map(|e| e.value), Some(Color::Green));
	assert!(table.aliases().is_empty());
	let kinds: Vec<_> = table.collisions().iter().map(|c| c.kind).collect();
	assert_eq!(kinds, vec![CollisionKind::ShadowedAlias]);
	assert_eq!(table.collisions()[0].kept, "Green");
	assert_eq!(table.collisions()[0].dropped, "Green");
}

#[test]
fn test_empty_builder() {
	let builder = TableBuilder::<Color>::new("manual");
	assert!(builder.is_empty());
	let table = builder.build();
	assert!(table.is_empty());
	assert!(table.collisions().is_empty());
}

#[test]
fn test_collision_display() {
	let collision = Collision {
		kind: CollisionKind::DuplicateValue,
		value: -3,
		kept: "A",
		dropped: "B",
	};
	assert_eq!(
		collision.to_string(),
		"duplicate_value: value=-3 kept=A dropped=B"
	);
}
