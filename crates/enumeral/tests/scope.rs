//! Scoped and unscoped classification.

use enumeral::{Reflect, Scope};
use rstest::rstest;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
#[repr(i32)]
enum Color {
	Red = -10,
	Blue = 0,
	Green = 10,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
#[reflect(flags)]
enum Flags {
	A = 1,
	B = 2,
	C = 4,
	D = 8,
}

#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
#[repr(C)]
#[reflect(unscoped)]
enum color {
	red,
	green,
	blue,
}

#[allow(unused_imports)]
use color::*;

#[test]
fn test_unscoped_variants_are_usable_unqualified() {
	assert_eq!(enumeral::name_of(green), Some("green"));
	assert_eq!(enumeral::integer_of(blue), 2);
	assert_eq!(enumeral::value_at::<color>(0), red);
}

#[test]
fn test_classification() {
	assert!(enumeral::is_unscoped::<color>());
	assert!(!enumeral::is_scoped::<color>());

	assert!(enumeral::is_scoped::<Color>());
	assert!(!enumeral::is_unscoped::<Color>());

	assert!(enumeral::is_scoped::<Flags>());
	assert!(!enumeral::is_unscoped::<Flags>());
}

#[rstest]
#[case(Color::SCOPE)]
#[case(Flags::SCOPE)]
#[case(color::SCOPE)]
fn test_scoped_and_unscoped_are_exclusive(#[case] scope: Scope) {
	let scoped = scope == Scope::Scoped;
	let unscoped = scope == Scope::Unscoped;
	assert!(scoped ^ unscoped);
}

#[test]
fn test_repr_c_maps_to_i32() {
	assert_eq!(enumeral::descriptor::<color>().repr.name, "i32");
	assert_eq!(enumeral::descriptor::<Flags>().repr.name, "isize");
}
