//! Values without a table entry: formatting falls back to the integer and
//! every lookup misses.

use enumeral::fmt::Named;
use enumeral::{Reflect, ValueError};
use pretty_assertions::assert_eq;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
#[repr(u8)]
enum Gauge {
	Low = 1,
	#[reflect(skip)]
	Hidden = 5,
	Far = 200,
}

#[test]
fn test_display_falls_back_to_integer() {
	assert_eq!(Gauge::Far.to_string(), "200");
	assert_eq!(Gauge::Hidden.to_string(), "5");
	assert_eq!(Gauge::Low.to_string(), "Low");
	assert_eq!(Named(Gauge::Far).to_string(), "200");
}

#[test]
fn test_fallback_honors_width() {
	assert_eq!(format!("{:>5}", Gauge::Far), "  200");
	assert_eq!(format!("{:<5}|", Gauge::Hidden), "5    |");
	assert_eq!(format!("{:>5}", Gauge::Low), "  Low");
}

#[test]
fn test_out_of_range_variant_is_invisible() {
	assert_eq!(enumeral::name_of(Gauge::Far), None);
	assert_eq!(enumeral::cast_from_value::<Gauge>(200), None);
	assert_eq!(enumeral::cast_from_name::<Gauge>("Far"), None);
	assert_eq!(enumeral::index_of(Gauge::Far), None);
	assert!(!enumeral::contains_value::<Gauge>(200));
	assert_eq!(enumeral::integer_of(Gauge::Far), 200);
	assert_eq!(enumeral::scan::unreachable::<Gauge>(), vec![Gauge::Far]);
}

#[test]
fn test_skipped_variant_is_invisible() {
	assert_eq!(enumeral::name_of(Gauge::Hidden), None);
	assert_eq!(enumeral::cast_from_value::<Gauge>(5), None);
	assert_eq!(enumeral::cast_from_name::<Gauge>("Hidden"), None);
	assert_eq!(enumeral::index_of(Gauge::Hidden), None);
}

#[test]
fn test_only_reachable_names_are_listed() {
	assert_eq!(enumeral::count::<Gauge>(), 1);
	assert_eq!(enumeral::names_of::<Gauge>(), &["Low"]);
	assert_eq!(
		Gauge::try_from(200_u8),
		Err(ValueError {
			type_name: "Gauge",
			value: 200,
		})
	);
	assert!("Far".parse::<Gauge>().is_err());
}
