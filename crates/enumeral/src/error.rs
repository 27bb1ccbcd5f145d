/// A name that matches no enumerator of the target type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {type_name} name: {name:?}")]
pub struct ParseError {
	pub type_name: &'static str,
	pub name: String,
}

/// An integer that matches no enumerator of the target type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{value} is not a {type_name} value")]
pub struct ValueError {
	pub type_name: &'static str,
	pub value: i128,
}

/// Misuse of ordinal-indexed access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrdinalError {
	#[error("ordinal {ordinal} out of range for {type_name} ({count} entries)")]
	OutOfRange {
		type_name: &'static str,
		ordinal: usize,
		count: usize,
	},
}
