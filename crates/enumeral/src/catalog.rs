//! Process-wide catalog of reflected enum types.
//!
//! Every `#[derive(Reflect)]` submits an [`EnumInfo`] via `inventory::submit!`.
//! The catalog collects them on first access and offers type-erased lookup by
//! qualified path, for callers that only know a type by name (diagnostics,
//! config validation, tooling).

use std::sync::LazyLock;

use crate::descriptor::Descriptor;
use crate::reflect::Reflect;
use crate::repr::Repr;
use crate::table::Map;

/// Type-erased entry: underlying values widened to `i128`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ErasedEntry {
	pub ordinal: usize,
	pub value: i128,
	pub name: &'static str,
}

/// Static registration record for one reflected enum.
pub struct EnumInfo {
	/// Type name as written at the declaration.
	pub type_name: &'static str,
	/// Module the type was declared in.
	pub module_path: &'static str,
	describe: fn() -> Descriptor,
	entries: fn() -> Vec<ErasedEntry>,
}

inventory::collect!(EnumInfo);

impl EnumInfo {
	/// Builds the registration record for `E`.
	pub const fn of<E: Reflect>() -> Self {
		Self {
			type_name: E::TYPE_NAME,
			module_path: E::MODULE_PATH,
			describe: E::descriptor,
			entries: erased_entries::<E>,
		}
	}

	/// Returns `module_path::TypeName`.
	pub fn path(&self) -> String {
		format!("{}::{}", self.module_path, self.type_name)
	}

	/// Returns the type's descriptor.
	pub fn descriptor(&self) -> Descriptor {
		(self.describe)()
	}

	/// Returns the type's entries, building its table if needed.
	pub fn entries(&self) -> Vec<ErasedEntry> {
		(self.entries)()
	}
}

impl std::fmt::Debug for EnumInfo {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EnumInfo")
			.field("type_name", &self.type_name)
			.field("module_path", &self.module_path)
			.finish_non_exhaustive()
	}
}

fn erased_entries<E: Reflect>() -> Vec<ErasedEntry> {
	E::table()
		.entries()
		.iter()
		.map(|entry| ErasedEntry {
			ordinal: entry.ordinal,
			value: entry.repr.to_i128(),
			name: entry.name,
		})
		.collect()
}

/// Index over every registered [`EnumInfo`].
pub struct Catalog {
	infos: Vec<&'static EnumInfo>,
	by_path: Map<String, usize>,
}

impl Catalog {
	fn collect() -> Self {
		let mut infos: Vec<&'static EnumInfo> = inventory::iter::<EnumInfo>.into_iter().collect();
		infos.sort_by_key(|info| (info.module_path, info.type_name));

		let mut by_path = Map::default();
		infos.retain(|info| {
			let path = info.path();
			if by_path.contains_key(&path) {
				tracing::debug!(%path, "duplicate enum registration ignored");
				return false;
			}
			by_path.insert(path, by_path.len());
			true
		});

		tracing::debug!(types = infos.len(), "collected enum catalog");
		Self { infos, by_path }
	}

	/// Looks up a type by `module_path::TypeName`.
	pub fn find(&self, path: &str) -> Option<&'static EnumInfo> {
		self.by_path.get(path).map(|&idx| self.infos[idx])
	}

	/// Returns every type with the given bare name, ordered by module path.
	pub fn find_by_name<'a>(
		&'a self,
		type_name: &'a str,
	) -> impl Iterator<Item = &'static EnumInfo> + 'a {
		self.infos
			.iter()
			.copied()
			.filter(move |info| info.type_name == type_name)
	}

	/// Returns every registered type, ordered by path.
	pub fn iter(&self) -> impl Iterator<Item = &'static EnumInfo> + '_ {
		self.infos.iter().copied()
	}

	/// Returns the number of registered types.
	pub fn len(&self) -> usize {
		self.infos.len()
	}

	/// Returns true if no type is registered.
	pub fn is_empty(&self) -> bool {
		self.infos.is_empty()
	}
}

/// The process-wide catalog.
pub static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::collect);

/// Looks up a type by `module_path::TypeName`.
pub fn find(path: &str) -> Option<&'static EnumInfo> {
	CATALOG.find(path)
}

/// Returns every registered type, ordered by path.
pub fn all() -> impl Iterator<Item = &'static EnumInfo> {
	CATALOG.iter()
}
