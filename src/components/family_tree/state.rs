use std::cell::Cell;
use std::collections::HashSet;

use super::loader::LoadError;
use super::types::{FamilyNode, NodePath};

/// Outcome of fetching the genealogy document.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
	#[default]
	Loading,
	/// Fetched and parsed. `None` when the document body was `null`.
	Ready(Option<FamilyNode>),
	Error(String),
}

impl From<Result<Option<FamilyNode>, LoadError>> for LoadStatus {
	fn from(result: Result<Option<FamilyNode>, LoadError>) -> Self {
		match result {
			Ok(root) => LoadStatus::Ready(root),
			Err(err) => LoadStatus::Error(format!("Error loading family tree data: {err}")),
		}
	}
}

/// Numbers load requests so that only the most recent one publishes its result.
#[derive(Debug, Default)]
pub struct LoadGeneration {
	latest: Cell<u64>,
}

impl LoadGeneration {
	pub fn begin(&self) -> u64 {
		let ticket = self.latest.get() + 1;
		self.latest.set(ticket);
		ticket
	}

	pub fn is_current(&self, ticket: u64) -> bool {
		self.latest.get() == ticket
	}
}

/// Paths of the nodes whose children are currently shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionSet {
	expanded: HashSet<NodePath>,
}

impl ExpansionSet {
	/// Expands every node in `root` whose name appears in `names`.
	pub fn from_names<S: AsRef<str>>(root: &FamilyNode, names: &[S]) -> Self {
		let names: HashSet<&str> = names.iter().map(AsRef::as_ref).collect();
		let mut set = Self::default();
		set.seed(root, NodePath::root(), &names);
		set
	}

	fn seed(&mut self, node: &FamilyNode, path: NodePath, names: &HashSet<&str>) {
		for (i, child) in node.children.iter().enumerate() {
			self.seed(child, path.child(i), names);
		}
		if names.contains(node.name.as_str()) {
			self.expanded.insert(path);
		}
	}

	pub fn is_expanded(&self, path: &NodePath) -> bool {
		self.expanded.contains(path)
	}

	/// Flips membership of `path` and returns whether it is now expanded.
	pub fn toggle(&mut self, path: &NodePath) -> bool {
		if self.expanded.remove(path) {
			false
		} else {
			self.expanded.insert(path.clone());
			true
		}
	}

	pub fn len(&self) -> usize {
		self.expanded.len()
	}
}
