use super::state::ExpansionSet;
use super::types::{FamilyNode, NodePath, Sex};

/// Horizontal offset per tree level, in rem.
pub const INDENT_REM: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
	pub background: &'static str,
	pub border: &'static str,
}

pub const MALE: Palette = Palette {
	background: "#dbeafe",
	border: "#93c5fd",
};
pub const FEMALE: Palette = Palette {
	background: "#fce7f3",
	border: "#f9a8d4",
};
pub const UNKNOWN: Palette = Palette {
	background: "#f3f4f6",
	border: "#d1d5db",
};

impl Palette {
	pub fn for_sex(sex: Sex) -> Self {
		match sex {
			Sex::Male => MALE,
			Sex::Female => FEMALE,
			Sex::Unknown => UNKNOWN,
		}
	}

	/// Inline style for a row at `depth`.
	pub fn row_style(&self, depth: usize) -> String {
		format!(
			"margin-left: {}rem; background-color: {}; border: 1px solid {};",
			depth * INDENT_REM,
			self.background,
			self.border
		)
	}
}

/// State of a row's expand/collapse control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
	/// No children, so no control.
	Leaf,
	Collapsed,
	Expanded,
}

impl Toggle {
	pub fn glyph(self) -> &'static str {
		match self {
			Toggle::Leaf => "",
			Toggle::Collapsed => "▸",
			Toggle::Expanded => "▾",
		}
	}
}

/// One rendered row plus the rows of its visible children.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedNode {
	pub path: NodePath,
	pub depth: usize,
	pub name: String,
	pub spouse: Option<String>,
	pub other_info: Option<String>,
	pub palette: Palette,
	pub toggle: Toggle,
	pub children: Vec<RenderedNode>,
}

pub fn render_tree(root: &FamilyNode, expansion: &ExpansionSet) -> RenderedNode {
	render(root, NodePath::root(), expansion)
}

pub fn render(node: &FamilyNode, path: NodePath, expansion: &ExpansionSet) -> RenderedNode {
	let toggle = match (node.has_children(), expansion.is_expanded(&path)) {
		(false, _) => Toggle::Leaf,
		(true, false) => Toggle::Collapsed,
		(true, true) => Toggle::Expanded,
	};
	let children = if toggle == Toggle::Expanded {
		node.children
			.iter()
			.enumerate()
			.map(|(i, child)| render(child, path.child(i), expansion))
			.collect()
	} else {
		Vec::new()
	};

	RenderedNode {
		depth: path.depth(),
		path,
		name: node.name.clone(),
		spouse: non_empty(&node.spouse),
		other_info: non_empty(&node.other_info),
		palette: Palette::for_sex(node.sex),
		toggle,
		children,
	}
}

fn non_empty(value: &Option<String>) -> Option<String> {
	value.as_ref().filter(|s| !s.is_empty()).cloned()
}
