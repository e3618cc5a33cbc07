use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Where the component looks for the genealogy document unless told otherwise.
pub const DEFAULT_FILE_PATH: &str = "/data/marojuFamilyTree_Rev1.json";

/// Names expanded when the tree first loads.
pub const DEFAULT_EXPANDED: &[&str] = &[
	"Somanna (Regulavalasa Tatayya)",
	"Chinnayya",
	"Somanna",
	"Sanyasi",
];

pub fn default_expanded() -> Vec<String> {
	DEFAULT_EXPANDED.iter().map(|name| name.to_string()).collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum Sex {
	Male,
	Female,
	#[default]
	Unknown,
}

impl From<Value> for Sex {
	fn from(value: Value) -> Self {
		match value.as_str() {
			Some("Male") => Sex::Male,
			Some("Female") => Sex::Female,
			_ => Sex::Unknown,
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FamilyNode {
	#[serde(default, deserialize_with = "null_as_default")]
	pub name: String,
	#[serde(rename = "Sex", alias = "sex", default)]
	pub sex: Sex,
	#[serde(rename = "Spouse", alias = "spouse", default, deserialize_with = "text")]
	pub spouse: Option<String>,
	#[serde(rename = "otherInfo", default, deserialize_with = "text")]
	pub other_info: Option<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub children: Vec<FamilyNode>,
}

impl FamilyNode {
	pub fn has_children(&self) -> bool {
		!self.children.is_empty()
	}

	/// Number of people in this subtree, including `self`.
	pub fn count(&self) -> usize {
		1 + self.children.iter().map(FamilyNode::count).sum::<usize>()
	}
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Strings pass through and numbers are shown as written. Anything else is absent.
fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match Value::deserialize(deserializer)? {
		Value::String(s) => Some(s),
		Value::Number(n) => Some(n.to_string()),
		_ => None,
	})
}

/// Child indices from the root down to a node. The root is the empty path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(Vec<usize>);

impl NodePath {
	pub fn root() -> Self {
		Self::default()
	}

	pub fn child(&self, index: usize) -> Self {
		let mut indices = self.0.clone();
		indices.push(index);
		Self(indices)
	}

	pub fn depth(&self) -> usize {
		self.0.len()
	}

	pub fn indices(&self) -> &[usize] {
		&self.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_document_keys() {
		let node: FamilyNode = serde_json::from_str(
			r#"{"name":"Root","Sex":"Male","Spouse":"Lakshmi","otherInfo":"Farmer",
			"children":[{"name":"Child","Sex":"Female"}]}"#,
		)
		.unwrap();
		assert_eq!(node.name, "Root");
		assert_eq!(node.sex, Sex::Male);
		assert_eq!(node.spouse.as_deref(), Some("Lakshmi"));
		assert_eq!(node.other_info.as_deref(), Some("Farmer"));
		assert_eq!(node.children.len(), 1);
		assert_eq!(node.children[0].sex, Sex::Female);
		assert!(node.children[0].children.is_empty());
	}

	#[test]
	fn unexpected_sex_values_are_unknown() {
		for raw in [r#""male""#, r#""Other""#, "null"] {
			let node: FamilyNode =
				serde_json::from_str(&format!(r#"{{"name":"A","Sex":{raw}}}"#)).unwrap();
			assert_eq!(node.sex, Sex::Unknown, "Sex = {raw}");
		}
		let node: FamilyNode = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
		assert_eq!(node.sex, Sex::Unknown);
	}

	#[test]
	fn non_string_sex_still_loads_as_unknown() {
		for raw in ["1", "true", "[]", r#"{"value":"Male"}"#] {
			let node: FamilyNode =
				serde_json::from_str(&format!(r#"{{"name":"Root","Sex":{raw},"children":[]}}"#))
					.unwrap();
			assert_eq!(node.sex, Sex::Unknown, "Sex = {raw}");
			assert_eq!(node.name, "Root");
		}
	}

	#[test]
	fn annotations_accept_any_json_value() {
		let node: FamilyNode = serde_json::from_str(
			r#"{"name":"A","Spouse":false,"otherInfo":1952,"children":[{"name":"B","Spouse":null}]}"#,
		)
		.unwrap();
		assert_eq!(node.spouse, None);
		assert_eq!(node.other_info.as_deref(), Some("1952"));
		assert_eq!(node.children[0].spouse, None);
	}

	#[test]
	fn null_children_and_name_are_tolerated() {
		let node: FamilyNode = serde_json::from_str(r#"{"name":null,"children":null}"#).unwrap();
		assert_eq!(node.name, "");
		assert!(!node.has_children());
	}

	#[test]
	fn count_includes_every_descendant() {
		let node: FamilyNode = serde_json::from_str(
			r#"{"name":"A","children":[{"name":"B","children":[{"name":"C"}]},{"name":"D"}]}"#,
		)
		.unwrap();
		assert_eq!(node.count(), 4);
	}

	#[test]
	fn paths_track_depth() {
		let path = NodePath::root().child(2).child(0);
		assert_eq!(path.depth(), 2);
		assert_eq!(path.indices(), &[2, 0]);
		assert_eq!(NodePath::root().depth(), 0);
	}
}
