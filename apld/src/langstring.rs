use std::collections::BTreeMap;

/// String with optional BCP47-tagged variants, as used by `name`/`nameMap`,
/// `content`/`contentMap` and `summary`/`summaryMap`.
///
/// Variants are stored as a tree keyed by subtag: `en-US` lives under `en` → `US`. The root
/// holds the language-less default value. Subtags are compared case-sensitively, exactly as
/// they appear on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LangString {
	root: LangNode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct LangNode {
	value: Option<String>,
	children: BTreeMap<String, LangNode>,
}

impl LangNode {
	fn is_empty(&self) -> bool {
		self.value.is_none() && self.children.values().all(LangNode::is_empty)
	}

	fn flatten(&self, prefix: &str, out: &mut BTreeMap<String, String>) {
		for (subtag, node) in &self.children {
			let tag = if prefix.is_empty() { subtag.clone() } else { format!("{prefix}-{subtag}") };
			if let Some(value) = &node.value {
				out.insert(tag.clone(), value.clone());
			}
			node.flatten(&tag, out);
		}
	}
}

fn subtags(tag: &str) -> Vec<&str> {
	tag.split('-').collect()
}

fn remove_path(node: &mut LangNode, tags: &[&str]) -> Option<String> {
	let Some((first, rest)) = tags.split_first() else {
		return node.value.take();
	};
	let child = node.children.get_mut(*first)?;
	let removed = remove_path(child, rest);
	if child.value.is_none() && child.children.is_empty() {
		node.children.remove(*first);
	}
	removed
}

impl LangString {
	pub fn new() -> Self {
		Self::default()
	}

	/// language-less value, if any
	pub fn default_value(&self) -> Option<&str> {
		self.root.value.as_deref()
	}

	pub fn set_default_value(&mut self, value: Option<String>) {
		self.root.value = value;
	}

	/// true when no node holds a value
	pub fn is_empty(&self) -> bool {
		self.root.is_empty()
	}

	/// Looks up the value for a subtag path, falling back to the closest tagged ancestor and
	/// finally to the default value.
	///
	/// `get(&["en", "GB"])` on a string holding only `en` returns the `en` value.
	pub fn get(&self, tags: &[&str]) -> Option<&str> {
		let mut node = &self.root;
		let mut found = self.root.value.as_deref();
		for tag in tags {
			match node.children.get(*tag) {
				None => break,
				Some(next) => {
					node = next;
					if let Some(value) = next.value.as_deref() {
						found = Some(value);
					}
				},
			}
		}
		found
	}

	/// Looks up the value for exactly this subtag path, without any fallback.
	pub fn get_exact(&self, tags: &[&str]) -> Option<&str> {
		let mut node = &self.root;
		for tag in tags {
			node = node.children.get(*tag)?;
		}
		node.value.as_deref()
	}

	/// Sets the value at exactly this subtag path; an empty path sets the default value.
	/// Paths containing an empty subtag are refused and leave the string untouched.
	pub fn set(&mut self, tags: &[&str], value: impl Into<String>) -> bool {
		if tags.iter().any(|x| x.is_empty()) {
			return false;
		}
		let mut node = &mut self.root;
		for tag in tags {
			node = node.children.entry(tag.to_string()).or_default();
		}
		node.value = Some(value.into());
		true
	}

	/// Removes the value at exactly this subtag path, leaving other values alone. Nodes left
	/// holding nothing are pruned.
	pub fn remove(&mut self, tags: &[&str]) -> Option<String> {
		remove_path(&mut self.root, tags)
	}

	/// same as [`LangString::get`], with a hyphen-joined tag such as `en-US`
	pub fn get_lang(&self, tag: &str) -> Option<&str> {
		self.get(&subtags(tag))
	}

	pub fn get_lang_exact(&self, tag: &str) -> Option<&str> {
		self.get_exact(&subtags(tag))
	}

	/// false for malformed tags such as `""` or `en--US`
	pub fn set_lang(&mut self, tag: &str, value: impl Into<String>) -> bool {
		self.set(&subtags(tag), value)
	}

	pub fn remove_lang(&mut self, tag: &str) -> Option<String> {
		self.remove(&subtags(tag))
	}

	/// Every tagged value keyed by its hyphen-joined tag. Built from the current tree on each
	/// call, the default value is never part of it.
	pub fn language_map(&self) -> BTreeMap<String, String> {
		let mut out = BTreeMap::new();
		self.root.flatten("", &mut out);
		out
	}
}

impl From<&str> for LangString {
	fn from(value: &str) -> Self {
		let mut out = LangString::new();
		out.set_default_value(Some(value.to_string()));
		out
	}
}

impl From<String> for LangString {
	fn from(value: String) -> Self {
		let mut out = LangString::new();
		out.set_default_value(Some(value));
		out
	}
}

#[cfg(test)]
mod test {
	use super::LangString;

	#[test]
	fn lookup_falls_back_to_deepest_tagged_ancestor() {
		let mut s = LangString::from("hello");
		s.set_lang("en", "hi");
		assert_eq!(s.get_lang("en-GB"), Some("hi"));
		assert_eq!(s.get_lang("it"), Some("hello"));
		assert_eq!(s.get(&[]), Some("hello"));
		s.set_lang("en-GB-oxendict", "good day");
		assert_eq!(s.get_lang("en-GB"), Some("hi"));
		assert_eq!(s.get_lang("en-GB-oxendict"), Some("good day"));
	}

	#[test]
	fn exact_lookup_never_falls_back() {
		let mut s = LangString::from("hello");
		s.set_lang("en", "hi");
		assert_eq!(s.get_lang_exact("en"), Some("hi"));
		assert_eq!(s.get_lang_exact("en-US"), None);
		assert_eq!(s.get_lang_exact("fr"), None);
	}

	#[test]
	fn set_and_remove_only_touch_their_node() {
		let mut s = LangString::new();
		s.set_lang("en", "color");
		s.set_lang("en-GB", "colour");
		assert_eq!(s.remove_lang("en"), Some("color".to_string()));
		assert_eq!(s.get_lang_exact("en-GB"), Some("colour"));
		assert_eq!(s.get_lang("en"), None);
		assert_eq!(s.remove_lang("en-GB"), Some("colour".to_string()));
		assert!(s.is_empty());
	}

	#[test]
	fn language_map_reflects_current_tree() {
		let mut s = LangString::from("untagged");
		s.set_lang("en-US", "howdy");
		s.set_lang("it", "ciao");
		let map = s.language_map();
		assert_eq!(map.len(), 2);
		assert_eq!(map.get("en-US").map(String::as_str), Some("howdy"));
		assert_eq!(map.get("it").map(String::as_str), Some("ciao"));
		s.remove_lang("it");
		assert!(!s.language_map().contains_key("it"));
	}

	#[test]
	fn empty_subtags_are_refused() {
		let mut s = LangString::from("untagged");
		assert!(!s.set_lang("", "overwritten"));
		assert!(!s.set_lang("en--US", "howdy"));
		assert!(!s.set(&["en", ""], "howdy"));
		assert_eq!(s.default_value(), Some("untagged"));
		assert!(s.language_map().is_empty());
		assert_eq!(s.remove_lang(""), None);
		assert_eq!(s.default_value(), Some("untagged"));
	}

	#[test]
	fn removing_prunes_emptied_ancestors() {
		let mut s = LangString::new();
		s.set_lang("it-IT", "ciao");
		assert_eq!(s.remove_lang("it-IT"), Some("ciao".to_string()));
		assert_eq!(s, LangString::new());

		let mut s = LangString::from("hello");
		s.set_lang("en", "hi");
		s.set_lang("en-GB-oxendict", "good day");
		s.remove_lang("en-GB-oxendict");
		let mut expected = LangString::from("hello");
		expected.set_lang("en", "hi");
		assert_eq!(s, expected);
	}
}
