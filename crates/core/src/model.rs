use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque pass-through fields carried by pages and blocks.
///
/// Backed by `serde_json::Map` with `preserve_order`, so fields keep the order
/// they had in the source document.
pub type Attributes = Map<String, Value>;

/// A top-level named container of blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    #[serde(default)]
    pub children: Vec<Block>,
    #[serde(default)]
    pub uid: String,
    #[serde(flatten)]
    pub extra: Attributes,
}

/// A unit of content within a page or another block.
///
/// The text lives under the `string` key at the JSON boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "string", default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
    #[serde(default)]
    pub uid: String,
    #[serde(flatten)]
    pub extra: Attributes,
}

impl Page {
    pub fn new(title: impl Into<String>, children: Vec<Block>) -> Self {
        Self {
            title: title.into(),
            children,
            uid: String::new(),
            extra: Attributes::new(),
        }
    }

    /// Number of blocks in the page, nested blocks included.
    pub fn block_count(&self) -> usize {
        count_blocks(&self.children)
    }
}

impl Block {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            children: Vec::new(),
            uid: String::new(),
            extra: Attributes::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.children = children;
        self
    }

    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = uid.into();
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Count every block in a forest, walking all levels.
pub fn count_blocks(blocks: &[Block]) -> usize {
    blocks
        .iter()
        .map(|block| 1 + count_blocks(&block.children))
        .sum()
}

/// Visit every non-empty uid in a forest, depth-first.
pub fn visit_uids<'a>(blocks: &'a [Block], visit: &mut impl FnMut(&'a str)) {
    for block in blocks {
        if !block.uid.is_empty() {
            visit(&block.uid);
        }
        visit_uids(&block.children, visit);
    }
}
