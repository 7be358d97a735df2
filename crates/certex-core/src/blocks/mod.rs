//! OCR block-graph model, indexing, and line linearization.
//!
//! The OCR provider emits a flat list of blocks linked by id references:
//! `LINE` blocks carry recognized lines of text, `WORD` blocks carry the
//! words composing them, and `KEY_VALUE_SET` blocks describe detected form
//! fields (a `KEY`-role block pointing at a value block, both pointing at
//! their `WORD` children). This module resolves those references; it never
//! fails on missing optional structure.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Block type tag emitted by the OCR provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockType {
    /// A recognized line of text.
    #[serde(rename = "LINE")]
    Line,
    /// A single recognized word.
    #[serde(rename = "WORD")]
    Word,
    /// One side of a detected form key/value pair.
    #[serde(rename = "KEY_VALUE_SET")]
    KeyValueSet,
    /// Any block type this engine does not consume (pages, tables, cells).
    #[default]
    #[serde(other, rename = "OTHER")]
    Other,
}

/// Entity role of a `KEY_VALUE_SET` block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityType {
    #[serde(rename = "KEY")]
    Key,
    #[serde(rename = "VALUE")]
    Value,
    #[default]
    #[serde(other, rename = "OTHER")]
    Other,
}

/// Relationship type linking a block to others by id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationshipType {
    #[serde(rename = "CHILD")]
    Child,
    #[serde(rename = "VALUE")]
    Value,
    #[default]
    #[serde(other, rename = "OTHER")]
    Other,
}

/// A typed list of referenced block ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Relationship {
    #[serde(rename = "Type", default)]
    pub kind: RelationshipType,
    #[serde(default)]
    pub ids: Vec<String>,
}

/// One block of the OCR block graph.
///
/// Every field except `id` is optional on the wire; absent lists are
/// treated as empty so a sparse graph deserializes without error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Block {
    #[serde(default)]
    pub block_type: BlockType,

    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entity_types: Vec<EntityType>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,
}

impl Block {
    fn ids_of(&self, kind: RelationshipType) -> impl Iterator<Item = &String> {
        self.relationships
            .iter()
            .filter(move |r| r.kind == kind)
            .flat_map(|r| r.ids.iter())
    }
}

/// Lookup maps over a block list.
pub struct BlockIndex<'a> {
    by_id: HashMap<&'a str, &'a Block>,
    keys: Vec<&'a Block>,
    values: HashMap<&'a str, &'a Block>,
}

impl<'a> BlockIndex<'a> {
    /// Build id, key-role, and value-role maps from the raw block list.
    pub fn build(blocks: &'a [Block]) -> Self {
        let mut by_id = HashMap::with_capacity(blocks.len());
        let mut keys = Vec::new();
        let mut values = HashMap::new();

        for block in blocks {
            by_id.insert(block.id.as_str(), block);

            if block.block_type == BlockType::KeyValueSet {
                if block.entity_types.contains(&EntityType::Key) {
                    keys.push(block);
                } else {
                    values.insert(block.id.as_str(), block);
                }
            }
        }

        Self { by_id, keys, values }
    }

    /// Look up a block by id.
    pub fn get(&self, id: &str) -> Option<&'a Block> {
        self.by_id.get(id).copied()
    }

    /// Concatenate the text of all `WORD`-type blocks among the given ids,
    /// space-joined and trimmed. Dangling ids are skipped.
    pub fn text_from_ids<S: AsRef<str>>(&self, ids: &[S]) -> String {
        let words: Vec<&str> = ids
            .iter()
            .filter_map(|id| self.get(id.as_ref()))
            .filter(|b| b.block_type == BlockType::Word)
            .filter_map(|b| b.text.as_deref())
            .collect();

        words.join(" ").trim().to_string()
    }

    /// Resolve detected form fields into `(key_text, value_text)` pairs by
    /// following KEY -> VALUE -> CHILD relationships. Pairs with an empty
    /// key or value are dropped.
    pub fn key_value_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        for key_block in &self.keys {
            let key_ids: Vec<&String> = key_block.ids_of(RelationshipType::Child).collect();
            let key_text = self.text_from_ids(&key_ids);
            if key_text.is_empty() {
                continue;
            }

            for value_id in key_block.ids_of(RelationshipType::Value) {
                let Some(value_block) = self.values.get(value_id.as_str()) else {
                    continue;
                };
                let value_ids: Vec<&String> =
                    value_block.ids_of(RelationshipType::Child).collect();
                let value_text = self.text_from_ids(&value_ids);
                if !value_text.is_empty() {
                    pairs.push((key_text.clone(), value_text));
                }
            }
        }

        pairs
    }
}

/// Flatten the block list into the ordered line sequence all heuristics
/// scan: `LINE` blocks in their native (top-to-bottom) order.
pub fn linearize(blocks: &[Block]) -> Vec<String> {
    blocks
        .iter()
        .filter(|b| b.block_type == BlockType::Line)
        .map(|b| b.text.as_deref().unwrap_or("").trim().to_string())
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BlockDocument {
    Analysis {
        #[serde(rename = "Blocks", default)]
        blocks: Vec<Block>,
    },
    List(Vec<Block>),
}

/// Deserialize a block list from provider JSON: either the full analysis
/// response (object with a `Blocks` array) or a bare block array.
pub fn blocks_from_json(input: &str) -> Result<Vec<Block>> {
    let document: BlockDocument = serde_json::from_str(input)?;
    Ok(match document {
        BlockDocument::Analysis { blocks } => blocks,
        BlockDocument::List(blocks) => blocks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn word(id: &str, text: &str) -> Block {
        Block {
            block_type: BlockType::Word,
            id: id.to_string(),
            text: Some(text.to_string()),
            ..Default::default()
        }
    }

    fn line(id: &str, text: &str) -> Block {
        Block {
            block_type: BlockType::Line,
            id: id.to_string(),
            text: Some(text.to_string()),
            ..Default::default()
        }
    }

    fn relationship(kind: RelationshipType, ids: &[&str]) -> Relationship {
        Relationship {
            kind,
            ids: ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_linearize_keeps_native_order() {
        let blocks = vec![
            line("1", "Proposed name"),
            word("2", "ignored"),
            line("3", "  GREENFIELD HOLDINGS SDN. BHD.  "),
        ];

        assert_eq!(
            linearize(&blocks),
            vec![
                "Proposed name".to_string(),
                "GREENFIELD HOLDINGS SDN. BHD.".to_string()
            ]
        );
    }

    #[test]
    fn test_text_from_ids_skips_non_words_and_dangling_ids() {
        let blocks = vec![word("w1", "Proposed"), word("w2", "name"), line("l1", "noise")];
        let index = BlockIndex::build(&blocks);

        let ids = ["w1".to_string(), "l1".to_string(), "missing".to_string(), "w2".to_string()];
        assert_eq!(index.text_from_ids(&ids), "Proposed name");
    }

    #[test]
    fn test_key_value_pairs_resolution() {
        let key = Block {
            block_type: BlockType::KeyValueSet,
            id: "k1".to_string(),
            entity_types: vec![EntityType::Key],
            relationships: vec![
                relationship(RelationshipType::Child, &["w1", "w2"]),
                relationship(RelationshipType::Value, &["v1"]),
            ],
            ..Default::default()
        };
        let value = Block {
            block_type: BlockType::KeyValueSet,
            id: "v1".to_string(),
            entity_types: vec![EntityType::Value],
            relationships: vec![relationship(RelationshipType::Child, &["w3"])],
            ..Default::default()
        };
        let blocks = vec![
            key,
            value,
            word("w1", "Incorporation"),
            word("w2", "Date"),
            word("w3", "17/01/2025"),
        ];

        let index = BlockIndex::build(&blocks);
        assert_eq!(
            index.key_value_pairs(),
            vec![("Incorporation Date".to_string(), "17/01/2025".to_string())]
        );
    }

    #[test]
    fn test_missing_relationships_are_empty_not_errors() {
        let json = r#"{"Blocks": [
            {"BlockType": "KEY_VALUE_SET", "Id": "k1", "EntityTypes": ["KEY"]},
            {"BlockType": "PAGE", "Id": "p1"},
            {"BlockType": "LINE", "Id": "l1", "Text": "SELANGOR"}
        ]}"#;

        let blocks = blocks_from_json(json).unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1].block_type, BlockType::Other);

        let index = BlockIndex::build(&blocks);
        assert!(index.key_value_pairs().is_empty());
    }

    #[test]
    fn test_bare_array_input() {
        let json = r#"[{"BlockType": "LINE", "Id": "l1", "Text": "NIL"}]"#;
        let blocks = blocks_from_json(json).unwrap();
        assert_eq!(linearize(&blocks), vec!["NIL".to_string()]);
    }

    #[test]
    fn test_rejects_non_block_input() {
        assert!(blocks_from_json("\"just a string\"").is_err());
    }
}
