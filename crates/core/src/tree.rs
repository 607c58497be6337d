use std::collections::HashMap;

use crate::model::Block;
use crate::normalize::clean_text;
use crate::signature::{signature_of_clean, Signature};
use crate::uid::UidAllocator;

/// Which duplicate's text wins when two blocks share a signature.
///
/// Opaque attributes always come from the first occurrence; only the text
/// follows this policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    #[default]
    KeepFirst,
    KeepLast,
}

impl DuplicatePolicy {
    pub fn from_keep_last(keep_last: bool) -> Self {
        if keep_last {
            Self::KeepLast
        } else {
            Self::KeepFirst
        }
    }
}

/// Merge sibling lists into one, folding blocks with matching signatures.
///
/// Forests are consumed in order and blocks in order within each forest. The
/// output keeps the order in which each distinct signature first appears.
/// Every output block gets a fresh uid and cleaned text; children of unified
/// blocks are merged recursively with the same rules.
///
/// The signature index is local to this call, so dedup only ever happens
/// between siblings.
pub fn merge_forests(
    forests: &[&[Block]],
    policy: DuplicatePolicy,
    uids: &mut UidAllocator,
) -> Vec<Block> {
    let mut merged: Vec<Block> = Vec::new();
    let mut index: HashMap<Signature, usize> = HashMap::new();

    for forest in forests {
        for block in forest.iter() {
            let text = clean_text(&block.text);
            let sig = signature_of_clean(&text);

            match index.get(&sig) {
                Some(&position) => {
                    let existing = &mut merged[position];
                    let kept = std::mem::take(&mut existing.children);
                    existing.children = merge_forests(&[&kept, &block.children], policy, uids);

                    if policy == DuplicatePolicy::KeepLast {
                        existing.text = text;
                    }
                }
                None => {
                    let children = merge_forests(&[&block.children], policy, uids);
                    merged.push(Block {
                        text,
                        children,
                        uid: uids.fresh(),
                        extra: block.extra.clone(),
                    });
                    index.insert(sig, merged.len() - 1);
                }
            }
        }
    }

    merged
}
