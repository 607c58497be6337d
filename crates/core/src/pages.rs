use std::collections::HashMap;

use crate::model::{Block, Page};
use crate::normalize::canonicalize_title;
use crate::tree::{merge_forests, DuplicatePolicy};
use crate::uid::UidAllocator;

/// What happened to a page when it was fed to a [`PageMerger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    /// First occurrence of its canonical title.
    Added,
    /// Folded into a page seen earlier.
    Merged,
}

/// Drop front matter from a page's top-level blocks.
///
/// Everything from the first top-level block whose text starts with `---`
/// (leading whitespace ignored) to the end of the list is discarded. Nested
/// blocks under earlier siblings are not inspected.
pub fn strip_front_matter(blocks: &[Block]) -> &[Block] {
    let end = blocks
        .iter()
        .position(|block| block.text.trim_start().starts_with("---"))
        .unwrap_or(blocks.len());
    &blocks[..end]
}

/// Incrementally merges pages by canonical title.
///
/// Pages come out in the order their canonical titles were first seen.
pub struct PageMerger<'u> {
    policy: DuplicatePolicy,
    uids: &'u mut UidAllocator,
    pages: Vec<Page>,
    index: HashMap<String, usize>,
}

impl<'u> PageMerger<'u> {
    pub fn new(policy: DuplicatePolicy, uids: &'u mut UidAllocator) -> Self {
        Self {
            policy,
            uids,
            pages: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Merge one input page, returning its canonical title and whether it was
    /// new or folded into an existing page.
    ///
    /// Front matter is stripped from this occurrence alone, before merging.
    pub fn add(&mut self, page: &Page) -> (String, PageStatus) {
        let title = canonicalize_title(&page.title);
        let kept = strip_front_matter(&page.children);

        if let Some(&position) = self.index.get(&title) {
            let existing = &mut self.pages[position];
            let previous = std::mem::take(&mut existing.children);
            existing.children = merge_forests(&[&previous, kept], self.policy, self.uids);
            return (title, PageStatus::Merged);
        }

        let children = merge_forests(&[kept], self.policy, self.uids);
        self.pages.push(Page {
            title: title.clone(),
            children,
            uid: self.uids.fresh(),
            extra: page.extra.clone(),
        });
        self.index.insert(title.clone(), self.pages.len() - 1);

        (title, PageStatus::Added)
    }

    /// Number of distinct pages merged so far.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn finish(self) -> Vec<Page> {
        self.pages
    }
}

/// Merge several page lists into one list keyed by canonical title.
///
/// Identifiers already present anywhere in the inputs are reserved before
/// merging so none of the generated ones can collide with them.
pub fn merge_pages(
    page_lists: &[Vec<Page>],
    policy: DuplicatePolicy,
    uids: &mut UidAllocator,
) -> Vec<Page> {
    uids.reserve_pages(page_lists.iter().flatten());

    let mut merger = PageMerger::new(policy, uids);
    for page in page_lists.iter().flatten() {
        merger.add(page);
    }
    merger.finish()
}
