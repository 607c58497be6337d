//! Core library for graphmerge
//!
//! This crate implements the **Functional Core** of the graphmerge application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! graphmerge uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`graphmerge_core`** (this crate): Pure transformation functions with zero I/O
//! - **`graphmerge`**: File loading, archive handling, output and reporting (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Given a seeded [`uid::UidAllocator`], merges are reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`normalize`]: Canonical page titles and cleaned block text
//! - [`signature`]: Content hash used as the block dedup key
//! - [`uid`]: Fresh identifiers that never collide with input identifiers
//! - [`tree`]: Recursive merge of sibling block lists
//! - [`pages`]: Merge of pages by canonical title, front-matter truncation
//! - [`export`]: Decoding and encoding of Roam/Logseq export documents
//! - [`model`]: Page and block types shared by everything above
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use graphmerge_core::{merge_pages, Block, DuplicatePolicy, Page, UidAllocator};
//!
//! let first = vec![Page::new("Sep 24, 2023", vec![Block::new("Hello   world")])];
//! let second = vec![Page::new("September 24th, 2023", vec![Block::new("Hello world")])];
//!
//! let mut uids = UidAllocator::seeded(1);
//! let pages = merge_pages(&[first, second], DuplicatePolicy::KeepFirst, &mut uids);
//!
//! assert_eq!(pages.len(), 1);
//! assert_eq!(pages[0].title, "September 24th, 2023");
//! assert_eq!(pages[0].children.len(), 1);
//! ```

pub mod error;
pub mod export;
pub mod model;
pub mod normalize;
pub mod pages;
pub mod signature;
pub mod tree;
pub mod uid;

pub use error::Error;
pub use export::{pages_from_document, pages_to_document, ExportShape};
pub use model::{count_blocks, Attributes, Block, Page};
pub use normalize::{canonicalize_title, clean_text};
pub use pages::{merge_pages, strip_front_matter, PageMerger, PageStatus};
pub use signature::{signature, Signature};
pub use tree::{merge_forests, DuplicatePolicy};
pub use uid::UidAllocator;
