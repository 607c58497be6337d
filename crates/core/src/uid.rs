use std::collections::HashSet;

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{visit_uids, Page};

/// Length of generated identifiers, matching Roam's block uids.
pub const UID_LENGTH: usize = 9;

/// Hands out fresh page and block identifiers.
///
/// Every identifier is unique among those already issued and never equals a
/// reserved one, so output uids cannot collide with uids found in the inputs.
pub struct UidAllocator {
    rng: StdRng,
    taken: HashSet<String>,
}

impl UidAllocator {
    /// Allocator seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Allocator producing the same sequence for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            taken: HashSet::new(),
        }
    }

    /// Mark an identifier as unavailable.
    pub fn reserve(&mut self, uid: &str) {
        if !uid.is_empty() {
            self.taken.insert(uid.to_string());
        }
    }

    /// Reserve the uid of every page and block in the given pages.
    pub fn reserve_pages<'a>(&mut self, pages: impl IntoIterator<Item = &'a Page>) {
        for page in pages {
            self.reserve(&page.uid);
            visit_uids(&page.children, &mut |uid| self.reserve(uid));
        }
    }

    /// Generate an identifier that has not been issued or reserved.
    pub fn fresh(&mut self) -> String {
        loop {
            let uid: String = (&mut self.rng)
                .sample_iter(&Alphanumeric)
                .take(UID_LENGTH)
                .map(char::from)
                .collect();

            if self.taken.insert(uid.clone()) {
                return uid;
            }
        }
    }
}

impl Default for UidAllocator {
    fn default() -> Self {
        Self::new()
    }
}
