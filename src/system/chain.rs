//! Link bookkeeping for the planets of a solar system.
//!
//! ## Design
//!
//! A `Chain` holds only the list metadata (head, tail, length). The nodes
//! themselves live in a slab owned by the caller, and every structural
//! operation takes that slab explicitly.
//!
//! ## Chain Structure
//!
//! ```text
//! head <-> planet2 <-> planet3 <-> tail
//! ```
//!
//! - New planets are appended at the tail
//! - Any node can be unlinked in O(1) given its slab key
//! - Adjacent nodes are exchanged by rewiring keys, never by moving planets

use slab::Slab;

use crate::error::{Error, Result};
use crate::system::PlanetNode;

/// Head/tail/length metadata for a doubly-linked chain of slab nodes.
#[derive(Debug, Clone, Default)]
pub struct Chain {
    /// First node (slab key)
    pub head: Option<usize>,

    /// Last node (slab key)
    pub tail: Option<usize>,

    /// Number of linked nodes
    pub len: usize,
}

#[inline]
fn node_mut(slab: &mut Slab<PlanetNode>, key: usize) -> &mut PlanetNode {
    slab.get_mut(key).expect("Invalid slab key")
}

impl Chain {
    /// Create a new empty chain
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Link a node at the tail of the chain
    ///
    /// # Panics
    ///
    /// Panics if the key doesn't exist in the slab
    pub fn push_back(&mut self, key: usize, slab: &mut Slab<PlanetNode>) {
        let node = node_mut(slab, key);
        node.prev = self.tail;
        node.next = None;

        if let Some(tail_key) = self.tail {
            node_mut(slab, tail_key).next = Some(key);
        } else {
            // Empty chain - this is also the head
            self.head = Some(key);
        }

        self.tail = Some(key);
        self.len += 1;
    }

    /// Unlink a node, splicing its neighbours together
    ///
    /// The node stays in the slab with both links cleared.
    ///
    /// # Panics
    ///
    /// Panics if the key doesn't exist in the slab
    pub fn unlink(&mut self, key: usize, slab: &mut Slab<PlanetNode>) {
        let node = slab.get(key).expect("Invalid slab key");
        let prev_key = node.prev;
        let next_key = node.next;

        if let Some(prev) = prev_key {
            node_mut(slab, prev).next = next_key;
        } else {
            // This was the head
            self.head = next_key;
        }

        if let Some(next) = next_key {
            node_mut(slab, next).prev = prev_key;
        } else {
            // This was the tail
            self.tail = prev_key;
        }

        let node = node_mut(slab, key);
        node.prev = None;
        node.next = None;

        self.len -= 1;
    }

    /// Exchange a node with its successor by rewiring links
    ///
    /// Afterwards the successor occupies `key`'s old position and `key`
    /// sits one step closer to the tail. Head and tail follow the move.
    ///
    /// # Returns
    ///
    /// `false` (and no change) if `key` is the tail.
    ///
    /// # Panics
    ///
    /// Panics if the key doesn't exist in the slab
    pub fn swap_with_next(&mut self, key: usize, slab: &mut Slab<PlanetNode>) -> bool {
        let node = slab.get(key).expect("Invalid slab key");
        let prev_key = node.prev;
        let Some(next_key) = node.next else {
            return false;
        };
        let after_pair = node_mut(slab, next_key).next;

        // Outer neighbours first
        if let Some(after) = after_pair {
            node_mut(slab, after).prev = Some(key);
        } else {
            self.tail = Some(key);
        }

        if let Some(prev) = prev_key {
            node_mut(slab, prev).next = Some(next_key);
        } else {
            self.head = Some(next_key);
        }

        // Then the pair itself
        let next = node_mut(slab, next_key);
        next.prev = prev_key;
        next.next = Some(key);

        let node = node_mut(slab, key);
        node.prev = Some(next_key);
        node.next = after_pair;

        true
    }

    /// Verify the structural invariants of the chain
    ///
    /// - head has no predecessor, tail has no successor
    /// - every `next` link is mirrored by a `prev` link
    /// - walking from head reaches tail in exactly `len` steps
    pub fn validate(&self, slab: &Slab<PlanetNode>) -> Result<()> {
        if let Some(head) = self.head {
            let node = slab.get(head).ok_or(Error::BrokenLink {
                key: head,
                detail: "dangling head key",
            })?;
            if node.prev.is_some() {
                return Err(Error::HeadHasPredecessor(head));
            }
        }

        if let Some(tail) = self.tail {
            let node = slab.get(tail).ok_or(Error::BrokenLink {
                key: tail,
                detail: "dangling tail key",
            })?;
            if node.next.is_some() {
                return Err(Error::TailHasSuccessor(tail));
            }
        }

        let mut walked = 0;
        let mut prev = None;
        let mut cursor = self.head;

        while let Some(key) = cursor {
            // Cycle guard
            if walked == self.len {
                return Err(Error::LengthMismatch {
                    expected: self.len,
                    walked: walked + 1,
                });
            }

            let node = slab.get(key).ok_or(Error::BrokenLink {
                key,
                detail: "dangling next key",
            })?;
            if node.prev != prev {
                return Err(Error::BrokenLink {
                    key,
                    detail: "prev does not point back at predecessor",
                });
            }

            walked += 1;
            prev = Some(key);
            cursor = node.next;
        }

        if walked != self.len {
            return Err(Error::LengthMismatch {
                expected: self.len,
                walked,
            });
        }

        if prev != self.tail {
            return Err(Error::BrokenLink {
                key: self.tail.or(prev).unwrap_or_default(),
                detail: "tail unreachable from head",
            });
        }

        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
