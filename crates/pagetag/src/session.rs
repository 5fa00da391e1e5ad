//! Requester session bookkeeping.
//!
//! A job needs two files per requester: the document and its companion
//! table. They arrive separately through whatever transport feeds the
//! system, so something must remember which half is still missing. That
//! state lives in an explicit keyed store with an explicit lifecycle: a
//! record is created on the first file, consumed when the pair completes,
//! and destroyed on abort. The transport layer itself stays external.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;
use std::path::PathBuf;

/// One half of a pending pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The paginated document to extract codes from.
    Document(PathBuf),
    /// The table the codes will be merged into.
    Table(PathBuf),
}

/// A completed document/table pair, ready for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyPair {
    pub document: PathBuf,
    pub table: PathBuf,
}

/// State of a requester's pairing after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairState {
    /// The document arrived; the table is still missing.
    AwaitingTable,
    /// The table arrived; the document is still missing.
    AwaitingDocument,
    /// Both halves arrived. The requester's record has been removed; the
    /// caller owns the pair now.
    Ready(ReadyPair),
}

/// A pending record always holds exactly one half; completion removes it.
#[derive(Debug)]
enum PendingPair {
    DocumentOnly(PathBuf),
    TableOnly(PathBuf),
}

/// Keyed store mapping a requester identity to its pending pair.
#[derive(Debug, Default)]
pub struct PairingStore<K> {
    pending: HashMap<K, PendingPair>,
}

impl<K: Eq + Hash> PairingStore<K> {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }

    /// Record a file for a requester.
    ///
    /// The first file creates the requester's record. Re-submitting the
    /// same kind of file replaces the earlier path. When the second half
    /// arrives the record is removed and both paths are handed back as
    /// [`PairState::Ready`].
    pub fn submit(&mut self, key: K, submission: Submission) -> PairState {
        match self.pending.entry(key) {
            Entry::Vacant(vacant) => match submission {
                Submission::Document(path) => {
                    vacant.insert(PendingPair::DocumentOnly(path));
                    PairState::AwaitingTable
                }
                Submission::Table(path) => {
                    vacant.insert(PendingPair::TableOnly(path));
                    PairState::AwaitingDocument
                }
            },
            Entry::Occupied(occupied) => {
                let (key, pending) = occupied.remove_entry();
                match (pending, submission) {
                    (PendingPair::DocumentOnly(_), Submission::Document(path)) => {
                        self.pending.insert(key, PendingPair::DocumentOnly(path));
                        PairState::AwaitingTable
                    }
                    (PendingPair::TableOnly(_), Submission::Table(path)) => {
                        self.pending.insert(key, PendingPair::TableOnly(path));
                        PairState::AwaitingDocument
                    }
                    (PendingPair::DocumentOnly(document), Submission::Table(table)) => {
                        PairState::Ready(ReadyPair { document, table })
                    }
                    (PendingPair::TableOnly(table), Submission::Document(document)) => {
                        PairState::Ready(ReadyPair { document, table })
                    }
                }
            }
        }
    }

    /// Drop a requester's pending record, if any. Returns whether one
    /// existed. Used on processing errors so that a failed pair does not
    /// poison the requester's next attempt.
    pub fn abort(&mut self, key: &K) -> bool {
        self.pending.remove(key).is_some()
    }

    /// Whether a requester has a pending (incomplete) record.
    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains_key(key)
    }

    /// Number of requesters with pending records.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
