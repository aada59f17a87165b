//! CRL set implementation
//!
//! A CRL set is a compact snapshot of revoked certificate serials, keyed by
//! the SHA-256 hash of each issuer's SubjectPublicKeyInfo. It is delivered
//! either in full or as a delta against a previous sequence.
//!
//! # Features
//! - Parsing and byte-exact serialization of full snapshots
//! - Decoding, applying and encoding deltas
//! - Certificate and blocked-SPKI lookup
//! - An atomically swapped store with on-disk persistence

mod cursor;
pub mod delta;
mod errors;
pub mod header;
mod lookup;
mod parser;
mod serializer;
pub mod store;
mod types;

// Re-export public types
pub use cursor::ByteCursor;
pub use delta::{Delta, DeltaBuilder, EntryOp, SerialOp};
pub use errors::{CrlSetError, CrlSetResult};
pub use lookup::issuer_key_hash_from_spki;
pub use parser::parse;
pub use serializer::serialize;
pub use store::SnapshotStore;
pub use types::{CertStatus, CrlEntry, IssuerKeyHash, RevocationSet, Serial};
