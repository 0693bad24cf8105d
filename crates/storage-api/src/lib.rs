// Copyright (c) 2023 - 2025 Restate Software, Inc., Restate GmbH.
// All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use bytes::Bytes;
use metaserver_types::storage::{StorageDecodeError, StorageEncodeError};

mod key_kind;

pub use key_kind::KeyKind;

/// Reasons why a byte string is not a valid key of the expected type.
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum KeyDecodeError {
    #[error("key is truncated: expected {expected} bytes but got {actual}")]
    Truncated { expected: usize, actual: usize },
    #[error("unknown key kind: {0:#04x}")]
    UnknownKeyKind(u8),
    #[error("supported key kind '{expected}' but found key kind '{found}'")]
    KeyKindMismatch { expected: KeyKind, found: KeyKind },
    #[error("key has trailing bytes: expected {expected} bytes but got {actual}")]
    TrailingBytes { expected: usize, actual: usize },
    #[error("no key of kind '{kind}' is {len} bytes long")]
    UnknownLayout { kind: KeyKind, len: usize },
}

/// Storage error
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("generic storage error: {0}")]
    Generic(#[from] anyhow::Error),
    #[error("failed to convert values to/from protobuf: {0}")]
    Conversion(anyhow::Error),
    #[error("malformed key: {0}")]
    Key(#[from] KeyDecodeError),
    #[error("value of {size} bytes exceeds the limit of {limit} bytes")]
    ValueTooLarge { size: usize, limit: usize },
    #[error("data integrity error: {0}")]
    DataIntegrityError(String),
}

impl From<StorageEncodeError> for StorageError {
    fn from(value: StorageEncodeError) -> Self {
        StorageError::Conversion(value.into())
    }
}

impl From<StorageDecodeError> for StorageError {
    fn from(value: StorageDecodeError) -> Self {
        StorageError::Conversion(value.into())
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// The ordered key-value engine the metaserver keyspace is laid out in. Keys are compared
/// byte-wise lexicographically.
pub trait KvStore {
    fn get(&self, key: &[u8]) -> Result<Option<Bytes>>;

    fn put(&mut self, key: Bytes, value: Bytes) -> Result<()>;

    fn delete(&mut self, key: &[u8]) -> Result<()>;

    /// Returns all entries whose key starts with `prefix`, in ascending key order.
    fn scan_prefix(&self, prefix: &[u8]) -> Result<Vec<(Bytes, Bytes)>>;
}
