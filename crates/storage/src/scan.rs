// Copyright (c) 2023 - 2025 Restate Software, Inc., Restate GmbH.
// All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Prefix scans over a [`KvStore`] that yield typed keys.

use bytes::Bytes;
use metaserver_storage_api::{KvStore, StorageError};
use tracing::trace;

use crate::converter::Decodable;
use crate::keys::{KeyPrefix, StorageKey};

/// Smallest byte string that sorts after every byte string starting with `prefix`.
///
/// Returns `None` if no such bound exists, which is the case for an empty prefix or one made of
/// `0xff` bytes only.
pub fn exclusive_upper_bound(prefix: &[u8]) -> Option<Bytes> {
    let mut upper = prefix.to_vec();
    while let Some(last) = upper.pop() {
        if last < u8::MAX {
            upper.push(last + 1);
            return Some(Bytes::from(upper));
        }
    }
    None
}

/// Returns every entry selected by `prefix` in ascending key order, with its key decoded.
///
/// Fails on the first key that is not a valid [`KeyPrefix::Key`], or if the store returns a key
/// outside of the prefix.
pub fn scan_keys<P, S>(store: &S, prefix: &P) -> crate::Result<Vec<(P::Key, Bytes)>>
where
    P: KeyPrefix,
    S: KvStore + ?Sized,
{
    let prefix_bytes = prefix.serialize();
    let entries = store.scan_prefix(&prefix_bytes)?;
    trace!(?prefix, entries = entries.len(), "Scanned prefix");

    entries
        .into_iter()
        .map(|(key, value)| -> crate::Result<_> {
            if !key.starts_with(&prefix_bytes) {
                return Err(StorageError::DataIntegrityError(format!(
                    "store returned key {:02x?} outside of scanned prefix {prefix:?}",
                    &key[..]
                )));
            }
            Ok((<P::Key as StorageKey>::parse(&key)?, value))
        })
        .collect()
}

/// Like [`scan_keys`], but also decodes every value as `V`.
pub fn scan_entries<P, V, S>(store: &S, prefix: &P) -> crate::Result<Vec<(P::Key, V)>>
where
    P: KeyPrefix,
    V: Decodable,
    S: KvStore + ?Sized,
{
    scan_keys(store, prefix)?
        .into_iter()
        .map(|(key, value)| -> crate::Result<_> { Ok((key, V::decode_from(&value)?)) })
        .collect()
}
