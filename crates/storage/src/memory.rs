// Copyright (c) 2023 - 2025 Restate Software, Inc., Restate GmbH.
// All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::BTreeMap;
use std::ops::Bound;

use bytes::Bytes;
use metaserver_storage_api::KvStore;

use crate::scan::exclusive_upper_bound;

/// Process-local ordered store. Keys are compared byte-wise, like in an LSM engine.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<Bytes, Bytes>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &[u8]) -> crate::Result<Option<Bytes>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: Bytes, value: Bytes) -> crate::Result<()> {
        self.entries.insert(key, value);
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> crate::Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn scan_prefix(&self, prefix: &[u8]) -> crate::Result<Vec<(Bytes, Bytes)>> {
        let start = Bound::Included(Bytes::copy_from_slice(prefix));
        let end = match exclusive_upper_bound(prefix) {
            Some(upper) => Bound::Excluded(upper),
            None => Bound::Unbounded,
        };

        Ok(self
            .entries
            .range((start, end))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }
}
