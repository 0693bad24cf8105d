// Copyright (c) 2023 - 2025 Restate Software, Inc., Restate GmbH.
// All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Largest message protobuf is able to encode.
const PROTOBUF_MAX_MESSAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(i32::MAX as usize) {
    Some(size) => size,
    None => unreachable!(),
};

/// # Storage options
///
/// Options of the metaserver storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, derive_builder::Builder)]
#[serde(rename_all = "kebab-case", default)]
#[builder(default)]
pub struct StorageOptions {
    /// # Maximum value size
    ///
    /// Upper bound in bytes for an encoded value, including its codec byte. Values exceeding it
    /// are rejected when serialized.
    ///
    /// Default: 2147483647 (the protobuf message size limit)
    max_value_size: NonZeroUsize,
}

impl StorageOptions {
    pub fn max_value_size(&self) -> usize {
        self.max_value_size.get()
    }
}

impl Default for StorageOptions {
    fn default() -> Self {
        Self {
            max_value_size: PROTOBUF_MAX_MESSAGE_SIZE,
        }
    }
}
