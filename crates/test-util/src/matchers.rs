// Copyright (c) 2023 - 2025 Restate Software, Inc., Restate GmbH.
// All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Matchers for key bytes, next to the googletest ones.

pub use googletest::matchers::*;

/// Returns `true` if `key` lies in the range selected by a prefix scan over `prefix`.
pub fn has_byte_prefix(key: impl AsRef<[u8]>, prefix: impl AsRef<[u8]>) -> bool {
    key.as_ref().starts_with(prefix.as_ref())
}
