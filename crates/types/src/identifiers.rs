// Copyright (c) 2023 - 2025 Restate Software, Inc., Restate GmbH.
// All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Identifiers of the filesystem entities whose metadata the metaserver stores.
//!
//! Their widths are part of the on-disk key layout. Changing the width of any of them changes
//! every key that embeds it.

/// Identifies a filesystem served by the metaserver.
pub type FsId = u32;

/// Identifies an inode within a filesystem.
pub type InodeId = u64;

/// Index of a fixed-size chunk within a file.
pub type ChunkIndex = u64;

/// Identifier of an appended S3 chunk.
pub type ChunkId = u64;

/// Byte offset of a volume extent slice within a file.
pub type ExtentOffset = u64;
