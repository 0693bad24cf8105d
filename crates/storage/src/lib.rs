// Copyright (c) 2023 - 2025 Restate Software, Inc., Restate GmbH.
// All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Keyspace of the metaserver's ordered key-value store.
//!
//! Every key starts with its [`KeyKind`] byte, followed by fixed-width big-endian fields:
//!
//! | Key                                 | Layout                                                                    |
//! |-------------------------------------|---------------------------------------------------------------------------|
//! | [`InodeKey`]                        | `Inode:fs_id:inode_id`                                                    |
//! | [`AllInodesPrefix`]                 | `Inode:`                                                                  |
//! | [`S3ChunkInfoListKey`]              | `S3ChunkInfo:fs_id:inode_id:chunk_index:first_chunk_id:last_chunk_id:size` |
//! | [`ChunkIndexS3ChunkInfoListPrefix`] | `S3ChunkInfo:fs_id:inode_id:chunk_index:`                                 |
//! | [`InodeS3ChunkInfoListPrefix`]      | `S3ChunkInfo:fs_id:inode_id:`                                             |
//! | [`AllS3ChunkInfoListsPrefix`]       | `S3ChunkInfo:`                                                            |
//! | [`VolumeExtentSliceKey`]            | `VolumeExtent:fs_id:inode_id:offset`                                      |
//! | [`InodeVolumeExtentPrefix`]         | `VolumeExtent:fs_id:inode_id:`                                            |
//! | [`AllVolumeExtentsPrefix`]          | `VolumeExtent:`                                                           |
//!
//! `fs_id` is 4 bytes wide, every other field 8 bytes.

mod any_key;
pub mod converter;
pub mod inode_table;
pub mod keys;
pub mod memory;
pub mod s3_chunk_info_table;
pub mod scan;
pub mod volume_extent_table;

pub use any_key::AnyStorageKey;
pub use converter::{Converter, Decodable};
pub use inode_table::{AllInodesPrefix, InodeKey};
pub use keys::{KeyPrefix, StorageKey};
pub use memory::MemoryStore;
pub use metaserver_storage_api::{KeyDecodeError, KeyKind, KvStore, StorageError};
pub use s3_chunk_info_table::{
    AllS3ChunkInfoListsPrefix, ChunkIndexS3ChunkInfoListPrefix, InodeS3ChunkInfoListPrefix,
    S3ChunkInfoListKey,
};
pub use volume_extent_table::{AllVolumeExtentsPrefix, InodeVolumeExtentPrefix, VolumeExtentSliceKey};

pub(crate) type Result<T> = std::result::Result<T, StorageError>;
