// Copyright (c) 2023 - 2025 Restate Software, Inc., Restate GmbH.
// All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use metaserver_storage_api::KeyKind;
use metaserver_storage_proto::storage::v1::S3ChunkInfoList;
use metaserver_types::identifiers::{ChunkId, ChunkIndex, FsId, InodeId};

use crate::keys::{define_storage_key, KeyPrefix, StorageKey};

define_storage_key!(
    /// Key of one list of S3 chunks appended to a chunk index of an inode.
    ///
    /// Lists of the same chunk index sort by `first_chunk_id`, so scanning a chunk index yields
    /// its chunks in the order they were written.
    KeyKind::S3ChunkInfo,
    S3ChunkInfoListKey(
        fs_id: FsId,
        inode_id: InodeId,
        chunk_index: ChunkIndex,
        first_chunk_id: ChunkId,
        last_chunk_id: ChunkId,
        size: u64,
    )
);

define_storage_key!(
    /// Selects the chunk lists of one chunk index.
    KeyKind::S3ChunkInfo,
    ChunkIndexS3ChunkInfoListPrefix(fs_id: FsId, inode_id: InodeId, chunk_index: ChunkIndex)
);

define_storage_key!(
    /// Selects the chunk lists of every chunk index of one inode.
    KeyKind::S3ChunkInfo,
    InodeS3ChunkInfoListPrefix(fs_id: FsId, inode_id: InodeId)
);

define_storage_key!(
    KeyKind::S3ChunkInfo,
    AllS3ChunkInfoListsPrefix()
);

static_assertions::const_assert!(
    <AllS3ChunkInfoListsPrefix as StorageKey>::SERIALIZED_LENGTH
        < <InodeS3ChunkInfoListPrefix as StorageKey>::SERIALIZED_LENGTH
);
static_assertions::const_assert!(
    <InodeS3ChunkInfoListPrefix as StorageKey>::SERIALIZED_LENGTH
        < <ChunkIndexS3ChunkInfoListPrefix as StorageKey>::SERIALIZED_LENGTH
);
static_assertions::const_assert!(
    <ChunkIndexS3ChunkInfoListPrefix as StorageKey>::SERIALIZED_LENGTH
        < <S3ChunkInfoListKey as StorageKey>::SERIALIZED_LENGTH
);

impl KeyPrefix for ChunkIndexS3ChunkInfoListPrefix {
    type Key = S3ChunkInfoListKey;
}

impl KeyPrefix for InodeS3ChunkInfoListPrefix {
    type Key = S3ChunkInfoListKey;
}

impl KeyPrefix for AllS3ChunkInfoListsPrefix {
    type Key = S3ChunkInfoListKey;
}

impl S3ChunkInfoListKey {
    /// Key under which `list` is stored. The chunk id range is taken from the first and last
    /// chunk of the list, `size` is the number of chunks.
    ///
    /// Returns `None` for an empty list, which has no chunk id range.
    pub fn from_list(
        fs_id: FsId,
        inode_id: InodeId,
        chunk_index: ChunkIndex,
        list: &S3ChunkInfoList,
    ) -> Option<Self> {
        let first = list.s3_chunks.first()?;
        let last = list.s3_chunks.last()?;

        Some(Self::new(
            fs_id,
            inode_id,
            chunk_index,
            first.chunk_id,
            last.chunk_id,
            list.s3_chunks.len() as u64,
        ))
    }

    pub const fn chunk_index_prefix(&self) -> ChunkIndexS3ChunkInfoListPrefix {
        ChunkIndexS3ChunkInfoListPrefix::new(self.fs_id, self.inode_id, self.chunk_index)
    }

    pub const fn inode_prefix(&self) -> InodeS3ChunkInfoListPrefix {
        InodeS3ChunkInfoListPrefix::new(self.fs_id, self.inode_id)
    }
}

impl ChunkIndexS3ChunkInfoListPrefix {
    pub const fn inode_prefix(&self) -> InodeS3ChunkInfoListPrefix {
        InodeS3ChunkInfoListPrefix::new(self.fs_id, self.inode_id)
    }
}
