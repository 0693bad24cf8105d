// Copyright (c) 2023 - 2025 Restate Software, Inc., Restate GmbH.
// All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use bytes::{BufMut, BytesMut};
use metaserver_storage_api::{KeyDecodeError, KeyKind};
use tracing::trace;

use crate::keys::StorageKey;
use crate::{
    AllInodesPrefix, AllS3ChunkInfoListsPrefix, AllVolumeExtentsPrefix,
    ChunkIndexS3ChunkInfoListPrefix, InodeKey, InodeS3ChunkInfoListPrefix,
    InodeVolumeExtentPrefix, S3ChunkInfoListKey, VolumeExtentSliceKey,
};

/// Every key and prefix of the keyspace.
///
/// Within one [`KeyKind`] all layouts have distinct lengths, so a serialized key is identified by
/// its leading kind byte and its length.
#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Hash, derive_more::From, derive_more::TryInto,
)]
pub enum AnyStorageKey {
    Inode(InodeKey),
    AllInodes(AllInodesPrefix),
    S3ChunkInfoList(S3ChunkInfoListKey),
    ChunkIndexS3ChunkInfoLists(ChunkIndexS3ChunkInfoListPrefix),
    InodeS3ChunkInfoLists(InodeS3ChunkInfoListPrefix),
    AllS3ChunkInfoLists(AllS3ChunkInfoListsPrefix),
    VolumeExtentSlice(VolumeExtentSliceKey),
    InodeVolumeExtents(InodeVolumeExtentPrefix),
    AllVolumeExtents(AllVolumeExtentsPrefix),
}

macro_rules! with_key {
    ($any:expr, $key:ident => $body:expr) => {
        match $any {
            AnyStorageKey::Inode($key) => $body,
            AnyStorageKey::AllInodes($key) => $body,
            AnyStorageKey::S3ChunkInfoList($key) => $body,
            AnyStorageKey::ChunkIndexS3ChunkInfoLists($key) => $body,
            AnyStorageKey::InodeS3ChunkInfoLists($key) => $body,
            AnyStorageKey::AllS3ChunkInfoLists($key) => $body,
            AnyStorageKey::VolumeExtentSlice($key) => $body,
            AnyStorageKey::InodeVolumeExtents($key) => $body,
            AnyStorageKey::AllVolumeExtents($key) => $body,
        }
    };
}

fn key_kind_of<K: StorageKey>(_key: &K) -> KeyKind {
    K::KEY_KIND
}

fn serialized_length_of<K: StorageKey>(_key: &K) -> usize {
    K::SERIALIZED_LENGTH
}

impl AnyStorageKey {
    pub fn key_kind(&self) -> KeyKind {
        with_key!(self, key => key_kind_of(key))
    }

    pub fn serialized_length(&self) -> usize {
        with_key!(self, key => serialized_length_of(key))
    }

    /// Whether this selects a range of keys rather than naming a single entry.
    pub fn is_prefix(&self) -> bool {
        !matches!(
            self,
            AnyStorageKey::Inode(_)
                | AnyStorageKey::S3ChunkInfoList(_)
                | AnyStorageKey::VolumeExtentSlice(_)
        )
    }

    pub fn serialize_to<B: BufMut>(&self, buf: &mut B) {
        with_key!(self, key => key.serialize_to(buf))
    }

    pub fn serialize(&self) -> BytesMut {
        let mut buf = BytesMut::with_capacity(self.serialized_length());
        self.serialize_to(&mut buf);
        buf
    }

    pub fn parse(bytes: &[u8]) -> crate::Result<Self> {
        let mut kind_byte = bytes;
        let key_kind = KeyKind::deserialize(&mut kind_byte)?;
        let len = bytes.len();

        let key = match key_kind {
            KeyKind::Inode if len == InodeKey::SERIALIZED_LENGTH => {
                Self::Inode(InodeKey::parse(bytes)?)
            }
            KeyKind::Inode if len == AllInodesPrefix::SERIALIZED_LENGTH => {
                Self::AllInodes(AllInodesPrefix::parse(bytes)?)
            }
            KeyKind::S3ChunkInfo if len == S3ChunkInfoListKey::SERIALIZED_LENGTH => {
                Self::S3ChunkInfoList(S3ChunkInfoListKey::parse(bytes)?)
            }
            KeyKind::S3ChunkInfo if len == ChunkIndexS3ChunkInfoListPrefix::SERIALIZED_LENGTH => {
                Self::ChunkIndexS3ChunkInfoLists(ChunkIndexS3ChunkInfoListPrefix::parse(bytes)?)
            }
            KeyKind::S3ChunkInfo if len == InodeS3ChunkInfoListPrefix::SERIALIZED_LENGTH => {
                Self::InodeS3ChunkInfoLists(InodeS3ChunkInfoListPrefix::parse(bytes)?)
            }
            KeyKind::S3ChunkInfo if len == AllS3ChunkInfoListsPrefix::SERIALIZED_LENGTH => {
                Self::AllS3ChunkInfoLists(AllS3ChunkInfoListsPrefix::parse(bytes)?)
            }
            KeyKind::VolumeExtent if len == VolumeExtentSliceKey::SERIALIZED_LENGTH => {
                Self::VolumeExtentSlice(VolumeExtentSliceKey::parse(bytes)?)
            }
            KeyKind::VolumeExtent if len == InodeVolumeExtentPrefix::SERIALIZED_LENGTH => {
                Self::InodeVolumeExtents(InodeVolumeExtentPrefix::parse(bytes)?)
            }
            KeyKind::VolumeExtent if len == AllVolumeExtentsPrefix::SERIALIZED_LENGTH => {
                Self::AllVolumeExtents(AllVolumeExtentsPrefix::parse(bytes)?)
            }
            // Dentry has no layout yet
            kind => {
                trace!(key_kind = %kind, len, "No key layout matches");
                return Err(KeyDecodeError::UnknownLayout { kind, len }.into());
            }
        };

        Ok(key)
    }
}

impl crate::converter::Decodable for AnyStorageKey {
    fn decode_from(bytes: &[u8]) -> crate::Result<Self> {
        Self::parse(bytes)
    }
}
