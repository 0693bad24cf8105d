// Copyright (c) 2023 - 2025 Restate Software, Inc., Restate GmbH.
// All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use bytes::{Bytes, BytesMut};
use metaserver_storage_api::StorageError;
use metaserver_storage_proto::storage::v1::{
    Dentry, Inode, S3ChunkInfo, S3ChunkInfoList, VolumeExtent, VolumeExtentSlice,
};
use metaserver_types::config::StorageOptions;
use metaserver_types::storage::{StorageCodec, StorageEncode};
use tracing::debug;

use crate::keys::StorageKey;

/// Anything that can be read back from the bytes of a key or a value.
pub trait Decodable: Sized {
    fn decode_from(bytes: &[u8]) -> crate::Result<Self>;
}

macro_rules! decodable_payload {
    ($($payload:ty),+ $(,)?) => {
        $(
        impl Decodable for $payload {
            fn decode_from(mut bytes: &[u8]) -> crate::Result<Self> {
                Ok(StorageCodec::decode(&mut bytes)?)
            }
        }
        )+
    };
}

decodable_payload!(
    Inode,
    Dentry,
    S3ChunkInfo,
    S3ChunkInfoList,
    VolumeExtent,
    VolumeExtentSlice,
);

static_assertions::assert_impl_all!(Converter: Copy, Send, Sync);

/// Turns keys and payloads into the bytes stored in the [`KvStore`](crate::KvStore) and back.
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    max_value_size: usize,
}

impl Converter {
    pub fn new(options: &StorageOptions) -> Self {
        Self {
            max_value_size: options.max_value_size(),
        }
    }

    pub fn serialize_key<K: StorageKey>(&self, key: &K) -> Bytes {
        key.serialize().freeze()
    }

    /// Encodes `value` as its codec byte followed by the value itself. Values that would exceed
    /// the configured maximum value size are rejected, never truncated.
    pub fn serialize_value<V: StorageEncode>(&self, value: &V) -> crate::Result<Bytes> {
        let size = StorageCodec::encoded_len(value);
        if size > self.max_value_size {
            debug!(size, limit = self.max_value_size, "Rejecting oversized value");
            return Err(StorageError::ValueTooLarge {
                size,
                limit: self.max_value_size,
            });
        }

        let mut buf = BytesMut::with_capacity(size);
        StorageCodec::encode(value, &mut buf)?;
        Ok(buf.freeze())
    }

    pub fn parse<T: Decodable>(&self, bytes: &[u8]) -> crate::Result<T> {
        T::decode_from(bytes)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(&StorageOptions::default())
    }
}
