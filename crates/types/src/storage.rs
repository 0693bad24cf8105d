// Copyright (c) 2023 - 2025 Restate Software, Inc., Restate GmbH.
// All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Value encoding of the metaserver keyspace.
//!
//! A stored value is one [`StorageCodecKind`] byte followed by the value in that codec, so the
//! codec can change without rewriting existing entries.

use std::mem;

use bytes::{Buf, BufMut};

use crate::errors::GenericError;

#[derive(Debug, thiserror::Error)]
pub enum StorageEncodeError {
    #[error("failed encoding value: {0}")]
    EncodeValue(GenericError),
}

#[derive(Debug, thiserror::Error)]
pub enum StorageDecodeError {
    #[error("failed reading codec byte: {0}")]
    ReadingCodec(String),
    #[error("failed decoding value: {0}")]
    DecodeValue(GenericError),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, strum::FromRepr, derive_more::Display)]
#[repr(u8)]
pub enum StorageCodecKind {
    Protobuf = 1,
}

impl From<StorageCodecKind> for u8 {
    fn from(value: StorageCodecKind) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for StorageCodecKind {
    type Error = StorageDecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        StorageCodecKind::from_repr(value).ok_or_else(|| {
            StorageDecodeError::ReadingCodec(format!("unknown discriminant '{value}'"))
        })
    }
}

/// Writes and reads values framed by their codec byte.
pub struct StorageCodec;

impl StorageCodec {
    pub fn encode<T: StorageEncode, B: BufMut>(
        value: &T,
        buf: &mut B,
    ) -> Result<(), StorageEncodeError> {
        buf.put_u8(T::DEFAULT_CODEC.into());
        value.encode(buf)
    }

    /// Number of bytes [`StorageCodec::encode`] writes for `value`, codec byte included.
    pub fn encoded_len<T: StorageEncode>(value: &T) -> usize {
        mem::size_of::<u8>() + value.encoded_len()
    }

    pub fn decode<T: StorageDecode, B: Buf>(buf: &mut B) -> Result<T, StorageDecodeError> {
        if !buf.has_remaining() {
            return Err(StorageDecodeError::ReadingCodec("value is empty".to_owned()));
        }

        let codec = StorageCodecKind::try_from(buf.get_u8())?;
        T::decode(buf, codec)
    }
}

/// A value that can be stored. New values are always written with [`Self::DEFAULT_CODEC`].
pub trait StorageEncode {
    const DEFAULT_CODEC: StorageCodecKind;

    /// Writes the value without its codec byte.
    fn encode<B: BufMut>(&self, buf: &mut B) -> Result<(), StorageEncodeError>;

    /// Length of the value part, without the codec byte.
    fn encoded_len(&self) -> usize;
}

/// A value that can be read back. Implementations must keep decoding every codec they were ever
/// written with.
pub trait StorageDecode: Sized {
    fn decode<B: Buf>(buf: &mut B, kind: StorageCodecKind) -> Result<Self, StorageDecodeError>;
}

/// Implements [`StorageEncode`] and [`StorageDecode`] for `prost::Message` types. The calling
/// crate needs `prost` and `bytes` as dependencies.
#[macro_export]
macro_rules! protobuf_storage_encode_decode {
    ($($name:ty),+ $(,)?) => {
        $(
        impl $crate::storage::StorageEncode for $name {
            const DEFAULT_CODEC: $crate::storage::StorageCodecKind =
                $crate::storage::StorageCodecKind::Protobuf;

            fn encode<B: ::bytes::BufMut>(
                &self,
                buf: &mut B,
            ) -> Result<(), $crate::storage::StorageEncodeError> {
                ::prost::Message::encode(self, buf)
                    .map_err(|err| $crate::storage::StorageEncodeError::EncodeValue(err.into()))
            }

            fn encoded_len(&self) -> usize {
                ::prost::Message::encoded_len(self)
            }
        }

        impl $crate::storage::StorageDecode for $name {
            fn decode<B: ::bytes::Buf>(
                buf: &mut B,
                kind: $crate::storage::StorageCodecKind,
            ) -> Result<Self, $crate::storage::StorageDecodeError> {
                match kind {
                    $crate::storage::StorageCodecKind::Protobuf => {
                        <$name as ::prost::Message>::decode(buf).map_err(|err| {
                            $crate::storage::StorageDecodeError::DecodeValue(err.into())
                        })
                    }
                }
            }
        }
        )+
    };
}
