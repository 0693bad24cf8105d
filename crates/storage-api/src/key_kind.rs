// Copyright (c) 2023 - 2025 Restate Software, Inc., Restate GmbH.
// All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use bytes::{Buf, BufMut};
use strum::EnumIter;

use crate::KeyDecodeError;

// makes sure that it doesn't go unnoticed if this changed by mistake.
static_assertions::const_assert_eq!(1, KeyKind::SERIALIZED_LENGTH);

/// Every key needs to start with a key kind. It separates the namespaces of the different
/// metadata entities within the single ordered keyspace, so that a scan bounded by one kind
/// never crosses into another.
///
/// # Important
/// There must exist a bijective mapping between the enum variant and its byte representation.
/// See [`KeyKind::as_byte`] and [`KeyKind::from_byte`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, EnumIter, derive_more::Display)]
#[repr(u8)]
pub enum KeyKind {
    Inode = 1,
    S3ChunkInfo = 2,
    /// Reserved for directory entries; no key layout of this kind is defined yet.
    Dentry = 3,
    VolumeExtent = 4,
}

impl KeyKind {
    pub const SERIALIZED_LENGTH: usize = 1;

    /// A once assigned byte representation to a key kind variant must never be changed! Data
    /// persisted under the old byte would silently move into another namespace. Instead, create
    /// a new variant representing a new key.
    ///
    /// # Important
    /// The following invariant must hold:
    /// ```ignore
    /// KeyKind::from_byte(key_kind.as_byte()) == Some(key_kind)
    /// ```
    pub const fn as_byte(&self) -> u8 {
        // NOTE: do not use 0xff as key kind, ever!
        // We should always be able to +1 the byte to get the exclusive upper bound.
        *self as u8
    }

    /// A once assigned byte representation to a key kind variant must never be changed! Instead,
    /// create a new variant representing a new key.
    ///
    /// # Important
    /// The following invariant must hold:
    /// ```ignore
    /// KeyKind::from_byte(key_kind.as_byte()) == Some(key_kind)
    /// ```
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            1 => Some(KeyKind::Inode),
            2 => Some(KeyKind::S3ChunkInfo),
            3 => Some(KeyKind::Dentry),
            4 => Some(KeyKind::VolumeExtent),
            _ => None,
        }
    }

    pub fn serialize<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(self.as_byte());
    }

    pub fn deserialize<B: Buf>(buf: &mut B) -> Result<Self, KeyDecodeError> {
        if buf.remaining() < KeyKind::SERIALIZED_LENGTH {
            return Err(KeyDecodeError::Truncated {
                expected: KeyKind::SERIALIZED_LENGTH,
                actual: buf.remaining(),
            });
        }

        let byte = buf.get_u8();
        Self::from_byte(byte).ok_or(KeyDecodeError::UnknownKeyKind(byte))
    }
}
