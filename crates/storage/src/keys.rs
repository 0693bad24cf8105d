// Copyright (c) 2023 - 2025 Restate Software, Inc., Restate GmbH.
// All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::mem;

use bytes::{Buf, BufMut, BytesMut};
use metaserver_storage_api::{KeyDecodeError, KeyKind};
use tracing::trace;

/// A fixed-layout key of the metaserver keyspace.
///
/// A key is its [`KeyKind`] byte followed by its fields in declaration order. Every field has a
/// fixed width, so a type has exactly one serialized length and the format carries no length
/// prefixes or separators.
pub trait StorageKey: Sized + Copy + std::fmt::Debug + Send + Sync + 'static {
    const KEY_KIND: KeyKind;
    /// Length of the serialized key, key kind included.
    const SERIALIZED_LENGTH: usize;

    fn serialize_to<B: BufMut>(&self, buf: &mut B);

    /// Reads exactly [`Self::SERIALIZED_LENGTH`] bytes from `buf`.
    fn deserialize_from<B: Buf>(buf: &mut B) -> crate::Result<Self>;

    fn serialize(&self) -> BytesMut {
        let mut buf = BytesMut::with_capacity(Self::SERIALIZED_LENGTH);
        self.serialize_to(&mut buf);
        buf
    }

    /// Parses a complete key. Unlike [`StorageKey::deserialize_from`], bytes left after the last
    /// field are an error.
    fn parse(mut bytes: &[u8]) -> crate::Result<Self> {
        let actual = bytes.len();
        let key = Self::deserialize_from(&mut bytes)?;
        if bytes.has_remaining() {
            trace!(key_kind = %Self::KEY_KIND, actual, "Rejecting key with trailing bytes");
            return Err(KeyDecodeError::TrailingBytes {
                expected: Self::SERIALIZED_LENGTH,
                actual,
            }
            .into());
        }
        Ok(key)
    }
}

/// A key that selects a contiguous range of [`Self::Key`]s: its serialized form is a byte prefix
/// of the serialized form of every key it selects, and of no other key.
pub trait KeyPrefix: StorageKey {
    type Key: StorageKey;

    fn contains(&self, key: &Self::Key) -> bool {
        key.serialize().starts_with(&self.serialize())
    }
}

/// Fixed-width field codec.
pub trait KeyCodec: Sized {
    const WIDTH: usize;

    fn encode<B: BufMut>(&self, target: &mut B);
    fn decode<B: Buf>(source: &mut B) -> crate::Result<Self>;
}

impl KeyCodec for u64 {
    const WIDTH: usize = mem::size_of::<u64>();

    fn encode<B: BufMut>(&self, target: &mut B) {
        // big-endian, so that byte-wise order matches numeric order
        target.put_u64(*self);
    }

    fn decode<B: Buf>(source: &mut B) -> crate::Result<Self> {
        ensure_remaining(source, Self::WIDTH)?;
        Ok(source.get_u64())
    }
}

impl KeyCodec for u32 {
    const WIDTH: usize = mem::size_of::<u32>();

    fn encode<B: BufMut>(&self, target: &mut B) {
        // big-endian, so that byte-wise order matches numeric order
        target.put_u32(*self);
    }

    fn decode<B: Buf>(source: &mut B) -> crate::Result<Self> {
        ensure_remaining(source, Self::WIDTH)?;
        Ok(source.get_u32())
    }
}

#[inline]
fn ensure_remaining<B: Buf>(source: &B, expected: usize) -> Result<(), KeyDecodeError> {
    if source.remaining() < expected {
        return Err(KeyDecodeError::Truncated {
            expected,
            actual: source.remaining(),
        });
    }
    Ok(())
}

/// Consumes the key kind of a `K` and checks that `buf` holds the rest of it.
///
/// The kind is compared before the length, so a key of another kind is reported as such even
/// when it is shorter than a `K`.
pub(crate) fn read_key_kind<K: StorageKey, B: Buf>(buf: &mut B) -> crate::Result<()> {
    let actual = buf.remaining();
    if actual == 0 {
        trace!(key_kind = %K::KEY_KIND, "Rejecting empty key");
        return Err(KeyDecodeError::Truncated {
            expected: K::SERIALIZED_LENGTH,
            actual,
        }
        .into());
    }

    let key_kind = KeyKind::deserialize(buf)?;
    if key_kind != K::KEY_KIND {
        trace!(expected = %K::KEY_KIND, found = %key_kind, "Rejecting key of other kind");
        return Err(KeyDecodeError::KeyKindMismatch {
            expected: K::KEY_KIND,
            found: key_kind,
        }
        .into());
    }

    if actual < K::SERIALIZED_LENGTH {
        trace!(
            key_kind = %K::KEY_KIND,
            expected = K::SERIALIZED_LENGTH,
            actual,
            "Rejecting truncated key"
        );
        return Err(KeyDecodeError::Truncated {
            expected: K::SERIALIZED_LENGTH,
            actual,
        }
        .into());
    }
    Ok(())
}

/// The following macro defines an ordered, named key tuple, that is used as a key of the
/// ordered store.
///
/// Given the following definition
/// ```ignore
/// define_storage_key!(KeyKind::Inode, FooBarKey(foo: u32, bar: u64));
/// ```
///
/// This macro expands to:
/// ```ignore
/// #[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Hash)]
/// pub struct FooBarKey {
///     pub foo: u32,
///     pub bar: u64,
/// }
///
/// impl FooBarKey {
///     pub const fn new(foo: u32, bar: u64) -> Self {
///         Self { foo, bar }
///     }
/// }
///
/// impl crate::keys::StorageKey for FooBarKey {
///     const KEY_KIND: KeyKind = KeyKind::Inode;
///     const SERIALIZED_LENGTH: usize = KeyKind::SERIALIZED_LENGTH + 4 + 8;
///
///     fn serialize_to<B: BufMut>(&self, buf: &mut B) {
///         Self::KEY_KIND.serialize(buf);
///         crate::keys::KeyCodec::encode(&self.foo, buf);
///         crate::keys::KeyCodec::encode(&self.bar, buf);
///     }
///
///     fn deserialize_from<B: Buf>(buf: &mut B) -> crate::Result<Self> {
///         crate::keys::read_key_kind::<Self, B>(buf)?;
///         Ok(Self {
///             foo: crate::keys::KeyCodec::decode(buf)?,
///             bar: crate::keys::KeyCodec::decode(buf)?,
///         })
///     }
/// }
///
/// impl crate::converter::Decodable for FooBarKey { ... }
/// ```
///
/// Full keys and their prefixes are all defined through this macro, so a prefix always encodes
/// its leading fields exactly like the full key does.
macro_rules! define_storage_key {

    ($(#[$meta:meta])* $key_kind:path, $key_name:ident ( $($element: ident: $ty: ty),* $(,)? ) ) => (
        $(#[$meta])*
        #[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Hash)]
        pub struct $key_name { $(pub $element: $ty),* }

        impl $key_name {
            pub const fn new($($element: $ty),*) -> Self {
                Self { $($element),* }
            }
        }

        impl $crate::keys::StorageKey for $key_name {
            const KEY_KIND: metaserver_storage_api::KeyKind = $key_kind;
            const SERIALIZED_LENGTH: usize = metaserver_storage_api::KeyKind::SERIALIZED_LENGTH
                $(+ <$ty as $crate::keys::KeyCodec>::WIDTH)*;

            #[inline]
            fn serialize_to<B: bytes::BufMut>(&self, buf: &mut B) {
                <Self as $crate::keys::StorageKey>::KEY_KIND.serialize(buf);
                $(
                $crate::keys::KeyCodec::encode(&self.$element, buf);
                )*
            }

            #[inline]
            fn deserialize_from<B: bytes::Buf>(buf: &mut B) -> crate::Result<Self> {
                $crate::keys::read_key_kind::<Self, B>(buf)?;

                Ok(Self {
                    $(
                    $element: $crate::keys::KeyCodec::decode(buf)?,
                    )*
                })
            }
        }

        impl $crate::converter::Decodable for $key_name {
            fn decode_from(bytes: &[u8]) -> crate::Result<Self> {
                <Self as $crate::keys::StorageKey>::parse(bytes)
            }
        }
    )
}

pub(crate) use define_storage_key;
