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
use metaserver_storage_proto::storage::v1::Inode;
use metaserver_types::identifiers::{FsId, InodeId};

use crate::keys::{define_storage_key, KeyPrefix, StorageKey};

define_storage_key!(
    /// Key of one inode.
    KeyKind::Inode,
    InodeKey(fs_id: FsId, inode_id: InodeId)
);

define_storage_key!(
    /// Selects every inode of every filesystem.
    KeyKind::Inode,
    AllInodesPrefix()
);

static_assertions::const_assert!(
    <AllInodesPrefix as StorageKey>::SERIALIZED_LENGTH
        < <InodeKey as StorageKey>::SERIALIZED_LENGTH
);

impl KeyPrefix for AllInodesPrefix {
    type Key = InodeKey;
}

impl From<&Inode> for InodeKey {
    fn from(inode: &Inode) -> Self {
        InodeKey::new(inode.fs_id, inode.inode_id)
    }
}

#[cfg(test)]
mod tests {
    use metaserver_storage_api::{KeyDecodeError, StorageError};
    use metaserver_test_util::let_assert;

    use super::*;

    #[test]
    fn inode_key_layout() {
        let key = InodeKey::new(1, 42);
        let expected: [u8; 13] = [0x01, 0, 0, 0, 0x01, 0, 0, 0, 0, 0, 0, 0, 0x2a];
        assert_eq!(&key.serialize()[..], &expected);

        let parsed = InodeKey::parse(&key.serialize()).unwrap();
        assert_eq!(parsed.fs_id, 1);
        assert_eq!(parsed.inode_id, 42);
    }

    #[test]
    fn keys_sort_numerically() {
        // "9" > "10" as decimal text, but not as keys
        assert!(InodeKey::new(9, 0).serialize() < InodeKey::new(10, 0).serialize());
        assert!(InodeKey::new(1, 9).serialize() < InodeKey::new(1, 10).serialize());
        assert!(InodeKey::new(1, 255).serialize() < InodeKey::new(1, 256).serialize());
        // fs_id dominates inode_id
        assert!(InodeKey::new(1, u64::MAX).serialize() < InodeKey::new(2, 0).serialize());
    }

    #[test]
    fn keys_sort_like_fields_for_random_values() {
        for _ in 0..256 {
            let (a, b) = metaserver_test_util::rand::ordered_pair::<u64>();
            let fs_id = metaserver_test_util::rand::u32();
            assert!(InodeKey::new(fs_id, a).serialize() < InodeKey::new(fs_id, b).serialize());

            let (x, y) = metaserver_test_util::rand::ordered_pair::<u32>();
            assert!(InodeKey::new(x, b).serialize() < InodeKey::new(y, a).serialize());
        }
    }

    #[test]
    fn all_inodes_prefix_contains_every_inode() {
        let prefix = AllInodesPrefix::new();
        assert_eq!(&prefix.serialize()[..], &[KeyKind::Inode.as_byte()]);
        assert!(prefix.contains(&InodeKey::new(0, 0)));
        assert!(prefix.contains(&InodeKey::new(u32::MAX, u64::MAX)));
    }

    #[test]
    fn key_from_inode_payload() {
        let inode = Inode {
            fs_id: 3,
            inode_id: 1024,
            length: 10,
            ..Default::default()
        };
        assert_eq!(InodeKey::from(&inode), InodeKey::new(3, 1024));
    }

    #[test]
    fn inode_key_is_not_an_extent_key() {
        // same length as an extent slice key, but of another kind
        let mut bytes = InodeKey::new(1, 42).serialize();
        bytes.extend_from_slice(&[0; 8]);
        let_assert!(
            Err(StorageError::Key(KeyDecodeError::KeyKindMismatch { .. })) =
                crate::VolumeExtentSliceKey::parse(&bytes)
        );
    }
}
