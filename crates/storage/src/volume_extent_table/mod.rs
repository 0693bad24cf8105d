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
use metaserver_storage_proto::storage::v1::VolumeExtentSlice;
use metaserver_types::identifiers::{ExtentOffset, FsId, InodeId};

use crate::keys::{define_storage_key, KeyPrefix, StorageKey};

define_storage_key!(
    /// Key of the extent slice of an inode that starts at `offset`.
    KeyKind::VolumeExtent,
    VolumeExtentSliceKey(fs_id: FsId, inode_id: InodeId, offset: ExtentOffset)
);

define_storage_key!(
    /// Selects every extent slice of one inode, in ascending offset order.
    KeyKind::VolumeExtent,
    InodeVolumeExtentPrefix(fs_id: FsId, inode_id: InodeId)
);

define_storage_key!(
    KeyKind::VolumeExtent,
    AllVolumeExtentsPrefix()
);

static_assertions::const_assert!(
    <AllVolumeExtentsPrefix as StorageKey>::SERIALIZED_LENGTH
        < <InodeVolumeExtentPrefix as StorageKey>::SERIALIZED_LENGTH
);
static_assertions::const_assert!(
    <InodeVolumeExtentPrefix as StorageKey>::SERIALIZED_LENGTH
        < <VolumeExtentSliceKey as StorageKey>::SERIALIZED_LENGTH
);

impl KeyPrefix for InodeVolumeExtentPrefix {
    type Key = VolumeExtentSliceKey;
}

impl KeyPrefix for AllVolumeExtentsPrefix {
    type Key = VolumeExtentSliceKey;
}

impl VolumeExtentSliceKey {
    pub fn from_slice(fs_id: FsId, inode_id: InodeId, slice: &VolumeExtentSlice) -> Self {
        Self::new(fs_id, inode_id, slice.offset)
    }

    pub const fn inode_prefix(&self) -> InodeVolumeExtentPrefix {
        InodeVolumeExtentPrefix::new(self.fs_id, self.inode_id)
    }
}
