// Copyright (c) 2023 - 2025 Restate Software, Inc., Restate GmbH.
// All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use metaserver_storage::scan::scan_entries;
use metaserver_storage::{Converter, InodeVolumeExtentPrefix, KvStore, VolumeExtentSliceKey};
use metaserver_storage_proto::storage::v1::{VolumeExtent, VolumeExtentSlice};
use metaserver_test_util::assert_eq;

const MIB: u64 = 1 << 20;

fn mock_slice(offset: u64) -> VolumeExtentSlice {
    VolumeExtentSlice {
        offset,
        extents: vec![
            VolumeExtent {
                fs_offset: offset,
                volume_offset: offset + 64 * MIB,
                length: MIB,
                is_used: true,
            },
            VolumeExtent {
                fs_offset: offset + MIB,
                volume_offset: offset + 128 * MIB,
                length: MIB,
                is_used: false,
            },
        ],
    }
}

fn populate_data<S: KvStore>(store: &mut S, converter: &Converter) {
    // 256 MiB sorts before 1 GiB only when encoded as big-endian integers
    for (inode_id, offset) in [(42, 1024 * MIB), (42, 0), (42, 256 * MIB), (43, 0)] {
        let slice = mock_slice(offset);
        let key = VolumeExtentSliceKey::from_slice(1, inode_id, &slice);
        store
            .put(
                converter.serialize_key(&key),
                converter.serialize_value(&slice).unwrap(),
            )
            .unwrap();
    }
}

fn scan_inode_extents<S: KvStore>(store: &mut S) {
    let entries =
        scan_entries::<_, VolumeExtentSlice, _>(&*store, &InodeVolumeExtentPrefix::new(1, 42))
            .unwrap();

    let offsets: Vec<u64> = entries.iter().map(|(key, _)| key.offset).collect();
    assert_eq!(offsets, vec![0, 256 * MIB, 1024 * MIB]);
    for (key, slice) in &entries {
        assert_eq!(key.inode_id, 42);
        assert_eq!(slice, &mock_slice(key.offset));
    }
}

fn get_single_slice<S: KvStore>(store: &mut S, converter: &Converter) {
    let key = VolumeExtentSliceKey::new(1, 43, 0);
    let value = store.get(&converter.serialize_key(&key)).unwrap().unwrap();

    let slice: VolumeExtentSlice = converter.parse(&value).unwrap();
    assert_eq!(slice, mock_slice(0));
    assert_eq!(key.inode_prefix(), InodeVolumeExtentPrefix::new(1, 43));
}

pub(crate) fn run_tests<S: KvStore>(store: &mut S, converter: &Converter) {
    populate_data(store, converter);
    scan_inode_extents(store);
    get_single_slice(store, converter);
}
