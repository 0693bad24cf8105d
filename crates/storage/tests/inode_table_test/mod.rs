// Copyright (c) 2023 - 2025 Restate Software, Inc., Restate GmbH.
// All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use googletest::assert_that;
use googletest::matchers::elements_are;
use metaserver_storage::scan::scan_entries;
use metaserver_storage::{AllInodesPrefix, Converter, InodeKey, KvStore};
use metaserver_storage_proto::storage::v1::{FileType, Inode};
use metaserver_test_util::assert_eq;
use metaserver_test_util::matchers::eq;

fn mock_inode(fs_id: u32, inode_id: u64) -> Inode {
    let mut inode = Inode {
        fs_id,
        inode_id,
        length: 8192,
        mode: 0o100644,
        nlink: 1,
        parent: vec![1],
        ..Default::default()
    };
    inode.set_file_type(FileType::File);
    inode
}

fn populate_data<S: KvStore>(store: &mut S, converter: &Converter) {
    for inode in [mock_inode(1, 42), mock_inode(1, 10), mock_inode(2, 9)] {
        let key = converter.serialize_key(&InodeKey::from(&inode));
        let value = converter.serialize_value(&inode).unwrap();
        store.put(key, value).unwrap();
    }
}

fn inode_key_bytes(converter: &Converter) {
    let key = converter.serialize_key(&InodeKey::new(1, 42));
    let expected: [u8; 13] = [
        0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x2a,
    ];
    assert_eq!(&key[..], &expected);
}

fn get_inode<S: KvStore>(store: &mut S, converter: &Converter) {
    let key = converter.serialize_key(&InodeKey::new(1, 42));
    let value = store.get(&key).unwrap().unwrap();

    let inode: Inode = converter.parse(&value).unwrap();
    assert_eq!(inode, mock_inode(1, 42));
}

fn scan_all_inodes<S: KvStore>(store: &mut S) {
    let entries = scan_entries::<_, Inode, _>(&*store, &AllInodesPrefix::new()).unwrap();
    let keys: Vec<InodeKey> = entries.iter().map(|(key, _)| *key).collect();

    assert_that!(
        keys,
        elements_are![
            eq(InodeKey::new(1, 10)),
            eq(InodeKey::new(1, 42)),
            eq(InodeKey::new(2, 9))
        ]
    );
    for (key, inode) in &entries {
        assert_eq!(key, &InodeKey::from(inode));
    }
}

fn delete_inode<S: KvStore>(store: &mut S, converter: &Converter) {
    let key = converter.serialize_key(&InodeKey::new(1, 10));
    store.delete(&key).unwrap();
    assert_eq!(store.get(&key).unwrap(), None);
}

pub(crate) fn run_tests<S: KvStore>(store: &mut S, converter: &Converter) {
    populate_data(store, converter);
    inode_key_bytes(converter);
    get_inode(store, converter);
    scan_all_inodes(store);
    delete_inode(store, converter);
}
