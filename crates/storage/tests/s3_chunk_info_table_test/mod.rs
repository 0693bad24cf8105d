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
use metaserver_storage::scan::{exclusive_upper_bound, scan_entries, scan_keys};
use metaserver_storage::{
    ChunkIndexS3ChunkInfoListPrefix, Converter, InodeS3ChunkInfoListPrefix, KvStore,
    S3ChunkInfoListKey, StorageKey,
};
use metaserver_storage_proto::storage::v1::{S3ChunkInfo, S3ChunkInfoList};
use metaserver_test_util::assert_eq;
use metaserver_test_util::matchers::{eq, has_byte_prefix};

fn mock_list(chunk_ids: impl IntoIterator<Item = u64>) -> S3ChunkInfoList {
    S3ChunkInfoList {
        s3_chunks: chunk_ids
            .into_iter()
            .map(|chunk_id| S3ChunkInfo {
                chunk_id,
                offset: chunk_id * 4096,
                len: 4096,
                size: 4096,
                ..Default::default()
            })
            .collect(),
    }
}

fn put_list<S: KvStore>(
    store: &mut S,
    converter: &Converter,
    fs_id: u32,
    inode_id: u64,
    chunk_index: u64,
    list: &S3ChunkInfoList,
) {
    let key = S3ChunkInfoListKey::from_list(fs_id, inode_id, chunk_index, list).unwrap();
    store
        .put(
            converter.serialize_key(&key),
            converter.serialize_value(list).unwrap(),
        )
        .unwrap();
}

fn populate_data<S: KvStore>(store: &mut S, converter: &Converter) {
    // written out of order on purpose
    put_list(store, converter, 1, 42, 2, &mock_list([300, 301]));
    put_list(store, converter, 1, 42, 0, &mock_list([10, 11, 12]));
    put_list(store, converter, 1, 42, 1, &mock_list([256, 257]));
    put_list(store, converter, 1, 42, 0, &mock_list([1, 2]));
    put_list(store, converter, 1, 42, 1, &mock_list([9]));
    // neighbours that must not show up in the scans of fs 1 / inode 42
    put_list(store, converter, 1, 41, 0, &mock_list([5]));
    put_list(store, converter, 1, 43, 0, &mock_list([6]));
    put_list(store, converter, 2, 42, 0, &mock_list([7]));
}

fn scan_inode_chunk_lists<S: KvStore>(store: &mut S) {
    let entries =
        scan_entries::<_, S3ChunkInfoList, _>(&*store, &InodeS3ChunkInfoListPrefix::new(1, 42))
            .unwrap();
    let keys: Vec<S3ChunkInfoListKey> = entries.iter().map(|(key, _)| *key).collect();

    assert_that!(
        keys,
        elements_are![
            eq(S3ChunkInfoListKey::new(1, 42, 0, 1, 2, 2)),
            eq(S3ChunkInfoListKey::new(1, 42, 0, 10, 12, 3)),
            eq(S3ChunkInfoListKey::new(1, 42, 1, 9, 9, 1)),
            eq(S3ChunkInfoListKey::new(1, 42, 1, 256, 257, 2)),
            eq(S3ChunkInfoListKey::new(1, 42, 2, 300, 301, 2))
        ]
    );
    for (key, list) in &entries {
        assert_eq!(
            Some(*key),
            S3ChunkInfoListKey::from_list(key.fs_id, key.inode_id, key.chunk_index, list)
        );
    }
}

fn chunk_index_ranges_are_disjoint<S: KvStore>(store: &mut S) {
    let inode_prefix = InodeS3ChunkInfoListPrefix::new(1, 42);
    let whole_inode = scan_keys(&*store, &inode_prefix).unwrap();
    assert_eq!(whole_inode.len(), 5);
    for (key, _) in &whole_inode {
        assert!(has_byte_prefix(key.serialize(), inode_prefix.serialize()));
    }

    let mut per_chunk_index = Vec::new();
    for chunk_index in 0..3 {
        let prefix = ChunkIndexS3ChunkInfoListPrefix::new(1, 42, chunk_index);
        let entries = scan_keys(&*store, &prefix).unwrap();
        assert!(!entries.is_empty());
        assert!(entries.iter().all(|(key, _)| key.chunk_index == chunk_index));

        // nothing of this chunk index sorts at or after the next chunk index
        let upper = exclusive_upper_bound(&prefix.serialize()).unwrap();
        let next = ChunkIndexS3ChunkInfoListPrefix::new(1, 42, chunk_index + 1).serialize();
        assert_eq!(&upper[..], &next[..]);

        per_chunk_index.extend(entries);
    }

    // the chunk index ranges partition the inode range
    assert_eq!(per_chunk_index, whole_inode);
}

fn delete_chunk_list<S: KvStore>(store: &mut S, converter: &Converter) {
    let key = S3ChunkInfoListKey::new(1, 42, 1, 9, 9, 1);
    store.delete(&converter.serialize_key(&key)).unwrap();

    let remaining = scan_keys(&*store, &key.chunk_index_prefix()).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].0, S3ChunkInfoListKey::new(1, 42, 1, 256, 257, 2));
}

pub(crate) fn run_tests<S: KvStore>(store: &mut S, converter: &Converter) {
    populate_data(store, converter);
    scan_inode_chunk_lists(store);
    chunk_index_ranges_are_disjoint(store);
    delete_chunk_list(store, converter);
}
