// Copyright (c) 2023 - 2025 Restate Software, Inc., Restate GmbH.
// All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Protobuf payloads stored as values in the metaserver keyspace.
//!
//! The messages mirror the metaserver's wire schema. They are declared with prost derives so
//! that building does not depend on `protoc`.

pub mod storage {
    pub mod v1 {
        use std::collections::BTreeMap;

        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum FileType {
            Directory = 0,
            File = 1,
            SymLink = 2,
            S3 = 3,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Inode {
            #[prost(uint32, tag = "1")]
            pub fs_id: u32,
            #[prost(uint64, tag = "2")]
            pub inode_id: u64,
            #[prost(uint64, tag = "3")]
            pub length: u64,
            #[prost(uint64, tag = "4")]
            pub ctime: u64,
            #[prost(uint32, tag = "5")]
            pub ctime_ns: u32,
            #[prost(uint64, tag = "6")]
            pub mtime: u64,
            #[prost(uint32, tag = "7")]
            pub mtime_ns: u32,
            #[prost(uint64, tag = "8")]
            pub atime: u64,
            #[prost(uint32, tag = "9")]
            pub atime_ns: u32,
            #[prost(uint32, tag = "10")]
            pub uid: u32,
            #[prost(uint32, tag = "11")]
            pub gid: u32,
            #[prost(uint32, tag = "12")]
            pub mode: u32,
            #[prost(uint32, tag = "13")]
            pub nlink: u32,
            #[prost(enumeration = "FileType", tag = "14")]
            pub file_type: i32,
            #[prost(string, optional, tag = "15")]
            pub symlink: ::core::option::Option<::prost::alloc::string::String>,
            #[prost(uint64, optional, tag = "16")]
            pub rdev: ::core::option::Option<u64>,
            #[prost(uint64, repeated, tag = "17")]
            pub parent: ::prost::alloc::vec::Vec<u64>,
            #[prost(btree_map = "string, string", tag = "18")]
            pub xattr: BTreeMap<::prost::alloc::string::String, ::prost::alloc::string::String>,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Dentry {
            #[prost(uint32, tag = "1")]
            pub fs_id: u32,
            #[prost(uint64, tag = "2")]
            pub inode_id: u64,
            #[prost(uint64, tag = "3")]
            pub parent_inode_id: u64,
            #[prost(string, tag = "4")]
            pub name: ::prost::alloc::string::String,
            #[prost(uint64, tag = "5")]
            pub tx_id: u64,
            #[prost(uint32, optional, tag = "6")]
            pub flag: ::core::option::Option<u32>,
            #[prost(enumeration = "FileType", optional, tag = "7")]
            pub file_type: ::core::option::Option<i32>,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct S3ChunkInfo {
            #[prost(uint64, tag = "1")]
            pub chunk_id: u64,
            #[prost(uint64, tag = "2")]
            pub compaction: u64,
            #[prost(uint64, tag = "3")]
            pub offset: u64,
            #[prost(uint64, tag = "4")]
            pub len: u64,
            #[prost(uint64, tag = "5")]
            pub size: u64,
            #[prost(bool, tag = "6")]
            pub zero: bool,
        }

        /// Chunks appended to one chunk index of an inode, in chunk id order.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct S3ChunkInfoList {
            #[prost(message, repeated, tag = "1")]
            pub s3_chunks: ::prost::alloc::vec::Vec<S3ChunkInfo>,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct VolumeExtent {
            #[prost(uint64, tag = "1")]
            pub fs_offset: u64,
            #[prost(uint64, tag = "2")]
            pub volume_offset: u64,
            #[prost(uint64, tag = "3")]
            pub length: u64,
            #[prost(bool, tag = "4")]
            pub is_used: bool,
        }

        /// Extents of a file starting at `offset`.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct VolumeExtentSlice {
            #[prost(uint64, tag = "1")]
            pub offset: u64,
            #[prost(message, repeated, tag = "2")]
            pub extents: ::prost::alloc::vec::Vec<VolumeExtent>,
        }
    }
}

mod conversions {
    use metaserver_types::protobuf_storage_encode_decode;

    use crate::storage::v1::{
        Dentry, Inode, S3ChunkInfo, S3ChunkInfoList, VolumeExtent, VolumeExtentSlice,
    };

    protobuf_storage_encode_decode!(
        Inode,
        Dentry,
        S3ChunkInfo,
        S3ChunkInfoList,
        VolumeExtent,
        VolumeExtentSlice,
    );
}
