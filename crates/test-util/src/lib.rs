// Copyright (c) 2023 - 2025 Restate Software, Inc., Restate GmbH.
// All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Assertion helpers shared by the tests of the metaserver crates.
//!
//! ```rust
//! use metaserver_test_util::{assert_eq, let_assert};
//! ```
//!
//! Import the macros by name. A glob import would make them ambiguous with the std macros.

pub use assert2::{assert, check, let_assert};
pub use pretty_assertions::{assert_eq, assert_ne};

pub mod matchers;
pub mod rand;
