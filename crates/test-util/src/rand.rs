// Copyright (c) 2023 - 2025 Restate Software, Inc., Restate GmbH.
// All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Random field values that exercise every byte of a key, including the values whose
//! decimal text would sort differently from their numeric value.

use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// Values around the boundaries where byte widths or decimal digit counts change.
const EDGE_VALUES: [u64; 10] = [
    0,
    1,
    9,
    10,
    255,
    256,
    u32::MAX as u64,
    u32::MAX as u64 + 1,
    u64::MAX - 1,
    u64::MAX,
];

pub fn u32() -> u32 {
    rand::random()
}

pub fn u64() -> u64 {
    rand::random()
}

/// Either an edge value (truncated to `T`) or a uniformly random one.
pub fn edge_biased<T>() -> T
where
    Standard: Distribution<T>,
    T: TryFrom<u64>,
{
    let mut rng = rand::thread_rng();
    if rng.gen_bool(0.3) {
        let edge = EDGE_VALUES[rng.gen_range(0..EDGE_VALUES.len())];
        if let Ok(value) = T::try_from(edge) {
            return value;
        }
    }
    rng.gen()
}

/// A pair `(a, b)` with `a < b`.
pub fn ordered_pair<T>() -> (T, T)
where
    Standard: Distribution<T>,
    T: TryFrom<u64> + Ord + Copy,
{
    loop {
        let a = edge_biased::<T>();
        let b = edge_biased::<T>();
        match a.cmp(&b) {
            std::cmp::Ordering::Less => return (a, b),
            std::cmp::Ordering::Greater => return (b, a),
            std::cmp::Ordering::Equal => continue,
        }
    }
}
