//! Utilities for serde.

use std::num::ParseIntError;

use serde_with::serde_conv;

#[allow(clippy::ptr_arg)]
serde_conv!(
    pub CommaSeparated,
    Vec<u64>,
    |ids: &Vec<u64>| ids
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(","),
    |value: String| -> Result<_, ParseIntError> {
        value
            .split(',')
            .filter(|id| !id.is_empty())
            .map(str::parse)
            .collect()
    }
);
