// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use std::path::Path;

use animo_core::Activity;

/// Asserts that the activities carry exactly the given titles, in order.
///
/// # Panics
///
/// Panics if the titles differ.
pub fn assert_titles<'a>(activities: impl IntoIterator<Item = &'a Activity>, expected: &[&str]) {
    let titles: Vec<&str> = activities.into_iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, expected, "Activity titles mismatch");
}

/// Asserts that a file exists at the given path.
///
/// # Panics
///
/// Panics if the file doesn't exist.
#[allow(dead_code)]
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File does not exist: {}", path.display());
}
