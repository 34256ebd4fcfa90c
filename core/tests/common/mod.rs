// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Custom assertion helpers
//! - Temporary directory management with auto-cleanup

mod assertions;
mod fixtures;
mod temp_dir;

#[allow(unused_imports)]
pub use assertions::{assert_file_exists, assert_titles};
#[allow(unused_imports)]
pub use fixtures::{RecordingNotifier, test_activity, test_config, test_pet, today_at};
pub use temp_dir::setup_temp_dirs;
