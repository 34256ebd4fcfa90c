// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Entry point for workflow tests.
//!
//! This module serves as the test entry point for all end-to-end workflow tests.

mod common;
mod workflows;
