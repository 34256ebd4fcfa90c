// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the animo-core crate.
//!
//! These tests drive the facade, the repositories and the view-state
//! holders together against a database in a temporary state directory.

mod account;
mod activity_reminders;
mod config_driven;
mod pet_lifecycle;
