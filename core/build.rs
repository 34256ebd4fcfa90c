// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

fn main() {
    // sqlx::migrate! embeds the schema at compile time
    println!("cargo:rerun-if-changed=src/localdb/migrations");
}
