// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Account workflows: register, login, logout.

use animo_core::{Animo, Error, ValidationError};

use crate::common::{setup_temp_dirs, test_config};

#[tokio::test]
async fn account_register_twice_logs_in_existing() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let animo = Animo::new(test_config(&temp_dirs.state_dir)).await.unwrap();

    // Act
    let first = animo.register("Jane", "jane@example.com").await.unwrap();
    animo.users().logout_user().await.unwrap();
    let second = animo.register("Janet", "jane@example.com").await.unwrap();

    // Assert
    assert_eq!(first, second);
    let user = animo.users().logged_in_user().await.unwrap().unwrap();
    assert_eq!(user.name, "Jane");
}

#[tokio::test]
async fn account_login_switches_user() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let animo = Animo::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    animo.register("Jane", "jane@example.com").await.unwrap();
    animo.register("John", "john@example.com").await.unwrap();

    // Act
    let found = animo.login("jane@example.com").await.unwrap();

    // Assert
    assert!(found);
    let user = animo.users().logged_in_user().await.unwrap().unwrap();
    assert_eq!(user.email, "jane@example.com");
}

#[tokio::test]
async fn account_unknown_login_keeps_session() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let animo = Animo::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    animo.register("Jane", "jane@example.com").await.unwrap();

    // Act
    let found = animo.login("ghost@example.com").await.unwrap();

    // Assert
    assert!(!found);
    let user = animo.users().logged_in_user().await.unwrap();
    assert_eq!(user.map(|u| u.name), Some("Jane".to_string()));
}

#[tokio::test]
async fn account_rejects_malformed_email() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let animo = Animo::new(test_config(&temp_dirs.state_dir)).await.unwrap();

    let err = animo.login("not-an-email").await.unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::InvalidEmail(_))
    ));
}
