// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end pet and activity workflow tests.

use std::time::Duration;

use animo_core::dashboard::{self, DailySummary};
use animo_core::{ActivityType, Animo, PetPatch};
use tokio::time::timeout;

use crate::common::{assert_titles, setup_temp_dirs, test_activity, test_config, test_pet, today_at};

#[tokio::test]
async fn pet_lifecycle_rex_morning_walk() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let animo = Animo::new(test_config(&temp_dirs.state_dir)).await.unwrap();

    // Act
    let rex = animo.pets().insert(&test_pet("Rex", "Labrador")).await.unwrap();
    let walk = test_activity(ActivityType::Walk, "Morning Walk", today_at(8), rex);
    animo.activities().insert(&walk).await.unwrap();

    // Assert
    let activities = animo.activities().list_by_pet(rex).await.unwrap();
    let today = dashboard::activities_on(&activities, animo.now().date());
    assert_titles(today.iter().copied(), &["Morning Walk"]);

    let summary = DailySummary::from_activities(&activities, animo.now().date());
    assert_eq!(summary.walks, 1);
    assert_eq!(summary.meals, 0);
}

#[tokio::test]
async fn pet_lifecycle_defaults_and_patch() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let animo = Animo::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    let id = animo.pets().insert(&test_pet("Rex", "Labrador")).await.unwrap();

    // Assert - optional fields take their defaults
    let mut rex = animo.pets().get(id).await.unwrap().unwrap();
    assert_eq!(rex.age, 0);
    assert_eq!(rex.weight, 0.0);
    assert_eq!(rex.sex, "");
    assert_eq!(rex.vet_phone, "");

    // Act - edit the profile
    let patch = PetPatch {
        age: Some(4),
        weight: Some(30.2),
        vet_name: Some("Dr. Lee".to_string()),
        ..Default::default()
    };
    patch.apply_to(&mut rex);
    animo.pets().update(&rex).await.unwrap();

    // Assert
    let stored = animo.pets().get(id).await.unwrap().unwrap();
    assert_eq!(stored, rex);
    assert_eq!(stored.vet_name, "Dr. Lee");
}

#[tokio::test]
async fn pet_lifecycle_delete_cascades() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let animo = Animo::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    let rex = animo.pets().insert(&test_pet("Rex", "Labrador")).await.unwrap();
    let milo = animo.pets().insert(&test_pet("Milo", "Corgi")).await.unwrap();
    for pet in [rex, milo] {
        let meal = test_activity(ActivityType::Meal, "Breakfast", today_at(7), pet);
        animo.activities().insert(&meal).await.unwrap();
    }

    // Act
    animo.pets().delete(rex).await.unwrap();

    // Assert
    assert!(animo.activities().list_by_pet(rex).await.unwrap().is_empty());
    assert_eq!(animo.activities().list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn pet_lifecycle_selection_follows_store() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let animo = Animo::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    let rex = animo.pets().insert(&test_pet("Rex", "Labrador")).await.unwrap();
    let pets = animo.pet_view_model();
    let activities = animo.activity_view_model(None);
    pets.ready().await;

    // Act - the selected pet drives the activity list
    let selected = pets.selected_pet().borrow().as_ref().map(|p| p.id);
    assert_eq!(selected, Some(rex));
    activities.set_selected_pet(selected);
    activities.insert(test_activity(ActivityType::Walk, "Evening Walk", today_at(19), rex));

    // Assert
    let mut list = activities.activities();
    let titles = timeout(Duration::from_secs(5), list.wait_for(|l| l.len() == 1))
        .await
        .unwrap()
        .unwrap()
        .iter()
        .map(|a| a.title.clone())
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["Evening Walk"]);

    // Act - deleting the only pet clears the selection and its activities
    pets.delete(rex);
    let mut selected = pets.selected_pet();
    timeout(Duration::from_secs(5), selected.wait_for(Option::is_none))
        .await
        .unwrap()
        .unwrap();
    timeout(Duration::from_secs(5), list.wait_for(Vec::is_empty))
        .await
        .unwrap()
        .unwrap();
}
