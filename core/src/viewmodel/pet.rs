// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::watch;

use crate::Pet;
use crate::repository::PetRepository;
use crate::viewmodel::{Collector, mark_ready, spawn_write, wait_ready};

/// All pets plus the one currently selected.
///
/// Nothing selected and at least one pet stored selects the first pet, the
/// one with the lowest id. Deleting the selected pet falls back to the first
/// remaining pet in list order.
#[derive(Debug)]
pub struct PetViewModel {
    repo: PetRepository,
    state: Arc<State>,
    _collector: Collector,
}

#[derive(Debug)]
struct State {
    pets: watch::Sender<Vec<Pet>>,
    selected: watch::Sender<Option<Pet>>,
    ready: watch::Sender<bool>,
}

impl State {
    /// Replaces the selected pet with its latest stored version.
    fn refresh_selected(&self, pets: &[Pet]) {
        self.selected.send_if_modified(|selected| {
            let Some(current) = selected else {
                return false;
            };
            match pets.iter().find(|p| p.id == current.id) {
                Some(fresh) if fresh != current => {
                    *current = fresh.clone();
                    true
                }
                _ => false,
            }
        });
    }

    fn select_if_none(&self, pet: Pet) {
        self.selected.send_if_modified(|selected| match selected {
            None => {
                tracing::debug!(id = pet.id, "selecting first pet");
                *selected = Some(pet);
                true
            }
            Some(_) => false,
        });
    }

    fn selected_id(&self) -> Option<i64> {
        self.selected.borrow().as_ref().map(|p| p.id)
    }
}

impl PetViewModel {
    pub fn new(repo: PetRepository) -> Self {
        let state = Arc::new(State {
            pets: watch::Sender::new(Vec::new()),
            selected: watch::Sender::new(None),
            ready: watch::Sender::new(false),
        });
        let collector = Collector::spawn(collect(repo.clone(), state.clone()));
        Self {
            repo,
            state,
            _collector: collector,
        }
    }

    /// All pets, ordered by name.
    pub fn pets(&self) -> watch::Receiver<Vec<Pet>> {
        self.state.pets.subscribe()
    }

    pub fn selected_pet(&self) -> watch::Receiver<Option<Pet>> {
        self.state.selected.subscribe()
    }

    /// Resolves once the pets and the initial selection are loaded.
    pub async fn ready(&self) {
        wait_ready(&self.state.ready).await
    }

    /// Selects the pet with the given id.
    pub fn select(&self, pet_id: i64) {
        let loaded = self.state.pets.borrow().iter().find(|p| p.id == pet_id).cloned();
        if let Some(pet) = loaded {
            self.state.selected.send_replace(Some(pet));
            return;
        }

        let (repo, state) = (self.repo.clone(), self.state.clone());
        spawn_write("select pet", async move {
            match repo.get(pet_id).await? {
                Some(pet) => {
                    state.selected.send_replace(Some(pet));
                }
                None => tracing::warn!(pet_id, "cannot select unknown pet"),
            }
            Ok(())
        });
    }

    /// Stores a new pet and selects it.
    pub fn insert(&self, pet: Pet) {
        let (repo, state) = (self.repo.clone(), self.state.clone());
        spawn_write("insert pet", async move {
            pet.validate()?;
            let id = repo.insert(&pet).await?;
            if let Some(pet) = repo.get(id).await? {
                state.selected.send_replace(Some(pet));
            }
            Ok(())
        });
    }

    /// Overwrites a stored pet, refreshing the selection if it is the edited one.
    pub fn update(&self, pet: Pet) {
        let (repo, state) = (self.repo.clone(), self.state.clone());
        spawn_write("update pet", async move {
            pet.validate()?;
            repo.update(&pet).await?;
            if state.selected_id() == Some(pet.id) {
                state.selected.send_replace(Some(pet));
            }
            Ok(())
        });
    }

    /// Deletes a pet together with its activities.
    pub fn delete(&self, pet_id: i64) {
        let (repo, state) = (self.repo.clone(), self.state.clone());
        spawn_write("delete pet", async move {
            repo.delete(pet_id).await?;
            if state.selected_id() == Some(pet_id) {
                let fallback = state.pets.borrow().iter().find(|p| p.id != pet_id).cloned();
                tracing::debug!(pet_id, fallback = ?fallback.as_ref().map(|p| p.id), "selected pet deleted");
                state.selected.send_replace(fallback);
            }
            Ok(())
        });
    }
}

async fn collect(repo: PetRepository, state: Arc<State>) {
    let mut all = repo.watch_all();
    let mut first = repo.watch_first();
    let (mut all_loaded, mut first_loaded) = (false, false);

    loop {
        tokio::select! {
            Some(pets) = all.next() => {
                match pets {
                    Ok(pets) => {
                        state.refresh_selected(&pets);
                        state.pets.send_replace(pets);
                    }
                    Err(e) => tracing::error!(err = %e, "failed to load pets"),
                }
                all_loaded = true;
            }
            Some(pet) = first.next() => {
                match pet {
                    Ok(Some(pet)) => state.select_if_none(pet),
                    Ok(None) => {}
                    Err(e) => tracing::error!(err = %e, "failed to load first pet"),
                }
                first_loaded = true;
            }
            else => break,
        }

        if all_loaded && first_loaded {
            mark_ready(&state.ready);
        }
    }
}
