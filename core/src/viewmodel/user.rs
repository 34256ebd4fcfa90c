// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::watch;

use crate::User;
use crate::repository::UserRepository;
use crate::viewmodel::{Collector, mark_ready, spawn_write, wait_ready};

/// The logged-in user, if any.
#[derive(Debug)]
pub struct UserViewModel {
    repo: UserRepository,
    state: Arc<State>,
    _collector: Collector,
}

#[derive(Debug)]
struct State {
    user: watch::Sender<Option<User>>,
    ready: watch::Sender<bool>,
}

impl UserViewModel {
    pub fn new(repo: UserRepository) -> Self {
        let state = Arc::new(State {
            user: watch::Sender::new(None),
            ready: watch::Sender::new(false),
        });
        let collector = Collector::spawn(collect(repo.clone(), state.clone()));
        Self {
            repo,
            state,
            _collector: collector,
        }
    }

    pub fn user(&self) -> watch::Receiver<Option<User>> {
        self.state.user.subscribe()
    }

    pub async fn ready(&self) {
        wait_ready(&self.state.ready).await
    }

    pub fn logout(&self) {
        let repo = self.repo.clone();
        spawn_write("logout", async move { repo.logout_user().await });
    }
}

async fn collect(repo: UserRepository, state: Arc<State>) {
    let mut user = repo.watch_logged_in_user();
    while let Some(item) = user.next().await {
        match item {
            Ok(u) => {
                state.user.send_replace(u);
            }
            Err(e) => tracing::error!(err = %e, "failed to load logged-in user"),
        }
        mark_ready(&state.ready);
    }
}
