use std::sync::Arc;
use std::time::Duration;

use campus::{Status, StatusQuery};
use log::{debug, error, info};
use tokio::sync::watch;
use tokio::task::{self, JoinHandle};
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::{Generation, Result, Scope, StatusSource, Store, ViewState};

/// Keeps a [`Store`] filled with the rooms of the current scope.
///
/// Every search is a manual load. Live searches additionally start a polling
/// task that merges fresh statuses every `poll_interval`; at most one such
/// task runs, and it is aborted on the next search or when the board drops.
pub struct Board<S: StatusSource> {
    source: Arc<S>,
    store: Store,
    poll_interval: Duration,
    poll_handle: Option<JoinHandle<()>>,
}

impl<S: StatusSource> Board<S> {
    pub fn new(source: S, poll_interval: Duration) -> Self {
        Self {
            source: Arc::new(source),
            store: Store::new(),
            poll_interval,
            poll_handle: None,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.store.subscribe()
    }

    pub fn is_polling(&self) -> bool {
        self.poll_handle
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
    }

    /// Loads `scope` and, for live searches, starts polling it.
    ///
    /// A failed load leaves the store in [`crate::Phase::Failed`] and no
    /// polling task running.
    pub async fn search(&mut self, scope: Scope) -> Result<()> {
        self.stop();

        let query = scope.query();
        let live = scope.mode.is_live();
        let generation = self.store.begin_load(scope);

        info!("loading rooms for {:?}", query);

        match self.source.fetch_statuses(&query).await {
            Ok(rooms) => {
                info!("loaded {} rooms", rooms.len());
                self.store.finish_load(generation, rooms);
            }
            Err(err) => {
                error!("unable to load rooms: {}", err);
                self.store.fail_load(generation, err.to_string());
                return Err(err);
            }
        }

        if live {
            self.poll_handle = Some(self.spawn_polling(query, generation));
        }

        Ok(())
    }

    /// Repeats the last search.
    pub async fn refresh(&mut self) -> Result<()> {
        let scope = self.store.state().criteria.scope;
        self.search(scope).await
    }

    pub fn set_status_filter(&self, status: Option<Status>) {
        self.store.set_status_filter(status);
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.poll_handle.take() {
            debug!("stopping polling");
            handle.abort();
        }
    }

    fn spawn_polling(&self, query: StatusQuery, generation: Generation) -> JoinHandle<()> {
        let source = self.source.clone();
        let store = self.store.clone();
        let period = self.poll_interval;

        task::spawn(async move {
            let mut timer = time::interval_at(Instant::now() + period, period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                timer.tick().await;

                match source.fetch_statuses(&query).await {
                    Ok(fresh) => {
                        if store.apply_poll(generation, &fresh) {
                            debug!("rooms updated by poll");
                        }
                    }
                    Err(err) => error!("poll failed: {}", err),
                }
            }
        })
    }
}

impl<S: StatusSource> Drop for Board<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
