use std::collections::HashSet;

use board::{Board, Scope};
use campus::{Faculty, SearchHistoryCreate, SearchMode};
use campus_client::{Client, Session};
use log::{debug, error, info, warn};
use tokio::sync::watch;

use crate::command::{Command, HELP};

const HISTORY_LIMIT: u8 = 10;

/// Applies user commands to the board and keeps the signed in user's data
/// (favourites, search history) in sync with the backend.
pub struct Shell {
    board: Board<Client>,
    client: Client,
    session: Option<Session>,
    favorites: watch::Sender<HashSet<String>>,
}

impl Shell {
    pub fn new(
        board: Board<Client>,
        client: Client,
        session: Option<Session>,
        favorites: watch::Sender<HashSet<String>>,
    ) -> Self {
        Self {
            board,
            client,
            session,
            favorites,
        }
    }

    fn scope(&self) -> Scope {
        self.board.store().state().criteria.scope
    }

    pub async fn handle(&mut self, command: Command) {
        debug!("command {:?}", command);

        match command {
            Command::Faculty(faculty) => {
                let scope = Scope {
                    faculty: faculty.map(|faculty| faculty.to_string()),
                    building_id: None,
                    ..self.scope()
                };
                self.search(scope).await;
            }
            Command::Building(building) => {
                let mut scope = self.scope();
                scope.building_id = building.map(|building| building.id.to_string());
                if let Some(building) = building {
                    scope.faculty = Some(building.faculty.to_string());
                }
                self.search(scope).await;
            }
            Command::Status(status) => self.board.set_status_filter(status),
            Command::At(mode) => {
                let scope = Scope {
                    mode,
                    ..self.scope()
                };
                self.search(scope).await;
            }
            Command::Now => {
                let scope = Scope {
                    mode: SearchMode::Now,
                    ..self.scope()
                };
                self.search(scope).await;
            }
            Command::Refresh => {
                if let Err(err) = self.board.refresh().await {
                    warn!("refresh failed: {}", err);
                }
            }
            Command::Favorite(classroom_id) => self.set_favorite(classroom_id, true).await,
            Command::Unfavorite(classroom_id) => self.set_favorite(classroom_id, false).await,
            Command::History => self.print_history().await,
            Command::DeleteSearch(history_id) => self.delete_search(history_id).await,
            Command::ClearHistory => self.clear_history().await,
            Command::Help => println!("{HELP}"),
            Command::Quit => {}
        }
    }

    /// Loads `scope`. Successful searches of a signed in user are recorded in
    /// their search history.
    pub async fn search(&mut self, scope: Scope) {
        if let Err(err) = self.board.search(scope.clone()).await {
            warn!("search failed: {}", err);
            return;
        }

        let Some(session) = &self.session else {
            return;
        };

        let entry = SearchHistoryCreate {
            faculty: scope.faculty,
            building_id: scope.building_id,
            status: self.board.store().state().criteria.status,
            mode: scope.mode,
        };

        match self.client.save_search(session, &entry).await {
            Ok(saved) => debug!("saved search {}", saved.id),
            Err(err) => warn!("unable to save search: {}", err),
        }
    }

    pub async fn load_favorites(&self) {
        let Some(session) = &self.session else {
            return;
        };

        match self.client.favorites(session).await {
            Ok(favorites) => {
                info!("loaded {} favourite rooms", favorites.len());

                let ids = favorites
                    .into_iter()
                    .map(|favorite| favorite.classroom_id)
                    .collect();
                self.favorites.send_replace(ids);
            }
            Err(err) => error!("unable to load favourites: {}", err),
        }
    }

    async fn set_favorite(&self, classroom_id: String, favorite: bool) {
        let Some(session) = &self.session else {
            println!("favourites need a signed in user, set CAMPUS_TOKEN");
            return;
        };

        let result = if favorite {
            match self.client.is_favorite(session, &classroom_id).await {
                Ok(true) => {
                    println!("{classroom_id} is already a favourite");
                    self.favorites
                        .send_if_modified(|favorites| favorites.insert(classroom_id));
                    return;
                }
                Ok(false) => {}
                Err(err) => debug!("unable to check favourite {}: {}", classroom_id, err),
            }

            self.client.add_favorite(session, &classroom_id).await
        } else {
            self.client.remove_favorite(session, &classroom_id).await
        };

        match result {
            Ok(()) => {
                self.favorites.send_if_modified(|favorites| {
                    if favorite {
                        favorites.insert(classroom_id)
                    } else {
                        favorites.remove(&classroom_id)
                    }
                });
            }
            Err(err) if err.is_not_found() => println!("unknown room {classroom_id}"),
            Err(err) => error!("unable to update favourite {}: {}", classroom_id, err),
        }
    }

    async fn print_history(&self) {
        let Some(session) = &self.session else {
            println!("search history needs a signed in user, set CAMPUS_TOKEN");
            return;
        };

        let history = match self.client.search_history(session, HISTORY_LIMIT).await {
            Ok(history) => history,
            Err(err) => {
                error!("unable to load search history: {}", err);
                return;
            }
        };

        if history.is_empty() {
            println!("no recent searches");
            return;
        }

        for entry in history {
            let when = entry
                .created_at
                .map(|created_at| created_at.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();

            let faculty = entry
                .faculty
                .as_deref()
                .map_or("all faculties", Faculty::display_name);

            let mode = entry
                .mode()
                .map_or_else(|| entry.search_mode.clone(), |mode| mode.to_string());

            println!(
                "{:<12} {:<16} {} / {} / {} / {}",
                entry.id,
                when,
                faculty,
                entry.building_id.as_deref().unwrap_or("all buildings"),
                entry.status.as_deref().unwrap_or("any status"),
                mode
            );
        }
    }

    async fn delete_search(&self, history_id: String) {
        let Some(session) = &self.session else {
            println!("search history needs a signed in user, set CAMPUS_TOKEN");
            return;
        };

        match self.client.delete_search(session, &history_id).await {
            Ok(()) => println!("forgot search {history_id}"),
            Err(err) if err.is_not_found() => println!("unknown search {history_id}"),
            Err(err) => error!("unable to delete search {}: {}", history_id, err),
        }
    }

    async fn clear_history(&self) {
        let Some(session) = &self.session else {
            println!("search history needs a signed in user, set CAMPUS_TOKEN");
            return;
        };

        match self.client.clear_search_history(session).await {
            Ok(()) => println!("search history cleared"),
            Err(err) => error!("unable to clear search history: {}", err),
        }
    }

    /// Stops polling and closes the session.
    pub async fn close(mut self) {
        self.board.stop();

        if let Some(session) = self.session.take() {
            if let Err(err) = self.client.sign_out(session).await {
                warn!("sign out failed: {}", err);
            }
        }
    }
}
