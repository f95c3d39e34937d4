//! Root application module.
//!
//! Contains the main App component and [`PanelState`], the reactive shell
//! that owns the folder model and favorites and issues host calls on user
//! action.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use tracing::debug;
use wasm_bindgen_futures::spawn_local;

use crate::components::Panel;
use crate::config::notice::DISPLAY_MS;
use crate::core::{
    ActionOutcome, CepBridge, EntryAction, FavoritesStore, FolderModel, HostClient,
    NavigationError, ProjectRequest,
};
use crate::models::{Entry, FileKind, Notice, PathComponent, ProjectDetails};
use crate::utils::LocalStore;

// ============================================================================
// PanelState
// ============================================================================

/// Panel state managed with Leptos signals.
///
/// This struct is `Copy` because all fields are Leptos signals. Host calls
/// never hold a borrow of the model across an await: results are applied
/// in a single `update` once they arrive.
#[derive(Clone, Copy)]
pub struct PanelState {
    /// Scanned tree and navigation position.
    pub model: RwSignal<FolderModel>,
    pub favorites: RwSignal<FavoritesStore<LocalStore>>,
    /// Current search query (empty = browsing).
    pub query: RwSignal<String>,
    pub showing_favorites: RwSignal<bool>,
    /// Scans and project requests in flight.
    pub loading: RwSignal<InFlight>,
    pub notice: RwSignal<Option<Notice>>,
    /// Details of the selected project file, keyed by its path.
    pub details: RwSignal<Option<(String, ProjectDetails)>>,
}

impl PanelState {
    pub fn new() -> Self {
        Self {
            model: RwSignal::new(FolderModel::new()),
            favorites: RwSignal::new(FavoritesStore::load(LocalStore)),
            query: RwSignal::new(String::new()),
            showing_favorites: RwSignal::new(false),
            loading: RwSignal::new(InFlight::default()),
            notice: RwSignal::new(None),
            details: RwSignal::new(None),
        }
    }

    fn client() -> HostClient<CepBridge> {
        HostClient::new(CepBridge::new())
    }

    // ------------------------------------------------------------------------
    // Scanning
    // ------------------------------------------------------------------------

    /// Rescan the Projects folder and replay the navigation stack.
    ///
    /// `announce` shows a "Loaded" notice on success.
    pub fn refresh(&self, announce: bool) {
        let state = *self;
        state.loading.update(InFlight::begin);

        spawn_local(async move {
            let result = Self::client().scan_folder().await;
            let applied = state.model.try_update(|m| m.apply_scan(result));
            state.loading.update(InFlight::end);

            match applied {
                Some(Ok(summary)) => {
                    if announce {
                        state.notify(Notice::success(format!(
                            "Loaded {} file(s) from Projects folder",
                            summary.file_count
                        )));
                    }
                    if let Some(request) = summary.pending_project {
                        state.load_project(request);
                    }
                }
                Some(Err(e)) => state.notify(Notice::failure(&e)),
                None => {}
            }
        });
    }

    fn load_project(&self, request: ProjectRequest) {
        let state = *self;
        state.loading.update(InFlight::begin);

        spawn_local(async move {
            let result = Self::client().project_contents(&request.path).await;
            let applied = state
                .model
                .try_update(|m| m.finish_project_request(request, result));
            state.loading.update(InFlight::end);

            match applied {
                Some(Ok(listing)) => debug!(path = %listing.path, "project opened"),
                Some(Err(NavigationError::Superseded)) | None => {}
                Some(Err(e)) => state.notify(Notice::failure(&e)),
            }
        });
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    /// Open a folder or project file; select anything else.
    ///
    /// Folders and project files reached from search results or favorites
    /// are opened by path, since those copies may be stale or carry no
    /// children, and the current position is not their parent.
    pub fn open(&self, entry: &Entry) {
        let browsing =
            self.query.get_untracked().trim().is_empty() && !self.showing_favorites.get_untracked();
        self.query.set(String::new());
        self.showing_favorites.set(false);

        if entry.is_folder() {
            if browsing {
                self.model.update(|m| {
                    m.enter_folder(entry);
                });
            } else {
                self.go_to_path(vec![PathComponent::Folder(entry.display_name().to_string())]);
            }
            return;
        }

        if !browsing
            && self
                .model
                .try_update(|m| m.reveal_project(entry))
                .flatten()
                .is_some()
        {
            self.refresh(false);
            return;
        }

        match self.model.try_update(|m| m.project_request(entry)).flatten() {
            Some(request) => self.load_project(request),
            None => self.select(entry),
        }
    }

    pub fn go_back(&self) {
        if self.model.try_update(|m| m.go_back()).flatten().is_some() {
            self.refresh(false);
        }
    }

    pub fn go_to_root(&self) {
        self.query.set(String::new());
        self.showing_favorites.set(false);
        self.model.update(|m| {
            m.go_to_root();
        });
        self.refresh(false);
    }

    pub fn go_to_path(&self, path: Vec<PathComponent>) {
        self.showing_favorites.set(false);
        self.model.update(|m| {
            m.go_to_path(path);
        });
        self.refresh(false);
    }

    /// Select an entry for preview; project files also load their details.
    pub fn select(&self, entry: &Entry) {
        let selected = self.model.try_update(|m| m.select(entry)).unwrap_or(false);
        self.details.set(None);

        if let Entry::File(file) = entry
            && selected
            && file.kind() == FileKind::Project
        {
            let state = *self;
            let path = file.path.clone();
            spawn_local(async move {
                match Self::client().project_details(&path).await {
                    Ok(details) => state.details.set(Some((path, details))),
                    Err(e) => debug!(%path, error = %e, "project details unavailable"),
                }
            });
        }
    }

    // ------------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------------

    /// Run a host action and report the outcome.
    pub fn run_action(&self, action: EntryAction, entry: Entry) {
        let state = *self;
        spawn_local(async move {
            match Self::client().perform(action, &entry).await {
                Some(Ok(ActionOutcome::Done)) => {
                    state.notify(Notice::success(
                        action.success_message(entry.display_name()),
                    ));
                }
                Some(Ok(ActionOutcome::ScriptReturned(value))) => {
                    state.notify(Notice::info(value));
                }
                Some(Err(e)) => state.notify(Notice::failure(&e)),
                None => {}
            }
        });
    }

    pub fn toggle_favorite(&self, entry: &Entry) {
        let favorited = self
            .favorites
            .try_update(|f| f.toggle(entry))
            .unwrap_or(false);
        let message = if favorited {
            "Added to favorites"
        } else {
            "Removed from favorites"
        };
        self.notify(Notice::info(message));
    }

    pub fn clear_favorites(&self) {
        self.favorites.update(|f| f.clear());
    }

    // ------------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------------

    /// Show a notice and dismiss it after [`DISPLAY_MS`].
    pub fn notify(&self, notice: Notice) {
        let id = notice.id;
        let slot = self.notice;
        slot.set(Some(notice));

        spawn_local(async move {
            TimeoutFuture::new(DISPLAY_MS).await;
            // A newer notice keeps its own timer
            slot.update(|current| {
                if current.as_ref().is_some_and(|n| n.id == id) {
                    *current = None;
                }
            });
        });
    }
}

/// Count of host calls the loading indicator waits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InFlight(usize);

impl InFlight {
    pub fn begin(&mut self) {
        self.0 += 1;
    }

    pub fn end(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    pub fn is_busy(&self) -> bool {
        self.0 > 0
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// Creates and provides the [`PanelState`], triggers the initial scan and
/// renders the [`Panel`].
#[component]
pub fn App() -> impl IntoView {
    let state = PanelState::new();
    provide_context(state);
    state.refresh(true);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 1rem;
                    background: #232323;
                    color: #d6d6d6;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #ff6b6b; font-size: 1.1rem;">"Something went wrong"</h1>
                    <ul style="color: #ff6b6b; font-size: 0.85rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #2d8ceb;
                            color: white;
                            border: none;
                            padding: 0.5rem 1.5rem;
                            border-radius: 4px;
                            cursor: pointer;
                        "
                    >
                        "Reload Panel"
                    </button>
                </div>
            }
        >
            <Panel />
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_flight_stays_busy_until_last_call_ends() {
        let mut loading = InFlight::default();
        assert!(!loading.is_busy());

        // A rescan overlapping a project load
        loading.begin();
        loading.begin();
        loading.end();
        assert!(loading.is_busy());

        loading.end();
        assert!(!loading.is_busy());
    }

    #[test]
    fn test_in_flight_end_never_underflows() {
        let mut loading = InFlight::default();
        loading.end();
        loading.begin();
        assert!(loading.is_busy());
    }
}
