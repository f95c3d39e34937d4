//! Folder model: the scanned tree plus the user's position in it.
//!
//! Navigation never caches per-level listings. Moving back, to the root or
//! to an arbitrary path only rewrites the path stack and asks the caller to
//! rescan; the fresh tree is then walked top-down along the stack by
//! [`FolderModel::replace_tree`].
//!
//! Opening a project file is split in two so that no borrow of the model is
//! held across the bridge call: [`FolderModel::project_request`] issues a
//! token-stamped request, and [`FolderModel::finish_project_request`]
//! applies the contents only if no navigation happened in between.

use tracing::{debug, info, warn};

use crate::config::ROOT_CRUMB_LABEL;
use crate::core::bridge::{HostBridge, HostClient};
use crate::core::error::{BridgeError, NavigationError};
use crate::core::names::decode_display_name;
use crate::core::search::{SearchMatch, search};
use crate::core::tree::{self, sort_entries};
use crate::models::{
    Breadcrumb, CompositionEntry, Entry, FootageEntry, PathComponent, ProjectContents,
    ScanPayload, join_components,
};

// =============================================================================
// Results
// =============================================================================

/// A listing the presentation layer should show.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    /// Slash-joined display path of the stack
    pub path: String,
    pub items: Vec<Entry>,
}

/// The stack changed; the tree must be rescanned and the stack replayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reload {
    pub path: Vec<PathComponent>,
}

/// A pending request for a project file's contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectRequest {
    /// Navigation token at the time of the request
    pub token: u64,
    pub name: String,
    pub path: String,
}

/// Outcome of applying a successful scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanSummary {
    pub file_count: usize,
    pub folder_count: usize,
    /// Set when the replayed stack ended inside a project file, whose
    /// contents must be fetched again
    pub pending_project: Option<ProjectRequest>,
}

// =============================================================================
// Folder Model
// =============================================================================

/// The scanned tree and the navigation state over it.
#[derive(Clone, Debug, Default)]
pub struct FolderModel {
    root: Vec<Entry>,
    stack: Vec<PathComponent>,
    listing: Vec<Entry>,
    /// Path of the project file currently open as a virtual folder
    open_project: Option<String>,
    selected: Option<Entry>,
    /// Bumped on every user navigation and project request
    token: u64,
}

impl FolderModel {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Top-level entries of the last scan.
    pub fn root(&self) -> &[Entry] {
        &self.root
    }

    /// Entries at the current position.
    pub fn listing(&self) -> &[Entry] {
        &self.listing
    }

    pub fn stack(&self) -> &[PathComponent] {
        &self.stack
    }

    pub fn current_path(&self) -> String {
        join_components(&self.stack)
    }

    pub fn open_project(&self) -> Option<&str> {
        self.open_project.as_deref()
    }

    pub fn selected(&self) -> Option<&Entry> {
        self.selected.as_ref()
    }

    pub fn token(&self) -> u64 {
        self.token
    }

    /// Search the whole tree, regardless of the current position.
    pub fn search(&self, query: &str) -> Vec<SearchMatch> {
        search(query, &self.root)
    }

    /// Breadcrumb trail, starting with the root crumb.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        let mut crumbs = vec![Breadcrumb {
            display_name: ROOT_CRUMB_LABEL.to_string(),
            prefix: Vec::new(),
            is_project: false,
        }];
        crumbs.extend(self.stack.iter().enumerate().map(|(i, component)| Breadcrumb {
            display_name: component.display_name().to_string(),
            prefix: self.stack[..=i].to_vec(),
            is_project: component.is_project(),
        }));
        crumbs
    }

    // -------------------------------------------------------------------------
    // Scanning
    // -------------------------------------------------------------------------

    /// Apply a scan result.
    ///
    /// On failure nothing changes, so the previous listing stays visible.
    pub fn apply_scan(
        &mut self,
        result: Result<ScanPayload, BridgeError>,
    ) -> Result<ScanSummary, BridgeError> {
        let payload = result.inspect_err(|e| warn!(error = %e, "scan failed"))?;

        let file_count = payload.files.len();
        let folder_count = payload
            .folder_count
            .map(|count| count as usize)
            .unwrap_or(payload.folders.len());

        let root = tree::build(&payload.files, &payload.folders);
        let pending_project = self.replace_tree(root);
        info!(file_count, folder_count, "scan applied");

        Ok(ScanSummary {
            file_count,
            folder_count,
            pending_project,
        })
    }

    /// Swap in a freshly built tree and replay the stack over it.
    ///
    /// Replay stops at the first folder that no longer exists and truncates
    /// the stack there. A trailing project marker is popped and returned as
    /// a request, since its contents come from the host.
    pub fn replace_tree(&mut self, root: Vec<Entry>) -> Option<ProjectRequest> {
        self.root = root;
        self.selected = None;
        self.open_project = None;

        let mut listing = self.root.clone();
        let mut pending = None;
        let mut reached = self.stack.len();

        for (depth, component) in self.stack.iter().enumerate() {
            match component {
                PathComponent::Folder(name) => {
                    let next = listing
                        .iter()
                        .find(|e| e.is_folder() && e.display_name() == name)
                        .map(|e| e.children().to_vec());
                    match next {
                        Some(children) => listing = children,
                        None => {
                            debug!(folder = %name, depth, "replay stopped at missing folder");
                            reached = depth;
                            break;
                        }
                    }
                }
                PathComponent::Project { name, path } => {
                    pending = Some(ProjectRequest {
                        token: self.token,
                        name: name.clone(),
                        path: path.clone(),
                    });
                    reached = depth;
                    break;
                }
            }
        }

        self.stack.truncate(reached);
        self.listing = listing;
        pending
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    fn navigated(&mut self) {
        self.token += 1;
        self.selected = None;
    }

    /// Descend into a folder. Anything else is ignored.
    pub fn enter_folder(&mut self, entry: &Entry) -> Option<Listing> {
        let Entry::Folder(folder) = entry else {
            return None;
        };

        self.navigated();
        self.stack
            .push(PathComponent::Folder(folder.display_name.clone()));
        self.listing = folder.children.clone();

        Some(Listing {
            path: self.current_path(),
            items: self.listing.clone(),
        })
    }

    /// Start opening a project file as a virtual folder.
    ///
    /// Returns `None` for anything that is not a project file.
    pub fn project_request(&mut self, entry: &Entry) -> Option<ProjectRequest> {
        let Entry::File(file) = entry else {
            return None;
        };
        if !file.is_project() {
            return None;
        }

        self.token += 1;
        Some(ProjectRequest {
            token: self.token,
            name: file.display_name.clone(),
            path: file.path.clone(),
        })
    }

    /// Apply the host's answer to a [`ProjectRequest`].
    ///
    /// Results for a request that navigation has since moved past are
    /// rejected with [`NavigationError::Superseded`]; failures leave the
    /// state unchanged.
    pub fn finish_project_request(
        &mut self,
        request: ProjectRequest,
        result: Result<ProjectContents, BridgeError>,
    ) -> Result<Listing, NavigationError> {
        if request.token != self.token {
            debug!(project = %request.path, "dropping stale project contents");
            return Err(NavigationError::Superseded);
        }
        let contents = result?;

        let mut items: Vec<Entry> = contents
            .compositions
            .into_iter()
            .map(|comp| {
                Entry::Composition(CompositionEntry {
                    project_path: request.path.clone(),
                    name: comp.name,
                    width: comp.width,
                    height: comp.height,
                    duration: comp.duration,
                    frame_rate: comp.frame_rate,
                    num_layers: comp.num_layers,
                })
            })
            .chain(contents.footage.into_iter().map(|footage| {
                Entry::Footage(FootageEntry {
                    project_path: request.path.clone(),
                    name: footage.name,
                    width: footage.width,
                    height: footage.height,
                    duration: footage.duration,
                })
            }))
            .collect();
        sort_entries(&mut items);

        self.selected = None;
        self.stack.push(PathComponent::Project {
            name: request.name,
            path: request.path.clone(),
        });
        self.open_project = Some(request.path);
        self.listing = items;

        Ok(Listing {
            path: self.current_path(),
            items: self.listing.clone(),
        })
    }

    /// Open a project file, fetching its contents through `client`.
    ///
    /// Returns `None` when `entry` is not a project file.
    pub async fn enter_project_file<B: HostBridge>(
        &mut self,
        entry: &Entry,
        client: &HostClient<B>,
    ) -> Option<Result<Listing, NavigationError>> {
        let request = self.project_request(entry)?;
        let result = client.project_contents(&request.path).await;
        Some(self.finish_project_request(request, result))
    }

    /// Navigate to a project file found outside the current listing.
    ///
    /// The stack becomes the file's own top-level folder followed by the
    /// project marker, so the rescan replay issues the project request from
    /// the right place. Returns `None` for anything that is not a project
    /// file.
    pub fn reveal_project(&mut self, entry: &Entry) -> Option<Reload> {
        let Entry::File(file) = entry else {
            return None;
        };
        if !file.is_project() {
            return None;
        }

        let mut path = Vec::new();
        let top_level = file.folder.split('/').next().unwrap_or_default();
        if !top_level.is_empty() {
            path.push(PathComponent::Folder(decode_display_name(top_level)));
        }
        path.push(PathComponent::Project {
            name: file.display_name.clone(),
            path: file.path.clone(),
        });
        Some(self.go_to_path(path))
    }

    /// Pop one level. `None` when already at the root.
    pub fn go_back(&mut self) -> Option<Reload> {
        let popped = self.stack.pop()?;
        if popped.is_project() {
            self.open_project = None;
        }
        self.navigated();

        Some(Reload {
            path: self.stack.clone(),
        })
    }

    pub fn go_to_root(&mut self) -> Reload {
        self.go_to_path(Vec::new())
    }

    /// Replace the stack outright.
    pub fn go_to_path(&mut self, path: Vec<PathComponent>) -> Reload {
        self.open_project = None;
        self.stack = path;
        self.navigated();

        Reload {
            path: self.stack.clone(),
        }
    }

    /// Select an entry for preview. Folders are not selectable.
    pub fn select(&mut self, entry: &Entry) -> bool {
        if entry.is_folder() {
            return false;
        }
        self.selected = Some(entry.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bridge::MockBridge;
    use crate::core::bridge::procedures::GET_PROJECT_FILE_CONTENTS;
    use crate::models::{CompRecord, FileRecord, FolderRecord, FootageRecord};

    fn record(name: &str, folder: &str) -> FileRecord {
        FileRecord {
            name: name.to_string(),
            path: format!("/p/{}/{}", folder, name),
            folder: Some(folder.to_string()),
            ..Default::default()
        }
    }

    fn folder_record(name: &str) -> FolderRecord {
        FolderRecord {
            name: name.to_string(),
            path: name.to_string(),
            ..Default::default()
        }
    }

    fn scan() -> ScanPayload {
        ScanPayload {
            files: vec![
                record("intro.aep", "Titles"),
                record("lower.aep", "Titles/Lower"),
                record("whip.ffx", "Transitions"),
                record("readme.txt", ""),
            ],
            folders: vec![
                folder_record("Titles"),
                folder_record("Transitions"),
                FolderRecord {
                    name: "Lower".to_string(),
                    path: "Titles/Lower".to_string(),
                    ..Default::default()
                },
            ],
            folder_count: None,
        }
    }

    fn loaded() -> FolderModel {
        let mut model = FolderModel::new();
        model.apply_scan(Ok(scan())).unwrap();
        model
    }

    fn find(entries: &[Entry], name: &str) -> Entry {
        entries
            .iter()
            .find(|e| e.display_name() == name)
            .cloned()
            .unwrap()
    }

    fn contents() -> ProjectContents {
        ProjectContents {
            compositions: vec![
                CompRecord {
                    name: "Main".to_string(),
                    ..Default::default()
                },
                CompRecord {
                    name: "alt".to_string(),
                    ..Default::default()
                },
            ],
            footage: vec![FootageRecord {
                name: "bg.png".to_string(),
                ..Default::default()
            }],
        }
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(Entry::display_name).collect()
    }

    #[test]
    fn test_apply_scan_lists_root() {
        let mut model = FolderModel::new();
        let summary = model.apply_scan(Ok(scan())).unwrap();

        assert_eq!(summary.file_count, 4);
        assert_eq!(summary.folder_count, 3);
        assert_eq!(summary.pending_project, None);
        assert_eq!(names(model.listing()), vec!["Titles", "Transitions", "readme.txt"]);
    }

    #[test]
    fn test_failed_scan_keeps_listing() {
        let mut model = loaded();
        let titles = find(model.listing(), "Titles");
        model.enter_folder(&titles);
        let before = model.listing().to_vec();

        let result = model.apply_scan(Err(BridgeError::Host(
            "Projects folder not found".to_string(),
        )));
        assert!(result.is_err());
        assert_eq!(model.listing(), before.as_slice());
        assert_eq!(model.current_path(), "Titles");
    }

    #[test]
    fn test_enter_folder() {
        let mut model = loaded();
        let titles = find(model.listing(), "Titles");

        let listing = model.enter_folder(&titles).unwrap();
        assert_eq!(listing.path, "Titles");
        assert_eq!(names(&listing.items), vec!["intro.aep", "lower.aep"]);
        assert_eq!(model.stack(), &[PathComponent::Folder("Titles".to_string())]);
    }

    #[test]
    fn test_enter_folder_ignores_files() {
        let mut model = loaded();
        let token = model.token();
        let readme = find(model.listing(), "readme.txt");

        assert_eq!(model.enter_folder(&readme), None);
        assert!(model.stack().is_empty());
        assert_eq!(model.token(), token);
    }

    #[test]
    fn test_go_back_on_empty_stack_is_noop() {
        let mut model = loaded();
        let before = model.listing().to_vec();
        let token = model.token();

        assert_eq!(model.go_back(), None);
        assert_eq!(model.listing(), before.as_slice());
        assert_eq!(model.token(), token);
    }

    #[test]
    fn test_go_back_requests_reload_and_replays() {
        let mut model = loaded();
        let titles = find(model.listing(), "Titles");
        model.enter_folder(&titles);

        let reload = model.go_back().unwrap();
        assert!(reload.path.is_empty());

        model.apply_scan(Ok(scan())).unwrap();
        assert_eq!(names(model.listing()), vec!["Titles", "Transitions", "readme.txt"]);
    }

    #[test]
    fn test_replay_truncates_at_missing_folder() {
        let mut model = loaded();
        model.go_to_path(vec![
            PathComponent::Folder("Gone".to_string()),
            PathComponent::Folder("Deeper".to_string()),
        ]);

        model.apply_scan(Ok(scan())).unwrap();
        assert!(model.stack().is_empty());
        assert_eq!(names(model.listing()), vec!["Titles", "Transitions", "readme.txt"]);
    }

    #[test]
    fn test_go_to_path_matches_manual_navigation() {
        let mut manual = loaded();
        let titles = find(manual.listing(), "Titles");
        manual.enter_folder(&titles);

        let mut jumped = loaded();
        jumped.go_to_root();
        jumped.go_to_path(manual.stack().to_vec());
        jumped.replace_tree(jumped.root().to_vec());

        assert_eq!(jumped.listing(), manual.listing());
        assert_eq!(jumped.current_path(), manual.current_path());
    }

    #[test]
    fn test_breadcrumbs() {
        let mut model = loaded();
        let titles = find(model.listing(), "Titles");
        model.enter_folder(&titles);
        let intro = find(model.listing(), "intro.aep");
        let request = model.project_request(&intro).unwrap();
        model.finish_project_request(request, Ok(contents())).unwrap();

        let crumbs = model.breadcrumbs();
        assert_eq!(crumbs.len(), 3);
        assert_eq!(crumbs[0].display_name, ROOT_CRUMB_LABEL);
        assert!(crumbs[0].prefix.is_empty());
        assert_eq!(crumbs[1].prefix, model.stack()[..1].to_vec());
        assert!(crumbs[2].is_project);
        assert_eq!(crumbs[2].display_name, "intro.aep");
    }

    #[test]
    fn test_project_request_only_for_project_files() {
        let mut model = loaded();
        let titles = find(model.listing(), "Titles");
        let readme = find(model.listing(), "readme.txt");

        assert_eq!(model.project_request(&titles), None);
        assert_eq!(model.project_request(&readme), None);
    }

    #[test]
    fn test_open_project_lists_sorted_pseudo_entries() {
        let mut model = loaded();
        let titles = find(model.listing(), "Titles");
        model.enter_folder(&titles);
        let intro = find(model.listing(), "intro.aep");

        let request = model.project_request(&intro).unwrap();
        let listing = model.finish_project_request(request, Ok(contents())).unwrap();

        assert_eq!(names(&listing.items), vec!["alt", "bg.png", "Main"]);
        assert_eq!(listing.path, "Titles/intro.aep");
        assert_eq!(model.open_project(), Some("/p/Titles/intro.aep"));
        assert!(matches!(
            &listing.items[0],
            Entry::Composition(c) if c.project_path == "/p/Titles/intro.aep"
        ));
    }

    #[test]
    fn test_failed_project_open_leaves_state() {
        let mut model = loaded();
        let titles = find(model.listing(), "Titles");
        model.enter_folder(&titles);
        let before = model.listing().to_vec();
        let intro = find(model.listing(), "intro.aep");

        let request = model.project_request(&intro).unwrap();
        let result = model.finish_project_request(request, Err(BridgeError::Unavailable));

        assert_eq!(result, Err(NavigationError::Bridge(BridgeError::Unavailable)));
        assert_eq!(model.listing(), before.as_slice());
        assert_eq!(model.current_path(), "Titles");
        assert_eq!(model.open_project(), None);
    }

    #[test]
    fn test_stale_project_contents_are_rejected() {
        let mut model = loaded();
        let titles = find(model.listing(), "Titles");
        model.enter_folder(&titles);
        let intro = find(model.listing(), "intro.aep");

        let request = model.project_request(&intro).unwrap();
        // User goes back before the host answers
        model.go_back();

        let result = model.finish_project_request(request, Ok(contents()));
        assert_eq!(result, Err(NavigationError::Superseded));
        assert!(model.stack().is_empty());
        assert_eq!(model.open_project(), None);
    }

    #[test]
    fn test_replay_reopens_trailing_project() {
        let mut model = loaded();
        let titles = find(model.listing(), "Titles");
        model.enter_folder(&titles);
        let intro = find(model.listing(), "intro.aep");
        let request = model.project_request(&intro).unwrap();
        model.finish_project_request(request, Ok(contents())).unwrap();

        let summary = model.apply_scan(Ok(scan())).unwrap();
        let pending = summary.pending_project.unwrap();
        assert_eq!(pending.path, "/p/Titles/intro.aep");
        assert_eq!(model.current_path(), "Titles");

        let listing = model.finish_project_request(pending, Ok(contents())).unwrap();
        assert_eq!(listing.path, "Titles/intro.aep");
    }

    #[test]
    fn test_go_back_out_of_project_clears_open_project() {
        let mut model = loaded();
        let titles = find(model.listing(), "Titles");
        model.enter_folder(&titles);
        let intro = find(model.listing(), "intro.aep");
        let request = model.project_request(&intro).unwrap();
        model.finish_project_request(request, Ok(contents())).unwrap();

        let reload = model.go_back().unwrap();
        assert_eq!(reload.path, vec![PathComponent::Folder("Titles".to_string())]);
        assert_eq!(model.open_project(), None);
    }

    #[test]
    fn test_selection() {
        let mut model = loaded();
        let titles = find(model.listing(), "Titles");
        let readme = find(model.listing(), "readme.txt");

        assert!(!model.select(&titles));
        assert!(model.select(&readme));
        assert_eq!(model.selected(), Some(&readme));

        model.enter_folder(&titles);
        assert_eq!(model.selected(), None);
    }

    #[test]
    fn test_project_from_search_opens_at_its_own_folder() {
        let mut model = loaded();
        let transitions = find(model.listing(), "Transitions");
        model.enter_folder(&transitions);
        let hit = model.search("intro").remove(0).entry;

        let reload = model.reveal_project(&hit).unwrap();
        assert_eq!(
            reload.path,
            vec![
                PathComponent::Folder("Titles".to_string()),
                PathComponent::Project {
                    name: "intro.aep".to_string(),
                    path: "/p/Titles/intro.aep".to_string(),
                },
            ]
        );

        let pending = model.apply_scan(Ok(scan())).unwrap().pending_project.unwrap();
        assert_eq!(model.current_path(), "Titles");
        let listing = model.finish_project_request(pending, Ok(contents())).unwrap();
        assert_eq!(listing.path, "Titles/intro.aep");
        assert_eq!(model.open_project(), Some("/p/Titles/intro.aep"));
    }

    #[test]
    fn test_root_project_reveals_at_root() {
        let mut model = FolderModel::new();
        let mut payload = scan();
        payload.files.push(FileRecord {
            name: "loose.aep".to_string(),
            path: "/p/loose.aep".to_string(),
            folder: Some(String::new()),
            ..Default::default()
        });
        model.apply_scan(Ok(payload)).unwrap();
        let titles = find(model.listing(), "Titles");
        let loose = find(model.listing(), "loose.aep");
        model.enter_folder(&titles);

        let reload = model.reveal_project(&loose).unwrap();
        assert_eq!(reload.path.len(), 1);
        assert!(reload.path[0].is_project());
        assert_eq!(model.reveal_project(&titles), None);
    }

    #[test]
    fn test_search_is_global() {
        let mut model = loaded();
        let titles = find(model.listing(), "Titles");
        model.enter_folder(&titles);

        let matches = model.search("whip");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].search_path, "Transitions/whip.ffx");
    }

    #[tokio::test]
    async fn test_enter_project_file_through_bridge() {
        let bridge = MockBridge::new();
        bridge.respond(
            GET_PROJECT_FILE_CONTENTS,
            r#"{"compositions": [{"name": "Main", "width": 1920, "height": 1080}], "footage": []}"#,
        );
        let client = HostClient::new(bridge);

        let mut model = loaded();
        let titles = find(model.listing(), "Titles");
        model.enter_folder(&titles);
        let intro = find(model.listing(), "intro.aep");

        let listing = model
            .enter_project_file(&intro, &client)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(names(&listing.items), vec!["Main"]);
        assert_eq!(
            client.bridge().calls(),
            vec![r#"getProjectFileContents("/p/Titles/intro.aep")"#.to_string()]
        );
    }
}
