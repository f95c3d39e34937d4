//! End-to-end flows: host bridge -> folder model -> favorites.

use projects_panel::core::bridge::MockBridge;
use projects_panel::core::bridge::procedures::{
    GET_PROJECT_FILE_CONTENTS, IMPORT_PROJECT_FILE, SCAN_FOLDER,
};
use projects_panel::core::{BridgeError, FavoritesStore, FolderModel, HostClient, NavigationError};
use projects_panel::models::{Entry, Notice, NoticeLevel, PathComponent};
use projects_panel::utils::MemoryStore;

const SCAN: &str = r#"{
    "files": [
        {"name": "intro.aep", "path": "/Projects/Titles/intro.aep", "type": "aep", "size": 2048, "folder": "Titles", "info": null},
        {"name": "intro.gif", "path": "/Projects/Titles/intro.gif", "type": "gif", "size": 512, "folder": "Titles", "info": null},
        {"name": "Whip%20Pan.ffx", "path": "/Projects/Transitions/Whip%20Pan.ffx", "type": "ffx", "size": 100, "folder": "Transitions", "info": null},
        {"name": "Titles.png", "path": "/Projects/Titles.png", "type": "png", "size": 10, "folder": "", "info": null},
        {"name": "B.aep", "path": "/Projects/B.aep", "type": "aep", "size": 1, "folder": "", "info": null},
        {"name": "a.aep", "path": "/Projects/a.aep", "type": "aep", "size": 1, "folder": "", "info": null}
    ],
    "folders": [
        {"name": "Titles", "path": "Titles", "info": null},
        {"name": "Transitions", "path": "Transitions", "info": null}
    ],
    "count": 6,
    "folderCount": 2
}"#;

const CONTENTS: &str = r#"{
    "compositions": [
        {"name": "Main", "width": 1920, "height": 1080, "duration": 10, "frameRate": 30, "numLayers": 4}
    ],
    "footage": [
        {"name": "bg.png", "width": 1920, "height": 1080, "duration": 0}
    ]
}"#;

fn client() -> HostClient<MockBridge> {
    let bridge = MockBridge::new();
    bridge.respond(SCAN_FOLDER, SCAN);
    bridge.respond(GET_PROJECT_FILE_CONTENTS, CONTENTS);
    HostClient::new(bridge)
}

fn find(entries: &[Entry], name: &str) -> Entry {
    entries
        .iter()
        .find(|e| e.display_name() == name)
        .cloned()
        .unwrap_or_else(|| panic!("{} not listed", name))
}

fn names(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(Entry::display_name).collect()
}

async fn scanned(client: &HostClient<MockBridge>) -> FolderModel {
    let mut model = FolderModel::new();
    model.apply_scan(client.scan_folder().await).unwrap();
    model
}

#[tokio::test]
async fn test_scan_builds_sorted_tree_with_previews() {
    let client = client();
    let model = scanned(&client).await;

    assert_eq!(names(model.listing()), vec!["Titles", "Transitions", "a.aep", "B.aep"]);

    let Entry::Folder(titles) = find(model.listing(), "Titles") else {
        panic!("Titles is not a folder");
    };
    assert_eq!(titles.preview_path.as_deref(), Some("/Projects/Titles.png"));
    assert_eq!(titles.children.len(), 1);
    let Entry::File(intro) = &titles.children[0] else {
        panic!("intro.aep is not a file");
    };
    assert_eq!(intro.video_preview_path.as_deref(), Some("/Projects/Titles/intro.gif"));
}

#[tokio::test]
async fn test_scan_error_keeps_listing_and_reports() {
    let client = client();
    let mut model = scanned(&client).await;
    let titles = find(model.listing(), "Titles");
    model.enter_folder(&titles);
    let before = model.listing().to_vec();

    client
        .bridge()
        .respond(SCAN_FOLDER, r#"{"error": "Projects folder not found"}"#);
    // Drain the successful response queued first
    let _ = client.scan_folder().await;

    let error = model.apply_scan(client.scan_folder().await).unwrap_err();
    assert_eq!(error, BridgeError::Host("Projects folder not found".to_string()));
    assert_eq!(model.listing(), before.as_slice());

    let notice = Notice::failure(&error);
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Error: Projects folder not found");
}

#[tokio::test]
async fn test_open_project_then_back_and_replay() {
    let client = client();
    let mut model = scanned(&client).await;
    let titles = find(model.listing(), "Titles");
    model.enter_folder(&titles);
    let intro = find(model.listing(), "intro.aep");

    let listing = model
        .enter_project_file(&intro, &client)
        .await
        .expect("intro.aep is a project file")
        .unwrap();
    assert_eq!(names(&listing.items), vec!["bg.png", "Main"]);
    assert_eq!(model.breadcrumbs().len(), 3);

    let reload = model.go_back().unwrap();
    assert_eq!(reload.path, vec![PathComponent::Folder("Titles".to_string())]);
    assert_eq!(model.open_project(), None);

    let summary = model.apply_scan(client.scan_folder().await).unwrap();
    assert_eq!(summary.pending_project, None);
    assert_eq!(names(model.listing()), vec!["intro.aep"]);
}

#[tokio::test]
async fn test_rescan_inside_project_reopens_it() {
    let client = client();
    let mut model = scanned(&client).await;
    let titles = find(model.listing(), "Titles");
    model.enter_folder(&titles);
    let intro = find(model.listing(), "intro.aep");
    model.enter_project_file(&intro, &client).await.unwrap().unwrap();

    let summary = model.apply_scan(client.scan_folder().await).unwrap();
    let request = summary.pending_project.expect("project marker replayed");
    let contents = client.project_contents(&request.path).await;
    let listing = model.finish_project_request(request, contents).unwrap();

    assert_eq!(listing.path, "Titles/intro.aep");
    assert_eq!(model.open_project(), Some("/Projects/Titles/intro.aep"));
}

#[tokio::test]
async fn test_late_project_contents_are_ignored() {
    let client = client();
    let mut model = scanned(&client).await;
    let intro_root = find(model.listing(), "a.aep");

    let request = model.project_request(&intro_root).unwrap();
    let transitions = find(model.listing(), "Transitions");
    model.enter_folder(&transitions);

    let contents = client.project_contents(&request.path).await;
    assert_eq!(
        model.finish_project_request(request, contents),
        Err(NavigationError::Superseded)
    );
    assert_eq!(model.current_path(), "Transitions");
    assert_eq!(names(model.listing()), vec!["Whip Pan.ffx"]);
}

#[tokio::test]
async fn test_breadcrumb_jump_matches_direct_navigation() {
    let client = client();
    let mut direct = scanned(&client).await;
    let titles = find(direct.listing(), "Titles");
    direct.enter_folder(&titles);

    let mut jumped = scanned(&client).await;
    jumped.go_to_root();
    let crumb = direct.breadcrumbs().pop().unwrap();
    jumped.go_to_path(crumb.prefix);
    jumped.apply_scan(client.scan_folder().await).unwrap();

    assert_eq!(jumped.listing(), direct.listing());
    assert_eq!(jumped.breadcrumbs(), direct.breadcrumbs());
}

#[tokio::test]
async fn test_search_and_favorites_survive_rescan() {
    let client = client();
    let model = scanned(&client).await;

    assert!(model.search("").is_empty());
    let hits = model.search("whip");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].search_path, "Transitions/Whip Pan.ffx");

    let store = MemoryStore::new();
    let mut favorites = FavoritesStore::load(store.clone());
    assert!(favorites.toggle(&hits[0].entry));

    // A fresh scan and a fresh store handle still see the favorite
    let rescanned = scanned(&client).await;
    let favorites_again = FavoritesStore::load(store);
    let rehits = rescanned.search("whip");
    let hit = &rehits[0].entry;
    assert!(favorites_again.is_favorited(hit));
    assert_eq!(favorites_again.list(), vec![hits[0].entry.clone()]);

    assert!(!favorites.toggle(&hits[0].entry));
    assert!(!favorites.is_favorited(hit));
}

#[tokio::test]
async fn test_host_failure_is_shown_once_prefixed() {
    let client = client();
    client
        .bridge()
        .respond(IMPORT_PROJECT_FILE, "Error: File not found - /x.aep");

    let error = client.import_project_file("/x.aep").await.unwrap_err();
    let notice = Notice::failure(&error);
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Error: File not found - /x.aep");
}

#[tokio::test]
async fn test_project_from_favorites_opens_under_its_folder() {
    let client = client();
    let mut model = scanned(&client).await;
    let titles = find(model.listing(), "Titles");
    let intro = find(titles.children(), "intro.aep");

    let mut favorites = FavoritesStore::load(MemoryStore::new());
    favorites.toggle(&intro);
    let transitions = find(model.listing(), "Transitions");
    model.enter_folder(&transitions);

    let favorite = favorites.list().remove(0);
    model.reveal_project(&favorite).unwrap();
    let pending = model
        .apply_scan(client.scan_folder().await)
        .unwrap()
        .pending_project
        .unwrap();
    let listing = model
        .finish_project_request(pending, client.project_contents("/Projects/Titles/intro.aep").await)
        .unwrap();

    assert_eq!(listing.path, "Titles/intro.aep");
    assert_eq!(names(&listing.items), vec!["bg.png", "Main"]);
    assert_eq!(
        model.stack()[0],
        PathComponent::Folder("Titles".to_string())
    );
}
