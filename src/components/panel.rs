//! Projects panel.
//!
//! Toolbar with navigation and search, breadcrumb trail, the current
//! listing (or search results, or favorites), a details pane for the
//! selected entry and a transient toast.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::{InFlight, PanelState};
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::core::{actions_for, favorite_id};
use crate::models::{Entry, NoticeLevel};
use crate::utils::format_file_size;

stylance::import_crate_style!(css, "src/components/panel.module.css");

/// A listed entry plus where it lives, for search hits.
#[derive(Clone, Debug, PartialEq)]
struct Row {
    entry: Entry,
    location: Option<String>,
}

impl Row {
    fn plain(entry: Entry) -> Self {
        Self {
            entry,
            location: None,
        }
    }
}

/// Secondary text under an entry's name.
fn entry_meta(entry: &Entry) -> String {
    match entry {
        Entry::File(file) => format!(
            "{} • {}",
            file.file_type.to_uppercase(),
            format_file_size(file.size)
        ),
        Entry::Folder(_) => "Folder".to_string(),
        Entry::Composition(comp) => comp.summary(),
        Entry::Footage(footage) => footage.summary(),
    }
}

/// URL for a local media file.
fn media_src(path: &str) -> String {
    let path = path.replace('\\', "/");
    if path.starts_with('/') {
        format!("file://{}", path)
    } else {
        format!("file:///{}", path)
    }
}

#[component]
pub fn Panel() -> impl IntoView {
    let state = use_context::<PanelState>().expect("PanelState must be provided");

    view! {
        <div class=css::panel>
            <Toolbar />
            <Breadcrumbs />
            <div class=css::body>
                <EntryList />
                <Details />
            </div>
            <Show when=move || state.loading.with(InFlight::is_busy)>
                <div class=css::loading>"Loading…"</div>
            </Show>
            <Toast />
        </div>
    }
}

// =============================================================================
// Toolbar
// =============================================================================

#[component]
fn Toolbar() -> impl IntoView {
    let state = use_context::<PanelState>().expect("PanelState must be provided");

    let at_root = Signal::derive(move || state.model.with(|m| m.stack().is_empty()));
    let favorites_count = Signal::derive(move || state.favorites.with(|f| f.count()));
    let showing_favorites = state.showing_favorites;

    view! {
        <header class=css::toolbar>
            <span class=css::title>{APP_NAME}</span>
            <button
                class=css::iconButton
                title="Back"
                disabled=move || at_root.get()
                on:click=move |_| state.go_back()
            >
                <Icon icon=ic::BACK />
            </button>
            <button class=css::iconButton title="Projects root" on:click=move |_| state.go_to_root()>
                <Icon icon=ic::HOME />
            </button>
            <button class=css::iconButton title="Refresh" on:click=move |_| state.refresh(true)>
                <Icon icon=ic::REFRESH />
            </button>
            <button
                class=css::iconButton
                class:active=move || showing_favorites.get()
                title="Favorites"
                on:click=move |_| showing_favorites.update(|s| *s = !*s)
            >
                <Icon icon=ic::STAR_FILLED />
                <span class=css::badge>{move || favorites_count.get()}</span>
            </button>
            <label class=css::search>
                <Icon icon=ic::SEARCH />
                <input
                    type="text"
                    placeholder="Search all projects"
                    prop:value=move || state.query.get()
                    on:input=move |ev| state.query.set(event_target_value(&ev))
                />
                <Show when=move || !state.query.get().is_empty()>
                    <button
                        class=css::iconButton
                        title="Clear search"
                        on:click=move |_| state.query.set(String::new())
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </Show>
            </label>
        </header>
    }
}

// =============================================================================
// Breadcrumbs
// =============================================================================

#[component]
fn Breadcrumbs() -> impl IntoView {
    let state = use_context::<PanelState>().expect("PanelState must be provided");

    view! {
        <nav class=css::breadcrumbs aria-label="Location">
            {move || {
                state
                    .model
                    .with(|m| m.breadcrumbs())
                    .into_iter()
                    .map(|crumb| {
                        let prefix = crumb.prefix.clone();
                        view! {
                            <button
                                class=css::crumb
                                class:project=crumb.is_project
                                on:click=move |_| state.go_to_path(prefix.clone())
                            >
                                {crumb.display_name}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}

// =============================================================================
// Listing
// =============================================================================

#[component]
fn EntryList() -> impl IntoView {
    let state = use_context::<PanelState>().expect("PanelState must be provided");

    let rows = Signal::derive(move || {
        let query = state.query.get();
        if !query.trim().is_empty() {
            state
                .model
                .with(|m| m.search(&query))
                .into_iter()
                .map(|hit| Row {
                    entry: hit.entry,
                    location: Some(hit.search_path).filter(|p| !p.is_empty()),
                })
                .collect::<Vec<_>>()
        } else if state.showing_favorites.get() {
            state
                .favorites
                .with(|f| f.list())
                .into_iter()
                .map(Row::plain)
                .collect()
        } else {
            state
                .model
                .with(|m| m.listing().to_vec())
                .into_iter()
                .map(Row::plain)
                .collect()
        }
    });

    let empty_message = move || {
        if !state.query.get().trim().is_empty() {
            "No matches"
        } else if state.showing_favorites.get() {
            "No favorites yet"
        } else {
            "This folder is empty"
        }
    };

    view! {
        <div class=css::list role="list">
            <Show when=move || state.showing_favorites.get() && !rows.with(Vec::is_empty)>
                <button class=css::clearFavorites on:click=move |_| state.clear_favorites()>
                    <Icon icon=ic::CLEAR />
                    " Clear favorites"
                </button>
            </Show>
            <Show
                when=move || !rows.with(Vec::is_empty)
                fallback=move || view! { <p class=css::empty>{empty_message}</p> }
            >
                <For
                    each=move || rows.get()
                    key=|row| row.entry.key()
                    children=move |row| view! { <EntryRow row=row /> }
                />
            </Show>
        </div>
    }
}

#[component]
fn EntryRow(row: Row) -> impl IntoView {
    let state = use_context::<PanelState>().expect("PanelState must be provided");

    let entry = row.entry;
    let key = entry.key();
    let icon = ic::for_entry(&entry);
    let name = entry.display_name().to_string();
    let meta = row.location.unwrap_or_else(|| entry_meta(&entry));
    let favoritable = favorite_id(&entry).is_some();

    let is_selected = {
        let key = key.clone();
        Signal::derive(move || {
            state
                .model
                .with(|m| m.selected().is_some_and(|s| s.key() == key))
        })
    };
    let is_favorited = {
        let entry = entry.clone();
        Signal::derive(move || state.favorites.with(|f| f.is_favorited(&entry)))
    };

    let on_open = {
        let entry = entry.clone();
        move |_: leptos::ev::MouseEvent| state.open(&entry)
    };
    let on_favorite = {
        let entry = entry.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            state.toggle_favorite(&entry);
        }
    };

    let actions = actions_for(&entry)
        .iter()
        .map(|&action| {
            let entry = entry.clone();
            view! {
                <button
                    class=css::action
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        state.run_action(action, entry.clone());
                    }
                >
                    {action.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class=css::row class:selected=move || is_selected.get() role="listitem" on:click=on_open>
            <span class=css::rowIcon>
                <Icon icon=icon />
            </span>
            <div class=css::rowText>
                <span class=css::rowName>{name}</span>
                <span class=css::rowMeta>{meta}</span>
            </div>
            <div class=css::rowActions>
                {actions}
                <Show when=move || favoritable>
                    <button
                        class=css::iconButton
                        title="Favorite"
                        on:click=on_favorite.clone()
                    >
                        {move || {
                            let icon = if is_favorited.get() { ic::STAR_FILLED } else { ic::STAR };
                            view! { <Icon icon=icon /> }
                        }}
                    </button>
                </Show>
            </div>
        </div>
    }
}

// =============================================================================
// Details
// =============================================================================

#[component]
fn Details() -> impl IntoView {
    let state = use_context::<PanelState>().expect("PanelState must be provided");

    let selected = Signal::derive(move || state.model.with(|m| m.selected().cloned()));

    view! {
        <aside class=css::details>
            {move || match selected.get() {
                None => view! { <p class=css::empty>"Select an item to preview"</p> }.into_any(),
                Some(entry) => {
                    let (preview, motion) = match &entry {
                        Entry::File(file) => {
                            (file.preview_path.clone(), file.video_preview_path.clone())
                        }
                        Entry::Folder(folder) => (folder.preview_path.clone(), None),
                        _ => (None, None),
                    };
                    let path = match &entry {
                        Entry::File(file) => Some(file.path.clone()),
                        _ => None,
                    };
                    let details = state.details.get().filter(|(p, _)| Some(p) == path.as_ref());

                    view! {
                        <div class=css::previewBox>
                            {match (motion, preview) {
                                (Some(motion), _) if motion.ends_with(".mp4") => view! {
                                    <video src=media_src(&motion) autoplay=true muted=true />
                                }.into_any(),
                                (Some(motion), _) => view! { <img src=media_src(&motion) alt="" /> }.into_any(),
                                (None, Some(still)) => view! { <img src=media_src(&still) alt="" /> }.into_any(),
                                (None, None) => view! { <Icon icon=ic::for_entry(&entry) /> }.into_any(),
                            }}
                        </div>
                        <h2 class=css::detailsName>{entry.display_name().to_string()}</h2>
                        <p class=css::rowMeta>{entry_meta(&entry)}</p>
                        {details.map(|(_, details)| view! {
                            <dl class=css::detailsStats>
                                <dt>"Items"</dt><dd>{details.num_items}</dd>
                                <dt>"Compositions"</dt><dd>{details.num_comps}</dd>
                                <dt>"Footage"</dt><dd>{details.num_footage}</dd>
                            </dl>
                        })}
                    }
                    .into_any()
                }
            }}
        </aside>
    }
}

// =============================================================================
// Toast
// =============================================================================

#[component]
fn Toast() -> impl IntoView {
    let state = use_context::<PanelState>().expect("PanelState must be provided");

    view! {
        {move || {
            state.notice.get().map(|notice| {
                let level = match notice.level {
                    NoticeLevel::Info => css::info,
                    NoticeLevel::Success => css::success,
                    NoticeLevel::Error => css::error,
                };
                view! {
                    <div class=format!("{} {}", css::toast, level) role="status">
                        {notice.message}
                    </div>
                }
            })
        }}
    }
}
