//! Global substring search over the scanned tree.

use crate::models::{Entry, is_preview_only};

/// A search hit annotated with where it lives.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchMatch {
    pub entry: Entry,
    /// Slash-joined ancestor display names ending with the match itself;
    /// empty for root-level matches
    pub search_path: String,
}

/// Case-insensitive substring search on display names.
///
/// Always walks the whole tree from `root`, in traversal order. A blank
/// query matches nothing.
pub fn search(query: &str, root: &[Entry]) -> Vec<SearchMatch> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    let mut ancestors = Vec::new();
    collect(&needle, root, &mut ancestors, &mut matches);
    matches
}

fn collect<'a>(
    needle: &str,
    entries: &'a [Entry],
    ancestors: &mut Vec<&'a str>,
    matches: &mut Vec<SearchMatch>,
) {
    for entry in entries {
        if entry.file_type().is_some_and(is_preview_only) {
            continue;
        }

        if entry.display_name().to_lowercase().contains(needle) {
            let search_path = if ancestors.is_empty() {
                String::new()
            } else {
                let mut parts = ancestors.clone();
                parts.push(entry.display_name());
                parts.join("/")
            };
            matches.push(SearchMatch {
                entry: entry.clone(),
                search_path,
            });
        }

        // Folder hits still descend
        if !entry.children().is_empty() {
            ancestors.push(entry.display_name());
            collect(needle, entry.children(), ancestors, matches);
            ancestors.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileEntry, FolderEntry};

    fn file(name: &str) -> Entry {
        Entry::File(FileEntry {
            name: name.to_string(),
            display_name: name.to_string(),
            path: format!("/x/{}", name),
            file_type: name.rsplit_once('.').map(|(_, e)| e).unwrap_or_default().to_string(),
            ..Default::default()
        })
    }

    fn folder(name: &str, children: Vec<Entry>) -> Entry {
        Entry::Folder(FolderEntry {
            name: name.to_string(),
            display_name: name.to_string(),
            path: name.to_string(),
            children,
            ..Default::default()
        })
    }

    fn tree() -> Vec<Entry> {
        vec![
            folder(
                "Titles",
                vec![file("Lower Third.aep"), file("title card.jsx")],
            ),
            folder("Transitions", vec![file("Whip.ffx")]),
            file("Title Intro.aep"),
        ]
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        assert!(search("", &tree()).is_empty());
        assert!(search("   \t", &tree()).is_empty());
        assert!(search("", &[]).is_empty());
    }

    #[test]
    fn test_case_insensitive_and_global() {
        let matches = search("TITLE", &tree());
        let names: Vec<_> = matches.iter().map(|m| m.entry.display_name()).collect();
        // Traversal order, folder hit does not stop descent
        assert_eq!(names, vec!["Titles", "title card.jsx", "Title Intro.aep"]);
    }

    #[test]
    fn test_search_path_annotation() {
        let matches = search("whip", &tree());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].search_path, "Transitions/Whip.ffx");

        let matches = search("intro", &tree());
        assert_eq!(matches[0].search_path, "");
    }

    #[test]
    fn test_preview_only_media_never_match() {
        let root = vec![folder("Titles", vec![file("intro.gif"), file("intro.aep")]), file("intro.PNG")];
        let matches = search("intro", &root);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].entry.display_name(), "intro.aep");
    }
}
