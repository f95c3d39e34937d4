//! Navigation position and breadcrumb types.

/// One level of the navigation stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathComponent {
    /// A folder, by display name
    Folder(String),
    /// An opened project file acting as a virtual folder
    Project { name: String, path: String },
}

impl PathComponent {
    pub fn display_name(&self) -> &str {
        match self {
            PathComponent::Folder(name) => name,
            PathComponent::Project { name, .. } => name,
        }
    }

    pub fn is_project(&self) -> bool {
        matches!(self, PathComponent::Project { .. })
    }
}

/// Join a stack into a slash-separated display path.
pub fn join_components(components: &[PathComponent]) -> String {
    components
        .iter()
        .map(PathComponent::display_name)
        .collect::<Vec<_>>()
        .join("/")
}

/// A crumb in the breadcrumb trail.
///
/// Activating a crumb navigates to `prefix` via `FolderModel::go_to_path`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    pub display_name: String,
    /// Stack up to and including this crumb (empty for the root crumb)
    pub prefix: Vec<PathComponent>,
    pub is_project: bool,
}
