#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// One portfolio project entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Deferred image path, promoted to `src` when the card scrolls in.
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub featured: bool,
    pub link: &'static str,
}

/// Which subset of the project list is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Featured,
}

impl ProjectFilter {
    /// The label shown on the filter button.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Featured => "Featured",
        }
    }

    /// Whether a project is visible under this filter.
    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Featured => project.featured,
        }
    }
}
