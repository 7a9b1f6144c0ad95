use std::path::PathBuf;

use crate::model::ids::ProjectId;

/// Named image slot the content refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKey {
    ProfilePicture,
    ProjectPicture(ProjectId),
}

impl AssetKey {
    /// File name looked up in the assets directory.
    #[must_use]
    pub fn file_name(self) -> String {
        match self {
            AssetKey::ProfilePicture => "profile.jpg".to_string(),
            AssetKey::ProjectPicture(id) => format!("project_{}.jpg", id.number()),
        }
    }

    #[must_use]
    pub fn caption(self) -> String {
        match self {
            AssetKey::ProfilePicture => "Profile Picture".to_string(),
            AssetKey::ProjectPicture(id) => format!("Project {}", id.number()),
        }
    }
}

/// Stand-in shown where an image file is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub icon: &'static str,
    pub caption: String,
    pub hint: String,
}

impl Placeholder {
    #[must_use]
    pub fn for_key(key: AssetKey) -> Self {
        Self {
            icon: "🧬",
            caption: key.caption(),
            hint: format!("Add your {} to the assets folder", key.file_name()),
        }
    }
}

/// What an image slot renders: the file, or a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Asset { path: PathBuf, caption: String },
    Placeholder(Placeholder),
}

impl ImageSource {
    #[must_use]
    pub fn asset(key: AssetKey, path: PathBuf) -> Self {
        ImageSource::Asset {
            path,
            caption: key.caption(),
        }
    }

    #[must_use]
    pub fn placeholder_for(key: AssetKey) -> Self {
        ImageSource::Placeholder(Placeholder::for_key(key))
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImageSource::Placeholder(_))
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        match self {
            ImageSource::Asset { caption, .. } => caption,
            ImageSource::Placeholder(p) => &p.caption,
        }
    }
}
