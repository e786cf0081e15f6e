//! Image link resolution against the image directory.

use crate::error::{Error, Result};
use crate::parser;
use std::path::{Component, Path, PathBuf};

/// Outcome of resolving one image link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The file exists at this path.
    Found(PathBuf),
    /// The path is well-formed but nothing is there.
    Missing {
        /// Link target with the prefix removed
        remainder: String,
        /// Where the file was looked for
        path: PathBuf,
    },
    /// The remainder would leave the image directory.
    Invalid {
        /// Link target with the prefix removed
        remainder: String,
    },
}

impl Resolution {
    /// The resolved path, when the file exists.
    pub fn found(&self) -> Option<&Path> {
        match self {
            Resolution::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// Maps report-relative image links onto files under a base directory.
#[derive(Debug, Clone, Copy)]
pub struct AssetResolver<'a> {
    image_dir: &'a Path,
    prefix: &'a str,
}

impl<'a> AssetResolver<'a> {
    /// Create a resolver for `image_dir`, stripping `prefix` from link targets.
    pub fn new(image_dir: &'a Path, prefix: &'a str) -> Self {
        Self { image_dir, prefix }
    }

    /// The base directory.
    pub fn image_dir(&self) -> &Path {
        self.image_dir
    }

    /// Resolve a raw link target such as `./images/reorder/chart.png`.
    pub fn resolve_target(&self, target: &str) -> Resolution {
        let remainder = parser::strip_image_prefix(target, self.prefix);
        self.resolve_relative(remainder)
    }

    /// Resolve a path already relative to the image directory.
    pub fn resolve_relative(&self, remainder: &str) -> Resolution {
        let path = match join_asset_path(self.image_dir, remainder) {
            Ok(path) => path,
            Err(_) => {
                log::warn!("Rejected image path outside image directory: {}", remainder);
                return Resolution::Invalid {
                    remainder: remainder.to_string(),
                };
            }
        };

        if path.is_file() {
            log::debug!("Resolved image {} -> {}", remainder, path.display());
            Resolution::Found(path)
        } else {
            log::warn!("Image not found: {}", path.display());
            Resolution::Missing {
                remainder: remainder.to_string(),
                path,
            }
        }
    }
}

/// Join a relative path onto `base` after checking it stays inside `base`.
///
/// Only normal segments and `.` are accepted. Empty paths, `..`, absolute
/// paths and drive prefixes are rejected with [`Error::InvalidAssetPath`].
pub fn join_asset_path(base: &Path, remainder: &str) -> Result<PathBuf> {
    let relative = Path::new(remainder);
    let mut normal_segments = 0usize;

    for component in relative.components() {
        match component {
            Component::Normal(_) => normal_segments += 1,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(Error::InvalidAssetPath(remainder.to_string()));
            }
        }
    }

    if normal_segments == 0 {
        return Err(Error::InvalidAssetPath(remainder.to_string()));
    }

    Ok(base.join(relative))
}
