// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding and sorting gallery images.
//!
//! This module scans a directory for supported image formats and sorts them
//! according to the configured sort order. The result is the fixed thumbnail
//! list a gallery is bound to.

use crate::config::SortOrder;
use crate::domain::gallery::ImageSource;
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Image extensions the gallery can display (lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "ico", "tiff", "tif",
];

/// Ordered list of image files found in one directory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageList {
    directory: PathBuf,
    images: Vec<PathBuf>,
}

impl ImageList {
    /// Scans `directory` (non-recursively) for supported images and sorts them.
    ///
    /// Returns an error if the directory cannot be read.
    pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Self> {
        let mut images = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_supported_image(&path) {
                images.push(path);
            }
        }

        sort_image_files(&mut images, sort_order);
        tracing::debug!(
            directory = %directory.display(),
            count = images.len(),
            ?sort_order,
            "scanned directory"
        );

        Ok(Self {
            directory: directory.to_path_buf(),
            images,
        })
    }

    /// Directory this list was scanned from.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Returns the total number of images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Checks if no image was found.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Image sources in list order.
    pub fn sources(&self) -> Vec<ImageSource> {
        self.images.iter().cloned().map(ImageSource::from).collect()
    }
}

/// Checks if a file has a supported image extension (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Sorts a list of image paths according to the specified sort order.
fn sort_image_files(images: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            images.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH)
            });
        }
        SortOrder::CreatedDate => {
            images.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(SystemTime::UNIX_EPOCH)
            });
        }
    }
}
