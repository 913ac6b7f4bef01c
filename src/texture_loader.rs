use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::error::{Result, SlidedeckError};

const SLIDE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

pub fn is_slide_file(path: &Path) -> bool {
    SLIDE_EXTENSIONS.contains(&extension_of(path).as_str())
}

/// Slide files of `dir`, in file-name order.
pub fn load_sorted_slide_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| SlidedeckError::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| SlidedeckError::io(dir, e))?.path();
        if path.is_file() && is_slide_file(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(SlidedeckError::NoSlides(dir.to_path_buf()))
    } else {
        Ok(paths)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Clockwise,
    Half,
    CounterClockwise,
}

/// EXIF orientation 3, 6 and 8; the mirrored variants are left as is.
pub fn rotation_for_orientation(orientation: u16) -> Rotation {
    match orientation {
        3 => Rotation::Half,
        6 => Rotation::Clockwise,
        8 => Rotation::CounterClockwise,
        _ => Rotation::None,
    }
}

fn read_orientation(path: &Path, bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            debug!("no EXIF orientation for {}: {e}", path.display());
            1
        }
    }
}

pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D> {
    let bytes = fs::read(path).map_err(|e| SlidedeckError::io(path, e))?;
    let extension = extension_of(path);

    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(path, &bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &bytes).map_err(|e| {
        SlidedeckError::Image {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    match rotation_for_orientation(orientation) {
        Rotation::Half => {
            image.rotate_cw();
            image.rotate_cw();
        }
        Rotation::Clockwise => image.rotate_cw(),
        Rotation::CounterClockwise => image.rotate_ccw(),
        Rotation::None => {}
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| SlidedeckError::Image {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Unreadable slides are skipped with a warning.
pub fn load_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    paths: Vec<PathBuf>,
) -> Vec<(PathBuf, Texture2D)> {
    let mut textures = Vec::with_capacity(paths.len());
    for path in paths {
        match load_texture_with_exif_rotation(rl, thread, &path) {
            Ok(texture) => textures.push((path, texture)),
            Err(e) => warn!("skipping slide: {e}"),
        }
    }
    textures
}
