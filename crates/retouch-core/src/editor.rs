//! Image editing state machine.
//!
//! An [`ImageProcessor`] owns three images and two history stacks:
//!
//! - `source`: the originally decoded file, untouched after load
//! - `base`: the working image that destructive edits replace
//! - `preview`: the displayed image, derived from `base` plus the current
//!   [`FilterSettings`] and overwritten on every recompute
//!
//! Destructive edits (rotate, flip, edge detection) snapshot `base` onto
//! the undo stack before applying; slider adjustments only ever touch the
//! preview. Every stored snapshot is an independent deep copy, so later
//! edits cannot corrupt history entries.

use std::path::Path;

use log::debug;

use crate::decoders;
use crate::error::EditorError;
use crate::exporters;
use crate::image::Image;
use crate::models::FilterSettings;
use crate::pipeline;
use crate::transforms::{self, FlipAxis};

/// Owns the loaded image, the rendered preview, and the linear undo/redo
/// history over destructive edits.
#[derive(Debug, Default)]
pub struct ImageProcessor {
    /// The originally loaded image; replaced only by the next load
    source: Option<Image>,

    /// The working image after zero or more destructive edits
    base: Option<Image>,

    /// The last rendered preview
    preview: Option<Image>,

    /// Prior base snapshots, most recent last
    undo_stack: Vec<Image>,

    /// Snapshots popped by undo, most recent last
    redo_stack: Vec<Image>,
}

impl ImageProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an image file and make it the new source.
    ///
    /// The file is decoded completely before any state changes, so a
    /// failed decode leaves the previous image and history intact. On
    /// success the history is cleared and the preview starts as a copy of
    /// the new base.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<&Image, EditorError> {
        let decoded = decoders::decode_image(path.as_ref())?;
        debug!(
            "loaded {}x{} image from {}",
            decoded.width(),
            decoded.height(),
            path.as_ref().display()
        );
        Ok(self.load_image(decoded))
    }

    /// Make an already-decoded image the new source.
    ///
    /// Entry point for shells that decode themselves (clipboard paste,
    /// drag-and-drop byte buffers). Same state reset as [`Self::load`].
    pub fn load_image(&mut self, image: Image) -> &Image {
        self.source = Some(image.clone());
        self.preview = Some(image.clone());
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.base.insert(image)
    }

    /// Encode the current preview (or the base image when no preview has
    /// been rendered yet) to the given path. Alters no state.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), EditorError> {
        let image = self
            .preview
            .as_ref()
            .or(self.base.as_ref())
            .ok_or(EditorError::NoImage)?;
        exporters::encode_image(image, path)
    }

    /// Discard every destructive edit, restoring the base image to a copy
    /// of the original file and clearing the history.
    pub fn revert_to_original(&mut self) -> Result<&Image, EditorError> {
        let source = self.source.clone().ok_or(EditorError::NoImage)?;
        debug!("reverting to original image");
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.preview = Some(source.clone());
        Ok(self.base.insert(source))
    }

    /// Rotate the base image 90 degrees clockwise. Dimensions swap.
    pub fn rotate_90_cw(&mut self) -> Result<&Image, EditorError> {
        debug!("rotating base image 90 degrees clockwise");
        self.commit_edit(transforms::rotate_90_cw)
    }

    /// Mirror the base image along the requested axis.
    pub fn flip(&mut self, axis: FlipAxis) -> Result<&Image, EditorError> {
        debug!("flipping base image: {:?}", axis);
        self.commit_edit(|image| transforms::flip(image, axis))
    }

    /// Replace the base image with its binary edge map.
    pub fn detect_edges(&mut self) -> Result<&Image, EditorError> {
        debug!("applying edge detection to base image");
        self.commit_edit(transforms::detect_edges)
    }

    /// Step back one destructive edit.
    ///
    /// Returns `Ok(None)` when there is nothing to undo; that is an
    /// informational no-op, not an error, and the base image is left
    /// unchanged.
    pub fn undo(&mut self) -> Result<Option<&Image>, EditorError> {
        if self.base.is_none() {
            return Err(EditorError::NoImage);
        }
        let Some(snapshot) = self.undo_stack.pop() else {
            debug!("undo requested with empty history");
            return Ok(None);
        };
        if let Some(current) = self.base.replace(snapshot) {
            self.redo_stack.push(current);
        }
        Ok(self.base.as_ref())
    }

    /// Reapply the most recently undone edit.
    ///
    /// Returns `Ok(None)` when there is nothing to redo.
    pub fn redo(&mut self) -> Result<Option<&Image>, EditorError> {
        if self.base.is_none() {
            return Err(EditorError::NoImage);
        }
        let Some(snapshot) = self.redo_stack.pop() else {
            debug!("redo requested with empty redo history");
            return Ok(None);
        };
        if let Some(current) = self.base.replace(snapshot) {
            self.undo_stack.push(current);
        }
        Ok(self.base.as_ref())
    }

    /// Recompute the preview from the base image and the given settings.
    ///
    /// Always renders from scratch; the base image and the history are
    /// never touched.
    pub fn render_preview(&mut self, settings: &FilterSettings) -> Result<&Image, EditorError> {
        let base = self.base.as_ref().ok_or(EditorError::NoImage)?;
        let rendered = pipeline::render_preview(base, settings);
        Ok(self.preview.insert(rendered))
    }

    /// True once an image has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.base.is_some()
    }

    /// The current working image, if any.
    pub fn base_image(&self) -> Option<&Image> {
        self.base.as_ref()
    }

    /// The most recently rendered preview, if any.
    pub fn preview_image(&self) -> Option<&Image> {
        self.preview.as_ref()
    }

    /// True when a destructive edit can be undone.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// True when an undone edit can be reapplied.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Snapshot the base image onto the undo stack, clear the redo stack,
    /// and replace the base with the transformed image. Every destructive
    /// operation goes through here.
    fn commit_edit<F>(&mut self, transform: F) -> Result<&Image, EditorError>
    where
        F: FnOnce(&Image) -> Image,
    {
        let current = self.base.take().ok_or(EditorError::NoImage)?;
        self.undo_stack.push(current.clone());
        self.redo_stack.clear();
        Ok(self.base.insert(transform(&current)))
    }
}
