//! The single project detail modal.

use zeta_ui::{BodyLock, CarouselState, ModalState, Restore};

/// Modal lifecycle plus the thumbnail selection of the project it shows.
///
/// The thumbnail strip is a select-only carousel: it never wraps, it just
/// marks which thumbnail feeds the main image.
#[derive(Debug, Clone)]
pub struct ProjectModal<F> {
    state: ModalState<usize, F>,
    thumbs: CarouselState,
    enabled: bool,
}

impl<F> Default for ProjectModal<F> {
    fn default() -> Self {
        Self {
            state: ModalState::new(),
            thumbs: CarouselState::new(0),
            enabled: true,
        }
    }
}

impl<F> ProjectModal<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A modal for a page without one: it never opens.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Store index of the project on display.
    pub fn current(&self) -> Option<usize> {
        self.state.content().copied()
    }

    pub fn thumbs(&self) -> &CarouselState {
        &self.thumbs
    }

    pub fn locked_offset(&self) -> Option<i32> {
        self.state.locked_offset()
    }

    /// Show `project` with `image_count` thumbnails, selection back on the first.
    ///
    /// Returns the body lock to apply when the modal was closed before.
    pub fn open(
        &mut self,
        project: usize,
        image_count: usize,
        focused: Option<F>,
        scroll_offset: i32,
    ) -> Option<BodyLock> {
        if !self.enabled {
            return None;
        }
        self.thumbs = CarouselState::new(image_count);
        let lock = self.state.open(project, focused, scroll_offset);
        log::debug!("🪟 Modal opened on project {}", project);
        lock
    }

    /// Select thumbnail `index` as the main image.
    pub fn select_thumbnail(&mut self, index: usize) -> Option<usize> {
        if !self.state.is_open() {
            return None;
        }
        self.thumbs.goto(index)
    }

    pub fn close(&mut self) -> Option<Restore<F>> {
        let restore = self.state.close();
        if restore.is_some() {
            log::debug!("🪟 Modal closed");
        }
        restore
    }
}
