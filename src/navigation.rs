use tracing::debug;

use crate::input::Intent;
use crate::position::PositionStore;

/// Capability the controller needs from a displayable slide: flip its
/// visible marker. The controller never creates or destroys slides.
pub trait SlideSurface {
    fn activate(&mut self);
    fn deactivate(&mut self);
}

pub struct Presentation<S, P> {
    slides: Vec<S>,
    current_index: usize,
    store: P,
}

impl<S, P> Presentation<S, P>
where
    S: SlideSurface,
    P: PositionStore,
{
    pub fn new(slides: Vec<S>, store: P) -> Self {
        Self {
            slides,
            current_index: 0,
            store,
        }
    }

    /// Restore the position from the stored token and activate that slide.
    /// An unparsable or missing token means index 0. The token is not
    /// clamped; activating a slide that does not exist is a no-op.
    pub fn start(&mut self) {
        self.current_index = self
            .store
            .read()
            .and_then(|token| token.trim().parse::<usize>().ok())
            .unwrap_or(0);
        debug!("nav: start at {}", self.current_index);
        self.show();
    }

    pub fn advance(&mut self) {
        if self.current_index + 1 < self.slides.len() {
            self.hide();
            self.current_index += 1;
            self.show();
            self.store.write(self.current_index);
            debug!("nav: advance to {}", self.current_index);
        }
    }

    pub fn retreat(&mut self) {
        if self.current_index > 0 {
            self.hide();
            self.current_index -= 1;
            self.show();
            self.store.write(self.current_index);
            debug!("nav: retreat to {}", self.current_index);
        }
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Advance => self.advance(),
            Intent::Retreat => self.retreat(),
            Intent::Ignore => {}
        }
    }

    fn hide(&mut self) {
        if let Some(slide) = self.slides.get_mut(self.current_index) {
            slide.deactivate();
        }
    }

    fn show(&mut self) {
        if let Some(slide) = self.slides.get_mut(self.current_index) {
            slide.activate();
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }
}
