//! Input normalization layer.
//!
//! Every source turns raw host events into at most one [`Intent`] per frame;
//! the controller never sees keys, gestures or pointer coordinates.

mod gesture;
mod keyboard;
mod pointer;

pub use gesture::SwipeGestures;
pub use keyboard::Keyboard;
pub use pointer::PointerZones;

use raylib::prelude::RaylibHandle;

/// A normalized navigation instruction derived from raw input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Intent {
    Advance,
    Retreat,
    Ignore,
}

/// Polled provider of navigation intents.
pub trait InputSource {
    fn poll(&mut self, rl: &RaylibHandle) -> Intent;
}
