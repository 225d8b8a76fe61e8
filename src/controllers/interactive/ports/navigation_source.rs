use crate::core::navigation::PanDirections;

/// Polled once per frame for the pan directions currently held.
pub trait NavigationSource {
    fn poll_navigation(&mut self) -> PanDirections;
}
