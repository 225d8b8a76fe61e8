use log::warn;

use crate::core::data::viewport::Viewport;

/// Fraction of the current span moved per signalled direction.
pub const PAN_STEP_FRACTION: f64 = 0.1;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

impl PanDirection {
    pub const ALL: [PanDirection; 4] = [
        PanDirection::Up,
        PanDirection::Down,
        PanDirection::Left,
        PanDirection::Right,
    ];
}

/// Set of directions held during one frame. Opposite directions may both
/// be set and cancel each other out.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct PanDirections {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl PanDirections {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, direction: PanDirection) -> Self {
        self.set(direction, true);
        self
    }

    pub fn set(&mut self, direction: PanDirection, held: bool) {
        match direction {
            PanDirection::Up => self.up = held,
            PanDirection::Down => self.down = held,
            PanDirection::Left => self.left = held,
            PanDirection::Right => self.right = held,
        }
    }

    #[must_use]
    pub fn contains(&self, direction: PanDirection) -> bool {
        match direction {
            PanDirection::Up => self.up,
            PanDirection::Down => self.down,
            PanDirection::Left => self.left,
            PanDirection::Right => self.right,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }
}

impl FromIterator<PanDirection> for PanDirections {
    fn from_iter<I: IntoIterator<Item = PanDirection>>(iter: I) -> Self {
        iter.into_iter()
            .fold(PanDirections::none(), PanDirections::with)
    }
}

/// Moves the viewport by [`PAN_STEP_FRACTION`] of its span for each held
/// direction. Up and Right move towards larger imaginary and real values.
#[must_use]
pub fn apply_pan(viewport: Viewport, directions: PanDirections) -> Viewport {
    if directions.is_empty() {
        return viewport;
    }

    let real_step = viewport.real_span() * PAN_STEP_FRACTION;
    let imag_step = viewport.imag_span() * PAN_STEP_FRACTION;

    let mut real_offset = 0.0;
    let mut imag_offset = 0.0;

    if directions.up {
        imag_offset += imag_step;
    }
    if directions.down {
        imag_offset -= imag_step;
    }
    if directions.left {
        real_offset -= real_step;
    }
    if directions.right {
        real_offset += real_step;
    }

    Viewport::new(
        viewport.min_real() + real_offset,
        viewport.max_real() + real_offset,
        viewport.min_imag() + imag_offset,
        viewport.max_imag() + imag_offset,
    )
    .unwrap_or_else(|err| {
        warn!("pan left the representable range, keeping view: {err}");
        viewport
    })
}
