//! The draggable detail sheet.
//!
//! Offsets are the sheet's top edge in pixels from the top of the viewport.
//! The sheet rests either open (a third of the way down) or closed (just
//! below the bottom edge). While dragged it follows the finger exactly; on
//! release a spring carries it to whichever rest point the release position
//! selects.

use crate::animation::spring::Spring;
use crate::core::config::SheetConfig;
use std::time::Duration;

/// The two stable positions of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetRest {
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetPhase {
    Closed,
    Open,
    /// Following a drag that started at `baseline`.
    Dragging { baseline: f64 },
    /// Spring-animating toward a rest point.
    Settling { target: SheetRest },
}

impl From<SheetRest> for SheetPhase {
    fn from(rest: SheetRest) -> Self {
        match rest {
            SheetRest::Open => SheetPhase::Open,
            SheetRest::Closed => SheetPhase::Closed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DetailSheet {
    config: SheetConfig,
    phase: SheetPhase,
    spring: Spring,
}

impl DetailSheet {
    /// A closed sheet sized for `config.viewport_height`.
    pub fn new(config: SheetConfig) -> Self {
        let spring = Spring::at_rest(config.viewport_height, config.spring.clone());
        Self {
            config,
            phase: SheetPhase::Closed,
            spring,
        }
    }

    pub fn phase(&self) -> SheetPhase {
        self.phase
    }

    pub fn offset(&self) -> f64 {
        self.spring.position()
    }

    pub fn viewport_height(&self) -> f64 {
        self.config.viewport_height
    }

    pub fn open_offset(&self) -> f64 {
        self.config.viewport_height / 3.0
    }

    pub fn closed_offset(&self) -> f64 {
        self.config.viewport_height
    }

    /// Releasing strictly below this offset dismisses the sheet.
    pub fn dismiss_threshold(&self) -> f64 {
        self.open_offset() + self.config.dismiss_margin
    }

    pub fn rest_offset(&self, rest: SheetRest) -> f64 {
        match rest {
            SheetRest::Open => self.open_offset(),
            SheetRest::Closed => self.closed_offset(),
        }
    }

    /// Any part of the sheet is inside the viewport.
    pub fn is_on_screen(&self) -> bool {
        self.offset() < self.closed_offset()
    }

    /// Springs the sheet to its open rest point.
    pub fn open(&mut self) {
        self.settle_to(SheetRest::Open);
    }

    /// Springs the sheet off-screen.
    pub fn close(&mut self) {
        self.settle_to(SheetRest::Closed);
    }

    /// Captures the current offset as the drag baseline, interrupting any
    /// running spring.
    pub fn drag_start(&mut self) {
        let baseline = self.offset();
        self.spring.jump_to(baseline);
        self.phase = SheetPhase::Dragging { baseline };
    }

    /// Moves the sheet to `baseline + translation_y`. Ignored outside a drag.
    pub fn drag_move(&mut self, translation_y: f64) {
        if let SheetPhase::Dragging { baseline } = self.phase {
            self.spring.jump_to(baseline + translation_y);
        }
    }

    /// Ends the drag and springs to the rest point chosen by the release
    /// offset: past [`dismiss_threshold`](Self::dismiss_threshold) closes,
    /// anything else reopens.
    ///
    /// Outside a drag nothing moves; the rest point already headed for is
    /// returned.
    pub fn drag_end(&mut self) -> SheetRest {
        let rest = match self.phase {
            SheetPhase::Dragging { .. } => self.release_rest(),
            SheetPhase::Settling { target } => return target,
            SheetPhase::Open => return SheetRest::Open,
            SheetPhase::Closed => return SheetRest::Closed,
        };
        self.settle_to(rest);
        rest
    }

    fn release_rest(&self) -> SheetRest {
        if self.offset() > self.dismiss_threshold() {
            SheetRest::Closed
        } else {
            SheetRest::Open
        }
    }

    /// Advances the settle animation and returns the new offset.
    pub fn tick(&mut self, dt: Duration) -> f64 {
        if let SheetPhase::Settling { target } = self.phase {
            if self.spring.step(dt) {
                self.phase = target.into();
            }
        }
        self.offset()
    }

    /// Adapts rest points to a new viewport height.
    pub fn resize(&mut self, viewport_height: f64) {
        self.config.viewport_height = viewport_height;
        match self.phase {
            SheetPhase::Open => self.spring.jump_to(self.open_offset()),
            SheetPhase::Closed => self.spring.jump_to(self.closed_offset()),
            SheetPhase::Settling { target } => self.settle_to(target),
            SheetPhase::Dragging { .. } => {}
        }
    }

    fn settle_to(&mut self, rest: SheetRest) {
        self.spring.animate_to(self.rest_offset(rest));
        self.phase = if self.spring.is_settled() {
            rest.into()
        } else {
            SheetPhase::Settling { target: rest }
        };
    }
}
