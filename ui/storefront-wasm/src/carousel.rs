//! Product carousel position.
//!
//! The strip shows four cards at a time. `advance` wraps over `count - 3`
//! positions while `retreat` wraps to `count - 4`; the two bounds differ and
//! are kept as they are.

use crate::dom;
use web_sys::HtmlElement;

pub const VISIBLE_SLOTS: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    offset: usize,
}

impl Carousel {
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Step forward. Returns false (and does nothing) with four or fewer cards.
    pub fn advance(&mut self, count: usize) -> bool {
        if count <= VISIBLE_SLOTS {
            return false;
        }
        self.offset = (self.offset + 1) % (count - (VISIBLE_SLOTS - 1));
        true
    }

    /// Step back. Returns false (and does nothing) with four or fewer cards.
    pub fn retreat(&mut self, count: usize) -> bool {
        if count <= VISIBLE_SLOTS {
            return false;
        }
        self.offset = if self.offset == 0 {
            count - VISIBLE_SLOTS
        } else {
            self.offset - 1
        };
        true
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn translate_percent(&self) -> f64 {
        if self.offset == 0 {
            return 0.0;
        }
        -(self.offset as f64) * (100.0 / VISIBLE_SLOTS as f64)
    }

    pub fn transform(&self) -> String {
        format!("translateX({}%)", self.translate_percent())
    }

    pub fn apply(&self, strip: &HtmlElement) {
        dom::set_transform(strip, &self.transform());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_or_fewer_cards_never_move() {
        for count in 0..=VISIBLE_SLOTS {
            let mut carousel = Carousel::default();
            assert!(!carousel.advance(count));
            assert!(!carousel.retreat(count));
            assert_eq!(carousel.offset(), 0);
        }
    }

    #[test]
    fn advance_cycles_through_all_offsets_and_wraps() {
        for count in 5..=12 {
            let mut carousel = Carousel::default();
            let mut seen = Vec::new();
            for _ in 0..(count - 3) {
                seen.push(carousel.offset());
                assert!(carousel.advance(count));
            }
            assert_eq!(seen, (0..=count - 4).collect::<Vec<_>>());
            assert_eq!(carousel.offset(), 0, "wraps after {} calls", count - 3);
        }
    }

    #[test]
    fn retreat_from_start_jumps_to_last_window() {
        let mut carousel = Carousel::default();
        assert!(carousel.retreat(8));
        assert_eq!(carousel.offset(), 4);
        assert!(carousel.retreat(8));
        assert_eq!(carousel.offset(), 3);
    }

    #[test]
    fn transform_moves_a_quarter_per_step() {
        let mut carousel = Carousel::default();
        assert_eq!(carousel.transform(), "translateX(0%)");
        carousel.advance(8);
        assert_eq!(carousel.transform(), "translateX(-25%)");
        carousel.advance(8);
        assert_eq!(carousel.transform(), "translateX(-50%)");
        carousel.reset();
        assert_eq!(carousel.offset(), 0);
    }
}
