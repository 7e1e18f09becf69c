use serde::Serialize;

pub const ELEMENT_SIZE: u32 = 50;
pub const ELEMENT_GAP: u32 = 20;
pub const ELEMENT_COUNT: usize = 6;

/// Left margin and fixed row of the initial layout.
const ORIGIN: i32 = 50;

/// One sortable rectangle.
///
/// `x` and `y` are layout data fixed at creation. Only `width` and `height`
/// take part in ordering, through [`Element::sort_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Element {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Element {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Area of the rectangle. Computed in `u64` so it cannot overflow.
    #[inline]
    pub fn sort_key(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Starting row: six squares of side `(i + 1) * ELEMENT_SIZE`, already ascending.
pub fn initial_layout() -> Vec<Element> {
    (0..ELEMENT_COUNT)
        .map(|i| {
            let side = (i as u32 + 1) * ELEMENT_SIZE;
            Element::new(slot_x(i), ORIGIN, side, side)
        })
        .collect()
}

/// Left edge of the slot at `index` in the initial layout.
pub fn slot_x(index: usize) -> i32 {
    index as i32 * (ELEMENT_SIZE + ELEMENT_GAP) as i32 + ORIGIN
}
