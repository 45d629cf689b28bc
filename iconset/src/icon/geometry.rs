use std::fmt::{Display, Formatter};

const TOP_FACTOR: f64 = 0.25;
const BOTTOM_FACTOR: f64 = 0.75;
const LEFT_FACTOR: f64 = 0.2;
const RIGHT_FACTOR: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // f64's Display already yields the shortest round-trip form ("16", "6.4")
        write!(f, "{},{}", self.x, self.y)
    }
}

/// The three vertices of the upside-down triangle drawn on an icon canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrianglePoints {
    /// The downward facing tip
    pub bottom: Point,

    /// The left end of the top edge
    pub top_left: Point,

    /// The right end of the top edge
    pub top_right: Point,
}

impl TrianglePoints {
    /// Computes the triangle for a square canvas of the given size.
    pub fn for_size(size: u32) -> Self {
        let size = f64::from(size);

        let center_x = size / 2.0;
        let top_y = size * TOP_FACTOR;
        let bottom_y = size * BOTTOM_FACTOR;
        let left_x = size * LEFT_FACTOR;
        let right_x = size * RIGHT_FACTOR;

        Self {
            bottom: Point::new(center_x, bottom_y),
            top_left: Point::new(left_x, top_y),
            top_right: Point::new(right_x, top_y),
        }
    }
}

impl Display for TrianglePoints {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.bottom, self.top_left, self.top_right)
    }
}
