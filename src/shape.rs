use downcast_rs::{impl_downcast, Downcast};

/// Two-digit approximation of pi. Output must stay identical to the
/// reference report, so this is not `std::f64::consts::PI`.
#[allow(clippy::approx_constant)]
pub const PI_APPROX: f64 = 3.14;

pub trait Shape : Downcast
{
    fn name(&self) -> &'static str;

    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

impl_downcast!(Shape);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// `position` is carried along but never read by the metrics.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Circle {
    pub radius: f64,
    pub position: i32
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius, ..Default::default() }
    }

    pub fn with_position(self, position: i32) -> Self {
        Self { position, ..self }
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn area(&self) -> f64 {
        PI_APPROX * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI_APPROX * self.radius
    }
}
