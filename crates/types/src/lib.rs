pub mod geometry;
pub mod scene;
pub mod style;

pub use geometry::{DEVICE_HEIGHT, DEVICE_WIDTH, Size};
pub use scene::{Layer, Line, Point, Scene};
pub use style::{LineCap, LineJoin};
