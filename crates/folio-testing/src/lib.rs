//! Testing utilities and harness for Folio

pub mod canvas;
pub mod pages;
pub mod robot;
pub mod robot_assertions;

pub use canvas::{CanvasOp, RecordedLayer, RecordingCanvas};
pub use pages::FakePages;
pub use robot::PageTurnRobot;

pub mod prelude {
    pub use crate::canvas::{CanvasOp, RecordedLayer, RecordingCanvas};
    pub use crate::pages::FakePages;
    pub use crate::robot::PageTurnRobot;
    pub use crate::robot_assertions;
}
