// Input handling system
//
// Host input callbacks are asynchronous relative to frame boundaries, so raw
// events never reach game logic directly. They are buffered by the collector
// and drained into one immutable snapshot per frame.
//
// - `action`: buttons and raw event type
// - `collector`: event buffering and snapshot construction
// - `snapshot`: the per-frame immutable input view

pub mod action;
pub mod collector;
pub mod snapshot;

// Re-export commonly used types
pub use action::{Button, InputEvent};
pub use collector::InputCollector;
pub use snapshot::InputSnapshot;
