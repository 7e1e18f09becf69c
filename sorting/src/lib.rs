pub mod config;
pub mod controller;
pub mod element;
pub mod error;
pub mod render;
pub mod scheduler;
pub mod sequence;
pub mod sorting;

pub use config::{Config, RenderMode, RunPolicy};
pub use controller::Controller;
pub use element::{initial_layout, Element};
pub use error::{Error, InterruptCause, Result};
pub use render::{Frame, JsonSink, RenderSink, TextSink};
pub use scheduler::{CancelToken, Pacer, RunReport, Scheduler};
pub use sequence::SharedSequence;
pub use sorting::{record, Algorithm, Mutation, Script, Step};
