use std::io::{self, Write};
use std::sync::Mutex;

use serde::Serialize;
use tracing::warn;

use crate::element::{Element, ELEMENT_SIZE};
use crate::sorting::{Algorithm, Mutation};

/// What a renderer gets after each step: a private copy of the row, never
/// the row itself.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub algorithm: Algorithm,
    /// Zero-based index of the step that produced this frame.
    pub step: usize,
    pub total_steps: usize,
    pub mutations: Vec<Mutation>,
    pub elements: Vec<Element>,
}

pub trait RenderSink: Send + Sync {
    fn on_step(&self, frame: &Frame);
}

/// Draws each frame as a line of bars, one per slot, bar length following
/// element height.
pub struct TextSink<W> {
    out: Mutex<W>,
}

impl TextSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn draw(frame: &Frame) -> String {
        let bars: Vec<String> = frame
            .elements
            .iter()
            .map(|e| "#".repeat((e.height / ELEMENT_SIZE).max(1) as usize))
            .collect();
        format!(
            "{:<15} {:>3}/{:<3} |{}|",
            frame.algorithm.name(),
            frame.step + 1,
            frame.total_steps,
            bars.join("|")
        )
    }
}

impl<W: Write + Send> RenderSink for TextSink<W> {
    fn on_step(&self, frame: &Frame) {
        let line = Self::draw(frame);
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(out, "{line}").and_then(|_| out.flush()) {
            warn!("failed to draw frame {}: {}", frame.step, e);
        }
    }
}

/// One JSON object per frame, newline separated.
pub struct JsonSink<W> {
    out: Mutex<W>,
}

impl JsonSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> RenderSink for JsonSink<W> {
    fn on_step(&self, frame: &Frame) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        let written = serde_json::to_writer(&mut *out, frame)
            .map_err(io::Error::from)
            .and_then(|_| writeln!(out))
            .and_then(|_| out.flush());
        if let Err(e) = written {
            warn!("failed to write frame {}: {}", frame.step, e);
        }
    }
}
