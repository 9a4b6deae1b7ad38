// Copyright 2026 the Tangent Walk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface a walk renders onto.

use crate::{Line, Rect};

/// A 2D drawing surface.
///
/// This is all a [`TangentWalk`](crate::TangentWalk) needs from a renderer:
/// a way to start a fresh frame, ovals given their bounding box, and
/// straight lines.
pub trait Canvas {
    /// Remove everything drawn so far.
    fn clear(&mut self);

    /// Draw the outline of the oval inscribed in `bounds`.
    fn oval(&mut self, bounds: Rect);

    /// Draw a straight line.
    fn line(&mut self, line: Line);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn oval(&mut self, bounds: Rect) {
        (**self).oval(bounds);
    }

    fn line(&mut self, line: Line) {
        (**self).line(line);
    }
}

/// A single primitive issued to a [`Canvas`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`Canvas::clear`].
    Clear,
    /// [`Canvas::oval`].
    Oval(Rect),
    /// [`Canvas::line`].
    Line(Line),
}

/// A [`Canvas`] that keeps every command it receives.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
}

impl Recorder {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command received, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The commands issued since the last [`DrawCommand::Clear`].
    pub fn current_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| *c == DrawCommand::Clear)
            .map_or(0, |ix| ix + 1);
        &self.commands[start..]
    }

    /// How many frames have been started.
    pub fn frames(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| **c == DrawCommand::Clear)
            .count()
    }
}

impl Canvas for Recorder {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn oval(&mut self, bounds: Rect) {
        self.commands.push(DrawCommand::Oval(bounds));
    }

    fn line(&mut self, line: Line) {
        self.commands.push(DrawCommand::Line(line));
    }
}
