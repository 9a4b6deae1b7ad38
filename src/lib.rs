// Copyright 2026 the Tangent Walk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tangent walks between two concentric circles.
//!
//! Start on a big circle of radius `R`. Draw the chord to the point `Q` on the
//! same circle such that the chord touches a smaller concentric circle of
//! radius `r` at its midpoint, then repeat from `Q`, never heading straight
//! back. When `r = R·cos(π/n)` the chords close into a regular `n`-gon;
//! otherwise they wind around forever, so a walk also stops after a fixed
//! number of segments.
//!
//! The crate is split the way the problem is:
//!
//! - [`TangentSolver`] computes the (at most two) candidate next points.
//! - [`TangentWalk`] is the animation state machine: it selects a candidate,
//!   records the segment and redraws onto a [`Canvas`], paced by a
//!   [`Scheduler`].
//! - [`SvgCanvas`] and [`Recorder`] are ready-made canvases.
//!
//! # Examples
//!
//! ```
//! use tangent_walk::{CirclePair, HaltReason, NoDelay, SvgCanvas, TangentWalk};
//!
//! let pair = CirclePair::from_sides((250.0, 250.0), 200.0, 6).unwrap();
//! let mut walk = TangentWalk::new(pair, 2);
//! let mut canvas = SvgCanvas::new(500.0, 500.0);
//! assert_eq!(walk.run(&mut canvas, &mut NoDelay::new()), HaltReason::LoopClosed);
//! // Two circles and six chords.
//! assert_eq!(canvas.len(), 8);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the geometry types and
//!   [`WalkConfig`].
//! - `mint`: conversions between [`Point`] and `mint::Point2<f64>`.
//! - `cli` (default): the `tangent-walk` binary.

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names, clippy::float_cmp)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod canvas;
mod circle;
pub mod common;
mod config;
mod error;
mod line;
mod point;
mod rect;
mod schedule;
mod solver;
mod svg;
mod vec2;
mod walk;

pub use crate::canvas::*;
pub use crate::circle::*;
pub use crate::config::*;
pub use crate::error::*;
pub use crate::line::*;
pub use crate::point::*;
pub use crate::rect::*;
pub use crate::schedule::*;
pub use crate::solver::*;
pub use crate::svg::*;
pub use crate::vec2::*;
pub use crate::walk::*;
