// Copyright 2026 the Tangent Walk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walking a point around the big circle, one tangent chord per tick.

use std::fmt;
use std::time::Duration;

use crate::common::match_tolerance;
use crate::{Canvas, CirclePair, Line, Point, Scheduler, TangentSolver};

/// Why a walk stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HaltReason {
    /// The solver found no chord from the current point.
    NoTangentSolution,
    /// Every chord from the current point leads straight back to the
    /// previous one.
    OnlyBacktrack,
    /// The walk came back to its starting point.
    LoopClosed,
    /// The walk reached its segment limit without closing.
    TickLimit,
}

impl HaltReason {
    /// Whether the walk ended by closing its polygon.
    pub fn is_success(self) -> bool {
        matches!(self, HaltReason::LoopClosed)
    }
}

impl fmt::Display for HaltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            HaltReason::NoTangentSolution => "no tangent solution",
            HaltReason::OnlyBacktrack => "only backtracking tangents",
            HaltReason::LoopClosed => "loop closed",
            HaltReason::TickLimit => "tick limit reached",
        };
        f.write_str(msg)
    }
}

/// Whether a walk will keep ticking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WalkStatus {
    /// More ticks are expected.
    Running,
    /// The walk is over; it never restarts.
    Halted(HaltReason),
}

impl WalkStatus {
    /// Is the walk still running?
    #[inline]
    pub fn is_running(self) -> bool {
        self == WalkStatus::Running
    }

    /// The reason the walk halted, if it has.
    #[inline]
    pub fn halt_reason(self) -> Option<HaltReason> {
        match self {
            WalkStatus::Running => None,
            WalkStatus::Halted(reason) => Some(reason),
        }
    }
}

/// Where a walk is and where it has been.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    start: Point,
    current: Point,
    previous: Option<Point>,
    segments: Vec<Line>,
}

impl AnimationState {
    /// A fresh state sitting on `start`.
    pub fn new(start: Point) -> Self {
        AnimationState {
            start,
            current: start,
            previous: None,
            segments: Vec::new(),
        }
    }

    /// The point the walk began on.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The point the next chord starts from.
    #[inline]
    pub fn current(&self) -> Point {
        self.current
    }

    /// The point the last chord started from, absent before the first step.
    #[inline]
    pub fn previous(&self) -> Option<Point> {
        self.previous
    }

    /// Every chord drawn so far, oldest first.
    #[inline]
    pub fn segments(&self) -> &[Line] {
        &self.segments
    }

    fn step_to(&mut self, next: Point) {
        self.segments.push(Line::new(self.current, next));
        self.previous = Some(self.current);
        self.current = next;
    }
}

/// A tangent walk and its animation state machine.
///
/// Each tick asks the [`TangentSolver`] for the chords leaving the current
/// point, takes the first one that does not lead back to the previous point,
/// and records it. The walk halts when no such chord exists, when it returns
/// to its start, or when it has drawn its maximum number of segments.
///
/// # Examples
///
/// ```
/// use tangent_walk::{CirclePair, HaltReason, NoDelay, Recorder, TangentWalk};
///
/// let pair = CirclePair::from_sides((250.0, 250.0), 200.0, 4).unwrap();
/// let mut walk = TangentWalk::new(pair, 2);
/// let reason = walk.run(&mut Recorder::new(), &mut NoDelay::new());
/// assert_eq!(reason, HaltReason::LoopClosed);
/// assert_eq!(walk.state().segments().len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct TangentWalk {
    solver: TangentSolver,
    state: AnimationState,
    status: WalkStatus,
    max_ticks: Option<usize>,
    delay: Duration,
}

impl TangentWalk {
    /// Pause between ticks unless configured otherwise.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(50);

    /// Segment limit unless configured otherwise.
    pub const DEFAULT_MAX_TICKS: usize = 1000;

    /// A running walk starting at the leftmost point of the big circle.
    pub fn new(pair: CirclePair, precision: u32) -> Self {
        let solver = TangentSolver::new(pair, precision);
        let start = pair.start_point().round_to(solver.precision());
        log::debug!(
            "walk on R={} r={} around {}, step angle {:.4} rad",
            pair.big_radius(),
            pair.small_radius(),
            pair.center(),
            pair.step_angle()
        );
        TangentWalk {
            solver,
            state: AnimationState::new(start),
            status: WalkStatus::Running,
            max_ticks: Some(Self::DEFAULT_MAX_TICKS),
            delay: Self::DEFAULT_DELAY,
        }
    }

    /// Start from `start` instead, which should lie on the big circle.
    #[must_use]
    pub fn with_start(mut self, start: Point) -> Self {
        let precision = self.solver.precision();
        let off = self.solver.pair().big().boundary_distance(start);
        if off.is_nan() || off.abs() > self.tolerance() {
            log::warn!("start {start} is {off:.4} off the big circle");
        }
        self.state = AnimationState::new(start.round_to(precision));
        self
    }

    /// Halt with [`HaltReason::TickLimit`] once this many segments exist.
    ///
    /// `None` removes the limit; a walk whose step angle does not divide a
    /// full turn then runs until the solver gives out. At least one tick
    /// always runs.
    #[must_use]
    pub fn with_max_ticks(mut self, max_ticks: Option<usize>) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Pause for `delay` between ticks in [`TangentWalk::run`].
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The solver used for each step.
    pub fn solver(&self) -> &TangentSolver {
        &self.solver
    }

    /// The current animation state.
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Running or halted.
    pub fn status(&self) -> WalkStatus {
        self.status
    }

    /// The pause between ticks.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The segment limit, if any.
    pub fn max_ticks(&self) -> Option<usize> {
        self.max_ticks
    }

    /// Pick the next point from solver output.
    ///
    /// Candidates are tried in order; the first one that is not the previous
    /// point wins. Points closer than two rounding units count as equal; at
    /// high precision the floor is the floating point noise of the geometry.
    pub fn select(&self, candidates: &[Point]) -> Option<Point> {
        let tolerance = self.tolerance();
        candidates.iter().copied().find(|q| match self.state.previous {
            Some(prev) => !Point::is_near(*q, prev, tolerance),
            None => true,
        })
    }

    /// Advance the walk by one step without drawing anything.
    ///
    /// Calling this on a halted walk does nothing.
    pub fn advance(&mut self) -> WalkStatus {
        if !self.status.is_running() {
            return self.status;
        }
        let candidates = self.solver.solve(self.state.current);
        log::info!(
            "tangents from {}: {:?}",
            self.state.current,
            candidates.as_slice()
        );
        let Some(next) = self.select(&candidates) else {
            let reason = if candidates.is_empty() {
                HaltReason::NoTangentSolution
            } else {
                HaltReason::OnlyBacktrack
            };
            return self.halt(reason);
        };
        self.state.step_to(next);

        if Point::is_near(next, self.state.start, self.tolerance()) {
            return self.halt(HaltReason::LoopClosed);
        }
        if self
            .max_ticks
            .is_some_and(|max| self.state.segments.len() >= max)
        {
            return self.halt(HaltReason::TickLimit);
        }
        WalkStatus::Running
    }

    /// Draw both circles and every segment so far.
    ///
    /// The canvas is not cleared first; drawing the same state twice onto a
    /// cleared canvas gives the same picture.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        let pair = self.solver.pair();
        canvas.oval(pair.small().bounding_box());
        canvas.oval(pair.big().bounding_box());
        for segment in &self.state.segments {
            canvas.line(*segment);
        }
    }

    /// One animation tick: advance, then redraw the frame if it changed.
    ///
    /// A walk that halts before drawing any segment still gets one frame
    /// with both circles.
    pub fn tick(&mut self, canvas: &mut impl Canvas) -> WalkStatus {
        let was_running = self.status.is_running();
        let drawn = self.state.segments.len();
        let status = self.advance();
        let grew = self.state.segments.len() > drawn;
        let halted_blank = was_running && !status.is_running() && self.state.segments.is_empty();
        if grew || halted_blank {
            canvas.clear();
            self.draw(canvas);
        }
        status
    }

    /// Tick until the walk halts, waiting on `scheduler` between ticks.
    pub fn run(&mut self, canvas: &mut impl Canvas, scheduler: &mut impl Scheduler) -> HaltReason {
        loop {
            match self.tick(canvas) {
                WalkStatus::Running => scheduler.wait(self.delay),
                WalkStatus::Halted(reason) => return reason,
            }
        }
    }

    fn tolerance(&self) -> f64 {
        let pair = self.solver.pair();
        let c = pair.center();
        let scale = c.x.abs().max(c.y.abs()) + pair.big_radius();
        match_tolerance(self.solver.precision()).max(1e-9 * scale)
    }

    fn halt(&mut self, reason: HaltReason) -> WalkStatus {
        log::info!(
            "walk halted after {} segments: {}",
            self.state.segments.len(),
            reason
        );
        self.status = WalkStatus::Halted(reason);
        self.status
    }
}
