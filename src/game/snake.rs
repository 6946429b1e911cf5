use std::collections::VecDeque;

use super::vec2::Vec2;

/// One body cell of the snake, carrying its own pending displacement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Segment {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }
}

/// The snake: an ordered list of segments with the head at index 0,
/// plus a FIFO of swallowed food positions waiting to become body.
///
/// Each segment stores its own velocity. `advance` moves every segment by
/// its stored velocity, then shifts velocities down the chain by one index,
/// which is what produces the classic one-cell-behind trailing motion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    segments: Vec<Segment>,
    growth_queue: VecDeque<Vec2>,
}

impl Snake {
    /// Create a single-segment snake at rest
    pub fn new(pos: Vec2) -> Self {
        Self {
            segments: vec![Segment::new(pos)],
            growth_queue: VecDeque::new(),
        }
    }

    pub fn head_pos(&self) -> Vec2 {
        self.segments[0].pos
    }

    pub fn head_velocity(&self) -> Vec2 {
        self.segments[0].vel
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of swallowed food items not yet grown into segments
    pub fn pending_growth(&self) -> usize {
        self.growth_queue.len()
    }

    /// Steer the head. Trailing segments pick this up one tick at a time
    /// through velocity propagation.
    pub fn set_head_velocity(&mut self, vel: Vec2) {
        self.segments[0].vel = vel;
    }

    /// Queue a swallowed food position for growth. No structural change
    /// happens until a later `advance` finds the cell vacant.
    pub fn swallow(&mut self, pos: Vec2) {
        self.growth_queue.push_back(pos);
    }

    /// Zero every segment's velocity
    pub fn stop(&mut self) {
        for segment in &mut self.segments {
            segment.vel = Vec2::ZERO;
        }
    }

    /// Run one movement step:
    /// 1. every segment moves by its own stored velocity,
    /// 2. at most one queued growth item materializes as a new tail,
    /// 3. velocities shift down the chain (tail to neck), head untouched.
    ///
    /// The descending copy in step 3 means each segment adopts the velocity
    /// its leader had *before* this propagation, giving the one-tick lag
    /// that makes the body retrace the head's path.
    pub fn advance(&mut self) {
        for segment in &mut self.segments {
            let vel = segment.vel;
            segment.pos.add(vel);
        }

        self.digest();

        for i in (1..self.segments.len()).rev() {
            self.segments[i].vel = self.segments[i - 1].vel;
        }
    }

    /// Try to turn the oldest swallowed food into a new tail segment.
    /// Deferred while any segment still sits on that cell, so growth never
    /// inserts an overlapping duplicate.
    fn digest(&mut self) {
        if let Some(&pos) = self.growth_queue.front() {
            let occupied = self.segments.iter().any(|segment| segment.pos == pos);
            if !occupied {
                self.growth_queue.pop_front();
                self.segments.push(Segment::new(pos));
            }
        }
    }
}
