//! Snake model - the ordered chain of occupied cells
//!
//! The head is stored on its own and the rest of the chain lives in a
//! `VecDeque` (neck first, tail last), so moving is an O(1) push-front on the
//! body plus an optional O(1) pop-back.

use std::collections::VecDeque;

use crate::types::{Collision, Direction, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    head: Position,
    /// Segments after the head, neck first.
    body: VecDeque<Position>,
    /// Cell edge length in pixels.
    size: i32,
    /// `None` while stationary.
    direction: Option<Direction>,
    target_len: usize,
    /// Set on the first accepted direction; the UI swaps instructions for the score.
    started: bool,
}

impl Snake {
    /// A single stationary segment at `head`.
    pub fn new(head: Position, size: i32) -> Self {
        Self {
            head,
            body: VecDeque::new(),
            size,
            direction: None,
            target_len: 1,
            started: false,
        }
    }

    pub fn head(&self) -> Position {
        self.head
    }

    /// Segment directly behind the head.
    pub fn neck(&self) -> Option<Position> {
        self.body.front().copied()
    }

    /// All segments, head first.
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// A snake always has its head; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn target_len(&self) -> usize {
        self.target_len
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.head == pos || self.body.contains(&pos)
    }

    /// Request a new direction.
    ///
    /// Rejected when the snake is longer than one segment and the request
    /// would reverse the current velocity or put the head onto the neck.
    /// A single segment may turn anywhere.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.len() > 1 {
            if self.direction == Some(direction.opposite()) {
                return false;
            }
            let (dx, dy) = direction.delta(self.size);
            if self.neck() == Some(self.head.offset(dx, dy)) {
                return false;
            }
        }

        self.direction = Some(direction);
        self.started = true;
        true
    }

    /// Move one cell in the current direction and return the new head.
    ///
    /// Grows (keeps the tail) while shorter than the target length, otherwise
    /// shifts (drops the tail). Returns `None` when stationary.
    pub fn advance(&mut self) -> Option<Position> {
        let direction = self.direction?;
        let (dx, dy) = direction.delta(self.size);

        let grow = self.len() < self.target_len;
        self.body.push_front(self.head);
        self.head = self.head.offset(dx, dy);
        if !grow {
            self.body.pop_back();
        }

        debug_assert!(self.len() <= self.target_len);
        Some(self.head)
    }

    /// Extend the target length by one; the chain catches up on later steps.
    pub fn grow(&mut self) {
        self.target_len += 1;
    }

    /// True when the head shares a cell with any later segment.
    pub fn hits_itself(&self) -> bool {
        self.body.contains(&self.head)
    }

    /// Boundary check for the head cell `[x, x+size] x [y, y+size]`.
    ///
    /// Any edge at or beyond the board edge counts as a hit.
    pub fn check_bounds(&self, width: i32, height: i32) -> Option<Collision> {
        let Position { x, y } = self.head;
        if x <= 0 || y <= 0 || x + self.size >= width || y + self.size >= height {
            Some(Collision::Boundary)
        } else {
            None
        }
    }

    /// Back to a single stationary segment at `center`.
    pub fn reset(&mut self, center: Position) {
        self.body.clear();
        self.head = center;
        self.direction = None;
        self.target_len = 1;
        self.started = false;
    }
}
