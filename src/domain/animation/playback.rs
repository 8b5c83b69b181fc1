use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::AnimationError;

/// Half-open frame range stepped after clip assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRange {
    pub start: i32,
    pub end: i32,
}

impl FrameRange {
    pub fn new(start: i32, end: i32) -> Result<Self, AnimationError> {
        if end < start {
            return Err(AnimationError::InvalidFrameRange { start, end });
        }

        Ok(Self { start, end })
    }

    pub fn frames(&self) -> Range<i32> {
        self.start..self.end
    }

    pub fn len(&self) -> u32 {
        (self.end - self.start).max(0) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for FrameRange {
    fn default() -> Self {
        Self { start: 1, end: 250 }
    }
}

/// Summary of one playback on a scene session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackReport {
    pub scene: String,
    pub avatar: String,
    /// Clips assigned to the avatar, in order
    pub assigned: Vec<String>,
    /// Clip left active on the avatar
    pub active_action: Option<String>,
    pub frames: FrameRange,
    pub frames_stepped: u32,
}
