//! Rendering result with statistics.

use super::RenderInstruction;
use serde::{Deserialize, Serialize};

/// Instructions produced by a render pass, with counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// Instructions in display order
    pub instructions: Vec<RenderInstruction>,

    /// Counters collected while rendering
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(instructions: Vec<RenderInstruction>, stats: RenderStats) -> Self {
        Self {
            instructions,
            stats,
        }
    }

    /// Check if any image failed to resolve.
    pub fn has_warnings(&self) -> bool {
        self.stats.warning_count > 0
    }
}

/// Statistics collected during a report render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Sections seen
    pub section_count: u32,

    /// Sections rendered line by line
    pub line_section_count: u32,

    /// Text instructions emitted
    pub text_count: u32,

    /// Images resolved
    pub image_count: u32,

    /// Warnings emitted
    pub warning_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a section.
    pub fn add_section(&mut self, line_oriented: bool) {
        self.section_count += 1;
        if line_oriented {
            self.line_section_count += 1;
        }
    }

    /// Count an emitted instruction.
    pub fn record(&mut self, instruction: &RenderInstruction) {
        match instruction {
            RenderInstruction::Text { .. } => self.text_count += 1,
            RenderInstruction::Image { .. } => self.image_count += 1,
            RenderInstruction::Warning { .. } => self.warning_count += 1,
            _ => {}
        }
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &RenderStats) {
        self.section_count += other.section_count;
        self.line_section_count += other.line_section_count;
        self.text_count += other.text_count;
        self.image_count += other.image_count;
        self.warning_count += other.warning_count;
    }
}
