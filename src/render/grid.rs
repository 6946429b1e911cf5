use std::collections::HashMap;

use ratatui::style::Color;

use crate::game::Vec2;

/// Sparse cell-to-color buffer the renderer fills each frame and then
/// blits cell by cell. Cells left unset render as empty background.
#[derive(Debug, Default)]
pub struct CellGrid {
    cells: HashMap<Vec2, Color>,
}

impl CellGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, pos: Vec2, color: Color) {
        self.cells.insert(pos, color);
    }

    pub fn get(&self, pos: Vec2) -> Option<Color> {
        self.cells.get(&pos).copied()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}
