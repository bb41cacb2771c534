// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// Which neighbours a connector cell joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Links(u8);

impl Links {
    const LEFT: u8 = 1 << 0;
    const RIGHT: u8 = 1 << 1;
    const UP: u8 = 1 << 2;
    const DOWN: u8 = 1 << 3;

    fn has(self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    fn glyph(self) -> char {
        let (l, r, u, d) =
            (self.has(Self::LEFT), self.has(Self::RIGHT), self.has(Self::UP), self.has(Self::DOWN));
        match (l || r, u || d) {
            (true, false) => '─',
            (false, true) => '│',
            _ => match (l, r, u, d) {
                (false, true, false, true) => '┌',
                (true, false, false, true) => '┐',
                (false, true, true, false) => '└',
                (true, false, true, false) => '┘',
                (false, true, true, true) => '├',
                (true, false, true, true) => '┤',
                (true, true, false, true) => '┬',
                (true, true, true, false) => '┴',
                (true, true, true, true) => '┼',
                _ => ' ',
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    links: Links,
}

impl Cell {
    const BLANK: Self = Self { ch: ' ', links: Links(0) };

    fn glyph(self) -> char {
        if self.links.0 == 0 {
            self.ch
        } else {
            self.links.glyph()
        }
    }
}

/// Character grid for the text renderer.
///
/// Text overwrites whatever is in a cell. Connector lines accumulate per-cell links, so crossing
/// or touching lines render as the matching junction (`├`, `┬`, `┼`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let area =
            width.checked_mul(height).ok_or(CanvasError::AreaOverflow { width, height })?;
        Ok(Self { width, height, cells: vec![Cell::BLANK; area] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        Ok(self.cells[self.offset(x, y)?].glyph())
    }

    /// Writes `text` from `(x, y)` rightwards, clipping at the right edge. Returns the number of
    /// cells written.
    pub fn put_str(&mut self, x: usize, y: usize, text: &str) -> Result<usize, CanvasError> {
        self.offset(x.min(self.width.saturating_sub(1)), y)?;
        let mut written = 0;
        for (col, ch) in (x..self.width).zip(text.chars()) {
            let idx = y * self.width + col;
            self.cells[idx] = Cell { ch, links: Links::default() };
            written += 1;
        }
        Ok(written)
    }

    /// Horizontal connector over `x0..=x1` on row `y`.
    pub fn hline(&mut self, x0: usize, x1: usize, y: usize) -> Result<(), CanvasError> {
        let (lo, hi) = (x0.min(x1), x0.max(x1));
        self.offset(hi, y)?;
        for x in lo..=hi {
            let mut bits = 0;
            if x > lo || lo == hi {
                bits |= Links::LEFT;
            }
            if x < hi || lo == hi {
                bits |= Links::RIGHT;
            }
            self.link(x, y, bits);
        }
        Ok(())
    }

    /// Vertical connector over `y0..=y1` in column `x`.
    pub fn vline(&mut self, x: usize, y0: usize, y1: usize) -> Result<(), CanvasError> {
        let (lo, hi) = (y0.min(y1), y0.max(y1));
        self.offset(x, hi)?;
        for y in lo..=hi {
            let mut bits = 0;
            if y > lo || lo == hi {
                bits |= Links::UP;
            }
            if y < hi || lo == hi {
                bits |= Links::DOWN;
            }
            self.link(x, y, bits);
        }
        Ok(())
    }

    /// Rows with trailing blanks removed and trailing empty rows dropped.
    pub fn to_trimmed_string(&self) -> String {
        let mut rows: Vec<String> = (0..self.height)
            .map(|y| {
                let row: String = self.cells[y * self.width..(y + 1) * self.width]
                    .iter()
                    .map(|cell| cell.glyph())
                    .collect();
                row.trim_end_matches(' ').to_owned()
            })
            .collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        rows.join("\n")
    }

    fn link(&mut self, x: usize, y: usize, bits: u8) {
        let cell = &mut self.cells[y * self.width + x];
        cell.links.0 |= bits;
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(CanvasError::OutOfBounds { x, y, width: self.width, height: self.height })
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width.max(1)).enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                fmt::Write::write_char(f, cell.glyph())?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow { width: usize, height: usize },
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area overflow: {width}*{height}")
            }
            Self::OutOfBounds { x, y, width, height } => {
                write!(f, "cell ({x},{y}) is outside the {width}x{height} canvas")
            }
        }
    }
}

impl std::error::Error for CanvasError {}

#[cfg(test)]
mod tests {
    use super::{Canvas, CanvasError};

    #[test]
    fn text_is_clipped_at_the_right_edge() {
        let mut c = Canvas::new(4, 1).expect("canvas");
        assert_eq!(c.put_str(2, 0, "abcdef"), Ok(2));
        assert_eq!(c.to_string(), "  ab");
    }

    #[test]
    fn writes_outside_the_grid_fail_without_side_effects() {
        let mut c = Canvas::new(3, 2).expect("canvas");
        assert_eq!(
            c.hline(0, 3, 1),
            Err(CanvasError::OutOfBounds { x: 3, y: 1, width: 3, height: 2 })
        );
        assert_eq!(c.put_str(0, 2, "x"), Err(CanvasError::OutOfBounds { x: 0, y: 2, width: 3, height: 2 }));
        assert_eq!(c.to_trimmed_string(), "");
    }

    #[test]
    fn rejects_area_overflow() {
        assert_eq!(
            Canvas::new(usize::MAX, 2),
            Err(CanvasError::AreaOverflow { width: usize::MAX, height: 2 })
        );
    }

    #[test]
    fn lines_merge_into_junctions() {
        let mut c = Canvas::new(5, 5).expect("canvas");
        c.vline(2, 0, 4).unwrap();
        c.hline(0, 4, 2).unwrap();
        c.hline(2, 4, 0).unwrap();
        c.hline(0, 2, 4).unwrap();
        assert_eq!(c.to_string(), "  ┌──\n  │  \n──┼──\n  │  \n──┘  ");
    }

    #[test]
    fn branch_from_a_parent_row_renders_tees() {
        let mut c = Canvas::new(4, 3).expect("canvas");
        c.hline(0, 1, 1).unwrap();
        c.vline(1, 0, 2).unwrap();
        c.hline(1, 3, 0).unwrap();
        c.hline(1, 3, 2).unwrap();
        assert_eq!(c.to_string(), " ┌──\n─┤  \n └──");
    }

    #[test]
    fn text_replaces_connectors() {
        let mut c = Canvas::new(3, 1).expect("canvas");
        c.hline(0, 2, 0).unwrap();
        c.put_str(1, 0, "x").unwrap();
        assert_eq!(c.get(1, 0), Ok('x'));
        assert_eq!(c.get(0, 0), Ok('─'));
    }

    #[test]
    fn trimmed_output_drops_trailing_blanks() {
        let mut c = Canvas::new(4, 3).expect("canvas");
        c.put_str(0, 0, "ab").unwrap();
        assert_eq!(c.to_trimmed_string(), "ab");
    }
}
