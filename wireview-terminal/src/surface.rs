/// Character-cell drawing surface for the terminal
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::{self, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub glyph: char,
    pub color: Color,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        glyph: ' ',
        color: Color::Reset,
    };
}

/// A width x height grid of coloured characters, row-major
pub struct CharGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CharGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Change dimensions, dropping the previous contents
    pub fn resize(&mut self, width: usize, height: usize) {
        debug!(width, height, "resizing character grid");
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::BLANK; width * height];
    }

    /// Set one cell. Coordinates off the grid are ignored.
    pub fn plot(&mut self, x: i64, y: i64, glyph: char, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = Cell { glyph, color };
        }
    }

    pub fn get(&self, x: i64, y: i64) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Plain-text rows, without colour
    pub fn to_text(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| row.iter().map(|c| c.glyph).collect())
            .collect()
    }

    /// Queue the grid for output starting at the top-left corner
    pub fn draw<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let mut current = None;
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let cell = self.cells[y * self.width + x];
                if current != Some(cell.color) {
                    writer.queue(SetForegroundColor(cell.color))?;
                    current = Some(cell.color);
                }
                writer.queue(Print(cell.glyph))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_and_get() {
        let mut grid = CharGrid::new(4, 3);
        grid.plot(1, 2, '#', Color::Green);
        assert_eq!(
            grid.get(1, 2),
            Some(Cell {
                glyph: '#',
                color: Color::Green
            })
        );
        assert_eq!(grid.to_text(), vec!["    ", "    ", " #  "]);
    }

    #[test]
    fn test_plot_off_grid_is_ignored() {
        let mut grid = CharGrid::new(4, 3);
        grid.plot(-1, 0, '#', Color::Green);
        grid.plot(4, 0, '#', Color::Green);
        grid.plot(0, 3, '#', Color::Green);
        assert!(grid.to_text().iter().all(|row| row.trim().is_empty()));
        assert_eq!(grid.get(4, 0), None);
    }

    #[test]
    fn test_clear_and_resize() {
        let mut grid = CharGrid::new(2, 2);
        grid.plot(0, 0, '@', Color::Green);
        grid.clear();
        assert_eq!(grid.get(0, 0), Some(Cell::BLANK));

        grid.plot(1, 1, '@', Color::Green);
        grid.resize(5, 1);
        assert_eq!((grid.width(), grid.height()), (5, 1));
        assert_eq!(grid.to_text(), vec!["     "]);
    }

    #[test]
    fn test_draw_writes_every_glyph() {
        let mut grid = CharGrid::new(3, 2);
        grid.plot(2, 1, '@', Color::Green);
        let mut out = Vec::new();
        grid.draw(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('@'));
    }
}
