use macroquad::prelude::*;

use crate::application::config::STATUS_HEIGHT;
use crate::application::{Frame, Renderer};
use crate::domain::{Cell, ForestCell, LifeCell};

/// How a cell state looks on screen.
/// `None` leaves the background showing through.
pub trait Palette: Cell {
    fn color(self) -> Option<Color>;

    /// Drawn with an outline so it stands out, the way burning trees are bold
    fn emphasized(self) -> bool {
        false
    }
}

impl Palette for ForestCell {
    fn color(self) -> Option<Color> {
        match self {
            ForestCell::Empty => None,
            ForestCell::Tree => Some(Color::from_rgba(0, 170, 60, 255)),
            ForestCell::Burning => Some(Color::from_rgba(255, 40, 20, 255)),
        }
    }

    fn emphasized(self) -> bool {
        self.is_burning()
    }
}

impl Palette for LifeCell {
    fn color(self) -> Option<Color> {
        match self {
            LifeCell::Dead => None,
            LifeCell::Alive => Some(Color::from_rgba(0, 255, 150, 255)), // Bright green
        }
    }
}

/// Status line: play indicator, generation, p, f, p/f and frame rate
pub fn status_line<C>(frame: &Frame<'_, C>, fps: f32) -> String {
    let params = &frame.parameters;
    format!(
        "{} | {} | gen: {:4} | p: {:.3} | f: {:.3} | p/f: {:3.0} | FPS: {:.0} | cached: {}",
        if frame.is_playing { "|>" } else { "||" },
        frame.rule,
        frame.generation,
        params.growth,
        params.ignition,
        params.growth_to_ignition(),
        fps,
        frame.history,
    )
}

/// Draws frames into the macroquad window
pub struct WindowRenderer {
    cell_size: f32,
    fps: f32,
    overlay: Option<String>,
    drawn: bool,
}

impl WindowRenderer {
    pub fn new(cell_size: f32, fps: f32) -> Self {
        Self {
            cell_size,
            fps,
            overlay: None,
            drawn: false,
        }
    }

    /// Text shown at the bottom of the window (command prompt or error)
    pub fn set_overlay(&mut self, overlay: Option<String>) {
        self.overlay = overlay;
    }

    /// Forget whether this frame was drawn; call once per window frame
    pub fn begin_frame(&mut self) {
        self.drawn = false;
    }

    pub fn drawn(&self) -> bool {
        self.drawn
    }

    fn draw_cells<C: Palette>(&self, frame: &Frame<'_, C>) {
        let size = self.cell_size;
        for (row, col, cell) in frame.grid.iter_cells() {
            let Some(color) = cell.color() else { continue };
            let x = col as f32 * size;
            let y = STATUS_HEIGHT + row as f32 * size;
            draw_rectangle(x, y, size, size, color);
            if cell.emphasized() && size >= 4.0 {
                draw_rectangle_lines(x, y, size, size, 1.0, YELLOW);
            }
        }
    }

    fn draw_status<C>(&self, frame: &Frame<'_, C>) {
        draw_rectangle(0.0, 0.0, screen_width(), STATUS_HEIGHT, Color::from_rgba(30, 30, 30, 255));
        let color = if frame.is_playing {
            Color::from_rgba(0, 255, 0, 255)
        } else {
            Color::from_rgba(255, 165, 0, 255)
        };
        draw_text(&status_line(frame, self.fps), 6.0, STATUS_HEIGHT - 7.0, 18.0, color);
    }

    fn draw_overlay(&self) {
        if let Some(text) = &self.overlay {
            let y = screen_height() - 6.0;
            draw_rectangle(0.0, y - 18.0, screen_width(), 24.0, Color::from_rgba(0, 0, 0, 200));
            draw_text(text, 6.0, y, 18.0, WHITE);
        }
    }
}

impl<C: Palette> Renderer<C> for WindowRenderer {
    fn render(&mut self, frame: &Frame<'_, C>) {
        clear_background(BLACK);
        self.draw_cells(frame);
        self.draw_status(frame);
        self.draw_overlay();
        self.drawn = true;
    }
}
