//! Vertical bar chart for the yearly rating card

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::RatingBar;

/// Bars drawn bottom-up, each taking ~80% of its column.
pub struct RatingBars<'a> {
    bars: &'a [RatingBar],
    positive: Color,
    negative: Color,
}

impl<'a> RatingBars<'a> {
    pub fn new(bars: &'a [RatingBar]) -> Self {
        Self {
            bars,
            positive: Color::Green,
            negative: Color::Red,
        }
    }

    pub fn colors(mut self, positive: Color, negative: Color) -> Self {
        self.positive = positive;
        self.negative = negative;
        self
    }
}

impl<'a> Widget for RatingBars<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.bars.is_empty() {
            return;
        }

        // Wider than the area: one column per bar, the rest is cut off.
        let column_width = (area.width as usize / self.bars.len()).max(1);
        let columns = (area.width as usize / column_width).min(self.bars.len());
        let column_width = column_width as u16;
        let bar_width = ((column_width * 4) / 5).max(1);
        let pad = (column_width - bar_width) / 2;
        let shown = &self.bars[..columns];
        let heights = bar_heights(shown, area.height);

        for (i, (bar, height)) in shown.iter().zip(heights).enumerate() {
            let x0 = area.x + (i as u16) * column_width + pad;
            let style = Style::default().fg(if bar.positive {
                self.positive
            } else {
                self.negative
            });
            for dy in 0..height {
                let y = area.y + area.height - 1 - dy;
                for x in x0..(x0 + bar_width).min(area.x + area.width) {
                    buf.get_mut(x, y).set_char('█').set_style(style);
                }
            }
        }
    }
}

/// Scale percentage heights to whole rows of `height`; any non-zero bar gets at least one row.
pub fn bar_heights(bars: &[RatingBar], height: u16) -> Vec<u16> {
    bars.iter()
        .map(|bar| {
            let percent = bar.percent.min(100) as u32;
            let rows = (percent * height as u32 + 50) / 100;
            if percent > 0 {
                (rows as u16).clamp(1, height)
            } else {
                0
            }
        })
        .collect()
}
