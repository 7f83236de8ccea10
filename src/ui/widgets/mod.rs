pub mod frequency;
pub mod language_chart;
pub mod retweet_table;
pub mod trend_overlap;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

pub trait InsightWidget {
    fn title(&self) -> &str;

    /// Grid cell as (row, col).
    fn position(&self) -> (usize, usize);

    fn render(&self, frame: &mut Frame, area: Rect, selected: bool);

    fn scroll_up(&mut self) {}

    fn scroll_down(&mut self) {}
}

/// Bordered block with the focus highlight every widget shares.
pub(crate) fn widget_block(title: String, selected: bool) -> Block<'static> {
    let border_style = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, Terminal};

    /// Render one widget into an in-memory terminal and return its text.
    pub fn render_to_string(widget: &dyn super::InsightWidget, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                widget.render(frame, area, false)
            })
            .unwrap();
        buffer_text(&terminal)
    }

    pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }
}
