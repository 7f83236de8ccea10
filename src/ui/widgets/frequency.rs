use crate::analysis::FrequencyTable;
use crate::ui::widgets::{widget_block, InsightWidget};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

/// Top-N list of a frequency table (mentions, hashtags, ...).
pub struct FrequencyWidget {
    title: String,
    items: Vec<(String, usize)>,
    position: (usize, usize),
    scroll_state: ListState,
}

impl FrequencyWidget {
    pub fn new(
        title: impl Into<String>,
        table: &FrequencyTable<&str>,
        top_n: usize,
        position: (usize, usize),
    ) -> Self {
        let items = table
            .most_common(top_n)
            .into_iter()
            .map(|(item, count)| (item.to_string(), count))
            .collect();

        let mut scroll_state = ListState::default();
        scroll_state.select(Some(0));

        Self {
            title: title.into(),
            items,
            position,
            scroll_state,
        }
    }
}

impl InsightWidget for FrequencyWidget {
    fn title(&self) -> &str {
        &self.title
    }

    fn position(&self) -> (usize, usize) {
        self.position
    }

    fn render(&self, frame: &mut Frame, area: Rect, selected: bool) {
        let block = widget_block(format!(" {} ", self.title), selected);

        if self.items.is_empty() {
            let empty = List::new(vec![ListItem::new("Nothing to count.")]).block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, (item, count))| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(format!("{:>5} ", count), Style::default().fg(Color::Yellow)),
                    Span::styled(item.as_str(), Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

        let mut state = self.scroll_state.clone();
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn scroll_up(&mut self) {
        if let Some(selected) = self.scroll_state.selected() {
            if selected > 0 {
                self.scroll_state.select(Some(selected - 1));
            }
        }
    }

    fn scroll_down(&mut self) {
        if let Some(selected) = self.scroll_state.selected() {
            if selected < self.items.len().saturating_sub(1) {
                self.scroll_state.select(Some(selected + 1));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::test_support::render_to_string;

    fn make_widget(top_n: usize) -> FrequencyWidget {
        let table: FrequencyTable<&str> = ["LilDicky", "LeoDiCaprio", "LilDicky", "katyperry"]
            .into_iter()
            .collect();
        FrequencyWidget::new("Top mentions", &table, top_n, (1, 1))
    }

    #[test]
    fn test_widget_title_and_position() {
        let widget = make_widget(10);
        assert_eq!(widget.title(), "Top mentions");
        assert_eq!(widget.position(), (1, 1));
    }

    #[test]
    fn test_items_are_top_n() {
        let widget = make_widget(2);
        assert_eq!(
            widget.items,
            vec![("LilDicky".to_string(), 2), ("LeoDiCaprio".to_string(), 1)]
        );
    }

    #[test]
    fn test_scroll_down_stops_at_end() {
        let mut widget = make_widget(10);
        for _ in 0..5 {
            widget.scroll_down();
        }
        assert_eq!(widget.scroll_state.selected(), Some(2));
    }

    #[test]
    fn test_render() {
        let text = render_to_string(&make_widget(10), 40, 6);
        assert!(text.contains("Top mentions"));
        assert!(text.contains(" 1.     2 LilDicky"));
    }

    #[test]
    fn test_render_empty() {
        let table: FrequencyTable<&str> = std::iter::empty().collect();
        let widget = FrequencyWidget::new("Top hashtags", &table, 10, (1, 2));
        let text = render_to_string(&widget, 40, 4);
        assert!(text.contains("Nothing to count."));
    }
}
