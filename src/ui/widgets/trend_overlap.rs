use crate::analysis::{common_trends, trend_names};
use crate::datasets::TrendSnapshot;
use crate::ui::widgets::{widget_block, InsightWidget};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

/// Trends present in both snapshots, with the worldwide volume when known.
pub struct TrendOverlapWidget {
    trends: Vec<(String, Option<u64>)>,
    worldwide_total: usize,
    regional_total: usize,
    position: (usize, usize),
    scroll_state: ListState,
}

impl TrendOverlapWidget {
    pub fn new(worldwide: &TrendSnapshot, regional: &TrendSnapshot, position: (usize, usize)) -> Self {
        let world_names = trend_names(worldwide);
        let regional_names = trend_names(regional);

        let trends = common_trends(&world_names, &regional_names)
            .into_iter()
            .map(|name| {
                let volume = worldwide
                    .trends
                    .iter()
                    .find(|t| t.name == name)
                    .and_then(|t| t.tweet_volume);
                (name, volume)
            })
            .collect();

        let mut scroll_state = ListState::default();
        scroll_state.select(Some(0));

        Self {
            trends,
            worldwide_total: world_names.len(),
            regional_total: regional_names.len(),
            position,
            scroll_state,
        }
    }
}

impl InsightWidget for TrendOverlapWidget {
    fn title(&self) -> &str {
        "Common trends"
    }

    fn position(&self) -> (usize, usize) {
        self.position
    }

    fn render(&self, frame: &mut Frame, area: Rect, selected: bool) {
        let block = widget_block(
            format!(
                " {} ({} of {}/{}) ",
                self.title(),
                self.trends.len(),
                self.worldwide_total,
                self.regional_total
            ),
            selected,
        );

        if self.trends.is_empty() {
            let empty = List::new(vec![ListItem::new("No overlapping trends.")]).block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .trends
            .iter()
            .map(|(name, volume)| {
                let volume = match volume {
                    Some(v) => Span::styled(format!(" {}", v), Style::default().fg(Color::Green)),
                    None => Span::styled(" n/a", Style::default().fg(Color::DarkGray)),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(name.as_str(), Style::default().fg(Color::White)),
                    volume,
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
            if selected < self.trends.len().saturating_sub(1) {
                self.scroll_state.select(Some(selected + 1));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::fixtures::{snapshot, trend};
    use crate::ui::widgets::test_support::render_to_string;

    fn make_widget() -> TrendOverlapWidget {
        let mut worldwide = snapshot(&[]);
        worldwide.trends = vec![
            trend("#WeLoveTheEarth", Some(125_000)),
            trend("#GoodFriday", None),
            trend("#BeratKandili", Some(10)),
        ];
        let regional = snapshot(&["#GoodFriday", "#WeLoveTheEarth", "Notre Dame", "#NBAPlayoffs"]);
        TrendOverlapWidget::new(&worldwide, &regional, (1, 0))
    }

    #[test]
    fn test_overlap_with_volumes() {
        let widget = make_widget();
        assert_eq!(
            widget.trends,
            vec![
                ("#GoodFriday".to_string(), None),
                ("#WeLoveTheEarth".to_string(), Some(125_000)),
            ]
        );
        assert_eq!(widget.worldwide_total, 3);
        assert_eq!(widget.regional_total, 4);
    }

    #[test]
    fn test_scroll() {
        let mut widget = make_widget();
        widget.scroll_down();
        widget.scroll_down();
        assert_eq!(widget.scroll_state.selected(), Some(1));
        widget.scroll_up();
        widget.scroll_up();
        assert_eq!(widget.scroll_state.selected(), Some(0));
    }

    #[test]
    fn test_render() {
        let text = render_to_string(&make_widget(), 50, 6);
        assert!(text.contains("Common trends (2 of 3/4)"));
        assert!(text.contains("#WeLoveTheEarth 125000"));
        assert!(text.contains("#GoodFriday n/a"));
    }

    #[test]
    fn test_render_empty() {
        let widget = TrendOverlapWidget::new(&snapshot(&["A"]), &snapshot(&["B"]), (1, 0));
        let text = render_to_string(&widget, 40, 4);
        assert!(text.contains("No overlapping trends."));
    }
}
