use crate::analysis::FrequencyTable;
use crate::ui::widgets::{widget_block, InsightWidget};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, List, ListItem},
    Frame,
};

const BAR_WIDTH: u16 = 5;
const BAR_GAP: u16 = 1;

/// Histogram of tweet language codes, bins in the order they first appear.
pub struct LanguageChartWidget {
    bins: Vec<(String, u64)>,
    position: (usize, usize),
    offset: usize,
}

impl LanguageChartWidget {
    pub fn new(languages: &FrequencyTable<&str>, position: (usize, usize)) -> Self {
        let bins = languages
            .in_encounter_order()
            .iter()
            .map(|(lang, count)| (lang.to_string(), *count as u64))
            .collect();

        Self {
            bins,
            position,
            offset: 0,
        }
    }

    /// Bins that fit into `width` columns starting at the scroll offset.
    fn visible_bins(&self, width: u16) -> &[(String, u64)] {
        let fits = (width / (BAR_WIDTH + BAR_GAP)).max(1) as usize;
        let start = self.offset.min(self.bins.len());
        let end = (start + fits).min(self.bins.len());
        &self.bins[start..end]
    }
}

impl InsightWidget for LanguageChartWidget {
    fn title(&self) -> &str {
        "Languages"
    }

    fn position(&self) -> (usize, usize) {
        self.position
    }

    fn render(&self, frame: &mut Frame, area: Rect, selected: bool) {
        let total: u64 = self.bins.iter().map(|(_, c)| c).sum();
        let block = widget_block(format!(" {} ({} tweets) ", self.title(), total), selected);

        if self.bins.is_empty() {
            let empty = List::new(vec![ListItem::new("No tweets loaded.")]).block(block);
            frame.render_widget(empty, area);
            return;
        }

        let bars: Vec<Bar> = self
            .visible_bins(area.width.saturating_sub(2))
            .iter()
            .map(|(lang, count)| {
                Bar::default()
                    .value(*count)
                    .label(Line::from(lang.clone()))
                    .style(Style::default().fg(Color::Green))
                    .value_style(
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    )
            })
            .collect();

        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(BAR_WIDTH)
            .bar_gap(BAR_GAP);

        frame.render_widget(chart, area);
    }

    fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    fn scroll_down(&mut self) {
        if self.offset < self.bins.len().saturating_sub(1) {
            self.offset += 1;
        }
    }
}
