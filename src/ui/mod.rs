pub mod widgets;

use crate::analysis::{aggregate_retweets, extract, FrequencyTable};
use crate::config::Config;
use crate::datasets::Datasets;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use std::time::Duration;
use widgets::{
    frequency::FrequencyWidget, language_chart::LanguageChartWidget,
    retweet_table::RetweetTableWidget, trend_overlap::TrendOverlapWidget, InsightWidget,
};

pub struct Dashboard {
    widgets: Vec<Box<dyn InsightWidget>>,
    focus: usize,
    tick_rate: Duration,
    should_quit: bool,
}

impl Dashboard {
    pub fn new(data: &Datasets, config: &Config) -> Self {
        let top_n = config.report.top_n;
        let mentions: FrequencyTable<&str> =
            extract::mentioned_screen_names(&data.tweets).into_iter().collect();
        let hashtags: FrequencyTable<&str> = extract::hashtags(&data.tweets).into_iter().collect();
        let languages: FrequencyTable<&str> = extract::languages(&data.tweets).into_iter().collect();

        let widgets: Vec<Box<dyn InsightWidget>> = vec![
            Box::new(RetweetTableWidget::new(aggregate_retweets(&data.tweets), (0, 0))),
            Box::new(LanguageChartWidget::new(&languages, (0, 1))),
            Box::new(TrendOverlapWidget::new(&data.worldwide, &data.regional, (1, 0))),
            Box::new(FrequencyWidget::new("Top mentions", &mentions, top_n, (1, 1))),
            Box::new(FrequencyWidget::new("Top hashtags", &hashtags, top_n, (1, 2))),
        ];

        Self {
            widgets,
            focus: 0,
            tick_rate: Duration::from_millis(config.dashboard.tick_rate_ms),
            should_quit: false,
        }
    }

    pub fn focused_title(&self) -> Option<&str> {
        self.widgets.get(self.focus).map(|w| w.title())
    }

    pub fn draw(&self, frame: &mut Frame) {
        let [body, footer] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .areas(frame.area());

        for (idx, area) in self.widget_areas(body) {
            self.widgets[idx].render(frame, area, idx == self.focus);
        }

        let help = Line::from(vec![
            Span::styled(" q", Style::default().fg(Color::Yellow)),
            Span::raw(" quit  "),
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::raw(" next  "),
            Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
            Span::raw(" scroll"),
        ]);
        frame.render_widget(Paragraph::new(help), footer);
    }

    /// Lay widgets out on their (row, col) grid: the first row gets 60% of
    /// the height, columns within a row share the width evenly.
    fn widget_areas(&self, body: Rect) -> Vec<(usize, Rect)> {
        let row_count = self
            .widgets
            .iter()
            .map(|w| w.position().0 + 1)
            .max()
            .unwrap_or(0);
        if row_count == 0 {
            return Vec::new();
        }

        let row_constraints: Vec<Constraint> = (0..row_count)
            .map(|r| {
                if r == 0 && row_count > 1 {
                    Constraint::Percentage(60)
                } else {
                    Constraint::Fill(1)
                }
            })
            .collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(row_constraints)
            .split(body);

        let mut areas = Vec::with_capacity(self.widgets.len());
        for (row, row_area) in rows.iter().enumerate() {
            let mut in_row: Vec<(usize, usize)> = self
                .widgets
                .iter()
                .enumerate()
                .filter(|(_, w)| w.position().0 == row)
                .map(|(idx, w)| (w.position().1, idx))
                .collect();
            in_row.sort();
            if in_row.is_empty() {
                continue;
            }

            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Fill(1); in_row.len()])
                .split(*row_area);
            for ((_, idx), area) in in_row.into_iter().zip(cols.iter()) {
                areas.push((idx, *area));
            }
        }
        areas
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Tab => self.focus = (self.focus + 1) % self.widgets.len().max(1),
            KeyCode::BackTab => {
                let len = self.widgets.len().max(1);
                self.focus = (self.focus + len - 1) % len;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(w) = self.widgets.get_mut(self.focus) {
                    w.scroll_up();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(w) = self.widgets.get_mut(self.focus) {
                    w.scroll_down();
                }
            }
            _ => {}
        }
    }

    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(self.tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }
}

/// Take over the terminal, run the dashboard, and always give it back.
pub fn run(data: &Datasets, config: &Config) -> Result<()> {
    let dashboard = Dashboard::new(data, config);
    tracing::info!(widgets = dashboard.widgets.len(), "starting dashboard");

    let mut terminal = ratatui::try_init()?;
    let result = dashboard.run(&mut terminal);
    ratatui::restore();
    result
}
