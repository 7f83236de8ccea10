use crate::analysis::RetweetAggregate;
use crate::report::truncate;
use crate::ui::widgets::{widget_block, InsightWidget};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Cell, List, ListItem, Row, Table, TableState},
    Frame,
};

// PuBu endpoints
const GRADIENT_LOW: (u8, u8, u8) = (255, 247, 251);
const GRADIENT_HIGH: (u8, u8, u8) = (2, 56, 88);

const TEXT_WIDTH: usize = 44;

/// Retweet aggregation table with a per-column background gradient.
pub struct RetweetTableWidget {
    rows: Vec<RetweetAggregate>,
    position: (usize, usize),
    scroll_state: TableState,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ColumnRange {
    min: f64,
    max: f64,
}

impl ColumnRange {
    fn of(values: impl Iterator<Item = f64>) -> Self {
        values.fold(
            Self {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |r, v| Self {
                min: r.min.min(v),
                max: r.max.max(v),
            },
        )
    }

    fn style(&self, value: f64) -> Style {
        gradient_style(value, self.min, self.max)
    }
}

/// Position of `value` within [min, max], 0.0 when the column is flat.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

pub fn gradient_color(value: f64, min: f64, max: f64) -> Color {
    let t = normalize(value, min, max);
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Color::Rgb(
        lerp(GRADIENT_LOW.0, GRADIENT_HIGH.0),
        lerp(GRADIENT_LOW.1, GRADIENT_HIGH.1),
        lerp(GRADIENT_LOW.2, GRADIENT_HIGH.2),
    )
}

/// Background from the gradient; foreground flips to white on dark cells.
pub fn gradient_style(value: f64, min: f64, max: f64) -> Style {
    let fg = if normalize(value, min, max) > 0.5 {
        Color::White
    } else {
        Color::Black
    };
    Style::default().bg(gradient_color(value, min, max)).fg(fg)
}

impl RetweetTableWidget {
    pub fn new(rows: Vec<RetweetAggregate>, position: (usize, usize)) -> Self {
        let mut scroll_state = TableState::default();
        scroll_state.select(Some(0));

        Self {
            rows,
            position,
            scroll_state,
        }
    }

    pub fn selected(&self) -> Option<&RetweetAggregate> {
        self.rows.get(self.scroll_state.selected()?)
    }
}

impl InsightWidget for RetweetTableWidget {
    fn title(&self) -> &str {
        "Retweets"
    }

    fn position(&self) -> (usize, usize) {
        self.position
    }

    fn render(&self, frame: &mut Frame, area: Rect, selected: bool) {
        let block = widget_block(
            format!(" {} ({} original tweets) ", self.title(), self.rows.len()),
            selected,
        );

        if self.rows.is_empty() {
            let empty = List::new(vec![ListItem::new("No retweets found.")]).block(block);
            frame.render_widget(empty, area);
            return;
        }

        let followers = ColumnRange::of(self.rows.iter().map(|r| r.followers as f64));
        let retweets = ColumnRange::of(self.rows.iter().map(|r| r.retweets as f64));
        let favorites = ColumnRange::of(self.rows.iter().map(|r| r.favorites as f64));
        let rates = ColumnRange::of(self.rows.iter().map(|r| r.favorite_rate()));

        let header = Row::new(vec![
            "ScreenName",
            "Text",
            "Followers",
            "Retweets",
            "Favorites",
            "Fav%",
        ])
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|r| {
                let rate = r.favorite_rate();
                Row::new(vec![
                    Cell::from(r.screen_name.clone()).style(Style::default().fg(Color::Cyan)),
                    Cell::from(truncate(&r.text, TEXT_WIDTH)),
                    Cell::from(r.followers.to_string()).style(followers.style(r.followers as f64)),
                    Cell::from(r.retweets.to_string()).style(retweets.style(r.retweets as f64)),
                    Cell::from(r.favorites.to_string()).style(favorites.style(r.favorites as f64)),
                    Cell::from(format!("{:.3}", rate)).style(rates.style(rate)),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(16),
            Constraint::Min(20),
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Length(10),
            Constraint::Length(8),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        let mut state = self.scroll_state.clone();
        frame.render_stateful_widget(table, area, &mut state);
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
            if selected < self.rows.len().saturating_sub(1) {
                self.scroll_state.select(Some(selected + 1));
            }
        }
    }
}
