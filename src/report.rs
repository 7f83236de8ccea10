//! Console walkthrough of the loaded datasets.

use crate::analysis::{
    activity, aggregate_retweets, common_trends, extract, retweets::retweet_rows, trend_names,
    trends::ranked_by_volume, ActivityWindow, FrequencyTable, RetweetAggregate,
};
use crate::config::ReportConfig;
use crate::datasets::{Datasets, TrendSnapshot};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;

const TEXT_COLUMN_WIDTH: usize = 48;

/// Walkthrough steps, numbered the way they are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    RawTrends = 1,
    PrettyTrends = 2,
    CommonTrends = 3,
    SampleTweets = 4,
    Extraction = 5,
    Frequencies = 6,
    RetweetRows = 7,
    RetweetTable = 8,
    Languages = 9,
    Activity = 10,
}

impl Step {
    pub const ALL: [Step; 10] = [
        Step::RawTrends,
        Step::PrettyTrends,
        Step::CommonTrends,
        Step::SampleTweets,
        Step::Extraction,
        Step::Frequencies,
        Step::RetweetRows,
        Step::RetweetTable,
        Step::Languages,
        Step::Activity,
    ];

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| *s as u8 == n)
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::RawTrends => "Local and global trends",
            Step::PrettyTrends => "Prettifying the output",
            Step::CommonTrends => "Finding common trends",
            Step::SampleTweets => "Exploring the hot trend",
            Step::Extraction => "Digging deeper",
            Step::Frequencies => "Frequency analysis",
            Step::RetweetRows => "Activity around the trend",
            Step::RetweetTable => "Retweet table",
            Step::Languages => "Analyzing used languages",
            Step::Activity => "Activity window",
        }
    }
}

pub struct Report<'a> {
    data: &'a Datasets,
    config: &'a ReportConfig,
}

impl<'a> Report<'a> {
    pub fn new(data: &'a Datasets, config: &'a ReportConfig) -> Self {
        Self { data, config }
    }

    pub fn write_all(&self, out: &mut impl Write) -> Result<()> {
        for step in Step::ALL {
            self.write_step(step, out)?;
        }
        Ok(())
    }

    pub fn write_step(&self, step: Step, out: &mut impl Write) -> Result<()> {
        writeln!(
            out,
            "{} {}",
            format!("## {}.", step as u8).blue().bold(),
            step.title().bold()
        )?;

        match step {
            Step::RawTrends => self.raw_trends(out)?,
            Step::PrettyTrends => self.pretty_trends(out)?,
            Step::CommonTrends => self.common_trends(out)?,
            Step::SampleTweets => self.sample_tweets(out)?,
            Step::Extraction => self.extraction(out)?,
            Step::Frequencies => self.frequencies(out)?,
            Step::RetweetRows => self.retweet_rows(out)?,
            Step::RetweetTable => self.retweet_table(out)?,
            Step::Languages => self.languages(out)?,
            Step::Activity => self.activity(out)?,
        }

        writeln!(out)?;
        Ok(())
    }

    fn raw_trends(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", serde_json::to_string(&self.data.worldwide)?)?;
        writeln!(out, "{}", serde_json::to_string(&self.data.regional)?)?;
        Ok(())
    }

    fn pretty_trends(&self, out: &mut impl Write) -> Result<()> {
        let worldwide = snapshot_label(&self.data.worldwide, "Worldwide");
        let regional = snapshot_label(&self.data.regional, "Regional");

        writeln!(out, "{}", format!("{} trends:", worldwide).cyan())?;
        writeln!(out, "{}", serde_json::to_string_pretty(&self.data.worldwide)?)?;
        writeln!(out)?;
        writeln!(out, "{}", format!("{} trends:", regional).cyan())?;
        writeln!(out, "{}", serde_json::to_string_pretty(&self.data.regional)?)?;
        Ok(())
    }

    fn common_trends(&self, out: &mut impl Write) -> Result<()> {
        let world = trend_names(&self.data.worldwide);
        let regional = trend_names(&self.data.regional);
        let common = common_trends(&world, &regional);

        writeln!(out, "{}\n", format_set(&world))?;
        writeln!(out, "{}\n", format_set(&regional))?;
        writeln!(
            out,
            "{} common trends: {}",
            common.len().to_string().green().bold(),
            format_set(&common)
        )?;

        let ranked = ranked_by_volume(&self.data.worldwide);
        if !ranked.is_empty() {
            writeln!(out)?;
            writeln!(out, "{}", "Worldwide trends by 24h volume:".cyan())?;
            for trend in ranked.iter().take(self.config.top_n) {
                let volume = trend.tweet_volume.unwrap_or(0);
                let marker = if common.contains(&trend.name) { "*" } else { " " };
                writeln!(out, " {} {:<32} {:>10}", marker, trend.name, volume)?;
            }
        }
        Ok(())
    }

    fn sample_tweets(&self, out: &mut impl Write) -> Result<()> {
        let sample = &self.data.tweets[..self.config.sample_tweets.min(self.data.tweets.len())];
        writeln!(out, "{}", serde_json::to_string_pretty(sample)?)?;
        Ok(())
    }

    fn extraction(&self, out: &mut impl Write) -> Result<()> {
        let n = self.config.preview_count;
        let tweets = &self.data.tweets;

        let texts = extract::texts(tweets);
        let names = extract::mentioned_screen_names(tweets);
        let hashtags = extract::hashtags(tweets);

        for preview in [&texts, &names, &hashtags] {
            let head = &preview[..n.min(preview.len())];
            writeln!(out, "{}\n", to_json_indent_1(&head)?)?;
        }
        Ok(())
    }

    fn frequencies(&self, out: &mut impl Write) -> Result<()> {
        let tweets = &self.data.tweets;
        let names: FrequencyTable<&str> =
            extract::mentioned_screen_names(tweets).into_iter().collect();
        let hashtags: FrequencyTable<&str> = extract::hashtags(tweets).into_iter().collect();
        let sources: FrequencyTable<String> = extract::sources(tweets).into_iter().collect();

        writeln!(out, "{}", "Most mentioned:".cyan())?;
        write_counts(out, &names.most_common(self.config.top_n))?;
        writeln!(out, "{}", "Most used hashtags:".cyan())?;
        write_counts(out, &hashtags.most_common(self.config.top_n))?;

        if !sources.is_empty() {
            writeln!(out, "{}", "Clients used:".cyan())?;
            write_counts(out, &sources.most_common(self.config.top_n))?;
        }
        Ok(())
    }

    fn retweet_rows(&self, out: &mut impl Write) -> Result<()> {
        let rows = retweet_rows(&self.data.tweets);
        writeln!(
            out,
            "{} of {} tweets are retweets",
            rows.len().to_string().green().bold(),
            self.data.tweets.len()
        )?;
        for row in rows.iter().take(self.config.preview_count) {
            writeln!(
                out,
                "  ({}, {}, {}, {:?}, {:?})",
                row.retweets,
                row.favorites,
                row.followers,
                row.screen_name,
                truncate(&row.text, TEXT_COLUMN_WIDTH)
            )?;
        }
        Ok(())
    }

    fn retweet_table(&self, out: &mut impl Write) -> Result<()> {
        let table = aggregate_retweets(&self.data.tweets);
        write_retweet_table(out, &table)
    }

    fn languages(&self, out: &mut impl Write) -> Result<()> {
        let languages: FrequencyTable<&str> =
            extract::languages(&self.data.tweets).into_iter().collect();
        let max = languages.max_count();

        for (lang, count) in languages.in_encounter_order() {
            let width = bar_width(*count, max, self.config.histogram_width);
            writeln!(
                out,
                "{:<5} {} {}",
                lang,
                "█".repeat(width).green(),
                count
            )?;
        }
        Ok(())
    }

    fn activity(&self, out: &mut impl Write) -> Result<()> {
        let Some(window) = ActivityWindow::from_tweets(&self.data.tweets) else {
            writeln!(out, "{}", "No tweet timestamps available.".dimmed())?;
            return Ok(());
        };

        writeln!(
            out,
            "From {} to {} ({} min)",
            window.earliest.format("%Y-%m-%d %H:%M"),
            window.latest.format("%Y-%m-%d %H:%M"),
            window.duration().num_minutes()
        )?;
        for (day, count) in activity::tweets_per_day(&self.data.tweets) {
            writeln!(out, "  {} {:>6}", day.format("%a %Y-%m-%d"), count)?;
        }
        Ok(())
    }
}

fn write_retweet_table(out: &mut impl Write, table: &[RetweetAggregate]) -> Result<()> {
    if table.is_empty() {
        writeln!(out, "{}", "No retweets found.".dimmed())?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<16} {:<w$} {:>10} {:>8} {:>9} {:>7}",
        "ScreenName",
        "Text",
        "Followers",
        "Retweets",
        "Favorites",
        "Fav%",
        w = TEXT_COLUMN_WIDTH
    )?;
    writeln!(out, "{}", "─".repeat(TEXT_COLUMN_WIDTH + 56))?;

    for group in table {
        writeln!(
            out,
            "{:<16} {:<w$} {:>10} {:>8} {:>9} {:>7.3}",
            group.screen_name.cyan(),
            truncate(&group.text, TEXT_COLUMN_WIDTH),
            group.followers,
            group.retweets,
            group.favorites,
            group.favorite_rate(),
            w = TEXT_COLUMN_WIDTH
        )?;
    }
    Ok(())
}

fn write_counts<T: std::fmt::Display>(out: &mut impl Write, counts: &[(T, usize)]) -> Result<()> {
    for (item, count) in counts {
        writeln!(out, "  {:>5}  {}", count, item)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Name of the place a snapshot was taken for, `fallback` when it has none.
fn snapshot_label<'s>(snapshot: &'s TrendSnapshot, fallback: &'s str) -> &'s str {
    snapshot
        .locations
        .first()
        .map(|l| l.name.as_str())
        .unwrap_or(fallback)
}

/// `{'a', 'b'}` style rendering of a name set.
fn format_set(set: &BTreeSet<String>) -> String {
    let items: Vec<String> = set.iter().map(|s| format!("{:?}", s)).collect();
    format!("{{{}}}", items.join(", "))
}

fn to_json_indent_1<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// First wrapped line of `text`, with an ellipsis if anything was cut.
pub fn truncate(text: &str, width: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let lines = textwrap::wrap(&flat, width.saturating_sub(1).max(1));
    match lines.as_slice() {
        [] => String::new(),
        [only] => only.to_string(),
        [first, ..] => format!("{}…", first),
    }
}

/// Bar length scaled so the largest count fills `width`; any non-zero count
/// gets at least one cell.
pub fn bar_width(count: usize, max: usize, width: usize) -> usize {
    if max == 0 || count == 0 {
        return 0;
    }
    (count * width / max).max(1)
}
