// ABOUTME: Server-rendered HTML for the tracker's single page
// ABOUTME: Renders the add form, a status notice, today's entries and the daily totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use html_escape::{encode_double_quoted_attribute, encode_text};
use macro_tracker_core::constants::serving::{MAX_GRAMS, MIN_GRAMS, STEP_GRAMS};
use macro_tracker_core::models::MacroTotals;

use crate::database::FoodLog;

/// Severity of the message shown above the log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Entry added
    Success,
    /// Nothing was logged, but nothing went wrong either
    Warning,
    /// The nutrient source failed
    Error,
}

impl NoticeLevel {
    const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "notice success",
            Self::Warning => "notice warning",
            Self::Error => "notice error",
        }
    }
}

/// One-line message rendered after an add action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// Plain text, escaped on render
    pub message: String,
}

impl Notice {
    /// Success notice
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Warning notice
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    /// Error notice
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Everything the page needs for one render
#[derive(Debug)]
pub struct TrackerPage<'a> {
    /// Query echoed back into the search input
    pub query: &'a str,
    /// Serving echoed back into the numeric input
    pub quantity_g: f64,
    /// Outcome of the add action, if one ran
    pub notice: Option<Notice>,
    /// Calendar day being summarized
    pub today: NaiveDate,
    /// Entries of `today`
    pub todays_log: &'a FoodLog,
}

const PAGE_STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
table{border-collapse:collapse;width:100%}th,td{border:1px solid #ddd;padding:.3rem .6rem}\
td.num{text-align:right}.notice{padding:.6rem;border-radius:.3rem;margin:1rem 0}\
.success{background:#e6f4ea}.warning{background:#fff4e5}.error{background:#fdecea}\
footer{color:#777;font-size:.85rem}";

/// Render the complete HTML document
#[must_use]
pub fn render_tracker_page(page: &TrackerPage<'_>) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Personal Calorie &amp; Macro Tracker</title>\n");
    html.push_str(&format!("<style>{PAGE_STYLE}</style>\n</head>\n<body>\n"));
    html.push_str("<h1>\u{1f34f} Personal Calorie &amp; Macro Tracker</h1>\n");

    html.push_str(&render_form(page.query, page.quantity_g));

    if let Some(notice) = &page.notice {
        html.push_str(&format!(
            "<div class=\"{}\">{}</div>\n",
            notice.level.css_class(),
            encode_text(&notice.message)
        ));
    }

    html.push_str(&format!(
        "<h2>Today's Log <small>({})</small></h2>\n",
        page.today
    ));
    if page.todays_log.is_empty() {
        html.push_str("<p class=\"empty\">No entries yet today.</p>\n");
    } else {
        html.push_str(&render_entries(page.todays_log));
        html.push_str("<h2>Totals for Today</h2>\n");
        html.push_str(&render_totals(&page.todays_log.totals()));
    }

    html.push_str("<hr>\n<footer>Data source: OpenFoodFacts</footer>\n</body>\n</html>\n");
    html
}

fn render_form(query: &str, quantity_g: f64) -> String {
    format!(
        "<form method=\"post\" action=\"/\">\n\
         <label for=\"query\">Search food (powered by OpenFoodFacts):</label><br>\n\
         <input type=\"text\" id=\"query\" name=\"query\" value=\"{query}\"><br>\n\
         <label for=\"quantity_g\">Serving size (g)</label><br>\n\
         <input type=\"number\" id=\"quantity_g\" name=\"quantity_g\" \
         min=\"{MIN_GRAMS}\" max=\"{MAX_GRAMS}\" step=\"{STEP_GRAMS}\" value=\"{quantity_g}\"><br>\n\
         <button type=\"submit\">Add to log</button>\n\
         </form>\n",
        query = encode_double_quoted_attribute(query),
    )
}

fn render_entries(log: &FoodLog) -> String {
    let mut html = String::from(
        "<table class=\"entries\">\n<thead><tr><th>food</th><th>quantity_g</th><th>kcal</th>\
         <th>protein</th><th>carbs</th><th>fat</th></tr></thead>\n<tbody>\n",
    );
    for entry in log.entries() {
        html.push_str(&format!(
            "<tr><td>{}</td><td class=\"num\">{:.1}</td><td class=\"num\">{:.1}</td>\
             <td class=\"num\">{:.2}</td><td class=\"num\">{:.2}</td><td class=\"num\">{:.2}</td></tr>\n",
            encode_text(&entry.food),
            entry.quantity_g,
            entry.kcal,
            entry.protein,
            entry.carbs,
            entry.fat
        ));
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

fn render_totals(totals: &MacroTotals) -> String {
    format!(
        "<table class=\"totals\">\n<thead><tr><th></th><th>kcal</th><th>protein</th>\
         <th>carbs</th><th>fat</th></tr></thead>\n\
         <tbody><tr><th>Total</th><td class=\"num\">{:.1}</td><td class=\"num\">{:.2}</td>\
         <td class=\"num\">{:.2}</td><td class=\"num\">{:.2}</td></tr></tbody>\n</table>\n",
        totals.kcal, totals.protein, totals.carbs, totals.fat
    )
}
