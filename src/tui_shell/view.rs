use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use time::OffsetDateTime;

use crate::admin::PageButton;

/// Countries shown per row before the rest collapse into `+N`.
const COUNTRY_CHIPS: usize = 3;

pub(super) fn countries_cell(countries: &[String]) -> String {
    if countries.is_empty() {
        return "No countries".to_string();
    }
    let mut out = countries
        .iter()
        .take(COUNTRY_CHIPS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if countries.len() > COUNTRY_CHIPS {
        out.push_str(&format!(" +{}", countries.len() - COUNTRY_CHIPS));
    }
    out
}

/// `HH:MM:SS` of `ts` in its own offset.
pub(super) fn fmt_clock(ts: OffsetDateTime) -> String {
    time::format_description::parse("[hour]:[minute]:[second]")
        .ok()
        .and_then(|fmt| ts.format(&fmt).ok())
        .unwrap_or_else(|| ts.to_string())
}

pub(super) fn code_cell(code: &str) -> &str {
    if code.is_empty() { "-" } else { code }
}

/// A `width` x `height` box centered in `area`, shrunk to fit.
pub(super) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

pub(super) fn page_buttons_line(
    buttons: &[PageButton],
    current: usize,
    has_prev: bool,
    has_next: bool,
) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let arrow = |on: bool| if on { Style::default() } else { dim };

    let mut spans = vec![Span::styled("< ", arrow(has_prev))];
    for b in buttons {
        match *b {
            PageButton::Page(p) if p == current => spans.push(Span::styled(
                format!("[{}]", p),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            PageButton::Page(p) => spans.push(Span::raw(format!(" {} ", p))),
            PageButton::Ellipsis => spans.push(Span::styled(" ... ", dim)),
        }
    }
    spans.push(Span::styled(" >", arrow(has_next)));
    Line::from(spans)
}
