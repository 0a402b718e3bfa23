//! Markup for the floating badge the browser widget mounts.
//!
//! Class names match `aesthetics-preview.css`.

use crate::compare::{Channel, ComparisonRow, ComparisonTable, HighlightSpec};

pub fn table_html(table: &ComparisonTable) -> String {
    let mut html = String::from("<table class=\"table_score\">");

    html.push_str("<tr>");
    for header in table.headers() {
        html.push_str(&format!("<th>{header}</th>"));
    }
    html.push_str("</tr>");

    for row in &table.rows {
        html.push_str(&row_html(row, table.has_live_column));
    }

    html.push_str("</table>");
    html
}

fn row_html(row: &ComparisonRow, has_live_column: bool) -> String {
    let background = row.highlight.as_ref().map(background_color).unwrap_or_default();
    let mut html = format!(
        "<tr style=\"background-color: {background}\"><td>{}</td><td class=\"table_score_number_cell\">{}</td>",
        escape(&row.metric_name),
        escape(&row.preview_value),
    );
    if has_live_column {
        // Empty cell keeps the row aligned when the live set lacks this metric.
        let live = row.live_value.as_deref().unwrap_or_default();
        html.push_str(&format!(
            "<td class=\"table_score_number_cell\">{}</td>",
            escape(live)
        ));
    }
    html.push_str("</tr>");
    html
}

/// Green for improvements, red for regressions, alpha from the intensity.
pub fn background_color(hl: &HighlightSpec) -> String {
    let alpha = hl.intensity;
    match hl.channel {
        Channel::Positive => format!("rgba(0,200,0,{alpha:.2})"),
        Channel::Negative => format!("rgba(200,0,0,{alpha:.2})"),
    }
}

/// The whole overlay: stylesheet link, badge, hidden popup holding the table.
pub fn overlay_html(table: &ComparisonTable, stylesheet: &str) -> String {
    format!(
        concat!(
            "<link rel=\"stylesheet\" href=\"{stylesheet}\">\n",
            "<div class=\"hlx-preview-overlay\">",
            "<div class=\"hlx-experiment hlx-badge hlx-experiment-status-active\">",
            "Aesthetics Scoring: <span class=\"hlx-open\"></span>",
            "<div class=\"hlx-popup hlx-hidden\">",
            "<div class=\"hlx-variants\">",
            "<div class=\"hlx-variant\">{table}</div>",
            "</div></div></div></div>\n"
        ),
        stylesheet = escape(stylesheet),
        table = table_html(table),
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
