use crate::compare::{Channel, ComparisonRow, ComparisonTable};
use crate::overlay::PageUrls;
use crate::scoring::MetricSet;
use crate::ui::style;

const STRONG_INTENSITY: f64 = 0.5;

/// Aligned terminal table. Improved rows are green, regressed rows red.
pub fn table_text(table: &ComparisonTable) -> String {
    let mut headers: Vec<&str> = table.headers();
    if table.has_live_column {
        headers.push("Change");
    }

    let cells: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row_cells(row, table.has_live_column))
        .collect();

    let mut out = render_grid(&headers, &cells, |idx, line| {
        let row = &table.rows[idx];
        match row.highlight {
            Some(hl) => {
                let strong = hl.intensity >= STRONG_INTENSITY;
                match hl.channel {
                    Channel::Positive => style::improved(line, strong),
                    Channel::Negative => style::regressed(line, strong),
                }
            }
            None => line.to_string(),
        }
    });

    if table.is_empty() {
        out.push_str(&style::dim("(no metrics)"));
        out.push('\n');
    }
    out
}

fn row_cells(row: &ComparisonRow, has_live_column: bool) -> Vec<String> {
    let mut cells = vec![row.metric_name.clone(), row.preview_value.clone()];
    if has_live_column {
        cells.push(row.live_value.clone().unwrap_or_else(|| "-".to_string()));
        let change = match (&row.highlight, &row.live_value) {
            (Some(hl), _) => format!("{:+.2}", hl.delta),
            (None, Some(_)) => "0.00".to_string(),
            (None, None) => String::new(),
        };
        cells.push(change);
    }
    cells
}

pub fn metrics_text(metrics: &MetricSet) -> String {
    let cells: Vec<Vec<String>> = metrics
        .iter()
        .map(|(name, value)| vec![name.to_string(), value.to_string()])
        .collect();
    let mut out = render_grid(&["Metric", "Value"], &cells, |_, line| line.to_string());
    if metrics.is_empty() {
        out.push_str(&style::dim("(no metrics)"));
        out.push('\n');
    }
    out
}

pub fn urls_text(urls: &PageUrls, scoring_enabled: bool) -> String {
    let state = if scoring_enabled {
        "enabled".to_string()
    } else {
        style::yellow("disabled")
    };
    format!(
        "page:    {}\nlive:    {}\npreview: {}\nscoring: {state}\n",
        style::url(&urls.page),
        style::url(&urls.live),
        style::url(&urls.preview),
    )
}

fn render_grid(
    headers: &[&str],
    rows: &[Vec<String>],
    paint: impl Fn(usize, &str) -> String,
) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(idx) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    let header_cells: Vec<String> = headers.iter().map(ToString::to_string).collect();
    out.push_str(&style::header(join_padded(&header_cells, &widths)));
    out.push('\n');

    for (idx, row) in rows.iter().enumerate() {
        out.push_str(&paint(idx, &join_padded(row, &widths)));
        out.push('\n');
    }
    out
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}
