//! HTML rendering of the report document
//!
//! Produces one self-contained file: embedded stylesheet, the data table,
//! and both charts inlined as base64 data URIs. Chart images pass through
//! scoped temp files that are removed when rendering finishes, whether it
//! succeeds or fails.

use std::path::Path;

use crate::charts;
use crate::error::{GridError, GridResult};

use super::{ReportBlock, ReportDocument};

const CSS: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    max-width: 960px;
    margin: 2rem auto;
    padding: 0 1rem;
    color: #1f2430;
    line-height: 1.5;
}

h1 {
    font-size: 1.8rem;
    border-bottom: 2px solid #add8e6;
    padding-bottom: 0.4rem;
}

h2 {
    font-size: 1.25rem;
    margin-top: 2rem;
}

table {
    border-collapse: collapse;
    width: 100%;
    margin: 1rem 0;
}

th {
    background: #add8e6;
    text-align: left;
    padding: 6px 10px;
    border: 1px solid #9bb7c4;
}

td {
    padding: 5px 10px;
    border: 1px solid #d4dde3;
}

tbody tr:nth-child(even) {
    background: #f4f8fa;
}

img.chart {
    display: block;
    margin: 1rem 0;
    max-width: 100%;
}
"#;

/// Render the document to a standalone HTML string
pub fn render(document: &ReportDocument) -> GridResult<String> {
    let mut body = String::new();

    for block in &document.blocks {
        match block {
            ReportBlock::Title(text) => {
                body.push_str(&format!("<h1>{}</h1>\n", escape_html(text)));
            }
            ReportBlock::Heading(text) => {
                body.push_str(&format!("<h2>{}</h2>\n", escape_html(text)));
            }
            ReportBlock::Table { header, rows } => {
                body.push_str(&render_table(header, rows));
            }
            ReportBlock::GroupingChart(report) => {
                let svg = render_chart_via_temp(|path| charts::render_grouping_chart(report, path))?;
                body.push_str(&embed_chart(&svg, "Grouped amounts per description"));
            }
            ReportBlock::BalanceChart(report) => {
                let svg = render_chart_via_temp(|path| charts::render_balance_chart(report, path))?;
                body.push_str(&embed_chart(&svg, "Running balance over time"));
            }
        }
    }

    Ok(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Personal Finance Data</title>
    <style>
{css}
    </style>
</head>
<body>
{body}
</body>
</html>
"##,
        css = CSS,
        body = body
    ))
}

/// Render a chart through a scoped temp file and hand back the bytes
///
/// The temp file is deleted on drop, so missing it on an error path is
/// not possible.
fn render_chart_via_temp<F>(render: F) -> GridResult<Vec<u8>>
where
    F: FnOnce(&Path) -> GridResult<()>,
{
    let file = tempfile::Builder::new()
        .prefix("moneygrid-chart-")
        .suffix(".svg")
        .tempfile()
        .map_err(|err| GridError::Export(err.to_string()))?;
    render(file.path())?;
    let bytes = std::fs::read(file.path())?;
    Ok(bytes)
}

fn render_table(header: &[String], rows: &[Vec<String>]) -> String {
    let mut table = String::from("<table>\n<thead>\n<tr>");
    for cell in header {
        table.push_str(&format!("<th>{}</th>", escape_html(cell)));
    }
    table.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in rows {
        table.push_str("<tr>");
        for cell in row {
            table.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        table.push_str("</tr>\n");
    }

    table.push_str("</tbody>\n</table>\n");
    table
}

fn embed_chart(svg: &[u8], alt: &str) -> String {
    use base64::{engine::general_purpose::STANDARD, Engine};
    format!(
        "<img class=\"chart\" src=\"data:image/svg+xml;base64,{}\" alt=\"{}\">\n",
        STANDARD.encode(svg),
        escape_html(alt)
    )
}

/// Escape text for HTML element and attribute positions
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
