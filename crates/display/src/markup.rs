//! HTML construction, centralized so escaping lives in exactly one place.
//!
//! Views never concatenate raw markup; they go through [`TableBuilder`] and
//! get escaping for free.

use core::fmt;

/// A rendered HTML fragment, ready to be written into a display region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Html(String);

impl Html {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape text for use inside an HTML element or attribute value.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
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

/// Builder for the table fragments every view renders.
///
/// Column count is fixed by the header row; spanning rows reuse it so the
/// fallback row always covers the full table width.
#[derive(Debug)]
pub struct TableBuilder {
    columns: usize,
    out: String,
}

impl TableBuilder {
    pub fn new(headers: &[&str]) -> Self {
        let mut out = String::from("<table><tr>");
        for header in headers {
            out.push_str("<th>");
            out.push_str(&escape(header));
            out.push_str("</th>");
        }
        out.push_str("</tr>");
        Self {
            columns: headers.len(),
            out,
        }
    }

    /// Append one data row. Cells beyond the header width are dropped;
    /// missing cells render empty.
    pub fn row(&mut self, cells: &[&str]) -> &mut Self {
        self.out.push_str("<tr>");
        for i in 0..self.columns {
            self.out.push_str("<td>");
            if let Some(cell) = cells.get(i) {
                self.out.push_str(&escape(cell));
            }
            self.out.push_str("</td>");
        }
        self.out.push_str("</tr>");
        self
    }

    /// Append a single row spanning every column, for empty-state messages.
    pub fn span_row(&mut self, text: &str) -> &mut Self {
        self.out.push_str(&format!(
            "<tr><td colspan=\"{}\">{}</td></tr>",
            self.columns,
            escape(text)
        ));
        self
    }

    pub fn finish(mut self) -> Html {
        self.out.push_str("</table>");
        Html(self.out)
    }
}
