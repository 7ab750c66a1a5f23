//! Paginated plain-text report rendering.
//!
//! Rendering is pure: [`render`] turns a [`DocumentReport`] into a string
//! and the `report` command decides where it goes. Pages are separated by
//! form feeds (`\x0c`) so the output prints and pages correctly.

use hciis_core::analysis::{DocumentReport, MetricReport};
use hciis_core::config::ReportLayout;
use hciis_core::stats::display_decimal;

/// Report heading.
pub const TITLE: &str = "Human-Centered Information Intelligence System Report";

/// Opening paragraph under the heading.
pub const INTRODUCTION: &str = "This report presents a multi-dimensional analysis of how text \
    impacts human cognition, emotion, decision-making, and information quality.";

/// Page separator.
pub const PAGE_BREAK: char = '\x0c';

/// Render every section present in `report`.
pub fn render(report: &DocumentReport, layout: &ReportLayout) -> String {
    let mut pager = Pager::new(*layout);

    pager.paragraph(TITLE);
    pager.blank();
    pager.paragraph(INTRODUCTION);

    for section in report.sections() {
        pager.blank();
        if pager.remaining() < layout.min_remaining_lines {
            pager.page_break();
        }
        render_section(&mut pager, section);
    }

    pager.finish()
}

fn render_section(pager: &mut Pager, section: &dyn MetricReport) {
    pager.paragraph(section.title());
    pager.paragraph(&section.headline());
    pager.paragraph(section.explanation());

    let breakdown = section.breakdown();
    if !breakdown.is_empty() {
        let parts: Vec<String> = breakdown
            .iter()
            .map(|(name, value)| format!("{name}: {}", display_decimal(*value)))
            .collect();
        pager.paragraph(&format!("Breakdown: {}", parts.join(", ")));
    }
}

/// Line-counting writer that breaks pages.
struct Pager {
    layout: ReportLayout,
    out: String,
    line: usize,
}

impl Pager {
    fn new(layout: ReportLayout) -> Self {
        Self {
            layout,
            out: String::new(),
            line: 0,
        }
    }

    fn remaining(&self) -> usize {
        self.layout.page_lines.saturating_sub(self.line)
    }

    fn push_line(&mut self, text: &str) {
        if self.line >= self.layout.page_lines.max(1) {
            self.page_break();
        }
        self.out.push_str(text);
        self.out.push('\n');
        self.line += 1;
    }

    /// Blank separator line; suppressed at the top of a page.
    fn blank(&mut self) {
        if self.line > 0 {
            self.push_line("");
        }
    }

    fn page_break(&mut self) {
        if self.line == 0 {
            return;
        }
        // Drop a trailing blank separator before breaking
        if self.out.ends_with("\n\n") {
            self.out.pop();
        }
        self.out.push(PAGE_BREAK);
        self.line = 0;
    }

    fn paragraph(&mut self, text: &str) {
        for line in wrap(text, self.layout.wrap_width) {
            self.push_line(&line);
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Greedy word wrap at `width` columns.
///
/// Words longer than `width` are split across lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while !chars.is_empty() {
            let needed = if current_len == 0 {
                chars.len()
            } else {
                current_len + 1 + chars.len()
            };
            if needed <= width {
                if current_len > 0 {
                    current.push(' ');
                    current_len += 1;
                }
                current.extend(chars.iter());
                current_len += chars.len();
                break;
            }
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
                continue;
            }
            // Word alone exceeds the width
            let rest = chars.split_off(width);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}
