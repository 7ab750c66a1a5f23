//! Markdown input handling.
//!
//! Uses pulldown-cmark for proper CommonMark parsing rather than regex-based
//! stripping. This handles edge cases (nested code blocks, HTML entities,
//! reference links) that regex approaches miss.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Reduce markdown to the prose a reader would actually read.
///
/// Removes:
/// - Code blocks (fenced and indented) and inline code
/// - HTML
/// - YAML frontmatter
/// - Headings (section titles are not sentences)
/// - Tables
///
/// Preserves link text, blockquote text, list item text, and emphasis text
/// without its markers. Every paragraph and list item is closed with a
/// period when it lacks a terminator, so bullet lists split into sentences
/// instead of running together.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn to_plain_text(text: &str) -> String {
    // pulldown-cmark doesn't know about frontmatter
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(&text, options);

    let mut result = String::with_capacity(text.len() / 2);
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Table(_)) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Table) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => {
                result.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => {
                result.push(' ');
            }

            // Nested lists start after their parent item's own text
            Event::Start(Tag::List(_)) | Event::End(TagEnd::Paragraph | TagEnd::Item)
                if skip_depth == 0 =>
            {
                close_block(&mut result);
            }

            _ => {}
        }
    }

    result.trim_end().to_string()
}

/// End the current block as a sentence.
fn close_block(result: &mut String) {
    let trimmed = result.trim_end();
    if trimmed.is_empty() {
        result.clear();
        return;
    }
    let len = trimmed.len();
    let terminated = trimmed.ends_with(['.', '!', '?', ':', ';']);
    result.truncate(len);
    if !terminated {
        result.push('.');
    }
    result.push(' ');
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> String {
    let trimmed = text.trim_start();
    if !trimmed.starts_with("---") {
        return text.to_string();
    }

    let after_opening = &trimmed[3..];
    let Some(close_pos) = after_opening.find("\n---") else {
        return text.to_string();
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder
        .strip_prefix('\n')
        .unwrap_or(remainder)
        .to_string()
}
