//! HTML to terminal text
//!
//! Question bodies and titles arrive as HTML fragments. Entities are decoded
//! by the parser; block elements become line breaks and `<pre>` keeps its
//! whitespace.

use scraper::{ElementRef, Html, Node};

const SKIP_TAGS: [&str; 3] = ["script", "style", "noscript"];
const BLOCK_TAGS: [&str; 14] = [
    "p", "div", "pre", "blockquote", "ul", "ol", "li", "h1", "h2", "h3", "h4", "h5", "h6", "tr",
];

/// Render an HTML fragment as plain text.
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::with_capacity(html.len());
    walk(fragment.root_element(), false, &mut out);
    clean_lines(&out)
}

/// Decode entities in a short inline string such as a question title.
pub fn decode_inline(text: &str) -> String {
    let fragment = Html::parse_fragment(text);
    let decoded: String = fragment.root_element().text().collect();
    collapse_spaces(&decoded).trim().to_string()
}

fn walk(element: ElementRef, in_pre: bool, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                if in_pre {
                    out.push_str(text);
                } else {
                    push_inline(out, text);
                }
            }
            Node::Element(el) => {
                let Some(child_el) = ElementRef::wrap(child) else {
                    continue;
                };
                let name = el.name();
                if SKIP_TAGS.contains(&name) {
                    continue;
                }
                if name == "br" {
                    out.push('\n');
                    continue;
                }

                let block = BLOCK_TAGS.contains(&name);
                if block {
                    break_line(out);
                }
                if name == "li" {
                    out.push_str("- ");
                }
                walk(child_el, in_pre || name == "pre", out);
                if block {
                    break_line(out);
                    if name == "p" || name == "pre" {
                        out.push('\n');
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_inline(out: &mut String, text: &str) {
    let collapsed = collapse_spaces(text);
    let at_line_start = out.is_empty() || out.ends_with('\n');
    let collapsed = if at_line_start {
        collapsed.trim_start()
    } else {
        collapsed.as_str()
    };
    if collapsed.starts_with(' ') && out.ends_with(' ') {
        out.push_str(&collapsed[1..]);
    } else {
        out.push_str(collapsed);
    }
}

fn break_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

fn collapse_spaces(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                result.push(' ');
            }
            prev_space = true;
        } else {
            result.push(ch);
            prev_space = false;
        }
    }
    result
}

/// Strip trailing spaces and squeeze runs of blank lines to one.
fn clean_lines(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut blank_run = 0;
    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        lines.push(line);
    }
    lines.join("\n").trim_matches('\n').to_string()
}
