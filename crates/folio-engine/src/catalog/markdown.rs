use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options
}

/// Render a markdown post body to HTML.
pub fn to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, options());
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Flatten a markdown body to plain lines for terminal display.
///
/// Headings and paragraphs become one line each with a blank line after,
/// list items get a `- ` prefix and code blocks keep their lines.
pub fn to_plain_lines(markdown: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut list_depth: usize = 0;

    fn finish(lines: &mut Vec<String>, current: &mut String, blank_after: bool) {
        if !current.is_empty() {
            lines.push(std::mem::take(current));
            if blank_after {
                lines.push(String::new());
            }
        }
    }

    for event in Parser::new_ext(markdown, options()) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current.push_str(&"#".repeat(level as usize));
                current.push(' ');
            }
            Event::Start(Tag::List(_)) => list_depth += 1,
            Event::End(TagEnd::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
                if list_depth == 0 {
                    lines.push(String::new());
                }
            }
            Event::Start(Tag::Item) => {
                finish(&mut lines, &mut current, false);
                current.push_str(&"  ".repeat(list_depth.saturating_sub(1)));
                current.push_str("- ");
            }
            Event::End(TagEnd::Item) => finish(&mut lines, &mut current, false),
            Event::End(TagEnd::Heading(_)) => finish(&mut lines, &mut current, true),
            Event::End(TagEnd::Paragraph) => finish(&mut lines, &mut current, list_depth == 0),
            Event::Text(text) | Event::Code(text) => current.push_str(&text),
            Event::End(TagEnd::CodeBlock) => {
                lines.extend(current.lines().map(|l| format!("    {l}")));
                current.clear();
                lines.push(String::new());
            }
            Event::SoftBreak | Event::HardBreak => current.push(' '),
            _ => {}
        }
    }
    finish(&mut lines, &mut current, false);

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}
