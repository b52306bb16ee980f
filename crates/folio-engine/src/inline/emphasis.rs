use super::{kinds::Emphasis, types::InlineNode};

/// One position in the text as the emphasis passes see it: either an
/// original character or a marker inserted by an earlier pass.
///
/// Markers count as ordinary characters for later passes, which is what lets
/// `*` close across a `**` pair already turned into bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Item {
    Char(char),
    Open(Emphasis),
    Close(Emphasis),
}

/// Runs the four emphasis passes over `text` and builds the node tree.
pub fn render_emphasis(text: &str) -> Vec<InlineNode> {
    let mut items: Vec<Item> = text.chars().map(Item::Char).collect();
    for emphasis in Emphasis::ORDER {
        items = apply_pass(&items, emphasis);
    }
    build_tree(&items)
}

/// One left-to-right pass for a single delimiter.
///
/// At each position the shortest non-empty run up to the next closing
/// delimiter wins, and the run may not cross a line terminator. Scanning
/// resumes after the closing delimiter.
fn apply_pass(items: &[Item], emphasis: Emphasis) -> Vec<Item> {
    let delim: Vec<char> = emphasis.delimiter().chars().collect();
    let mut out = Vec::with_capacity(items.len());
    let mut i = 0;

    while i < items.len() {
        match find_close(items, i, &delim) {
            Some(close) => {
                out.push(Item::Open(emphasis));
                out.extend_from_slice(&items[i + delim.len()..close]);
                out.push(Item::Close(emphasis));
                i = close + delim.len();
            }
            None => {
                out.push(items[i]);
                i += 1;
            }
        }
    }
    out
}

fn find_close(items: &[Item], at: usize, delim: &[char]) -> Option<usize> {
    if !delim_at(items, at, delim) {
        return None;
    }
    let body = at + delim.len();
    let mut j = body;
    loop {
        if j > body && delim_at(items, j, delim) {
            return Some(j);
        }
        match items.get(j) {
            None => return None,
            Some(Item::Char(c)) if is_line_terminator(*c) => return None,
            Some(_) => j += 1,
        }
    }
}

fn delim_at(items: &[Item], at: usize, delim: &[char]) -> bool {
    delim
        .iter()
        .enumerate()
        .all(|(k, d)| matches!(items.get(at + k), Some(Item::Char(c)) if c == d))
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

type Frame = (Emphasis, Vec<InlineNode>);

/// Folds the marker stream into a tree.
///
/// A close marker whose open is not on top of the stack closes the frames
/// above it and reopens them afterwards, so `**a *b** c*` becomes
/// `strong[a, em[b]], em[ c]`. Empty styled nodes are dropped.
fn build_tree(items: &[Item]) -> Vec<InlineNode> {
    let mut root = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut text = String::new();

    for item in items {
        match *item {
            Item::Char(c) => text.push(c),
            Item::Open(emphasis) => {
                flush_text(&mut text, top(&mut stack, &mut root));
                stack.push((emphasis, Vec::new()));
            }
            Item::Close(emphasis) => {
                flush_text(&mut text, top(&mut stack, &mut root));
                let Some(depth) = stack.iter().rposition(|(open, _)| *open == emphasis) else {
                    continue;
                };
                let mut reopen = Vec::new();
                while stack.len() > depth {
                    let Some((inner, children)) = stack.pop() else {
                        break;
                    };
                    if stack.len() > depth {
                        reopen.push(inner);
                    }
                    close_frame(inner, children, top(&mut stack, &mut root));
                }
                // `reopen` holds the frames above the closed one, innermost first.
                for inner in reopen.into_iter().rev() {
                    stack.push((inner, Vec::new()));
                }
            }
        }
    }

    flush_text(&mut text, top(&mut stack, &mut root));
    while let Some((emphasis, children)) = stack.pop() {
        close_frame(emphasis, children, top(&mut stack, &mut root));
    }
    root
}

fn top<'a>(stack: &'a mut [Frame], root: &'a mut Vec<InlineNode>) -> &'a mut Vec<InlineNode> {
    match stack.last_mut() {
        Some((_, children)) => children,
        None => root,
    }
}

fn flush_text(text: &mut String, parent: &mut Vec<InlineNode>) {
    if !text.is_empty() {
        parent.push(InlineNode::Text(std::mem::take(text)));
    }
}

fn close_frame(emphasis: Emphasis, children: Vec<InlineNode>, parent: &mut Vec<InlineNode>) {
    if !children.is_empty() {
        parent.push(InlineNode::styled(emphasis, children));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn text(s: &str) -> InlineNode {
        InlineNode::text(s)
    }

    fn styled(emphasis: Emphasis, children: Vec<InlineNode>) -> InlineNode {
        InlineNode::styled(emphasis, children)
    }

    #[rstest]
    #[case("**b**", Emphasis::Bold)]
    #[case("*i*", Emphasis::Italic)]
    #[case("__u__", Emphasis::Underline)]
    #[case("~~s~~", Emphasis::Strikethrough)]
    fn each_style_renders(#[case] input: &str, #[case] emphasis: Emphasis) {
        let inner = input.trim_matches(|c| "*_~".contains(c));
        assert_eq!(
            render_emphasis(input),
            vec![styled(emphasis, vec![text(inner)])]
        );
    }

    #[rstest]
    #[case("**unterminated")]
    #[case("a * b")]
    #[case("~~")]
    #[case("*line\nbreak*")]
    fn unmatched_markers_stay_literal(#[case] input: &str) {
        assert_eq!(render_emphasis(input), vec![text(input)]);
    }

    #[test]
    fn shortest_run_wins() {
        assert_eq!(
            render_emphasis("*a* and *b*"),
            vec![
                styled(Emphasis::Italic, vec![text("a")]),
                text(" and "),
                styled(Emphasis::Italic, vec![text("b")]),
            ]
        );
    }

    #[test]
    fn misnested_markers_are_repaired() {
        assert_eq!(
            render_emphasis("**a *b** c*"),
            vec![
                styled(
                    Emphasis::Bold,
                    vec![text("a "), styled(Emphasis::Italic, vec![text("b")])]
                ),
                styled(Emphasis::Italic, vec![text(" c")]),
            ]
        );
    }

    #[test]
    fn four_stars_leave_an_italic_star() {
        // Too short for bold, so the italic pass pairs the first and third.
        assert_eq!(
            render_emphasis("****"),
            vec![styled(Emphasis::Italic, vec![text("*")]), text("*")]
        );
    }

    #[test]
    fn triple_star_nests_italic_in_bold() {
        // Bold takes two stars each side; the leftover pair closes across the bold marker.
        assert_eq!(
            render_emphasis("***x***"),
            vec![styled(
                Emphasis::Bold,
                vec![styled(Emphasis::Italic, vec![text("x")])]
            )]
        );
    }

    #[test]
    fn raw_html_is_plain_text() {
        assert_eq!(
            render_emphasis("<b>hi</b>"),
            vec![text("<b>hi</b>")]
        );
    }
}
