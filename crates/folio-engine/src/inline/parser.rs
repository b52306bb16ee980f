use super::{
    cursor::Cursor,
    emphasis::render_emphasis,
    kinds::{Link, MathSpan},
    types::{InlineNode, LinkPart, Segment},
};

/// Renders one text field into inline nodes.
///
/// Three nested passes, always in this order:
/// 1. split out `$math$` spans, which are never scanned further;
/// 2. split each remaining piece on `[text](href)` links, whose text is literal;
/// 3. run the emphasis passes over what is left.
///
/// Malformed markup (a stray `$`, an unclosed `**`) stays literal text.
pub fn render_inline(s: &str) -> Vec<InlineNode> {
    let mut out = vec![];
    for segment in split_math(s) {
        match segment {
            Segment::Math(source) => out.push(InlineNode::Math(source.to_string())),
            Segment::Plain(text) => {
                for part in split_links(text) {
                    match part {
                        LinkPart::Link { text, href } => out.push(InlineNode::Link {
                            text: text.to_string(),
                            href: href.to_string(),
                        }),
                        LinkPart::Text(text) => out.extend(render_emphasis(text)),
                    }
                }
            }
        }
    }
    out
}

/// Splits text into plain and math segments. Empty plain pieces are dropped.
pub fn split_math(s: &str) -> Vec<Segment<'_>> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        let start = cur.pos();
        if let Some(source) = try_parse_math(&mut cur) {
            if start > text_start {
                out.push(Segment::Plain(&s[text_start..start]));
            }
            out.push(Segment::Math(source));
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    if s.len() > text_start {
        out.push(Segment::Plain(&s[text_start..]));
    }
    out
}

/// Splits a plain segment into literal text and links.
pub fn split_links(s: &str) -> Vec<LinkPart<'_>> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        let start = cur.pos();
        if let Some((text, href)) = try_parse_link(&mut cur) {
            if start > text_start {
                out.push(LinkPart::Text(&s[text_start..start]));
            }
            out.push(LinkPart::Link { text, href });
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    if s.len() > text_start {
        out.push(LinkPart::Text(&s[text_start..]));
    }
    out
}

/// Attempts `$source$` at the cursor. On failure the cursor is restored.
fn try_parse_math<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    if cur.peek() != Some(MathSpan::DOLLAR) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // $
    let inner_start = cur.pos();

    if !cur.seek(MathSpan::DOLLAR) || cur.pos() == inner_start {
        *cur = saved;
        return None;
    }
    let source = cur.slice_from(inner_start);
    cur.bump(); // closing $
    Some(source)
}

/// Attempts `[text](href)` at the cursor. On failure the cursor is restored.
fn try_parse_link<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
    if cur.peek() != Some(Link::TEXT_OPEN) {
        return None;
    }

    let saved = cur.clone();
    let parsed = parse_link_body(cur);
    if parsed.is_none() {
        *cur = saved;
    }
    parsed
}

fn parse_link_body<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
    cur.bump(); // [
    let text_start = cur.pos();
    if !cur.seek(Link::TEXT_CLOSE) || cur.pos() == text_start {
        return None;
    }
    let text = cur.slice_from(text_start);
    cur.bump(); // ]

    if cur.bump() != Some(Link::HREF_OPEN) {
        return None;
    }
    let href_start = cur.pos();
    if !cur.seek(Link::HREF_CLOSE) || cur.pos() == href_start {
        return None;
    }
    let href = cur.slice_from(href_start);
    cur.bump(); // )
    Some((text, href))
}
