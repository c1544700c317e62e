//! Markup stripping for menu labels
//!
//! Hosts decorate menu titles with counters such as
//! `Updates <span class="update-plugins"><span class="count">3</span></span>`.
//! Cleaning runs in two passes: every paired tag is removed together with its
//! content, then any leftover bare tag is stripped. A single tag-stripping pass
//! would keep the counter text ("Updates 3").

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9-]*)\b[^>]*?(/?)>").expect("valid tag regex")
});

static BARE_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?[A-Za-z!][^>]*>").expect("valid bare tag regex"));

const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

struct Tag {
    start: usize,
    end: usize,
    name: String,
    closing: bool,
    self_closing: bool,
}

impl Tag {
    fn opens_block(&self) -> bool {
        !self.closing && !self.self_closing && !VOID_ELEMENTS.contains(&self.name.as_str())
    }
}

fn scan_tags(input: &str) -> Vec<Tag> {
    TAG_RE
        .captures_iter(input)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(Tag {
                start: whole.start(),
                end: whole.end(),
                name: caps.get(2)?.as_str().to_ascii_lowercase(),
                closing: caps.get(1).is_some_and(|m| !m.as_str().is_empty()),
                self_closing: caps.get(3).is_some_and(|m| !m.as_str().is_empty()),
            })
        })
        .collect()
}

/// First pass: drop `<tag ...>...</tag>` blocks, content included.
/// Nested tags of the same name are balanced; an opening tag that never
/// closes is left for the second pass.
pub fn remove_tag_blocks(input: &str) -> String {
    let tags = scan_tags(input);
    let mut out = String::with_capacity(input.len());
    let mut cursor = 0;
    let mut i = 0;

    while i < tags.len() {
        let open = &tags[i];
        if !open.opens_block() {
            i += 1;
            continue;
        }

        let mut depth = 0usize;
        let mut close_idx = None;
        for (j, tag) in tags.iter().enumerate().skip(i + 1) {
            if tag.name != open.name || tag.self_closing {
                continue;
            }
            if !tag.closing {
                depth += 1;
            } else if depth == 0 {
                close_idx = Some(j);
                break;
            } else {
                depth -= 1;
            }
        }

        match close_idx {
            Some(j) => {
                out.push_str(&input[cursor..open.start]);
                cursor = tags[j].end;
                i = j + 1;
            }
            None => i += 1,
        }
    }

    out.push_str(&input[cursor..]);
    out
}

/// Second pass: remove any remaining tag, keeping surrounding text.
pub fn strip_bare_tags(input: &str) -> String {
    BARE_TAG_RE.replace_all(input, "").into_owned()
}

/// Plain-text label for a raw, possibly decorated, menu title.
pub fn clean_title(raw: &str) -> String {
    let without_blocks = remove_tag_blocks(raw);
    strip_bare_tags(&without_blocks).trim().to_string()
}
