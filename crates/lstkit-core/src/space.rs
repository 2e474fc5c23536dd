//! Whitespace and comments as first-class values.
//!
//! A [`Space`] is the raw text that sits *before* a piece of syntax: a run of
//! whitespace followed by zero or more comments, each of which owns the
//! whitespace that follows it (its `suffix`). Writing a `Space` replays that
//! text exactly; there is no normalization and no validation of the
//! whitespace content.
//!
//! ```
//! use lstkit_core::space::Space;
//!
//! let space = Space::format("  // note\n    ");
//! assert_eq!(space.whitespace(), "  ");
//! assert_eq!(space.comments().len(), 1);
//! assert_eq!(space.to_string(), "  // note\n    ");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::markers::Markers;

/// How a comment is delimited in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommentStyle {
    /// `// text`
    Line,
    /// `/* text */`
    Block,
    /// `/// text`
    LineDoc,
    /// `/** text */`
    BlockDoc,
}

impl CommentStyle {
    /// The opening delimiter.
    pub fn open(self) -> &'static str {
        match self {
            CommentStyle::Line => "//",
            CommentStyle::Block => "/*",
            CommentStyle::LineDoc => "///",
            CommentStyle::BlockDoc => "/**",
        }
    }

    /// The closing delimiter; line comments end at the newline, which belongs
    /// to the comment suffix.
    pub fn close(self) -> &'static str {
        match self {
            CommentStyle::Line | CommentStyle::LineDoc => "",
            CommentStyle::Block | CommentStyle::BlockDoc => "*/",
        }
    }
}

/// A single comment plus the whitespace that follows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub style: CommentStyle,
    /// Comment body between the delimiters.
    pub text: String,
    /// Whitespace after the comment, up to the next comment or the syntax.
    pub suffix: String,
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
}

impl Comment {
    pub fn new(style: CommentStyle, text: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
            suffix: suffix.into(),
            markers: Markers::EMPTY,
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Whether this comment is a documentation comment.
    pub fn is_doc(&self) -> bool {
        matches!(self.style, CommentStyle::LineDoc | CommentStyle::BlockDoc)
    }

    /// Append the exact source text of this comment, suffix included.
    pub fn write_to(&self, out: &mut String) {
        out.push_str(self.style.open());
        out.push_str(&self.text);
        out.push_str(self.style.close());
        out.push_str(&self.suffix);
    }
}

/// Whitespace and comments preceding a piece of syntax.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Space {
    whitespace: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    comments: Vec<Comment>,
}

impl Space {
    /// No whitespace and no comments.
    pub const EMPTY: Space = Space {
        whitespace: String::new(),
        comments: Vec::new(),
    };

    pub fn build(whitespace: impl Into<String>, comments: Vec<Comment>) -> Self {
        Self {
            whitespace: whitespace.into(),
            comments,
        }
    }

    /// A single space character.
    pub fn single() -> Self {
        Self::build(" ", Vec::new())
    }

    /// Split raw source text into leading whitespace and comments.
    ///
    /// This is the inverse of writing a `Space`: `Space::format(s).to_string() == s`
    /// holds for every input. An unterminated block comment is kept as raw
    /// text rather than being turned into a comment.
    pub fn format(text: &str) -> Self {
        if text.is_empty() {
            return Self::EMPTY;
        }

        let mut whitespace = String::new();
        let mut comments: Vec<Comment> = Vec::new();
        let mut rest = text;

        while !rest.is_empty() {
            let Some(start) = find_comment_start(rest) else {
                push_raw(&mut whitespace, &mut comments, rest);
                break;
            };
            if start > 0 {
                push_raw(&mut whitespace, &mut comments, &rest[..start]);
            }
            let tail = &rest[start..];

            if tail.starts_with("//") {
                let (style, body_start) = if tail.starts_with("///") && !tail.starts_with("////") {
                    (CommentStyle::LineDoc, 3)
                } else {
                    (CommentStyle::Line, 2)
                };
                let end = tail.find('\n').unwrap_or(tail.len());
                comments.push(Comment::new(style, &tail[body_start..end], ""));
                rest = &tail[end..];
            } else {
                let is_doc = tail.starts_with("/**") && !tail.starts_with("/**/");
                let body_start = if is_doc { 3 } else { 2 };
                match tail[body_start..].find("*/") {
                    Some(close) => {
                        let style = if is_doc {
                            CommentStyle::BlockDoc
                        } else {
                            CommentStyle::Block
                        };
                        let body_end = body_start + close;
                        comments.push(Comment::new(style, &tail[body_start..body_end], ""));
                        rest = &tail[body_end + 2..];
                    }
                    None => {
                        push_raw(&mut whitespace, &mut comments, tail);
                        break;
                    }
                }
            }
        }

        Self {
            whitespace,
            comments,
        }
    }

    pub fn whitespace(&self) -> &str {
        &self.whitespace
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn with_whitespace(&self, whitespace: impl Into<String>) -> Self {
        Self {
            whitespace: whitespace.into(),
            comments: self.comments.clone(),
        }
    }

    pub fn with_comments(&self, comments: Vec<Comment>) -> Self {
        Self {
            whitespace: self.whitespace.clone(),
            comments,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.whitespace.is_empty() && self.comments.is_empty()
    }

    /// The whitespace immediately before the syntax: the last comment's
    /// suffix, or the leading whitespace when there are no comments.
    pub fn last_whitespace(&self) -> &str {
        self.comments
            .last()
            .map(|c| c.suffix.as_str())
            .unwrap_or(&self.whitespace)
    }

    /// Indentation of the syntax that follows: the text after the last newline.
    pub fn indent(&self) -> &str {
        let ws = self.last_whitespace();
        match ws.rfind('\n') {
            Some(i) => &ws[i + 1..],
            None => ws,
        }
    }

    /// Append the exact source text of this space.
    pub fn write_to(&self, out: &mut String) {
        out.push_str(&self.whitespace);
        for comment in &self.comments {
            comment.write_to(out);
        }
    }
}

/// Byte offset of the first `//` or `/*`; a lone `/` is raw text.
fn find_comment_start(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    text.match_indices('/')
        .map(|(i, _)| i)
        .find(|&i| matches!(bytes.get(i + 1), Some(b'/') | Some(b'*')))
}

fn push_raw(whitespace: &mut String, comments: &mut [Comment], raw: &str) {
    match comments.last_mut() {
        Some(last) => last.suffix.push_str(raw),
        None => whitespace.push_str(raw),
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_to(&mut out);
        f.write_str(&out)
    }
}

impl From<&str> for Space {
    fn from(text: &str) -> Self {
        Space::format(text)
    }
}

crate::ref_eq_by_value!(Space, Comment, CommentStyle);

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(text: &str) -> Space {
        let space = Space::format(text);
        assert_eq!(space.to_string(), text, "format/print mismatch for {text:?}");
        space
    }

    #[test]
    fn plain_whitespace() {
        let space = roundtrip(" \n\t ");
        assert_eq!(space.whitespace(), " \n\t ");
        assert!(space.comments().is_empty());
    }

    #[test]
    fn empty_is_empty() {
        assert!(Space::format("").is_empty());
        assert!(Space::EMPTY.is_empty());
        assert!(!Space::single().is_empty());
    }

    #[test]
    fn line_comment_owns_following_newline() {
        let space = roundtrip(" // hello\n  ");
        assert_eq!(space.whitespace(), " ");
        let comment = &space.comments()[0];
        assert_eq!(comment.style, CommentStyle::Line);
        assert_eq!(comment.text, " hello");
        assert_eq!(comment.suffix, "\n  ");
    }

    #[test]
    fn doc_and_block_styles() {
        let space = roundtrip("/// doc\n/** block doc */ /* plain */ /**/\n");
        let styles: Vec<_> = space.comments().iter().map(|c| c.style).collect();
        assert_eq!(
            styles,
            vec![
                CommentStyle::LineDoc,
                CommentStyle::BlockDoc,
                CommentStyle::Block,
                CommentStyle::Block,
            ]
        );
        assert!(space.comments()[0].is_doc());
        assert_eq!(space.comments()[3].text, "");
    }

    #[test]
    fn four_slashes_is_not_doc() {
        let space = roundtrip("//// banner");
        assert_eq!(space.comments()[0].style, CommentStyle::Line);
        assert_eq!(space.comments()[0].text, "// banner");
    }

    #[test]
    fn unterminated_block_stays_raw() {
        let space = roundtrip("  /* never closed");
        assert!(space.comments().is_empty());
    }

    #[test]
    fn lone_slash_is_raw_text() {
        let space = roundtrip(" / x // c");
        assert_eq!(space.whitespace(), " / x ");
        assert_eq!(space.comments().len(), 1);
    }

    #[test]
    fn indent_uses_last_whitespace() {
        let space = Space::format("\n  // c\n    ");
        assert_eq!(space.indent(), "    ");
        assert_eq!(Space::format("\n\t").indent(), "\t");
    }

    #[test]
    fn with_accessors_keep_other_half() {
        let space = Space::format(" /* a */ ");
        let changed = space.with_whitespace("\n");
        assert_eq!(changed.to_string(), "\n/* a */ ");
        assert_eq!(changed.with_comments(Vec::new()).to_string(), "\n");
    }
}
