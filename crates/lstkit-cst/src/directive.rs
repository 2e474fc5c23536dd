// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Conditional-region folding.
//!
//! A file with `#if` regions is parsed once per *branch*. A branch is one
//! choice of arm for every conditional group; branch 0 takes the first arm
//! everywhere, and each `#elif`/`#else` arm introduces one more branch that
//! differs from its enclosing arm's branch only in that group. For each
//! branch, [`project_branch`] blanks the directive lines and the lines of arms
//! the branch does not take, keeping line numbers stable, and the external
//! parser parses the result.
//!
//! Printing reverses this: every branch is printed, split into lines, and
//! [`fold_lines`] walks the physical lines. A directive line emits its own
//! text; any other line comes from the branch recorded for the innermost
//! open arm. The directive text is replayed verbatim, so the output does not
//! depend on which symbols are defined.
//!
//! ```
//! use lstkit_cst::directive::{fold_lines, scan_directives, project_branch};
//!
//! let source = "#if X\nint a = 1;\n#else\nint a = 2;\n#endif\n";
//! let lines = scan_directives(source);
//! let first = project_branch(source, &lines, 0).unwrap();
//! let second = project_branch(source, &lines, 1).unwrap();
//! assert_eq!(first, "\nint a = 1;\n\n\n\n");
//! assert_eq!(second, "\n\n\nint a = 2;\n\n");
//! assert_eq!(fold_lines(&lines, &[first, second]), source);
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};

use lstkit_core::space::Space;
use lstkit_core::span::{Span, SpanTable};
use lstkit_core::text::split_lines;
use lstkit_core::version::ParseOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::nodes::{CompilationUnit, ConditionalDirective};
use crate::parse::{ParseError, SourceParser};

/// The kind of a conditional directive line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectiveKind {
    If,
    Elif,
    Else,
    Endif,
}

impl DirectiveKind {
    pub fn keyword(self) -> &'static str {
        match self {
            DirectiveKind::If => "if",
            DirectiveKind::Elif => "elif",
            DirectiveKind::Else => "else",
            DirectiveKind::Endif => "endif",
        }
    }

    fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "if" => Some(DirectiveKind::If),
            "elif" => Some(DirectiveKind::Elif),
            "else" => Some(DirectiveKind::Else),
            "endif" => Some(DirectiveKind::Endif),
            _ => None,
        }
    }
}

/// One `#if`/`#elif`/`#else`/`#endif` line of a folded region.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectiveLine {
    /// 1-based physical line number.
    pub line_number: usize,
    /// The full line, printed verbatim.
    pub text: String,
    pub kind: DirectiveKind,
    /// Shared by every directive of one `#if ... #endif` construct.
    pub group_id: usize,
    /// The branch whose text holds the arm that starts after this line.
    /// `None` on `#endif`.
    pub active_branch_index: Option<usize>,
}

lstkit_core::ref_eq_by_value!(DirectiveLine, DirectiveKind);

/// Structural problems in a list of directive lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    #[error("directive on line {line} does not follow line {previous}")]
    OutOfOrder { line: usize, previous: usize },

    #[error("#endif on line {line} has no open #if")]
    UnmatchedEndif { line: usize },

    #[error("#if group {group_id} opened on line {line} is never closed")]
    UnclosedGroup { group_id: usize, line: usize },

    #[error("#elif or #else on line {line} is outside any #if")]
    ArmOutsideGroup { line: usize },

    #[error("directive on line {line} belongs to group {found} but group {expected} is open")]
    GroupMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("#elif or #else on line {line} follows #else")]
    ArmAfterElse { line: usize },

    #[error("group id {group_id} on line {line} was already used")]
    DuplicateGroup { group_id: usize, line: usize },

    #[error("line {line} selects branch {index} but there are {branches} branches")]
    BranchOutOfRange {
        line: usize,
        index: usize,
        branches: usize,
    },
}

/// The directive keyword of a line, if it is a conditional directive.
fn directive_kind(line: &str) -> Option<DirectiveKind> {
    let rest = line.trim_start().strip_prefix('#')?.trim_start();
    let end = rest
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(rest.len());
    DirectiveKind::from_keyword(&rest[..end])
}

/// One open group while scanning.
struct OpenGroup {
    group_id: usize,
    arm_branch: usize,
}

/// Find every conditional directive in `source` and assign groups and branches.
///
/// Groups are numbered in order of their `#if`. Malformed nesting is recorded
/// as found; [`validate_directive_lines`] reports it.
pub fn scan_directives(source: &str) -> Vec<DirectiveLine> {
    let mut lines = Vec::new();
    let mut stack: Vec<OpenGroup> = Vec::new();
    let mut next_group = 0usize;
    let mut branch_count = 1usize;

    for (index, text) in split_lines(source).into_iter().enumerate() {
        let Some(kind) = directive_kind(text) else {
            continue;
        };
        let (group_id, active_branch_index) = match kind {
            DirectiveKind::If => {
                let enclosing = stack.last().map_or(0, |open| open.arm_branch);
                let group_id = next_group;
                next_group += 1;
                stack.push(OpenGroup {
                    group_id,
                    arm_branch: enclosing,
                });
                (group_id, Some(enclosing))
            }
            DirectiveKind::Elif | DirectiveKind::Else => match stack.last_mut() {
                Some(open) => {
                    open.arm_branch = branch_count;
                    branch_count += 1;
                    (open.group_id, Some(open.arm_branch))
                }
                None => (next_group, None),
            },
            DirectiveKind::Endif => match stack.pop() {
                Some(open) => (open.group_id, None),
                None => (next_group, None),
            },
        };
        lines.push(DirectiveLine {
            line_number: index + 1,
            text: text.to_string(),
            kind,
            group_id,
            active_branch_index,
        });
    }

    debug!(
        directives = lines.len(),
        groups = next_group,
        branches = branch_count,
        "scanned conditional directives"
    );
    lines
}

/// The arm a branch takes in each group; groups not listed take arm 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchSelection {
    arms: BTreeMap<usize, usize>,
}

impl BranchSelection {
    pub fn arm_for(&self, group_id: usize) -> usize {
        self.arms.get(&group_id).copied().unwrap_or(0)
    }
}

/// Recover each branch's arm selection from scanned directive lines.
pub fn branch_selections(lines: &[DirectiveLine]) -> Vec<BranchSelection> {
    let mut selections = vec![BranchSelection::default()];
    // (group, arm, enclosing branch)
    let mut stack: Vec<(usize, usize, usize)> = Vec::new();

    for line in lines {
        match line.kind {
            DirectiveKind::If => {
                let enclosing = line.active_branch_index.unwrap_or(0);
                stack.push((line.group_id, 0, enclosing));
            }
            DirectiveKind::Elif | DirectiveKind::Else => {
                let Some((group_id, arm, enclosing)) = stack.last_mut() else {
                    continue;
                };
                *arm += 1;
                let Some(branch) = line.active_branch_index else {
                    continue;
                };
                let mut selection = selections.get(*enclosing).cloned().unwrap_or_default();
                selection.arms.insert(*group_id, *arm);
                if selections.len() <= branch {
                    selections.resize(branch + 1, BranchSelection::default());
                }
                selections[branch] = selection;
            }
            DirectiveKind::Endif => {
                stack.pop();
            }
        }
    }
    selections
}

/// The text the parser sees for one branch.
///
/// Directive lines and lines of arms the branch does not take become empty
/// lines, so every line keeps its number.
pub fn project_branch(
    source: &str,
    lines: &[DirectiveLine],
    branch: usize,
) -> Result<String, DirectiveError> {
    let selections = branch_selections(lines);
    let selection = selections
        .get(branch)
        .ok_or(DirectiveError::BranchOutOfRange {
            line: 0,
            index: branch,
            branches: selections.len(),
        })?;
    let by_line: HashMap<usize, &DirectiveLine> =
        lines.iter().map(|line| (line.line_number, line)).collect();

    // (group, current arm)
    let mut stack: Vec<(usize, usize)> = Vec::new();
    let mut out: Vec<&str> = Vec::new();
    for (index, text) in split_lines(source).into_iter().enumerate() {
        match by_line.get(&(index + 1)) {
            Some(directive) => {
                match directive.kind {
                    DirectiveKind::If => stack.push((directive.group_id, 0)),
                    DirectiveKind::Elif | DirectiveKind::Else => {
                        if let Some((_, arm)) = stack.last_mut() {
                            *arm += 1;
                        }
                    }
                    DirectiveKind::Endif => {
                        stack.pop();
                    }
                }
                out.push("");
            }
            None => {
                let visible = stack
                    .iter()
                    .all(|&(group_id, arm)| selection.arm_for(group_id) == arm);
                out.push(if visible { text } else { "" });
            }
        }
    }
    Ok(out.join("\n"))
}

/// Check nesting, ordering and branch references of directive lines.
pub fn validate_directive_lines(
    lines: &[DirectiveLine],
    branch_count: usize,
) -> Result<(), DirectiveError> {
    struct Open {
        group_id: usize,
        line: usize,
        seen_else: bool,
    }

    let mut previous = 0usize;
    let mut stack: Vec<Open> = Vec::new();
    let mut seen_groups: HashSet<usize> = HashSet::new();

    for line in lines {
        if line.line_number <= previous {
            return Err(DirectiveError::OutOfOrder {
                line: line.line_number,
                previous,
            });
        }
        previous = line.line_number;

        if let Some(index) = line.active_branch_index {
            if index >= branch_count {
                return Err(DirectiveError::BranchOutOfRange {
                    line: line.line_number,
                    index,
                    branches: branch_count,
                });
            }
        }

        match line.kind {
            DirectiveKind::If => {
                if !seen_groups.insert(line.group_id) {
                    return Err(DirectiveError::DuplicateGroup {
                        group_id: line.group_id,
                        line: line.line_number,
                    });
                }
                stack.push(Open {
                    group_id: line.group_id,
                    line: line.line_number,
                    seen_else: false,
                });
            }
            DirectiveKind::Elif | DirectiveKind::Else => {
                let open = stack.last_mut().ok_or(DirectiveError::ArmOutsideGroup {
                    line: line.line_number,
                })?;
                if open.group_id != line.group_id {
                    return Err(DirectiveError::GroupMismatch {
                        line: line.line_number,
                        expected: open.group_id,
                        found: line.group_id,
                    });
                }
                if open.seen_else {
                    return Err(DirectiveError::ArmAfterElse {
                        line: line.line_number,
                    });
                }
                open.seen_else = line.kind == DirectiveKind::Else;
            }
            DirectiveKind::Endif => {
                let open = stack.pop().ok_or(DirectiveError::UnmatchedEndif {
                    line: line.line_number,
                })?;
                if open.group_id != line.group_id {
                    return Err(DirectiveError::GroupMismatch {
                        line: line.line_number,
                        expected: open.group_id,
                        found: line.group_id,
                    });
                }
            }
        }
    }

    match stack.pop() {
        Some(open) => Err(DirectiveError::UnclosedGroup {
            group_id: open.group_id,
            line: open.line,
        }),
        None => Ok(()),
    }
}

/// Interleave printed branches back into one text.
///
/// Best effort on malformed input: an unmatched `#endif` is logged and
/// ignored, and a missing branch or line prints as an empty line.
pub fn fold_lines(lines: &[DirectiveLine], branches: &[String]) -> String {
    let branch_lines: Vec<Vec<&str>> = branches.iter().map(|b| split_lines(b)).collect();
    let by_line: HashMap<usize, &DirectiveLine> =
        lines.iter().map(|line| (line.line_number, line)).collect();
    let total = branch_lines
        .iter()
        .map(Vec::len)
        .chain(lines.iter().map(|line| line.line_number))
        .max()
        .unwrap_or(0);

    let mut active: Vec<usize> = vec![0];
    let mut out: Vec<&str> = Vec::with_capacity(total);
    for number in 1..=total {
        if let Some(directive) = by_line.get(&number) {
            let current = active.last().copied().unwrap_or(0);
            match directive.kind {
                DirectiveKind::If => {
                    active.push(directive.active_branch_index.unwrap_or(current));
                }
                DirectiveKind::Elif | DirectiveKind::Else => {
                    if active.len() > 1 {
                        let enclosing = active[active.len() - 2];
                        let branch = directive.active_branch_index.unwrap_or(enclosing);
                        if let Some(top) = active.last_mut() {
                            *top = branch;
                        }
                    } else {
                        warn!(line = number, "#{} outside #if", directive.kind.keyword());
                    }
                }
                DirectiveKind::Endif => {
                    if active.len() > 1 {
                        active.pop();
                    } else {
                        warn!(line = number, "#endif without open #if");
                    }
                }
            }
            out.push(&directive.text);
            continue;
        }
        let branch = active.last().copied().unwrap_or(0);
        let text = branch_lines
            .get(branch)
            .and_then(|b| b.get(number - 1))
            .copied()
            .unwrap_or("");
        out.push(text);
    }
    out.join("\n")
}

impl ConditionalDirective {
    /// Scan `source`, parse every branch with `parser`, and fold the results
    /// into one node.
    pub fn from_source<P>(
        source: &str,
        parser: &P,
        options: &ParseOptions,
    ) -> Result<ConditionalDirective, ParseError>
    where
        P: SourceParser + ?Sized,
    {
        Self::parse_branches(source, parser, options).map(|(folded, _)| folded)
    }

    /// Like [`from_source`](Self::from_source), also returning the spans of
    /// every branch. Branch offsets coincide with offsets in `source`.
    pub fn parse_branches<P>(
        source: &str,
        parser: &P,
        options: &ParseOptions,
    ) -> Result<(ConditionalDirective, SpanTable), ParseError>
    where
        P: SourceParser + ?Sized,
    {
        let lines = scan_directives(source);
        let branch_count = branch_selections(&lines).len();
        validate_directive_lines(&lines, branch_count)?;

        let mut branches: Vec<CompilationUnit> = Vec::with_capacity(branch_count);
        let mut spans = SpanTable::new();
        for branch in 0..branch_count {
            let text = project_branch(source, &lines, branch)?;
            let parsed = parser.parse(&text, options)?;
            spans.extend(parsed.spans);
            branches.push(parsed.compilation_unit);
        }
        debug!(
            branches = branches.len(),
            directives = lines.len(),
            "parsed conditional region"
        );
        let folded = ConditionalDirective::new(Space::EMPTY, lines, branches);
        spans.insert(folded.id(), Span::new(0, source.len() as u64));
        Ok((folded, spans))
    }

    pub fn branch_count(&self) -> usize {
        self.branches().len()
    }

    /// Check the directive lines against each other and the branch list.
    pub fn validate(&self) -> Result<(), DirectiveError> {
        validate_directive_lines(self.directive_lines(), self.branch_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(number: usize, kind: DirectiveKind, group: usize, active: Option<usize>) -> DirectiveLine {
        DirectiveLine {
            line_number: number,
            text: format!("#{}", kind.keyword()),
            kind,
            group_id: group,
            active_branch_index: active,
        }
    }

    #[test]
    fn recognizes_directive_lines() {
        assert_eq!(directive_kind("#if DEBUG"), Some(DirectiveKind::If));
        assert_eq!(directive_kind("  #  elif X"), Some(DirectiveKind::Elif));
        assert_eq!(directive_kind("#else // c"), Some(DirectiveKind::Else));
        assert_eq!(directive_kind("#endif"), Some(DirectiveKind::Endif));
        assert_eq!(directive_kind("#region if"), None);
        assert_eq!(directive_kind("#iff"), None);
        assert_eq!(directive_kind("x = 1; #if"), None);
    }

    #[test]
    fn scan_assigns_groups_and_branches() {
        let source = "#if A\na\n#elif B\nb\n#else\nc\n#endif";
        let lines = scan_directives(source);
        let summary: Vec<_> = lines
            .iter()
            .map(|l| (l.line_number, l.kind, l.group_id, l.active_branch_index))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, DirectiveKind::If, 0, Some(0)),
                (3, DirectiveKind::Elif, 0, Some(1)),
                (5, DirectiveKind::Else, 0, Some(2)),
                (7, DirectiveKind::Endif, 0, None),
            ]
        );
        assert_eq!(branch_selections(&lines).len(), 3);
        assert_eq!(validate_directive_lines(&lines, 3), Ok(()));
    }

    #[test]
    fn nested_groups_inherit_enclosing_branch() {
        let source = "#if A\nx\n#else\n#if B\ny\n#else\nz\n#endif\n#endif";
        let lines = scan_directives(source);
        assert_eq!(lines[1].active_branch_index, Some(1));
        // The inner `#if` opens inside branch 1.
        assert_eq!(lines[2].group_id, 1);
        assert_eq!(lines[2].active_branch_index, Some(1));
        assert_eq!(lines[3].active_branch_index, Some(2));
        assert_eq!(lines[5].active_branch_index, None);

        let selections = branch_selections(&lines);
        assert_eq!(selections[2].arm_for(0), 1);
        assert_eq!(selections[2].arm_for(1), 1);

        assert_eq!(
            project_branch(source, &lines, 1).unwrap(),
            "\n\n\n\ny\n\n\n\n"
        );
        assert_eq!(
            project_branch(source, &lines, 2).unwrap(),
            "\n\n\n\n\n\nz\n\n"
        );
    }

    #[test]
    fn fold_ignores_extra_endif() {
        let lines = vec![line(2, DirectiveKind::Endif, 0, None)];
        let folded = fold_lines(&lines, &["a\n\nc".to_string()]);
        assert_eq!(folded, "a\n#endif\nc");
    }

    #[test]
    fn validation_errors() {
        use DirectiveKind::*;

        let unmatched = vec![line(1, Endif, 0, None)];
        assert_eq!(
            validate_directive_lines(&unmatched, 1),
            Err(DirectiveError::UnmatchedEndif { line: 1 })
        );

        let unclosed = vec![line(1, If, 0, Some(0)), line(3, Else, 0, Some(1))];
        assert_eq!(
            validate_directive_lines(&unclosed, 2),
            Err(DirectiveError::UnclosedGroup { group_id: 0, line: 1 })
        );

        let orphan_arm = vec![line(4, Else, 0, Some(0))];
        assert_eq!(
            validate_directive_lines(&orphan_arm, 1),
            Err(DirectiveError::ArmOutsideGroup { line: 4 })
        );

        let after_else = vec![
            line(1, If, 0, Some(0)),
            line(2, Else, 0, Some(1)),
            line(3, Elif, 0, Some(2)),
            line(4, Endif, 0, None),
        ];
        assert_eq!(
            validate_directive_lines(&after_else, 3),
            Err(DirectiveError::ArmAfterElse { line: 3 })
        );

        let crossed = vec![
            line(1, If, 0, Some(0)),
            line(2, If, 1, Some(0)),
            line(3, Endif, 0, None),
            line(4, Endif, 1, None),
        ];
        assert_eq!(
            validate_directive_lines(&crossed, 1),
            Err(DirectiveError::GroupMismatch {
                line: 3,
                expected: 1,
                found: 0
            })
        );

        let reused = vec![
            line(1, If, 0, Some(0)),
            line(2, Endif, 0, None),
            line(3, If, 0, Some(0)),
            line(4, Endif, 0, None),
        ];
        assert_eq!(
            validate_directive_lines(&reused, 1),
            Err(DirectiveError::DuplicateGroup { group_id: 0, line: 3 })
        );

        let out_of_order = vec![line(3, If, 0, Some(0)), line(2, Endif, 0, None)];
        assert_eq!(
            validate_directive_lines(&out_of_order, 1),
            Err(DirectiveError::OutOfOrder { line: 2, previous: 3 })
        );

        let out_of_range = vec![line(1, If, 0, Some(0)), line(2, Else, 0, Some(5)), line(3, Endif, 0, None)];
        assert_eq!(
            validate_directive_lines(&out_of_range, 2),
            Err(DirectiveError::BranchOutOfRange { line: 2, index: 5, branches: 2 })
        );
    }
}
