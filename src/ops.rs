//! Point and position helpers for cursor-anchored text operations
//!
//! Rows and columns follow tree-sitter conventions: zero-indexed, with
//! columns measured in bytes. All helpers return `None` for out-of-range
//! input instead of erroring.

use tree_sitter::{Node, Point};

/// Find the (row, column) of the first alphanumeric character at or after
/// byte offset `start_index`.
///
/// Skips whitespace and punctuation, which models often emit before the
/// first meaningful character of a completion.
pub fn find_alnum_point(value: &str, start_index: usize) -> Option<Point> {
    let mut row = 0;
    let mut column = 0;

    for (idx, c) in value.char_indices() {
        if c == '\n' {
            row += 1;
            column = 0;
            continue;
        }

        if idx >= start_index && c.is_alphanumeric() {
            return Some(Point { row, column });
        }

        column += c.len_utf8();
    }

    None
}

/// Convert a 2D point to its byte position in `value`.
pub fn find_cursor_position(value: &str, point: Point) -> Option<usize> {
    if value.is_empty() {
        return None;
    }

    let mut pos = 0;
    for (row, line) in value.split('\n').enumerate() {
        if row == point.row {
            if point.column > line.len() {
                return None;
            }
            return Some(pos + point.column);
        }
        pos += line.len() + 1;
    }

    None
}

/// Split `source` into the text before and after `point`.
///
/// Returns `None` if the point does not address a valid position.
pub fn split_on_point(source: &str, point: Point) -> Option<(&str, &str)> {
    let pos = find_cursor_position(source, point)?;
    if !source.is_char_boundary(pos) {
        return None;
    }
    Some(source.split_at(pos))
}

/// Convert a buffer-global point to a point relative to `node`'s start.
///
/// The column shifts only on the node's first row; later rows keep their
/// absolute column.
pub fn relative_point_in_node(node: &Node<'_>, point: Point) -> Point {
    let start = node.start_position();
    let column = if point.row == start.row {
        point.column.saturating_sub(start.column)
    } else {
        point.column
    };

    Point {
        row: point.row.saturating_sub(start.row),
        column,
    }
}

/// The point just past the last character of `text`
pub fn end_point(text: &str) -> Point {
    let row = text.bytes().filter(|b| *b == b'\n').count();
    let column = match text.rfind('\n') {
        Some(idx) => text.len() - idx - 1,
        None => text.len(),
    };
    Point { row, column }
}

/// Byte position just past the newline nearest to `start_index`.
///
/// When the text before `start_index` already ends its line (ignoring
/// trailing spaces and tabs), `start_index` itself is returned.
pub fn find_newline_position(value: &str, start_index: usize) -> Option<usize> {
    let head = value.get(..start_index)?;
    if head.trim_end_matches([' ', '\t']).ends_with('\n') {
        return Some(start_index);
    }
    value[start_index..]
        .find('\n')
        .map(|idx| start_index + idx + 1)
}

/// Indices of `target` lines that also occur in `source`, grouped where
/// consecutive target lines extend a run of consecutive source lines.
pub fn find_common_lines(source: &[&str], target: &[&str]) -> Vec<Vec<usize>> {
    let rows = source.len();
    let cols = target.len();
    let mut table = vec![vec![0usize; cols + 1]; rows + 1];

    // Tabulated LCS. A cell that turns out to start a longer run is bumped
    // from 1 to 2, so the per-column maximum prefers runs over isolated
    // matches.
    for i in 1..=rows {
        for j in 1..=cols {
            if source[i - 1] == target[j - 1] {
                if table[i - 1][j - 1] == 1 {
                    table[i - 1][j - 1] = 2;
                }
                table[i][j] = table[i - 1][j - 1] + 1;
            }
        }
    }

    // Best-matching source row per target line; unmatched lines drop out
    let mut matched: Vec<(usize, usize)> = Vec::new();
    for j in 1..=cols {
        let mut best_value = 0;
        let mut best_row = 0;
        for (i, row) in table.iter().enumerate() {
            if row[j] > best_value {
                best_value = row[j];
                best_row = i;
            }
        }
        if best_value > 0 {
            matched.push((j - 1, best_row));
        }
    }

    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut prev_row: Option<usize> = None;
    for (line, row) in matched {
        let extends_run = prev_row.is_some_and(|prev| row == prev + 1);
        if extends_run {
            if let Some(group) = groups.last_mut() {
                group.push(line);
            }
        } else {
            groups.push(vec![line]);
        }
        prev_row = Some(row);
    }
    groups
}

/// Collapse whitespace-only text to the empty string
pub fn strip_whitespaces(text: &str) -> &str {
    if text.trim().is_empty() {
        ""
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_alnum_point_skips_leading_noise() {
        // Cursor after "):" — the first alphanumeric character is 'r' of return
        let value = "def f():\n    return 1";
        let point = find_alnum_point(value, 9).unwrap();
        assert_eq!(point, Point { row: 1, column: 4 });
    }

    #[test]
    fn test_find_alnum_point_none_when_only_punctuation() {
        assert_eq!(find_alnum_point(")]}\n  ", 0), None);
        assert_eq!(find_alnum_point("", 0), None);
    }

    #[test]
    fn test_find_alnum_point_at_start() {
        let point = find_alnum_point("abc", 0).unwrap();
        assert_eq!(point, Point { row: 0, column: 0 });
    }

    #[test]
    fn test_find_cursor_position_round_trip() {
        let value = "line one\nline two\nline three";
        let point = Point { row: 1, column: 5 };
        let pos = find_cursor_position(value, point).unwrap();
        assert_eq!(&value[pos..pos + 3], "two");
    }

    #[test]
    fn test_find_cursor_position_out_of_range() {
        let value = "ab\ncd";
        assert_eq!(find_cursor_position(value, Point { row: 5, column: 0 }), None);
        assert_eq!(find_cursor_position(value, Point { row: 0, column: 9 }), None);
        assert_eq!(find_cursor_position("", Point { row: 0, column: 0 }), None);
    }

    #[test]
    fn test_split_on_point() {
        let (before, after) = split_on_point("ab\ncd", Point { row: 1, column: 1 }).unwrap();
        assert_eq!(before, "ab\nc");
        assert_eq!(after, "d");
    }

    #[test]
    fn test_end_point() {
        assert_eq!(end_point(""), Point { row: 0, column: 0 });
        assert_eq!(end_point("abc"), Point { row: 0, column: 3 });
        assert_eq!(end_point("ab\nc"), Point { row: 1, column: 1 });
        assert_eq!(end_point("ab\n"), Point { row: 1, column: 0 });
    }

    #[test]
    fn test_find_newline_position() {
        assert_eq!(find_newline_position("ab\ncd", 0), Some(3));
        // Start already sits at a line boundary
        assert_eq!(find_newline_position("ab\ncd", 3), Some(3));
        // Trailing spaces before the boundary do not hide the newline
        assert_eq!(find_newline_position("ab\n  cd", 5), Some(5));
        assert_eq!(find_newline_position("abcd", 1), None);
    }

    #[test]
    fn test_find_common_lines_groups_consecutive_runs() {
        let source = ["abc", "def", "g"];
        let target = ["abc", "def", "c", "abc"];
        assert_eq!(
            find_common_lines(&source, &target),
            vec![vec![0, 1], vec![3]]
        );
    }

    #[test]
    fn test_find_common_lines_without_overlap() {
        assert_eq!(find_common_lines(&["a"], &["b"]), Vec::<Vec<usize>>::new());
        assert_eq!(find_common_lines(&[], &["b"]), Vec::<Vec<usize>>::new());
    }

    #[test]
    fn test_strip_whitespaces() {
        assert_eq!(strip_whitespaces("  \n\t "), "");
        assert_eq!(strip_whitespaces(""), "");
        assert_eq!(strip_whitespaces("  x "), "  x ");
    }
}
