//! Line-oriented input reading

use crate::error::ParseError;
use std::fmt::Display;

/// Applies `parse_line` to every line of `input`, collecting the results.
///
/// Stops at the first line that fails and reports it as
/// [`ParseError::InvalidLine`] with its 1-based line number.
///
/// ```
/// use aoc_solver::{parse_lines, ParseError};
///
/// let parsed = parse_lines("1 2\n3 4", |line| {
///     line.split(' ').map(str::parse::<u8>).collect::<Result<Vec<_>, _>>()
/// });
/// assert_eq!(parsed.unwrap(), vec![vec![1, 2], vec![3, 4]]);
///
/// let err = parse_lines("1\ntwo", str::parse::<u8>).unwrap_err();
/// assert!(matches!(err, ParseError::InvalidLine { line: 2, .. }));
/// ```
pub fn parse_lines<T, E, F>(input: &str, parse_line: F) -> Result<Vec<T>, ParseError>
where
    E: Display,
    F: FnMut(&str) -> Result<T, E>,
{
    parse_numbered_lines(numbered_lines(input), parse_line)
}

/// Like [`parse_lines`], over lines that already carry their line number.
///
/// Sectioned inputs use this to keep line numbers relative to the whole file.
pub fn parse_numbered_lines<'a, I, T, E, F>(lines: I, mut parse_line: F) -> Result<Vec<T>, ParseError>
where
    I: IntoIterator<Item = (usize, &'a str)>,
    E: Display,
    F: FnMut(&str) -> Result<T, E>,
{
    lines
        .into_iter()
        .map(|(line_no, line)| parse_line(line).map_err(|e| ParseError::at_line(line_no, e)))
        .collect()
}

/// Lines of `input` paired with their 1-based line number, trailing `\r` removed.
pub fn numbered_lines(input: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim_end_matches('\r')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_lines_start_at_one() {
        let lines: Vec<_> = numbered_lines("a\r\nb\n\nc").collect();
        assert_eq!(lines, vec![(1, "a"), (2, "b"), (3, ""), (4, "c")]);
    }

    #[test]
    fn test_parse_lines_reports_first_failure() {
        let err = parse_lines("10\n20\nx\ny", str::parse::<i32>).unwrap_err();
        match err {
            ParseError::InvalidLine { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("invalid digit"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_numbered_lines_keeps_offsets() {
        let lines = vec![(7, "1"), (8, "oops")];
        let err = parse_numbered_lines(lines, str::parse::<u32>).unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line: 8, .. }));
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert_eq!(parse_lines("", str::parse::<u8>).unwrap(), Vec::<u8>::new());
    }
}
