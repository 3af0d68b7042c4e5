//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses raw puzzle input into the data shared by every part of a solver.
///
/// Parsing happens once per input; all parts then work from the same
/// [`AocParser::SharedData`] value.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         aoc_solver::parse_lines(input, |line| line.parse::<i64>())
///     }
/// }
///
/// assert_eq!(Depths::parse("3\n1").unwrap(), vec![3, 1]);
/// assert!(Depths::parse("3\nx").is_err());
/// ```
pub trait AocParser {
    /// The parsed input plus any state parts want to share.
    ///
    /// Owned data is the usual choice; borrowing from the input (`&'a str`)
    /// works when no transformation is needed.
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Implemented once per part; `#[derive(AocSolver)]` stitches the parts into a
/// [`Solver`] implementation.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         aoc_solver::parse_lines(input, |line| line.parse::<i64>())
///     }
/// }
///
/// impl PartSolver<1> for Depths {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         shared
///             .iter()
///             .min()
///             .map(i64::to_string)
///             .ok_or_else(|| SolveError::Unsupported("no depths".into()))
///     }
/// }
///
/// let mut shared = Depths::parse("7\n3\n9").unwrap();
/// assert_eq!(<Depths as PartSolver<1>>::solve(&mut shared).unwrap(), "3");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part of the puzzle from the shared data.
    ///
    /// Mutable access lets an earlier part leave intermediate results behind
    /// for later parts.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A solver for one year-day puzzle, dispatching by part number.
///
/// Usually derived with `#[derive(AocSolver)]`; a manual implementation looks
/// like this:
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         aoc_solver::parse_lines(input, |line| line.parse::<i64>())
///     }
/// }
///
/// impl Solver for Depths {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i64>().to_string()),
///             2 => Ok(shared.iter().max().copied().unwrap_or_default().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Depths::parse("1\n5\n2").unwrap();
/// assert_eq!(Depths::solve_part(&mut shared, 1).unwrap(), "8");
/// assert_eq!(Depths::solve_part(&mut shared, 2).unwrap(), "5");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::Unsupported)` - The input cannot be answered by this part
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked part dispatch, available on every [`Solver`]
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but rejects parts outside `1..=PARTS`
    /// before touching the solver.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
