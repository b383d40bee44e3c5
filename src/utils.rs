use crate::engine::Board;
use crate::error::BoardError;

/// Parses a textual tile sequence into a `Board`.
///
/// Two forms are accepted:
/// - Values separated by commas and/or whitespace, e.g. `"1,2,5,3,4,0,6,7,8"`.
///   This form is required once tiles need more than one digit.
/// - A contiguous run of single digits, e.g. `"125340678"`. Every character is one tile,
///   so a leading blank must be written out (`"012345678"`).
///
/// # Arguments
/// * `s`: The board text, row-major.
///
/// # Returns
/// * `Ok(Board)` if parsing succeeds and the tiles form a valid board.
/// * `Err(BoardError::InvalidToken)` if a token is not a non-negative integer that fits in a tile.
/// * Any other `BoardError` from `Board::from_digits` for a malformed tile sequence.
///
/// # Examples
/// ```
/// use slider_solver::utils::board_from_digit_str;
///
/// let a = board_from_digit_str("1,2,5,3,4,0,6,7,8").unwrap();
/// let b = board_from_digit_str("125340678").unwrap();
/// assert_eq!(a, b);
///
/// assert!(board_from_digit_str("12534067x").is_err());
/// assert!(board_from_digit_str("12345678").is_err()); // missing the blank
/// ```
pub fn board_from_digit_str(s: &str) -> Result<Board, BoardError> {
    let trimmed = s.trim();
    let is_separated = trimmed.contains(|c: char| c == ',' || c.is_whitespace());

    let digits = if is_separated {
        trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<u8>()
                    .map_err(|_| BoardError::InvalidToken(token.to_string()))
            })
            .collect::<Result<Vec<u8>, BoardError>>()?
    } else {
        trimmed
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or_else(|| BoardError::InvalidToken(c.to_string()))
            })
            .collect::<Result<Vec<u8>, BoardError>>()?
    };

    Board::from_digits(&digits)
}
