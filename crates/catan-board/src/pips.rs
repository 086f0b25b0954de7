//! Probability dots shown under a number token.
//!
//! The dot count is the number of two-dice combinations that roll the number.

/// Dot count for a dice number: 2/12→1, 3/11→2, 4/10→3, 5/9→4, 6/8→5.
/// 7, a missing number, or anything outside 2-12 gets none.
pub fn pips(number: Option<u8>) -> u8 {
    match number {
        Some(2 | 12) => 1,
        Some(3 | 11) => 2,
        Some(4 | 10) => 3,
        Some(5 | 9) => 4,
        Some(6 | 8) => 5,
        _ => 0,
    }
}

/// Most likely numbers, drawn in red
pub fn is_hot(number: u8) -> bool {
    number == 6 || number == 8
}
