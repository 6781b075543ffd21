//! Keyboard helpers.

use crossterm::event::KeyCode;

/// Maps digit keys to zero-based indexes: `1`-`9` to 0-8, `0` to 9.
/// Returns `None` for anything outside `count`.
pub fn digit_index(code: KeyCode, count: usize) -> Option<usize> {
    let KeyCode::Char(c) = code else {
        return None;
    };
    let digit = c.to_digit(10)? as usize;
    let index = if digit == 0 { 9 } else { digit - 1 };
    (index < count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_zero_based_indexes() {
        assert_eq!(digit_index(KeyCode::Char('1'), 9), Some(0));
        assert_eq!(digit_index(KeyCode::Char('9'), 9), Some(8));
        assert_eq!(digit_index(KeyCode::Char('0'), 10), Some(9));
    }

    #[test]
    fn out_of_range_digits_are_rejected() {
        assert_eq!(digit_index(KeyCode::Char('0'), 9), None);
        assert_eq!(digit_index(KeyCode::Char('4'), 3), None);
        assert_eq!(digit_index(KeyCode::Enter, 9), None);
    }
}
