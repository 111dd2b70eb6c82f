//! Index and range validation run before every mutation.

use crate::error::{ManipulationError, Result};

/// Normalize an insertion index. Negative indices count from the end, so
/// `-1` is `length - 1`. `length` itself is valid and means "append".
pub fn verify_and_get_index(index: isize, length: usize) -> Result<usize> {
    let normalized = if index < 0 {
        length as isize + index
    } else {
        index
    };
    if normalized < 0 || normalized as usize > length {
        return Err(ManipulationError::OutOfBounds { index, length });
    }
    Ok(normalized as usize)
}

/// Check an inclusive `(start, end)` range of existing items.
pub fn verify_range((start, end): (usize, usize), length: usize) -> Result<()> {
    let bad = if start >= length || start > end {
        Some(start)
    } else if end >= length {
        Some(end)
    } else {
        None
    };
    match bad {
        Some(index) => Err(ManipulationError::OutOfBounds {
            index: index as isize,
            length,
        }),
        None => Ok(()),
    }
}
