use crate::XdrError;

/// Converts a vector into a fixed-length array, failing unless it holds
/// exactly `N` elements.
pub fn try_into_fixed<T, const N: usize>(items: Vec<T>) -> Result<[T; N], XdrError> {
    items
        .try_into()
        .map_err(|items: Vec<T>| XdrError::FixedLengthMismatch {
            expected: N,
            actual: items.len(),
        })
}
