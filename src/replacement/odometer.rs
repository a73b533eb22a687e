/// Advance a mixed-radix digit vector by one step, least significant
/// (rightmost) digit first, carrying overflow leftward.
///
/// Returns true if the vector now holds the next value, false if every digit
/// wrapped, meaning the counter was at its maximum (`radix - 1` everywhere)
/// and the enumeration is complete. In the false case the vector has wrapped
/// back to all zeros.
pub(crate) fn advance(digits: &mut [usize], radix: usize) -> bool {
    for digit in digits.iter_mut().rev() {
        let next = (*digit + 1) % radix;
        *digit = next;
        if next != 0 {
            return true;
        }
    }
    false
}
