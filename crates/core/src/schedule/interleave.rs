//! Order-preserving merges of two sequences.
//!
//! Every merge of `left` (length `n`) and `right` (length `m`) is fully
//! described by a *choice vector* of length `n + m` holding `n` copies of
//! [`TransactionId::T1`] and `m` copies of [`TransactionId::T2`]: slot `k`
//! says which sequence supplies the `k`-th element. Enumerating all merges is
//! therefore enumerating the distinct permutations of that multiset, which
//! is done here with the classic lexicographic next-permutation step. There
//! is no recursion, so stack depth does not grow with the input.
//!
//! Generation order is lexicographic with `T1 < T2`: the first merge is
//! `left ++ right`, the last is `right ++ left`, and there are exactly
//! `C(n + m, n)` of them.

use alloc::vec::Vec;

use crate::operation::types::TransactionId;

/// Iterator over all order-preserving merges of two slices.
#[derive(Debug, Clone)]
pub struct Interleavings<'a, T> {
    left: &'a [T],
    right: &'a [T],
    /// `None` once exhausted.
    choices: Option<Vec<TransactionId>>,
}

impl<'a, T> Interleavings<'a, T> {
    /// Starts the enumeration. Two empty inputs yield nothing; one empty
    /// input yields the other input once.
    #[must_use]
    pub fn new(left: &'a [T], right: &'a [T]) -> Self {
        let choices = if left.is_empty() && right.is_empty() {
            None
        } else {
            let mut choices = Vec::with_capacity(left.len() + right.len());
            choices.resize(left.len(), TransactionId::T1);
            choices.resize(left.len() + right.len(), TransactionId::T2);
            Some(choices)
        };
        Self {
            left,
            right,
            choices,
        }
    }

    /// The choice vector of the merge the next call to `next` returns.
    #[must_use]
    pub fn peek_choices(&self) -> Option<&[TransactionId]> {
        self.choices.as_deref()
    }
}

impl<T> Iterator for Interleavings<'_, T>
where
    T: Clone,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let choices = self.choices.as_mut()?;

        let mut left = self.left.iter();
        let mut right = self.right.iter();
        let merged = choices
            .iter()
            .filter_map(|side| match side {
                TransactionId::T1 => left.next(),
                TransactionId::T2 => right.next(),
            })
            .cloned()
            .collect();

        if !next_choices(choices) {
            self.choices = None;
        }

        Some(merged)
    }
}

/// Advances `choices` to the next permutation in lexicographic order.
/// Returns `false` (leaving `choices` untouched) if it was the last one.
fn next_choices(choices: &mut [TransactionId]) -> bool {
    let Some(pivot) = choices.windows(2).rposition(|pair| pair[0] < pair[1]) else {
        return false;
    };
    let pivot_value = choices[pivot];
    if let Some(successor) = choices.iter().rposition(|&side| side > pivot_value) {
        choices.swap(pivot, successor);
    }
    choices[pivot + 1..].reverse();
    true
}

/// All order-preserving merges of `seq1` and `seq2`, in generation order.
#[must_use]
pub fn combine_ordered<T>(seq1: &[T], seq2: &[T]) -> Vec<Vec<T>>
where
    T: Clone,
{
    Interleavings::new(seq1, seq2).collect()
}

/// Number of merges [`combine_ordered`] produces for inputs of length `n`
/// and `m`: `C(n + m, n)`, or `0` when both are empty.
///
/// Returns `None` if the count does not fit in a `u64`.
#[must_use]
pub fn interleaving_count(n: usize, m: usize) -> Option<u64> {
    if n == 0 && m == 0 {
        return Some(0);
    }
    let total = u128::try_from(n.checked_add(m)?).ok()?;
    let k = u128::try_from(n.min(m)).ok()?;

    // After step i, `count` is C(total - k + i, i), so each division is exact.
    let mut count: u128 = 1;
    for i in 1..=k {
        count = count.checked_mul(total - k + i)? / i;
    }
    u64::try_from(count).ok()
}
