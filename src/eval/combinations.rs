//! k-subset enumeration.
//!
//! Shared by the best-hand selector (5 of 7 cards) and the claim resolver
//! (k undealt cards per wildcard slot group).

/// Lazy iterator over every `k`-subset of a slice, in lexicographic index
/// order. Items borrow from the input, so card identity is preserved.
///
/// `k` greater than the slice length yields nothing; `k == 0` yields a
/// single empty subset. A clone continues from the current position; call
/// `combinations` again to start over.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

/// Enumerate every `k`-subset of `items`.
pub fn combinations<T>(items: &[T], k: usize) -> Combinations<'_, T> {
    Combinations {
        items,
        indices: (0..k).collect(),
        started: false,
        done: k > items.len(),
    }
}

impl<'a, T> Combinations<'a, T> {
    fn current(&self) -> Vec<&'a T> {
        self.indices.iter().map(|&i| &self.items[i]).collect()
    }

    /// Step to the next index set; false when exhausted.
    fn advance(&mut self) -> bool {
        let n = self.items.len();
        let k = self.indices.len();
        let mut i = k;
        loop {
            if i == 0 {
                return false;
            }
            i -= 1;
            if self.indices[i] < n - k + i {
                break;
            }
        }
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl<'a, T> Iterator for Combinations<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current());
        }
        if self.advance() {
            Some(self.current())
        } else {
            self.done = true;
            None
        }
    }
}

/// Exact binomial coefficient `n choose k`; zero when `k > n`.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as u64;
    let n = n as u64;
    // each partial product is itself a binomial coefficient, so the division is exact
    (0..k).fold(1u64, |acc, i| acc * (n - i) / (i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_match_binomial() {
        let items: Vec<u32> = (0..7).collect();
        for k in 0..=8 {
            assert_eq!(combinations(&items, k).count() as u64, binomial(7, k), "k = {}", k);
        }
        assert_eq!(binomial(52, 5), 2_598_960);
        assert_eq!(binomial(45, 2), 990);
        assert_eq!(binomial(3, 4), 0);
    }

    #[test]
    fn test_subsets_are_distinct_and_ordered() {
        let items = ['a', 'b', 'c', 'd'];
        let subsets: Vec<String> = combinations(&items, 2)
            .map(|s| s.into_iter().collect())
            .collect();
        assert_eq!(subsets, vec!["ab", "ac", "ad", "bc", "bd", "cd"]);
    }

    #[test]
    fn test_empty_and_oversized() {
        let items = [1, 2, 3];
        let empty: Vec<Vec<&i32>> = combinations(&items, 0).collect();
        assert_eq!(empty, vec![Vec::<&i32>::new()]);
        assert_eq!(combinations(&items, 4).count(), 0);
        assert_eq!(combinations::<i32>(&[], 0).count(), 1);
    }

    #[test]
    fn test_preserves_identity() {
        let items = vec![String::from("x"), String::from("y")];
        let first = combinations(&items, 1).next().unwrap();
        assert!(std::ptr::eq(first[0], &items[0]));
    }

    #[test]
    fn test_restartable() {
        let items = [5, 6, 7, 8];
        let a: Vec<Vec<&i32>> = combinations(&items, 3).collect();
        let b: Vec<Vec<&i32>> = combinations(&items, 3).collect();
        assert_eq!(a, b);
    }
}
