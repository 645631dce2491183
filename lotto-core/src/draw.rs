use rand::Rng;

/// Index in `0..len` chosen as `floor(u * len)` for `u` uniform in `[0, 1)`.
///
/// Returns `None` for an empty sequence. Not suitable where the draw has to be
/// verifiable or unpredictable.
pub fn select_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let u: f64 = rng.gen();
    let index = (u * len as f64).floor() as usize;
    // guard against rounding up to len for u very close to 1
    Some(index.min(len - 1))
}

/// Uniformly pick one entry of `items`
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    select_index(rng, items.len()).map(|i| &items[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_has_no_index() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(select_index(&mut rng, 0), None);
        assert_eq!(pick::<u8, _>(&mut rng, &[]), None);
    }

    #[test]
    fn test_single_entry_always_selected() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(select_index(&mut rng, 1), Some(0));
        }
    }

    #[test]
    fn test_every_index_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [0usize; 3];
        for _ in 0..3000 {
            let i = select_index(&mut rng, 3).unwrap();
            seen[i] += 1;
        }
        // roughly uniform: each bucket well above zero
        assert!(seen.iter().all(|&n| n > 800), "{seen:?}");
    }

    #[test]
    fn test_same_seed_same_pick() {
        let items = ["A", "B", "C", "D"];
        let a = pick(&mut StdRng::seed_from_u64(99), &items);
        let b = pick(&mut StdRng::seed_from_u64(99), &items);
        assert_eq!(a, b);
    }
}
