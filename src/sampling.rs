use rand::Rng;

/// Elige `count` índices únicos de `0..len`, sin reemplazo y de forma
/// iterativa sobre el conjunto de candidatos restantes. Si `count` supera
/// `len` se devuelven todos los índices disponibles.
pub fn sample_unique_indices(len: usize, count: usize) -> Vec<usize> {
    let count = count.min(len);
    let mut pool: Vec<usize> = (0..len).collect();
    let mut rng = rand::thread_rng();

    let mut picked = Vec::with_capacity(count);
    for _ in 0..count {
        let at = rng.gen_range(0..pool.len());
        picked.push(pool.swap_remove(at));
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_sample_is_a_permutation() {
        let mut picked = sample_unique_indices(10, 10);
        picked.sort();
        assert_eq!(picked, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn partial_sample_has_unique_in_range_indices() {
        let picked = sample_unique_indices(20, 5);
        assert_eq!(picked.len(), 5);
        for (i, idx) in picked.iter().enumerate() {
            assert!(*idx < 20);
            assert!(!picked[..i].contains(idx));
        }
    }

    #[test]
    fn count_larger_than_len_is_clamped() {
        let mut picked = sample_unique_indices(3, 100);
        picked.sort();
        assert_eq!(picked, vec![0, 1, 2]);
    }

    #[test]
    fn empty_pool_gives_empty_sample() {
        assert!(sample_unique_indices(0, 4).is_empty());
    }
}
