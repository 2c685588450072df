// src/sampling/mod.rs
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of names to select from one bracket: the bracket's proportional
/// share of the target, rounded down. Rounding losses are not redistributed,
/// so the grand total may come in under the target.
pub fn sample_count(target: usize, bracket_len: usize, total: usize) -> usize {
    if bracket_len == 0 || total == 0 {
        return 0;
    }
    target * bracket_len / total
}

/// Draws `count` names uniformly at random without replacement.
///
/// Implemented as a random-permutation prefix: shuffle an index pool, keep
/// the first `count` entries. The draw is capped at the pool size, so a
/// target larger than the population cannot drain an empty pool.
pub fn draw_sample<R: Rng>(rng: &mut R, names: &[String], count: usize) -> Vec<String> {
    let count = count.min(names.len());
    if count == 0 {
        return Vec::new();
    }

    let mut indices: Vec<usize> = (0..names.len()).collect();
    indices.shuffle(rng);
    indices.truncate(count);

    indices.into_iter().map(|i| names[i].clone()).collect()
}

/// Selects one bracket's share of the target and prints the section of the
/// report: separator, bracket label, counts, then one name per line in the
/// (random) order drawn. Empty brackets still print their header.
pub fn select_members<R: Rng>(
    rng: &mut R,
    title: &str,
    names: &[String],
    total: usize,
    target: usize,
) -> Vec<String> {
    let count = sample_count(target, names.len(), total);
    let selected = draw_sample(rng, names, count);

    println!();
    println!("-------------------------");
    println!("{}", title);
    println!("Selecting {} out of {}", count, names.len());
    println!("-------------------------");
    for name in &selected {
        println!("{}", name);
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Member {}", i)).collect()
    }

    #[test]
    fn test_sample_count_is_proportional_floor() {
        assert_eq!(sample_count(80, 50, 200), 20);
        assert_eq!(sample_count(80, 75, 200), 30);
        // 80 * 33 / 200 = 13.2, floored
        assert_eq!(sample_count(80, 33, 200), 13);
    }

    #[test]
    fn test_sample_count_empty_bracket() {
        assert_eq!(sample_count(80, 0, 200), 0);
        assert_eq!(sample_count(80, 0, 0), 0);
    }

    #[test]
    fn test_draw_is_without_replacement() {
        let pool = names(10);
        let mut rng = StdRng::seed_from_u64(7);

        let selected = draw_sample(&mut rng, &pool, 6);

        assert_eq!(selected.len(), 6);
        for name in &selected {
            assert!(pool.contains(name));
        }
        let mut deduped = selected.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), selected.len());
    }

    #[test]
    fn test_draw_zero_from_empty_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(draw_sample(&mut rng, &[], 0).is_empty());
    }

    #[test]
    fn test_draw_caps_at_pool_size() {
        let pool = names(3);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(draw_sample(&mut rng, &pool, 10).len(), 3);
    }

    #[test]
    fn test_fixed_seed_reproduces_selection() {
        let pool = names(20);

        let mut first_rng = StdRng::seed_from_u64(42);
        let mut second_rng = StdRng::seed_from_u64(42);

        let first = draw_sample(&mut first_rng, &pool, 5);
        let second = draw_sample(&mut second_rng, &pool, 5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_allocation_never_exceeds_target() {
        let bracket_sizes = [50usize, 30, 15, 5];
        let total: usize = bracket_sizes.iter().sum();
        let target = 80;

        let allocated: usize = bracket_sizes
            .iter()
            .map(|&len| sample_count(target, len, total))
            .sum();

        assert!(allocated <= target);
    }
}
