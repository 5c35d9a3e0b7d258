//! Static multilingual word list for filler messages.

use rand::Rng;

/// Words sampled for filler messages (mixed Persian/English fruit names).
pub const RANDOM_WORDS: &[&str] = &[
    "سیب",
    "آلبالو",
    "cherry",
    "date",
    "تاریخ",
    "انگوز",
    "grape",
    "honeydew",
    "kiwi",
    "lemon",
    "mango",
    "پرتقال",
    "orange",
    "انار",
    "quince",
    "tangerine",
    "نارنگی",
    "tangerine",
    "توت فرنگی",
    "watermelon",
];

/// Sample `count` words from the list, with replacement.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<&'static str> {
    (0..count)
        .map(|_| RANDOM_WORDS[rng.gen_range(0..RANDOM_WORDS.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn word_list_is_not_empty() {
        assert!(!RANDOM_WORDS.is_empty());
        assert!(RANDOM_WORDS.iter().all(|w| !w.is_empty()));
    }

    #[test]
    fn sample_returns_requested_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let words = sample(&mut rng, 10);
        assert_eq!(words.len(), 10);
    }

    #[test]
    fn sample_only_draws_from_the_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for word in sample(&mut rng, 50) {
            assert!(RANDOM_WORDS.contains(&word), "unexpected word: {}", word);
        }
    }

    #[test]
    fn sample_zero_returns_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample(&mut rng, 0).is_empty());
    }

    #[test]
    fn sample_is_deterministic_for_a_fixed_seed() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(sample(&mut a, 10), sample(&mut b, 10));
    }
}
