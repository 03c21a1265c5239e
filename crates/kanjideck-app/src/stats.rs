use kanjideck_kanjidic::Kanji;

const BUCKETS: [(&str, u32); 6] = [
    ("1,000,000+", 1_000_000),
    ("100,000+", 100_000),
    ("10,000+", 10_000),
    ("1,000+", 1_000),
    ("100+", 100),
    ("10+", 10),
];

/// Logs how common the chosen example words are, bucketed by order of
/// magnitude of their frequency rank.
pub fn log_example_frequencies(kanjilist: &[Kanji]) {
    let mut counts = [0usize; 7];

    for kanji in kanjilist {
        for example in &kanji.examples {
            let slot = BUCKETS
                .iter()
                .position(|(_, floor)| example.rank >= *floor)
                .unwrap_or(BUCKETS.len());
            counts[slot] += 1;
        }
    }

    let total: usize = counts.iter().sum();
    for ((label, _), count) in BUCKETS.iter().zip(counts) {
        tracing::info!("examples ranked {label}: {count}");
    }
    tracing::info!("examples ranked 1+: {}", counts[BUCKETS.len()]);
    tracing::info!("examples total: {total}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_floors_are_descending() {
        assert!(BUCKETS.windows(2).all(|w| w[0].1 > w[1].1));
    }
}
