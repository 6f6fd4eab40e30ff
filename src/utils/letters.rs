use once_cell::sync::Lazy;

/// Letter frequency distribution for English (approximate), in percent.
/// Lowercase to match word lists normalized by `filters::make_unique`.
pub static LETTER_DISTRIBUTION: Lazy<Vec<(char, f32)>> = Lazy::new(|| {
    vec![
        ('e', 12.70),
        ('t', 9.05),
        ('a', 8.16),
        ('o', 7.50),
        ('i', 6.96),
        ('n', 6.74),
        ('s', 6.32),
        ('h', 6.09),
        ('r', 5.98),
        ('d', 4.25),
        ('l', 4.02),
        ('c', 2.78),
        ('u', 2.75),
        ('m', 2.40),
        ('w', 2.36),
        ('f', 2.22),
        ('g', 2.01),
        ('y', 1.97),
        ('p', 1.92),
        ('b', 1.49),
        ('v', 0.97),
        ('k', 0.77),
        ('j', 0.15),
        ('x', 0.15),
        ('q', 0.09),
        ('z', 0.07),
    ]
});

/// Running totals over `LETTER_DISTRIBUTION`, for weighted random selection
pub fn cumulative_distribution() -> Vec<(char, f32)> {
    let mut cumulative = 0.0;
    LETTER_DISTRIBUTION
        .iter()
        .map(|(ch, freq)| {
            cumulative += freq;
            (*ch, cumulative)
        })
        .collect()
}
