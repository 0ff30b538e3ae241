use once_cell::sync::Lazy;

/// Letters a grid cell may hold
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Letter frequency distribution for English (approximate)
/// Used for weighted noise letters
pub static LETTER_DISTRIBUTION: Lazy<Vec<(char, f32)>> = Lazy::new(|| {
    vec![
        ('E', 12.70),
        ('T', 9.05),
        ('A', 8.16),
        ('O', 7.50),
        ('I', 6.96),
        ('N', 6.74),
        ('S', 6.32),
        ('H', 6.09),
        ('R', 5.98),
        ('D', 4.25),
        ('L', 4.02),
        ('C', 2.78),
        ('U', 2.75),
        ('M', 2.40),
        ('W', 2.36),
        ('F', 2.22),
        ('G', 2.01),
        ('Y', 1.97),
        ('P', 1.92),
        ('B', 1.49),
        ('V', 0.97),
        ('K', 0.77),
        ('J', 0.15),
        ('X', 0.15),
        ('Q', 0.09),
        ('Z', 0.07),
    ]
});

/// Running totals over [`LETTER_DISTRIBUTION`], computed once
pub static CUMULATIVE_DISTRIBUTION: Lazy<Vec<(char, f32)>> = Lazy::new(|| {
    let mut cumulative = 0.0;
    LETTER_DISTRIBUTION
        .iter()
        .map(|(ch, freq)| {
            cumulative += freq;
            (*ch, cumulative)
        })
        .collect()
});

/// True for the letters a grid cell may hold
pub fn is_grid_letter(ch: char) -> bool {
    ch.is_ascii_uppercase()
}

/// Map a uniform sample in `[0, 1)` onto the weighted distribution
pub fn weighted_letter(sample: f32) -> char {
    let total = CUMULATIVE_DISTRIBUTION.last().map_or(0.0, |(_, c)| *c);
    let target = sample * total;

    for (letter, cumulative) in CUMULATIVE_DISTRIBUTION.iter() {
        if target <= *cumulative {
            return *letter;
        }
    }

    'E' // Fallback
}
