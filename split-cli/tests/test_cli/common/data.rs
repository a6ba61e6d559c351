/// Short multi-line text shared across integration tests.
pub const SAMPLE_TEXT: &str = "The quick brown fox\njumps over\nthe lazy dog\n";

/// Generate pseudo-random test data with a fixed seed for determinism.
pub fn generate_random_data(size: usize) -> Vec<u8> {
    let mut seed: u64 = 12345;
    let mut data = Vec::with_capacity(size);

    for _ in 0..size {
        // Linear congruential generator: deterministic, dependency-free.
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        data.push((seed >> 16) as u8);
    }

    data
}

/// `count` lines of the form `line N\n`, starting at zero.
pub fn numbered_lines(count: usize) -> Vec<u8> {
    (0..count)
        .flat_map(|n| format!("line {n}\n").into_bytes())
        .collect()
}
