/// Levenshtein edit distance with a single rolling row, byte-wise over
/// normalized (ASCII) strings.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, &ca) in a.iter().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let ins = row[j + 1] + 1;
            let del = row[j] + 1;
            let sub = prev + usize::from(ca != cb);
            prev = row[j + 1];
            row[j + 1] = ins.min(del).min(sub);
        }
    }
    row[b.len()]
}

/// Bounded similarity in [0, 1]: `1 - distance / max(1, max_len)`.
/// Two empty strings are fully similar.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let d = levenshtein(a, b);
    1.0 - d as f64 / a.len().max(b.len()).max(1) as f64
}
