use std::{collections::HashMap, hash::Hash};

pub fn norm_1<K: Hash + Eq>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().map(|x| x.abs()).sum()
}

pub fn max_abs<K: Hash + Eq>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().map(|x| x.abs()).fold(0.0, f64::max)
}

/// Componentwise `a - b` over the keys of `a`. Keys missing in `b` count as
/// zero.
pub fn delta<K: Hash + Eq + Clone>(
    a: &HashMap<K, f64, ahash::RandomState>,
    b: &HashMap<K, f64, ahash::RandomState>,
) -> HashMap<K, f64, ahash::RandomState> {
    a.iter()
        .map(|(k, x)| (k.clone(), x - b.get(k).copied().unwrap_or(0.0)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norms() {
        let a: HashMap<_, _, ahash::RandomState> =
            [(0, 0.5), (1, -0.25), (2, 0.25)].into_iter().collect();
        let b: HashMap<_, _, ahash::RandomState> =
            [(0, 0.25), (1, 0.25)].into_iter().collect();
        assert_eq!(norm_1(&a), 1.0);
        assert_eq!(max_abs(&a), 0.5);
        let d = delta(&a, &b);
        assert_eq!(d[&0], 0.25);
        assert_eq!(d[&1], -0.5);
        assert_eq!(d[&2], 0.25);
    }
}
