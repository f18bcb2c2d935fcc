//! Uniform random selection over the catalog.
//!
//! A requested tier narrows the pool to that tier; anything that is not a
//! tier (including `None`) draws from the whole catalog. The draw is uniform
//! over records, not over tiers.

use fastrand::Rng;

use crate::record::SignatureRecord;
use crate::store::SignatureStore;
use crate::tier::Tier;

/// Candidate records for a request.
///
/// Falls back to the full catalog when the filtered pool would be empty.
pub fn pool<'a>(store: &'a SignatureStore, tier: Option<&str>) -> Vec<&'a SignatureRecord> {
    let all = store.all();
    let filtered: Vec<&SignatureRecord> = match tier.and_then(Tier::parse) {
        Some(tier) => all.iter().filter(|r| r.tier == tier).collect(),
        None => all.iter().collect(),
    };

    if filtered.is_empty() {
        tracing::warn!(?tier, "tier pool empty, drawing from full catalog");
        return all.iter().collect();
    }
    filtered
}

/// Draw one record using the thread-local generator.
pub fn select<'a>(store: &'a SignatureStore, tier: Option<&str>) -> &'a SignatureRecord {
    let candidates = pool(store, tier);
    candidates[fastrand::usize(..candidates.len())]
}

/// Draw one record from a caller-supplied generator.
pub fn select_with<'a>(
    rng: &mut Rng,
    store: &'a SignatureStore,
    tier: Option<&str>,
) -> &'a SignatureRecord {
    let candidates = pool(store, tier);
    candidates[rng.usize(..candidates.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn store(layout: &[(Tier, usize)]) -> SignatureStore {
        let mut records = Vec::new();
        for (tier, n) in layout {
            for i in 0..*n {
                records.push(SignatureRecord::new(format!("{tier} #{i}"), *tier));
            }
        }
        SignatureStore::from_records(records).unwrap()
    }

    #[test]
    fn tier_filter_only_returns_that_tier() {
        let store = SignatureStore::bundled().unwrap();
        let mut rng = Rng::with_seed(7);
        for tier in Tier::ALL {
            for raw in [tier.as_str().to_string(), tier.as_str().to_uppercase()] {
                for _ in 0..200 {
                    assert_eq!(select_with(&mut rng, &store, Some(&raw)).tier, tier);
                }
            }
        }
    }

    #[test]
    fn bundled_pools_never_fall_back() {
        let store = SignatureStore::bundled().unwrap();
        for tier in Tier::ALL {
            let candidates = pool(&store, Some(tier.as_str()));
            assert_eq!(candidates.len(), store.count_by_tier(tier));
            assert!(candidates.iter().all(|r| r.tier == tier));
        }
    }

    #[test]
    fn invalid_tier_draws_from_everything() {
        let store = store(&[(Tier::Unbothered, 2), (Tier::Unhinged, 3)]);
        for raw in [None, Some(""), Some("view"), Some("feral"), Some("unhinged ")] {
            assert_eq!(pool(&store, raw).len(), store.count());
        }
    }

    #[test]
    fn selection_is_total_even_for_missing_tier() {
        let store = store(&[(Tier::Unhinged, 1)]);
        let mut rng = Rng::with_seed(1);
        let record = select_with(&mut rng, &store, Some("unleashed"));
        assert_eq!(record.tier, Tier::Unhinged);
        assert_eq!(select(&store, Some("anything")).tier, Tier::Unhinged);
    }

    #[test]
    fn unfiltered_draw_is_proportional_to_records() {
        let store = store(&[
            (Tier::Unbothered, 3),
            (Tier::Unhinged, 2),
            (Tier::Unleashed, 1),
        ]);
        let mut rng = Rng::with_seed(0xC0FFEE);
        let trials = 60_000;

        let mut hits: HashMap<Tier, usize> = HashMap::new();
        for _ in 0..trials {
            *hits.entry(select_with(&mut rng, &store, None).tier).or_default() += 1;
        }

        for (tier, expected) in [
            (Tier::Unbothered, 0.5),
            (Tier::Unhinged, 1.0 / 3.0),
            (Tier::Unleashed, 1.0 / 6.0),
        ] {
            let observed = hits[&tier] as f64 / trials as f64;
            assert!(
                (observed - expected).abs() < 0.02,
                "{tier}: observed {observed:.3}, expected {expected:.3}"
            );
        }
    }

    #[test]
    fn every_record_is_reachable() {
        let store = store(&[(Tier::Unleashed, 5)]);
        let mut rng = Rng::with_seed(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(select_with(&mut rng, &store, Some("unleashed")).text.clone());
        }
        assert_eq!(seen.len(), 5);
    }
}
