//! Walk ℕ×ℕ in each pairing order and look ahead through a cache.

use quarry::*;

fn main() {
    for pairing in [Pairing::Interleave, Pairing::Logarithmic, Pairing::SquareRoot] {
        let prefix: Vec<String> = pairing
            .pairs()
            .take(12)
            .map(|(a, b)| format!("({a}, {b})"))
            .collect();
        println!("{pairing:?}: {}", prefix.join(" "));
    }

    let mut cache = LazySequenceCache::new(Pairing::SquareRoot.pairs());
    if let Slot::Present((a, b)) = cache.get(1_000_000) {
        println!("square-root pair #1000000 = ({a}, {b})");
    }
    println!("cached {} pairs", cache.cached_len());
}
