//! Draw geometric samples from a seeded source and summarise them.

use quarry::*;
use std::collections::BTreeMap;

fn main() -> Result<()> {
    let config = Config::default().with_scale(4);
    let mut source = config.source();
    println!("source fingerprint: {:#018x}", source.fingerprint());

    let samplers = [
        GeometricSampler::natural(config.scale as i64)?,
        GeometricSampler::positive(Mean::new(5, 2)?)?,
        GeometricSampler::nonzero(-3)?,
    ];

    for sampler in samplers {
        let mut histogram: BTreeMap<i64, usize> = BTreeMap::new();
        for value in sampler.samples(&mut source).take(10_000) {
            *histogram.entry(value).or_insert(0) += 1;
        }
        let total: i64 = histogram.iter().map(|(&v, &n)| v * n as i64).sum();
        println!(
            "{} mean={} observed={:.3}",
            sampler.variant().name(),
            sampler.mean(),
            total as f64 / 10_000.0
        );
        for (value, count) in histogram.iter().take(6) {
            println!("  {value:>4}: {count}");
        }
    }

    Ok(())
}
