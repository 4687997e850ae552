use crate::*;
use log::info;
use par_map::ParMap;

/// Computes RMSPE over `records` split into shards of `shard_size`, using `jobs` threads.
///
/// Every shard is accumulated independently and the accumulators are merged afterwards, so the
/// result matches a sequential evaluation up to floating point summation order.
pub fn evaluate_sharded(records: Vec<PredictionRecord>, jobs: usize, shard_size: usize) -> Rmspe {
    let shard_size = shard_size.max(1);
    let shards: Vec<Vec<PredictionRecord>> = records
        .chunks(shard_size)
        .map(|chunk| chunk.to_vec())
        .collect();
    info!(
        "Evaluating {} records in {} shards using {} threads.",
        records.len(),
        shards.len(),
        jobs
    );
    shards
        .into_iter()
        .with_nb_threads(jobs)
        .par_map(accumulate_shard)
        .fold(Rmspe::new(), |mut merged, shard| {
            merged.merge(shard);
            merged
        })
}

fn accumulate_shard(records: Vec<PredictionRecord>) -> Rmspe {
    let mut metric = Rmspe::new();
    for record in records.iter() {
        metric.record_numeric(record.predicted_value(), &record.instance());
    }
    metric
}
