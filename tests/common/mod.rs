use algobench::{BenchConfig, DatasetGenerator, DatasetPool, NameCorpus, BenchRng};
use std::path::Path;

pub const TEST_SEED: u64 = 0x5EED;

#[allow(dead_code)]
pub fn datasets(sizes: &[usize]) -> DatasetPool {
    let mut generator =
        DatasetGenerator::new(BenchRng::with_seed(TEST_SEED), NameCorpus::builtin().unwrap());
    DatasetPool::build(&mut generator, sizes).expect("Failed to build datasets")
}

#[allow(dead_code)]
pub fn small_config(sizes: &[usize], samples: usize, output: &Path) -> BenchConfig {
    BenchConfig {
        sizes: sizes.to_vec(),
        sample_size: samples,
        output: output.to_path_buf(),
        threads: 2,
        seed: Some(TEST_SEED),
        corpus: None,
        corpus_url: None,
        preview_count: 0,
        echo_rows: false,
    }
}
