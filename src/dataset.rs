use std::collections::BTreeMap;
use std::sync::Arc;

use rand::Rng;

use crate::corpus::NameCorpus;
use crate::error::{BenchError, Result};
use crate::record::{MAX_PRICE, MIN_PRICE, Price, Record};
use crate::rng::BenchRng;

/// Produces random vehicle records. Owns the run's random generator.
pub struct DatasetGenerator {
    rng: BenchRng,
    corpus: NameCorpus,
}

impl DatasetGenerator {
    pub fn new(rng: BenchRng, corpus: NameCorpus) -> Self {
        Self { rng, corpus }
    }

    pub fn generate(&mut self, n: usize) -> Vec<Record> {
        (0..n).map(|_| self.random_record()).collect()
    }

    fn random_record(&mut self) -> Record {
        let rng = self.rng.generator();
        let price = Price::from_cents(rng.random_range(MIN_PRICE.cents()..=MAX_PRICE.cents()));
        let mileage = round_hundredths(rng.random::<f64>() * 100_000.0);
        let horsepower = round_hundredths(rng.random::<f64>() * 200.0);
        let max_speed = round_hundredths(70.0 + rng.random::<f64>() * 300.0);
        let wheels = rng.random_range(2..=11);
        let doors = rng.random_range(2..=11);
        let seats = rng.random_range(2..=11);
        let year = rng.random_range(1990..=2022);
        let (brand, model) = self.corpus.pick(rng);

        Record {
            name: format!("{} {} {}", brand, model, year),
            price,
            wheels,
            doors,
            seats,
            mileage,
            horsepower,
            max_speed,
        }
    }
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A read-only view of the first `len` records of a shared generation.
#[derive(Clone)]
pub struct Dataset {
    records: Arc<[Record]>,
    len: usize,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records[..self.len]
    }
}

impl std::ops::Deref for Dataset {
    type Target = [Record];

    fn deref(&self) -> &[Record] {
        self.as_slice()
    }
}

/// Datasets for every configured size, all cut from one generation of the
/// largest size.
pub struct DatasetPool {
    records: Arc<[Record]>,
    sizes: BTreeMap<usize, Dataset>,
}

impl DatasetPool {
    /// `sizes` must be non-empty and contain no zero.
    pub fn build(generator: &mut DatasetGenerator, sizes: &[usize]) -> Result<Self> {
        let largest = match sizes.iter().max() {
            Some(&n) => n,
            None => return Err(BenchError::Config("no dataset sizes".to_string())),
        };
        if sizes.contains(&0) {
            return Err(BenchError::Config("dataset size must be at least 1".to_string()));
        }

        let records: Arc<[Record]> = generator.generate(largest).into();
        let sizes = sizes
            .iter()
            .map(|&len| {
                let dataset = Dataset {
                    records: Arc::clone(&records),
                    len,
                };
                (len, dataset)
            })
            .collect();

        Ok(Self { records, sizes })
    }

    pub fn get(&self, size: usize) -> Option<&Dataset> {
        self.sizes.get(&size)
    }

    /// Configured datasets in ascending size order.
    pub fn iter(&self) -> impl Iterator<Item = &Dataset> {
        self.sizes.values()
    }

    pub fn largest(&self) -> &[Record] {
        &self.records
    }
}

/// Lines showing the first and last `count / 2` records, 1-based, with an
/// elision line in between when there are more than `count` records.
pub fn preview_lines(records: &[Record], count: usize) -> Vec<String> {
    let half = count / 2;
    if records.len() <= count {
        return records
            .iter()
            .enumerate()
            .map(|(i, r)| format!("{}. {}", i + 1, r))
            .collect();
    }

    let mut lines = Vec::with_capacity(count + 1);
    for (i, r) in records[..half].iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, r));
    }
    let tail_start = records.len() - half;
    lines.push(format!("[... {} more elements ...]", tail_start - half));
    for (i, r) in records[tail_start..].iter().enumerate() {
        lines.push(format!("{}. {}", tail_start + i + 1, r));
    }
    lines
}
