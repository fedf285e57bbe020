use std::collections::HashMap;
use std::fs::{self, File};
use std::io;
use std::ops::Range;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::table::LookupTable;
use crate::comparison::{ComparisonService, Footprint};
use crate::household::{
    defaults, AnswerError, EstimateError, SwitchableAnswers, YourHome, MAX_PEOPLE_IN_HOUSE,
    MIN_PEOPLE_IN_HOUSE,
};
use crate::pricing::{ClimateZone, RegionResolver, TariffPlan};

/// Postcodes covered when no range is given.
pub const DEFAULT_POSTCODES: Range<u16> = 1000..3000;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("io failure: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Estimate(#[from] EstimateError),
    #[error("invalid lookup input: {0}")]
    Answer(#[from] AnswerError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub region_hits: u64,
    pub region_misses: u64,
    pub result_hits: u64,
    pub result_misses: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ResultKey {
    postcode: String,
    people_in_house: u8,
    subsystem: &'static str,
    labels: Vec<&'static str>,
}

/// Batch pricer for lookup tables. Single-threaded; owns its caches.
pub struct LookupGenerator<'a, R> {
    service: &'a ComparisonService<R>,
    postcodes: Range<u16>,
    regions: HashMap<String, (TariffPlan, ClimateZone)>,
    results: HashMap<ResultKey, Footprint>,
    stats: CacheStats,
}

impl<'a, R> LookupGenerator<'a, R>
where
    R: RegionResolver + 'static,
{
    pub fn new(service: &'a ComparisonService<R>) -> Self {
        Self::with_postcodes(service, DEFAULT_POSTCODES)
    }

    pub fn with_postcodes(service: &'a ComparisonService<R>, postcodes: Range<u16>) -> Self {
        Self {
            service,
            postcodes,
            regions: HashMap::new(),
            results: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.stats
    }

    /// Write every table into `dir`, creating it if needed.
    pub fn write_all(&mut self, dir: &Path) -> Result<Vec<PathBuf>, LookupError> {
        LookupTable::ordered()
            .into_iter()
            .map(|table| self.write_file(table, dir))
            .collect()
    }

    /// Write one table to `dir/<table file name>`.
    pub fn write_file(&mut self, table: LookupTable, dir: &Path) -> Result<PathBuf, LookupError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(table.file_name());
        info!(table = table.label(), path = %path.display(), "generating lookup table");
        let rows = self.write_table(table, File::create(&path)?)?;
        info!(table = table.label(), rows, "lookup table written");
        Ok(path)
    }

    /// Write one table as CSV, returning the number of data rows.
    pub fn write_table<W: io::Write>(
        &mut self,
        table: LookupTable,
        writer: W,
    ) -> Result<usize, LookupError> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(table.header())?;

        let rows = match table {
            LookupTable::Heating => self.write_rows(&defaults::heating(), &mut csv)?,
            LookupTable::HotWater => self.write_rows(&defaults::hot_water(), &mut csv)?,
            LookupTable::Cooktop => self.write_rows(&defaults::cooktop(), &mut csv)?,
            LookupTable::Vehicle => self.write_rows(&defaults::driving(), &mut csv)?,
        };

        csv.flush()?;
        Ok(rows)
    }

    fn write_rows<A: SwitchableAnswers, W: io::Write>(
        &mut self,
        base: &A,
        csv: &mut csv::Writer<W>,
    ) -> Result<usize, LookupError> {
        let candidates = combinations(base);
        let mut rows = 0;

        for people in MIN_PEOPLE_IN_HOUSE..=MAX_PEOPLE_IN_HOUSE {
            for postcode in self.postcodes.clone() {
                let home = YourHome::new(people, &format!("{postcode:04}"))?;
                for answers in &candidates {
                    let footprint = self.footprint(answers, &home)?;
                    let mut record = vec![people.to_string(), home.postcode().to_string()];
                    record.extend(answers.labels().into_iter().map(str::to_string));
                    record.push(footprint.cost.to_string());
                    record.push(footprint.emissions.to_string());
                    csv.write_record(&record)?;
                    rows += 1;
                }
            }
        }

        Ok(rows)
    }

    /// Cost and emissions of one sub-system for one home, memoized.
    pub fn footprint<A: SwitchableAnswers>(
        &mut self,
        answers: &A,
        home: &YourHome,
    ) -> Result<Footprint, LookupError> {
        let key = ResultKey {
            postcode: home.postcode().to_string(),
            people_in_house: home.people_in_house(),
            subsystem: A::SUBSYSTEM,
            labels: answers.labels(),
        };
        if let Some(footprint) = self.results.get(&key) {
            self.stats.result_hits += 1;
            return Ok(*footprint);
        }
        self.stats.result_misses += 1;

        let service = self.service;
        let (plan, climate_zone) = self.region(home.postcode());
        let profile = answers.estimate(home, &service.context(climate_zone))?;
        let footprint = Footprint::of(&profile, &plan, service.factors());

        self.results.insert(key, footprint);
        Ok(footprint)
    }

    fn region(&mut self, postcode: &str) -> (TariffPlan, ClimateZone) {
        if let Some(region) = self.regions.get(postcode) {
            self.stats.region_hits += 1;
            return region.clone();
        }
        self.stats.region_misses += 1;
        debug!(postcode, "resolving region");

        let resolver = self.service.resolver();
        let region = (
            resolver.resolve_plan(postcode),
            resolver.resolve_climate_zone(postcode),
        );
        self.regions.insert(postcode.to_string(), region.clone());
        region
    }
}

/// Cartesian product of every categorical field's values, starting from `base`.
fn combinations<A: SwitchableAnswers>(base: &A) -> Vec<A> {
    A::FIELDS.iter().fold(vec![base.clone()], |partial, field| {
        partial
            .iter()
            .flat_map(|answers| answers.candidates(*field))
            .map(|candidate| candidate.answers)
            .collect()
    })
}
