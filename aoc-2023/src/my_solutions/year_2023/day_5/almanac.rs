use crate::utils::range_map::{RangeMap, RangeMapTable, Unit};
use anyhow::{anyhow, bail};
use aoc_solver::{ParseError, numbered_lines, parse_numbered_lines};
use itertools::Itertools;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

macro_rules! units {
    ($($unit:ident => $name:literal),* $(,)?) => {
        $(
            #[doc = concat!("Values of the `", $name, "` stage")]
            #[derive(Debug)]
            pub enum $unit {}

            impl Unit for $unit {
                const NAME: &'static str = $name;
            }
        )*
    };
}

units! {
    Seed => "seed",
    Soil => "soil",
    Fertilizer => "fertilizer",
    Water => "water",
    Light => "light",
    Temperature => "temperature",
    Humidity => "humidity",
    Location => "location",
}

/// Seed list and the seven translation stages from seed to location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Almanac {
    seeds: Vec<i64>,
    seed_to_soil: RangeMapTable<Seed, Soil>,
    soil_to_fertilizer: RangeMapTable<Soil, Fertilizer>,
    fertilizer_to_water: RangeMapTable<Fertilizer, Water>,
    water_to_light: RangeMapTable<Water, Light>,
    light_to_temperature: RangeMapTable<Light, Temperature>,
    temperature_to_humidity: RangeMapTable<Temperature, Humidity>,
    humidity_to_location: RangeMapTable<Humidity, Location>,
}

/// Every intermediate value of one seed on its way to a location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedTrace {
    pub seed: i64,
    pub soil: i64,
    pub fertilizer: i64,
    pub water: i64,
    pub light: i64,
    pub temperature: i64,
    pub humidity: i64,
    pub location: i64,
}

type Sections<'a> = HashMap<&'a str, (usize, Vec<RangeMap>)>;

impl Almanac {
    /// Parses the `seeds:` line followed by the seven `<x>-to-<y> map:`
    /// sections, which may come in any order.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let chunks = numbered_lines(input).chunk_by(|(_, line)| line.trim().is_empty());
        let mut blocks = chunks
            .into_iter()
            .filter(|(blank, _)| !blank)
            .map(|(_, block)| block.collect::<Vec<_>>());

        let seed_block = blocks
            .next()
            .ok_or_else(|| ParseError::InvalidFormat("empty almanac".to_string()))?;
        let seeds = parse_seeds(&seed_block)?;

        let known = [
            RangeMapTable::<Seed, Soil>::header(),
            RangeMapTable::<Soil, Fertilizer>::header(),
            RangeMapTable::<Fertilizer, Water>::header(),
            RangeMapTable::<Water, Light>::header(),
            RangeMapTable::<Light, Temperature>::header(),
            RangeMapTable::<Temperature, Humidity>::header(),
            RangeMapTable::<Humidity, Location>::header(),
        ];

        let mut sections = Sections::new();
        for block in blocks {
            let (header_line, header) = block[0];
            let header = header.trim();
            if !known.iter().any(|name| name == header) {
                return Err(ParseError::at_line(
                    header_line,
                    format!("unknown section `{header}`"),
                ));
            }
            if let Some((first_line, _)) = sections.get(header) {
                return Err(ParseError::at_line(
                    header_line,
                    format!("duplicate section `{header}` (first seen on line {first_line})"),
                ));
            }
            let entries = parse_numbered_lines(block[1..].iter().copied(), parse_entry)?;
            sections.insert(header, (header_line, entries));
        }

        let almanac = Almanac {
            seeds,
            seed_to_soil: take_stage(&mut sections)?,
            soil_to_fertilizer: take_stage(&mut sections)?,
            fertilizer_to_water: take_stage(&mut sections)?,
            water_to_light: take_stage(&mut sections)?,
            light_to_temperature: take_stage(&mut sections)?,
            temperature_to_humidity: take_stage(&mut sections)?,
            humidity_to_location: take_stage(&mut sections)?,
        };
        debug!(
            seeds = almanac.seeds.len(),
            entries = almanac.entry_count(),
            "parsed almanac"
        );
        Ok(almanac)
    }

    /// The numbers listed on the `seeds:` line, in input order
    pub fn seeds(&self) -> &[i64] {
        &self.seeds
    }

    /// Location of `seed`, looked up one stage at a time
    pub fn location(&self, seed: i64) -> i64 {
        self.trace(seed).location
    }

    pub fn trace(&self, seed: i64) -> SeedTrace {
        let soil = self.seed_to_soil.lookup(seed);
        let fertilizer = self.soil_to_fertilizer.lookup(soil);
        let water = self.fertilizer_to_water.lookup(fertilizer);
        let light = self.water_to_light.lookup(water);
        let temperature = self.light_to_temperature.lookup(light);
        let humidity = self.temperature_to_humidity.lookup(temperature);
        let location = self.humidity_to_location.lookup(humidity);
        SeedTrace {
            seed,
            soil,
            fertilizer,
            water,
            light,
            temperature,
            humidity,
            location,
        }
    }

    /// Composes all seven stages into one seed-to-location table, sorted by
    /// destination so the lowest locations come first.
    pub fn flatten(&self) -> RangeMapTable<Seed, Location> {
        let to_fertilizer = log_stage(self.seed_to_soil.then(&self.soil_to_fertilizer));
        let to_water = log_stage(to_fertilizer.then(&self.fertilizer_to_water));
        let to_light = log_stage(to_water.then(&self.water_to_light));
        let to_temperature = log_stage(to_light.then(&self.light_to_temperature));
        let to_humidity = log_stage(to_temperature.then(&self.temperature_to_humidity));
        let mut to_location = log_stage(to_humidity.then(&self.humidity_to_location));
        to_location.sort_by_destination();
        to_location
    }

    fn entry_count(&self) -> usize {
        self.seed_to_soil.len()
            + self.soil_to_fertilizer.len()
            + self.fertilizer_to_water.len()
            + self.water_to_light.len()
            + self.light_to_temperature.len()
            + self.temperature_to_humidity.len()
            + self.humidity_to_location.len()
    }
}

impl fmt::Display for SeedTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Seed {}, soil {}, fertilizer {}, water {}, light {}, temperature {}, humidity {}, location {}",
            self.seed,
            self.soil,
            self.fertilizer,
            self.water,
            self.light,
            self.temperature,
            self.humidity,
            self.location
        )
    }
}

fn parse_seeds(block: &[(usize, &str)]) -> Result<Vec<i64>, ParseError> {
    let (line_no, line) = block[0];
    let numbers = line
        .trim()
        .strip_prefix("seeds:")
        .ok_or_else(|| ParseError::at_line(line_no, "expected `seeds:` line"))?;

    let seeds = parse_numbered_lines([(line_no, numbers)], |numbers| {
        numbers
            .split_whitespace()
            .map(parse_number)
            .collect::<anyhow::Result<Vec<_>>>()
    })?
    .concat();

    if seeds.is_empty() {
        return Err(ParseError::at_line(line_no, "no seeds listed"));
    }
    if let Some(&(extra_line, _)) = block.get(1) {
        return Err(ParseError::at_line(
            extra_line,
            "expected a blank line after the seeds",
        ));
    }
    Ok(seeds)
}

/// `<destination> <source> <length>`
fn parse_entry(line: &str) -> anyhow::Result<RangeMap> {
    let fields = line
        .split_whitespace()
        .map(parse_number)
        .collect::<anyhow::Result<Vec<_>>>()?;
    let &[destination, source, len] = fields.as_slice() else {
        bail!(
            "expected `<destination> <source> <length>`, found {} fields",
            fields.len()
        );
    };
    RangeMap::new(destination, source, len)
        .ok_or_else(|| anyhow!("range of length {len} at {source} -> {destination} is empty or overflows"))
}

fn parse_number(token: &str) -> anyhow::Result<i64> {
    token
        .parse()
        .map_err(|e| anyhow!("invalid number `{token}`: {e}"))
}

fn take_stage<S: Unit, D: Unit>(
    sections: &mut Sections<'_>,
) -> Result<RangeMapTable<S, D>, ParseError> {
    let header = RangeMapTable::<S, D>::header();
    sections
        .remove(header.as_str())
        .map(|(_, entries)| RangeMapTable::new(entries))
        .ok_or_else(|| ParseError::MissingData(format!("no `{header}` section")))
}

fn log_stage<D: Unit>(table: RangeMapTable<Seed, D>) -> RangeMapTable<Seed, D> {
    debug!(
        from = Seed::NAME,
        to = D::NAME,
        entries = table.len(),
        "composed stage"
    );
    table
}
