//! Soil reports
//!
//! No soil sensor integration exists yet, so reports are generated from a
//! pseudo-random sequence seeded by the field id: the same field always gets
//! the same report, and values stay within agronomically plausible ranges.

use chrono::NaiveDate;
use uuid::Uuid;

use shared::models::{SoilReport, SoilSample};

const SOIL_TYPES: [&str; 5] = ["Clay Loam", "Sandy Loam", "Silt Loam", "Loamy Sand", "Clay"];

/// Deterministic generator seeded from a field id
struct SeededSequence {
    seed: f64,
}

impl SeededSequence {
    fn for_field(field_id: Uuid) -> Self {
        let seed = field_id
            .to_string()
            .bytes()
            .map(|b| b as u32)
            .sum::<u32>() as f64;
        Self { seed }
    }

    fn next_in(&mut self, min: f64, max: f64) -> f64 {
        let x = self.seed.sin() * 10_000.0;
        self.seed += 1.0;
        let r = x - x.floor();
        min + (max - min) * r
    }
}

/// Generate the soil report for a field
pub fn report_for_field(field_id: Uuid) -> SoilReport {
    let mut seq = SeededSequence::for_field(field_id);

    let ph = round1(6.5 + seq.next_in(-0.5, 1.0));
    let nitrogen = round1(seq.next_in(40.0, 60.0));
    let phosphorus = round1(seq.next_in(25.0, 40.0));
    let potassium = round1(seq.next_in(150.0, 200.0));
    let organic_matter = round1(seq.next_in(2.0, 3.5));

    SoilReport {
        soil_type: SOIL_TYPES[seq.next_in(0.0, 5.0) as usize % SOIL_TYPES.len()].to_string(),
        ph,
        nitrogen,
        phosphorus,
        potassium,
        calcium: round1(seq.next_in(1000.0, 1500.0)),
        magnesium: round1(seq.next_in(45.0, 65.0)),
        sulfur: round1(seq.next_in(10.0, 20.0)),
        zinc: round1(seq.next_in(1.0, 3.0)),
        iron: round1(seq.next_in(15.0, 25.0)),
        manganese: round1(seq.next_in(5.0, 10.0)),
        copper: round1(seq.next_in(1.0, 2.0)),
        boron: round2(seq.next_in(0.5, 1.0)),
        molybdenum: round2(seq.next_in(0.1, 0.2)),
        organic_matter,
        cec: round1(seq.next_in(12.0, 17.0)),
        water_capacity: round2(seq.next_in(0.15, 0.25)),
        soil_temperature: round1(seq.next_in(20.0, 25.0)),
        soil_compaction: round1(seq.next_in(1.1, 1.3)),
        sand_percent: seq.next_in(30.0, 40.0) as u32,
        silt_percent: seq.next_in(35.0, 45.0) as u32,
        clay_percent: seq.next_in(20.0, 30.0) as u32,
        history: vec![
            SoilSample {
                date: NaiveDate::from_ymd_opt(2025, 2, 15).expect("valid date"),
                ph: round1(ph - 0.2),
                organic_matter: round1(organic_matter - 0.3),
                nitrogen: round1(nitrogen - 5.0),
            },
            SoilSample {
                date: NaiveDate::from_ymd_opt(2024, 8, 10).expect("valid date"),
                ph: round1(ph - 0.4),
                organic_matter: round1(organic_matter - 0.6),
                nitrogen: round1(nitrogen - 8.0),
            },
        ],
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
