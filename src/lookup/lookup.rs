use crate::error::{EquityError, EquityResult};
use byteorder::{ReadBytesExt, LE};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// row width of the contribution table: 52 card codes plus one spare column
pub const ROW: usize = 53;
/// rows 0..=5: row 0 is unused, rows 1..=5 are addressed by hand slot + 1
pub const ROWS: usize = 6;
/// elements of the artifact belonging to the contribution table
pub const CONTRIBUTIONS: usize = ROWS * ROW;

/// The offline-computed perfect-hash tables, loaded once at startup and
/// immutable thereafter. The artifact is treated as opaque: one flat array
/// of little-endian i32, the first [`CONTRIBUTIONS`] elements being the
/// per-(slot, card) key contributions and the remainder the score table
/// indexed by key. Only structural size validation happens here; every
/// computed index is bounds-checked at access time, since a mismatched
/// table is a realistic operational failure.
#[derive(Debug)]
pub struct Lookup {
    contributions: Vec<i32>,
    scores: Vec<i32>,
}

impl Lookup {
    pub fn load<P: AsRef<Path>>(path: P) -> EquityResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::metadata(path)
            .map_err(|_| {
                EquityError::Resource(format!("cannot open {}", path.display()))
            })?
            .len() as usize;
        if bytes % size_of::<i32>() != 0 {
            return Err(EquityError::Resource(format!(
                "{} holds {} bytes, not a multiple of element width {}",
                path.display(),
                bytes,
                size_of::<i32>()
            )));
        }
        let mut values = vec![0i32; bytes / size_of::<i32>()];
        let mut reader = BufReader::new(File::open(path)?);
        reader.read_i32_into::<LE>(&mut values)?;
        log::info!(
            "loaded lookup table {} ({} elements)",
            path.display(),
            values.len()
        );
        Self::try_from(values)
    }

    /// key contribution of `card` sitting at hand slot `slot` (0..5)
    pub fn contribution(&self, slot: usize, card: u8) -> EquityResult<i32> {
        let index = (slot + 1) * ROW + card as usize;
        self.contributions
            .get(index)
            .copied()
            .ok_or(EquityError::Index {
                table: "contribution",
                index,
                len: self.contributions.len(),
            })
    }

    /// score of the 5-card hand whose additive key is `key`
    pub fn score(&self, key: i32) -> EquityResult<i32> {
        let index = usize::try_from(key).map_err(|_| EquityError::Index {
            table: "score",
            index: 0,
            len: self.scores.len(),
        })?;
        self.scores.get(index).copied().ok_or(EquityError::Index {
            table: "score",
            index,
            len: self.scores.len(),
        })
    }
}

/// split one flat artifact into its contribution and score tables
impl TryFrom<Vec<i32>> for Lookup {
    type Error = EquityError;
    fn try_from(values: Vec<i32>) -> Result<Self, Self::Error> {
        if values.len() <= CONTRIBUTIONS {
            return Err(EquityError::Resource(format!(
                "artifact holds {} elements, need more than {}",
                values.len(),
                CONTRIBUTIONS
            )));
        }
        let scores = values[CONTRIBUTIONS..].to_vec();
        let mut contributions = values;
        contributions.truncate(CONTRIBUTIONS);
        Ok(Self {
            contributions,
            scores,
        })
    }
}

#[cfg(test)]
impl Lookup {
    /// Synthetic tables for tests: random key contributions, identity score
    /// table. Scores then order exactly as keys do, so a brute-force
    /// reference can recompute any evaluation from first principles.
    pub(crate) fn synthetic(seed: u64) -> Self {
        use rand::Rng;
        use rand::SeedableRng;
        let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
        let contributions = (0..CONTRIBUTIONS)
            .map(|_| rng.random_range(0..20_000))
            .collect::<Vec<i32>>();
        let scores = (0..100_000).collect::<Vec<i32>>();
        Self {
            contributions,
            scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn scratch(name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("montepoker-{}-{}", std::process::id(), name));
        let mut file = File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn loads_flat_artifact() {
        let values = (0..CONTRIBUTIONS as i32 + 10).collect::<Vec<i32>>();
        let bytes = values
            .iter()
            .flat_map(|v| v.to_le_bytes())
            .collect::<Vec<u8>>();
        let path = scratch("ok.bin", &bytes);
        let lookup = Lookup::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(lookup.contribution(0, 0).unwrap(), ROW as i32);
        assert_eq!(lookup.score(3).unwrap(), CONTRIBUTIONS as i32 + 3);
    }

    #[test]
    fn rejects_missing_file() {
        assert!(matches!(
            Lookup::load("/nonexistent/lookup_tablev3.bin"),
            Err(EquityError::Resource(_))
        ));
    }

    #[test]
    fn rejects_ragged_byte_length() {
        let path = scratch("ragged.bin", &[0u8; 1301]);
        let result = Lookup::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(EquityError::Resource(_))));
    }

    #[test]
    fn rejects_truncated_artifact() {
        let path = scratch("short.bin", &[0u8; 40]);
        let result = Lookup::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(EquityError::Resource(_))));
    }

    #[test]
    fn bounds_checks_accessors() {
        let lookup = Lookup::try_from(vec![0i32; CONTRIBUTIONS + 1]).unwrap();
        assert!(lookup.contribution(4, 51).is_ok());
        assert!(matches!(
            lookup.contribution(5, 52),
            Err(EquityError::Index { .. })
        ));
        assert!(lookup.score(0).is_ok());
        assert!(matches!(lookup.score(1), Err(EquityError::Index { .. })));
        assert!(matches!(lookup.score(-1), Err(EquityError::Index { .. })));
    }
}
