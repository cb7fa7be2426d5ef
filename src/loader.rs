use crate::error::{DcResult, DistCalcError};
use crate::model::CornerWeights;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weighing {
    pub line: u64,
    pub label: String,
    pub weights: CornerWeights,
}

/// A CSV row that could not be turned into a weighing.
#[derive(Debug)]
pub struct Rejected {
    pub line: u64,
    pub label: String,
    pub error: DistCalcError,
}

#[derive(Debug, Default)]
pub struct Batch {
    pub weighings: Vec<Weighing>,
    pub rejected: Vec<Rejected>,
}

const COLUMNS: usize = 5;

/// Reads `label,fl,fr,rl,rr` rows. The first row is a header and is skipped.
/// Short rows surface as a missing corner, long rows as a column count error.
pub fn load_weighings<P: AsRef<Path>>(path: P) -> DcResult<Batch> {
    let path = path.as_ref();
    let batch = read_weighings(File::open(path)?)?;
    info!(
        "Loaded {} weighings from {} ({} rejected)",
        batch.weighings.len(),
        path.display(),
        batch.rejected.len()
    );
    Ok(batch)
}

pub fn read_weighings<R: Read>(reader: R) -> DcResult<Batch> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut batch = Batch::default();

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if record.iter().all(str::is_empty) {
            continue;
        }

        let label = record.get(0).unwrap_or_default().to_string();
        let field = |i: usize| record.get(i).unwrap_or_default();

        let parsed = if record.len() > COLUMNS {
            Err(DistCalcError::ColumnCount {
                expected: COLUMNS,
                found: record.len(),
            })
        } else {
            CornerWeights::parse([field(1), field(2), field(3), field(4)])
        };

        match parsed {
            Ok(weights) => batch.weighings.push(Weighing {
                line,
                label,
                weights,
            }),
            Err(error) => {
                debug!("Row {} ('{}') rejected: {}", line, label, error);
                batch.rejected.push(Rejected { line, label, error });
            }
        }
    }
    Ok(batch)
}
