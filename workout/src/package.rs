use crate::{AnyWorkout, WorkoutError, read_package};

/// Raw packet from tracker sensors: workout code and its parameters.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }

    pub fn workout(&self) -> Result<AnyWorkout, WorkoutError> {
        read_package(&self.code, &self.data)
    }
}

/// Simulated packets of a tracker sensors block
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15_000.0, 1.0, 75.0]),
        Package::new("WLK", [9_000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Read packets from CSV without headers.
///
/// Every row is `code,param,param,...`, rows may have different length.
/// Lines started with `#` are skipped.
#[cfg(feature = "csv")]
pub fn packages_from_reader(rdr: impl std::io::Read) -> Result<Vec<Package>, WorkoutError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(rdr);

    rdr.records()
        .enumerate()
        .map(|(index, record)| {
            let record = record?;
            let line = record
                .position()
                .map(|this| this.line())
                .unwrap_or(index as u64 + 1);

            let code = match record.get(0) {
                Some(code) if !code.is_empty() => code,
                _ => return Err(WorkoutError::EmptyRecord(line)),
            };

            let data = record
                .iter()
                .skip(1)
                .map(|value| {
                    value.parse::<f64>().map_err(|_| WorkoutError::InvalidNumber {
                        record: line,
                        value: value.to_owned(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(Package::new(code, data))
        })
        .collect()
}
