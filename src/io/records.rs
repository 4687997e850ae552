use crate::{Instance, Value, MISSING_VALUE};
use csv::{Reader, Writer};
use serde::{Deserialize, Serialize};
use std::{error::Error, io, path::Path};

/// One evaluated test instance. Empty fields are missing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub actual: Option<Value>,
    pub predicted: Option<Value>,
}
impl PredictionRecord {
    pub fn instance(&self) -> Instance {
        Instance::from(self.actual)
    }
    pub fn predicted_value(&self) -> Value {
        self.predicted.unwrap_or(MISSING_VALUE)
    }
}

/// One computed statistic. `value` is empty when the statistic could not be computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticRecord {
    pub metric: String,
    pub statistic: String,
    pub value: Option<Value>,
}

pub fn read_predictions_from_file(path: &Path) -> Result<Vec<PredictionRecord>, Box<dyn Error>> {
    let reader = Reader::from_path(path)?;
    read_predictions_via_reader(reader)
}

pub fn read_predictions_from_stdin() -> Result<Vec<PredictionRecord>, Box<dyn Error>> {
    let reader = Reader::from_reader(io::stdin());
    read_predictions_via_reader(reader)
}

pub fn read_predictions_via_reader(
    mut reader: Reader<impl io::Read>,
) -> Result<Vec<PredictionRecord>, Box<dyn Error>> {
    let mut result = vec![];
    for line in reader.deserialize() {
        result.push(line?);
    }
    Ok(result)
}

pub fn write_statistics_to_file(
    statistics: &[StatisticRecord],
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let writer = Writer::from_path(path)?;
    write_statistics_via_writer(statistics, writer)
}

pub fn write_statistics_to_stdout(statistics: &[StatisticRecord]) -> Result<(), Box<dyn Error>> {
    let writer = Writer::from_writer(io::stdout());
    write_statistics_via_writer(statistics, writer)
}

/// Writes a header row followed by one row per statistic
pub fn write_statistics_via_writer(
    statistics: &[StatisticRecord],
    mut writer: Writer<impl io::Write>,
) -> Result<(), Box<dyn Error>> {
    for statistic in statistics {
        writer.serialize(statistic)?;
    }
    writer.flush()?;
    Ok(())
}
