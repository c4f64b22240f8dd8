use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::simulator::results::SimulationResult;
use crate::error::Result;

/// The columns of the statistics output. Each row holds a value for some of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatParameter {
    /// Number of servers of the run the row belongs to.
    ServerCount,

    /// Index of the server the row describes.
    ServerIndex,

    /// Accumulated busy time of that server.
    BusyTime,

    /// Customers that server started serving.
    CustomersServed,

    /// Bottleneck busy time of the whole run.
    MaxBusyTime,
}

impl StatParameter {
    /// Column order of the CSV output.
    pub const ALL: [StatParameter; 5] = [
        StatParameter::ServerCount,
        StatParameter::ServerIndex,
        StatParameter::BusyTime,
        StatParameter::CustomersServed,
        StatParameter::MaxBusyTime,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            StatParameter::ServerCount => "ServerCount",
            StatParameter::ServerIndex => "ServerIndex",
            StatParameter::BusyTime => "BusyTime",
            StatParameter::CustomersServed => "CustomersServed",
            StatParameter::MaxBusyTime => "MaxBusyTime",
        }
    }

    pub fn headers() -> Vec<&'static str> {
        Self::ALL.iter().map(StatParameter::header).collect()
    }
}

/// Values are stored natively and only formatted when written.
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    Integer(i64),
    Text(String),
}

impl StatValue {
    fn render(&self) -> String {
        match self {
            StatValue::Integer(i) => i.to_string(),
            StatValue::Text(t) => t.clone(),
        }
    }
}

impl From<i64> for StatValue {
    fn from(v: i64) -> Self {
        StatValue::Integer(v)
    }
}

impl From<usize> for StatValue {
    fn from(v: usize) -> Self {
        StatValue::Integer(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<&str> for StatValue {
    fn from(v: &str) -> Self {
        StatValue::Text(v.to_string())
    }
}

/// One output row.
#[derive(Debug, Clone, Default)]
pub struct StatisticEvent {
    data: HashMap<StatParameter, StatValue>,
}

impl StatisticEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<V: Into<StatValue>>(&mut self, param: StatParameter, value: V) -> &mut Self {
        self.data.insert(param, value.into());
        self
    }

    pub fn get(&self, param: StatParameter) -> Option<&StatValue> {
        self.data.get(&param)
    }

    fn to_row(&self) -> Vec<String> {
        StatParameter::ALL
            .iter()
            .map(|param| match self.data.get(param) {
                Some(value) => value.render(),
                None => "NA".to_string(),
            })
            .collect()
    }
}

/// Builds one row per server of `result`.
pub fn events_for_result(result: &SimulationResult) -> Vec<StatisticEvent> {
    result
        .busy_times()
        .iter()
        .zip(result.customers_served())
        .enumerate()
        .map(|(index, (&busy_time, &served))| {
            let mut event = StatisticEvent::new();
            event
                .set(StatParameter::ServerCount, result.server_count())
                .set(StatParameter::ServerIndex, index)
                .set(StatParameter::BusyTime, busy_time)
                .set(StatParameter::CustomersServed, served)
                .set(StatParameter::MaxBusyTime, result.max_busy_time());
            event
        })
        .collect()
}

/// Writes statistic rows as `;`-separated CSV, header first.
pub struct StatsWriter<W: Write> {
    csv_wtr: csv::Writer<W>,
}

impl StatsWriter<File> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        log::info!("Writing statistics to '{}'.", path.as_ref().display());
        StatsWriter::new(file)
    }
}

impl<W: Write> StatsWriter<W> {
    pub fn new(writer: W) -> Result<Self> {
        let mut csv_wtr = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);
        csv_wtr.write_record(StatParameter::headers())?;
        Ok(StatsWriter { csv_wtr })
    }

    pub fn add_event(&mut self, event: &StatisticEvent) -> Result<()> {
        self.csv_wtr.write_record(event.to_row())?;
        Ok(())
    }

    pub fn add_result(&mut self, result: &SimulationResult) -> Result<()> {
        for event in events_for_result(result) {
            self.add_event(&event)?;
        }
        Ok(())
    }

    /// Flushes and hands back the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.csv_wtr.into_inner().map_err(|e| e.into_error().into())
    }
}
