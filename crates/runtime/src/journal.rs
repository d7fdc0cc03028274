use std::io::{self, Write};

use trade_core::{PortfolioLog, StateMark};

use crate::logging::{RunLogEvent, RunLogEventKind, RunLogWriter};

pub const JOURNAL_CSV_HEADER: &str =
    "t,state,signal,price,position,cash,buy_price,sell_price,last_purchase_price,portfolio_value\n";

pub struct JournalCsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> JournalCsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        self.writer.write_all(JOURNAL_CSV_HEADER.as_bytes())
    }

    pub fn write_header_and_log(
        &mut self,
        tick: u64,
        run_log_writer: &mut dyn RunLogWriter,
    ) -> io::Result<()> {
        self.write_header()?;
        self.writer.flush()?;
        run_log_writer.write(RunLogEvent::new(
            tick,
            RunLogEventKind::JournalArtifactWritten,
            None,
        ));
        Ok(())
    }

    pub fn append_log(&mut self, tick: u64, price: f64, log: &PortfolioLog) -> io::Result<()> {
        writeln!(
            self.writer,
            "{tick},{},{},{price},{},{},{},{},{},{}",
            state_cell(log.state),
            log.signal.as_int(),
            log.position,
            log.cash,
            optional_cell(log.buy_price),
            optional_cell(log.sell_price),
            log.last_purchase_price,
            log.portfolio_value,
        )
    }
}

fn state_cell(state: StateMark) -> String {
    match state.observed() {
        Some(value) => value.to_string(),
        None => String::new(),
    }
}

fn optional_cell(value: Option<f64>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => String::new(),
    }
}
