// In app/src/report_files.rs

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use analytics::EquityPoint;
use backtester::report::{DiagnosticRecord, ReportSink, TradeCloseRecord, TradeOpenRecord};
use rust_decimal::Decimal;

/// Writes the three run logs — `trade-log.txt`, `equity-log.txt`, and
/// `metrics-log.txt` — in their fixed-width text formats. Display rounding
/// (2 places for money and OHLC, 3 for prices/averages) happens here, with
/// round-half-to-even; the records themselves carry exact values.
pub struct FileReportSink {
    trade_log: BufWriter<File>,
    equity_log: BufWriter<File>,
    metrics_log: BufWriter<File>,
}

impl FileReportSink {
    pub fn create(dir: &Path) -> anyhow::Result<Self> {
        fs::create_dir_all(dir)?;

        let mut trade_log = BufWriter::new(File::create(dir.join("trade-log.txt"))?);
        let mut equity_log = BufWriter::new(File::create(dir.join("equity-log.txt"))?);
        let metrics_log = BufWriter::new(File::create(dir.join("metrics-log.txt"))?);

        writeln!(
            trade_log,
            "{:>6}  {:<18}  {:<18}  {:>12}",
            "Units", "Entry", "Exit", "P&L"
        )?;
        writeln!(
            trade_log,
            "{}  {}  {}  {}",
            "-".repeat(6),
            "-".repeat(18),
            "-".repeat(18),
            "-".repeat(12)
        )?;

        writeln!(
            equity_log,
            "{:>8}  {:>12}  {:>12}  {:>12}",
            "Date", "Clo Balance", "Open Profit", "Equity"
        )?;
        writeln!(
            equity_log,
            "{}  {}  {}  {}",
            "-".repeat(8),
            "-".repeat(12),
            "-".repeat(12),
            "-".repeat(12)
        )?;

        Ok(Self {
            trade_log,
            equity_log,
            metrics_log,
        })
    }

    /// Flushes all three logs; called once at the end of the run.
    pub fn finish(mut self) -> anyhow::Result<()> {
        self.trade_log.flush()?;
        self.equity_log.flush()?;
        self.metrics_log.flush()?;
        Ok(())
    }
}

// Round-half-to-even display helpers. `round_dp` resolves midpoints to even
// and the precision specifier pads the fraction back out with zeros.
fn places2(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

fn places3(value: Decimal) -> String {
    format!("{:.3}", value.round_dp(3))
}

impl ReportSink for FileReportSink {
    fn trade_opened(&mut self, record: &TradeOpenRecord) -> anyhow::Result<()> {
        // Entry half of the trade line; completed by the exit fill.
        write!(
            self.trade_log,
            "{:>6}  {} {:>9}  ",
            record.units,
            record.date.format("%y-%m-%d"),
            places3(record.price)
        )?;
        Ok(())
    }

    fn trade_closed(&mut self, record: &TradeCloseRecord) -> anyhow::Result<()> {
        writeln!(
            self.trade_log,
            "{} {:>9}  {:>12}",
            record.date.format("%y-%m-%d"),
            places3(record.price),
            places2(record.pnl)
        )?;
        Ok(())
    }

    fn equity(&mut self, record: &EquityPoint) -> anyhow::Result<()> {
        writeln!(
            self.equity_log,
            "{:>8}  {:>12}  {:>12}  {:>12}",
            record.date.format("%y-%m-%d").to_string(),
            places2(record.balance),
            places2(record.open_pnl),
            places2(record.equity)
        )?;
        Ok(())
    }

    fn diagnostic(&mut self, record: &DiagnosticRecord) -> anyhow::Result<()> {
        writeln!(
            self.metrics_log,
            "{}-{} Eq={}  OHLC:[ {} {} {} {} ] slow={} fast={} Atr={}{}",
            record.date.format("%y-%m-%d"),
            record.weekday,
            places2(record.equity),
            places2(record.open),
            places2(record.high),
            places2(record.low),
            places2(record.close),
            places3(record.slow_avg),
            places3(record.fast_avg),
            places3(record.volatility),
            record.marker
        )?;
        Ok(())
    }
}
