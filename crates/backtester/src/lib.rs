// In crates/backtester/src/lib.rs

pub mod logger;
pub mod report;

use analytics::{AnalyticsEngine, ClosedTrade, EquityPoint, PerformanceReport};
use anyhow::Context;
use core_types::{Bar, MarketPosition, OrderIntent};
use execution::{ExecutionSimulator, Fill, SimulationSettings};
use ledger::Ledger;
use risk::{PositionSizer, RiskSettings};
use rust_decimal::Decimal;
use strategies::{CrossoverAutomaton, CrossoverSettings, SmoothingEngine};
use tracing::info;

use crate::logger::TradeLogger;
use crate::report::{DiagnosticRecord, ReportSink, TradeCloseRecord, TradeOpenRecord};

/// The main engine for running historical backtests.
///
/// Each bar runs the full pipeline before the next begins: apply the
/// previous bar's pending intent, mark the ledger to the new close, update
/// the smoothing recurrences, evaluate the crossover automaton (possibly
/// arming the next intent), and report.
pub struct Backtester {
    smoothing: SmoothingEngine,
    automaton: CrossoverAutomaton,
    sizer: PositionSizer,
    executor: ExecutionSimulator,
    ledger: Ledger,
    logger: TradeLogger,
    position: MarketPosition,
    pending: Option<OrderIntent>,
    start_equity: Decimal,
}

impl Backtester {
    pub fn new(
        strategy: CrossoverSettings,
        risk: RiskSettings,
        simulation: SimulationSettings,
    ) -> Self {
        let start_equity = simulation.start_equity;
        Self {
            smoothing: SmoothingEngine::new(&strategy),
            automaton: CrossoverAutomaton::new(strategy.warm_up_bars),
            sizer: PositionSizer::new(risk),
            executor: ExecutionSimulator::new(simulation),
            ledger: Ledger::new(start_equity),
            logger: TradeLogger::new(),
            position: MarketPosition::Flat,
            pending: None,
            start_equity,
        }
    }

    /// Runs the simulation over the whole bar stream, in order, exactly once.
    ///
    /// Any failure is fatal and carries the index and date of the bar that
    /// was being processed.
    pub fn run(
        &mut self,
        bars: &[Bar],
        sink: &mut dyn ReportSink,
    ) -> anyhow::Result<(PerformanceReport, Vec<ClosedTrade>, Vec<EquityPoint>)> {
        info!(bars = bars.len(), "starting backtest run");

        for (index, bar) in bars.iter().enumerate() {
            self.process_bar(bar, sink)
                .with_context(|| format!("failed on bar {} ({})", index + 1, bar.date))?;
        }

        let report = AnalyticsEngine::new().calculate(
            self.start_equity,
            &self.logger.trades,
            &self.logger.equity_curve,
        );
        info!(
            trades = report.total_trades,
            final_balance = %self.ledger.balance,
            "backtest finished"
        );

        Ok((
            report,
            self.logger.trades.clone(),
            self.logger.equity_curve.clone(),
        ))
    }

    fn process_bar(&mut self, bar: &Bar, sink: &mut dyn ReportSink) -> anyhow::Result<()> {
        // --- 1. Apply the previous bar's pending intent, if any ---
        if let Some(intent) = self.pending.take() {
            match self.executor.apply(&intent, bar, &mut self.ledger)? {
                Fill::Entry { units, price } => {
                    self.position = MarketPosition::Long;
                    self.logger.record_entry(bar.date, units, price);
                    sink.trade_opened(&TradeOpenRecord {
                        date: bar.date,
                        units,
                        price,
                    })?;
                    info!(date = %bar.date, units, price = %price, "opened long position");
                }
                Fill::Exit { price, trade } => {
                    self.position = MarketPosition::Flat;
                    self.logger.record_exit(bar.date, &trade);
                    sink.trade_closed(&TradeCloseRecord {
                        date: bar.date,
                        price,
                        pnl: trade.pnl,
                    })?;
                    info!(date = %bar.date, price = %price, pnl = %trade.pnl, "closed long position");
                }
            }
        }

        // --- 2. Mark to market against the bar's close ---
        self.ledger.mark_to_market(bar.close);
        let point = EquityPoint {
            date: bar.date,
            balance: self.ledger.balance,
            open_pnl: self.ledger.open_pnl,
            equity: self.ledger.equity,
        };
        sink.equity(&point)?;
        self.logger.record_equity(point);

        // --- 3. Update the smoothing recurrences ---
        let values = self.smoothing.update(bar);

        // --- 4. Evaluate the automaton and arm the next bar's intent ---
        let direction = self.automaton.evaluate(values.fast_avg, values.slow_avg);
        let signal = self.automaton.signal(direction, self.position);
        if let Some(intent) = self
            .sizer
            .evaluate(&signal, self.ledger.equity, values.volatility)?
        {
            self.pending = Some(intent);
        }

        // --- 5. Report the bar's diagnostic snapshot ---
        sink.diagnostic(&DiagnosticRecord {
            date: bar.date,
            weekday: bar.weekday_code(),
            equity: self.ledger.equity,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            slow_avg: values.slow_avg,
            fast_avg: values.fast_avg,
            volatility: values.volatility,
            marker: self.automaton.marker(),
        })?;

        Ok(())
    }
}

/// Helper function to print the performance report in a readable format.
pub fn print_report(report: &PerformanceReport) {
    println!("\n--- Backtest Performance Report ---");
    println!("-----------------------------------");
    println!(
        "Net P&L:         ${:.2} ({:.2}%)",
        report.net_pnl_absolute, report.net_pnl_percentage
    );
    println!(
        "Max Drawdown:    ${:.2} ({:.2}%)",
        report.max_drawdown_absolute, report.max_drawdown_percentage
    );
    println!("Win Rate:        {:.2}%", report.win_rate);
    println!("Profit Factor:   {:.2}", report.profit_factor);
    println!("Expectancy:      ${:.2}", report.expectancy);
    println!("Total Trades:    {}", report.total_trades);
    println!("-----------------------------------");
}
