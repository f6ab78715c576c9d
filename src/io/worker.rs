use crate::io::client::{FetchError, IndicatorSource};
use crate::model::IndicatorSet;
use crate::state::Ticket;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum IoCommand {
    FetchIndicators { ticket: Ticket, ticker: String },
}

#[derive(Debug)]
pub enum IoResult {
    IndicatorsLoaded {
        ticket: Ticket,
        ticker: String,
        result: Result<IndicatorSet, FetchError>,
    },
}

pub fn spawn_worker(
    ctx: eframe::egui::Context,
    source: Arc<dyn IndicatorSource>,
) -> (Sender<IoCommand>, Receiver<IoResult>) {
    let (cmd_tx, cmd_rx) = channel();
    let (res_tx, res_rx) = channel();

    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                IoCommand::FetchIndicators { ticket, ticker } => {
                    // Each fetch gets its own thread so a slow ticker never holds up a newer one
                    let res_tx = res_tx.clone();
                    let source = Arc::clone(&source);
                    let ctx = ctx.clone();
                    thread::spawn(move || {
                        debug!(%ticker, ?ticket, "fetching indicators");
                        let result = source.fetch_indicators(&ticker);
                        if let Err(e) = &result {
                            warn!(%ticker, error = %e, "indicator fetch failed");
                        }
                        let _ = res_tx.send(IoResult::IndicatorsLoaded {
                            ticket,
                            ticker,
                            result,
                        });
                        ctx.request_repaint();
                    });
                }
            }
        }
    });

    (cmd_tx, res_rx)
}
