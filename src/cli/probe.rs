//! Run pipeline: load hosts, probe HTTP status, then scan ports.

use super::Cli;
use crate::error::CliResult;
use crate::loader::load_targets;
use crate::output::{self, Presenter};
use crate::pool::WorkerPool;
use crate::prober::{ReqwestTransport, StatusProber, HTTP_TIMEOUT};
use crate::scanner::{PortScanner, TcpConnector, EVENT_BUFFER};
use crate::types::Target;
use std::io;
use tokio::sync::mpsc;
use tracing::info;

impl Cli {
    /// Execute the run described by these arguments.
    pub async fn execute(&self) -> CliResult<()> {
        let opts = self.resolve()?;
        let targets = load_targets(&opts.hosts_file)?;
        info!(
            hosts_file = %opts.hosts_file.display(),
            targets = targets.len(),
            concurrency = opts.concurrency,
            "starting run"
        );

        if targets.is_empty() && !self.quiet {
            output::print_warning(&format!(
                "{} contains no hosts",
                opts.hosts_file.display()
            ));
        }

        let pool = WorkerPool::new(opts.concurrency);
        let presenter = Presenter::new(self.colored());

        if !self.skip_status {
            self.status_phase(&targets, &pool, presenter).await?;
        }

        if !self.skip_ports {
            port_phase(&targets, &pool, presenter).await?;
        }

        Ok(())
    }

    async fn status_phase(
        &self,
        targets: &[Target],
        pool: &WorkerPool,
        presenter: Presenter,
    ) -> CliResult<()> {
        let transport = ReqwestTransport::new(HTTP_TIMEOUT)?;
        let prober = StatusProber::new(transport, pool.clone());
        let prober = if self.verbose {
            prober.with_progress()
        } else {
            prober
        };

        let results = prober.run(targets).await;
        presenter.print_statuses(&results)?;
        Ok(())
    }
}

async fn port_phase(targets: &[Target], pool: &WorkerPool, presenter: Presenter) -> CliResult<()> {
    let scanner = PortScanner::new(TcpConnector::default(), pool.clone());
    let (tx, rx) = mpsc::channel(EVENT_BUFFER);
    let printer = tokio::spawn(output::print_port_events(presenter, rx));

    scanner.run(targets, tx).await;

    let printed = printer.await.map_err(io::Error::other)??;
    info!(open_ports = printed, "port results printed");
    Ok(())
}
