//! End-to-end runs of load -> status probe -> present -> port scan, with the
//! network replaced by in-memory transports.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io::Write;
use subprobe::error::{ConnectError, ConnectResult};
use subprobe::loader::load_targets;
use subprobe::pool::WorkerPool;
use subprobe::prober::HttpTransport;
use subprobe::scanner::{Connector, EVENT_BUFFER};
use subprobe::{
    OpenPortEvent, Port, PortScanner, Presenter, ProbeError, StatusProber, Target,
    UNREACHABLE_STATUS,
};
use tempfile::NamedTempFile;
use tokio::sync::mpsc;

struct MockHttp(HashMap<&'static str, u16>);

#[async_trait]
impl HttpTransport for MockHttp {
    async fn head(&self, url: &str) -> Result<u16, ProbeError> {
        self.0
            .get(url)
            .copied()
            .ok_or_else(|| ProbeError::Connect(format!("unreachable: {}", url)))
    }
}

/// Every port is closed.
struct ClosedNetwork;

#[async_trait]
impl Connector for ClosedNetwork {
    async fn connect(&self, _host: &str, _port: Port) -> ConnectResult<()> {
        Err(ConnectError::Refused)
    }
}

fn host_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

async fn scan(scanner: &PortScanner, targets: &[Target], presenter: Presenter) -> Vec<String> {
    let (tx, mut rx) = mpsc::channel::<OpenPortEvent>(EVENT_BUFFER);
    let drain = tokio::spawn(async move {
        let mut lines = Vec::new();
        while let Some(event) = rx.recv().await {
            lines.push(presenter.port_line(&event));
        }
        lines
    });
    scanner.run(targets, tx).await;
    drain.await.unwrap()
}

#[tokio::test]
async fn single_live_host_without_open_ports() {
    let file = host_file(&["example.com"]);
    let targets = load_targets(file.path()).unwrap();
    let pool = WorkerPool::new(4);
    let presenter = Presenter::new(true);

    let prober = StatusProber::new(
        MockHttp(HashMap::from([("http://example.com", 200)])),
        pool.clone(),
    );
    let results = prober.run(&targets).await;

    let mut out = Vec::new();
    let written = presenter.write_statuses(&mut out, &results).unwrap();
    assert_eq!(written, 1);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\x1b[92mhttp://example.com : 200\x1b[0m\n"
    );

    let scanner = PortScanner::new(ClosedNetwork, pool);
    assert!(scan(&scanner, &targets, presenter).await.is_empty());
}

#[tokio::test]
async fn duplicate_host_yields_one_result() {
    let file = host_file(&["a.test", "a.test"]);
    let targets = load_targets(file.path()).unwrap();
    assert_eq!(targets.len(), 2);

    let prober = StatusProber::new(
        MockHttp(HashMap::from([("http://a.test", 302)])),
        WorkerPool::new(4),
    );
    let results = prober.run(&targets).await;

    assert_eq!(results.len(), 1);
    assert_eq!(results.keys().next().map(String::as_str), Some("http://a.test"));
}

#[tokio::test]
async fn unreachable_host_is_recorded_but_not_printed() {
    let file = host_file(&["up.test", "down.test"]);
    let targets = load_targets(file.path()).unwrap();

    let prober = StatusProber::new(
        MockHttp(HashMap::from([("http://up.test", 500)])),
        WorkerPool::new(2),
    );
    let results = prober.run(&targets).await;
    assert_eq!(results["http://down.test"], UNREACHABLE_STATUS);

    let mut out = Vec::new();
    Presenter::new(false).write_statuses(&mut out, &results).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "http://up.test : 500\n");
}

#[tokio::test]
async fn missing_host_file_aborts_before_probing() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_targets(dir.path().join("subdomains.txt")).is_err());
}
