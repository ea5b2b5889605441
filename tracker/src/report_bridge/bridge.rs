use crate::report_bridge::model::ScenarioReport;
use crate::workflow::config::ScenarioConfig;
use crate::workflow::runner::Runner;
use anyhow::{Context, Result};
use impactcore::{CoefficientTable, ImpactError, MixValidationError};
use log::{info, warn};
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, PoisonError, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter, Rejection, Reply};

pub fn bridge_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

type SharedReport = Arc<RwLock<Option<ScenarioReport>>>;

/// Holds the latest report and serves it, the coefficient table, and
/// on-demand evaluations over HTTP.
pub struct ReportBridge {
    state: SharedReport,
    runner: Arc<Runner>,
}

impl ReportBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        Self {
            state: Arc::new(RwLock::new(None)),
            runner,
        }
    }

    /// Binds the HTTP endpoint on the calling thread, then serves it on its
    /// own thread. Returns the bound address.
    pub fn serve(&self, addr: SocketAddr) -> Result<(SocketAddr, thread::JoinHandle<()>)> {
        let routes = routes(self.state.clone(), self.runner.clone());
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .context("building runtime for report bridge")?;
        let (bound, server) = {
            let _guard = runtime.enter();
            warp::serve(routes)
                .try_bind_ephemeral(addr)
                .with_context(|| format!("binding report bridge on {}", addr))?
        };
        let handle = thread::spawn(move || {
            runtime.block_on(server);
        });
        Ok((bound, handle))
    }

    pub fn publish(&self, report: &ScenarioReport) {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(report.clone());
        info!(
            "[bridge] published {} -> {:.0} kg CO2eq",
            report.scenario, report.current.total_emissions
        );
    }

    pub fn publish_status(&self, message: &str) {
        println!("[bridge] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> Option<ScenarioReport> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

fn routes(
    state: SharedReport,
    runner: Arc<Runner>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let state_filter = warp::any().map(move || state.clone());
    let runner_filter = warp::any().map(move || runner.clone());

    let report_route = warp::path("report")
        .and(warp::get())
        .and(state_filter.clone())
        .map(|state: SharedReport| {
            let guard = state.read().unwrap_or_else(PoisonError::into_inner);
            match guard.as_ref() {
                Some(report) => warp::reply::with_status(warp::reply::json(report), StatusCode::OK),
                None => warp::reply::with_status(
                    warp::reply::json(&json!({"status": "empty"})),
                    StatusCode::NOT_FOUND,
                ),
            }
        });

    let sources_route = warp::path("sources").and(warp::get()).map(|| {
        let profiles: Vec<_> = CoefficientTable::standard().profiles().collect();
        warp::reply::json(&profiles)
    });

    let evaluate_route = warp::path("evaluate")
        .and(warp::post())
        .and(warp::body::json())
        .and(state_filter)
        .and(runner_filter)
        .map(
            |config: ScenarioConfig, state: SharedReport, runner: Arc<Runner>| {
                match runner.execute(&config) {
                    Ok(report) => {
                        let reply = warp::reply::json(&report);
                        *state.write().unwrap_or_else(PoisonError::into_inner) = Some(report);
                        warp::reply::with_status(reply, StatusCode::OK)
                    }
                    Err(err) => {
                        warn!("evaluate error: {:#}", err);
                        let status = error_status(&err);
                        warp::reply::with_status(
                            warp::reply::json(&json!({
                                "status": "invalid",
                                "message": err.root_cause().to_string(),
                            })),
                            status,
                        )
                    }
                }
            },
        );

    report_route.or(sources_route).or(evaluate_route)
}

fn error_status(err: &anyhow::Error) -> StatusCode {
    if err.downcast_ref::<MixValidationError>().is_some() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else if err.downcast_ref::<ImpactError>().is_some() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn bridge() -> ReportBridge {
        ReportBridge::new(Arc::new(Runner::new()))
    }

    #[test]
    fn bridge_updates_state() {
        let bridge = bridge();
        assert!(bridge.snapshot().is_none());
        let report = bridge.runner.execute(&ScenarioConfig::default()).unwrap();
        bridge.publish(&report);
        assert_eq!(bridge.snapshot(), Some(report));
    }

    #[test]
    fn serve_binds_before_returning() {
        let bridge = bridge();
        let (bound, _handle) = bridge.serve(SocketAddr::from(([127, 0, 0, 1], 0))).unwrap();
        assert_ne!(bound.port(), 0);
    }

    #[test]
    fn serve_reports_port_already_in_use() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let taken = listener.local_addr().unwrap();
        let err = bridge().serve(taken).unwrap_err();
        assert!(err.to_string().contains("binding report bridge"));
    }

    #[tokio::test]
    async fn report_route_is_empty_until_published() {
        let bridge = bridge();
        let filter = routes(bridge.state.clone(), bridge.runner.clone());
        let response = warp::test::request()
            .method("GET")
            .path("/report")
            .reply(&filter)
            .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn sources_route_lists_every_profile() {
        let bridge = bridge();
        let filter = routes(bridge.state.clone(), bridge.runner.clone());
        let response = warp::test::request()
            .method("GET")
            .path("/sources")
            .reply(&filter)
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body.as_array().map(Vec::len), Some(8));
        assert_eq!(body[0]["name"], "Coal");
    }

    #[tokio::test]
    async fn evaluate_route_stores_report() {
        let bridge = bridge();
        let filter = routes(bridge.state.clone(), bridge.runner.clone());
        let response = warp::test::request()
            .method("POST")
            .path("/evaluate")
            .json(&json!({"name": "campus", "monthly_usage_kwh": 500, "mix": {"Nuclear": 100}}))
            .reply(&filter)
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let stored = bridge.snapshot().unwrap();
        assert_eq!(stored.scenario, "campus");
        assert!((stored.current.total_emissions - 72.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn evaluate_route_rejects_bad_mix() {
        let bridge = bridge();
        let filter = routes(bridge.state.clone(), bridge.runner.clone());
        let response = warp::test::request()
            .method("POST")
            .path("/evaluate")
            .json(&json!({"mix": {"Coal": 80}}))
            .reply(&filter)
            .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["message"], "Total mix is 80%. Please adjust to equal 100%.");
        assert!(bridge.snapshot().is_none());
    }

    #[tokio::test]
    async fn evaluate_route_rejects_unknown_source() {
        let bridge = bridge();
        let filter = routes(bridge.state.clone(), bridge.runner.clone());
        let response = warp::test::request()
            .method("POST")
            .path("/evaluate")
            .json(&json!({"mix": {"Plutonium": 100}}))
            .reply(&filter)
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
