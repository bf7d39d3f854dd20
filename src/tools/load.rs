//! Load test for the payment create, confirm and retrieve flow.
//!
//! Each simulated user is a tokio task that repeatedly creates an
//! unconfirmed payment, confirms it with a test card and retrieves it. All
//! users share one [`HyperswitchClient`].

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use futures_util::future::join_all;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::models::{
    Card, Currency, PaymentConfirmRequest, PaymentCreateRequestBuilder, PaymentId,
    PaymentMethodData,
};
use crate::{Error, HyperswitchClient, MinorUnit, Result};

/// Parameters of a load test run.
#[derive(Debug, Clone)]
pub struct LoadTestConfig {
    /// Concurrent simulated users
    pub users: usize,
    /// Flows each user runs
    pub iterations_per_user: usize,
    /// Payment amount
    pub amount: MinorUnit,
    /// Payment currency
    pub currency: Currency,
    /// Pause between a user's flows
    pub think_time: Duration,
}

impl Default for LoadTestConfig {
    fn default() -> Self {
        Self {
            users: 10,
            iterations_per_user: 1,
            amount: MinorUnit::new(6540),
            currency: Currency::USD,
            think_time: Duration::from_secs(1),
        }
    }
}

/// A step of the simulated flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// `POST /payments` with `confirm: false`
    Create,
    /// `POST /payments/{id}/confirm`
    Confirm,
    /// `GET /payments/{id}`
    Retrieve,
}

impl Step {
    /// Short label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Create => "create",
            Step::Confirm => "confirm",
            Step::Retrieve => "retrieve",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Which step
    pub step: Step,
    /// Time until the response was decoded
    pub latency: Duration,
    /// Whether the call returned `Ok`
    pub success: bool,
}

/// Aggregated outcomes of one step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Successful requests
    pub successes: usize,
    /// Failed requests
    pub failures: usize,
    /// Fastest request
    pub min: Duration,
    /// Mean latency
    pub mean: Duration,
    /// Slowest request
    pub max: Duration,
    /// 95th percentile latency, nearest rank
    pub p95: Duration,
}

impl StepStats {
    fn from_latencies(mut latencies: Vec<Duration>, successes: usize) -> Self {
        latencies.sort_unstable();
        let count = latencies.len();
        let total: Duration = latencies.iter().sum();
        let rank = (count * 95).div_ceil(100);

        Self {
            successes,
            failures: count - successes,
            min: latencies.first().copied().unwrap_or_default(),
            mean: total.checked_div(count as u32).unwrap_or_default(),
            max: latencies.last().copied().unwrap_or_default(),
            p95: latencies
                .get(rank.saturating_sub(1))
                .copied()
                .unwrap_or_default(),
        }
    }

    /// Requests made.
    pub fn requests(&self) -> usize {
        self.successes + self.failures
    }
}

/// Result of a load test run.
#[derive(Debug, Clone, Default)]
pub struct LoadTestReport {
    /// Per-step statistics, only for steps that ran
    pub steps: BTreeMap<Step, StepStats>,
    /// Wall-clock time of the run
    pub elapsed: Duration,
}

impl LoadTestReport {
    /// Aggregate raw samples.
    pub fn from_samples(samples: &[Sample], elapsed: Duration) -> Self {
        let mut grouped: BTreeMap<Step, (Vec<Duration>, usize)> = BTreeMap::new();
        for sample in samples {
            let entry = grouped.entry(sample.step).or_default();
            entry.0.push(sample.latency);
            if sample.success {
                entry.1 += 1;
            }
        }

        Self {
            steps: grouped
                .into_iter()
                .map(|(step, (latencies, successes))| {
                    (step, StepStats::from_latencies(latencies, successes))
                })
                .collect(),
            elapsed,
        }
    }

    /// Statistics of one step.
    pub fn step(&self, step: Step) -> Option<&StepStats> {
        self.steps.get(&step)
    }

    /// Requests made across all steps.
    pub fn total_requests(&self) -> usize {
        self.steps.values().map(StepStats::requests).sum()
    }

    /// Failed requests across all steps.
    pub fn total_failures(&self) -> usize {
        self.steps.values().map(|s| s.failures).sum()
    }
}

impl fmt::Display for LoadTestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10} {:>8} {:>8} {:>10} {:>10} {:>10} {:>10}",
            "step", "ok", "failed", "min ms", "mean ms", "max ms", "p95 ms"
        )?;
        for (step, stats) in &self.steps {
            writeln!(
                f,
                "{:<10} {:>8} {:>8} {:>10} {:>10} {:>10} {:>10}",
                step.as_str(),
                stats.successes,
                stats.failures,
                stats.min.as_millis(),
                stats.mean.as_millis(),
                stats.max.as_millis(),
                stats.p95.as_millis(),
            )?;
        }
        write!(
            f,
            "{} requests, {} failed, {:.1}s",
            self.total_requests(),
            self.total_failures(),
            self.elapsed.as_secs_f64()
        )
    }
}

/// Run the load test and aggregate the results.
///
/// Individual request failures are counted, not returned. A failed create
/// skips the rest of that flow.
pub async fn run_load_test(client: &HyperswitchClient, config: &LoadTestConfig) -> Result<LoadTestReport> {
    if config.users == 0 || config.iterations_per_user == 0 {
        return Err(Error::InvalidInput(
            "users and iterations_per_user must be greater than zero".to_string(),
        ));
    }
    info!(
        users = config.users,
        iterations = config.iterations_per_user,
        "starting load test"
    );

    let started = Instant::now();
    let handles = (0..config.users).map(|user| {
        let client = client.clone();
        let config = config.clone();
        tokio::spawn(async move { simulate_user(user, &client, &config).await })
    });

    let mut samples = Vec::new();
    for joined in join_all(handles).await {
        match joined {
            Ok(user_samples) => samples.extend(user_samples),
            Err(e) => warn!(error = %e, "simulated user task failed"),
        }
    }

    let report = LoadTestReport::from_samples(&samples, started.elapsed());
    info!(
        requests = report.total_requests(),
        failures = report.total_failures(),
        "load test finished"
    );
    Ok(report)
}

async fn simulate_user(user: usize, client: &HyperswitchClient, config: &LoadTestConfig) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(config.iterations_per_user * 3);

    for iteration in 0..config.iterations_per_user {
        if iteration > 0 && !config.think_time.is_zero() {
            tokio::time::sleep(config.think_time).await;
        }
        if let Err(e) = run_flow(client, config, &mut samples).await {
            debug!(user, iteration, error = %e, "flow aborted");
        }
    }
    samples
}

async fn run_flow(client: &HyperswitchClient, config: &LoadTestConfig, samples: &mut Vec<Sample>) -> Result<()> {
    let payments = client.payments();

    let request = PaymentCreateRequestBuilder::new()
        .amount(config.amount)
        .currency(config.currency)
        .confirm(false)
        .description("load test")
        .build()?;
    let payment = timed(Step::Create, samples, payments.create(request)).await?;
    let payment_id: PaymentId = payment.payment_id;

    let card = Card::new("4242424242424242", "10", "30", "123").with_holder_name("Joseph Doe");
    let confirm = PaymentConfirmRequest::with_payment_method_data(PaymentMethodData::Card(card));
    // A declined confirm still leaves a payment to retrieve.
    let _ = timed(Step::Confirm, samples, payments.confirm(&payment_id, confirm)).await;

    timed(Step::Retrieve, samples, payments.retrieve(&payment_id, None)).await?;
    Ok(())
}

async fn timed<T>(
    step: Step,
    samples: &mut Vec<Sample>,
    call: impl std::future::Future<Output = Result<T>>,
) -> Result<T> {
    let started = Instant::now();
    let result = call.await;
    samples.push(Sample {
        step,
        latency: started.elapsed(),
        success: result.is_ok(),
    });
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(step: Step, millis: u64, success: bool) -> Sample {
        Sample {
            step,
            latency: Duration::from_millis(millis),
            success,
        }
    }

    #[test]
    fn test_report_aggregation() {
        let mut samples: Vec<Sample> = (1..=20).map(|ms| sample(Step::Create, ms * 10, true)).collect();
        samples.push(sample(Step::Confirm, 50, false));
        samples.push(sample(Step::Confirm, 150, true));

        let report = LoadTestReport::from_samples(&samples, Duration::from_secs(2));

        let create = report.step(Step::Create).unwrap();
        assert_eq!(create.successes, 20);
        assert_eq!(create.failures, 0);
        assert_eq!(create.min, Duration::from_millis(10));
        assert_eq!(create.max, Duration::from_millis(200));
        assert_eq!(create.mean, Duration::from_millis(105));
        assert_eq!(create.p95, Duration::from_millis(190));

        let confirm = report.step(Step::Confirm).unwrap();
        assert_eq!(confirm.successes, 1);
        assert_eq!(confirm.failures, 1);
        assert_eq!(confirm.mean, Duration::from_millis(100));

        assert!(report.step(Step::Retrieve).is_none());
        assert_eq!(report.total_requests(), 22);
        assert_eq!(report.total_failures(), 1);
    }

    #[test]
    fn test_report_display() {
        let report = LoadTestReport::from_samples(&[sample(Step::Retrieve, 12, true)], Duration::from_secs(1));
        let text = report.to_string();
        assert!(text.contains("retrieve"));
        assert!(text.ends_with("1 requests, 0 failed, 1.0s"));
    }

    #[test]
    fn test_default_config() {
        let config = LoadTestConfig::default();
        assert_eq!(config.amount, MinorUnit::new(6540));
        assert_eq!(config.currency, Currency::USD);
    }
}
