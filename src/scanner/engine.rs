// src/scanner/engine.rs
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::{LogEntry, LogLevel, Result};
use crate::scanner::pacer::Pacer;
use crate::scanner::session::{AttemptOutcome, ScanSession};
use crate::simulator::BusinessGenerator;

/// Drives one scan: generate a candidate, run it through the filters in
/// fixed order, accumulate matches until the target quantity or the safety
/// cutoff. Strictly sequential; the only suspension point is the pacer.
pub struct Scanner {
    generator: BusinessGenerator,
    pacer: Box<dyn Pacer>,
    stop: Arc<AtomicBool>,
}

impl Scanner {
    pub fn new(generator: BusinessGenerator, pacer: Box<dyn Pacer>) -> Self {
        Self {
            generator,
            pacer,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Cooperative cancellation handle, checked at the top of each attempt.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        self.stop.clone()
    }

    /// Runs the qualification loop to completion. The observer receives every
    /// feed entry as it is appended, in strict attempt order.
    pub async fn scan(
        &mut self,
        session: &mut ScanSession,
        observer: &mut dyn FnMut(&LogEntry),
    ) -> Result<()> {
        let before = session.logs().len();
        let started = session.start();
        for entry in &session.logs()[before..] {
            observer(entry);
        }
        if !started {
            return Ok(());
        }

        match self.run_loop(session, observer).await {
            Ok(()) => {
                observer(session.log(
                    LogLevel::Success,
                    format!(
                        "Scan complete. Found {} qualified leads.",
                        session.leads().len()
                    ),
                ));
            }
            Err(e) => {
                warn!("scan aborted after {} attempts: {}", session.attempts(), e);
                observer(session.log(LogLevel::Error, format!("Scan failed: {}", e)));
            }
        }
        session.complete();
        Ok(())
    }

    async fn run_loop(
        &mut self,
        session: &mut ScanSession,
        observer: &mut dyn FnMut(&LogEntry),
    ) -> Result<()> {
        let params = session.params().clone();

        while !session.target_met() {
            if self.stop.load(Ordering::Relaxed) {
                observer(session.log(LogLevel::Warning, "Scan cancelled. Stopping."));
                break;
            }

            let attempt = match session.next_attempt() {
                AttemptOutcome::Proceed(n) => n,
                AttemptOutcome::CutoffReached => {
                    observer(session.log(
                        LogLevel::Warning,
                        "Max search attempts reached. Stopping.",
                    ));
                    break;
                }
            };

            self.pacer.pause().await?;

            let candidate = self.generator.generate(attempt, &params.location);
            debug!(attempt, candidate = %candidate.name, "generated candidate");
            observer(session.log(
                LogLevel::Process,
                format!("Scanning \"{}\"...", candidate.name),
            ));

            if params.require_no_website && candidate.has_website {
                observer(session.log(LogLevel::Info, "  -> Skipped: Website detected."));
                continue;
            }

            if candidate.rating >= params.rating_threshold {
                observer(session.log(
                    LogLevel::Info,
                    format!("  -> Skipped: Rating {} is too high.", candidate.rating),
                ));
                continue;
            }

            if candidate.reviews < params.min_reviews {
                observer(session.log(
                    LogLevel::Info,
                    format!(
                        "  -> Skipped: Only {} reviews (Min: {}).",
                        candidate.reviews, params.min_reviews
                    ),
                ));
                continue;
            }

            let name = candidate.name.clone();
            let rating = candidate.rating;
            session.record_lead(candidate);
            observer(session.log(
                LogLevel::Success,
                format!("  -> MATCH FOUND! {} ({} stars)", name, rating),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LogLevel, ScanStatus, SearchParams};
    use crate::scanner::pacer::NoopPacer;
    use crate::simulator::{FastrandSource, ReplaySource};
    use async_trait::async_trait;

    fn params(quantity: u32) -> SearchParams {
        SearchParams {
            location: "Austin, TX".to_string(),
            quantity,
            min_reviews: 0,
            max_distance: 5,
            rating_threshold: 4.0,
            require_no_website: true,
        }
    }

    fn scanner_with_seed(seed: u64) -> Scanner {
        Scanner::new(
            BusinessGenerator::new(Box::new(FastrandSource::with_seed(seed))),
            Box::new(NoopPacer),
        )
    }

    struct FailingPacer;

    #[async_trait]
    impl Pacer for FailingPacer {
        async fn pause(&self) -> crate::models::Result<()> {
            Err("pacer exploded".into())
        }
    }

    #[tokio::test]
    async fn accepted_leads_revalidate_against_all_filters() {
        let mut session = ScanSession::new(params(5));
        let mut scanner = scanner_with_seed(11);
        scanner.scan(&mut session, &mut |_| {}).await.unwrap();

        assert_eq!(session.status(), ScanStatus::Completed);
        assert!(session.leads().len() <= 5);
        for lead in session.leads() {
            assert!(lead.rating < 4.0);
            assert!(!lead.has_website);
            assert!(lead.reviews >= 1);
        }
    }

    #[tokio::test]
    async fn impossible_min_reviews_hits_cutoff_with_warning() {
        let mut p = params(1);
        p.min_reviews = 1_000_000;
        let mut session = ScanSession::new(p);
        let mut scanner = scanner_with_seed(5);
        scanner.scan(&mut session, &mut |_| {}).await.unwrap();

        assert_eq!(session.status(), ScanStatus::Completed);
        assert!(session.leads().is_empty());
        assert_eq!(session.attempts(), 16); // 15 allowed + the one that trips
        assert!(session
            .logs()
            .iter()
            .any(|e| e.level == LogLevel::Warning
                && e.message.contains("Max search attempts reached")));
    }

    #[tokio::test]
    async fn empty_location_never_enters_the_loop() {
        let mut p = params(5);
        p.location = String::new();
        let mut session = ScanSession::new(p);
        let mut scanner = scanner_with_seed(1);
        scanner.scan(&mut session, &mut |_| {}).await.unwrap();

        assert_eq!(session.status(), ScanStatus::Idle);
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.logs().len(), 1);
    }

    #[tokio::test]
    async fn pacer_failure_is_caught_and_forces_completed() {
        let mut session = ScanSession::new(params(3));
        let mut scanner = Scanner::new(
            BusinessGenerator::new(Box::new(FastrandSource::with_seed(2))),
            Box::new(FailingPacer),
        );
        scanner.scan(&mut session, &mut |_| {}).await.unwrap();

        assert_eq!(session.status(), ScanStatus::Completed);
        assert!(session
            .logs()
            .iter()
            .any(|e| e.level == LogLevel::Error && e.message.contains("Scan failed")));
        // Failure path skips the summary line
        assert!(!session
            .logs()
            .iter()
            .any(|e| e.message.contains("Scan complete")));
    }

    #[tokio::test]
    async fn stop_flag_cancels_at_iteration_boundary() {
        let mut session = ScanSession::new(params(5));
        let mut scanner = scanner_with_seed(9);
        scanner.stop_handle().store(true, Ordering::Relaxed);
        scanner.scan(&mut session, &mut |_| {}).await.unwrap();

        assert_eq!(session.status(), ScanStatus::Completed);
        assert_eq!(session.attempts(), 0);
        assert!(session
            .logs()
            .iter()
            .any(|e| e.message.contains("Scan cancelled")));
    }

    #[tokio::test]
    async fn every_candidate_that_fails_a_filter_logs_the_reason() {
        // One candidate with a website, then one qualifying candidate.
        // Draws per candidate: category, prefix, street, number, website,
        // rating, outlier check, reviews, phone x3, postal.
        let rng = ReplaySource::new(vec![
            // candidate 1: website present -> skipped
            0.0, 0.0, 0.0, 0.0, 0.9, 0.2, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5,
            // candidate 2: no website, rating 3.2, qualifies
            0.0, 0.0, 0.0, 0.0, 0.1, 0.1, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5,
        ]);
        let mut session = ScanSession::new(params(1));
        let mut scanner = Scanner::new(
            BusinessGenerator::new(Box::new(rng)),
            Box::new(NoopPacer),
        );

        let mut streamed = Vec::new();
        scanner
            .scan(&mut session, &mut |e| streamed.push(e.message.clone()))
            .await
            .unwrap();

        assert_eq!(session.leads().len(), 1);
        assert!(streamed.iter().any(|m| m.contains("Website detected")));
        assert!(streamed.iter().any(|m| m.contains("MATCH FOUND")));
        // Observer saw exactly what the session recorded, in order.
        let recorded: Vec<_> = session.logs().iter().map(|e| e.message.clone()).collect();
        assert_eq!(streamed, recorded);
    }

    #[tokio::test]
    async fn progress_reaches_100_only_when_target_met() {
        let mut session = ScanSession::new(params(2));
        let mut scanner = scanner_with_seed(21);
        scanner.scan(&mut session, &mut |_| {}).await.unwrap();

        if session.target_met() {
            assert_eq!(session.progress(), 100);
        } else {
            assert!(session.progress() < 100);
        }
    }
}
