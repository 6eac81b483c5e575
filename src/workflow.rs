//! Simulated Workflow Tasks
//!
//! Timer-driven mock processing (parsing, validation, proposal sections,
//! syncs) expressed as explicit tasks with checked status transitions.
//!
//! A task moves `Pending -> Running -> Completed | Failed`, or straight from
//! `Pending` to `Failed` when it is cancelled before it starts. Anything else
//! is rejected.

use std::sync::atomic::{AtomicBool, Ordering};
use std::future::Future;
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;

use crate::error::TaskError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    Running,
    Completed,
    Failed(TaskError),
}

impl TaskStatus {
    pub fn name(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Running => "running",
            TaskStatus::Completed => "completed",
            TaskStatus::Failed(_) => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Failed(_))
    }

    /// Validate a move to `next`
    pub fn transition(&self, next: TaskStatus) -> Result<TaskStatus, TaskError> {
        match (self, &next) {
            (TaskStatus::Pending, TaskStatus::Running)
            | (TaskStatus::Running, TaskStatus::Completed)
            | (TaskStatus::Running, TaskStatus::Failed(_))
            | (TaskStatus::Pending, TaskStatus::Failed(_)) => Ok(next),
            _ => Err(TaskError::InvalidTransition {
                from: self.name(),
                to: next.name(),
            }),
        }
    }

    pub fn error(&self) -> Option<&TaskError> {
        match self {
            TaskStatus::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Cloneable cancellation flag shared between a page and its runners
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn check(&self) -> Result<(), TaskError> {
        if self.is_cancelled() {
            Err(TaskError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Wait `ms`, then fail if the token was cancelled meanwhile
pub async fn delay(ms: u32, token: &CancelToken) -> Result<(), TaskError> {
    pause(&TimeoutFuture::new, ms, token).await
}

async fn pause<S, W>(sleep: &S, ms: u32, token: &CancelToken) -> Result<(), TaskError>
where
    S: Fn(u32) -> W,
    W: Future<Output = ()>,
{
    token.check()?;
    sleep(ms).await;
    token.check()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step<R> {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub status: TaskStatus,
    pub result: Option<R>,
}

impl<R> Step<R> {
    pub fn new(id: &'static str, name: &'static str, description: &'static str) -> Self {
        Self {
            id,
            name,
            description,
            status: TaskStatus::Pending,
            result: None,
        }
    }
}

/// Transition reported by [`run_pipeline`]
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent<R> {
    Started(&'static str),
    Completed(&'static str, Option<R>),
    Failed(&'static str, TaskError),
}

/// Ordered steps, each an independent task
#[derive(Debug, Clone, PartialEq)]
pub struct StepPipeline<R> {
    steps: Vec<Step<R>>,
}

impl<R: Clone> StepPipeline<R> {
    pub fn new(steps: Vec<Step<R>>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step<R>] {
        &self.steps
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.id).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Step<R>> {
        self.steps.iter().find(|s| s.id == id)
    }

    fn step_mut(&mut self, id: &str) -> Result<&mut Step<R>, TaskError> {
        self.steps
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| TaskError::UnknownStep(id.to_string()))
    }

    fn set_status(&mut self, id: &str, next: TaskStatus) -> Result<&mut Step<R>, TaskError> {
        let step = self.step_mut(id)?;
        step.status = step.status.transition(next)?;
        tracing::debug!(step = id, status = step.status.name(), "step transition");
        Ok(step)
    }

    pub fn start(&mut self, id: &str) -> Result<(), TaskError> {
        self.set_status(id, TaskStatus::Running).map(|_| ())
    }

    pub fn complete(&mut self, id: &str, result: Option<R>) -> Result<(), TaskError> {
        let step = self.set_status(id, TaskStatus::Completed)?;
        step.result = result;
        Ok(())
    }

    pub fn fail(&mut self, id: &str, err: TaskError) -> Result<(), TaskError> {
        self.set_status(id, TaskStatus::Failed(err)).map(|_| ())
    }

    /// Fail every unfinished step with `Cancelled`
    pub fn cancel_remaining(&mut self) {
        for step in self.steps.iter_mut().filter(|s| !s.status.is_terminal()) {
            step.status = TaskStatus::Failed(TaskError::Cancelled);
        }
    }

    pub fn apply(&mut self, event: PipelineEvent<R>) -> Result<(), TaskError> {
        match event {
            PipelineEvent::Started(id) => self.start(id),
            PipelineEvent::Completed(id, result) => self.complete(id, result),
            PipelineEvent::Failed(id, err) => self.fail(id, err),
        }
    }

    /// The running step, else the next pending one
    pub fn current(&self) -> Option<&Step<R>> {
        self.steps
            .iter()
            .find(|s| s.status == TaskStatus::Running)
            .or_else(|| self.steps.iter().find(|s| s.status == TaskStatus::Pending))
    }

    pub fn is_finished(&self) -> bool {
        self.steps.iter().all(|s| s.status.is_terminal())
    }

    pub fn has_failed(&self) -> bool {
        self.steps.iter().any(|s| s.status.error().is_some())
    }

    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|s| s.status == TaskStatus::Completed).count()
    }

    /// All steps completed successfully
    pub fn succeeded(&self) -> bool {
        self.completed_count() == self.steps.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTiming {
    /// Idle time before every step but the first
    pub gap_ms: u32,
    /// Time a step spends running
    pub duration_ms: u32,
}

/// Drive `ids` in order: wait, start, work, resolve.
///
/// `resolve` yields the mock result of a step or an error message; `emit`
/// receives every transition. Stops at the first failure or cancellation;
/// the step that stopped fails with that error and every later step fails
/// with `Cancelled`, so the pipeline always ends finished.
pub async fn run_pipeline<R, F, E>(
    ids: Vec<&'static str>,
    timing: StepTiming,
    token: CancelToken,
    resolve: F,
    emit: E,
) -> Result<(), TaskError>
where
    F: Fn(&str) -> Result<Option<R>, String>,
    E: Fn(PipelineEvent<R>),
{
    drive(&TimeoutFuture::new, ids, timing, token, resolve, emit).await
}

async fn drive<S, W, R, F, E>(
    sleep: &S,
    ids: Vec<&'static str>,
    timing: StepTiming,
    token: CancelToken,
    resolve: F,
    emit: E,
) -> Result<(), TaskError>
where
    S: Fn(u32) -> W,
    W: Future<Output = ()>,
    F: Fn(&str) -> Result<Option<R>, String>,
    E: Fn(PipelineEvent<R>),
{
    let mut steps = ids.into_iter().enumerate();
    while let Some((i, id)) = steps.next() {
        let outcome = async {
            if i > 0 {
                pause(sleep, timing.gap_ms, &token).await?;
            }
            token.check()?;
            emit(PipelineEvent::Started(id));
            pause(sleep, timing.duration_ms, &token).await?;
            resolve(id).map_err(TaskError::Step)
        }
        .await;

        match outcome {
            Ok(result) => emit(PipelineEvent::Completed(id, result)),
            Err(err) => {
                emit(PipelineEvent::Failed(id, err.clone()));
                for (_, rest) in steps.by_ref() {
                    emit(PipelineEvent::Failed(rest, TaskError::Cancelled));
                }
                tracing::debug!(step = id, "pipeline stopped: {}", err);
                return Err(err);
            }
        }
    }
    tracing::info!("pipeline finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> StepPipeline<u32> {
        StepPipeline::new(vec![
            Step::new("a", "A", "first"),
            Step::new("b", "B", "second"),
            Step::new("c", "C", "third"),
        ])
    }

    #[test]
    fn test_legal_transitions() {
        let pending = TaskStatus::Pending;
        let running = pending.transition(TaskStatus::Running).unwrap();
        assert_eq!(running.transition(TaskStatus::Completed).unwrap(), TaskStatus::Completed);
        assert!(running.transition(TaskStatus::Failed(TaskError::Cancelled)).is_ok());
        assert!(pending.transition(TaskStatus::Failed(TaskError::Cancelled)).is_ok());
    }

    #[test]
    fn test_illegal_transitions() {
        let err = TaskStatus::Pending.transition(TaskStatus::Completed).unwrap_err();
        assert_eq!(err, TaskError::InvalidTransition { from: "pending", to: "completed" });
        assert!(TaskStatus::Completed.transition(TaskStatus::Running).is_err());
        assert!(TaskStatus::Running.transition(TaskStatus::Running).is_err());
        assert!(TaskStatus::Failed(TaskError::Cancelled)
            .transition(TaskStatus::Running)
            .is_err());
    }

    #[test]
    fn test_pipeline_progress() {
        let mut p = pipeline();
        assert_eq!(p.current().map(|s| s.id), Some("a"));

        p.apply(PipelineEvent::Started("a")).unwrap();
        assert_eq!(p.current().map(|s| s.id), Some("a"));
        p.apply(PipelineEvent::Completed("a", Some(7))).unwrap();
        assert_eq!(p.get("a").and_then(|s| s.result), Some(7));
        assert_eq!(p.current().map(|s| s.id), Some("b"));

        p.start("b").unwrap();
        p.complete("b", None).unwrap();
        p.start("c").unwrap();
        p.complete("c", None).unwrap();
        assert!(p.is_finished());
        assert!(p.succeeded());
        assert!(!p.has_failed());
        assert!(p.current().is_none());
    }

    #[test]
    fn test_pipeline_rejects_skips_and_unknown_steps() {
        let mut p = pipeline();
        assert!(p.complete("a", None).is_err());
        assert_eq!(p.start("zzz"), Err(TaskError::UnknownStep("zzz".to_string())));
        assert_eq!(p.get("a").map(|s| &s.status), Some(&TaskStatus::Pending));
    }

    #[test]
    fn test_cancel_remaining() {
        let mut p = pipeline();
        p.start("a").unwrap();
        p.complete("a", Some(1)).unwrap();
        p.start("b").unwrap();
        p.cancel_remaining();

        assert_eq!(p.get("a").map(|s| &s.status), Some(&TaskStatus::Completed));
        for id in ["b", "c"] {
            assert_eq!(
                p.get(id).map(|s| &s.status),
                Some(&TaskStatus::Failed(TaskError::Cancelled))
            );
        }
        assert!(p.is_finished());
        assert!(p.has_failed());
        assert!(!p.succeeded());
    }

    #[test]
    fn test_step_failure() {
        let mut p = pipeline();
        p.start("a").unwrap();
        p.fail("a", TaskError::Step("parser crashed".to_string())).unwrap();
        assert!(p.has_failed());
        assert!(!p.is_finished());
        assert_eq!(
            p.get("a").and_then(|s| s.status.error()).map(|e| e.to_string()),
            Some("parser crashed".to_string())
        );
    }

    #[test]
    fn test_cancel_token_is_shared() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(clone.check().is_ok());
        token.cancel();
        assert_eq!(clone.check(), Err(TaskError::Cancelled));
    }

    fn run_to_end<F>(p: &std::cell::RefCell<StepPipeline<u32>>, token: &CancelToken, resolve: F) -> Result<(), TaskError>
    where
        F: Fn(&str) -> Result<Option<u32>, String>,
    {
        let timing = StepTiming { gap_ms: 5, duration_ms: 10 };
        let ids = p.borrow().ids();
        futures::executor::block_on(drive(
            &|_: u32| std::future::ready(()),
            ids,
            timing,
            token.clone(),
            resolve,
            |event| p.borrow_mut().apply(event).unwrap(),
        ))
    }

    #[test]
    fn test_runner_completes_every_step() {
        let p = std::cell::RefCell::new(pipeline());
        let token = CancelToken::new();
        run_to_end(&p, &token, |id| Ok(Some(id.len() as u32))).unwrap();
        let p = p.into_inner();
        assert!(p.succeeded());
        assert_eq!(p.get("c").and_then(|s| s.result), Some(1));
    }

    #[test]
    fn test_runner_cancel_between_steps_fails_the_rest() {
        let p = std::cell::RefCell::new(pipeline());
        let token = CancelToken::new();
        let result = run_to_end(&p, &token, |id| {
            if id == "a" {
                token.cancel();
            }
            Ok(None)
        });
        assert_eq!(result, Err(TaskError::Cancelled));

        let p = p.into_inner();
        assert_eq!(p.get("a").map(|s| &s.status), Some(&TaskStatus::Completed));
        for id in ["b", "c"] {
            assert_eq!(
                p.get(id).map(|s| &s.status),
                Some(&TaskStatus::Failed(TaskError::Cancelled))
            );
        }
        assert!(p.is_finished());
    }

    #[test]
    fn test_runner_step_error_stops_pipeline() {
        let p = std::cell::RefCell::new(pipeline());
        let token = CancelToken::new();
        let result = run_to_end(&p, &token, |id| {
            if id == "b" {
                Err("no tables found".to_string())
            } else {
                Ok(None)
            }
        });
        assert_eq!(result, Err(TaskError::Step("no tables found".to_string())));

        let p = p.into_inner();
        assert_eq!(p.get("b").and_then(|s| s.status.error()).map(|e| e.to_string()), Some("no tables found".to_string()));
        assert_eq!(p.get("c").map(|s| &s.status), Some(&TaskStatus::Failed(TaskError::Cancelled)));
        assert!(p.is_finished());
        assert!(p.has_failed());
    }

    #[test]
    fn test_runner_with_cancelled_token_starts_nothing() {
        let p = std::cell::RefCell::new(pipeline());
        let token = CancelToken::new();
        token.cancel();
        assert_eq!(run_to_end(&p, &token, |_| Ok(None)), Err(TaskError::Cancelled));
        let p = p.into_inner();
        assert_eq!(p.completed_count(), 0);
        assert!(p.ids().iter().all(|id| p.get(id).and_then(|s| s.status.error()) == Some(&TaskError::Cancelled)));
    }
}
