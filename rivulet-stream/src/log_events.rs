// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Log-events operator that reports every lifecycle event of a subscription.
//!
//! Lines have the form `"<prefix>: receive value: (3)"`. They go to `info!` (tracing when the
//! `tracing` feature is on, stdout otherwise) or to a caller-supplied writer.

use core::fmt::Debug;
use rivulet_core::{Completion, Downstream, Publisher, Subscriber};
use std::sync::Arc;

/// Destination of the lines produced by [`LogEventsExt::log_events_with`].
pub type LogWriter = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Clone)]
struct EventLog {
    prefix: Arc<str>,
    writer: Option<LogWriter>,
}

impl EventLog {
    fn emit(&self, event: &str) {
        let line = if self.prefix.is_empty() {
            event.to_string()
        } else {
            format!("{}: {event}", self.prefix)
        };
        match &self.writer {
            Some(writer) => writer(&line),
            None => info!("{}", line),
        }
    }
}

/// Publisher returned by [`LogEventsExt::log_events`].
pub struct LogEvents<P> {
    upstream: P,
    log: EventLog,
}

struct LogEventsSubscriber<T, E> {
    downstream: Downstream<T, E>,
    log: EventLog,
}

impl<T: Debug, E: Debug> Subscriber<T, E> for LogEventsSubscriber<T, E> {
    fn on_value(&mut self, value: T) {
        self.log.emit(&format!("receive value: ({value:?})"));
        self.downstream.send(value);
    }

    fn on_completion(&mut self, completion: Completion<E>) {
        match &completion {
            Completion::Finished => self.log.emit("receive finished"),
            Completion::Failed(error) => self.log.emit(&format!("receive error: ({error:?})")),
        }
        self.downstream.complete(completion);
    }
}

impl<P> Publisher for LogEvents<P>
where
    P: Publisher,
    P::Output: Debug + Send + 'static,
    P::Failure: Debug + Send + 'static,
{
    type Output = P::Output;
    type Failure = P::Failure;

    fn attach(&self, downstream: Downstream<P::Output, P::Failure>) {
        self.log.emit("receive subscription");

        let log = self.log.clone();
        downstream
            .subscription()
            .on_cancel(move || log.emit("receive cancel"));

        let upstream = downstream.subscription().child();
        self.upstream.attach(Downstream::new(
            LogEventsSubscriber {
                downstream,
                log: self.log.clone(),
            },
            upstream,
        ));
    }
}

/// Extension trait providing the `log_events` operators for publishers.
pub trait LogEventsExt: Publisher + Sized {
    /// Logs subscription, values, completion and cancellation, forwarding everything unchanged.
    fn log_events(self, prefix: impl Into<String>) -> LogEvents<Self>;

    /// Like [`log_events`](Self::log_events), writing each line to `writer` instead of the log.
    fn log_events_with<W>(self, prefix: impl Into<String>, writer: W) -> LogEvents<Self>
    where
        W: Fn(&str) + Send + Sync + 'static;
}

impl<P: Publisher> LogEventsExt for P {
    fn log_events(self, prefix: impl Into<String>) -> LogEvents<Self> {
        LogEvents {
            upstream: self,
            log: EventLog {
                prefix: Arc::from(prefix.into()),
                writer: None,
            },
        }
    }

    fn log_events_with<W>(self, prefix: impl Into<String>, writer: W) -> LogEvents<Self>
    where
        W: Fn(&str) + Send + Sync + 'static,
    {
        LogEvents {
            upstream: self,
            log: EventLog {
                prefix: Arc::from(prefix.into()),
                writer: Some(Arc::new(writer)),
            },
        }
    }
}
