//! The per-stream worker: bytes → lines → payload events → chunks.
//!
//! One spawned task per stream, no state shared between streams. Data flows
//! one direction through the worker; cancellation flows the other way and is
//! polled cooperatively at two points — before each read and before each
//! publish — so a caller that cancels may still see one chunk that was
//! already in flight.

use bytes::Bytes;
use chatstream_types::{Chunk, StreamError, StreamHandle};
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::decode::{Disposition, SseDecoder};
use crate::frame::SseLine;
use crate::line::LineBuffer;

/// Output channel capacity. One slot keeps the worker from blocking on a
/// caller that has not begun consuming, while back-pressure still applies
/// once the slot is full.
const CHANNEL_CAPACITY: usize = 1;

/// Spawn the pipeline for one response body.
///
/// Returns immediately with the handle. The worker task takes ownership of
/// `body`; dropping it when the task exits is what releases the underlying
/// connection, and that happens exactly once on every exit path — normal
/// end, decoder stop, cancellation, and read failure alike.
///
/// Termination, in priority order: cancellation observed, decoder stop,
/// source exhausted, read failure (which publishes one best-effort error
/// chunk first). All of them close the channel exactly once.
pub fn spawn<S, E, D>(cancel: CancellationToken, body: S, decoder: D) -> StreamHandle
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
    D: SseDecoder,
{
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    tokio::spawn(run(cancel, body, decoder, tx));
    StreamHandle { receiver: rx }
}

/// What happened after one line.
enum Step {
    Continue,
    Finished,
}

async fn run<S, E, D>(cancel: CancellationToken, body: S, mut decoder: D, tx: mpsc::Sender<Chunk>)
where
    S: Stream<Item = Result<Bytes, E>>,
    E: std::fmt::Display,
    D: SseDecoder,
{
    let mut body = std::pin::pin!(body);
    let mut lines = LineBuffer::new();

    loop {
        let next = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("stream cancelled");
                return;
            }
            next = body.next() => next,
        };

        let bytes = match next {
            Some(Ok(bytes)) => bytes,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "stream read failed");
                let chunk =
                    Chunk::error(StreamError::retryable(format!("stream read error: {e}")));
                send(&cancel, &tx, chunk).await;
                return;
            }
            None => break,
        };

        lines.extend(&bytes);
        while let Some(line) = lines.next_line() {
            if let Step::Finished = handle_line(&cancel, &tx, &mut decoder, line).await {
                return;
            }
        }
    }

    // A final line without a trailing newline still carries a payload.
    if let Some(line) = lines.take_rest() {
        let _ = handle_line(&cancel, &tx, &mut decoder, line).await;
    }
    tracing::debug!("stream source exhausted");
}

async fn handle_line<D: SseDecoder>(
    cancel: &CancellationToken,
    tx: &mpsc::Sender<Chunk>,
    decoder: &mut D,
    line: Result<String, std::string::FromUtf8Error>,
) -> Step {
    if cancel.is_cancelled() {
        tracing::debug!("stream cancelled");
        return Step::Finished;
    }

    let line = match line {
        Ok(line) => line,
        Err(e) => {
            let chunk =
                Chunk::error(StreamError::non_retryable(format!("invalid UTF-8 in stream: {e}")));
            send(cancel, tx, chunk).await;
            return Step::Finished;
        }
    };

    let payload = match SseLine::parse(&line) {
        SseLine::Data(payload) => payload,
        SseLine::Blank | SseLine::Comment | SseLine::Field => return Step::Continue,
    };

    let decoded = decoder.decode(payload);
    let stopping = decoded.disposition == Disposition::Stop;

    if !decoded.chunk.is_empty() && !send(cancel, tx, decoded.chunk).await {
        return Step::Finished;
    }

    if stopping {
        tracing::debug!("decoder ended the stream");
        Step::Finished
    } else {
        Step::Continue
    }
}

/// Publish one chunk, unless cancellation wins the race or the caller has
/// dropped the handle. Returns whether the chunk was delivered.
async fn send(cancel: &CancellationToken, tx: &mpsc::Sender<Chunk>, chunk: Chunk) -> bool {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            tracing::debug!("stream cancelled");
            false
        }
        sent = tx.send(chunk) => sent.is_ok(),
    }
}
