//! Cooperative yield for single-threaded executors

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Future that returns `Pending` once, then completes.
///
/// Lets a test interleave two launches under `futures::join!` the same way the
/// browser event loop interleaves them at a file read or module import.
pub fn yield_now() -> YieldNow {
    YieldNow { yielded: false }
}

/// See [`yield_now`].
#[derive(Debug)]
pub struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}
