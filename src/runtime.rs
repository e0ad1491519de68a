//! Runtime abstraction layer for async operations
//!
//! The preloader and the logo fetch run as background tasks while the UI
//! thread keeps painting. This module hides which executor runs them.

use crate::prelude::{Future, Pin};

/// A trait for spawning async tasks (object-safe version)
pub trait AsyncSpawner: Send + Sync + 'static {
    /// Spawn a future and return a handle to it
    fn spawn_boxed(
        &self,
        future: Pin<Box<dyn Future<Output = ()> + Send + 'static>>,
    ) -> Box<dyn AsyncHandle>;

    /// Spawn a future that returns a value
    fn spawn_with_result_boxed(
        &self,
        future: Pin<Box<dyn Future<Output = Box<dyn std::any::Any + Send>> + Send + 'static>>,
    ) -> Box<dyn AsyncHandleWithResult>;
}

/// Handle to a spawned async task
pub trait AsyncHandle: Send + Sync {
    /// Check if the task is finished
    fn is_finished(&self) -> bool;
}

/// Handle to a spawned async task that returns a result
pub trait AsyncHandleWithResult: Send + Sync {
    /// Check if the task is finished
    fn is_finished(&self) -> bool;

    /// Try to get the result if available
    fn try_result(&mut self) -> Option<Box<dyn std::any::Any + Send>>;
}

/// Convenience functions for spawning with type safety
pub fn spawn<F>(future: F) -> Box<dyn AsyncHandle>
where
    F: Future<Output = ()> + Send + 'static,
{
    log::trace!("spawning background task");
    runtime().spawn_boxed(Box::pin(future))
}

pub fn spawn_with_result<F, T>(future: F) -> Box<dyn AsyncHandleWithResult>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    log::trace!("spawning background task with result");
    let boxed_future = Box::pin(async move {
        let result = future.await;
        Box::new(result) as Box<dyn std::any::Any + Send>
    });
    runtime().spawn_with_result_boxed(boxed_future)
}

/// Default spawner implementations
pub mod spawners {
    #[cfg(feature = "tokio-runtime")]
    pub mod tokio_impl {
        use super::super::*;
        use crate::prelude::{Arc, Mutex};
        use ::tokio::task::JoinHandle;
        use futures::future::FutureExt;

        /// Type alias for tokio handle with result
        type TokioHandleResult = Arc<Mutex<Option<JoinHandle<Box<dyn std::any::Any + Send>>>>>;

        /// Tokio-based async spawner. Must be used from inside a tokio runtime.
        pub struct TokioSpawner;

        impl AsyncSpawner for TokioSpawner {
            fn spawn_boxed(
                &self,
                future: Pin<Box<dyn Future<Output = ()> + Send + 'static>>,
            ) -> Box<dyn AsyncHandle> {
                let handle = ::tokio::spawn(future);
                Box::new(TokioHandle(handle))
            }

            fn spawn_with_result_boxed(
                &self,
                future: Pin<
                    Box<dyn Future<Output = Box<dyn std::any::Any + Send>> + Send + 'static>,
                >,
            ) -> Box<dyn AsyncHandleWithResult> {
                let handle = ::tokio::spawn(future);
                Box::new(TokioHandleWithResult(Arc::new(Mutex::new(Some(handle)))))
            }
        }

        struct TokioHandle(JoinHandle<()>);

        impl AsyncHandle for TokioHandle {
            fn is_finished(&self) -> bool {
                self.0.is_finished()
            }
        }

        struct TokioHandleWithResult(TokioHandleResult);

        impl AsyncHandleWithResult for TokioHandleWithResult {
            fn is_finished(&self) -> bool {
                if let Ok(guard) = self.0.lock() {
                    if let Some(handle) = guard.as_ref() {
                        return handle.is_finished();
                    }
                }
                true
            }

            fn try_result(&mut self) -> Option<Box<dyn std::any::Any + Send>> {
                if let Ok(mut guard) = self.0.lock() {
                    if let Some(handle) = guard.take() {
                        if handle.is_finished() {
                            return handle.now_or_never().and_then(|r| r.ok());
                        } else {
                            *guard = Some(handle);
                        }
                    }
                }
                None
            }
        }
    }

    /// Runs each future to completion on the calling thread.
    pub mod blocking {
        use super::super::*;
        use crate::prelude::Mutex;

        pub struct BlockingSpawner;

        struct Finished(Mutex<Option<Box<dyn std::any::Any + Send>>>);

        impl AsyncSpawner for BlockingSpawner {
            fn spawn_boxed(
                &self,
                future: Pin<Box<dyn Future<Output = ()> + Send + 'static>>,
            ) -> Box<dyn AsyncHandle> {
                futures::executor::block_on(future);
                Box::new(Finished(Mutex::new(None)))
            }

            fn spawn_with_result_boxed(
                &self,
                future: Pin<
                    Box<dyn Future<Output = Box<dyn std::any::Any + Send>> + Send + 'static>,
                >,
            ) -> Box<dyn AsyncHandleWithResult> {
                let result = futures::executor::block_on(future);
                Box::new(Finished(Mutex::new(Some(result))))
            }
        }

        impl AsyncHandle for Finished {
            fn is_finished(&self) -> bool {
                true
            }
        }

        impl AsyncHandleWithResult for Finished {
            fn is_finished(&self) -> bool {
                true
            }

            fn try_result(&mut self) -> Option<Box<dyn std::any::Any + Send>> {
                self.0.lock().ok().and_then(|mut guard| guard.take())
            }
        }
    }
}

/// Global runtime instance
static RUNTIME: std::sync::OnceLock<Box<dyn AsyncSpawner>> = std::sync::OnceLock::new();

/// Initialize the runtime with a specific spawner
pub fn init_runtime(spawner: Box<dyn AsyncSpawner>) {
    let _ = RUNTIME.set(spawner);
}

/// Get the global runtime spawner
pub fn runtime() -> &'static dyn AsyncSpawner {
    RUNTIME
        .get_or_init(|| {
            #[cfg(feature = "tokio-runtime")]
            {
                Box::new(spawners::tokio_impl::TokioSpawner)
            }

            #[cfg(not(feature = "tokio-runtime"))]
            {
                Box::new(spawners::blocking::BlockingSpawner)
            }
        })
        .as_ref()
}
