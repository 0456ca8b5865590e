use std::io;
use std::sync::mpsc;
use std::thread;

type Task = Box<dyn FnOnce() + Send>;

enum Message {
    Run(Task),
    Shutdown,
}

/// A single worker thread that runs dispatched tasks in order. Every fetch
/// completion goes through one of these, so callers observe all outcomes
/// serialized on one thread no matter where the transport called back from.
pub struct ExecutionContext {
    tx: mpsc::Sender<Message>,
    worker: Option<thread::JoinHandle<()>>,
}

#[derive(Clone)]
pub struct ContextHandle {
    tx: mpsc::Sender<Message>,
}

impl ExecutionContext {
    pub fn new() -> Result<ExecutionContext, io::Error> {
        let (tx, rx) = mpsc::channel();
        let worker = thread::Builder::new()
            .name("urlfetch-completions".to_string())
            .spawn(move || {
                for msg in rx {
                    match msg {
                        Message::Run(task) => task(),
                        Message::Shutdown => break,
                    }
                }
            })?;

        Ok(ExecutionContext {
            tx,
            worker: Some(worker),
        })
    }

    pub fn handle(&self) -> ContextHandle {
        ContextHandle {
            tx: self.tx.clone(),
        }
    }
}

impl Drop for ExecutionContext {
    fn drop(&mut self) {
        // queued behind anything already dispatched, so pending tasks run
        let _ = self.tx.send(Message::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl ContextHandle {
    /// Tasks dispatched after the context has shut down are dropped.
    pub fn dispatch<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let _ = self.tx.send(Message::Run(Box::new(task)));
    }
}
