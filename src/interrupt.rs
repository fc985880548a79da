use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::{error::InputError, prompt::Prompt};

/// Records that the process received an interrupt signal.
///
/// Clones share the same flag, so the signal listener can raise it while the
/// session checks it.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    /// Creates a lowered flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an interrupt as pending.
    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Returns `true` if an interrupt is pending.
    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Clears the flag and returns whether an interrupt was pending.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }

    /// Listens for `SIGINT` on a background thread.
    ///
    /// Each signal raises the flag and then calls `wake`, which lets a prompt
    /// blocked on input return straight away. Once installed, the signal no
    /// longer terminates the process.
    #[cfg(unix)]
    pub fn listen<F>(&self, wake: F) -> std::io::Result<()>
        where F: Fn() + Send + 'static
    {
        use signal_hook::{consts::signal::SIGINT, iterator::Signals};

        let mut signals = Signals::new([SIGINT])?;
        let flag = self.clone();
        std::thread::spawn(move || {
            for signal in signals.forever() {
                tracing::debug!(signal, "received interrupt signal");
                flag.raise();
                wake();
            }
        });
        Ok(())
    }

    /// Signals are left to the platform default outside Unix.
    #[cfg(not(unix))]
    pub fn listen<F>(&self, _wake: F) -> std::io::Result<()>
        where F: Fn() + Send + 'static
    {
        Ok(())
    }
}

/// A prompt that reports a pending interrupt instead of a line.
///
/// The flag is checked before reading and again once a line arrives, so an
/// interrupt received while waiting discards the entry and ends the read with
/// `InputError::Interrupted`.
///
/// # Example
/// ```
/// use quickcalc::{error::InputError, interrupt::{InterruptFlag, Interruptible},
///                 prompt::{Prompt, ScriptedPrompt}};
///
/// let flag = InterruptFlag::new();
/// let mut prompt = Interruptible::new(ScriptedPrompt::new(["1", "2"]), flag.clone());
///
/// assert_eq!(prompt.read_line("> "), Ok("1".to_string()));
/// flag.raise();
/// assert_eq!(prompt.read_line("> "), Err(InputError::Interrupted));
/// ```
#[derive(Debug)]
pub struct Interruptible<P> {
    inner: P,
    flag:  InterruptFlag,
}

impl<P: Prompt> Interruptible<P> {
    /// Wraps `inner` so that it honours `flag`.
    pub const fn new(inner: P, flag: InterruptFlag) -> Self {
        Self { inner, flag }
    }

    /// Returns the wrapped prompt.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Prompt> Prompt for Interruptible<P> {
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        if self.flag.take() {
            return Err(InputError::Interrupted);
        }
        let line = self.inner.read_line(prompt);
        if self.flag.take() {
            return Err(InputError::Interrupted);
        }
        line
    }
}
