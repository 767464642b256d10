// src/safety.rs

//! Marking callables as unsafe for use.
//!
//! A marked callable logs a warning on every invocation and then behaves
//! exactly like the original. The warning goes through `tracing` under the
//! `antispam::safety` target, so it is silenced with an ordinary filter
//! directive such as `antispam::safety=error`.

// dependencies
use std::borrow::Cow;
use tracing::warn;

/// Wraps a callable so that each call first emits a warning.
///
/// Arguments are passed as a single value; use a tuple for several.
#[derive(Debug, Clone)]
pub struct Unsafe<F> {
    name: Cow<'static, str>,
    message: Option<Cow<'static, str>>,
    inner: F,
}

impl<F> Unsafe<F> {
    /// Mark `inner`, known to callers as `name`, as unsafe.
    pub fn new(name: impl Into<Cow<'static, str>>, inner: F) -> Self {
        Self {
            name: name.into(),
            message: None,
            inner,
        }
    }

    /// Builder-style: replace the default warning text
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The text logged on each call.
    pub fn message(&self) -> Cow<'_, str> {
        match &self.message {
            Some(message) => Cow::Borrowed(message.as_ref()),
            None => Cow::Owned(format!("{} is unsafe for use", self.name)),
        }
    }

    /// Warn, then call the wrapped function and hand back whatever it returns.
    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
    {
        warn!(target: "antispam::safety", function = %self.name, "{}", self.message());
        (self.inner)(args)
    }

    /// Unwrap the original callable.
    pub fn into_inner(self) -> F {
        self.inner
    }
}

/// Function form of [`Unsafe`]: returns a closure with the same call shape
/// as `function` that warns before every call.
pub fn warn_unsafe<A, R, F>(
    name: impl Into<Cow<'static, str>>,
    message: Option<&'static str>,
    function: F,
) -> impl Fn(A) -> R
where
    F: Fn(A) -> R,
{
    let mut marked = Unsafe::new(name, function);
    if let Some(message) = message {
        marked = marked.with_message(message);
    }
    move |args: A| -> R { marked.call(args) }
}
