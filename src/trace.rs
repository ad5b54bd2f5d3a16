//! Human-readable explanations returned alongside solver results.

use serde::Serialize;
use std::fmt;
use std::ops::Deref;

#[derive(Clone, Default, Serialize, PartialEq, Eq, Debug)]
pub struct Trace(Vec<String>);

impl Trace {
    pub fn new() -> Self {
        Trace(Vec::new())
    }

    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        trace!("{}", line);
        self.0.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn extend(&mut self, other: Trace) {
        self.0.extend(other.0);
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.0.iter() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// A result together with the trace that explains it.
#[derive(Clone, Serialize, PartialEq, Debug)]
pub struct Traced<T> {
    pub value: T,
    pub trace: Trace,
}

impl<T> Traced<T> {
    pub fn new(value: T, trace: Trace) -> Self {
        Traced { value, trace }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Traced<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}
