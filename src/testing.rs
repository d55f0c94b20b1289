//! Testing utilities
//!
//! [`MockEnvironment`] stands in for the streaming engine so builders can be
//! exercised without one: it records every registered source and hands back
//! handles the same way the real engine would.

use crate::stream::{SourceHandle, SourceStream, StreamEnvironment, WatermarkStrategy};

/// One source registration observed by a [`MockEnvironment`].
#[derive(Debug, Clone)]
pub struct RegisteredSource {
    pub name: String,
    pub stream: SourceStream,
    pub watermarks: WatermarkStrategy,
}

/// A recording stand-in for the streaming engine.
#[derive(Debug, Default)]
pub struct MockEnvironment {
    pub sources: Vec<RegisteredSource>,
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently registered source.
    ///
    /// Panics when nothing has been registered; test-only convenience.
    pub fn last(&self) -> &RegisteredSource {
        self.sources.last().expect("no source registered")
    }
}

impl StreamEnvironment for MockEnvironment {
    fn from_source(
        &mut self,
        stream: SourceStream,
        watermarks: WatermarkStrategy,
        name: &str,
    ) -> SourceHandle {
        self.sources.push(RegisteredSource {
            name: name.to_string(),
            stream,
            watermarks,
        });
        SourceHandle {
            operator_name: name.to_string(),
        }
    }
}
