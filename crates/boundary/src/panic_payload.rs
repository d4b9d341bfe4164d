//! Verbatim storage for panic payloads captured at a wrap boundary.

use std::any::Any;
use std::fmt;

/// Payload of a panic captured by a wrap adapter.
///
/// The raw payload box is stored verbatim; nothing is inspected or
/// classified at capture time. [`message`](Self::message) offers a
/// best-effort textual view for the payload types the `panic!` macro
/// produces, and [`into_inner`](Self::into_inner) hands the box back for
/// callers that want to downcast something else.
pub struct PanicPayload {
    payload: Box<dyn Any + Send>,
}

impl PanicPayload {
    /// Wrap a raw panic payload.
    #[must_use]
    pub fn new(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }

    /// Best-effort view of the panic message.
    ///
    /// Covers the `&str` and `String` payloads the `panic!` macro produces.
    /// Payloads of any other type yield `None`.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            Some(message)
        } else if let Some(message) = self.payload.downcast_ref::<String>() {
            Some(message)
        } else {
            None
        }
    }

    /// Consume the wrapper and return the raw payload box.
    #[must_use]
    pub fn into_inner(self) -> Box<dyn Any + Send> {
        self.payload
    }
}

impl fmt::Debug for PanicPayload {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PanicPayload")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for PanicPayload {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(formatter, "panic: {message}"),
            None => formatter.write_str("panic with a non-string payload"),
        }
    }
}

impl std::error::Error for PanicPayload {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_str_payloads_are_readable() {
        let payload = PanicPayload::new(Box::new("broke"));
        assert_eq!(payload.message(), Some("broke"));
        assert_eq!(payload.to_string(), "panic: broke");
    }

    #[test]
    fn string_payloads_are_readable() {
        let payload = PanicPayload::new(Box::new(String::from("broke badly")));
        assert_eq!(payload.message(), Some("broke badly"));
    }

    #[test]
    fn other_payloads_stay_opaque_but_intact() {
        let payload = PanicPayload::new(Box::new(1234u32));
        assert_eq!(payload.message(), None);
        assert_eq!(payload.to_string(), "panic with a non-string payload");

        let raw = payload.into_inner();
        assert_eq!(raw.downcast_ref::<u32>(), Some(&1234));
    }
}
