
use crate::transport::ConsoleTransport;

pub(crate) const PREFIX: &str = "!bb ";

pub(crate) fn transport() -> ConsoleTransport {
    ConsoleTransport::new(PREFIX)
}
