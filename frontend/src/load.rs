use crate::error::RemoteError;

/// Identifies one dispatched request for a state slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Last-write-wins guard for one state slot.
///
/// Every dispatch takes a fresh ticket; a reply is admitted only while its
/// ticket is still the newest one issued, so replies are ordered by when
/// they were triggered rather than by when they arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fence {
    latest: u64,
}

impl Fence {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn admits(&self, ticket: Ticket) -> bool {
        self.latest != 0 && ticket.0 == self.latest
    }

    pub fn current(&self) -> Option<Ticket> {
        (self.latest != 0).then_some(Ticket(self.latest))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Loadable<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(RemoteError),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&RemoteError> {
        match self {
            Loadable::Failed(error) => Some(error),
            _ => None,
        }
    }
}

impl<T> From<Result<T, RemoteError>> for Loadable<T> {
    fn from(result: Result<T, RemoteError>) -> Self {
        match result {
            Ok(value) => Loadable::Ready(value),
            Err(error) => Loadable::Failed(error),
        }
    }
}
