//! Change notifications and subscriptions

use std::fmt;

use daytime_core::{Duration, TimeOfDay};

use crate::Precision;

/// Notification channel of a clock
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Hour,
    Minute,
    Second,
    Millisecond,
    /// Fires once per update when any watched tier changed
    Time,
}

impl Channel {
    /// The tier behind this channel; `None` for the umbrella channel
    pub fn tier(self) -> Option<Precision> {
        match self {
            Channel::Hour => Some(Precision::Hour),
            Channel::Minute => Some(Precision::Minute),
            Channel::Second => Some(Precision::Second),
            Channel::Millisecond => Some(Precision::Millisecond),
            Channel::Time => None,
        }
    }
}

impl From<Precision> for Channel {
    fn from(tier: Precision) -> Self {
        match tier {
            Precision::Hour => Channel::Hour,
            Precision::Minute => Channel::Minute,
            Precision::Second => Channel::Second,
            Precision::Millisecond => Channel::Millisecond,
        }
    }
}

/// Payload shared by every notification of one update
#[derive(Clone, Debug, PartialEq)]
pub struct TimeChanged {
    /// New time of the clock
    pub time: TimeOfDay,
    /// Time before the update
    pub previous_time: TimeOfDay,
    /// `time` in the clock's format
    pub time_string: String,
    /// `previous_time` in the clock's format
    pub previous_time_string: String,
    /// Signed `time - previous_time`: positive forward, negative when set back.
    /// Never wraps at midnight.
    pub delta: Duration,
    /// Day progress of `time`, in `[0, 1)`
    pub day_progress: f64,
}

impl TimeChanged {
    pub fn new(time: TimeOfDay, previous_time: TimeOfDay, format: &str) -> Self {
        TimeChanged {
            time,
            previous_time,
            time_string: time.format(format).to_string(),
            previous_time_string: previous_time.format(format).to_string(),
            delta: time.signed_since(previous_time),
            day_progress: time.day_progress(),
        }
    }
}

/// A notification delivered on one channel
#[derive(Clone, Debug, PartialEq)]
pub struct ClockEvent {
    pub channel: Channel,
    pub change: TimeChanged,
}

/// Handle returned by `Clock::subscribe`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&ClockEvent)>;

struct Subscriber {
    id: SubscriptionId,
    channel: Channel,
    handler: Handler,
}

/// Handlers in registration order
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    entries: Vec<Subscriber>,
}

impl Subscribers {
    pub(crate) fn add(&mut self, channel: Channel, handler: Handler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push(Subscriber { id, channel, handler });
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|s| s.id != id);
        self.entries.len() != before
    }

    pub(crate) fn dispatch(&mut self, event: &ClockEvent) {
        for subscriber in self.entries.iter_mut().filter(|s| s.channel == event.channel) {
            (subscriber.handler)(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}
