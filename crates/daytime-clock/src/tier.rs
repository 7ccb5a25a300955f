//! Precision tiers and their change predicates

use daytime_core::TimeOfDay;

/// Precision level of a clock, coarsest first
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Precision {
    Hour,
    Minute,
    Second,
    #[default]
    Millisecond,
}

type ComponentEq = fn(TimeOfDay, TimeOfDay) -> bool;

// Indexed by `Precision as usize`
const COMPONENT_EQ: [ComponentEq; 4] = [
    TimeOfDay::is_hour_equal,
    TimeOfDay::is_minute_equal,
    TimeOfDay::is_second_equal,
    TimeOfDay::is_millisecond_equal,
];

impl Precision {
    pub const ALL: [Precision; 4] = [
        Precision::Hour,
        Precision::Minute,
        Precision::Second,
        Precision::Millisecond,
    ];

    /// Tiers watched by a clock of this precision, coarse to fine
    #[inline]
    pub fn tiers(self) -> &'static [Precision] {
        static ORDERED: [Precision; 4] = Precision::ALL;
        &ORDERED[..=self as usize]
    }

    /// Whether this tier's own component matches; coarser components are ignored
    #[inline]
    pub fn component_equal(self, a: TimeOfDay, b: TimeOfDay) -> bool {
        COMPONENT_EQ[self as usize](a, b)
    }

    /// Whether `a` and `b` agree on every component down to this precision
    pub fn equal_at(self, a: TimeOfDay, b: TimeOfDay) -> bool {
        self.tiers().iter().all(|tier| tier.component_equal(a, b))
    }

    /// Display format a clock of this precision uses unless configured otherwise
    pub fn default_format(self) -> &'static str {
        match self {
            Precision::Hour => "h tt",
            Precision::Minute => "h:mm tt",
            Precision::Second => "h:mm:ss tt",
            Precision::Millisecond => "h:mm:ss:fff tt",
        }
    }

    #[inline]
    pub fn includes(self, tier: Precision) -> bool {
        tier <= self
    }
}
