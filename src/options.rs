//! Parse options (§6) and their validation.

use crate::clock::{self, ClockProvider};
use crate::error::Error;
use crate::types::Instant;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Disambiguation direction for bare relative expressions (e.g. "monday"
/// with no grabber).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Context {
    Past,
    #[default]
    Future,
    None,
}

impl FromStr for Context {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "past" => Ok(Context::Past),
            "future" => Ok(Context::Future),
            "none" => Ok(Context::None),
            other => Err(Error::invalid("context", format!("unrecognized value `{other}`"))),
        }
    }
}

/// The upper bound of the AM window used to disambiguate a bare `HH[:MM]`
/// clock time with no meridian marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbiguousTimeRange {
    Hours(u8),
    None,
}

impl Default for AmbiguousTimeRange {
    fn default() -> Self {
        AmbiguousTimeRange::Hours(6)
    }
}

impl FromStr for AmbiguousTimeRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("none") {
            return Ok(AmbiguousTimeRange::None);
        }
        let n: u8 = s
            .parse()
            .map_err(|_| Error::invalid("ambiguous_time_range", format!("not an integer or `none`: `{s}`")))?;
        if n > 12 {
            return Err(Error::invalid("ambiguous_time_range", format!("{n} is out of range 0-12")));
        }
        Ok(AmbiguousTimeRange::Hours(n))
    }
}

/// Which of the `M/D/Y` vs `D/M/Y` endian patterns the grammar matcher
/// tries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    /// Month-first (`M/D/Y`), the US convention.
    Middle,
    /// Day-first (`D/M/Y`).
    Little,
}

impl FromStr for Endian {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "middle" => Ok(Endian::Middle),
            "little" => Ok(Endian::Little),
            other => Err(Error::invalid("endian_precedence", format!("unrecognized leading value `{other}`"))),
        }
    }
}

/// Options controlling a single [`crate::parse`] call.
///
/// Defaults match §6 exactly. Construct with [`Options::default`] and the
/// builder-style `with_*` methods, or build a literal and call
/// [`Options::validate`] yourself before passing it to `parse` (`parse`
/// also validates internally, so this is only useful if you want to fail
/// fast before doing other work).
#[derive(Clone)]
pub struct Options {
    pub context: Context,
    pub now: Option<Instant>,
    pub guess: bool,
    pub ambiguous_time_range: AmbiguousTimeRange,
    pub endian_precedence: Vec<Endian>,
    pub ambiguous_year_future_bias: i32,
    pub(crate) clock: Arc<dyn ClockProvider>,
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("context", &self.context)
            .field("now", &self.now)
            .field("guess", &self.guess)
            .field("ambiguous_time_range", &self.ambiguous_time_range)
            .field("endian_precedence", &self.endian_precedence)
            .field("ambiguous_year_future_bias", &self.ambiguous_year_future_bias)
            .field("clock", &"<dyn ClockProvider>")
            .finish()
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            context: Context::default(),
            now: None,
            guess: true,
            ambiguous_time_range: AmbiguousTimeRange::default(),
            endian_precedence: vec![Endian::Middle, Endian::Little],
            ambiguous_year_future_bias: 50,
            clock: clock::default_provider(),
        }
    }
}

impl Options {
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    pub fn with_now(mut self, now: Instant) -> Self {
        self.now = Some(now);
        self
    }

    pub fn with_guess(mut self, guess: bool) -> Self {
        self.guess = guess;
        self
    }

    pub fn with_ambiguous_time_range(mut self, range: AmbiguousTimeRange) -> Self {
        self.ambiguous_time_range = range;
        self
    }

    pub fn with_endian_precedence(mut self, precedence: Vec<Endian>) -> Self {
        self.endian_precedence = precedence;
        self
    }

    pub fn with_ambiguous_year_future_bias(mut self, bias: i32) -> Self {
        self.ambiguous_year_future_bias = bias;
        self
    }

    /// Injects a custom clock provider, consulted only when `now` is unset.
    pub fn with_clock_provider(mut self, clock: Arc<dyn ClockProvider>) -> Self {
        self.clock = clock;
        self
    }

    /// Resolves the reference instant: `now` if set, else the clock
    /// provider's reading.
    pub fn reference_instant(&self) -> Instant {
        self.now.unwrap_or_else(|| self.clock.now())
    }

    /// Validates option values that are not fully enforced by the type
    /// system (§4.6, §4.7). `parse` calls this before running the
    /// pipeline; an out-of-range `Hours` value or an empty
    /// `endian_precedence` is the only way this can fail for a
    /// hand-built `Options` literal, since `Context`/`Endian` are closed
    /// enums with no "unrecognized" inhabitant.
    pub fn validate(&self) -> Result<(), Error> {
        if let AmbiguousTimeRange::Hours(n) = self.ambiguous_time_range
            && n > 12
        {
            return Err(Error::invalid("ambiguous_time_range", format!("{n} is out of range 0-12")));
        }
        if self.endian_precedence.is_empty() {
            return Err(Error::invalid("endian_precedence", "must name at least one ordering"));
        }
        Ok(())
    }
}
