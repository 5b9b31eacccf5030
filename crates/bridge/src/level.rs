//! Mapping between facade levels and native levels.

use bridgelog_facade::Level;

use crate::native::NativeLevel;

/// Native level for `level`; `None` for [`Level::Off`].
#[must_use]
pub const fn to_native(level: Level) -> Option<NativeLevel> {
    match level {
        Level::Trace => Some(NativeLevel::Trace),
        Level::Debug => Some(NativeLevel::Debug),
        Level::Info => Some(NativeLevel::Info),
        Level::Warn => Some(NativeLevel::Warn),
        Level::Error => Some(NativeLevel::Error),
        Level::Off => None,
    }
}

/// Facade level for `level`.
#[must_use]
pub const fn from_native(level: NativeLevel) -> Level {
    match level {
        NativeLevel::Trace => Level::Trace,
        NativeLevel::Debug => Level::Debug,
        NativeLevel::Info => Level::Info,
        NativeLevel::Warn => Level::Warn,
        NativeLevel::Error => Level::Error,
    }
}

impl TryFrom<Level> for NativeLevel {
    type Error = Level;

    fn try_from(level: Level) -> Result<Self, Level> {
        to_native(level).ok_or(level)
    }
}

impl From<NativeLevel> for Level {
    fn from(level: NativeLevel) -> Self {
        from_native(level)
    }
}
