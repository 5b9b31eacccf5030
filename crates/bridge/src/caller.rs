//! Call-site resolution by walking the current stack.
//!
//! Every frame is reduced to an *owner*: the demangled symbol with the
//! function name, closure segments and generic arguments removed, so
//! `<app::Foo as core::fmt::Display>::fmt` and `app::Foo::run::{{closure}}`
//! are both owned by `app::Foo`. A frame belongs to a boundary when its owner
//! is the boundary or a path beneath it.
//!
//! In optimised builds, a function whose last expression calls into the
//! boundary may be compiled as a tail call and lose its own frame.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Boundaries a backend skips in addition to an event's own caller boundary.
pub const DEFAULT_FRAMEWORK_BOUNDARIES: &[&str] = &[bridgelog_facade::ACCESS_POINT];

/// One resolved stack frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerFrame {
    /// Demangled symbol, without hash
    pub symbol: String,
    /// Type or module path the symbol is defined on
    pub owner: String,
    /// Source file, when debug info is available
    pub file: Option<PathBuf>,
    /// Source line, when debug info is available
    pub line: Option<u32>,
}

impl CallerFrame {
    /// Builds a frame from a demangled symbol; `None` if it has no owner.
    #[must_use]
    pub fn from_symbol(symbol: &str, file: Option<&Path>, line: Option<u32>) -> Option<Self> {
        Some(Self {
            owner: owner_of(symbol)?,
            symbol: symbol.to_string(),
            file: file.map(Path::to_path_buf),
            line,
        })
    }

    /// Whether this frame belongs to `boundary`.
    #[must_use]
    pub fn belongs_to(&self, boundary: &str) -> bool {
        self.owner
            .strip_prefix(boundary)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
    }

    fn belongs_to_any(&self, boundaries: &[&str]) -> bool {
        boundaries.iter().any(|boundary| self.belongs_to(boundary))
    }
}

/// Returns the first frame after the outermost contiguous run of frames
/// belonging to any of `boundaries`, scanning from the newest frame.
#[must_use]
pub fn find_caller<'f>(frames: &'f [CallerFrame], boundaries: &[&str]) -> Option<&'f CallerFrame> {
    let first = frames
        .iter()
        .position(|frame| frame.belongs_to_any(boundaries))?;
    frames[first..]
        .iter()
        .find(|frame| !frame.belongs_to_any(boundaries))
}

/// The frame that called into `boundary`.
///
/// # Errors
///
/// Returns [`Error::CallerNotFound`] if no frame belongs to `boundary` or the
/// stack ends inside it.
#[inline(never)]
pub fn most_recent_caller_of(boundary: &str) -> Result<CallerFrame> {
    most_recent_caller_of_any(&[boundary])
}

/// The frame that called into any of `boundaries`.
///
/// # Errors
///
/// Returns [`Error::CallerNotFound`] if no frame belongs to a boundary or the
/// stack ends inside one.
#[inline(never)]
pub fn most_recent_caller_of_any(boundaries: &[&str]) -> Result<CallerFrame> {
    let mut frames = Vec::new();
    let mut inside = false;
    let mut found = None;

    backtrace::trace(|raw| {
        backtrace::resolve_frame(raw, |symbol| {
            if found.is_some() {
                return;
            }
            let Some(name) = symbol.name() else {
                return;
            };
            let Some(frame) =
                CallerFrame::from_symbol(&format!("{name:#}"), symbol.filename(), symbol.lineno())
            else {
                return;
            };
            if frame.belongs_to_any(boundaries) {
                inside = true;
            } else if inside {
                found = Some(frame.clone());
            }
            frames.push(frame);
        });
        found.is_none()
    });

    found.ok_or_else(|| Error::CallerNotFound {
        boundary: boundaries.join(", "),
        stack: render(&frames),
    })
}

fn render(frames: &[CallerFrame]) -> String {
    let mut stack = String::new();
    for frame in frames {
        let _ = write!(stack, "\n  at {}", frame.symbol);
        if let (Some(file), Some(line)) = (&frame.file, frame.line) {
            let _ = write!(stack, " ({}:{line})", file.display());
        }
    }
    stack
}

/// Owner of a demangled symbol; `None` for symbols with no enclosing path.
pub(crate) fn owner_of(symbol: &str) -> Option<String> {
    let mut segments = split_path(symbol);
    while segments
        .last()
        .is_some_and(|segment| segment.starts_with('{') || segment.starts_with('<'))
    {
        segments.pop();
    }
    segments.pop()?;
    if segments.is_empty() {
        return None;
    }

    let owner = segments
        .into_iter()
        .map(normalize_segment)
        .collect::<Vec<_>>()
        .join("::");
    (!owner.is_empty()).then_some(owner)
}

/// Splits on `::` outside angle brackets.
fn split_path(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0_usize;
    let mut start = 0;
    let bytes = path.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' if i == 0 || bytes[i - 1] != b'-' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&path[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&path[start..]);
    segments
}

/// `<T as Trait>` and `<T>` become `T`; generic arguments are dropped.
fn normalize_segment(segment: &str) -> String {
    let mut segment = segment;
    if let Some(inner) = segment
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
    {
        segment = self_type(inner);
    }
    let segment = segment
        .trim_start_matches('&')
        .trim_start_matches("mut ")
        .trim_start_matches("dyn ");
    let end = segment.find('<').unwrap_or(segment.len());
    segment[..end].to_string()
}

/// The `T` of `T as Trait`, found outside nested angle brackets.
fn self_type(qualified: &str) -> &str {
    let bytes = qualified.as_bytes();
    let mut depth = 0_usize;
    for (i, byte) in bytes.iter().enumerate() {
        match byte {
            b'<' => depth += 1,
            b'>' if i == 0 || bytes[i - 1] != b'-' => depth = depth.saturating_sub(1),
            b' ' if depth == 0 && qualified[i..].starts_with(" as ") => return &qualified[..i],
            _ => {}
        }
    }
    qualified
}
