//! `{}` placeholder substitution for printf-style backends.

use std::error::Error;
use std::fmt::Write;

use crate::native::FormatArg;

/// Result of [`format_message`].
#[derive(Debug)]
pub struct FormattedMessage<'a> {
    /// Template with placeholders substituted
    pub message: String,
    /// Trailing error argument, if there was one
    pub cause: Option<&'a (dyn Error + 'static)>,
}

/// Substitutes each `{}` in `template` with the next argument.
///
/// A trailing [`FormatArg::Cause`] is always taken as the cause and never
/// substituted. `\{}` renders a literal `{}` and consumes no argument, while
/// `\\{}` renders one backslash followed by the argument. Once arguments run
/// out the rest of the template is copied verbatim; surplus arguments are
/// ignored.
#[must_use]
pub fn format_message<'a>(template: &str, args: &[FormatArg<'a>]) -> FormattedMessage<'a> {
    let (cause, args) = match args.split_last() {
        Some((FormatArg::Cause(cause), rest)) => (Some(*cause), rest),
        _ => (None, args),
    };

    let mut message = String::with_capacity(template.len() + 8 * args.len());
    let mut rest = template;
    let mut args = args.iter().peekable();

    while args.peek().is_some() {
        let Some(pos) = rest.find("{}") else {
            break;
        };
        let before = &rest[..pos];
        rest = &rest[pos + 2..];

        if before.ends_with("\\\\") {
            message.push_str(&before[..before.len() - 1]);
        } else if let Some(literal) = before.strip_suffix('\\') {
            message.push_str(literal);
            message.push_str("{}");
            continue;
        } else {
            message.push_str(before);
        }

        if let Some(arg) = args.next() {
            let _ = write!(message, "{arg}");
        }
    }
    message.push_str(rest);

    FormattedMessage { message, cause }
}
