//! User-facing confirmations.

use swapper_core::ClickKind;

/// Delivers one-line confirmations to the user.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Notifier that writes confirmations to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

/// Remove inline markup tags such as `<col=ff9040>` from display text.
///
/// A `<` with no closing `>` is kept as-is.
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('<') {
        let Some(close) = rest[open..].find('>') else {
            break;
        };
        out.push_str(&rest[..open]);
        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);
    out
}

/// Confirmation for a new default.
pub fn assigned_message(click: ClickKind, subject: &str, label: &str) -> String {
    format!(
        "The default {} click option for '{}' has been set to '{}'.",
        click.as_str(),
        strip_tags(subject),
        label
    )
}

/// Confirmation for a reset.
pub fn reset_message(subject: &str) -> String {
    format!(
        "The default left and shift click options for '{}' have been reset.",
        strip_tags(subject)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<col=ff9040>Coins</col>"), "Coins");
        assert_eq!(strip_tags("Plain"), "Plain");
        assert_eq!(strip_tags("a < b"), "a < b");
        assert_eq!(strip_tags("<img=1>Rune <col=ffffff>pouch"), "Rune pouch");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            assigned_message(ClickKind::Shift, "<col=ff9040>Coins</col>", "Withdraw-5"),
            "The default shift click option for 'Coins' has been set to 'Withdraw-5'."
        );
        assert_eq!(
            reset_message("Coins"),
            "The default left and shift click options for 'Coins' have been reset."
        );
    }
}
