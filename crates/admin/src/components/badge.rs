//! Status badge colors.

use stockroom_core::{FulfillmentStatus, PaymentStatus};

/// Light or dark badge palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTheme {
    #[default]
    Light,
    Dark,
}

impl BadgeTheme {
    #[must_use]
    pub const fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::Dark } else { Self::Light }
    }
}

const GREEN: (&str, &str) = ("bg-green-100 text-green-800", "bg-green-900 text-green-300");
const YELLOW: (&str, &str) = ("bg-yellow-100 text-yellow-800", "bg-yellow-900 text-yellow-300");
const ORANGE: (&str, &str) = ("bg-orange-100 text-orange-800", "bg-orange-900 text-orange-300");
const RED: (&str, &str) = ("bg-red-100 text-red-800", "bg-red-900 text-red-300");

const fn pick(colors: (&'static str, &'static str), theme: BadgeTheme) -> &'static str {
    match theme {
        BadgeTheme::Light => colors.0,
        BadgeTheme::Dark => colors.1,
    }
}

/// Badge classes for a payment status.
#[must_use]
pub const fn payment_badge_class(status: PaymentStatus, theme: BadgeTheme) -> &'static str {
    let colors = match status {
        PaymentStatus::Paid => GREEN,
        PaymentStatus::Pending => YELLOW,
        PaymentStatus::Failed => RED,
    };
    pick(colors, theme)
}

/// Badge classes for a fulfillment status.
#[must_use]
pub const fn fulfillment_badge_class(status: FulfillmentStatus, theme: BadgeTheme) -> &'static str {
    let colors = match status {
        FulfillmentStatus::Fulfilled => GREEN,
        FulfillmentStatus::Unfulfilled => ORANGE,
        FulfillmentStatus::Cancelled => RED,
    };
    pick(colors, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_badges() {
        assert_eq!(
            payment_badge_class(PaymentStatus::Paid, BadgeTheme::Light),
            "bg-green-100 text-green-800"
        );
        assert_eq!(
            payment_badge_class(PaymentStatus::Pending, BadgeTheme::Dark),
            "bg-yellow-900 text-yellow-300"
        );
        assert_eq!(
            payment_badge_class(PaymentStatus::Failed, BadgeTheme::Light),
            "bg-red-100 text-red-800"
        );
    }

    #[test]
    fn test_fulfillment_badges() {
        assert_eq!(
            fulfillment_badge_class(FulfillmentStatus::Unfulfilled, BadgeTheme::Light),
            "bg-orange-100 text-orange-800"
        );
        assert_eq!(
            fulfillment_badge_class(FulfillmentStatus::Fulfilled, BadgeTheme::Dark),
            "bg-green-900 text-green-300"
        );
        assert_eq!(
            fulfillment_badge_class(FulfillmentStatus::Cancelled, BadgeTheme::from_dark_mode(true)),
            "bg-red-900 text-red-300"
        );
    }
}
