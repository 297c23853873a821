/// A keyword and the canned reply it triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyRule {
    pub keyword: &'static str,
    pub reply: &'static str,
}

/// Checked in order; the first keyword found wins.
pub const REPLY_RULES: &[ReplyRule] = &[
    ReplyRule {
        keyword: "discount",
        reply: "Based on recent trends, offering a 3-5% discount can boost conversion without hurting margins.",
    },
    ReplyRule {
        keyword: "stock",
        reply: "Low stock detected on 8 items. Reorder recommendations are available in Insights.",
    },
];

pub const DEFAULT_REPLY: &str =
    "You can create invoices, track payments, and see profit in the Insights dashboard.";

/// Case-insensitive substring match against `rules`.
pub fn classify(rules: &[ReplyRule], utterance: &str) -> &'static str {
    let lowered = utterance.to_lowercase();
    rules
        .iter()
        .find(|rule| lowered.contains(&rule.keyword.to_lowercase()))
        .map(|rule| rule.reply)
        .unwrap_or(DEFAULT_REPLY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_beats_stock() {
        assert_eq!(classify(REPLY_RULES, "any discount on stock?"), REPLY_RULES[0].reply);
    }

    #[test]
    fn test_stock_is_case_insensitive() {
        assert_eq!(
            classify(REPLY_RULES, "low STOCK alert"),
            "Low stock detected on 8 items. Reorder recommendations are available in Insights."
        );
    }

    #[test]
    fn test_fallthrough_to_default() {
        assert_eq!(classify(REPLY_RULES, "hello"), DEFAULT_REPLY);
        assert_eq!(classify(&[], "discount"), DEFAULT_REPLY);
    }

    #[test]
    fn test_mixed_case_keyword() {
        let rules = [ReplyRule {
            keyword: "Discount",
            reply: "Seasonal offers are on.",
        }];
        assert_eq!(classify(&rules, "any discount today?"), "Seasonal offers are on.");
        assert_eq!(classify(&rules, "DISCOUNT?"), "Seasonal offers are on.");
    }

    #[test]
    fn test_keyword_inside_word() {
        assert_eq!(classify(REPLY_RULES, "Restocking soon?"), REPLY_RULES[1].reply);
        assert_eq!(classify(REPLY_RULES, "DISCOUNTS"), REPLY_RULES[0].reply);
    }
}
