use serde::Serialize;

/// A selectable `(value, label)` pair shown on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> ContactOption {
    ContactOption { value, label }
}

pub const BUDGET_OPTIONS: &[ContactOption] = &[
    option("3k-5k", "$3,000 - $5,000"),
    option("5k-10k", "$5,000 - $10,000"),
    option("10k-15k", "$10,000 - $15,000"),
    option("15k-20k", "$15,000 - $20,000"),
    option("20k-25k", "$20,000 - $25,000"),
    option("25k+", "More than $25,000"),
];

pub const SERVICES: &[ContactOption] = &[
    option("product", "Product"),
    option("no-code", "No-code"),
    option("low-code", "Low-code"),
    option("development", "Development"),
    option("automation", "Automation"),
    option("devops", "DevOps"),
    option("ai", "AI"),
    option("other", "Other"),
];

pub fn is_budget_tier(value: &str) -> bool {
    BUDGET_OPTIONS.iter().any(|o| o.value == value)
}

pub fn is_service_category(value: &str) -> bool {
    SERVICES.iter().any(|o| o.value == value)
}

/// What the frontend needs to render the budget select and service chips.
#[derive(Debug, Clone, Serialize)]
pub struct ContactOptions {
    pub budgets: &'static [ContactOption],
    pub services: &'static [ContactOption],
}

pub fn contact_options() -> ContactOptions {
    ContactOptions {
        budgets: BUDGET_OPTIONS,
        services: SERVICES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_configured_values_only() {
        assert!(is_budget_tier("5k-10k"));
        assert!(is_budget_tier("25k+"));
        assert!(!is_budget_tier(""));
        assert!(!is_budget_tier("$5,000 - $10,000"));

        assert!(is_service_category("devops"));
        assert!(!is_service_category("DevOps"));
    }

    #[test]
    fn option_values_are_unique() {
        for list in [BUDGET_OPTIONS, SERVICES] {
            let mut values: Vec<_> = list.iter().map(|o| o.value).collect();
            values.sort_unstable();
            values.dedup();
            assert_eq!(values.len(), list.len());
        }
    }
}
