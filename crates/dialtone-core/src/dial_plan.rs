use std::collections::BTreeMap;
use std::sync::LazyLock;

/// A dial code resolved to the single country it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialCodeMatch {
    pub country_code: &'static str,
    pub dial_code: &'static str,
}

impl DialCodeMatch {
    pub const fn new(country_code: &'static str, dial_code: &'static str) -> Self {
        Self {
            country_code,
            dial_code,
        }
    }
}

/// Country tables consulted by the parser.
///
/// `dial_codes` and `area_code_lengths` are parallel tables keyed by ISO
/// 3166-1 alpha-2 code; a country missing from either one is unsupported.
/// `priority` is the order in which dial codes are tried against a number,
/// and it also decides which country a shared dial code resolves to.
#[derive(Debug, Clone)]
pub struct DialPlan {
    dial_codes: BTreeMap<&'static str, &'static str>,
    area_code_lengths: BTreeMap<&'static str, usize>,
    priority: Vec<DialCodeMatch>,
}

static BUILTIN: LazyLock<DialPlan> = LazyLock::new(|| {
    DialPlan::new(
        BTreeMap::from([
            ("US", "1"),
            ("MX", "52"),
            ("ES", "34"),
            ("PT", "351"),
            ("CA", "1"),
            ("GB", "44"),
            ("FR", "33"),
            ("DE", "49"),
            ("IT", "39"),
            ("JP", "81"),
        ]),
        BTreeMap::from([
            ("US", 3),
            ("MX", 3),
            ("ES", 3),
            ("PT", 2),
            ("CA", 3),
            ("GB", 4),
            ("FR", 1),
            ("DE", 3),
            ("IT", 3),
            ("JP", 1),
        ]),
        // "1" is shared by US and CA and always resolves to US.
        vec![
            DialCodeMatch::new("PT", "351"),
            DialCodeMatch::new("MX", "52"),
            DialCodeMatch::new("GB", "44"),
            DialCodeMatch::new("DE", "49"),
            DialCodeMatch::new("IT", "39"),
            DialCodeMatch::new("JP", "81"),
            DialCodeMatch::new("ES", "34"),
            DialCodeMatch::new("FR", "33"),
            DialCodeMatch::new("US", "1"),
        ],
    )
});

impl DialPlan {
    /// Builds a plan. `priority` is reordered longest dial code first; entries
    /// of equal length keep the order they were given in.
    pub fn new(
        dial_codes: BTreeMap<&'static str, &'static str>,
        area_code_lengths: BTreeMap<&'static str, usize>,
        mut priority: Vec<DialCodeMatch>,
    ) -> Self {
        priority.sort_by(|a, b| b.dial_code.len().cmp(&a.dial_code.len()));
        Self {
            dial_codes,
            area_code_lengths,
            priority,
        }
    }

    /// The process-wide plan covering US, MX, ES, PT, CA, GB, FR, DE, IT and JP.
    pub fn builtin() -> &'static DialPlan {
        &BUILTIN
    }

    /// Dial code for an uppercase country code.
    pub fn dial_code(&self, country_code: &str) -> Option<&'static str> {
        self.dial_codes.get(country_code).copied()
    }

    /// Area-code digit length for an uppercase country code.
    pub fn area_code_length(&self, country_code: &str) -> Option<usize> {
        self.area_code_lengths.get(country_code).copied()
    }

    /// Dial codes in the order they are tried, longest first.
    pub fn priority(&self) -> &[DialCodeMatch] {
        &self.priority
    }

    pub fn is_supported(&self, country_code: &str) -> bool {
        self.dial_codes.contains_key(country_code)
            && self.area_code_lengths.contains_key(country_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_share_keys() {
        let plan = DialPlan::builtin();
        for country in plan.dial_codes.keys() {
            assert!(
                plan.area_code_lengths.contains_key(country),
                "{country} has no area code length"
            );
        }
        for country in plan.area_code_lengths.keys() {
            assert!(plan.dial_codes.contains_key(country), "{country} has no dial code");
        }
    }

    #[test]
    fn builtin_priority_is_longest_first() {
        let lengths: Vec<usize> = DialPlan::builtin()
            .priority()
            .iter()
            .map(|m| m.dial_code.len())
            .collect();
        let mut sorted = lengths.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);
    }

    #[test]
    fn builtin_priority_agrees_with_dial_codes() {
        let plan = DialPlan::builtin();
        for m in plan.priority() {
            assert_eq!(plan.dial_code(m.country_code), Some(m.dial_code));
        }
    }

    #[test]
    fn shared_dial_code_prefers_us() {
        let shared: Vec<_> = DialPlan::builtin()
            .priority()
            .iter()
            .filter(|m| m.dial_code == "1")
            .collect();
        assert_eq!(shared, vec![&DialCodeMatch::new("US", "1")]);
    }

    #[test]
    fn lookups_are_case_sensitive_on_uppercase_keys() {
        let plan = DialPlan::builtin();
        assert_eq!(plan.dial_code("MX"), Some("52"));
        assert_eq!(plan.dial_code("mx"), None);
        assert_eq!(plan.area_code_length("GB"), Some(4));
        assert_eq!(plan.area_code_length("XX"), None);
    }

    #[test]
    fn new_orders_priority_by_length_keeping_ties_stable() {
        let plan = DialPlan::new(
            BTreeMap::new(),
            BTreeMap::new(),
            vec![
                DialCodeMatch::new("AA", "7"),
                DialCodeMatch::new("BB", "22"),
                DialCodeMatch::new("CC", "333"),
                DialCodeMatch::new("DD", "11"),
            ],
        );
        let order: Vec<&str> = plan.priority().iter().map(|m| m.country_code).collect();
        assert_eq!(order, vec!["CC", "BB", "DD", "AA"]);
    }

    #[test]
    fn country_missing_from_one_table_is_unsupported() {
        let plan = DialPlan::new(
            BTreeMap::from([("AA", "7")]),
            BTreeMap::from([("BB", 2)]),
            vec![],
        );
        assert!(!plan.is_supported("AA"));
        assert!(!plan.is_supported("BB"));
        assert!(DialPlan::builtin().is_supported("CA"));
    }
}
