//! JSON numbering plan loader.
//!
//! # Format
//!
//! ```json
//! {
//!   "version": "2024.10",
//!   "area_codes": { "2": { "03": 4 }, "3": { "090": 4 } },
//!   "digit11": ["090"],
//!   "digit14": [],
//!   "variable_length": {},
//!   "not_landline": { "090": "mobile" },
//!   "landline_ranges": { "03": [[3100, 3999]] },
//!   "service_ranges": { "090": { "ranges": [[1000, 9999]], "excluded": [] } }
//! }
//! ```
//!
//! A range entry is either a plain list of `[min, max]` pairs or an object
//! with `ranges` and `excluded`.

use super::{AreaCode, LocalExchangeRange, NumberingPlan, RangeList};
use super::{MAX_AREA_CODE_DIGITS, MAX_LOCAL_EXCHANGE_DIGITS, MIN_AREA_CODE_DIGITS};
use crate::category::{LengthRule, NumberCategory};
use crate::error::PlanError;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlanFile {
    version: String,
    area_codes: BTreeMap<String, BTreeMap<String, usize>>,
    #[serde(default)]
    digit11: Vec<String>,
    #[serde(default)]
    digit14: Vec<String>,
    #[serde(default)]
    variable_length: BTreeMap<String, [usize; 2]>,
    #[serde(default)]
    not_landline: BTreeMap<String, NumberCategory>,
    #[serde(default)]
    landline_ranges: BTreeMap<String, RangeEntry>,
    #[serde(default)]
    service_ranges: BTreeMap<String, RangeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RangeEntry {
    Plain(Vec<[u32; 2]>),
    Detailed {
        ranges: Vec<[u32; 2]>,
        #[serde(default)]
        excluded: Vec<u32>,
    },
}

fn invalid(msg: impl Into<String>) -> PlanError {
    PlanError::InvalidPlan(msg.into())
}

/// Parses and validates a JSON numbering plan.
pub(super) fn parse(json: &str) -> Result<NumberingPlan, PlanError> {
    let file: PlanFile = serde_json::from_str(json)
        .map_err(|e| PlanError::Parse(format!("JSON parse error: {}", e)))?;
    compile(file)
}

fn compile(file: PlanFile) -> Result<NumberingPlan, PlanError> {
    // code -> local exchange digit count
    let mut digits: HashMap<String, usize> = HashMap::new();

    for (group, codes) in &file.area_codes {
        let length: usize = group
            .parse()
            .map_err(|_| invalid(format!("area code group '{}' is not a length", group)))?;
        if !(MIN_AREA_CODE_DIGITS..=MAX_AREA_CODE_DIGITS).contains(&length) {
            return Err(invalid(format!(
                "area code length {} outside {}..={}",
                length, MIN_AREA_CODE_DIGITS, MAX_AREA_CODE_DIGITS
            )));
        }

        for (code, &count) in codes {
            if code.len() != length || !code.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid(format!(
                    "area code '{}' is not {} ASCII digits",
                    code, length
                )));
            }
            if !code.starts_with('0') {
                return Err(invalid(format!("area code '{}' must start with 0", code)));
            }
            if count == 0 || count > MAX_LOCAL_EXCHANGE_DIGITS {
                return Err(invalid(format!(
                    "area code {} has a local exchange of {} digits",
                    code, count
                )));
            }
            digits.insert(code.clone(), count);
        }
    }

    let known = |code: &str, table: &str| -> Result<(), PlanError> {
        if digits.contains_key(code) {
            Ok(())
        } else {
            Err(invalid(format!("{} lists unknown area code '{}'", table, code)))
        }
    };

    let mut rules: HashMap<String, LengthRule> = HashMap::new();
    let mut assign_rule = |code: &str, rule: LengthRule| -> Result<(), PlanError> {
        if rules.insert(code.to_string(), rule).is_some() {
            return Err(invalid(format!(
                "area code {} has more than one length rule",
                code
            )));
        }
        Ok(())
    };

    for code in &file.digit11 {
        known(code, "digit11")?;
        assign_rule(code, LengthRule::Exact(11))?;
    }
    for code in &file.digit14 {
        known(code, "digit14")?;
        assign_rule(code, LengthRule::Exact(14))?;
    }
    for (code, &[min, max]) in &file.variable_length {
        known(code, "variable_length")?;
        if min == 0 || min > max {
            return Err(invalid(format!(
                "area code {} has an empty length range {}..={}",
                code, min, max
            )));
        }
        assign_rule(code, LengthRule::Between { min, max })?;
    }

    for (code, category) in &file.not_landline {
        known(code, "not_landline")?;
        if *category == NumberCategory::Landline {
            return Err(invalid(format!(
                "not_landline lists area code {} with category landline",
                code
            )));
        }
    }
    for code in rules.keys() {
        if !file.not_landline.contains_key(code) {
            return Err(invalid(format!(
                "area code {} has a special length rule but is listed as a landline",
                code
            )));
        }
    }

    let mut ranges: HashMap<String, RangeList> = HashMap::new();
    for (code, entry) in &file.landline_ranges {
        known(code, "landline_ranges")?;
        if file.not_landline.contains_key(code) {
            return Err(invalid(format!(
                "landline_ranges lists non-landline area code {}",
                code
            )));
        }
        ranges.insert(code.clone(), range_list(code, entry)?);
    }
    for (code, entry) in &file.service_ranges {
        known(code, "service_ranges")?;
        if !file.not_landline.contains_key(code) {
            return Err(invalid(format!(
                "service_ranges lists landline area code {}",
                code
            )));
        }
        ranges.insert(code.clone(), range_list(code, entry)?);
    }

    let mut by_length: [HashMap<String, AreaCode>; MAX_AREA_CODE_DIGITS - MIN_AREA_CODE_DIGITS + 1] =
        std::array::from_fn(|_| HashMap::new());

    for (code, local_exchange_digits) in digits {
        let length_rule = rules.get(&code).copied().unwrap_or_default();
        if code.len() + local_exchange_digits > length_rule.min() {
            return Err(invalid(format!(
                "area code {} with a {}-digit local exchange cannot fit in {} digits",
                code,
                local_exchange_digits,
                length_rule.min()
            )));
        }

        let category = file
            .not_landline
            .get(&code)
            .copied()
            .unwrap_or(NumberCategory::Landline);
        let entry = AreaCode {
            ranges: ranges.remove(&code),
            code: code.clone(),
            local_exchange_digits,
            category,
            length_rule,
        };
        by_length[code.len() - MIN_AREA_CODE_DIGITS].insert(code, entry);
    }

    Ok(NumberingPlan {
        version: file.version,
        by_length,
    })
}

fn range_list(code: &str, entry: &RangeEntry) -> Result<RangeList, PlanError> {
    let (pairs, excluded) = match entry {
        RangeEntry::Plain(pairs) => (pairs, &[][..]),
        RangeEntry::Detailed { ranges, excluded } => (ranges, excluded.as_slice()),
    };

    let mut ranges = Vec::with_capacity(pairs.len());
    for &[min, max] in pairs {
        if min > max {
            return Err(invalid(format!(
                "area code {} has an inverted range [{}, {}]",
                code, min, max
            )));
        }
        ranges.push(LocalExchangeRange::new(min, max));
    }

    let list = RangeList::new(ranges, excluded.to_vec());
    if let Some((a, b)) = list.first_overlap() {
        return Err(invalid(format!(
            "area code {} has overlapping ranges [{}, {}] and [{}, {}]",
            code, a.min, a.max, b.min, b.max
        )));
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "version": "test",
        "area_codes": { "2": { "03": 4 }, "3": { "090": 4 } },
        "digit11": ["090"],
        "not_landline": { "090": "mobile" },
        "landline_ranges": { "03": [[3100, 3999]] },
        "service_ranges": { "090": { "ranges": [[1000, 9999]], "excluded": [5555] } }
    }"#;

    fn err_of(json: &str) -> String {
        match parse(json) {
            Ok(_) => panic!("expected an invalid plan"),
            Err(e) => e.to_string(),
        }
    }

    #[test]
    fn test_parse_minimal() {
        let plan = parse(MINIMAL).unwrap();
        assert_eq!(plan.version(), "test");
        assert_eq!(plan.len(), 2);

        let tokyo = plan.lookup("03").unwrap();
        assert_eq!(tokyo.local_exchange_digits(), 4);
        assert_eq!(tokyo.category(), NumberCategory::Landline);
        assert_eq!(tokyo.length_rule(), LengthRule::Exact(10));

        let mobile = plan.lookup("090").unwrap();
        assert_eq!(mobile.category(), NumberCategory::Mobile);
        assert_eq!(mobile.length_rule(), LengthRule::Exact(11));
        assert!(!mobile.ranges().unwrap().contains(5555));
    }

    #[test]
    fn test_not_landline_rejects_landline_category() {
        let json = r#"{
            "version": "test",
            "area_codes": { "3": { "090": 4 } },
            "digit11": ["090"],
            "not_landline": { "090": "landline" },
            "service_ranges": { "090": [[1000, 9999]] }
        }"#;
        assert!(matches!(parse(json), Err(PlanError::InvalidPlan(_))));
        assert!(err_of(json).contains("090 with category landline"));
    }

    #[test]
    fn test_parse_error() {
        let err = parse("not json").unwrap_err();
        assert!(matches!(err, PlanError::Parse(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = parse(r#"{"version": "x", "area_codes": {}, "bogus": 1}"#).unwrap_err();
        assert!(matches!(err, PlanError::Parse(_)));
    }

    #[test]
    fn test_group_length_mismatch() {
        let msg = err_of(r#"{"version": "x", "area_codes": { "3": { "03": 4 } }}"#);
        assert!(msg.contains("is not 3 ASCII digits"), "{}", msg);
    }

    #[test]
    fn test_area_code_must_start_with_zero() {
        let msg = err_of(r#"{"version": "x", "area_codes": { "2": { "13": 4 } }}"#);
        assert!(msg.contains("must start with 0"), "{}", msg);
    }

    #[test]
    fn test_unknown_code_in_table() {
        let msg = err_of(
            r#"{"version": "x", "area_codes": { "2": { "03": 4 } }, "digit11": ["090"]}"#,
        );
        assert!(msg.contains("unknown area code '090'"), "{}", msg);
    }

    #[test]
    fn test_special_rule_requires_not_landline() {
        let msg = err_of(
            r#"{"version": "x", "area_codes": { "3": { "090": 4 } }, "digit11": ["090"]}"#,
        );
        assert!(msg.contains("listed as a landline"), "{}", msg);
    }

    #[test]
    fn test_two_length_rules_rejected() {
        let msg = err_of(
            r#"{"version": "x", "area_codes": { "3": { "090": 4 } },
                "digit11": ["090"], "digit14": ["090"],
                "not_landline": { "090": "mobile" }}"#,
        );
        assert!(msg.contains("more than one length rule"), "{}", msg);
    }

    #[test]
    fn test_local_exchange_must_fit() {
        let msg = err_of(
            r#"{"version": "x", "area_codes": { "3": { "091": 4 } },
                "variable_length": { "091": [6, 13] },
                "not_landline": { "091": "special_connection" }}"#,
        );
        assert!(msg.contains("cannot fit in 6 digits"), "{}", msg);
    }

    #[test]
    fn test_overlapping_ranges_rejected() {
        let msg = err_of(
            r#"{"version": "x", "area_codes": { "2": { "03": 4 } },
                "landline_ranges": { "03": [[3100, 3999], [3500, 4100]] }}"#,
        );
        assert!(msg.contains("overlapping ranges"), "{}", msg);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let msg = err_of(
            r#"{"version": "x", "area_codes": { "2": { "03": 4 } },
                "landline_ranges": { "03": [[3999, 3100]] }}"#,
        );
        assert!(msg.contains("inverted range"), "{}", msg);
    }

    #[test]
    fn test_service_ranges_on_landline_rejected() {
        let msg = err_of(
            r#"{"version": "x", "area_codes": { "2": { "03": 4 } },
                "service_ranges": { "03": [[3100, 3999]] }}"#,
        );
        assert!(msg.contains("landline area code 03"), "{}", msg);
    }
}
