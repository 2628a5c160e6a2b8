//! Per-field readers over a raw record that log deviations into a report.

use devraha_types::CowGender;
use serde_json::{Map, Value};

use crate::coerce::{integral_number, is_truthy, string_only, to_loose_number, to_loose_string};
use crate::gender::{match_gender, GenderMatch};
use crate::report::{DegradationKind, NormalizationReport};

/// Field access over a raw record. Non-object input reads as an empty record.
pub(crate) struct Fields<'a> {
    record: Option<&'a Map<String, Value>>,
    report: &'a mut NormalizationReport,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(raw: &'a Value, report: &'a mut NormalizationReport) -> Self {
        let record = raw.as_object();
        if record.is_none() {
            report.record("input", DegradationKind::Invalid);
        }
        Self { record, report }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.record.and_then(|record| record.get(key))
    }

    fn present(&self, key: &str) -> Option<&'a Value> {
        self.get(key).filter(|value| !value.is_null())
    }

    /// Required string: converted when not a string, `""` when absent.
    pub(crate) fn string(&mut self, key: &str) -> String {
        match self.present(key) {
            None => self.report.record(key, DegradationKind::Missing),
            Some(Value::String(_)) => {}
            Some(_) => self.report.record(key, DegradationKind::Coerced),
        }
        to_loose_string(self.get(key))
    }

    /// Boolean by truthiness.
    pub(crate) fn flag(&mut self, key: &str) -> bool {
        if self.present(key).is_some_and(|value| !value.is_boolean()) {
            self.report.record(key, DegradationKind::Coerced);
        }
        is_truthy(self.get(key))
    }

    /// String or nothing; other types are dropped.
    pub(crate) fn text(&mut self, key: &str) -> Option<String> {
        if self.present(key).is_some_and(|value| !value.is_string()) {
            self.report.record(key, DegradationKind::Invalid);
        }
        string_only(self.get(key))
    }

    /// Integral number or nothing; no conversion from other types.
    pub(crate) fn integer(&mut self, key: &str) -> Option<i64> {
        let number = integral_number(self.get(key));
        if number.is_none() && self.present(key).is_some() {
            self.report.record(key, DegradationKind::Invalid);
        }
        number
    }

    /// Forced numeric conversion, `0` for anything that does not convert.
    pub(crate) fn number(&mut self, key: &str) -> f64 {
        let number = to_loose_number(self.get(key));
        match self.present(key) {
            None | Some(Value::Number(_)) => {}
            Some(_) if number.is_finite() => self.report.record(key, DegradationKind::Coerced),
            Some(_) => self.report.record(key, DegradationKind::Invalid),
        }
        if number.is_finite() {
            number
        } else {
            0.0
        }
    }

    /// Array of strings; non-string elements are dropped, non-arrays give `[]`.
    pub(crate) fn strings(&mut self, key: &str) -> Vec<String> {
        match self.present(key) {
            Some(Value::Array(items)) => {
                if items.iter().any(|item| !item.is_string()) {
                    self.report.record(key, DegradationKind::Invalid);
                }
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            }
            Some(_) => {
                self.report.record(key, DegradationKind::Invalid);
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// Array passed through untouched, `[]` for anything else.
    pub(crate) fn values(&mut self, key: &str) -> Vec<Value> {
        match self.present(key) {
            Some(Value::Array(items)) => items.clone(),
            Some(_) => {
                self.report.record(key, DegradationKind::Invalid);
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// Canonical gender via the gender normalizer.
    pub(crate) fn gender(&mut self, key: &str) -> CowGender {
        let matched = match_gender(self.get(key));
        match matched {
            GenderMatch::Recognized(_) => {}
            GenderMatch::Unrecognized => self.report.record(key, DegradationKind::Fallback),
            GenderMatch::Missing => self.report.record(key, DegradationKind::Missing),
        }
        matched.resolve()
    }
}
