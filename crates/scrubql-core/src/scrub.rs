//! Deny-list scrubbing of GraphQL argument values

use std::collections::HashSet;

use graphql_parser::query::{Document, Text, parse_query};
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::printer::{ArgumentPolicy, print_with_policy};

/// Default replacement text for denied argument values.
pub const FILTERED_VALUE: &str = "[FILTERED]";

/// Number of replacements made for one denied argument name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Redaction {
    pub name: String,
    pub count: usize,
}

/// Redacting printer for parsed GraphQL documents.
///
/// Holds the deny-listed argument names and the placeholder, both fixed at
/// construction. Matching is exact and case-sensitive; a denied argument's
/// value is replaced wholesale, whatever its kind (scalar, enum, variable,
/// list, object).
pub struct Scrubber {
    filtered_args: HashSet<String>,
    placeholder: String,
}

impl Scrubber {
    /// Create a scrubber for the given argument names, using the default
    /// placeholder.
    pub fn new<I, S>(filtered_args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            filtered_args: filtered_args.into_iter().map(Into::into).collect(),
            placeholder: FILTERED_VALUE.to_string(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Check whether an argument name is on the deny list.
    pub fn is_filtered(&self, name: &str) -> bool {
        self.filtered_args.contains(name)
    }

    /// Print a parsed document with denied argument values replaced.
    pub fn print<'a, T: Text<'a>>(&self, doc: &Document<'a, T>) -> String {
        print_with_policy(doc, self).0
    }

    /// Print a parsed document, also reporting which argument names were
    /// redacted and how often, in document order.
    pub fn print_with_report<'a, T: Text<'a>>(
        &self,
        doc: &Document<'a, T>,
    ) -> (String, Vec<Redaction>) {
        let (out, replaced) = print_with_policy(doc, self);
        let mut report: Vec<Redaction> = Vec::new();
        for name in replaced {
            match report.iter_mut().find(|r| r.name == name) {
                Some(r) => r.count += 1,
                None => report.push(Redaction { name, count: 1 }),
            }
        }
        (out, report)
    }

    /// Parse a raw query string and print it scrubbed.
    ///
    /// Parse failures surface as [`crate::Error::Parse`]; callers at the
    /// logging boundary catch them and keep the original value.
    pub fn scrub(&self, query: &str) -> Result<String> {
        let doc = parse_query::<&str>(query)?;
        Ok(self.print(&doc))
    }

    /// Parse and scrub, returning the redaction report alongside the text.
    pub fn scrub_with_report(&self, query: &str) -> Result<(String, Vec<Redaction>)> {
        let doc = parse_query::<&str>(query)?;
        Ok(self.print_with_report(&doc))
    }
}

impl ArgumentPolicy for Scrubber {
    fn replace(&self, name: &str) -> Option<&str> {
        if self.filtered_args.contains(name) {
            Some(&self.placeholder)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::print;

    fn scrubber() -> Scrubber {
        Scrubber::new(["password"])
    }

    #[test]
    fn test_scalar_argument_redacted() {
        let out = scrubber()
            .scrub(r#"query { user(password: "secret123", id: 5) { name } }"#)
            .unwrap();
        assert_eq!(out, "query { user(password: [FILTERED], id: 5) { name } }");
        assert!(!out.contains("secret123"));
    }

    #[test]
    fn test_mutation_argument_redacted() {
        let out = scrubber()
            .scrub(r#"mutation { createUser(password: "x", email: "a@b.com") { id } }"#)
            .unwrap();
        assert_eq!(
            out,
            r#"mutation { createUser(password: [FILTERED], email: "a@b.com") { id } }"#
        );
    }

    #[test]
    fn test_no_match_is_default_print() {
        let input = "query { users(limit: 10) { id } }";
        let doc = graphql_parser::query::parse_query::<&str>(input).unwrap();
        assert_eq!(scrubber().print(&doc), print(&doc));
    }

    #[test]
    fn test_case_sensitive_match() {
        let out = scrubber()
            .scrub(r#"query { user(Password: "x") { name } }"#)
            .unwrap();
        assert_eq!(out, r#"query { user(Password: "x") { name } }"#);
    }

    #[test]
    fn test_object_value_replaced_wholesale() {
        let out = scrubber()
            .scrub(r#"{ login(password: {old: "a", new: "b"}) }"#)
            .unwrap();
        assert_eq!(out, "{ login(password: [FILTERED]) }");
    }

    #[test]
    fn test_nested_object_field_not_descended() {
        // `password` here is an object field, not an argument; only
        // argument positions are policed.
        let input = r#"{ login(credentials: {password: "a"}) }"#;
        let out = scrubber().scrub(input).unwrap();
        assert_eq!(out, r#"{ login(credentials: {password: "a"}) }"#);
    }

    #[test]
    fn test_variable_value_replaced() {
        let out = scrubber()
            .scrub("query ($pw: String!) { login(password: $pw) }")
            .unwrap();
        assert_eq!(out, "query ($pw: String!) { login(password: [FILTERED]) }");
    }

    #[test]
    fn test_directive_argument_redacted() {
        let scrubber = Scrubber::new(["token"]);
        let out = scrubber
            .scrub(r#"{ me @auth(token: "abc") { name } }"#)
            .unwrap();
        assert_eq!(out, "{ me @auth(token: [FILTERED]) { name } }");
    }

    #[test]
    fn test_idempotent() {
        let once = scrubber()
            .scrub(r#"query { user(password: "secret123") { name } }"#)
            .unwrap();
        let twice = scrubber().scrub(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_custom_placeholder() {
        let scrubber = Scrubber::new(["password"]).with_placeholder("\"***\"");
        let out = scrubber.scrub(r#"{ login(password: "x") }"#).unwrap();
        assert_eq!(out, r#"{ login(password: "***") }"#);
    }

    #[test]
    fn test_report_counts() {
        let scrubber = Scrubber::new(["password", "token"]);
        let (out, report) = scrubber
            .scrub_with_report(r#"{ a(password: "x") b(password: "y", token: "z") }"#)
            .unwrap();
        assert_eq!(
            out,
            "{ a(password: [FILTERED]) b(password: [FILTERED], token: [FILTERED]) }"
        );
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].name, "password");
        assert_eq!(report[0].count, 2);
        assert_eq!(report[1].name, "token");
        assert_eq!(report[1].count, 1);
    }

    #[test]
    fn test_parse_failure_surfaces() {
        assert!(scrubber().scrub("query {{ nope").is_err());
    }
}
