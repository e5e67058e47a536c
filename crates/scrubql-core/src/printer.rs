//! Single-line printer for parsed GraphQL query documents
//!
//! The printer walks the document tree and reconstructs source text in a
//! compact, log-friendly form. Every node type prints through the same
//! default traversal; the one interception point is the argument rule,
//! which consults an [`ArgumentPolicy`] before printing the value.

use std::fmt::Write;

use graphql_parser::query::{
    Definition, Directive, Document, Field, FragmentDefinition, FragmentSpread, InlineFragment,
    OperationDefinition, Selection, SelectionSet, Text, Type, TypeCondition, Value,
    VariableDefinition,
};

/// Per-argument interception point.
///
/// The printer calls [`ArgumentPolicy::replace`] for every argument it
/// prints, at both field and directive positions. Returning `Some` prints
/// the returned text in place of the argument's value; `None` prints the
/// value through the default rules.
pub trait ArgumentPolicy {
    fn replace(&self, name: &str) -> Option<&str>;
}

/// Policy that never replaces anything. Printing with this policy is the
/// default, unredacted serialization of the document.
pub struct PrintAll;

impl ArgumentPolicy for PrintAll {
    fn replace(&self, _name: &str) -> Option<&str> {
        None
    }
}

/// Print a document with the default rules (no interception).
pub fn print<'a, T: Text<'a>>(doc: &Document<'a, T>) -> String {
    print_with_policy(doc, &PrintAll).0
}

/// Print a document, consulting `policy` for every argument.
///
/// Returns the printed text together with the names of the arguments whose
/// values were replaced, in document order.
pub fn print_with_policy<'a, T, P>(doc: &Document<'a, T>, policy: &P) -> (String, Vec<String>)
where
    T: Text<'a>,
    P: ArgumentPolicy,
{
    let mut printer = Printer {
        policy,
        out: String::new(),
        replaced: Vec::new(),
    };
    printer.document(doc);
    (printer.out, printer.replaced)
}

struct Printer<'p, P: ArgumentPolicy> {
    policy: &'p P,
    out: String,
    replaced: Vec<String>,
}

impl<P: ArgumentPolicy> Printer<'_, P> {
    fn document<'a, T: Text<'a>>(&mut self, doc: &Document<'a, T>) {
        for (i, def) in doc.definitions.iter().enumerate() {
            if i > 0 {
                self.out.push(' ');
            }
            self.definition(def);
        }
    }

    fn definition<'a, T: Text<'a>>(&mut self, def: &Definition<'a, T>) {
        match def {
            Definition::Operation(op) => self.operation(op),
            Definition::Fragment(frag) => self.fragment_definition(frag),
        }
    }

    fn operation<'a, T: Text<'a>>(&mut self, op: &OperationDefinition<'a, T>) {
        match op {
            OperationDefinition::SelectionSet(set) => self.selection_set(set),
            OperationDefinition::Query(q) => self.operation_body(
                "query",
                &q.name,
                &q.variable_definitions,
                &q.directives,
                &q.selection_set,
            ),
            OperationDefinition::Mutation(m) => self.operation_body(
                "mutation",
                &m.name,
                &m.variable_definitions,
                &m.directives,
                &m.selection_set,
            ),
            OperationDefinition::Subscription(s) => self.operation_body(
                "subscription",
                &s.name,
                &s.variable_definitions,
                &s.directives,
                &s.selection_set,
            ),
        }
    }

    fn operation_body<'a, T: Text<'a>>(
        &mut self,
        keyword: &str,
        name: &Option<T::Value>,
        variable_definitions: &[VariableDefinition<'a, T>],
        directives: &[Directive<'a, T>],
        selection_set: &SelectionSet<'a, T>,
    ) {
        self.out.push_str(keyword);
        if let Some(name) = name {
            self.out.push(' ');
            self.out.push_str(name.as_ref());
        }
        if !variable_definitions.is_empty() {
            if name.is_none() {
                self.out.push(' ');
            }
            self.variable_definitions(variable_definitions);
        }
        self.directives(directives);
        self.out.push(' ');
        self.selection_set(selection_set);
    }

    fn variable_definitions<'a, T: Text<'a>>(&mut self, defs: &[VariableDefinition<'a, T>]) {
        self.out.push('(');
        for (i, def) in defs.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.out.push('$');
            self.out.push_str(def.name.as_ref());
            self.out.push_str(": ");
            self.var_type(&def.var_type);
            if let Some(default) = &def.default_value {
                self.out.push_str(" = ");
                self.value(default);
            }
        }
        self.out.push(')');
    }

    fn var_type<'a, T: Text<'a>>(&mut self, ty: &Type<'a, T>) {
        match ty {
            Type::NamedType(name) => self.out.push_str(name.as_ref()),
            Type::ListType(inner) => {
                self.out.push('[');
                self.var_type(inner);
                self.out.push(']');
            }
            Type::NonNullType(inner) => {
                self.var_type(inner);
                self.out.push('!');
            }
        }
    }

    fn selection_set<'a, T: Text<'a>>(&mut self, set: &SelectionSet<'a, T>) {
        self.out.push_str("{ ");
        for (i, item) in set.items.iter().enumerate() {
            if i > 0 {
                self.out.push(' ');
            }
            self.selection(item);
        }
        self.out.push_str(" }");
    }

    fn selection<'a, T: Text<'a>>(&mut self, selection: &Selection<'a, T>) {
        match selection {
            Selection::Field(field) => self.field(field),
            Selection::FragmentSpread(spread) => self.fragment_spread(spread),
            Selection::InlineFragment(frag) => self.inline_fragment(frag),
        }
    }

    fn field<'a, T: Text<'a>>(&mut self, field: &Field<'a, T>) {
        if let Some(alias) = &field.alias {
            self.out.push_str(alias.as_ref());
            self.out.push_str(": ");
        }
        self.out.push_str(field.name.as_ref());
        self.arguments(&field.arguments);
        self.directives(&field.directives);
        if !field.selection_set.items.is_empty() {
            self.out.push(' ');
            self.selection_set(&field.selection_set);
        }
    }

    fn fragment_spread<'a, T: Text<'a>>(&mut self, spread: &FragmentSpread<'a, T>) {
        self.out.push_str("...");
        self.out.push_str(spread.fragment_name.as_ref());
        self.directives(&spread.directives);
    }

    fn inline_fragment<'a, T: Text<'a>>(&mut self, frag: &InlineFragment<'a, T>) {
        self.out.push_str("...");
        if let Some(TypeCondition::On(ty)) = &frag.type_condition {
            self.out.push_str(" on ");
            self.out.push_str(ty.as_ref());
        }
        self.directives(&frag.directives);
        self.out.push(' ');
        self.selection_set(&frag.selection_set);
    }

    fn fragment_definition<'a, T: Text<'a>>(&mut self, frag: &FragmentDefinition<'a, T>) {
        self.out.push_str("fragment ");
        self.out.push_str(frag.name.as_ref());
        let TypeCondition::On(ty) = &frag.type_condition;
        self.out.push_str(" on ");
        self.out.push_str(ty.as_ref());
        self.directives(&frag.directives);
        self.out.push(' ');
        self.selection_set(&frag.selection_set);
    }

    fn directives<'a, T: Text<'a>>(&mut self, directives: &[Directive<'a, T>]) {
        for directive in directives {
            self.out.push_str(" @");
            self.out.push_str(directive.name.as_ref());
            self.arguments(&directive.arguments);
        }
    }

    fn arguments<'a, T: Text<'a>>(&mut self, arguments: &[(T::Value, Value<'a, T>)]) {
        if arguments.is_empty() {
            return;
        }
        self.out.push('(');
        for (i, (name, value)) in arguments.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.argument(name.as_ref(), value);
        }
        self.out.push(')');
    }

    /// The one overridable rule: a denied argument prints the policy's
    /// replacement text in place of its whole value, never descending into
    /// nested object fields.
    fn argument<'a, T: Text<'a>>(&mut self, name: &str, value: &Value<'a, T>) {
        self.out.push_str(name);
        self.out.push_str(": ");
        match self.policy.replace(name) {
            Some(replacement) => {
                self.out.push_str(replacement);
                self.replaced.push(name.to_string());
            }
            None => self.value(value),
        }
    }

    fn value<'a, T: Text<'a>>(&mut self, value: &Value<'a, T>) {
        match value {
            Value::Variable(name) => {
                self.out.push('$');
                self.out.push_str(name.as_ref());
            }
            Value::Int(n) => {
                let _ = write!(self.out, "{}", n.as_i64().unwrap_or_default());
            }
            Value::Float(f) => {
                let _ = write!(self.out, "{}", f);
            }
            Value::String(s) => self.string_value(s),
            Value::Boolean(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Null => self.out.push_str("null"),
            Value::Enum(name) => self.out.push_str(name.as_ref()),
            Value::List(items) => {
                self.out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.value(item);
                }
                self.out.push(']');
            }
            Value::Object(fields) => {
                self.out.push('{');
                for (i, (key, item)) in fields.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.out.push_str(key.as_ref());
                    self.out.push_str(": ");
                    self.value(item);
                }
                self.out.push('}');
            }
        }
    }

    fn string_value(&mut self, s: &str) {
        self.out.push('"');
        for c in s.chars() {
            match c {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                c if c.is_control() => {
                    let _ = write!(self.out, "\\u{:04x}", c as u32);
                }
                c => self.out.push(c),
            }
        }
        self.out.push('"');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_parser::query::parse_query;

    fn roundtrip(input: &str) -> String {
        let doc = parse_query::<&str>(input).unwrap();
        print(&doc)
    }

    #[test]
    fn test_basic_query() {
        assert_eq!(
            roundtrip("query { users(limit: 10) { id } }"),
            "query { users(limit: 10) { id } }"
        );
    }

    #[test]
    fn test_bare_selection_set() {
        assert_eq!(roundtrip("{ me { name } }"), "{ me { name } }");
    }

    #[test]
    fn test_named_operation_with_variables() {
        assert_eq!(
            roundtrip("query GetUser($id: ID!, $limit: Int = 10) { user(id: $id) { name } }"),
            "query GetUser($id: ID!, $limit: Int = 10) { user(id: $id) { name } }"
        );
    }

    #[test]
    fn test_anonymous_operation_with_variables() {
        assert_eq!(
            roundtrip("query ($ids: [ID!]) { nodes(ids: $ids) { id } }"),
            "query ($ids: [ID!]) { nodes(ids: $ids) { id } }"
        );
    }

    #[test]
    fn test_aliases_and_directives() {
        assert_eq!(
            roundtrip("query { current: me @include(if: true) { name } }"),
            "query { current: me @include(if: true) { name } }"
        );
    }

    #[test]
    fn test_fragments() {
        assert_eq!(
            roundtrip("query { user { ...parts ... on Admin { role } } } fragment parts on User { id name }"),
            "query { user { ...parts ... on Admin { role } } } fragment parts on User { id name }"
        );
    }

    #[test]
    fn test_value_kinds() {
        assert_eq!(
            roundtrip(r#"{ f(a: 1, b: 1.5, c: "x", d: true, e: null, g: RED, h: [1, 2], i: {j: 1, k: "y"}) }"#),
            r#"{ f(a: 1, b: 1.5, c: "x", d: true, e: null, g: RED, h: [1, 2], i: {j: 1, k: "y"}) }"#
        );
    }

    #[test]
    fn test_string_escaping() {
        let doc = parse_query::<&str>("{ f(msg: \"line\\nbreak \\\"quoted\\\"\") }").unwrap();
        assert_eq!(print(&doc), "{ f(msg: \"line\\nbreak \\\"quoted\\\"\") }");
    }

    #[test]
    fn test_mutation_and_subscription_keywords() {
        assert_eq!(
            roundtrip("mutation { ping } subscription Watch { events { id } }"),
            "mutation { ping } subscription Watch { events { id } }"
        );
    }

    #[test]
    fn test_print_all_policy_replaces_nothing() {
        let doc = parse_query::<&str>(r#"{ f(password: "x") }"#).unwrap();
        let (out, replaced) = print_with_policy(&doc, &PrintAll);
        assert_eq!(out, r#"{ f(password: "x") }"#);
        assert!(replaced.is_empty());
    }
}
