//! Structural checks over GraphQL documents.
//!
//! This is not a GraphQL parser. It splits a document into top-level
//! definitions by brace depth and reads just enough of each one to answer:
//!
//! - which variables an operation declares and which it references,
//! - which fragments are defined and which are spread,
//! - whether every `pageInfo` selection carries the full cursor set,
//! - whether a fragment name has the same selection in every document.
//!
//! It knows nothing about the remote schema; a document that passes here can
//! still be rejected by the server.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static OPERATION_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(query|mutation|subscription)\b\s*([A-Za-z_]\w*)?\s*(?:\((.*)\))?\s*$")
        .expect("Invalid regex")
});

static FRAGMENT_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^fragment\s+([A-Za-z_]\w*)\s+on\s+([A-Za-z_]\w*)$").expect("Invalid regex")
});

static VARIABLE_DEFINITION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([A-Za-z_]\w*)\s*:").expect("Invalid regex"));

static VARIABLE_REFERENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([A-Za-z_]\w*)").expect("Invalid regex"));

static SPREAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\.\.\s*([A-Za-z_]\w*)").expect("Invalid regex"));

static PAGE_INFO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bpageInfo\s*\{").expect("Invalid regex"));

/// Fields every `pageInfo` selection must request.
pub const PAGE_INFO_FIELDS: [&str; 4] =
    ["hasNextPage", "hasPreviousPage", "startCursor", "endCursor"];

/// Kind of executable operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Read-only query.
    Query,
    /// State-changing mutation.
    Mutation,
    /// Long-lived subscription.
    Subscription,
}

impl OperationKind {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(Self::Query),
            "mutation" => Some(Self::Mutation),
            "subscription" => Some(Self::Subscription),
            _ => None,
        }
    }

    /// GraphQL keyword for this kind.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.keyword())
    }
}

/// A document that cannot be split into definitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// Opening and closing braces do not pair up.
    #[error("unbalanced braces")]
    UnbalancedBraces,
    /// A definition header that is neither an operation nor a fragment.
    #[error("unrecognised definition: {0}")]
    UnrecognisedDefinition(String),
    /// Text after the last definition.
    #[error("trailing text after last definition: {0}")]
    TrailingText(String),
}

/// A problem found in one document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintIssue {
    /// Document could not be outlined.
    #[error("{0}")]
    Syntax(#[from] DocumentError),
    /// Variable declared but never used.
    #[error("operation {operation} declares ${variable} but never uses it")]
    UnusedVariable {
        /// Operation name.
        operation: String,
        /// Variable name without `$`.
        variable: String,
    },
    /// Variable used but never declared.
    #[error("operation {operation} uses ${variable} without declaring it")]
    UndeclaredVariable {
        /// Operation name.
        operation: String,
        /// Variable name without `$`.
        variable: String,
    },
    /// Spread of a fragment the document does not define.
    #[error("fragment {0} is spread but not defined")]
    UnknownFragment(String),
    /// Fragment defined but never spread.
    #[error("fragment {0} is defined but never spread")]
    UnusedFragment(String),
    /// Same fragment name defined twice in one document.
    #[error("fragment {0} is defined more than once")]
    DuplicateFragment(String),
    /// A `pageInfo` selection missing cursor fields.
    #[error("pageInfo selection in {operation} is missing {missing:?}")]
    IncompletePageInfo {
        /// Operation name.
        operation: String,
        /// Fields from [`PAGE_INFO_FIELDS`] that are absent.
        missing: Vec<&'static str>,
    },
    /// Same fragment name selects different fields in another document.
    #[error("fragment {name} differs from its definition in {first_seen_in}")]
    DivergentFragment {
        /// Fragment name.
        name: String,
        /// Label of the document where the fragment was first seen.
        first_seen_in: String,
    },
}

/// An executable operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationOutline {
    /// Operation kind.
    pub kind: OperationKind,
    /// Operation name; `None` for anonymous operations.
    pub name: Option<String>,
    /// Variables declared in the header.
    pub declared: BTreeSet<String>,
    /// Variables referenced in the selection set.
    pub referenced: BTreeSet<String>,
    /// Fragments spread directly in the selection set.
    pub spreads: BTreeSet<String>,
    body: String,
}

impl OperationOutline {
    /// Name used in lint messages.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<anonymous>")
    }
}

/// A fragment definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentOutline {
    /// Fragment name.
    pub name: String,
    /// Type condition (`on Type`).
    pub type_condition: String,
    /// Selection set with whitespace collapsed.
    pub selection: String,
    /// Variables referenced in the selection set.
    pub referenced: BTreeSet<String>,
    /// Fragments spread directly in the selection set.
    pub spreads: BTreeSet<String>,
}

/// Top-level structure of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    /// Operations in document order.
    pub operations: Vec<OperationOutline>,
    /// Fragments in document order.
    pub fragments: Vec<FragmentOutline>,
}

impl Outline {
    /// Fragment definition by name (first one if duplicated).
    #[must_use]
    pub fn fragment(&self, name: &str) -> Option<&FragmentOutline> {
        self.fragments.iter().find(|f| f.name == name)
    }

    /// Variables referenced by an operation, including through fragments.
    #[must_use]
    pub fn variables_used_by(&self, operation: &OperationOutline) -> BTreeSet<String> {
        let mut used = operation.referenced.clone();
        for name in self.spread_closure(&operation.spreads) {
            if let Some(fragment) = self.fragment(&name) {
                used.extend(fragment.referenced.iter().cloned());
            }
        }
        used
    }

    /// Every fragment reachable from `roots`, including the roots.
    #[must_use]
    pub fn spread_closure(&self, roots: &BTreeSet<String>) -> BTreeSet<String> {
        let mut reached = BTreeSet::new();
        let mut pending: Vec<String> = roots.iter().cloned().collect();

        while let Some(name) = pending.pop() {
            if !reached.insert(name.clone()) {
                continue;
            }
            if let Some(fragment) = self.fragment(&name) {
                pending.extend(fragment.spreads.iter().cloned());
            }
        }
        reached
    }
}

/// Split a document into operations and fragments.
///
/// # Errors
///
/// Returns a [`DocumentError`] when braces do not balance or a definition
/// header is not recognised.
pub fn outline(document: &str) -> Result<Outline, DocumentError> {
    let text = strip_comments(document);
    let mut outline = Outline::default();

    for (header, body) in split_definitions(&text)? {
        if let Some(caps) = FRAGMENT_HEADER_RE.captures(header) {
            outline.fragments.push(FragmentOutline {
                name: caps[1].to_string(),
                type_condition: caps[2].to_string(),
                selection: normalise(body),
                referenced: variable_references(body),
                spreads: spreads(body),
            });
            continue;
        }

        let (kind, name, declared) = if header.is_empty() {
            (OperationKind::Query, None, BTreeSet::new())
        } else {
            let caps = OPERATION_HEADER_RE
                .captures(header)
                .ok_or_else(|| DocumentError::UnrecognisedDefinition(header.to_string()))?;
            let kind = OperationKind::from_keyword(&caps[1])
                .ok_or_else(|| DocumentError::UnrecognisedDefinition(header.to_string()))?;
            let declared: BTreeSet<String> = caps
                .get(3)
                .map(|defs| {
                    VARIABLE_DEFINITION_RE
                        .captures_iter(defs.as_str())
                        .map(|c| c[1].to_string())
                        .collect()
                })
                .unwrap_or_default();
            (kind, caps.get(2).map(|m| m.as_str().to_string()), declared)
        };

        outline.operations.push(OperationOutline {
            kind,
            name,
            declared,
            referenced: variable_references(body),
            spreads: spreads(body),
            body: body.to_string(),
        });
    }

    Ok(outline)
}

/// Check one document for unused/undeclared variables, dangling or unused
/// fragments, duplicate fragment definitions and incomplete `pageInfo`.
#[must_use]
pub fn lint_document(document: &str) -> Vec<LintIssue> {
    let outline = match outline(document) {
        Ok(outline) => outline,
        Err(e) => return vec![LintIssue::Syntax(e)],
    };
    let mut issues = Vec::new();

    let mut defined = BTreeSet::new();
    for fragment in &outline.fragments {
        if !defined.insert(fragment.name.as_str()) {
            issues.push(LintIssue::DuplicateFragment(fragment.name.clone()));
        }
    }

    let mut spread_anywhere = BTreeSet::new();
    for operation in &outline.operations {
        spread_anywhere.extend(outline.spread_closure(&operation.spreads));

        let used = outline.variables_used_by(operation);
        for variable in operation.declared.difference(&used) {
            issues.push(LintIssue::UnusedVariable {
                operation: operation.label().to_string(),
                variable: variable.clone(),
            });
        }
        for variable in used.difference(&operation.declared) {
            issues.push(LintIssue::UndeclaredVariable {
                operation: operation.label().to_string(),
                variable: variable.clone(),
            });
        }

        let missing = missing_page_info_fields(&outline, operation);
        if !missing.is_empty() {
            issues.push(LintIssue::IncompletePageInfo {
                operation: operation.label().to_string(),
                missing,
            });
        }
    }

    for name in &spread_anywhere {
        if !defined.contains(name.as_str()) {
            issues.push(LintIssue::UnknownFragment(name.clone()));
        }
    }
    for name in defined {
        if !spread_anywhere.contains(name) {
            issues.push(LintIssue::UnusedFragment(name.to_string()));
        }
    }

    issues
}

/// A lint issue tagged with the document it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentIssue {
    /// Label of the offending document.
    pub document: String,
    /// What is wrong.
    pub issue: LintIssue,
}

impl std::fmt::Display for DocumentIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.document, self.issue)
    }
}

/// Lint a set of labelled documents, including the cross-document check
/// that a fragment name selects the same fields everywhere it is defined.
#[must_use]
pub fn lint_documents<'a, I>(documents: I) -> Vec<DocumentIssue>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut issues = Vec::new();
    let mut first_seen: BTreeMap<String, (String, String)> = BTreeMap::new();

    for (label, document) in documents {
        issues.extend(lint_document(document).into_iter().map(|issue| DocumentIssue {
            document: label.to_string(),
            issue,
        }));

        let Ok(outline) = outline(document) else {
            continue;
        };
        for fragment in outline.fragments {
            match first_seen.get(&fragment.name) {
                Some((seen_in, selection)) if *selection != fragment.selection => {
                    issues.push(DocumentIssue {
                        document: label.to_string(),
                        issue: LintIssue::DivergentFragment {
                            name: fragment.name.clone(),
                            first_seen_in: seen_in.clone(),
                        },
                    });
                }
                Some(_) => {}
                None => {
                    first_seen.insert(fragment.name, (label.to_string(), fragment.selection));
                }
            }
        }
    }

    issues
}

/// Lint every catalogue document together.
#[must_use]
pub fn lint_catalogue() -> Vec<DocumentIssue> {
    lint_documents(
        super::catalogue::CATALOGUE
            .iter()
            .map(|entry| (entry.key, entry.document())),
    )
}

fn missing_page_info_fields(
    outline: &Outline,
    operation: &OperationOutline,
) -> Vec<&'static str> {
    let mut missing = BTreeSet::new();

    let mut bodies = vec![operation.body.clone()];
    for name in outline.spread_closure(&operation.spreads) {
        if let Some(fragment) = outline.fragment(&name) {
            bodies.push(fragment.selection.clone());
        }
    }

    for body in &bodies {
        for selection in page_info_selections(body) {
            let mut fields = field_names(&selection);
            for name in spreads(&selection) {
                if let Some(fragment) = outline.fragment(&name) {
                    fields.extend(field_names(&fragment.selection));
                }
            }
            for required in PAGE_INFO_FIELDS {
                if !fields.contains(required) {
                    missing.insert(required);
                }
            }
        }
    }

    PAGE_INFO_FIELDS
        .into_iter()
        .filter(|field| missing.contains(field))
        .collect()
}

/// Selection sets of every `pageInfo { ... }` in `body`.
fn page_info_selections(body: &str) -> Vec<String> {
    PAGE_INFO_RE
        .find_iter(body)
        .filter_map(|m| {
            let open = m.end();
            let inner = balanced_block(body.get(open..)?)?;
            Some(inner.to_string())
        })
        .collect()
}

/// Text up to the brace closing an already-opened block.
fn balanced_block(rest: &str) -> Option<&str> {
    let mut depth = 1usize;
    for (i, ch) in rest.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return rest.get(..i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Top-level field names of a flat selection set.
fn field_names(selection: &str) -> BTreeSet<String> {
    selection
        .split(|c: char| c.is_whitespace() || c == '{' || c == '}')
        .filter(|token| !token.is_empty() && !token.starts_with("..."))
        .map(|token| token.trim_end_matches(':').to_string())
        .collect()
}

fn split_definitions(text: &str) -> Result<Vec<(&str, &str)>, DocumentError> {
    let mut definitions = Vec::new();
    let mut depth = 0usize;
    let mut paren_depth = 0usize;
    let mut header_start = 0;
    let mut body_start = 0;

    for (i, ch) in text.char_indices() {
        match ch {
            '(' if depth == 0 => paren_depth += 1,
            ')' if depth == 0 => {
                paren_depth = paren_depth
                    .checked_sub(1)
                    .ok_or(DocumentError::UnbalancedBraces)?;
            }
            '{' if paren_depth == 0 => {
                if depth == 0 {
                    body_start = i + 1;
                }
                depth += 1;
            }
            '}' if paren_depth == 0 => {
                depth = depth.checked_sub(1).ok_or(DocumentError::UnbalancedBraces)?;
                if depth == 0 {
                    let header = text
                        .get(header_start..body_start - 1)
                        .ok_or(DocumentError::UnbalancedBraces)?;
                    let body = text
                        .get(body_start..i)
                        .ok_or(DocumentError::UnbalancedBraces)?;
                    definitions.push((header.trim(), body));
                    header_start = i + 1;
                }
            }
            _ => {}
        }
    }

    if depth != 0 || paren_depth != 0 {
        return Err(DocumentError::UnbalancedBraces);
    }

    let trailing = text.get(header_start..).unwrap_or_default().trim();
    if !trailing.is_empty() {
        return Err(DocumentError::TrailingText(trailing.to_string()));
    }

    Ok(definitions)
}

fn strip_comments(document: &str) -> String {
    let mut out = String::with_capacity(document.len());
    for line in document.lines() {
        let mut in_string = false;
        let mut end = line.len();
        for (i, ch) in line.char_indices() {
            match ch {
                '"' => in_string = !in_string,
                '#' if !in_string => {
                    end = i;
                    break;
                }
                _ => {}
            }
        }
        out.push_str(line.get(..end).unwrap_or(line));
        out.push('\n');
    }
    out
}

fn normalise(body: &str) -> String {
    body.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn variable_references(body: &str) -> BTreeSet<String> {
    VARIABLE_REFERENCE_RE
        .captures_iter(body)
        .map(|c| c[1].to_string())
        .collect()
}

fn spreads(body: &str) -> BTreeSet<String> {
    SPREAD_RE
        .captures_iter(body)
        .map(|c| c[1].to_string())
        // `... on Type` is an inline fragment, not a spread
        .filter(|name| name != "on")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGED: &str = r"
        fragment PageInfoFragment on PageInfo {
          endCursor
          hasNextPage
          hasPreviousPage
          startCursor
        }

        # list query
        query Things($first: Int!, $after: String) {
          things(first: $first, after: $after, filter: { flag: true }) {
            edges { node { id } }
            pageInfo {
              ...PageInfoFragment
            }
          }
        }
    ";

    #[test]
    fn test_outline_reads_operation_header() {
        let outline = outline(PAGED).expect("outline");
        let operation = outline.operations.first().expect("one operation");

        assert_eq!(operation.kind, OperationKind::Query);
        assert_eq!(operation.name.as_deref(), Some("Things"));
        assert_eq!(
            operation.declared.iter().map(String::as_str).collect::<Vec<_>>(),
            ["after", "first"]
        );
        assert_eq!(operation.declared, operation.referenced);
        assert!(operation.spreads.contains("PageInfoFragment"));
    }

    #[test]
    fn test_outline_reads_fragment() {
        let outline = outline(PAGED).expect("outline");
        let fragment = outline.fragment("PageInfoFragment").expect("fragment");

        assert_eq!(fragment.type_condition, "PageInfo");
        assert_eq!(
            fragment.selection,
            "endCursor hasNextPage hasPreviousPage startCursor"
        );
    }

    #[test]
    fn test_clean_document_has_no_issues() {
        assert_eq!(lint_document(PAGED), vec![]);
    }

    #[test]
    fn test_unused_and_undeclared_variables() {
        let issues = lint_document("query Q($id: ID!, $extra: Int) { node(id: $id, x: $other) { id } }");

        assert!(issues.contains(&LintIssue::UnusedVariable {
            operation: "Q".into(),
            variable: "extra".into(),
        }));
        assert!(issues.contains(&LintIssue::UndeclaredVariable {
            operation: "Q".into(),
            variable: "other".into(),
        }));
    }

    #[test]
    fn test_variables_used_through_fragment_count() {
        let document = r"
            fragment F on Node { child(id: $id) { id } }
            query Q($id: ID!) { node { ...F } }
        ";
        assert_eq!(lint_document(document), vec![]);
    }

    #[test]
    fn test_unknown_and_unused_fragments() {
        let document = r"
            fragment Orphan on Node { id }
            query Q { node { ...Missing } }
        ";
        let issues = lint_document(document);
        assert!(issues.contains(&LintIssue::UnknownFragment("Missing".into())));
        assert!(issues.contains(&LintIssue::UnusedFragment("Orphan".into())));
    }

    #[test]
    fn test_inline_fragment_is_not_a_spread() {
        let document = "query Q { node { ... on Product { id } } }";
        assert_eq!(lint_document(document), vec![]);
    }

    #[test]
    fn test_incomplete_page_info() {
        let document = "query Q { things(first: 1) { pageInfo { hasNextPage endCursor } } }";
        assert_eq!(
            lint_document(document),
            vec![LintIssue::IncompletePageInfo {
                operation: "Q".into(),
                missing: vec!["hasPreviousPage", "startCursor"],
            }]
        );
    }

    #[test]
    fn test_unbalanced_braces() {
        assert_eq!(
            lint_document("query Q { a { b }"),
            vec![LintIssue::Syntax(DocumentError::UnbalancedBraces)]
        );
        assert_eq!(
            outline("query Q { a } }"),
            Err(DocumentError::UnbalancedBraces)
        );
    }

    #[test]
    fn test_duplicate_fragment_definition() {
        let document = r"
            fragment F on T { id }
            fragment F on T { id }
            query Q { t { ...F } }
        ";
        assert!(lint_document(document).contains(&LintIssue::DuplicateFragment("F".into())));
    }

    #[test]
    fn test_unrecognised_definition() {
        assert_eq!(
            outline("schema { query: Query }"),
            Err(DocumentError::UnrecognisedDefinition("schema".into()))
        );
        assert_eq!(
            lint_document("type Product { id: ID! }"),
            vec![LintIssue::Syntax(DocumentError::UnrecognisedDefinition(
                "type Product".into()
            ))]
        );
    }

    #[test]
    fn test_trailing_text() {
        assert_eq!(
            outline("query Q { a } leftover"),
            Err(DocumentError::TrailingText("leftover".into()))
        );
    }

    #[test]
    fn test_comments_are_ignored() {
        let document = "query Q {\n  a # uses $ghost and { brace\n}\n";
        assert_eq!(lint_document(document), vec![]);
    }

    #[test]
    fn test_divergent_fragment_across_documents() {
        let a = "fragment F on T { id name }\nquery A { t { ...F } }";
        let b = "fragment F on T { id }\nquery B { t { ...F } }";
        let c = "fragment F on T {\n  id\n  name\n}\nquery C { t { ...F } }";

        let issues = lint_documents([("a", a), ("b", b), ("c", c)]);
        assert_eq!(
            issues,
            vec![DocumentIssue {
                document: "b".into(),
                issue: LintIssue::DivergentFragment {
                    name: "F".into(),
                    first_seen_in: "a".into(),
                },
            }]
        );
    }

    #[test]
    fn test_anonymous_operation() {
        let outline = outline("query($sku: String!) { v(sku: $sku) { totalCount } }")
            .expect("outline");
        let operation = outline.operations.first().expect("operation");
        assert_eq!(operation.name, None);
        assert_eq!(operation.label(), "<anonymous>");
        assert!(operation.declared.contains("sku"));
    }
}
