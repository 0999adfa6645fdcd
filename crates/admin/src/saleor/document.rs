//! GraphQL document assembly.
//!
//! Each named fragment lives in exactly one `.graphql` file and is declared
//! once as a [`Fragment`] static with its dependencies. Operations list the
//! fragments they spread; [`compose`] pulls in the transitive closure so that
//! every document carries the same text for a given fragment name.

/// A named, reusable selection set.
#[derive(Debug)]
pub struct Fragment {
    /// Fragment name as spread in documents (`...Name`).
    pub name: &'static str,
    /// Full fragment definition source.
    pub source: &'static str,
    /// Fragments spread inside this one.
    pub requires: &'static [&'static Fragment],
}

impl Fragment {
    /// Names of this fragment and everything it pulls in, dependencies first.
    #[must_use]
    pub fn closure(&self) -> Vec<&'static str> {
        let mut seen = Vec::new();
        let mut sink = String::new();
        push_fragment(self, &mut seen, &mut sink);
        seen
    }
}

/// Build a complete document from an operation and the fragments it spreads.
///
/// Fragment definitions come first, each dependency before its dependents,
/// with every name emitted once.
#[must_use]
pub fn compose(operation: &str, fragments: &[&Fragment]) -> String {
    let mut seen = Vec::new();
    let mut document = String::new();

    for fragment in fragments {
        push_fragment(fragment, &mut seen, &mut document);
    }

    document.push_str(operation.trim());
    document.push('\n');
    document
}

fn push_fragment(fragment: &Fragment, seen: &mut Vec<&'static str>, out: &mut String) {
    let mut visiting = Vec::new();
    visit(fragment, seen, &mut visiting, out);
}

fn visit(
    fragment: &Fragment,
    seen: &mut Vec<&'static str>,
    visiting: &mut Vec<&'static str>,
    out: &mut String,
) {
    // `visiting` guards against cyclic `requires`.
    if seen.contains(&fragment.name) || visiting.contains(&fragment.name) {
        return;
    }

    visiting.push(fragment.name);
    for dependency in fragment.requires {
        visit(dependency, seen, visiting, out);
    }
    visiting.pop();

    seen.push(fragment.name);
    out.push_str(fragment.source.trim());
    out.push_str("\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    static LEAF: Fragment = Fragment {
        name: "Leaf",
        source: "fragment Leaf on Leaf {\n  id\n}\n",
        requires: &[],
    };

    static BRANCH: Fragment = Fragment {
        name: "Branch",
        source: "fragment Branch on Branch {\n  leaf {\n    ...Leaf\n  }\n}\n",
        requires: &[&LEAF],
    };

    static TRUNK: Fragment = Fragment {
        name: "Trunk",
        source: "fragment Trunk on Trunk {\n  ...Branch\n  other {\n    ...Leaf\n  }\n}\n",
        requires: &[&BRANCH, &LEAF],
    };

    #[test]
    fn test_compose_without_fragments() {
        let document = compose("query A { a }\n", &[]);
        assert_eq!(document, "query A { a }\n");
    }

    #[test]
    fn test_compose_orders_dependencies_first() {
        let document = compose("query T { trunk { ...Trunk } }", &[&TRUNK]);

        let leaf = document.find("fragment Leaf").expect("leaf present");
        let branch = document.find("fragment Branch").expect("branch present");
        let trunk = document.find("fragment Trunk").expect("trunk present");
        let query = document.find("query T").expect("query present");

        assert!(leaf < branch && branch < trunk && trunk < query);
    }

    #[test]
    fn test_compose_emits_each_fragment_once() {
        let document = compose("query T { a { ...Trunk } b { ...Leaf } }", &[&TRUNK, &LEAF]);
        assert_eq!(document.matches("fragment Leaf on").count(), 1);
        assert_eq!(document.matches("fragment Branch on").count(), 1);
    }

    #[test]
    fn test_closure() {
        assert_eq!(TRUNK.closure(), ["Leaf", "Branch", "Trunk"]);
        assert_eq!(LEAF.closure(), ["Leaf"]);
    }
}
