//! Sample trees for the `demo` command.

use std::fmt;

use clap::ValueEnum;
use tracing::instrument;

use crate::domain::{Tree, TreeResult};

/// Record type showing that any `Display` value can live in a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Age: {}", self.name, self.age)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleKind {
    Int,
    String,
    Person,
}

/// Builds the sample shape over six values, wired bottom-up before the root is set:
///
/// ```text
/// v0
///   v1
///     v2
///       v3
///         v5
///       v4
/// ```
#[instrument(level = "debug", skip(values))]
pub fn build_sample<T>(values: [T; 6]) -> TreeResult<Tree<T>> {
    let mut tree = Tree::new();
    let [head, child1, child2, child3, child4, child5] = values.map(|v| tree.insert(v));

    tree.add_element(Some(child3), Some(child2))?;
    tree.add_element(Some(child4), Some(child2))?;
    tree.add_element(Some(child5), Some(child3))?;
    tree.add_element(Some(child2), Some(child1))?;
    tree.add_element(Some(child1), Some(head))?;
    tree.set_root(Some(head))?;

    Ok(tree)
}

pub fn int_sample() -> TreeResult<Tree<i32>> {
    build_sample([0, 1, 2, 3, 4, 5])
}

pub fn string_sample() -> TreeResult<Tree<String>> {
    build_sample(["0", "1", "2", "3", "4", "5"].map(String::from))
}

pub fn person_sample() -> TreeResult<Tree<Person>> {
    build_sample([
        Person::new("Nick", 10),
        Person::new("Dick", 15),
        Person::new("Rick", 6),
        Person::new("Clark", 23),
        Person::new("Marty", 15),
        Person::new("Dory", 15),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_display() {
        assert_eq!(Person::new("Nick", 10).to_string(), "Name: Nick, Age: 10");
    }

    #[test]
    fn test_person_sample_shape() {
        let tree = person_sample().unwrap();
        assert_eq!(tree.depth(), 5);
        assert_eq!(
            tree.to_string().lines().nth(4),
            Some("        Name: Dory, Age: 15")
        );
    }
}
