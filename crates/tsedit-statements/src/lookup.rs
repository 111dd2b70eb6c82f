//! First-match lookups by name or predicate.

use crate::error::{EntityKind, ManipulationError, Result};
use crate::nodes::TypedNode;
use crate::source_file::SourceFile;

/// What a `get_*` lookup matches on.
pub enum NameOrPredicate<'p, T> {
    /// The declared name. Nameless declarations never match.
    Name(&'p str),
    Predicate(&'p dyn Fn(&SourceFile, T) -> bool),
}

impl<'p, T> From<&'p str> for NameOrPredicate<'p, T> {
    fn from(name: &'p str) -> Self {
        NameOrPredicate::Name(name)
    }
}

impl<'p, T> From<&'p String> for NameOrPredicate<'p, T> {
    fn from(name: &'p String) -> Self {
        NameOrPredicate::Name(name)
    }
}

impl<T> NameOrPredicate<'_, T> {
    pub(crate) fn not_found(&self, entity: EntityKind) -> ManipulationError {
        match self {
            NameOrPredicate::Name(name) => entity.named(name),
            NameOrPredicate::Predicate(_) => entity.matching_condition(),
        }
    }
}

pub(crate) fn find<T>(items: impl IntoIterator<Item = T>, predicate: impl FnMut(&T) -> bool) -> Option<T> {
    items.into_iter().find(predicate)
}

pub(crate) fn find_or_throw<T>(
    items: impl IntoIterator<Item = T>,
    entity: EntityKind,
    predicate: impl FnMut(&T) -> bool,
) -> Result<T> {
    find(items, predicate).ok_or_else(|| entity.matching_condition())
}

pub(crate) fn find_by_name_or_predicate<T: TypedNode>(
    file: &SourceFile,
    items: impl IntoIterator<Item = T>,
    name_or_predicate: &NameOrPredicate<'_, T>,
) -> Option<T> {
    match name_or_predicate {
        NameOrPredicate::Name(name) => find(items, |item| item.matches_name(file, name)),
        NameOrPredicate::Predicate(predicate) => find(items, |&item| predicate(file, item)),
    }
}

pub(crate) fn find_by_name_or_predicate_or_throw<T: TypedNode>(
    file: &SourceFile,
    items: impl IntoIterator<Item = T>,
    name_or_predicate: &NameOrPredicate<'_, T>,
) -> Result<T> {
    find_by_name_or_predicate(file, items, name_or_predicate)
        .ok_or_else(|| name_or_predicate.not_found(T::ENTITY))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_returns_the_first_match() {
        assert_eq!(find([1, 2, 3, 4], |&n| n % 2 == 0), Some(2));
        assert_eq!(find([1, 3], |&n| n % 2 == 0), None);
    }

    #[test]
    fn find_or_throw_names_the_entity() {
        let error = find_or_throw([1, 3], EntityKind::Class, |&n| n > 5).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Expected to find class matching the provided condition."
        );
    }
}
