//! Section splitting.

use super::SECTION_SEPARATOR;
use crate::model::Section;

/// Iterator over the sections of a document.
#[derive(Debug, Clone)]
pub struct Sections<'a> {
    inner: std::str::Split<'a, &'static str>,
    index: usize,
}

impl<'a> Iterator for Sections<'a> {
    type Item = Section<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.inner.next()?;
        let section = Section::new(self.index, text);
        self.index += 1;
        Some(section)
    }
}

/// Split a document on every occurrence of `---`.
///
/// Always yields at least one section; an empty document yields one empty
/// section. Order is preserved and no text other than the separators is
/// dropped, so [`join_sections`] restores the input exactly.
pub fn split_sections(document: &str) -> Sections<'_> {
    Sections {
        inner: document.split(SECTION_SEPARATOR),
        index: 0,
    }
}

/// Concatenate section texts with `---` between them.
pub fn join_sections<'a, I>(sections: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    sections
        .into_iter()
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR)
}
