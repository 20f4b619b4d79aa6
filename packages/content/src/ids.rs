use crate::document::Document;
use crc32fast::Hasher;

/// Derive a stable id seed from a page identifier using CRC32.
pub fn page_seed(page_id: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(page_id.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for sections and elements within one page.
///
/// Ids are `<seed>-<n>` with a per-generator counter, so a generator never
/// hands out the same id twice. Tests use [`IdGenerator::from_seed`] for
/// deterministic ids.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(page_id: &str) -> Self {
        Self {
            seed: page_seed(page_id),
            count: 0,
        }
    }

    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Generator that continues after the ids already present in a
    /// document. A reopened page keeps minting from the same seed, so the
    /// counter must start past the largest `<seed>-n` suffix in the tree
    /// or fresh ids would collide with stored ones.
    pub fn resume(page_id: &str, document: &Document) -> Self {
        let seed = page_seed(page_id);
        let count = highest_suffix(&seed, document);
        Self { seed, count }
    }

    /// Generate the next sequential id.
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

/// Largest `<seed>-n` counter suffix over every section and element id.
fn highest_suffix(seed: &str, document: &Document) -> u32 {
    document
        .sections
        .iter()
        .flat_map(|section| {
            std::iter::once(section.id.as_str())
                .chain(section.elements.iter().map(|element| element.id.as_str()))
        })
        .filter_map(|id| {
            id.strip_prefix(seed)?
                .strip_prefix('-')?
                .parse::<u32>()
                .ok()
        })
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Element, ElementContent, Section, SectionKind};

    #[test]
    fn test_page_seed_is_stable() {
        let a = page_seed("home");
        let b = page_seed("home");
        assert_eq!(a, b);

        let c = page_seed("faq");
        assert_ne!(a, c);
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = IdGenerator::from_seed("test");

        assert_eq!(ids.new_id(), "test-1");
        assert_eq!(ids.new_id(), "test-2");
        assert_eq!(ids.new_id(), "test-3");
    }

    #[test]
    fn test_resume_continues_past_stored_ids() {
        let seed = page_seed("home");
        let mut section = Section::new(format!("{}-1", seed), SectionKind::Hero);
        section.elements.push(Element::new(
            format!("{}-3", seed),
            ElementContent::Spacer,
        ));
        let doc = Document {
            sections: vec![section],
        };

        let mut ids = IdGenerator::resume("home", &doc);

        // Counter picks up after the highest suffix (3), not at 1
        assert_eq!(ids.new_id(), format!("{}-4", seed));
        assert_eq!(ids.new_id(), format!("{}-5", seed));
    }

    #[test]
    fn test_resume_ignores_foreign_ids() {
        // Ids from another seed (or hand-written ones) don't advance the
        // counter
        let doc = Document {
            sections: vec![
                Section::new("other-9".to_string(), SectionKind::Grid),
                Section::new("not-a-number".to_string(), SectionKind::Custom),
            ],
        };

        let mut ids = IdGenerator::resume("home", &doc);
        assert_eq!(ids.new_id(), format!("{}-1", page_seed("home")));
    }

    #[test]
    fn test_resume_on_empty_document_starts_at_one() {
        let mut ids = IdGenerator::resume("home", &Document::new());
        assert_eq!(ids.new_id(), format!("{}-1", page_seed("home")));
    }

    #[test]
    fn test_seed_prefixes_every_id() {
        let mut ids = IdGenerator::new("home");
        let seed = ids.seed().to_string();

        assert!(ids.new_id().starts_with(&seed));
        assert!(ids.new_id().starts_with(&seed));
    }
}
