//! Per-field tagging policy.
//!
//! Which derived sets a value feeds, and through which expansion, depends only
//! on the field it arrived in. The table is deliberately asymmetric:
//!
//! | field               | keywords | tags            | transliteration tags |
//! |---------------------|----------|-----------------|----------------------|
//! | title               | keyword  | transliteration | transliteration      |
//! | description         | keyword  |                 |                      |
//! | content             |          |                 |                      |
//! | category            | keyword  | transliteration |                      |
//! | subcategory         | keyword  | transliteration |                      |
//! | keyword             | keyword  |                 |                      |
//! | tag                 |          | transliteration |                      |
//! | transliteration tag |          |                 | verbatim             |
//! | synonym             | keyword  | transliteration | transliteration      |
//! | region              |          | transliteration |                      |
//! | metadata value      | keyword  | transliteration |                      |

use lexitag_types::{Expansion, FieldKind, TagTarget};

/// Expansion used for each derived set, `None` when the field does not feed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPolicy {
    /// Field this row applies to.
    pub kind: FieldKind,
    /// Feed into `keywords`.
    pub keywords: Option<Expansion>,
    /// Feed into `tags`.
    pub tags: Option<Expansion>,
    /// Feed into `transliteration_tags`.
    pub transliteration_tags: Option<Expansion>,
}

impl FieldPolicy {
    const fn row(
        kind: FieldKind,
        keywords: Option<Expansion>,
        tags: Option<Expansion>,
        transliteration_tags: Option<Expansion>,
    ) -> Self {
        Self {
            kind,
            keywords,
            tags,
            transliteration_tags,
        }
    }

    /// Expansion for `target`, if this field feeds it.
    #[inline]
    pub const fn expansion(&self, target: TagTarget) -> Option<Expansion> {
        match target {
            TagTarget::Keywords => self.keywords,
            TagTarget::Tags => self.tags,
            TagTarget::TransliterationTags => self.transliteration_tags,
        }
    }

    /// `(target, expansion)` pairs this field feeds, in a fixed order.
    pub fn fan_out(&self) -> impl Iterator<Item = (TagTarget, Expansion)> + '_ {
        TARGETS
            .iter()
            .filter_map(move |&target| self.expansion(target).map(|e| (target, e)))
    }
}

const KW: Option<Expansion> = Some(Expansion::Keyword);
const TR: Option<Expansion> = Some(Expansion::Transliteration);
const VB: Option<Expansion> = Some(Expansion::Verbatim);
const NO: Option<Expansion> = None;

const TARGETS: [TagTarget; 3] = [
    TagTarget::Keywords,
    TagTarget::Tags,
    TagTarget::TransliterationTags,
];

/// The policy table, indexed by `FieldKind as usize`.
pub static POLICY: [FieldPolicy; 11] = [
    FieldPolicy::row(FieldKind::Title, KW, TR, TR),
    FieldPolicy::row(FieldKind::Description, KW, NO, NO),
    FieldPolicy::row(FieldKind::Content, NO, NO, NO),
    FieldPolicy::row(FieldKind::Category, KW, TR, NO),
    FieldPolicy::row(FieldKind::Subcategory, KW, TR, NO),
    FieldPolicy::row(FieldKind::Keyword, KW, NO, NO),
    FieldPolicy::row(FieldKind::Tag, NO, TR, NO),
    FieldPolicy::row(FieldKind::TransliterationTag, NO, NO, VB),
    FieldPolicy::row(FieldKind::Synonym, KW, TR, TR),
    FieldPolicy::row(FieldKind::Region, NO, TR, NO),
    FieldPolicy::row(FieldKind::Metadata, KW, TR, NO),
];

/// Policy row for `kind`.
#[inline(always)]
pub fn policy_for(kind: FieldKind) -> &'static FieldPolicy {
    &POLICY[kind as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_discriminant() {
        for kind in FieldKind::ALL {
            assert_eq!(policy_for(kind).kind, kind);
        }
    }

    #[test]
    fn content_feeds_nothing() {
        assert_eq!(policy_for(FieldKind::Content).fan_out().count(), 0);
    }

    #[test]
    fn synonym_has_broadest_fan_out() {
        let widest = FieldKind::ALL
            .iter()
            .map(|k| policy_for(*k).fan_out().count())
            .max()
            .unwrap();
        assert_eq!(policy_for(FieldKind::Synonym).fan_out().count(), widest);
        assert_eq!(widest, 3);
    }

    #[test]
    fn description_feeds_keywords_only() {
        let rows: Vec<_> = policy_for(FieldKind::Description).fan_out().collect();
        assert_eq!(rows, vec![(TagTarget::Keywords, Expansion::Keyword)]);
    }

    #[test]
    fn tag_like_fields_feed_tags_only() {
        for kind in [FieldKind::Tag, FieldKind::Region] {
            let rows: Vec<_> = policy_for(kind).fan_out().collect();
            assert_eq!(rows, vec![(TagTarget::Tags, Expansion::Transliteration)]);
        }
    }

    #[test]
    fn classification_and_metadata_feed_tags_and_keywords() {
        for kind in [FieldKind::Category, FieldKind::Subcategory, FieldKind::Metadata] {
            let p = policy_for(kind);
            assert_eq!(p.keywords, Some(Expansion::Keyword));
            assert_eq!(p.tags, Some(Expansion::Transliteration));
            assert_eq!(p.transliteration_tags, None);
        }
    }

    #[test]
    fn title_feeds_all_three() {
        let p = policy_for(FieldKind::Title);
        assert_eq!(p.expansion(TagTarget::Keywords), Some(Expansion::Keyword));
        assert_eq!(p.expansion(TagTarget::Tags), Some(Expansion::Transliteration));
        assert_eq!(
            p.expansion(TagTarget::TransliterationTags),
            Some(Expansion::Transliteration)
        );
    }

    #[test]
    fn explicit_transliteration_tags_are_verbatim() {
        let rows: Vec<_> = policy_for(FieldKind::TransliterationTag).fan_out().collect();
        assert_eq!(
            rows,
            vec![(TagTarget::TransliterationTags, Expansion::Verbatim)]
        );
    }
}
