//! Undo/redo laws over edit sequences
//!
//! This tests:
//! - undo(apply(d, op)) == d for every edit kind
//! - redo(undo(apply(d, op))) == apply(d, op)
//! - A new edit after undo discards the redo tail
//! - Document integrity after mixed sequences

use softworks_content::{
    Document, ElementContent, ElementStyle, IdGenerator, SectionAttributes, SectionKind, Spacing,
};
use softworks_editor::{Edit, Editor};

/// Editor preloaded with two sections of two text elements each.
fn seeded_editor() -> Editor {
    let mut ed = Editor::new(Document::new(), IdGenerator::from_seed("seq"));

    for kind in [SectionKind::Hero, SectionKind::Grid] {
        ed.apply(Edit::InsertSection {
            index: usize::MAX,
            kind,
            attributes: SectionAttributes::default(),
        })
        .unwrap();
    }

    let section_ids: Vec<String> = ed.current().sections.iter().map(|s| s.id.clone()).collect();
    for section_id in &section_ids {
        for text in ["a", "b"] {
            ed.apply(Edit::InsertElement {
                section_id: section_id.clone(),
                index: usize::MAX,
                content: ElementContent::Text {
                    text: text.to_string(),
                },
                style: ElementStyle::default(),
            })
            .unwrap();
        }
    }

    ed
}

fn sample_edits(doc: &Document) -> Vec<Edit> {
    let s0 = doc.sections[0].id.clone();
    let s1 = doc.sections[1].id.clone();
    let e0 = doc.sections[0].elements[0].id.clone();
    let e1 = doc.sections[1].elements[1].id.clone();

    vec![
        Edit::InsertSection {
            index: 1,
            kind: SectionKind::Banner,
            attributes: SectionAttributes::default(),
        },
        Edit::RemoveSection {
            section_id: s1.clone(),
        },
        Edit::MoveSection {
            section_id: s0.clone(),
            index: 1,
        },
        Edit::DuplicateSection {
            section_id: s0.clone(),
        },
        Edit::InsertElement {
            section_id: s1.clone(),
            index: 0,
            content: ElementContent::Button {
                label: "Shop".to_string(),
                link: "/collections/all".to_string(),
            },
            style: ElementStyle::default(),
        },
        Edit::RemoveElement {
            element_id: e0.clone(),
        },
        Edit::MoveElement {
            element_id: e1.clone(),
            index: 0,
        },
        Edit::DuplicateElement {
            element_id: e1.clone(),
        },
        Edit::UpdateSection {
            section_id: s0.clone(),
            attributes: SectionAttributes {
                background: Some("#101010".to_string()),
                spacing: Spacing { top: 24, bottom: 24 },
                ..Default::default()
            },
        },
        Edit::UpdateElement {
            element_id: e0,
            content: Some(ElementContent::Text {
                text: "updated".to_string(),
            }),
            style: None,
        },
    ]
}

#[test]
fn test_undo_reverts_every_edit_kind() {
    let template = seeded_editor();

    for edit in sample_edits(template.current()) {
        let mut ed = seeded_editor();
        let before = ed.current().clone();

        ed.apply(edit.clone())
            .unwrap_or_else(|e| panic!("edit {:?} failed: {}", edit, e));
        assert_eq!(
            ed.undo(),
            &before,
            "undo did not revert edit {:?}",
            edit
        );
    }
}

#[test]
fn test_redo_restores_every_edit_kind() {
    let template = seeded_editor();

    for edit in sample_edits(template.current()) {
        let mut ed = seeded_editor();

        let after = ed.apply(edit.clone()).unwrap().clone();
        ed.undo();
        assert_eq!(
            ed.redo(),
            &after,
            "redo did not restore edit {:?}",
            edit
        );
    }
}

#[test]
fn test_new_edit_after_undo_discards_redo() {
    let mut ed = seeded_editor();
    let s0 = ed.current().sections[0].id.clone();

    ed.apply(Edit::MoveSection {
        section_id: s0.clone(),
        index: 1,
    })
    .unwrap();
    ed.undo();
    assert!(ed.can_redo());

    // Diverge: a new edit makes redo unavailable
    ed.apply(Edit::DuplicateSection { section_id: s0 }).unwrap();
    assert!(!ed.can_redo());

    let current = ed.current().clone();
    assert_eq!(ed.redo(), &current); // no-op
}

#[test]
fn test_move_then_remove_then_unwind() {
    let mut ed = seeded_editor();
    let s0 = ed.current().sections[0].id.clone();
    let s1 = ed.current().sections[1].id.clone();
    let original = ed.current().clone();

    ed.apply(Edit::MoveSection {
        section_id: s0.clone(),
        index: 1,
    })
    .unwrap();
    assert_eq!(ed.current().sections[1].id, s0);

    ed.apply(Edit::RemoveSection {
        section_id: s1.clone(),
    })
    .unwrap();
    assert_eq!(ed.current().sections.len(), 1);
    assert!(!ed.current().contains_section(&s1));

    // Unwind both
    ed.undo();
    assert!(ed.current().contains_section(&s1));
    ed.undo();
    assert_eq!(ed.current(), &original);
}

#[test]
fn test_rejected_edit_mid_sequence_preserves_history() {
    let mut ed = seeded_editor();
    let s0 = ed.current().sections[0].id.clone();

    ed.apply(Edit::DuplicateSection {
        section_id: s0.clone(),
    })
    .unwrap();
    let after_duplicate = ed.current().clone();

    // Rejected edit: neither state nor undo depth changes
    let depth = ed.history().len();
    assert!(ed
        .apply(Edit::RemoveElement {
            element_id: "missing".to_string(),
        })
        .is_err());
    assert_eq!(ed.current(), &after_duplicate);
    assert_eq!(ed.history().len(), depth);

    // Undo still targets the duplicate
    ed.undo();
    assert_eq!(ed.current().sections.len(), 2);
}
