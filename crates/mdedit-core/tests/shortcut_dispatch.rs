use mdedit_core::shortcuts::{EditorAction, KeyChord, resolve};

#[test]
fn test_primary_bindings() {
    let expected: &[(char, EditorAction)] = &[
        ('b', EditorAction::Wrap { before: "**", after: "**" }),
        ('i', EditorAction::Wrap { before: "*", after: "*" }),
        ('k', EditorAction::Wrap { before: "`", after: "`" }),
        ('1', EditorAction::PrefixLines { prefix: "# " }),
        ('2', EditorAction::PrefixLines { prefix: "## " }),
        ('3', EditorAction::PrefixLines { prefix: "### " }),
        ('p', EditorAction::PrefixLines { prefix: "- " }),
        ('q', EditorAction::PrefixLines { prefix: "> " }),
        ('l', EditorAction::InsertLink),
        ('z', EditorAction::Undo),
        ('y', EditorAction::Redo),
    ];

    for &(key, action) in expected {
        assert_eq!(resolve(KeyChord::primary(key)), Some(action), "key {key:?}");
    }
}

#[test]
fn test_primary_shift_bindings() {
    let expected: &[(char, EditorAction)] = &[
        ('c', EditorAction::Wrap { before: "\n```bash\n", after: "\n```\n" }),
        ('t', EditorAction::PrefixLines { prefix: "- [ ] " }),
        ('s', EditorAction::Wrap { before: "~~", after: "~~" }),
        ('i', EditorAction::InsertImage),
        ('h', EditorAction::PrefixLines { prefix: "---\n" }),
        ('g', EditorAction::InsertTable),
    ];

    for &(key, action) in expected {
        assert_eq!(
            resolve(KeyChord::primary_shift(key)),
            Some(action),
            "key {key:?}"
        );
    }
}

#[test]
fn test_matching_is_case_insensitive() {
    // Shifted chords usually report uppercase characters.
    assert_eq!(
        resolve(KeyChord::primary_shift('S')),
        resolve(KeyChord::primary_shift('s'))
    );
    assert_eq!(resolve(KeyChord::primary('B')), resolve(KeyChord::primary('b')));
}

#[test]
fn test_shift_state_distinguishes_bindings() {
    // Plain I is italic; Shift+I is the image prompt.
    assert_eq!(
        resolve(KeyChord::primary('i')),
        Some(EditorAction::Wrap { before: "*", after: "*" })
    );
    assert_eq!(
        resolve(KeyChord::primary_shift('i')),
        Some(EditorAction::InsertImage)
    );
}

#[test]
fn test_unbound_chords_resolve_to_none() {
    assert_eq!(resolve(KeyChord::primary('x')), None);
    assert_eq!(resolve(KeyChord::primary('4')), None);
    assert_eq!(resolve(KeyChord::primary_shift('b')), None);
    assert_eq!(resolve(KeyChord::primary_shift('z')), None);
    assert_eq!(resolve(KeyChord::primary(' ')), None);
}
