//! Property tests for shortcut list operations and encodings

use super::fixtures::{arb_distinct_list, arb_entry, arb_list, commands, entry};
use crate::Error;
use crate::config::SettingsFile;
use crate::shortcuts::{self, ShortcutList, ShortcutListKey, codec};
use pinwheel_types::{BuiltinAction, Command, IconRef, ShortcutEntry};
use proptest::prelude::*;
use proptest::sample::Index;

fn sorted(list: &ShortcutList) -> Vec<String> {
    let mut all: Vec<String> = list
        .iter()
        .map(|e| e.to_fields().join("\u{1f}"))
        .collect();
    all.sort();
    all
}

proptest! {
    #[test]
    fn prop_flat_encoding_roundtrips(list in arb_list()) {
        let flat = codec::encode(&list);
        prop_assert_eq!(flat.len(), list.len() * codec::STRIDE);
        prop_assert_eq!(codec::decode(&flat).unwrap(), list);
    }

    #[test]
    fn prop_tuple_encoding_roundtrips(list in arb_list()) {
        let tuples = codec::encode_tuples(&list);
        prop_assert!(tuples.iter().all(|t| t.len() == codec::STRIDE));
        prop_assert_eq!(codec::decode_tuples(&tuples).unwrap(), list);
    }

    #[test]
    fn prop_bad_stride_rejected(
        fields in prop::collection::vec("[a-z]{0,4}", 0..20)
            .prop_filter("not a multiple of 3", |f| f.len() % 3 != 0)
    ) {
        let len = fields.len();
        let is_malformed = matches!(
            codec::decode(&fields),
            Err(Error::MalformedInput { len: l }) if l == len
        );
        prop_assert!(is_malformed);
    }

    #[test]
    fn prop_move_to_index_is_permutation(
        list in arb_list(),
        from in any::<Index>(),
        to in 0usize..16,
    ) {
        prop_assume!(!list.is_empty());
        let from = from.index(list.len());
        let moved = list.move_to_index(from, to).unwrap();
        prop_assert_eq!(moved.len(), list.len());
        prop_assert_eq!(sorted(&moved), sorted(&list));
        let landed = to.min(list.len() - 1);
        prop_assert_eq!(moved.get(landed), list.get(from));
    }

    #[test]
    fn prop_move_up_then_down_restores(list in arb_list(), index in any::<Index>()) {
        prop_assume!(list.len() >= 2);
        let index = 1 + index.index(list.len() - 1);
        let restored = list.move_up(index).unwrap().move_down(index - 1).unwrap();
        prop_assert_eq!(restored, list);
    }

    #[test]
    fn prop_out_of_range_index_errors(list in arb_list(), extra in 0usize..4) {
        let index = list.len() + extra;
        let is_out_of_range = |r: crate::Result<ShortcutList>| {
            matches!(r, Err(Error::IndexOutOfRange { index: i, .. }) if i == index)
        };
        prop_assert!(is_out_of_range(list.remove_at(index)));
        prop_assert!(is_out_of_range(list.move_up(index)));
        prop_assert!(is_out_of_range(list.move_down(index)));
        prop_assert!(is_out_of_range(list.move_to_index(index, 0)));
        prop_assert!(is_out_of_range(list.replace_at(index, entry("x"))));
    }

    #[test]
    fn prop_toggle_twice_restores_distinct_list(
        list in arb_distinct_list(),
        id in "[a-z]{1,8}\\.desktop",
    ) {
        let once = list.toggle(entry(&id));
        let twice = once.list.toggle(entry(&id));
        prop_assert_ne!(once.was_removed, twice.was_removed);
        if once.was_removed {
            // The removed entry comes back at the end
            prop_assert_eq!(twice.list.len(), list.len());
            let last = twice.list.get(list.len() - 1);
            prop_assert_eq!(last.map(|e| e.command.as_persisted().into_owned()), Some(id));
        } else {
            prop_assert_eq!(twice.list, list);
        }
    }

    #[test]
    fn prop_insert_then_find(
        list in arb_distinct_list(),
        index in 0usize..12,
        id in "[a-z]{1,8}\\.desktop",
    ) {
        prop_assume!(!list.contains_command(&id));
        let inserted = list.insert_at(index, entry(&id));
        let position = inserted.position_by_command(&id);
        prop_assert_eq!(position, Some(index.min(list.len())));

        let removed = inserted.remove_at(index.min(list.len())).unwrap();
        prop_assert!(!removed.contains_command(&id));
        prop_assert_eq!(removed, list);
    }

    #[test]
    fn prop_replace_keeps_length_and_neighbors(
        list in arb_list(),
        index in any::<Index>(),
        new in arb_entry(),
    ) {
        prop_assume!(!list.is_empty());
        let index = index.index(list.len());
        let replaced = list.replace_at(index, new.clone()).unwrap();
        prop_assert_eq!(replaced.len(), list.len());
        prop_assert_eq!(replaced.get(index), Some(&new));
        for i in (0..list.len()).filter(|&i| i != index) {
            prop_assert_eq!(replaced.get(i), list.get(i));
        }
    }

    #[test]
    fn prop_any_stored_strings_roundtrip(
        triples in prop::collection::vec(("\\PC{0,8}", "\\PC{0,8}", "\\PC{0,8}"), 0..6),
    ) {
        let flat: Vec<String> = triples
            .into_iter()
            .flat_map(|(name, icon, command)| [name, icon, command])
            .collect();
        let list = codec::decode(&flat).unwrap();
        prop_assert_eq!(&codec::encode(&list), &flat);
        prop_assert_eq!(codec::decode(&codec::encode(&list)).unwrap(), list);
    }

    #[test]
    fn prop_constructed_entries_survive_a_save(
        entries in prop::collection::vec(arb_built_entry(), 0..6),
    ) {
        let list = ShortcutList::from(entries);
        let mut store = SettingsFile::in_memory();
        for key in [ShortcutListKey::PinnedApps, ShortcutListKey::DirectoryShortcuts] {
            shortcuts::save_list(&mut store, key, &list).unwrap();
            prop_assert_eq!(shortcuts::load_list(&store, key).unwrap(), list.clone());
        }
    }
}

/// Entries assembled from values rather than decoded from stored strings.
fn arb_built_entry() -> impl Strategy<Value = ShortcutEntry> {
    let command = prop_oneof![
        Just(Command::Unbound),
        prop::sample::select(BuiltinAction::ALL.to_vec()).prop_map(Command::Builtin),
        prop_oneof![
            Just("firefox.desktop"),
            Just("ArcMenu_Trash"),
            Just("relative"),
            Just("~/src"),
            Just("ArcMenu_"),
        ]
        .prop_map(Command::parse),
    ];
    let icon = prop_oneof![
        Just(IconRef::FromApp),
        Just(IconRef::MenuLogo),
        Just(IconRef::Folder),
        prop_oneof![Just("/x.svg"), Just("folder-symbolic"), Just("")].prop_map(IconRef::parse),
    ];
    ("\\PC{0,8}", icon, command).prop_map(|(name, icon, command)| ShortcutEntry {
        name,
        icon,
        command,
    })
}

#[test]
fn test_move_to_index_example() {
    let list = super::fixtures::list(&["a", "b", "c", "d"]);
    let moved = list.move_to_index(0, 2).unwrap();
    assert_eq!(commands(&moved), ["b", "c", "a", "d"]);
}

#[test]
fn test_pinned_settings_example_decodes() {
    let flat = [
        "ArcMenu Settings",
        "ArcMenu_ArcMenuIcon",
        "ArcMenu_Settings",
        "Terminal",
        "",
        "org.gnome.Terminal.desktop",
    ];
    let list = codec::decode(&flat).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(
        list.position_by_command("org.gnome.Terminal.desktop"),
        Some(1)
    );
    assert!(!list.get(0).unwrap().is_editable());
    assert_eq!(codec::encode(&list), flat);
}
