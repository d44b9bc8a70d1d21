//! Both note stores must be indistinguishable from the outside

use noters_api::backends::{MemoryBackend, SqliteBackend};
use noters_api::{Note, NoteBackend};
use proptest::prelude::*;
use tempfile::TempDir;

fn sqlite() -> (SqliteBackend, TempDir) {
    let dir = TempDir::new().expect("temp dir should be created");
    let backend = SqliteBackend::new(dir.path().join("notes.db")).expect("db should open");
    (backend, dir)
}

fn contract(backend: &dyn NoteBackend) {
    assert!(backend.list().unwrap().is_empty());

    let a = backend.create("a".into(), false).unwrap();
    let b = backend.create("b".into(), true).unwrap();
    assert_eq!(
        a,
        Note {
            id: 1,
            description: "a".into(),
            completed: false
        }
    );
    assert_eq!(b.id, 2);
    assert!(b.completed);

    assert_eq!(backend.get(1).unwrap(), a);
    assert!(backend.get(3).unwrap_err().is_not_found());

    let toggled = backend.toggle_completed(1).unwrap();
    assert!(toggled.completed);
    assert_eq!(toggled.description, "a");

    let renamed = backend.update_description(2, "bee".into()).unwrap();
    assert_eq!((renamed.id, renamed.completed), (2, true));
    assert_eq!(renamed.description, "bee");

    let removed = backend.delete(1).unwrap();
    assert_eq!(removed, toggled);
    assert!(backend.get(1).unwrap_err().is_not_found());
    assert!(backend.delete(1).unwrap_err().is_not_found());
    assert!(backend.toggle_completed(1).unwrap_err().is_not_found());
    assert!(
        backend
            .update_description(1, "x".into())
            .unwrap_err()
            .is_not_found()
    );

    assert_eq!(backend.list().unwrap(), vec![renamed]);
}

#[test]
fn memory_backend_honours_contract() {
    contract(&MemoryBackend::new());
}

#[test]
fn sqlite_backend_honours_contract() {
    let (backend, _dir) = sqlite();
    contract(&backend);
}

#[derive(Debug, Clone)]
enum Op {
    Create(bool),
    Toggle(usize),
    Delete(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<bool>().prop_map(Op::Create),
        1 => any::<usize>().prop_map(Op::Toggle),
        1 => any::<usize>().prop_map(Op::Delete),
    ]
}

/// Applies the ops and checks that IDs are handed out consecutively and the list stays ordered
fn check_sequence(backend: &dyn NoteBackend, ops: &[Op]) -> Result<(), TestCaseError> {
    let mut last_id = 0;
    for op in ops {
        let live = backend.list().unwrap();
        match *op {
            Op::Create(completed) => {
                let note = backend.create("n".into(), completed).unwrap();
                // Next ID is always the highest ever assigned plus one
                prop_assert_eq!(note.id, last_id + 1);
                last_id = note.id;
            }
            Op::Toggle(pick) if !live.is_empty() => {
                let target = &live[pick % live.len()];
                let toggled = backend.toggle_completed(target.id).unwrap();
                prop_assert_eq!(toggled.completed, !target.completed);
            }
            Op::Delete(pick) if !live.is_empty() => {
                let target = &live[pick % live.len()];
                prop_assert_eq!(&backend.delete(target.id).unwrap(), target);
                prop_assert!(backend.get(target.id).unwrap_err().is_not_found());
            }
            Op::Toggle(_) | Op::Delete(_) => {}
        }

        let ids: Vec<i64> = backend.list().unwrap().iter().map(|n| n.id).collect();
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
    Ok(())
}

proptest! {
    #[test]
    fn memory_ids_are_consecutive(ops in prop::collection::vec(op(), 1..60)) {
        check_sequence(&MemoryBackend::new(), &ops)?;
    }

    #[test]
    fn toggling_twice_restores_flag(initial in any::<bool>(), others in 0_usize..5) {
        let backend = MemoryBackend::new();
        for _ in 0..others {
            backend.create("other".into(), false).unwrap();
        }
        let note = backend.create("target".into(), initial).unwrap();

        backend.toggle_completed(note.id).unwrap();
        let after = backend.toggle_completed(note.id).unwrap();
        prop_assert_eq!(after, note);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn sqlite_ids_are_consecutive(ops in prop::collection::vec(op(), 1..20)) {
        let (backend, _dir) = sqlite();
        check_sequence(&backend, &ops)?;
    }
}
