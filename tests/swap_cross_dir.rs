use std::fs;

use assert_fs::prelude::*;
use swap_names::{swap, swap_file_names, SwapOutcome};

/// /d1/a.txt ("1") and /d2/b.txt ("2"): each file stays in its directory and takes the other name.
#[test]
fn cross_directory_swap_moves_names_not_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    let a = temp.child("d1/a.txt");
    let b = temp.child("d2/b.txt");
    a.write_str("1").unwrap();
    b.write_str("2").unwrap();

    let swapped = swap(a.path(), b.path(), |_| panic!("no conflicts expected")).unwrap();

    assert!(swapped);
    temp.child("d1/b.txt").assert("1");
    temp.child("d2/a.txt").assert("2");
    assert!(!a.path().exists(), "original d1/a.txt should be gone");
    assert!(!b.path().exists(), "original d2/b.txt should be gone");
}

#[test]
fn nested_and_sibling_directories() {
    let temp = assert_fs::TempDir::new().unwrap();
    let a = temp.child("top.cfg");
    let b = temp.child("deep/er/inner.cfg");
    a.write_str("top").unwrap();
    b.write_str("inner").unwrap();

    let outcome = swap_file_names(a.path(), b.path(), &mut |_: &std::path::Path| false).unwrap();

    assert_eq!(
        outcome,
        SwapOutcome::Swapped {
            first: temp.path().join("inner.cfg"),
            second: temp.path().join("deep/er").join("top.cfg"),
        }
    );
    temp.child("inner.cfg").assert("top");
    temp.child("deep/er/top.cfg").assert("inner");
}

#[test]
fn same_name_in_two_directories_changes_nothing() {
    let temp = assert_fs::TempDir::new().unwrap();
    let a = temp.child("d1/notes.txt");
    let b = temp.child("d2/notes.txt");
    a.write_str("one").unwrap();
    b.write_str("two").unwrap();

    // Each destination is the file itself; it must never be offered for overwrite.
    let swapped = swap(a.path(), b.path(), |_| panic!("file itself offered for overwrite")).unwrap();

    assert!(swapped);
    a.assert("one");
    b.assert("two");
    assert_eq!(fs::read_dir(temp.child("d1").path()).unwrap().count(), 1);
    assert_eq!(fs::read_dir(temp.child("d2").path()).unwrap().count(), 1);
}

/// Swapping again restores the original name-to-content mapping.
#[test]
fn double_swap_restores_original_mapping() {
    let temp = assert_fs::TempDir::new().unwrap();
    let a = temp.child("d1/a.txt");
    let b = temp.child("d2/b.txt");
    a.write_str("1").unwrap();
    b.write_str("2").unwrap();

    assert!(swap(a.path(), b.path(), |_| false).unwrap());
    let new_a = temp.child("d1/b.txt");
    let new_b = temp.child("d2/a.txt");
    assert!(swap(new_a.path(), new_b.path(), |_| false).unwrap());

    a.assert("1");
    b.assert("2");
    assert!(!new_a.path().exists());
    assert!(!new_b.path().exists());
}

#[test]
fn double_swap_same_directory() {
    let temp = assert_fs::TempDir::new().unwrap();
    let a = temp.child("a.txt");
    let b = temp.child("b.txt");
    a.write_str("1").unwrap();
    b.write_str("2").unwrap();

    assert!(swap(a.path(), b.path(), |_| false).unwrap());
    assert!(swap(a.path(), b.path(), |_| false).unwrap());

    a.assert("1");
    b.assert("2");
}

#[test]
fn names_differing_only_in_case_are_exchanged() {
    let temp = assert_fs::TempDir::new().unwrap();
    let a = temp.child("d1/Report.txt");
    let b = temp.child("d2/report.txt");
    a.write_str("upper").unwrap();
    b.write_str("lower").unwrap();

    let swapped = swap(a.path(), b.path(), |_| panic!("a file is never its own conflict")).unwrap();

    assert!(swapped);
    let names = |dir: &str| -> Vec<String> {
        fs::read_dir(temp.child(dir).path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    };
    // Exact spelling matters even where the filesystem ignores case.
    assert_eq!(names("d1"), vec!["report.txt"]);
    assert_eq!(names("d2"), vec!["Report.txt"]);
    temp.child("d1/report.txt").assert("upper");
    temp.child("d2/Report.txt").assert("lower");
}
