//! Edge case and error handling tests for twig


use harness::{TestTree, run_twig};
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_file_shows_target_size() {
    let tree = TestTree::new();
    tree.add_file("target.txt", "12345");
    symlink(tree.path().join("target.txt"), tree.path().join("link.txt"))
        .expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["."]);
    assert!(success);
    assert_eq!(stdout, "├── link.txt (5 bytes)\n└── target.txt (5 bytes)\n");
}

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let tree = TestTree::new();
    tree.add_file("subdir/file.txt", "f");
    symlink("..", tree.path().join("subdir").join("parent"))
        .expect("Failed to create parent symlink");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-a", "."]);
    assert!(success, "twig should not hang on parent symlink");
    assert_eq!(
        stdout,
        "└── subdir/\n    ├── file.txt (1 bytes)\n    └── parent/\n"
    );
}

#[test]
fn test_dangling_symlink_skipped() {
    let tree = TestTree::new();
    tree.add_file("real.txt", "r");
    symlink(tree.path().join("nowhere"), tree.path().join("broken"))
        .expect("Failed to create dangling symlink");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["."]);
    assert!(success);
    assert_eq!(stdout, "└── real.txt (1 bytes)\n");
}

#[test]
fn test_symlinked_root_is_resolved() {
    let tree = TestTree::new();
    tree.add_file("real/inside.txt", "i");
    symlink(tree.path().join("real"), tree.path().join("alias")).expect("Failed to symlink");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["alias"]);
    assert!(success);
    assert_eq!(stdout, "└── inside.txt (1 bytes)\n");
}

// ============================================================================
// Permission Error Handling
// ============================================================================

#[test]
fn test_unreadable_directory() {
    let tree = TestTree::new();
    tree.add_file("a_readable/file.txt", "r");
    tree.add_file("z_last.txt", "z");

    let unreadable = tree.add_dir("m_unreadable");
    fs::write(unreadable.join("secret.txt"), "s").expect("Failed to write file");
    fs::set_permissions(&unreadable, fs::Permissions::from_mode(0o000))
        .expect("Failed to set permissions");
    let listable = fs::read_dir(&unreadable).is_ok();

    let (stdout, stderr, success) = run_twig(tree.path(), &["."]);

    fs::set_permissions(&unreadable, fs::Permissions::from_mode(0o755))
        .expect("Failed to restore permissions");

    assert!(success, "twig should handle unreadable directories gracefully");
    assert!(stdout.contains("file.txt"), "should show readable file");
    assert!(stdout.contains("m_unreadable/"), "should still list the directory");
    assert!(stdout.contains("z_last.txt"), "should continue with siblings");

    if !listable {
        assert!(!stdout.contains("secret.txt"));
        let warnings: Vec<_> = stderr.lines().filter(|l| l.contains("warning")).collect();
        assert_eq!(warnings.len(), 1, "stderr: {}", stderr);
        assert!(warnings[0].contains("m_unreadable"));
    }
}

#[test]
fn test_unreadable_file_still_listed() {
    let tree = TestTree::new();
    let file = tree.add_file("locked.txt", "1234");
    fs::set_permissions(&file, fs::Permissions::from_mode(0o000))
        .expect("Failed to set permissions");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["."]);

    fs::set_permissions(&file, fs::Permissions::from_mode(0o644))
        .expect("Failed to restore permissions");

    assert!(success);
    assert_eq!(stdout, "└── locked.txt (4 bytes)\n");
}

// ============================================================================
// Naming and Ordering
// ============================================================================

#[test]
fn test_unicode_names_pass_through() {
    let tree = TestTree::new();
    tree.add_file("данные/файл.txt", "ok");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["."]);
    assert!(success);
    assert_eq!(stdout, "└── данные/\n    └── файл.txt (2 bytes)\n");
}

#[test]
fn test_ordering_is_byte_order() {
    let tree = TestTree::new();
    for name in ["beta", "Alpha", "alpha", "_under", "0zero"] {
        tree.add_file(name, "");
    }

    let (stdout, _stderr, success) = run_twig(tree.path(), &["."]);
    assert!(success);
    let names: Vec<_> = stdout
        .lines()
        .map(|l| l.split_once(' ').unwrap().1.trim_end_matches(" (0 bytes)"))
        .collect();
    assert_eq!(names, vec!["0zero", "Alpha", "_under", "alpha", "beta"]);
}

#[test]
fn test_output_is_deterministic() {
    let tree = TestTree::new();
    tree.populate(3, 2);

    let (first, _, ok1) = run_twig(tree.path(), &["."]);
    let (second, _, ok2) = run_twig(tree.path(), &["."]);
    assert!(ok1 && ok2);
    assert_eq!(first, second);
}

#[test]
fn test_deep_nesting() {
    let tree = TestTree::new();
    let deep = (0..40).map(|i| format!("d{}", i)).collect::<Vec<_>>().join("/");
    tree.add_file(&format!("{}/leaf.txt", deep), "leaf");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["."]);
    assert!(success);
    assert_eq!(stdout.lines().count(), 41);
    assert!(stdout.ends_with(&format!("{}└── leaf.txt (4 bytes)\n", "    ".repeat(40))));
}
