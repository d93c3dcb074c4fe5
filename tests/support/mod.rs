use fstree::{create_file, list, FileSystem, PathOrigin};

/// Files written by [`seed_fixture`], relative to the fixture root.
pub const FIXTURE_FILES: &[(&str, &[u8])] = &[
    ("README.md", b"# fixture\n"),
    ("src/lib.rs", b"pub fn answer() -> u32 { 42 }\n"),
    ("src/nested/deep/mod.rs", b"// deep\n"),
    ("assets/logo.bin", &[0, 1, 2, 254, 255]),
];

/// Writes the standard fixture tree under `root` through the store under test, plus an
/// empty directory that must never show up in listings.
pub fn seed_fixture(store: &dyn FileSystem, root: &str) {
    let origin = PathOrigin::new(store, root);
    for (relative, contents) in FIXTURE_FILES {
        create_file(&origin.join(relative), contents).unwrap();
    }
    fstree::mkdirp(&origin.join("empty/inner")).unwrap();
}

pub fn sorted_list(store: &dyn FileSystem, dir: &str) -> Vec<String> {
    let mut files = list(dir, store, None).unwrap();
    files.sort();
    files
}

pub fn expected_files() -> Vec<String> {
    let mut files: Vec<String> = FIXTURE_FILES.iter().map(|(p, _)| p.to_string()).collect();
    files.sort();
    files
}
