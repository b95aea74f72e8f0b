//! Integration tests for the clean command.
//!
//! These tests exercise the full library flow against real temp directories:
//! config resolution, reference extraction, and directory reconciliation.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use imgsweep::cli::{commands, Context};
use imgsweep::core::extract::extract_references;
use imgsweep::core::reconcile::reconcile;

// =============================================================================
// Test Fixtures
// =============================================================================

/// Test fixture with a definition file and an asset directory.
struct TestAssets {
    dir: TempDir,
}

impl TestAssets {
    /// Create an empty fixture with an `imgs/` subdirectory.
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        std::fs::create_dir(dir.path().join("imgs")).unwrap();
        Self { dir }
    }

    /// Write the definition file with `image = '<name>',` lines.
    fn write_items(&self, names: &[&str]) {
        let mut contents = String::from("return {\n");
        for name in names {
            contents.push_str(&format!("    item = {{ image = '{}', weight = 1 }},\n", name));
        }
        contents.push_str("}\n");
        std::fs::write(self.items_path(), contents).unwrap();
    }

    /// Create a file in the asset directory.
    fn add_asset(&self, name: &str) {
        std::fs::write(self.imgs_path().join(name), b"binary").unwrap();
    }

    /// Create a subdirectory in the asset directory.
    fn add_subdir(&self, name: &str) {
        std::fs::create_dir(self.imgs_path().join(name)).unwrap();
    }

    fn items_path(&self) -> PathBuf {
        self.dir.path().join("items.lua")
    }

    fn imgs_path(&self) -> PathBuf {
        self.dir.path().join("imgs")
    }

    fn has_asset(&self, name: &str) -> bool {
        self.imgs_path().join(name).exists()
    }

    /// Standard non-interactive context.
    fn context(&self) -> Context {
        Context {
            config: None,
            quiet: true,
            debug: false,
            json: false,
        }
    }

    /// Run the clean command against this fixture.
    fn clean(&self) -> anyhow::Result<()> {
        commands::clean(
            &self.context(),
            Some(self.items_path()),
            Some(self.imgs_path()),
        )
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn scenario_a_referenced_kept_unreferenced_deleted() {
    let assets = TestAssets::new();
    assets.write_items(&["bread.png", "water.png"]);
    assets.add_asset("bread.png");
    assets.add_asset("water.png");
    assets.add_asset("soda.png");
    assets.add_asset("readme.txt");
    assets.add_subdir("old");

    assets.clean().expect("clean failed");

    assert!(assets.has_asset("bread.png"));
    assert!(assets.has_asset("water.png"));
    assert!(!assets.has_asset("soda.png"));
    assert!(assets.has_asset("readme.txt"));
    assert!(assets.has_asset("old"));
}

#[test]
fn scenario_b_missing_definition_file_aborts_before_directory_work() {
    let assets = TestAssets::new();
    assets.add_asset("soda.png");
    // No items.lua written.

    let err = assets.clean().unwrap_err();
    assert!(format!("{:#}", err).contains("does not exist"));

    // No directory operation was attempted.
    assert!(assets.has_asset("soda.png"));
}

#[test]
fn scenario_c_empty_directory_completes() {
    let assets = TestAssets::new();
    assets.write_items(&["bread.png"]);

    assets.clean().expect("clean failed");

    let refs = extract_references(&assets.items_path()).unwrap();
    let report = reconcile(&assets.imgs_path(), &refs).unwrap();
    assert!(report.is_empty());
}

#[test]
fn scenario_d_no_references_deletes_every_recognized_image() {
    let assets = TestAssets::new();
    std::fs::write(assets.items_path(), "label = 'no image assignments here'\n").unwrap();
    assets.add_asset("a.png");
    assets.add_asset("b.jpg");
    assets.add_asset("keep.txt");

    assets.clean().expect("clean failed");

    assert!(!assets.has_asset("a.png"));
    assert!(!assets.has_asset("b.jpg"));
    assert!(assets.has_asset("keep.txt"));
}

#[test]
fn membership_is_case_insensitive_across_the_full_flow() {
    let assets = TestAssets::new();
    assets.write_items(&["Bread.PNG"]);
    assets.add_asset("bread.png");

    assets.clean().expect("clean failed");

    assert!(assets.has_asset("bread.png"));
}

#[test]
fn missing_asset_directory_aborts() {
    let assets = TestAssets::new();
    assets.write_items(&["bread.png"]);

    let err = commands::clean(
        &assets.context(),
        Some(assets.items_path()),
        Some(assets.dir.path().join("nope")),
    )
    .unwrap_err();
    assert!(format!("{:#}", err).contains("does not exist"));
}

#[test]
fn asset_path_that_is_a_file_aborts() {
    let assets = TestAssets::new();
    assets.write_items(&["bread.png"]);

    let err = commands::clean(
        &assets.context(),
        Some(assets.items_path()),
        Some(assets.items_path()),
    )
    .unwrap_err();
    assert!(format!("{:#}", err).contains("not a directory"));
}

#[test]
fn totals_account_for_every_entry() {
    let assets = TestAssets::new();
    assets.write_items(&["kept.png"]);
    assets.add_asset("kept.png");
    assets.add_asset("gone.webp");
    assets.add_asset("notes.md");
    assets.add_subdir("sub");

    let refs = extract_references(&assets.items_path()).unwrap();
    let report = reconcile(&assets.imgs_path(), &refs).unwrap();

    assert_eq!(
        report.kept() + report.deleted() + report.delete_failed() + report.skipped(),
        report.total()
    );
    assert_eq!(report.total(), 4);
    assert_eq!(report.kept(), 1);
    assert_eq!(report.deleted(), 1);
    assert_eq!(report.skipped(), 2);
}

#[test]
fn config_file_supplies_paths() {
    let assets = TestAssets::new();
    assets.write_items(&["bread.png"]);
    assets.add_asset("bread.png");
    assets.add_asset("soda.png");

    let config_path = assets.dir.path().join("imgsweep.toml");
    std::fs::write(
        &config_path,
        format!(
            "items_file = {:?}\nimages_dir = {:?}\n",
            assets.items_path(),
            assets.imgs_path()
        ),
    )
    .unwrap();

    let ctx = Context {
        config: Some(config_path),
        quiet: true,
        debug: false,
        json: false,
    };
    commands::clean(&ctx, None, None).expect("clean failed");

    assert!(assets.has_asset("bread.png"));
    assert!(!assets.has_asset("soda.png"));
}

#[test]
fn flags_override_config_paths() {
    let assets = TestAssets::new();
    assets.write_items(&["bread.png"]);
    assets.add_asset("bread.png");
    assets.add_asset("soda.png");

    // Config points at a directory that does not exist; the flag must win.
    let config_path = assets.dir.path().join("imgsweep.toml");
    std::fs::write(&config_path, "images_dir = \"/nonexistent/imgs\"\n").unwrap();

    let ctx = Context {
        config: Some(config_path),
        quiet: true,
        debug: false,
        json: false,
    };
    commands::clean(&ctx, Some(assets.items_path()), Some(assets.imgs_path()))
        .expect("clean failed");

    assert!(!assets.has_asset("soda.png"));
}

#[cfg(unix)]
#[test]
fn delete_failure_does_not_abort_the_run() {
    use std::os::unix::fs::PermissionsExt;

    let assets = TestAssets::new();
    assets.write_items(&["bread.png"]);
    assets.add_asset("bread.png");
    assets.add_asset("stuck.png");

    let set_mode = |path: &Path, mode: u32| {
        let mut perms = std::fs::metadata(path).unwrap().permissions();
        perms.set_mode(mode);
        std::fs::set_permissions(path, perms).unwrap();
    };

    // Read-only asset directory: unlink fails, run must still complete.
    set_mode(&assets.imgs_path(), 0o555);
    let result = assets.clean();
    set_mode(&assets.imgs_path(), 0o755);

    result.expect("run should complete despite the delete failure");
    assert!(assets.has_asset("stuck.png"));
    assert!(assets.has_asset("bread.png"));
}
