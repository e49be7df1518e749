// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::super::*;
use std::{fs, thread, time::Duration};
use tempfile::TempDir;

/// Helper: Creates sources whose custom file holds `custom_content`.
fn create_test_sources(custom_content: &str) -> (TempDir, KeybindSources) {
    let temp_dir = TempDir::new().unwrap();
    let default_path = temp_dir.path().join("default.conf");
    let custom_path = temp_dir.path().join("custom.conf");
    fs::write(&default_path, "$mainMod = SUPER\n").unwrap();
    fs::write(&custom_path, custom_content).unwrap();

    let sources = KeybindSources::new(&default_path, &custom_path).unwrap();
    (temp_dir, sources)
}

#[test]
fn test_transaction_basic_flow() {
    let original_content = "# Original config\nbind = SUPER, Q, exec, firefox\n";
    let (_temp_dir, sources) = create_test_sources(original_content);

    // Begin transaction (creates backup)
    let tx = ConfigTransaction::begin(&sources).unwrap();
    assert_eq!(sources.list_backups().unwrap().len(), 1, "Should have created one backup");

    let new_content = "# Updated config\nbind = SUPER, X, exec, kitty\n";
    tx.commit(new_content).unwrap();

    assert_eq!(fs::read_to_string(sources.custom_path()).unwrap(), new_content);

    // Backup survives the commit
    let backups = sources.list_backups().unwrap();
    assert_eq!(fs::read_to_string(&backups[0]).unwrap(), original_content);
}

#[test]
fn test_backup_filename_format() {
    let (_temp_dir, sources) = create_test_sources("bind = SUPER, K, exec, firefox\n");

    let tx = ConfigTransaction::begin(&sources).unwrap();
    let filename = tx.backup_path().file_name().unwrap().to_str().unwrap();

    // "custom.conf.2025-10-10_221500" -> "2025-10-10_221500"
    let parts: Vec<&str> = filename.split('.').collect();
    assert_eq!(parts.len(), 3, "Filename should have 3 parts: name.ext.timestamp");
    assert_eq!(parts[0], "custom");
    assert_eq!(parts[1], "conf");

    let parsed = chrono::NaiveDateTime::parse_from_str(parts[2], "%Y-%m-%d_%H%M%S");
    assert!(parsed.is_ok(), "Timestamp should be valid chrono format: {}", parts[2]);
}

#[test]
fn test_append_line_adds_missing_newline() {
    let (_temp_dir, sources) = create_test_sources("bind = SUPER, Q, killactive");

    let tx = ConfigTransaction::begin(&sources).unwrap();
    tx.append_line("bind = SUPER, B, exec, firefox").unwrap();

    assert_eq!(
        fs::read_to_string(sources.custom_path()).unwrap(),
        "bind = SUPER, Q, killactive\nbind = SUPER, B, exec, firefox\n"
    );
}

#[test]
fn test_append_line_to_empty_source() {
    let (_temp_dir, sources) = create_test_sources("");

    let tx = ConfigTransaction::begin(&sources).unwrap();
    tx.append_line("bind = SUPER, B, exec, firefox").unwrap();

    assert_eq!(
        fs::read_to_string(sources.custom_path()).unwrap(),
        "bind = SUPER, B, exec, firefox\n"
    );
}

#[test]
fn test_rollback_restores_original() {
    let original_content = "bind = SUPER, Q, killactive\n";
    let (_temp_dir, sources) = create_test_sources(original_content);

    let tx = ConfigTransaction::begin(&sources).unwrap();
    fs::write(sources.custom_path(), "garbage").unwrap();

    tx.rollback().unwrap();
    assert_eq!(fs::read_to_string(sources.custom_path()).unwrap(), original_content);
}

#[test]
fn test_multiple_backups_dont_overwrite() {
    let (_temp_dir, sources) = create_test_sources("original content");

    let first = ConfigTransaction::begin(&sources).unwrap();
    first.commit("modified content").unwrap();

    // Wait 1 second to ensure different timestamp
    thread::sleep(Duration::from_secs(1));

    let _second = ConfigTransaction::begin(&sources).unwrap();

    let backups = sources.list_backups().unwrap();
    assert_eq!(backups.len(), 2);
    assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "original content");
    assert_eq!(fs::read_to_string(&backups[1]).unwrap(), "modified content");
}
