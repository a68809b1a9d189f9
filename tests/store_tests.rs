//! Integration tests for the OtpVault account store.

use std::fs;

use otpvault::crypto::encrypt;
use otpvault::errors::OtpVaultError;
use otpvault::store::AccountStore;
use tempfile::TempDir;

/// Helper: create a store backed by a file inside a fresh temp dir.
fn temp_store() -> (TempDir, AccountStore) {
    let dir = TempDir::new().expect("create temp dir");
    let store = AccountStore::new(dir.path().join("accounts.vault"));
    (dir, store)
}

// ---------------------------------------------------------------------------
// Add and get round-trip
// ---------------------------------------------------------------------------

#[test]
fn add_and_get_secret_roundtrip() {
    let (_dir, store) = temp_store();
    let password = b"test-password";

    store
        .add("github", "JBSWY3DPEHPK3PXP", password)
        .expect("add account");

    let secret = store.get_secret("github", password).expect("get secret");
    assert_eq!(secret, "JBSWY3DPEHPK3PXP");
}

#[test]
fn add_multiple_accounts() {
    let (_dir, store) = temp_store();
    let password = b"multi-pw";

    store.add("github", "GEZDGNBVGY3TQOJQ", password).unwrap();
    store.add("gitlab", "JBSWY3DPEHPK3PXP", password).unwrap();
    store.add("aws", "MFRGGZDFMZTWQ2LK", password).unwrap();

    let accounts = store.load(password).unwrap();
    assert_eq!(accounts.len(), 3);

    assert_eq!(store.get_secret("gitlab", password).unwrap(), "JBSWY3DPEHPK3PXP");
}

#[test]
fn accounts_keep_insertion_order() {
    let (_dir, store) = temp_store();
    let password = b"order-pw";

    store.add("zebra", "GEZDGNBVGY3TQOJQ", password).unwrap();
    store.add("alpha", "GEZDGNBVGY3TQOJQ", password).unwrap();
    store.add("middle", "GEZDGNBVGY3TQOJQ", password).unwrap();

    let accounts = store.load(password).unwrap();
    let names: Vec<&str> = accounts.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["zebra", "alpha", "middle"]);
}

// ---------------------------------------------------------------------------
// First run: missing file is an empty store
// ---------------------------------------------------------------------------

#[test]
fn load_missing_file_returns_empty_list() {
    let (_dir, store) = temp_store();

    assert!(!store.exists());
    let accounts = store.load(b"any-password").expect("load");
    assert!(accounts.is_empty());
}

#[test]
fn save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let store = AccountStore::new(dir.path().join("nested").join("deep").join("accounts.vault"));

    store.add("github", "JBSWY3DPEHPK3PXP", b"pw").expect("add");
    assert!(store.exists());
}

// ---------------------------------------------------------------------------
// Duplicate and missing account names
// ---------------------------------------------------------------------------

#[test]
fn add_duplicate_name_fails() {
    let (_dir, store) = temp_store();
    let password = b"dup-pw";

    store.add("github", "GEZDGNBVGY3TQOJQ", password).unwrap();

    let result = store.add("github", "JBSWY3DPEHPK3PXP", password);
    assert!(matches!(result, Err(OtpVaultError::AccountExists(_))));
}

#[test]
fn duplicate_check_is_case_insensitive() {
    let (_dir, store) = temp_store();
    let password = b"case-pw";

    store.add("GitHub", "GEZDGNBVGY3TQOJQ", password).unwrap();

    let result = store.add("github", "JBSWY3DPEHPK3PXP", password);
    assert!(matches!(result, Err(OtpVaultError::AccountExists(_))));
}

#[test]
fn lookup_is_case_insensitive() {
    let (_dir, store) = temp_store();
    let password = b"fold-pw";

    store.add("GitHub", "JBSWY3DPEHPK3PXP", password).unwrap();

    assert_eq!(
        store.get_secret("GITHUB", password).unwrap(),
        "JBSWY3DPEHPK3PXP"
    );
}

#[test]
fn get_missing_account_fails() {
    let (_dir, store) = temp_store();
    let password = b"missing-pw";

    store.add("github", "GEZDGNBVGY3TQOJQ", password).unwrap();

    let result = store.get_secret("does-not-exist", password);
    assert!(matches!(result, Err(OtpVaultError::AccountNotFound(_))));
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_removes_account() {
    let (_dir, store) = temp_store();
    let password = b"delete-pw";

    store.add("to-delete", "GEZDGNBVGY3TQOJQ", password).unwrap();
    store.add("to-keep", "JBSWY3DPEHPK3PXP", password).unwrap();

    store.delete("to-delete", password).expect("delete");

    // Getting the deleted account should fail.
    let result = store.get_secret("to-delete", password);
    assert!(matches!(result, Err(OtpVaultError::AccountNotFound(_))));

    // Deleting again should also fail.
    let result = store.delete("to-delete", password);
    assert!(matches!(result, Err(OtpVaultError::AccountNotFound(_))));

    // The other account is still there.
    assert_eq!(
        store.get_secret("to-keep", password).unwrap(),
        "JBSWY3DPEHPK3PXP"
    );
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_replaces_secret() {
    let (_dir, store) = temp_store();
    let password = b"update-pw";

    store.add("github", "GEZDGNBVGY3TQOJQ", password).unwrap();
    store.update("github", "JBSWY3DPEHPK3PXP", password).unwrap();

    assert_eq!(
        store.get_secret("github", password).unwrap(),
        "JBSWY3DPEHPK3PXP"
    );
}

#[test]
fn update_missing_account_fails() {
    let (_dir, store) = temp_store();
    let password = b"update-missing-pw";

    store.add("github", "GEZDGNBVGY3TQOJQ", password).unwrap();

    let result = store.update("gitlab", "JBSWY3DPEHPK3PXP", password);
    assert!(matches!(result, Err(OtpVaultError::AccountNotFound(_))));
}

#[test]
fn update_reencrypts_with_fresh_salt_and_nonce() {
    let (_dir, store) = temp_store();
    let password = b"fresh-pw";

    store.add("github", "JBSWY3DPEHPK3PXP", password).unwrap();
    let blob_before = store.load(password).unwrap()[0].encrypted_secret.clone();

    // Update to the same secret value with the same password.
    store.update("github", "JBSWY3DPEHPK3PXP", password).unwrap();
    let blob_after = store.load(password).unwrap()[0].encrypted_secret.clone();

    assert_ne!(
        blob_before, blob_after,
        "re-encryption must never reuse salt or nonce"
    );
}

// ---------------------------------------------------------------------------
// Wrong password and corrupted files
// ---------------------------------------------------------------------------

#[test]
fn wrong_password_fails_to_load() {
    let (_dir, store) = temp_store();

    store
        .add("github", "GEZDGNBVGY3TQOJQ", b"correct-password")
        .unwrap();

    let result = store.load(b"wrong-password");
    assert!(matches!(
        result,
        Err(OtpVaultError::IncorrectPasswordOrCorrupted)
    ));
}

#[test]
fn tampered_file_fails_to_load() {
    let (_dir, store) = temp_store();
    let password = b"tamper-pw";

    store.add("github", "GEZDGNBVGY3TQOJQ", password).unwrap();

    // Flip a byte in the middle of the file.
    let mut data = fs::read(store.path()).expect("read store file");
    let mid = data.len() / 2;
    data[mid] ^= 0xFF;
    fs::write(store.path(), &data).expect("write tampered file");

    let result = store.load(password);
    assert!(matches!(
        result,
        Err(OtpVaultError::IncorrectPasswordOrCorrupted)
    ));
}

#[test]
fn truncated_file_is_malformed() {
    let (_dir, store) = temp_store();
    let password = b"trunc-pw";

    store.add("github", "GEZDGNBVGY3TQOJQ", password).unwrap();

    // Truncate below the salt + nonce header.
    let data = fs::read(store.path()).unwrap();
    fs::write(store.path(), &data[..20]).unwrap();

    let result = store.load(password);
    assert!(matches!(result, Err(OtpVaultError::MalformedBlob)));
}

#[test]
fn valid_encryption_with_garbage_payload_is_corrupt() {
    let (_dir, store) = temp_store();
    let password = b"garbage-pw";

    // A file that decrypts fine but does not hold an account list.
    let blob = encrypt(b"not an account list", password).expect("encrypt");
    fs::write(store.path(), &blob).unwrap();

    let result = store.load(password);
    assert!(matches!(result, Err(OtpVaultError::StoreCorrupt(_))));
}
