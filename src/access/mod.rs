use std::collections::HashSet;

use base64::{
    Engine,
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
};
use parking_lot::Mutex;

/// Encodes a name and date into an access code.
///
/// The encoding is reversible and deterministic; codes are bearer tokens, not
/// secrets.
pub fn encode_access_code(name: &str, date: &str) -> String {
    STANDARD.encode(format!("{name}{date}"))
}

/// Directory name under the storage root that holds a tenant's folders.
pub fn tenant_directory(code: &str) -> String {
    URL_SAFE_NO_PAD.encode(code)
}

/// Set of access codes accepted by the authentication gate.
pub trait AccessCodeStore: Send + Sync {
    fn register(&self, code: String);

    fn validate(&self, code: &str) -> bool;

    /// Derives a code from `name` and `date` and registers it.
    fn generate(&self, name: &str, date: &str) -> String {
        let code = encode_access_code(name, date);
        self.register(code.clone());
        code
    }
}

/// Process-local store; codes live until the process exits.
#[derive(Debug, Default)]
pub struct InMemoryAccessCodeStore {
    codes: Mutex<HashSet<String>>,
}

impl InMemoryAccessCodeStore {
    pub fn with_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: Mutex::new(codes.into_iter().map(Into::into).collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.codes.lock().len()
    }
}

impl AccessCodeStore for InMemoryAccessCodeStore {
    fn register(&self, code: String) {
        self.codes.lock().insert(code);
    }

    fn validate(&self, code: &str) -> bool {
        self.codes.lock().contains(code)
    }
}
