/// Profile display names.
///
/// Sources are tried in a fixed order and the first usable value wins:
///
/// 1. The profile's `Preferences`: `profile.name`, then `profile.gaia_name`
///    / `profile.user_name`, then a single-entry `account_info`.
/// 2. The global `Local State` info cache entry for the directory name.
/// 3. The directory's base name, verbatim.
///
/// A generic label such as `"Person 2"` is never accepted at any step.
use crate::metadata::{AccountInfo, NameCache, Preferences};
use crate::scanner::base_name;
use std::path::Path;
use tracing::debug;

/// `true` for empty/blank names and browser default labels like `"Person 3"`.
///
/// Case-insensitive; surrounding whitespace is ignored, and any run of
/// whitespace may separate `person` from the number.
pub fn is_generic(name: &str) -> bool {
    let trimmed = name.trim().to_ascii_lowercase();
    if trimmed.is_empty() {
        return true;
    }
    let Some(rest) = trimmed.strip_prefix("person") else {
        return false;
    };
    if !rest.starts_with(char::is_whitespace) {
        return false;
    }
    let digits = rest.trim_start();
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn usable(candidate: Option<&str>) -> Option<&str> {
    candidate.filter(|name| !is_generic(name))
}

/// Best name found in a `Preferences` document, if any.
pub fn name_from_preferences(prefs: &Preferences) -> Option<String> {
    let section = &prefs.profile;

    if let Some(name) = usable(section.name.as_deref()) {
        debug!("Using profile.name = {name}");
        return Some(name.to_string());
    }

    for (key, value) in [
        ("gaia_name", section.gaia_name.as_deref()),
        ("user_name", section.user_name.as_deref()),
    ] {
        if let Some(name) = usable(value) {
            debug!("Using profile.{key} = {name}");
            return Some(name.to_string());
        }
    }

    // Several signed-in accounts make any single one misleading.
    match prefs.account_info.as_deref() {
        Some([account]) => name_from_account(account),
        _ => None,
    }
}

/// `"Full Name (email)"`, or whichever half is available.
fn name_from_account(account: &AccountInfo) -> Option<String> {
    let full_name = usable(account.full_name.as_deref());
    let email = account.email.as_deref().filter(|e| !e.trim().is_empty());

    let combined = match (full_name, email) {
        (Some(name), Some(email)) => format!("{name} ({email})"),
        (Some(name), None) => name.to_string(),
        (None, Some(email)) => email.to_string(),
        (None, None) => return None,
    };
    debug!("Using account_info = {combined}");
    usable(Some(combined.as_str())).map(str::to_string)
}

/// Best name found in the info cache for `profile_dir_name`, if any.
pub fn name_from_cache(profile_dir_name: &str, cache: &NameCache) -> Option<String> {
    let entry = cache.get(profile_dir_name)?;
    let name = [
        entry.name.as_deref(),
        entry.gaia_name.as_deref(),
        entry.user_name.as_deref(),
    ]
    .into_iter()
    .find_map(usable)?;
    debug!("Using info_cache = {name}");
    Some(name.to_string())
}

/// Display name for `profile_dir`. Never empty; never fails.
pub fn resolve_profile_name(profile_dir: &Path, cache: &NameCache) -> String {
    let dir_name = base_name(profile_dir);

    if let Some(name) = Preferences::load(profile_dir).and_then(|p| name_from_preferences(&p)) {
        return name;
    }

    if let Some(name) = name_from_cache(&dir_name, cache) {
        return name;
    }

    debug!("Falling back to folder name for {}", profile_dir.display());
    dir_name
}
