//! Monotonic merge patch for the scalar profile fields.

use serde::{Deserialize, Serialize};

use super::ProfileData;

/// One value per scalar profile field: `None` (or an empty string) means
/// "no change", a non-empty value means "replace".
///
/// The skill list is not part of the patch; it has its own append/replace
/// operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub day_rate: Option<String>,
    pub availability: Option<String>,
    pub work_style: Option<String>,
}

impl ProfilePatch {
    /// Apply the merge rule to `profile`. Returns `true` when any field
    /// changed.
    pub(crate) fn apply(&self, profile: &mut ProfileData) -> bool {
        let mut changed = false;
        merge_field(&mut profile.name, &self.name, &mut changed);
        merge_field(&mut profile.role, &self.role, &mut changed);
        merge_field(&mut profile.company, &self.company, &mut changed);
        merge_field(&mut profile.location, &self.location, &mut changed);
        merge_field(&mut profile.day_rate, &self.day_rate, &mut changed);
        merge_field(&mut profile.availability, &self.availability, &mut changed);
        merge_field(&mut profile.work_style, &self.work_style, &mut changed);
        changed
    }

    /// Whether every field is "no change".
    pub fn is_empty(&self) -> bool {
        [
            &self.name,
            &self.role,
            &self.company,
            &self.location,
            &self.day_rate,
            &self.availability,
            &self.work_style,
        ]
        .iter()
        .all(|field| normalized(field).is_none())
    }
}

fn merge_field(target: &mut Option<String>, incoming: &Option<String>, changed: &mut bool) {
    if let Some(value) = normalized(incoming) {
        if target.as_deref() != Some(value) {
            *target = Some(value.to_string());
            *changed = true;
        }
    }
}

fn normalized(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
