//! Profile records.

use crate::record::Record;
use crate::types::{MemberTypeId, RecordId};
use serde::{Deserialize, Serialize};

/// A stored profile.
///
/// Each user has at most one profile; the store enforces the one-to-one
/// constraint at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Unique identifier, assigned at creation.
    pub id: RecordId,
    /// Owning user. Immutable; a profile cannot be moved between users.
    pub user_id: RecordId,
    /// Member type of the owning user.
    pub member_type_id: MemberTypeId,
    /// Avatar URL or handle.
    pub avatar: String,
    /// Self-reported sex.
    pub sex: String,
    /// Birthday as a unix timestamp in milliseconds.
    pub birthday: i64,
    /// Country of residence.
    pub country: String,
    /// Street address.
    pub street: String,
}

impl Profile {
    /// Builds a stored profile from a draft and a freshly assigned id.
    pub fn new(id: RecordId, draft: NewProfile) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            member_type_id: draft.member_type_id,
            avatar: draft.avatar,
            sex: draft.sex,
            birthday: draft.birthday,
            country: draft.country,
            street: draft.street,
        }
    }
}

impl Record for Profile {
    type Key = RecordId;
    type Patch = ProfilePatch;

    fn key(&self) -> &RecordId {
        &self.id
    }

    fn apply(&mut self, patch: ProfilePatch) {
        if let Some(member_type_id) = patch.member_type_id {
            self.member_type_id = member_type_id;
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = avatar;
        }
        if let Some(sex) = patch.sex {
            self.sex = sex;
        }
        if let Some(birthday) = patch.birthday {
            self.birthday = birthday;
        }
        if let Some(country) = patch.country {
            self.country = country;
        }
        if let Some(street) = patch.street {
            self.street = street;
        }
    }
}

/// Input for creating a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    /// Owning user; must resolve to an existing user.
    pub user_id: RecordId,
    /// Member type; must resolve to a seeded member type.
    pub member_type_id: MemberTypeId,
    /// Avatar URL or handle.
    pub avatar: String,
    /// Self-reported sex.
    pub sex: String,
    /// Birthday as a unix timestamp in milliseconds.
    pub birthday: i64,
    /// Country of residence.
    pub country: String,
    /// Street address.
    pub street: String,
}

/// Partial update for a profile.
///
/// `None` fields are left unchanged. The owning user is not patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    /// New member type; must resolve when patched through the store.
    pub member_type_id: Option<MemberTypeId>,
    /// New avatar.
    pub avatar: Option<String>,
    /// New sex.
    pub sex: Option<String>,
    /// New birthday.
    pub birthday: Option<i64>,
    /// New country.
    pub country: Option<String>,
    /// New street.
    pub street: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(user_id: RecordId) -> NewProfile {
        NewProfile {
            user_id,
            member_type_id: MemberTypeId::basic(),
            avatar: "avatar.png".into(),
            sex: "f".into(),
            birthday: 631152000000,
            country: "NL".into(),
            street: "Keizersgracht 1".into(),
        }
    }

    #[test]
    fn patch_preserves_unpatched_fields() {
        let mut profile = Profile::new(RecordId::new(), draft(RecordId::new()));

        profile.apply(ProfilePatch {
            country: Some("BE".into()),
            ..ProfilePatch::default()
        });

        assert_eq!(profile.country, "BE");
        assert_eq!(profile.street, "Keizersgracht 1");
        assert_eq!(profile.member_type_id, MemberTypeId::basic());
    }

    #[test]
    fn patch_can_change_member_type() {
        let mut profile = Profile::new(RecordId::new(), draft(RecordId::new()));

        profile.apply(ProfilePatch {
            member_type_id: Some(MemberTypeId::business()),
            ..ProfilePatch::default()
        });

        assert_eq!(profile.member_type_id, MemberTypeId::business());
    }
}
