//! Typed helpers for the ClassLink info API.

// crates.io
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	auth::{AccessToken, SourcedId},
	http::RosterHttpClient,
	oauth1::percent_encode,
	oneclick::OneClickClient,
};

/// Signed-in user's profile.
pub const USER_INFO_PATH: &str = "v2/my/info";
/// Signed-in user's district.
pub const USER_DISTRICT_PATH: &str = "v2/my/district";
/// Profiles linked to the signed-in user.
pub const USER_PROFILES_PATH: &str = "v2/my/profiles";
/// Students linked to a parent account.
pub const USER_CHILDREN_PATH: &str = "v2/my/students";
/// Groups the signed-in user belongs to.
pub const USER_GROUPS_PATH: &str = "my/groups";
/// OneRoster record of the signed-in user.
pub const ONEROSTER_INFO_PATH: &str = "v2/oneroster/my/info";
/// OneRoster classes the signed-in user is enrolled in.
pub const ONEROSTER_CLASSES_PATH: &str = "v2/oneroster/my/classes";

impl<C> OneClickClient<C>
where
	C: ?Sized + RosterHttpClient,
{
	/// `GET v2/my/info`.
	pub async fn user_info(&self, token: &AccessToken) -> Result<Value> {
		self.info(token, USER_INFO_PATH).await
	}

	/// `GET v2/my/district`.
	pub async fn user_district(&self, token: &AccessToken) -> Result<Value> {
		self.info(token, USER_DISTRICT_PATH).await
	}

	/// `GET v2/my/profiles`.
	pub async fn user_profiles(&self, token: &AccessToken) -> Result<Value> {
		self.info(token, USER_PROFILES_PATH).await
	}

	/// `GET v2/my/students`; only meaningful for parent accounts.
	pub async fn user_children(&self, token: &AccessToken) -> Result<Value> {
		self.info(token, USER_CHILDREN_PATH).await
	}

	/// `GET my/groups`.
	pub async fn user_groups(&self, token: &AccessToken) -> Result<Value> {
		self.info(token, USER_GROUPS_PATH).await
	}

	/// `GET v2/oneroster/my/info`; requires OneRoster to be enabled for the district.
	pub async fn oneroster_info(&self, token: &AccessToken) -> Result<Value> {
		self.info(token, ONEROSTER_INFO_PATH).await
	}

	/// `GET v2/oneroster/my/classes`.
	pub async fn oneroster_classes(&self, token: &AccessToken) -> Result<Value> {
		self.info(token, ONEROSTER_CLASSES_PATH).await
	}

	/// Teachers of one class, taken from the `teachers` node.
	pub async fn class_teachers(&self, token: &AccessToken, class: &SourcedId) -> Result<Value> {
		self.info_node(token, &class_path(class, "teachers"), "teachers").await
	}

	/// Students of one class, taken from the `students` node.
	pub async fn class_students(&self, token: &AccessToken, class: &SourcedId) -> Result<Value> {
		self.info_node(token, &class_path(class, "students"), "students").await
	}
}

fn class_path(class: &SourcedId, member: &str) -> String {
	format!("{ONEROSTER_CLASSES_PATH}/{}/{member}", percent_encode(class))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn class_ids_are_escaped_into_one_segment() {
		let class = SourcedId::new("math/101").expect("Sourced id fixture should be valid.");

		assert_eq!(class_path(&class, "teachers"), "v2/oneroster/my/classes/math%2F101/teachers");
	}
}
