use axum::response::Response;
use docrack::server::model::session::{csrf::SessionCsrf, user::SessionUserId};
use docrack_test_utils::prelude::*;

/// Insert the test user, put it in the session and issue a CSRF token.
///
/// Returns the user ID and the token forms must carry.
pub async fn sign_in(test: &TestContext) -> Result<(i32, String), TestError> {
    let user = test.user().insert_user(TEST_USERNAME, TEST_PASSWORD).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();
    let csrf_token = SessionCsrf::get_or_create(&test.session).await.unwrap();

    Ok((user.id, csrf_token))
}

pub async fn body_text(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Pull the CSRF token out of the first form on a rendered page.
pub fn csrf_token_from(html: &str) -> String {
    let field = html
        .find("name=\"csrf_token\"")
        .expect("page should contain a CSRF field");
    let rest = &html[field..];
    let value_start = rest.find("value=\"").unwrap() + "value=\"".len();
    let value_len = rest[value_start..].find('"').unwrap();

    rest[value_start..value_start + value_len].to_string()
}
