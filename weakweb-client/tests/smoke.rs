use std::time::{SystemTime, UNIX_EPOCH};

use weakweb_client::{UserUpdate, WeakwebClient, WeakwebError};

fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock must be after unix epoch")
        .as_nanos();
    format!("{nanos}")
}

#[tokio::test]
#[ignore = "requires running Weak Website backend"]
async fn http_smoke_flow() {
    let base_url =
        std::env::var("WEAKWEB_SERVER_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let mut client = WeakwebClient::new(base_url.clone());

    let suffix = unique_suffix();
    let email = format!("smoke_{suffix}@example.com");
    let password = "password123";

    let signup = client
        .signup(&email, password, "user")
        .await
        .expect("signup request must complete");
    assert!(signup.error.is_none(), "signup rejected: {:?}", signup.error);

    let login = client
        .login(&email, password)
        .await
        .expect("login request must complete");
    assert!(login.token.is_some(), "login failed: {:?}", login.error);
    assert!(client.get_token().is_some());

    // Auth-ручки не превращают не-2xx в Err: неверный пароль приходит
    // как Ok с заполненным `error` и без токена.
    let mut rejected_client = WeakwebClient::new(base_url.clone());
    let rejected = rejected_client
        .login(&email, "definitely-wrong-password")
        .await
        .expect("failed login must still return the parsed body");
    assert!(rejected.token.is_none());
    assert!(
        rejected.error.is_some(),
        "failed login must carry an error field"
    );
    assert!(rejected_client.get_token().is_none());

    // CRUD-ручки, наоборот, превращают отказ сервера в Err.
    let mut forged_client = WeakwebClient::new(base_url.clone());
    forged_client.set_token("aaaa.bbbb.cccc");
    let err = forged_client
        .me()
        .await
        .expect_err("me with a forged token must be rejected by the server");
    assert!(matches!(err, WeakwebError::Unauthorized));

    let me = client.me().await.expect("me must succeed");
    assert_eq!(me.email, email);
    assert_eq!(client.current_user_id(), Some(me.id));

    let created = client
        .create_post("smoke post content")
        .await
        .expect("create_post must succeed");
    assert_eq!(created.content, "smoke post content");
    assert_eq!(created.user_id, me.id);

    let listed = client.list_posts().await.expect("list_posts must succeed");
    assert!(listed.iter().any(|post| post.id == created.id));

    let mine = client
        .list_user_posts(me.id)
        .await
        .expect("list_user_posts must succeed");
    assert!(mine.iter().all(|post| post.user_id == me.id));

    let updated = client
        .update_user(me.id, &UserUpdate {
            email: None,
            password: Some("password1234".to_string()),
            role: None,
        })
        .await
        .expect("update_user must succeed");
    assert_eq!(updated.id, me.id);

    client
        .delete_post(created.id)
        .await
        .expect("delete_post must succeed");

    let after_delete = client.list_posts().await.expect("list_posts must succeed");
    assert!(after_delete.iter().all(|post| post.id != created.id));
}

// Токена нет, поэтому запрос отклоняется локально ещё до сети.
#[tokio::test]
async fn protected_calls_require_token() {
    let client = WeakwebClient::new("http://localhost:8080");

    let err = client.me().await.expect_err("me without token must fail");
    assert!(matches!(err, WeakwebError::Unauthorized));

    let err = client
        .create_post("no token")
        .await
        .expect_err("create_post without token must fail");
    assert!(matches!(err, WeakwebError::Unauthorized));
}
