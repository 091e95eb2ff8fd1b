//! Чистая логика ленты постов, общая для компонентов.

use crate::models::Post;

/// Убирает удалённый пост из локального состояния: список не
/// перезагружается с сервера.
pub(crate) fn remove_post(posts: &mut Vec<Post>, post_id: i64) {
    posts.retain(|post| post.id != post_id);
}

/// Показывать ли кнопку удаления. Чисто косметическое решение на основе
/// неверифицированного `userId` из токена; реальную проверку делает сервер.
pub(crate) fn can_delete(current_user_id: Option<i64>, owner_id: i64) -> bool {
    current_user_id == Some(owner_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(id: i64, user_id: i64) -> Post {
        Post {
            id,
            content: format!("post {id}"),
            created_at: "2026-03-01T00:00:00Z".to_string(),
            user_id,
            user_email: "someone@example.com".to_string(),
        }
    }

    #[test]
    fn remove_post_filters_only_the_deleted_one() {
        let mut posts = vec![sample_post(1, 7), sample_post(2, 7), sample_post(3, 9)];
        remove_post(&mut posts, 2);
        let ids: Vec<i64> = posts.iter().map(|post| post.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn remove_post_ignores_unknown_id() {
        let mut posts = vec![sample_post(1, 7)];
        remove_post(&mut posts, 999);
        assert_eq!(posts.len(), 1);
    }

    #[test]
    fn can_delete_requires_matching_owner() {
        assert!(can_delete(Some(7), 7));
        assert!(!can_delete(Some(7), 8));
        assert!(!can_delete(None, 7));
    }
}
