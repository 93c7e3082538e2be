// SPDX-License-Identifier: GPL-3.0-only
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::console::Console;
use crate::model::{ReviewDetails, ReviewKey};
use crate::render;
use crate::repository::Repository;

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn read_review_key(&mut self) -> anyhow::Result<ReviewKey> {
        let order_id = self.read_line("Enter orderId: ").await?;
        let user_id = self.read_line("Enter userId: ").await?;
        Ok(ReviewKey::new(order_id, user_id))
    }

    pub(super) async fn create_review(&mut self) -> anyhow::Result<()> {
        let Some(p) = self.read_attributes("{orderId, userId, comments, ratings}", 4).await? else {
            return Ok(());
        };
        let Some(ratings) = self.int_attribute(&p[3], "ratings").await? else {
            return Ok(());
        };

        let key = ReviewKey::new(p[0].clone(), p[1].clone());
        let details = ReviewDetails {
            comments: p[2].clone(),
            ratings,
        };
        let result = self.repos.reviews.insert(key, details).await;
        self.print_created(result).await
    }

    pub(super) async fn update_review(&mut self) -> anyhow::Result<()> {
        let key = self.read_review_key().await?;
        let Some(p) = self.read_attributes("{comments, ratings}", 2).await? else {
            return Ok(());
        };
        let Some(ratings) = self.int_attribute(&p[1], "ratings").await? else {
            return Ok(());
        };

        let details = ReviewDetails {
            comments: p[0].clone(),
            ratings,
        };
        let result = self.repos.reviews.update(&key, details).await;
        self.print_outcome("Updated (or error):", result).await
    }

    pub(super) async fn delete_review(&mut self) -> anyhow::Result<()> {
        let key = self.read_review_key().await?;
        let result = self.repos.reviews.delete(&key).await;
        self.print_outcome("Deleted (or error):", result).await
    }

    pub(super) async fn query_reviews(&mut self, field: &str) -> anyhow::Result<Option<String>> {
        let repos = Arc::clone(&self.repos);
        let repo = &repos.reviews;
        let found = match field {
            "orderId" => repo.query_by_order_id(&self.read_line("Enter orderId: ").await?).await,
            "userId" => repo.query_by_user_id(&self.read_line("Enter userId: ").await?).await,
            "comments" => {
                repo.query_by_comments(&self.read_line("Enter comments: ").await?)
                    .await
            }
            "ratings" => {
                let Some(ratings) = self.read_int("Enter ratings (int): ", "ratings").await? else {
                    return Ok(None);
                };
                repo.query_by_ratings(ratings).await
            }
            _ => return self.unknown_field(field).await,
        };
        Ok(Some(render::records(&found)?))
    }
}

#[cfg(test)]
mod tests {
    use crate::console::tests::run_script;
    use crate::model::ReviewKey;
    use crate::repository::{Repositories, Repository};
    use crate::test_helpers::sample_review;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_review_create_and_query_by_ratings() {
        let repos = Arc::new(Repositories::new());
        let script = concat!(
            "6\n",
            "1\n{7, 3, \"fast\" drone, 5}\n",
            "1\n{8, 3, late, 2}\n",
            "3\nratings\n5\n5\n",
            "5\n0\n",
        );
        let out = run_script(Arc::clone(&repos), script).await;

        assert!(out.contains(
            "Query result:\n[{\"orderId\":\"7\",\"userId\":\"3\",\"comments\":\"\\\"fast\\\" drone\",\"ratings\":5}]"
        ));
        assert_eq!(repos.reviews.len().await, 2);
    }

    #[tokio::test]
    async fn test_review_update_keeps_composite_key() {
        let repos = Arc::new(Repositories::new());
        repos
            .reviews
            .insert(ReviewKey::new("7", "3"), sample_review("ok", 3))
            .await
            .unwrap();

        let out = run_script(Arc::clone(&repos), "6\n2\n7\n3\n{great, 5}\n5\n0\n").await;
        assert!(out.contains(
            "Updated (or error):\n{\"orderId\":\"7\",\"userId\":\"3\",\"comments\":\"great\",\"ratings\":5}"
        ));
    }

    #[tokio::test]
    async fn test_review_delete_missing_reports_composite_key() {
        let repos = Arc::new(Repositories::new());
        let out = run_script(repos, "6\n4\n7\n9\n5\n0\n").await;
        assert!(out.contains(
            "{\"error\":\"not_found\",\"field\":\"compositeKey\",\"value\":\"7|9\"}"
        ));
    }

    #[tokio::test]
    async fn test_review_ratings_must_be_integer() {
        let repos = Arc::new(Repositories::new());
        let out = run_script(Arc::clone(&repos), "6\n1\n{7, 3, ok, five}\n5\n0\n").await;
        assert!(out.contains("[Input Error] ratings must be an integer."));
        assert_eq!(repos.reviews.len().await, 0);
    }
}
