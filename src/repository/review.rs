// SPDX-License-Identifier: GPL-3.0-only
use crate::model::Review;
use crate::repository::memory::MemoryRepository;
use crate::repository::traits::Repository;

pub type ReviewRepository = MemoryRepository<Review>;

impl MemoryRepository<Review> {
    pub async fn query_by_order_id(&self, order_id: &str) -> Vec<Review> {
        self.find(&|r: &Review| r.key.order_id == order_id).await
    }

    pub async fn query_by_user_id(&self, user_id: &str) -> Vec<Review> {
        self.find(&|r: &Review| r.key.user_id == user_id).await
    }

    pub async fn query_by_ratings(&self, ratings: i32) -> Vec<Review> {
        self.find(&|r: &Review| r.details.ratings == ratings).await
    }

    pub async fn query_by_comments(&self, comments: &str) -> Vec<Review> {
        self.find(&|r: &Review| r.details.comments == comments).await
    }
}
