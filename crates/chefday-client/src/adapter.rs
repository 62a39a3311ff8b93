//! Presentation adapter: runs one lookup and holds what to display.

use tracing::error;

use chefday_core::{RecipeId, ViewState};

use crate::http::JsonFetcher;
use crate::pipeline::BirthdayPipeline;

/// Holds the display state of a single birthday lookup.
///
/// Starts [`ViewState::Pending`] and settles exactly once.
#[derive(Debug, Default)]
pub struct BirthdayView {
    state: ViewState,
}

impl BirthdayView {
    /// Create a pending view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Consume and return the state.
    pub fn into_state(self) -> ViewState {
        self.state
    }

    /// Run the lookup for `id` and settle the view.
    ///
    /// Does nothing once the view has settled.
    pub async fn load<F: JsonFetcher>(
        &mut self,
        pipeline: &BirthdayPipeline<F>,
        id: RecipeId,
    ) -> &ViewState {
        if self.state.is_settled() {
            return &self.state;
        }

        let result = pipeline.get_chef_birthday(id).await;
        if let Err(e) = &result {
            error!(recipe_id = %id, error = %e, "Birthday lookup failed");
        }

        self.state = ViewState::from_result(result);
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::testing::StubFetcher;

    #[tokio::test]
    async fn test_load_success() {
        let pipeline = BirthdayPipeline::new(
            StubFetcher::new()
                .with_json("http://upstream.test/recipes/1", json!({"authorId": 166}))
                .with_json("http://upstream.test/users/166", json!({"birthDate": "1996-07-24"})),
            "http://upstream.test",
        );
        let mut view = BirthdayView::new();
        assert_eq!(view.state(), &ViewState::Pending);

        let state = view.load(&pipeline, RecipeId::new(1)).await;
        assert_eq!(
            state,
            &ViewState::Loaded {
                birthday: "24/Jul/1996".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_load_failure_then_settled() {
        let pipeline = BirthdayPipeline::new(
            StubFetcher::new().with_json(
                "http://upstream.test/recipes/4",
                json!({"message": "Recipe not found"}),
            ),
            "http://upstream.test",
        );
        let mut view = BirthdayView::new();

        view.load(&pipeline, RecipeId::new(4)).await;
        view.load(&pipeline, RecipeId::new(4)).await;

        assert_eq!(pipeline.fetcher().calls().len(), 1);
        assert_eq!(view.into_state().to_string(), "Error: Recipe not found");
    }
}
