use crate::domain::{
    analysis::{
        entities::{IngredientInfo, MenuItem, Place, ProductAnalysis},
        parse::{parse_ingredient_info, parse_menu_items, parse_places, parse_product_analysis},
        ports::{AnalysisService, LlmClient},
        prompt::{
            ingredient_info_prompt, menu_analysis_prompt, places_prompt, product_analysis_prompt,
        },
        schema::{menu_analysis_schema, product_analysis_schema},
        value_objects::{
            AnalyzeMenuInput, AnalyzeProductInput, Coordinates, IngredientQuery, PlacesQuery,
        },
    },
    common::{entities::app_errors::CoreError, services::Service},
    preferences::ports::PreferenceRepository,
    screen::{
        entities::{LocationState, ScreenResolution, Tool, ToolResult},
        ports::ScreenSessionRepository,
    },
};

impl<LLM, SS, PF> Service<LLM, SS, PF>
where
    LLM: LlmClient,
    SS: ScreenSessionRepository,
    PF: PreferenceRepository,
{
    /// Resolve the screen that initiated the call, then hand the outcome back
    /// to the caller. The screen ends in exactly one of success or failed.
    async fn settle<T: Clone>(
        &self,
        device_id: &str,
        tool: Tool,
        outcome: Result<T, CoreError>,
        wrap: fn(T) -> ToolResult,
    ) -> Result<T, CoreError> {
        match outcome {
            Ok(value) => {
                self.screen_sessions
                    .finish(device_id, ScreenResolution::Success(wrap(value.clone())))
                    .await?;
                Ok(value)
            }
            Err(error) => {
                tracing::warn!(device_id, tool = tool.as_str(), %error, "analysis failed");
                self.screen_sessions
                    .finish(
                        device_id,
                        ScreenResolution::Failure(tool, error.user_message(tool)),
                    )
                    .await?;
                Err(error)
            }
        }
    }
}

impl<LLM, SS, PF> AnalysisService for Service<LLM, SS, PF>
where
    LLM: LlmClient,
    SS: ScreenSessionRepository,
    PF: PreferenceRepository,
{
    async fn analyze_product_image(
        &self,
        input: AnalyzeProductInput,
    ) -> Result<ProductAnalysis, CoreError> {
        if input.image_data.is_empty() {
            return Err(CoreError::Invalid("empty image payload".to_string()));
        }

        self.screen_sessions
            .begin(&input.device_id, Tool::Product)
            .await?;

        let raw = self
            .llm_client
            .generate_with_image(
                product_analysis_prompt(),
                input.image_data,
                product_analysis_schema(),
            )
            .await;

        let outcome = raw.and_then(|text| parse_product_analysis(&text));
        self.settle(&input.device_id, Tool::Product, outcome, ToolResult::Product)
            .await
    }

    async fn analyze_menu_image(
        &self,
        input: AnalyzeMenuInput,
    ) -> Result<Vec<MenuItem>, CoreError> {
        if input.image_data.is_empty() {
            return Err(CoreError::Invalid("empty image payload".to_string()));
        }

        self.screen_sessions
            .begin(&input.device_id, Tool::Menu)
            .await?;

        let raw = self
            .llm_client
            .generate_with_image(menu_analysis_prompt(), input.image_data, menu_analysis_schema())
            .await;

        let outcome = raw.and_then(|text| parse_menu_items(&text));
        self.settle(&input.device_id, Tool::Menu, outcome, ToolResult::Menu)
            .await
    }

    async fn get_ingredient_info(
        &self,
        input: IngredientQuery,
    ) -> Result<IngredientInfo, CoreError> {
        let query = input.query.trim();
        if query.is_empty() {
            return Err(CoreError::Invalid("empty ingredient query".to_string()));
        }

        self.screen_sessions
            .begin(&input.device_id, Tool::Ingredient)
            .await?;

        let raw = self
            .llm_client
            .generate_with_text(ingredient_info_prompt(query), None)
            .await;

        let outcome = raw.and_then(|text| parse_ingredient_info(&text));
        self.settle(
            &input.device_id,
            Tool::Ingredient,
            outcome,
            ToolResult::Ingredient,
        )
        .await
    }

    async fn find_places_nearby(&self, input: PlacesQuery) -> Result<Vec<Place>, CoreError> {
        let query = input.query.trim();
        if query.is_empty() {
            return Err(CoreError::Invalid("empty places query".to_string()));
        }

        let location: Coordinates = match self.screen_sessions.location(&input.device_id).await? {
            LocationState::Acquired(coordinates) => coordinates,
            LocationState::Unset | LocationState::Denied => {
                return Err(CoreError::LocationRequired);
            }
        };

        self.screen_sessions
            .begin(&input.device_id, Tool::Places)
            .await?;

        let raw = self
            .llm_client
            .generate_with_location(places_prompt(query, location), location)
            .await;

        let outcome = raw.and_then(|text| parse_places(&text));
        self.settle(&input.device_id, Tool::Places, outcome, ToolResult::Places)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        analysis::ports::MockLlmClient, preferences::ports::MockPreferenceRepository,
        screen::ports::MockScreenSessionRepository, status::Status,
    };

    fn service(
        llm: MockLlmClient,
        screens: MockScreenSessionRepository,
    ) -> Service<MockLlmClient, MockScreenSessionRepository, MockPreferenceRepository> {
        Service::new(llm, screens, MockPreferenceRepository::new())
    }

    const DEVICE: &str = "device-1";

    #[tokio::test]
    async fn product_analysis_resolves_screen_with_success() {
        let mut llm = MockLlmClient::new();
        llm.expect_generate_with_image().times(1).returning(|_, _, _| {
            Box::pin(async {
                Ok(r#"{
                    "status": "halal",
                    "productName": "Oat Milk",
                    "ingredients": [{ "name": "oats", "status": "halal" }],
                    "reasoning": "كل المكونات نباتية."
                }"#
                .to_string())
            })
        });

        let mut screens = MockScreenSessionRepository::new();
        screens
            .expect_begin()
            .withf(|device, tool| device == DEVICE && *tool == Tool::Product)
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));
        screens
            .expect_finish()
            .withf(|device, resolution| {
                device == DEVICE
                    && matches!(
                        resolution,
                        ScreenResolution::Success(ToolResult::Product(_))
                    )
            })
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let analysis = service(llm, screens)
            .analyze_product_image(AnalyzeProductInput {
                device_id: DEVICE.to_string(),
                image_data: vec![0xFF, 0xD8],
            })
            .await
            .unwrap();

        assert_eq!(analysis.status, Status::Halal);
        assert_eq!(analysis.product_name, "Oat Milk");
    }

    #[tokio::test]
    async fn product_analysis_with_foreign_enum_fails_and_marks_screen_failed() {
        let mut llm = MockLlmClient::new();
        llm.expect_generate_with_image().times(1).returning(|_, _, _| {
            Box::pin(async {
                Ok(r#"{
                    "status": "kosher",
                    "productName": "Candy",
                    "ingredients": [],
                    "reasoning": "..."
                }"#
                .to_string())
            })
        });

        let mut screens = MockScreenSessionRepository::new();
        screens
            .expect_begin()
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));
        screens
            .expect_finish()
            .withf(|_, resolution| {
                matches!(
                    resolution,
                    ScreenResolution::Failure(Tool::Product, message)
                        if message == "لم نتمكن من تحليل المنتج. حاول مرة أخرى."
                )
            })
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let result = service(llm, screens)
            .analyze_product_image(AnalyzeProductInput {
                device_id: DEVICE.to_string(),
                image_data: vec![0xFF],
            })
            .await;

        assert!(matches!(result, Err(CoreError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn transport_failure_collapses_to_the_same_user_message() {
        let mut llm = MockLlmClient::new();
        llm.expect_generate_with_image().times(1).returning(|_, _, _| {
            Box::pin(async { Err(CoreError::ExternalServiceError("timeout".to_string())) })
        });

        let mut screens = MockScreenSessionRepository::new();
        screens
            .expect_begin()
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));
        screens
            .expect_finish()
            .withf(|_, resolution| {
                matches!(
                    resolution,
                    ScreenResolution::Failure(Tool::Menu, message)
                        if message == "لم نتمكن من تحليل القائمة. تأكد من أن الصورة واضحة."
                )
            })
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let result = service(llm, screens)
            .analyze_menu_image(AnalyzeMenuInput {
                device_id: DEVICE.to_string(),
                image_data: vec![0xFF],
            })
            .await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn submission_while_pending_is_rejected_without_a_model_call() {
        let llm = MockLlmClient::new();

        let mut screens = MockScreenSessionRepository::new();
        screens
            .expect_begin()
            .times(1)
            .returning(|_, _| Box::pin(async { Err(CoreError::AnalysisPending) }));

        let result = service(llm, screens)
            .analyze_product_image(AnalyzeProductInput {
                device_id: DEVICE.to_string(),
                image_data: vec![0xFF],
            })
            .await;

        assert!(matches!(result, Err(CoreError::AnalysisPending)));
    }

    #[tokio::test]
    async fn empty_image_is_rejected_before_touching_the_screen() {
        let result = service(MockLlmClient::new(), MockScreenSessionRepository::new())
            .analyze_product_image(AnalyzeProductInput {
                device_id: DEVICE.to_string(),
                image_data: Vec::new(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn ingredient_info_returns_model_prose_verbatim() {
        let answer = "E471 مستحلب، قد يكون نباتياً أو حيوانياً حسب المصدر: مشبوه.";

        let mut llm = MockLlmClient::new();
        llm.expect_generate_with_text()
            .withf(|prompt, schema| prompt.contains("\"E471\"") && schema.is_none())
            .times(1)
            .returning(move |_, _| Box::pin(async move { Ok(answer.to_string()) }));

        let mut screens = MockScreenSessionRepository::new();
        screens
            .expect_begin()
            .withf(|device, tool| device == DEVICE && *tool == Tool::Ingredient)
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));
        screens
            .expect_finish()
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let info = service(llm, screens)
            .get_ingredient_info(IngredientQuery {
                device_id: DEVICE.to_string(),
                query: "E471".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(info.info, answer);
    }

    #[tokio::test]
    async fn places_search_without_location_is_rejected() {
        let mut screens = MockScreenSessionRepository::new();
        screens
            .expect_location()
            .withf(|device| device == DEVICE)
            .times(1)
            .returning(|_| Box::pin(async { Ok(LocationState::Unset) }));

        let result = service(MockLlmClient::new(), screens)
            .find_places_nearby(PlacesQuery {
                device_id: DEVICE.to_string(),
                query: "مطاعم حلال".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::LocationRequired)));
    }

    #[tokio::test]
    async fn places_search_unwraps_fenced_response() {
        let coordinates = Coordinates::new(24.7136, 46.6753).unwrap();

        let mut llm = MockLlmClient::new();
        llm.expect_generate_with_location()
            .withf(move |prompt, location| {
                prompt.contains("مطاعم حلال") && *location == coordinates
            })
            .times(1)
            .returning(|_, _| {
                Box::pin(async {
                    Ok("```json\n[{\"name\":\"مطعم البركة\",\"category\":\"مطعم\",\"distance\":\"500 متر\",\"mapsLink\":\"https://maps.google.com/?q=1\"}]\n```".to_string())
                })
            });

        let mut screens = MockScreenSessionRepository::new();
        screens
            .expect_location()
            .times(1)
            .returning(move |_| Box::pin(async move { Ok(LocationState::Acquired(coordinates)) }));
        screens
            .expect_begin()
            .withf(|device, tool| device == DEVICE && *tool == Tool::Places)
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));
        screens
            .expect_finish()
            .withf(|_, resolution| {
                matches!(
                    resolution,
                    ScreenResolution::Success(ToolResult::Places(places)) if places.len() == 1
                )
            })
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let places = service(llm, screens)
            .find_places_nearby(PlacesQuery {
                device_id: DEVICE.to_string(),
                query: "مطاعم حلال".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name, "مطعم البركة");
    }

    #[tokio::test]
    async fn places_no_results_prose_yields_empty_list_not_failure() {
        let coordinates = Coordinates::new(24.7136, 46.6753).unwrap();

        let mut llm = MockLlmClient::new();
        llm.expect_generate_with_location().times(1).returning(|_, _| {
            Box::pin(async { Ok("عذراً، لا توجد نتائج مطابقة لبحثك.".to_string()) })
        });

        let mut screens = MockScreenSessionRepository::new();
        screens
            .expect_location()
            .times(1)
            .returning(move |_| Box::pin(async move { Ok(LocationState::Acquired(coordinates)) }));
        screens
            .expect_begin()
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));
        screens
            .expect_finish()
            .withf(|_, resolution| {
                matches!(
                    resolution,
                    ScreenResolution::Success(ToolResult::Places(places)) if places.is_empty()
                )
            })
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let places = service(llm, screens)
            .find_places_nearby(PlacesQuery {
                device_id: DEVICE.to_string(),
                query: "شاورما".to_string(),
            })
            .await
            .unwrap();

        assert!(places.is_empty());
    }
}
