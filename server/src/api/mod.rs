pub mod categories;
pub mod favorites;
pub mod ping;
pub mod recipes;
pub mod tags;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, OpenApi, ToSchema};

use cocotte_core::Language;

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Display-language selector shared by the read endpoints.
#[derive(Debug, Deserialize, IntoParams)]
pub struct LangParam {
    /// Display language code (en, es, fr, nl). Defaults to en; unknown
    /// codes fall back to the default rather than erroring.
    pub lang: Option<String>,
}

impl LangParam {
    pub fn language(&self) -> Language {
        self.lang.as_deref().and_then(Language::from_str).unwrap_or_default()
    }
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Base spec with shared components
    #[derive(OpenApi)]
    #[openapi(components(schemas(ErrorResponse)))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    // Merge in each module's spec
    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        recipes::ApiDoc::openapi(),
        tags::ApiDoc::openapi(),
        categories::ApiDoc::openapi(),
        favorites::ApiDoc::openapi(),
        ping::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        // Merge paths
        spec.paths.paths.extend(module_spec.paths.paths);

        // Merge components (schemas)
        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_param_defaults_and_falls_back() {
        assert_eq!(LangParam { lang: None }.language(), Language::En);
        assert_eq!(LangParam { lang: Some("fr".to_string()) }.language(), Language::Fr);
        assert_eq!(LangParam { lang: Some("zz".to_string()) }.language(), Language::En);
    }

    #[test]
    fn test_openapi_spec_includes_all_routes() {
        let spec = openapi();
        for path in [
            "/api/recipes",
            "/api/recipes/{id}",
            "/api/recipes/by-slug/{lang}/{slug}",
            "/api/recipes/paths",
            "/api/recipes/{id}/view",
            "/api/tags",
            "/api/categories",
            "/api/users/{user_id}/favorites/{recipe_id}",
            "/api/ping",
        ] {
            assert!(spec.paths.paths.contains_key(path), "missing path: {path}");
        }
    }
}
