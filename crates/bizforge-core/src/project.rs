//! Saved project records (the vault format).

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::language::Language;
use crate::plan::StartupPlan;

/// One saved idea/plan pair in the vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedProject {
    pub id: String,
    pub name: String,
    pub idea: String,
    pub language: Language,
    pub created_at: String,
    pub plan: StartupPlan,
}

impl SavedProject {
    /// Wraps a freshly generated plan. The project name is taken from the
    /// plan's brand name, falling back to a placeholder when the model left
    /// it empty.
    pub fn from_plan(idea: impl Into<String>, language: Language, plan: StartupPlan) -> Self {
        let name = if plan.branding.name.trim().is_empty() {
            "Untitled Project".to_string()
        } else {
            plan.branding.name.clone()
        };
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            idea: idea.into(),
            language,
            created_at: Utc::now().to_rfc3339(),
            plan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_plan;

    #[test]
    fn test_name_comes_from_branding() {
        let project = SavedProject::from_plan("surplus bread", Language::English, sample_plan());
        assert_eq!(project.name, "CrumbShare");
        assert_eq!(project.language, Language::English);
    }

    #[test]
    fn test_blank_brand_name_falls_back() {
        let mut plan = sample_plan();
        plan.branding.name = "  ".into();
        let project = SavedProject::from_plan("idea", Language::French, plan);
        assert_eq!(project.name, "Untitled Project");
    }

    #[test]
    fn test_vault_round_trip_preserves_nested_arrays() {
        let project = SavedProject::from_plan("surplus bread", Language::English, sample_plan());
        let json = serde_json::to_string(&project).unwrap();
        let restored: SavedProject = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, project);
        assert!(!restored.plan.blueprint.user_personas.is_empty());
        assert!(!restored.plan.blueprint.competitive_landscape.is_empty());
        assert!(!restored.plan.financials.projections.is_empty());
        assert!(!restored.plan.gtm.channels.is_empty());
        assert!(!restored.plan.compliance.regulations.is_empty());
    }
}
