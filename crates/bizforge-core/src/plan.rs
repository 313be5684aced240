//! The startup plan data model.
//!
//! `StartupPlan` is the root artifact of one generation call. The field names
//! serialize camelCase because the wire contract with the generation endpoint
//! and the persisted vault format share this serde shape.
//!
//! A plan is treated as immutable once produced: callers replace the whole
//! object on a new generation rather than mutating fields. The one exception
//! is `code.legal_doc`, which the generation call fills in client-side after
//! the model output has been parsed.

use serde::{Deserialize, Serialize};

/// The root artifact returned by one plan generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupPlan {
    pub blueprint: BusinessBlueprint,
    pub financials: Financials,
    pub branding: Branding,
    pub product: ProductArchitecture,
    pub code: MvpCode,
    pub pitch_deck: Vec<PitchDeckSlide>,
    pub gtm: GtmStrategy,
    pub compliance: CompliancePolicy,
    /// Single self-contained HTML document embedding a runnable prototype UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_prototype_html: Option<String>,
}

/// Problem/solution framing, personas, market research and competition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessBlueprint {
    pub problem: String,
    pub solution: String,
    pub usp: String,
    pub user_personas: Vec<UserPersona>,
    pub market_research: MarketResearch,
    pub pricing_strategy: String,
    pub competitive_landscape: Vec<CompetitorProfile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPersona {
    pub name: String,
    pub description: String,
    pub pain_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketResearch {
    pub tam: String,
    pub sam: String,
    pub som: String,
    pub insight: String,
    pub citations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorProfile {
    pub competitor: String,
    pub weakness: String,
    pub counter_advantage: String,
}

/// Revenue model, cost structure, unit economics and yearly projections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Financials {
    pub revenue_model: String,
    pub cost_structure: Vec<String>,
    pub unit_economics: UnitEconomics,
    pub projections: Vec<YearProjection>,
}

impl Financials {
    /// Returns the projection for the given zero-based year index.
    ///
    /// The model is asked for at least five projection years, but consumers
    /// must treat missing indices as absent rather than zero.
    pub fn projection(&self, index: usize) -> Option<&YearProjection> {
        self.projections.get(index)
    }
}

/// CAC/LTV/margin as display strings, exactly as the model emits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitEconomics {
    pub cac: String,
    pub ltv: String,
    pub margin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearProjection {
    /// Display label for the year ("Year 1", "2027", ...).
    pub year: String,
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
}

/// Brand identity: naming, palette, typography and logo direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    pub name: String,
    pub tagline: String,
    pub positioning: String,
    pub colors: Vec<BrandColor>,
    pub typography: Typography,
    pub logo_concept: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandColor {
    pub name: String,
    pub hex: String,
    pub usage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub primary: String,
    pub secondary: String,
}

/// User flows, core components and the proposed technical foundation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductArchitecture {
    pub user_flows: Vec<FlowStep>,
    pub core_components: Vec<String>,
    pub tech_stack: TechStack,
    /// Free-text description of the proposed database schema.
    pub database_schema: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowStep {
    pub step: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechStack {
    pub frontend: String,
    pub backend: String,
    pub database: String,
    pub ai: String,
}

/// Boilerplate code produced by the model plus the client-side legal doc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MvpCode {
    pub frontend_snippet: String,
    pub backend_snippet: String,
    pub api_routes: Vec<String>,
    /// Appended client-side after generation; never model output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_doc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchDeckSlide {
    pub title: String,
    pub content: String,
    pub visual_cue: String,
}

/// Go-to-market channels, assets and launch sequencing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GtmStrategy {
    pub channels: Vec<GtmChannel>,
    pub marketing_assets: Vec<String>,
    pub growth_loops: String,
    pub launch_plan: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GtmChannel {
    pub name: String,
    pub strategy: String,
}

/// Regional regulations and an overall risk estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompliancePolicy {
    pub region: String,
    pub regulations: Vec<Regulation>,
    pub data_privacy_level: String,
    pub risk_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Regulation {
    pub name: String,
    pub description: String,
    pub action_required: String,
}
