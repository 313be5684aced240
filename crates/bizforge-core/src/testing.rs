//! Shared test fixtures for the workspace.
//!
//! Downstream crates exercise the generation and persistence paths against a
//! fully populated plan; keeping the fixture here avoids each crate carrying
//! its own divergent copy.

use crate::plan::*;

/// A representative plan with every nested array populated.
pub fn sample_plan() -> StartupPlan {
    StartupPlan {
        blueprint: BusinessBlueprint {
            problem: "Small bakeries lose walk-in sales overnight".into(),
            solution: "Same-day surplus marketplace".into(),
            usp: "Inventory-aware discounting".into(),
            user_personas: vec![UserPersona {
                name: "Owner-operator".into(),
                description: "Runs a two-person storefront".into(),
                pain_points: vec!["Waste".into(), "No time for marketing".into()],
            }],
            market_research: MarketResearch {
                tam: "$4.1B".into(),
                sam: "$600M".into(),
                som: "$45M".into(),
                insight: "Surplus listings convert best within 2 hours of close".into(),
                citations: vec!["Food waste industry report 2025".into()],
            },
            pricing_strategy: "8% take rate on cleared inventory".into(),
            competitive_landscape: vec![CompetitorProfile {
                competitor: "Generic deals app".into(),
                weakness: "No inventory integration".into(),
                counter_advantage: "POS-synced stock levels".into(),
            }],
        },
        financials: Financials {
            revenue_model: "Transaction fees".into(),
            cost_structure: vec!["Cloud hosting".into(), "Payment processing".into()],
            unit_economics: UnitEconomics {
                cac: "$18".into(),
                ltv: "$240".into(),
                margin: "71%".into(),
            },
            projections: (1..=5)
                .map(|y| YearProjection {
                    year: format!("Year {y}"),
                    revenue: 100_000.0 * y as f64,
                    expenses: 80_000.0 * y as f64,
                    profit: 20_000.0 * y as f64,
                })
                .collect(),
        },
        branding: Branding {
            name: "CrumbShare".into(),
            tagline: "Nothing good goes stale".into(),
            positioning: "The surplus channel bakeries trust".into(),
            colors: vec![BrandColor {
                name: "Rye".into(),
                hex: "#8B5E3C".into(),
                usage: "Primary actions".into(),
            }],
            typography: Typography {
                primary: "Fraunces".into(),
                secondary: "Inter".into(),
            },
            logo_concept: "A wheat stalk forming an upward arrow".into(),
        },
        product: ProductArchitecture {
            user_flows: vec![FlowStep {
                step: "List surplus".into(),
                description: "Owner photographs remaining stock".into(),
            }],
            core_components: vec!["Listing service".into(), "Checkout".into()],
            tech_stack: TechStack {
                frontend: "React".into(),
                backend: "Axum".into(),
                database: "Postgres".into(),
                ai: "Gemini".into(),
            },
            database_schema: "listings(id, bakery_id, expires_at, price_cents)".into(),
        },
        code: MvpCode {
            frontend_snippet: "export function App() { return null; }".into(),
            backend_snippet: "async fn list() -> Json<Vec<Listing>> { todo!() }".into(),
            api_routes: vec!["GET /api/listings".into(), "POST /api/orders".into()],
            legal_doc: None,
        },
        pitch_deck: vec![PitchDeckSlide {
            title: "The waste problem".into(),
            content: "30% of baked goods are discarded".into(),
            visual_cue: "Overflowing bin beside full shelves".into(),
        }],
        gtm: GtmStrategy {
            channels: vec![GtmChannel {
                name: "Local partnerships".into(),
                strategy: "Sign the three busiest bakeries per district".into(),
            }],
            marketing_assets: vec!["Storefront sticker".into()],
            growth_loops: "Buyers recruit their favorite bakery".into(),
            launch_plan: vec!["Pilot district".into(), "City-wide".into()],
        },
        compliance: CompliancePolicy {
            region: "EU".into(),
            regulations: vec![Regulation {
                name: "Food labeling directive".into(),
                description: "Allergen disclosure on resold goods".into(),
                action_required: "Surface allergen fields on listings".into(),
            }],
            data_privacy_level: "GDPR".into(),
            risk_score: 3.5,
        },
        live_prototype_html: Some("<!doctype html><html></html>".into()),
    }
}
