//! Response schema for plan generation.
//!
//! The generation endpoint is asked for JSON constrained by this schema. It
//! mirrors [`crate::plan::StartupPlan`] field-for-field in the generation
//! API's schema dialect (uppercase type tags). The schema is strict about
//! shape - object/array/string/number - but does not enumerate allowed string
//! values; content is open text.
//!
//! `code.legalDoc` is deliberately absent: it is a client-side constant, not
//! model output to validate.

use serde_json::{Value, json};

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn number() -> Value {
    json!({ "type": "NUMBER" })
}

fn string_array() -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" } })
}

/// Builds the full response schema for a [`crate::plan::StartupPlan`].
pub fn startup_plan_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "blueprint": {
                "type": "OBJECT",
                "properties": {
                    "problem": string(),
                    "solution": string(),
                    "usp": string(),
                    "userPersonas": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "name": string(),
                                "description": string(),
                                "painPoints": string_array(),
                            }
                        }
                    },
                    "marketResearch": {
                        "type": "OBJECT",
                        "properties": {
                            "tam": string(),
                            "sam": string(),
                            "som": string(),
                            "insight": string(),
                            "citations": string_array(),
                        }
                    },
                    "pricingStrategy": string(),
                    "competitiveLandscape": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "competitor": string(),
                                "weakness": string(),
                                "counterAdvantage": string(),
                            }
                        }
                    },
                }
            },
            "financials": {
                "type": "OBJECT",
                "properties": {
                    "revenueModel": string(),
                    "costStructure": string_array(),
                    "unitEconomics": {
                        "type": "OBJECT",
                        "properties": {
                            "cac": string(),
                            "ltv": string(),
                            "margin": string(),
                        }
                    },
                    "projections": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "year": string(),
                                "revenue": number(),
                                "expenses": number(),
                                "profit": number(),
                            }
                        }
                    },
                }
            },
            "branding": {
                "type": "OBJECT",
                "properties": {
                    "name": string(),
                    "tagline": string(),
                    "positioning": string(),
                    "colors": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "name": string(),
                                "hex": string(),
                                "usage": string(),
                            }
                        }
                    },
                    "typography": {
                        "type": "OBJECT",
                        "properties": {
                            "primary": string(),
                            "secondary": string(),
                        }
                    },
                    "logoConcept": string(),
                }
            },
            "product": {
                "type": "OBJECT",
                "properties": {
                    "userFlows": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "step": string(),
                                "description": string(),
                            }
                        }
                    },
                    "coreComponents": string_array(),
                    "techStack": {
                        "type": "OBJECT",
                        "properties": {
                            "frontend": string(),
                            "backend": string(),
                            "database": string(),
                            "ai": string(),
                        }
                    },
                    "databaseSchema": string(),
                }
            },
            "code": {
                "type": "OBJECT",
                "properties": {
                    "frontendSnippet": string(),
                    "backendSnippet": string(),
                    "apiRoutes": string_array(),
                }
            },
            "pitchDeck": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": string(),
                        "content": string(),
                        "visualCue": string(),
                    }
                }
            },
            "gtm": {
                "type": "OBJECT",
                "properties": {
                    "channels": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "name": string(),
                                "strategy": string(),
                            }
                        }
                    },
                    "marketingAssets": string_array(),
                    "growthLoops": string(),
                    "launchPlan": string_array(),
                }
            },
            "compliance": {
                "type": "OBJECT",
                "properties": {
                    "region": string(),
                    "regulations": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "name": string(),
                                "description": string(),
                                "actionRequired": string(),
                            }
                        }
                    },
                    "dataPrivacyLevel": string(),
                    "riskScore": number(),
                }
            },
            "livePrototypeHtml": string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::StartupPlan;
    use crate::testing::sample_plan;

    #[test]
    fn test_schema_covers_every_plan_section() {
        let schema = startup_plan_response_schema();
        let properties = schema["properties"].as_object().unwrap();
        for section in [
            "blueprint",
            "financials",
            "branding",
            "product",
            "code",
            "pitchDeck",
            "gtm",
            "compliance",
            "livePrototypeHtml",
        ] {
            assert!(properties.contains_key(section), "missing {section}");
        }
    }

    #[test]
    fn test_schema_property_names_match_serde_names() {
        // Every schema property name must be a key serde produces, so a
        // schema-conforming response deserializes without renames.
        let schema = startup_plan_response_schema();
        let wire = serde_json::to_value(sample_plan()).unwrap();

        fn assert_aligned(schema_node: &serde_json::Value, wire_node: &serde_json::Value) {
            let Some(props) = schema_node["properties"].as_object() else {
                return;
            };
            let wire_obj = wire_node.as_object().expect("wire node must be an object");
            for (name, child_schema) in props {
                let Some(wire_child) = wire_obj.get(name) else {
                    panic!("schema property '{name}' not produced by serde");
                };
                match child_schema["type"].as_str() {
                    Some("OBJECT") => assert_aligned(child_schema, wire_child),
                    Some("ARRAY") => {
                        if let Some(first) = wire_child.as_array().and_then(|a| a.first()) {
                            assert_aligned(&child_schema["items"], first);
                        }
                    }
                    _ => {}
                }
            }
        }

        assert_aligned(&schema, &wire);
    }

    #[test]
    fn test_schema_conforming_payload_deserializes() {
        // A payload shaped exactly like the schema (no legalDoc) must parse.
        let mut wire = serde_json::to_value(sample_plan()).unwrap();
        wire["code"].as_object_mut().unwrap().remove("legalDoc");
        let plan: StartupPlan = serde_json::from_value(wire).unwrap();
        assert!(plan.code.legal_doc.is_none());
    }

    #[test]
    fn test_legal_doc_not_in_schema() {
        let schema = startup_plan_response_schema();
        let code_props = schema["properties"]["code"]["properties"].as_object().unwrap();
        assert!(!code_props.contains_key("legalDoc"));
    }
}
