//! Prompt construction for the generation endpoints.
//!
//! Templates are rendered with minijinja so the idea text never needs manual
//! escaping and the language selector is injected uniformly.

use minijinja::{Environment, context};
use once_cell::sync::Lazy;

use crate::error::Result;
use crate::language::Language;

static TEMPLATE_ENV: Lazy<Environment<'static>> = Lazy::new(Environment::new);

/// System instruction for full plan generation.
const PLAN_SYSTEM_INSTRUCTION: &str = r#"You are BizForge Core, an AI founder suite.

TASK:
Generate a COMPLETE, UNIQUE, and PRODUCTION-READY startup plan for: "{{ idea }}".
Target Language: {{ language }}.

CRITICAL INSTRUCTIONS:
1. **Production Code:** The 'code' section must contain REAL, WORKING boilerplate code, not placeholders.
2. **Live Prototype HTML:**
   - Generate a SINGLE, SELF-CONTAINED HTML string.
   - Use Tailwind CSS and React via CDN.
   - The design must be responsive, mobile-first, and high-fidelity.
   - Use Lucide icons or FontAwesome for visuals.
   - Include functional-looking UI components for the specific industry.
   - Use {{ language }} for display labels where applicable.

Output strictly valid JSON matching the schema."#;

/// User-turn content accompanying the plan system instruction.
const PLAN_CONTENTS: &str = r#"Startup Idea: "{{ idea }}". Language: {{ language }}."#;

/// Prompt for the one-sentence idea rewrite.
const IMPROVE_PROMPT: &str = r#"You are an expert startup consultant. Rewrite the following raw startup idea into a professional one-sentence business concept. Language: {{ language }}.

Raw Idea: "{{ idea }}"

Output only the improved text."#;

/// Prompt for brand imagery generation.
const ASSET_PROMPT: &str = r#"High-fidelity 3D abstract visual representing innovation and scalability for a tech brand called "{{ brand_name }}".
Futuristic aesthetic, clean whitespace, 8K, depth of field."#;

fn render(template: &str, idea: &str, language: Language) -> Result<String> {
    let rendered = TEMPLATE_ENV.render_str(
        template,
        context! { idea, language => language.to_string() },
    )?;
    Ok(rendered)
}

/// Renders the system instruction for plan generation.
pub fn plan_system_instruction(idea: &str, language: Language) -> Result<String> {
    render(PLAN_SYSTEM_INSTRUCTION, idea, language)
}

/// Renders the user-turn contents for plan generation.
pub fn plan_contents(idea: &str, language: Language) -> Result<String> {
    render(PLAN_CONTENTS, idea, language)
}

/// Renders the idea-improvement prompt.
pub fn improve_prompt(idea: &str, language: Language) -> Result<String> {
    render(IMPROVE_PROMPT, idea, language)
}

/// Renders the marketing-asset prompt for a brand name.
pub fn asset_prompt(brand_name: &str) -> Result<String> {
    let rendered = TEMPLATE_ENV.render_str(ASSET_PROMPT, context! { brand_name })?;
    Ok(rendered)
}
